//! Per-table summary rows.

use polars::prelude::DataFrame;
use serde::{Serialize, Serializer};

use crate::report::DatasetInfoReport;

/// Sentinel for computed fields of an absent table.
pub const NOT_APPLICABLE: &str = "N/A";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Summary of one named table, or of its absence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetInfo {
    #[serde(rename = "Dataset")]
    pub dataset: String,
    #[serde(rename = "Rows", serialize_with = "value_or_na")]
    pub rows: Option<usize>,
    #[serde(rename = "Columns", serialize_with = "value_or_na")]
    pub columns: Option<usize>,
    #[serde(rename = "Memory (MB)", serialize_with = "value_or_na")]
    pub memory_mb: Option<f64>,
    #[serde(rename = "Columns List", serialize_with = "value_or_na")]
    pub columns_list: Option<String>,
}

impl DatasetInfo {
    /// Summarizes a loaded table.
    pub fn from_frame(dataset: impl Into<String>, df: &DataFrame) -> Self {
        let columns_list = df
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        Self {
            dataset: dataset.into(),
            rows: Some(df.height()),
            columns: Some(df.width()),
            memory_mb: Some(bytes_to_mb(df.estimated_size())),
            columns_list: Some(columns_list),
        }
    }

    /// Row for a table that was not loaded.
    pub fn absent(dataset: impl Into<String>) -> Self {
        Self {
            dataset: dataset.into(),
            rows: None,
            columns: None,
            memory_mb: None,
            columns_list: None,
        }
    }

    pub fn is_present(&self) -> bool {
        self.rows.is_some()
    }

    pub fn rows_cell(&self) -> String {
        cell_or_na(self.rows.map(|v| v.to_string()))
    }

    pub fn columns_cell(&self) -> String {
        cell_or_na(self.columns.map(|v| v.to_string()))
    }

    /// Memory formatted with two decimals.
    pub fn memory_cell(&self) -> String {
        cell_or_na(self.memory_mb.map(|v| format!("{v:.2}")))
    }

    pub fn columns_list_cell(&self) -> String {
        cell_or_na(self.columns_list.clone())
    }

    /// All five report cells, in report column order.
    pub fn cells(&self) -> [String; 5] {
        [
            self.dataset.clone(),
            self.rows_cell(),
            self.columns_cell(),
            self.memory_cell(),
            self.columns_list_cell(),
        ]
    }
}

fn cell_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

fn value_or_na<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Serialize,
    S: Serializer,
{
    match value {
        Some(value) => value.serialize(serializer),
        None => serializer.serialize_str(NOT_APPLICABLE),
    }
}

/// Converts a byte count to megabytes rounded to two decimals.
pub fn bytes_to_mb(bytes: usize) -> f64 {
    let mb = bytes as f64 / BYTES_PER_MB;
    (mb * 100.0).round() / 100.0
}

/// Summarizes every entry of a name → table-or-absent mapping, in order.
///
/// Accepts anything that iterates `(name, table)` pairs where the table is
/// `&DataFrame`, `Option<&DataFrame>` or `&Option<DataFrame>`.
pub fn get_dataset_info<'a, I, K, V>(entries: I) -> DatasetInfoReport
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<Option<&'a DataFrame>>,
{
    let rows = entries
        .into_iter()
        .map(|(name, df)| {
            let df: Option<&DataFrame> = df.into();
            match df {
                Some(df) => DatasetInfo::from_frame(name.as_ref(), df),
                None => DatasetInfo::absent(name.as_ref()),
            }
        })
        .collect();
    DatasetInfoReport::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::Column;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Column::new("A".into(), vec![1i64, 2]),
            Column::new("B".into(), vec![3i64, 4]),
        ])
        .unwrap()
    }

    #[test]
    fn test_bytes_to_mb_rounds() {
        assert_eq!(bytes_to_mb(0), 0.0);
        assert_eq!(bytes_to_mb(1024 * 1024), 1.0);
        assert_eq!(bytes_to_mb(1024 * 1024 + 6 * 1024), 1.01);
        assert_eq!(bytes_to_mb(5 * 1024 * 1024 / 2), 2.5);
    }

    #[test]
    fn test_from_frame() {
        let info = DatasetInfo::from_frame("a.csv", &frame());

        assert_eq!(info.dataset, "a.csv");
        assert_eq!(info.rows, Some(2));
        assert_eq!(info.columns, Some(2));
        assert_eq!(info.columns_list.as_deref(), Some("A, B"));
        assert!(info.memory_mb.is_some_and(|mb| mb >= 0.0));
    }

    #[test]
    fn test_absent_cells_are_sentinel() {
        let info = DatasetInfo::absent("b.csv");
        let cells = info.cells();

        assert!(!info.is_present());
        assert_eq!(cells[0], "b.csv");
        assert!(cells[1..].iter().all(|cell| cell == NOT_APPLICABLE));
    }

    #[test]
    fn test_memory_cell_two_decimals() {
        let info = DatasetInfo {
            memory_mb: Some(0.5),
            ..DatasetInfo::from_frame("a.csv", &frame())
        };
        assert_eq!(info.memory_cell(), "0.50");
    }

    #[test]
    fn test_empty_frame_has_empty_column_list() {
        let info = DatasetInfo::from_frame("test.csv", &DataFrame::empty());

        assert_eq!(info.rows, Some(0));
        assert_eq!(info.columns, Some(0));
        assert_eq!(info.columns_list.as_deref(), Some(""));
    }
}
