//! The summary report table and its exports.

use polars::prelude::{Column, CsvWriter, DataFrame, PolarsResult, SerWriter};
use serde::Serialize;

use crate::info::DatasetInfo;

/// Report column names, in output order.
pub const REPORT_COLUMNS: [&str; 5] = ["Dataset", "Rows", "Columns", "Memory (MB)", "Columns List"];

/// One [`DatasetInfo`] row per summarized entry, in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DatasetInfoReport {
    rows: Vec<DatasetInfo>,
}

impl DatasetInfoReport {
    pub fn new(rows: Vec<DatasetInfo>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DatasetInfo> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[DatasetInfo] {
        &self.rows
    }

    /// First row for `dataset`.
    pub fn get(&self, dataset: &str) -> Option<&DatasetInfo> {
        self.rows.iter().find(|info| info.dataset == dataset)
    }

    pub fn present_count(&self) -> usize {
        self.rows.iter().filter(|info| info.is_present()).count()
    }

    /// Report as a DataFrame with [`REPORT_COLUMNS`].
    ///
    /// Every column holds strings so numbers and the `N/A` sentinel share
    /// a column.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let mut values: [Vec<String>; 5] = Default::default();
        for info in &self.rows {
            for (column, cell) in values.iter_mut().zip(info.cells()) {
                column.push(cell);
            }
        }
        let columns: Vec<Column> = REPORT_COLUMNS
            .iter()
            .zip(values)
            .map(|(name, cells)| Column::new((*name).into(), cells))
            .collect();
        DataFrame::new(columns)
    }

    /// Report as CSV text with a header row.
    pub fn to_csv_string(&self) -> PolarsResult<String> {
        let mut df = self.to_frame()?;
        let mut buffer: Vec<u8> = Vec::new();
        CsvWriter::new(&mut buffer)
            .include_header(true)
            .finish(&mut df)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Report as pretty-printed JSON records.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a DatasetInfoReport {
    type Item = &'a DatasetInfo;
    type IntoIter = std::slice::Iter<'a, DatasetInfo>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::info::NOT_APPLICABLE;

    fn sample_report() -> DatasetInfoReport {
        DatasetInfoReport::new(vec![
            DatasetInfo {
                dataset: "a.csv".to_string(),
                rows: Some(2),
                columns: Some(2),
                memory_mb: Some(0.0),
                columns_list: Some("A, B".to_string()),
            },
            DatasetInfo::absent("b.csv"),
        ])
    }

    #[test]
    fn test_to_frame_schema_and_cells() {
        let df = sample_report().to_frame().unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, REPORT_COLUMNS.to_vec());
        assert_eq!(df.height(), 2);

        let rows = df.column("Rows").unwrap().str().unwrap();
        assert_eq!(rows.get(0), Some("2"));
        assert_eq!(rows.get(1), Some(NOT_APPLICABLE));

        let list = df.column("Columns List").unwrap().str().unwrap();
        assert_eq!(list.get(0), Some("A, B"));
    }

    #[test]
    fn test_empty_report_keeps_schema() {
        let df = DatasetInfoReport::default().to_frame().unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), REPORT_COLUMNS.len());
    }

    #[test]
    fn test_to_csv_string() {
        let csv = sample_report().to_csv_string().unwrap();
        let mut lines = csv.lines();

        assert_eq!(
            lines.next(),
            Some("Dataset,Rows,Columns,Memory (MB),Columns List")
        );
        assert_eq!(lines.next(), Some("a.csv,2,2,0.00,\"A, B\""));
        assert_eq!(lines.next(), Some("b.csv,N/A,N/A,N/A,N/A"));
    }

    #[test]
    fn test_to_json_string_uses_sentinel() {
        let json = sample_report().to_json_string().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["Rows"], 2);
        assert_eq!(value[0]["Columns List"], "A, B");
        assert_eq!(value[1]["Memory (MB)"], NOT_APPLICABLE);
    }

    #[test]
    fn test_get_and_counts() {
        let report = sample_report();

        assert_eq!(report.len(), 2);
        assert_eq!(report.present_count(), 1);
        assert!(report.get("b.csv").is_some_and(|info| !info.is_present()));
        assert!(report.get("c.csv").is_none());
    }
}
