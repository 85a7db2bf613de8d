//! CSV header normalization.

/// Header row and record count found by the structural pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvHeaders {
    /// Column names in file order.
    pub columns: Vec<String>,
    /// Number of data records after the header.
    pub data_rows: usize,
}

impl CsvHeaders {
    /// Builds headers from raw header fields, stripping a leading UTF-8 BOM.
    pub fn from_fields<'a, I>(fields: I, data_rows: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let columns = fields
            .into_iter()
            .enumerate()
            .map(|(idx, field)| {
                if idx == 0 {
                    strip_bom(field).to_string()
                } else {
                    field.to_string()
                }
            })
            .collect();
        Self { columns, data_rows }
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when the header names nothing usable (empty file or blank names).
    pub fn has_no_named_columns(&self) -> bool {
        self.columns.iter().all(|name| name.trim().is_empty())
    }
}

fn strip_bom(value: &str) -> &str {
    value.strip_prefix('\u{feff}').unwrap_or(value)
}
