//! CSV file reading: strict structural pass, then Polars parsing.
//!
//! The structural pass re-emits every record into a normalized buffer, so
//! Polars never sees blank lines and the frame height always matches the
//! record count.

use std::fs::File;
use std::io::{self, BufReader, Cursor, Write};
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })
}

fn map_csv_error(path: &Path, err: ::csv::Error) -> IngestError {
    let message = err.to_string();
    match err.into_kind() {
        ::csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => IngestError::RaggedRow {
            path: path.to_path_buf(),
            line: pos.map(|p| p.line()).unwrap_or_default(),
            expected: expected_len as usize,
            found: len as usize,
        },
        ::csv::ErrorKind::Io(source) => IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Validates the file and copies its header and records to `out`.
///
/// Blank lines are skipped and a leading BOM is dropped; quoting is
/// re-applied where a field needs it.
fn scan_csv<W: Write>(path: &Path, out: W) -> Result<(CsvHeaders, W)> {
    let file = open_file(path)?;
    let mut reader = ::csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(BufReader::new(file));

    let header_fields: Vec<String> = reader
        .headers()
        .map_err(|e| map_csv_error(path, e))?
        .iter()
        .map(str::to_string)
        .collect();
    let mut headers = CsvHeaders::from_fields(header_fields.iter().map(String::as_str), 0);
    if headers.has_no_named_columns() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut writer = ::csv::Writer::from_writer(out);
    writer
        .write_record(&headers.columns)
        .map_err(|e| map_csv_error(path, e))?;
    for record in reader.records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        writer
            .write_record(&record)
            .map_err(|e| map_csv_error(path, e))?;
        headers.data_rows += 1;
    }

    let out = writer.into_inner().map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: io::Error::new(e.error().kind(), e.error().to_string()),
    })?;
    Ok((headers, out))
}

/// Reads the header and validates that every record has as many fields.
///
/// Fails with [`IngestError::EmptyCsv`] when there is no usable header and
/// with [`IngestError::RaggedRow`] on the first record whose width differs.
/// Blank lines are not records.
pub fn read_csv_schema(path: &Path) -> Result<CsvHeaders> {
    let (headers, _) = scan_csv(path, io::sink())?;
    Ok(headers)
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Column types are inferred from every record, so a value late in the
/// file that breaks an earlier numeric guess widens the column to strings
/// instead of failing. A header-only file yields an empty frame with one
/// string column per header name.
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    let (headers, normalized) = scan_csv(path, Vec::new())?;

    if headers.data_rows == 0 {
        debug!(
            path = %path.display(),
            columns = headers.len(),
            "CSV has a header but no records"
        );
        return empty_frame(&headers);
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(normalized))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if df.height() != headers.data_rows {
        return Err(IngestError::CsvParse {
            path: path.to_path_buf(),
            message: format!(
                "parsed {} rows but the file has {} records",
                df.height(),
                headers.data_rows
            ),
        });
    }

    debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "parsed CSV"
    );
    Ok(df)
}

fn empty_frame(headers: &CsvHeaders) -> Result<DataFrame> {
    let columns: Vec<Column> = headers
        .columns
        .iter()
        .map(|name| Column::new(name.as_str().into(), Vec::<String>::new()))
        .collect();
    Ok(DataFrame::new(columns)?)
}
