//! Error types for COVID-19 dataset ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or loading datasets.
///
/// Only [`IngestError::NoDatasetsLoaded`] escapes the loader; every other
/// variant is recorded per file as a failed load outcome.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// CSV file has no header row or no named columns.
    #[error("no columns to parse from file {path}")]
    EmptyCsv { path: PathBuf },

    /// A record has a different number of fields than the header.
    #[error("error tokenizing data in {path}: expected {expected} fields in line {line}, saw {found}")]
    RaggedRow {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },

    // === Loader Errors ===
    /// Not a single registry file could be loaded.
    #[error("No datasets were loaded from {path}")]
    NoDatasetsLoaded { path: PathBuf },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
