//! COVID-19 dataset ingestion.
//!
//! This crate reads a fixed registry of CSV files from a data directory into
//! Polars DataFrames.
//!
//! # Features
//!
//! - **Registry**: the eleven expected files and their logical names
//! - **CSV Loading**: strict structural check, then Polars parsing
//! - **Loader**: per-file outcomes, missing or malformed files become absent
//! - **Named Bundle**: [`CovidData`], one optional table per logical name
//!
//! # Example
//!
//! ```ignore
//! use covid_ingest::{CovidLoader, load_covid_data};
//!
//! // Default `data/` directory at the workspace root
//! let loaded = load_covid_data()?;
//! let cases = loaded.data.case.as_ref();
//!
//! // Explicit directory
//! let (datasets, data) = CovidLoader::new("/srv/covid/data").load()?.into_parts();
//! ```

mod bundle;
mod collection;
mod csv;
mod error;
mod loader;
mod registry;

// === Error Types ===
pub use error::{IngestError, Result};

// === Registry ===
pub use registry::{DATASET_REGISTRY, DatasetSpec, default_data_dir, spec_for_file, spec_for_var};

// === CSV Reading ===
pub use csv::{CsvHeaders, read_csv_schema, read_csv_table};

// === Loading ===
pub use bundle::CovidData;
pub use collection::DatasetCollection;
pub use loader::{CovidLoader, DatasetLoad, LoadOutcome, LoadedData, load_covid_data};
