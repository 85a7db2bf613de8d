//! Loads every registry dataset from a data directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use crate::bundle::CovidData;
use crate::collection::DatasetCollection;
use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};
use crate::registry::{DATASET_REGISTRY, DatasetSpec, default_data_dir};

/// What happened to one registry file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// Parsed into a table of the given shape.
    Loaded { rows: usize, columns: usize },
    /// No file at the expected path.
    Missing,
    /// The file exists but could not be read or parsed.
    Failed(IngestError),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }

    /// Short status label for reports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Loaded { .. } => "loaded",
            Self::Missing => "missing",
            Self::Failed(_) => "failed",
        }
    }
}

/// Outcome for a single registry entry.
#[derive(Debug)]
pub struct DatasetLoad {
    pub spec: &'static DatasetSpec,
    pub path: PathBuf,
    pub outcome: LoadOutcome,
}

/// Result of a successful load: at least one table was read.
#[derive(Debug)]
pub struct LoadedData {
    /// Loaded tables keyed by file name.
    pub datasets: DatasetCollection,
    /// Every registry dataset by logical name.
    pub data: CovidData,
    /// Per-file outcomes in registry order.
    pub outcomes: Vec<DatasetLoad>,
    data_dir: PathBuf,
}

impl LoadedData {
    /// Directory the files were read from.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Outcomes for registry files that did not load.
    pub fn absent(&self) -> impl Iterator<Item = &DatasetLoad> {
        self.outcomes.iter().filter(|load| !load.outcome.is_loaded())
    }

    pub fn into_parts(self) -> (DatasetCollection, CovidData) {
        (self.datasets, self.data)
    }
}

/// Reads the registry files from one directory.
#[derive(Debug, Clone)]
pub struct CovidLoader {
    data_dir: PathBuf,
}

impl Default for CovidLoader {
    fn default() -> Self {
        Self::new(default_data_dir())
    }
}

impl CovidLoader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Loads every registry file that exists and parses.
    ///
    /// Missing and malformed files are recorded as absent and logged. Fails
    /// with [`IngestError::NoDatasetsLoaded`] only when nothing loaded.
    pub fn load(&self) -> Result<LoadedData> {
        let span = info_span!("load_covid_data", data_dir = %self.data_dir.display());
        let _guard = span.enter();

        let mut datasets = DatasetCollection::new();
        let mut by_name: BTreeMap<&str, DataFrame> = BTreeMap::new();
        let mut outcomes = Vec::with_capacity(DATASET_REGISTRY.len());

        for spec in &DATASET_REGISTRY {
            let path = spec.path_in(&self.data_dir);
            let outcome = match load_one(spec, &path) {
                Ok(Some(df)) => {
                    let outcome = LoadOutcome::Loaded {
                        rows: df.height(),
                        columns: df.width(),
                    };
                    datasets.insert(spec.file_name, df.clone());
                    by_name.insert(spec.var_name, df);
                    outcome
                }
                Ok(None) => LoadOutcome::Missing,
                Err(error) => LoadOutcome::Failed(error),
            };
            outcomes.push(DatasetLoad {
                spec,
                path,
                outcome,
            });
        }

        if datasets.is_empty() {
            let error = IngestError::NoDatasetsLoaded {
                path: self.data_dir.clone(),
            };
            info!("{error}");
            return Err(error);
        }

        Ok(LoadedData {
            datasets,
            data: CovidData::from_loaded(by_name),
            outcomes,
            data_dir: self.data_dir.clone(),
        })
    }
}

/// Loads one file; `Ok(None)` when it does not exist.
///
/// A path whose existence cannot be determined is a failed load.
fn load_one(spec: &DatasetSpec, path: &Path) -> Result<Option<DataFrame>> {
    let result = match path.try_exists() {
        Ok(false) => {
            info!(
                file = spec.file_name,
                variable = spec.var_name,
                "Could not find '{}' to load into variable '{}'.",
                spec.file_name,
                spec.var_name
            );
            return Ok(None);
        }
        Ok(true) => read_csv_table(path),
        Err(source) => Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    };

    match result {
        Ok(df) => {
            info!(
                file = spec.file_name,
                variable = spec.var_name,
                rows = df.height(),
                columns = df.width(),
                "Successfully loaded '{}' into variable '{}'.",
                spec.file_name,
                spec.var_name
            );
            Ok(Some(df))
        }
        Err(error) => {
            info!(
                file = spec.file_name,
                variable = spec.var_name,
                error = %error,
                "Error loading '{}' into variable '{}': {}",
                spec.file_name,
                spec.var_name,
                error
            );
            Err(error)
        }
    }
}

/// Loads the registry datasets from the default data directory.
pub fn load_covid_data() -> Result<LoadedData> {
    CovidLoader::default().load()
}
