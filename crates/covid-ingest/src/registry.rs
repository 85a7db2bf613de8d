//! The fixed set of dataset files the loader looks for.

use std::path::{Path, PathBuf};

/// One expected CSV file and the logical name it is exposed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// File name inside the data directory.
    pub file_name: &'static str,
    /// Logical name; matches a field of [`crate::CovidData`].
    pub var_name: &'static str,
}

impl DatasetSpec {
    const fn new(file_name: &'static str, var_name: &'static str) -> Self {
        Self {
            file_name,
            var_name,
        }
    }

    /// Location of this file under `data_dir`.
    pub fn path_in(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(self.file_name)
    }
}

/// Registry of dataset files, in load order.
pub static DATASET_REGISTRY: [DatasetSpec; 11] = [
    DatasetSpec::new("seoul_floating.csv", "seoul"),
    DatasetSpec::new("time_age.csv", "timeage"),
    DatasetSpec::new("search_trend.csv", "searchtrend"),
    DatasetSpec::new("time_province.csv", "time_province"),
    DatasetSpec::new("weather.csv", "weather"),
    DatasetSpec::new("patient_info.csv", "patientinfo"),
    DatasetSpec::new("region.csv", "region"),
    DatasetSpec::new("time_gender.csv", "timegender"),
    DatasetSpec::new("policy.csv", "policy"),
    DatasetSpec::new("case.csv", "case"),
    DatasetSpec::new("time.csv", "time"),
];

/// Looks up a registry entry by file name.
pub fn spec_for_file(file_name: &str) -> Option<&'static DatasetSpec> {
    DATASET_REGISTRY
        .iter()
        .find(|spec| spec.file_name == file_name)
}

/// Looks up a registry entry by logical name.
pub fn spec_for_var(var_name: &str) -> Option<&'static DatasetSpec> {
    DATASET_REGISTRY
        .iter()
        .find(|spec| spec.var_name == var_name)
}

/// Default data directory: `data/` at the workspace root.
pub fn default_data_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/covid-ingest -> workspace root
    let root = manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir);
    root.join("data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_var_names_are_unique() {
        let names: BTreeSet<&str> = DATASET_REGISTRY.iter().map(|s| s.var_name).collect();
        assert_eq!(names.len(), DATASET_REGISTRY.len());
    }

    #[test]
    fn test_file_names_are_unique_csv() {
        let files: BTreeSet<&str> = DATASET_REGISTRY.iter().map(|s| s.file_name).collect();
        assert_eq!(files.len(), DATASET_REGISTRY.len());
        assert!(files.iter().all(|f| f.ends_with(".csv")));
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(DATASET_REGISTRY[0].file_name, "seoul_floating.csv");
        assert_eq!(DATASET_REGISTRY[10].var_name, "time");
    }

    #[test]
    fn test_lookups() {
        assert_eq!(spec_for_file("case.csv").map(|s| s.var_name), Some("case"));
        assert_eq!(
            spec_for_var("patientinfo").map(|s| s.file_name),
            Some("patient_info.csv")
        );
        assert!(spec_for_file("missing.csv").is_none());
    }

    #[test]
    fn test_default_data_dir_ends_with_data() {
        assert!(default_data_dir().ends_with("data"));
    }
}
