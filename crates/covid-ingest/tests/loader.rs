//! Tests for loading the dataset registry from a data directory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use covid_ingest::{CovidLoader, DATASET_REGISTRY, IngestError, LoadOutcome};
use polars::prelude::DataFrame;
use tempfile::TempDir;

fn write_csv(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("write csv");
}

fn write_mock_files(dir: &Path) {
    write_csv(dir, "case.csv", "id,case\n1,A\n2,B\n");
    write_csv(dir, "time.csv", "date,count\n2020-01-01,10\n2020-01-02,20\n");
    write_csv(dir, "policy.csv", "policy,date\nX,2020-01-01\nY,2020-01-02\n");
}

#[test]
fn loads_present_files() {
    let dir = TempDir::new().unwrap();
    write_mock_files(dir.path());

    let loaded = CovidLoader::new(dir.path()).load().expect("load");

    assert_eq!(loaded.datasets.len(), 3);
    assert!(loaded.datasets.iter().all(|(_, df)| df.height() == 2));
    assert!(loaded.data.case.is_some());
    assert!(loaded.data.time.is_some());
    assert!(loaded.data.policy.is_some());
    assert!(loaded.data.weather.is_none());
    assert_eq!(loaded.data.loaded_count(), 3);
    assert_eq!(loaded.data_dir(), dir.path());
}

#[test]
fn collection_follows_registry_order() {
    let dir = TempDir::new().unwrap();
    write_mock_files(dir.path());

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    let names: Vec<&str> = loaded.datasets.file_names().collect();
    assert_eq!(names, vec!["policy.csv", "case.csv", "time.csv"]);
}

#[test]
fn records_an_outcome_per_registry_file() {
    let dir = TempDir::new().unwrap();
    write_mock_files(dir.path());

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    assert_eq!(loaded.outcomes.len(), DATASET_REGISTRY.len());
    let case = loaded
        .outcomes
        .iter()
        .find(|load| load.spec.var_name == "case")
        .unwrap();
    assert!(matches!(
        case.outcome,
        LoadOutcome::Loaded {
            rows: 2,
            columns: 2
        }
    ));
    assert_eq!(loaded.absent().count(), DATASET_REGISTRY.len() - 3);
    assert!(
        loaded
            .absent()
            .all(|load| matches!(load.outcome, LoadOutcome::Missing))
    );
}

#[test]
fn empty_directory_fails_with_path() {
    let dir = TempDir::new().unwrap();

    let err = CovidLoader::new(dir.path()).load().unwrap_err();

    match err {
        IngestError::NoDatasetsLoaded { path } => assert_eq!(path, dir.path()),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_directory_fails_like_empty_directory() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");

    let err = CovidLoader::new(&missing).load().unwrap_err();

    assert!(matches!(err, IngestError::NoDatasetsLoaded { .. }));
    assert!(err.to_string().contains("does-not-exist"));
}

#[test]
fn all_files_malformed_fails() {
    let dir = TempDir::new().unwrap();
    write_csv(dir.path(), "case.csv", "");
    write_csv(dir.path(), "time.csv", "a,b\n1,2,3\n");

    let err = CovidLoader::new(dir.path()).load().unwrap_err();

    assert!(matches!(err, IngestError::NoDatasetsLoaded { .. }));
}

#[test]
fn corrupted_file_is_absent_others_load() {
    let dir = TempDir::new().unwrap();
    write_mock_files(dir.path());
    write_csv(
        dir.path(),
        "case.csv",
        "corrupted,data\n1,2,3\ncompletely,invalid,data,extra,columns",
    );

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    assert!(!loaded.datasets.contains("case.csv"));
    assert!(loaded.datasets.contains("time.csv"));
    assert!(loaded.datasets.contains("policy.csv"));
    assert!(loaded.data.case.is_none());

    let case = loaded
        .outcomes
        .iter()
        .find(|load| load.spec.file_name == "case.csv")
        .unwrap();
    assert!(matches!(
        case.outcome,
        LoadOutcome::Failed(IngestError::RaggedRow { .. })
    ));
}

#[test]
fn header_only_file_counts_as_loaded() {
    let dir = TempDir::new().unwrap();
    write_csv(dir.path(), "region.csv", "code,province,city\n");

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    let region = loaded.data.region.as_ref().expect("region loaded");
    assert_eq!(region.height(), 0);
    assert_eq!(region.width(), 3);
    assert_eq!(loaded.datasets.len(), 1);
}

#[test]
fn caller_binds_loaded_tables_into_own_scope() {
    let dir = TempDir::new().unwrap();
    write_mock_files(dir.path());

    let (_, data) = CovidLoader::new(dir.path()).load().unwrap().into_parts();
    let mut scope: HashMap<String, DataFrame> = HashMap::new();
    let bound = data.bind_into(&mut scope);

    assert_eq!(bound, 3);
    for name in ["case", "time", "policy"] {
        assert!(scope.contains_key(name), "{name} not bound");
    }
}

#[test]
fn late_type_change_still_loads() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::from("patient_id,contact_number\n");
    for i in 0..150 {
        contents.push_str(&format!("{i},{i}\n"));
    }
    contents.push_str("999,-\n");
    write_csv(dir.path(), "patient_info.csv", &contents);
    write_mock_files(dir.path());

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    let patients = loaded.data.patientinfo.as_ref().expect("patientinfo loaded");
    assert_eq!(patients.height(), 151);
    assert!(loaded.data.case.is_some());
}

#[test]
fn blank_lines_do_not_count_as_rows() {
    let dir = TempDir::new().unwrap();
    write_csv(dir.path(), "case.csv", "id,case\n1,A\n2,B\n\n\n");
    write_csv(dir.path(), "time.csv", "date,count\n2020-01-01,10\n\n2020-01-02,20\n");
    write_csv(dir.path(), "policy.csv", "policy\nX\n\nY\n");

    let loaded = CovidLoader::new(dir.path()).load().unwrap();

    for name in ["case.csv", "time.csv", "policy.csv"] {
        assert_eq!(loaded.datasets.get(name).map(DataFrame::height), Some(2), "{name}");
    }
    let case = loaded
        .outcomes
        .iter()
        .find(|load| load.spec.var_name == "case")
        .unwrap();
    assert!(matches!(case.outcome, LoadOutcome::Loaded { rows: 2, .. }));
}
