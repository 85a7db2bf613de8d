use std::path::PathBuf;

use covid_report::DatasetInfoReport;

/// Which mapping the `info` report summarizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportScope {
    /// Loaded tables keyed by file name.
    LoadedFiles,
    /// Every logical dataset, absent ones included.
    AllDatasets,
}

#[derive(Debug)]
pub struct InfoResult {
    pub data_dir: PathBuf,
    pub scope: ReportScope,
    pub report: DatasetInfoReport,
    pub absent: Vec<AbsentDataset>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsentDataset {
    pub file_name: &'static str,
    pub var_name: &'static str,
    pub status: &'static str,
    pub reason: Option<String>,
}
