use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{debug, info, info_span};

use covid_ingest::{CovidLoader, DATASET_REGISTRY, LoadOutcome, LoadedData, default_data_dir};
use covid_report::{DatasetInfoReport, get_dataset_info};

use crate::cli::{InfoArgs, ReportFormatArg};
use crate::summary::{apply_table_style, build_report_table};
use crate::types::{AbsentDataset, InfoResult, ReportScope};

pub fn run_datasets() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["#", "File", "Variable"]);
    apply_table_style(&mut table);
    for (idx, spec) in DATASET_REGISTRY.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            spec.file_name.to_string(),
            spec.var_name.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

/// Loads the datasets and builds the summary report.
pub fn run_info(args: &InfoArgs) -> Result<InfoResult> {
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let span = info_span!("info", data_dir = %data_dir.display());
    let _guard = span.enter();

    let loaded = CovidLoader::new(&data_dir)
        .load()
        .context("load datasets")?;
    let scope = if args.all {
        ReportScope::AllDatasets
    } else {
        ReportScope::LoadedFiles
    };
    let report = match scope {
        ReportScope::LoadedFiles => get_dataset_info(&loaded.datasets),
        ReportScope::AllDatasets => get_dataset_info(loaded.data.entries()),
    };
    info!(
        loaded = loaded.datasets.len(),
        expected = DATASET_REGISTRY.len(),
        "summarized datasets"
    );

    Ok(InfoResult {
        data_dir,
        scope,
        absent: absent_datasets(&loaded),
        report,
    })
}

fn absent_datasets(loaded: &LoadedData) -> Vec<AbsentDataset> {
    loaded
        .absent()
        .map(|load| AbsentDataset {
            file_name: load.spec.file_name,
            var_name: load.spec.var_name,
            status: load.outcome.label(),
            reason: match &load.outcome {
                LoadOutcome::Failed(error) => Some(error.to_string()),
                LoadOutcome::Missing | LoadOutcome::Loaded { .. } => None,
            },
        })
        .collect()
}

/// Renders the report in a machine-readable or table format.
pub fn render_report(report: &DatasetInfoReport, format: ReportFormatArg) -> Result<String> {
    let rendered = match format {
        ReportFormatArg::Table => build_report_table(report).to_string(),
        ReportFormatArg::Csv => report.to_csv_string().context("render CSV report")?,
        ReportFormatArg::Json => report.to_json_string().context("render JSON report")?,
    };
    Ok(rendered)
}

/// Writes a rendered report to `path`.
pub fn write_report(path: &Path, rendered: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    fs::write(path, rendered).with_context(|| format!("write report {}", path.display()))?;
    debug!(path = %path.display(), bytes = rendered.len(), "wrote report");
    Ok(())
}
