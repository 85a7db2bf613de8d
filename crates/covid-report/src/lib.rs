//! Dataset summary reports.
//!
//! Summarizes any name → table-or-absent mapping into one row per entry:
//!
//! - **Dataset**: the entry name
//! - **Rows** / **Columns**: exact table shape
//! - **Memory (MB)**: estimated in-memory size, two decimals
//! - **Columns List**: column names joined by `", "`
//!
//! Absent entries carry [`NOT_APPLICABLE`] in every computed field.

mod info;
mod report;

pub use info::{DatasetInfo, NOT_APPLICABLE, bytes_to_mb, get_dataset_info};
pub use report::{DatasetInfoReport, REPORT_COLUMNS};
