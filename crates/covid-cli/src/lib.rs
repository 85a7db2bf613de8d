//! CLI library components for the COVID-19 dataset tools.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
pub mod types;
