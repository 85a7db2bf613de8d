//! COVID-19 dataset CLI.

use clap::Parser;
use covid_cli::cli::{Cli, Command, InfoArgs, ReportFormatArg};
use covid_cli::commands::{render_report, run_datasets, run_info, write_report};
use covid_cli::logging::{LogConfig, init_logging};
use covid_cli::summary::print_info;

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = LogConfig::from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Info(args) => match info(&args) {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Datasets => match run_datasets() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
    };
    std::process::exit(exit_code);
}

fn info(args: &InfoArgs) -> anyhow::Result<()> {
    let result = run_info(args)?;
    match (&args.output, args.format) {
        (None, ReportFormatArg::Table) => print_info(&result),
        (None, format) => println!("{}", render_report(&result.report, format)?),
        (Some(path), format) => {
            let rendered = render_report(&result.report, format)?;
            write_report(path, &rendered)?;
            println!("Report written to {}", path.display());
        }
    }
    Ok(())
}
