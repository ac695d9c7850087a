use anyhow::{Context, Result};
use monthly_tasks::config::{self, Command, RunConfig};
use monthly_tasks::{
    HolidayCalendar, WorkCalendar, collate_with_summary, load_holidays, load_templates,
    write_rows, write_rows_to_path,
};
use std::env;
use std::io;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(config: &RunConfig) -> Result<()> {
    let holidays = load_holidays(&config.holiday_path).context("failed to load holiday file")?;
    let templates = load_templates(&config.task_path).context("failed to load task file")?;

    let calendar = WorkCalendar::new(HolidayCalendar::from_records(&holidays));
    tracing::info!(
        month = %config.month,
        holidays = calendar.holidays().len(),
        templates = templates.len(),
        "generating tasks"
    );

    // Nothing is written unless every template resolved.
    let (rows, summary) = collate_with_summary(&templates, &config.month, &calendar)?;
    tracing::info!("collated ({})", summary.to_cli_summary());

    match &config.output_path {
        Some(path) => write_rows_to_path(&rows, path).context("failed to write output")?,
        None => write_rows(&rows, io::stdout().lock()).context("failed to write to stdout")?,
    }
    Ok(())
}

fn main() -> ExitCode {
    init_logging();

    let command = match config::parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", config::usage());
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            println!("{}", config::usage());
            ExitCode::SUCCESS
        }
        Command::Run(run_config) => match run(&run_config) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("error: {err:#}");
                ExitCode::FAILURE
            }
        },
    }
}
