use crate::month::{MonthParseError, MonthRange};
use std::fmt;
use std::path::PathBuf;

pub const DEFAULT_HOLIDAY_FILE: &str = "holiday.toml";
pub const DEFAULT_TASK_FILE: &str = "task.toml";

/// Options for a single run, taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub month: MonthRange,
    pub holiday_path: PathBuf,
    pub task_path: PathBuf,
    /// `None` writes to stdout.
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run(RunConfig),
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingMonth,
    InvalidMonth(MonthParseError),
    MissingValue(String),
    UnknownOption(String),
    UnexpectedArgument(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingMonth => {
                write!(f, "a target year-month (YYYYMM) is required, e.g. 202511")
            }
            ConfigError::InvalidMonth(err) => write!(f, "{err}"),
            ConfigError::MissingValue(option) => write!(f, "option {option} requires a value"),
            ConfigError::UnknownOption(option) => write!(f, "unknown option {option}"),
            ConfigError::UnexpectedArgument(arg) => write!(f, "unexpected argument '{arg}'"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<MonthParseError> for ConfigError {
    fn from(value: MonthParseError) -> Self {
        Self::InvalidMonth(value)
    }
}

impl RunConfig {
    pub fn new(month: MonthRange) -> Self {
        Self {
            month,
            holiday_path: PathBuf::from(DEFAULT_HOLIDAY_FILE),
            task_path: PathBuf::from(DEFAULT_TASK_FILE),
            output_path: None,
        }
    }
}

/// Parse arguments, excluding the program name.
pub fn parse_args<I, S>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut month: Option<String> = None;
    let mut holiday_path = None;
    let mut task_path = None;
    let mut output_path = None;

    let mut args = args.into_iter().map(Into::into);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" | "help" => return Ok(Command::Help),
            "--holidays" | "--tasks" | "--output" | "-o" => {
                let value = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                match arg.as_str() {
                    "--holidays" => holiday_path = Some(value),
                    "--tasks" => task_path = Some(value),
                    _ => output_path = Some(value),
                }
            }
            option if option.starts_with("--") => {
                return Err(ConfigError::UnknownOption(arg));
            }
            _ if month.is_none() => month = Some(arg),
            _ => return Err(ConfigError::UnexpectedArgument(arg)),
        }
    }

    let month = MonthRange::parse(&month.ok_or(ConfigError::MissingMonth)?)?;
    let mut config = RunConfig::new(month);
    if let Some(path) = holiday_path {
        config.holiday_path = path;
    }
    if let Some(path) = task_path {
        config.task_path = path;
    }
    config.output_path = output_path;
    Ok(Command::Run(config))
}

pub fn usage() -> String {
    format!(
        "Usage: cli <YYYYMM> [--holidays PATH] [--tasks PATH] [--output PATH]\n\n\
         Expands recurring task templates into dated rows for one month and\n\
         prints them as tab-separated lines.\n\n\
         Options:\n  \
         --holidays PATH   Holiday list (default: {DEFAULT_HOLIDAY_FILE})\n  \
         --tasks PATH      Task templates (default: {DEFAULT_TASK_FILE})\n  \
         -o, --output PATH Write rows to a file instead of stdout\n  \
         -h, --help        Show this help\n\n\
         Files ending in .json or .csv are read in that format; anything else is TOML."
    )
}
