pub mod calendar;
pub mod config;
pub mod files;
pub mod holiday;
pub mod month;
pub mod occurrence;
pub mod rule;
pub mod schedule;
pub mod template;

pub use calendar::WorkCalendar;
pub use config::{Command, ConfigError, RunConfig};
pub use files::{
    FileFormat, LoadError, load_holidays, load_templates, save_holidays, write_rows,
    write_rows_to_path,
};
pub use holiday::{Holiday, HolidayCalendar};
pub use month::{MonthParseError, MonthRange};
pub use occurrence::generate;
pub use rule::{RepeatRule, RuleError};
pub use schedule::{CollateSummary, OutputRow, ScheduleError, collate, collate_with_summary};
pub use template::TaskTemplate;
