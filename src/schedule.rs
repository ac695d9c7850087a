use crate::calendar::WorkCalendar;
use crate::holiday::DATE_FORMAT;
use crate::month::MonthRange;
use crate::occurrence;
use crate::rule::RuleError;
use crate::template::TaskTemplate;
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

/// One generated task instance, ready to be written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub date: NaiveDate,
    pub time: String,
    pub estimated_time: String,
    /// Left empty for manual entry after the fact.
    pub actual_time: String,
    pub project: String,
    pub task_name: String,
    pub task_note: String,
}

impl OutputRow {
    pub fn new(date: NaiveDate, template: &TaskTemplate) -> Self {
        Self {
            date,
            time: template.time.clone(),
            estimated_time: template.estimated_time.clone(),
            actual_time: String::new(),
            project: template.project.clone(),
            task_name: template.task_name.clone(),
            task_note: template.task_note.clone(),
        }
    }

    /// Fields in output column order.
    pub fn fields(&self) -> [String; 7] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.time.clone(),
            self.estimated_time.clone(),
            self.actual_time.clone(),
            self.project.clone(),
            self.task_name.clone(),
            self.task_note.clone(),
        ]
    }

    /// Date, then time of day, then task name.
    pub fn sort_key_cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.time.cmp(&other.time))
            .then_with(|| self.task_name.cmp(&other.task_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    UnsupportedRule { task_name: String, tag: String },
}

impl fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScheduleError::UnsupportedRule { task_name, tag } => write!(
                f,
                "unsupported repeat rule '{tag}' (task: {task_name})"
            ),
        }
    }
}

impl std::error::Error for ScheduleError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollateSummary {
    pub templates: usize,
    pub skipped: Vec<String>,
    pub rows: usize,
}

impl CollateSummary {
    pub fn to_cli_summary(&self) -> String {
        format!(
            "templates={} skipped={} rows={}",
            self.templates,
            self.skipped.len(),
            self.rows
        )
    }
}

/// Expand every template for `month` and return the rows in output order.
pub fn collate(
    templates: &[TaskTemplate],
    month: &MonthRange,
    calendar: &WorkCalendar,
) -> Result<Vec<OutputRow>, ScheduleError> {
    collate_with_summary(templates, month, calendar).map(|(rows, _)| rows)
}

/// Same as [`collate`], also reporting which templates were skipped.
///
/// A weekly template naming an unknown weekday is skipped with a warning. Any
/// other unrecognised repeat tag aborts the whole collation.
pub fn collate_with_summary(
    templates: &[TaskTemplate],
    month: &MonthRange,
    calendar: &WorkCalendar,
) -> Result<(Vec<OutputRow>, CollateSummary), ScheduleError> {
    let mut rows = Vec::new();
    let mut summary = CollateSummary {
        templates: templates.len(),
        ..CollateSummary::default()
    };

    for template in templates {
        let rule = match template.rule() {
            Ok(rule) => rule,
            Err(err @ RuleError::UnknownWeekday { .. }) => {
                tracing::warn!(task = %template.task_name, "{err}; skipping template");
                summary.skipped.push(template.task_name.clone());
                continue;
            }
            Err(RuleError::UnknownRule(tag)) => {
                return Err(ScheduleError::UnsupportedRule {
                    task_name: template.task_name.clone(),
                    tag,
                });
            }
        };

        let dates = occurrence::generate(rule, month, calendar);
        tracing::debug!(
            task = %template.task_name,
            rule = %rule,
            occurrences = dates.len(),
            "expanded template"
        );
        rows.extend(dates.into_iter().map(|date| OutputRow::new(date, template)));
    }

    // Stable, so rows with identical keys keep template order.
    rows.sort_by(OutputRow::sort_key_cmp);
    summary.rows = rows.len();
    Ok((rows, summary))
}
