use crate::rule::{RepeatRule, RuleError};
use serde::{Deserialize, Serialize};

/// A recurring task as written in the task file.
///
/// Everything except `repeat` is carried through to the output untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskTemplate {
    pub repeat: String,
    pub time: String,
    pub estimated_time: String,
    pub project: String,
    pub task_name: String,
    pub task_note: String,
}

impl TaskTemplate {
    pub fn new(repeat: impl Into<String>, task_name: impl Into<String>) -> Self {
        Self {
            repeat: repeat.into(),
            task_name: task_name.into(),
            ..Self::default()
        }
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.task_note = note.into();
        self
    }

    pub fn rule(&self) -> Result<RepeatRule, RuleError> {
        RepeatRule::parse(&self.repeat)
    }
}
