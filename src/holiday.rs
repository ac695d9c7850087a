use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One entry of the holiday list as it appears in the input file.
///
/// The date is kept verbatim so that a record survives a load/save cycle
/// unchanged, including entries whose date does not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Holiday {
    pub name: String,
    #[serde(rename = "holiday", alias = "date")]
    pub date: String,
    #[serde(rename = "holiday_note", alias = "note")]
    pub note: String,
}

impl Holiday {
    pub fn new(name: impl Into<String>, date: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            note: note.into(),
        }
    }

    /// The calendar date of this entry. Only the canonical zero-padded
    /// `YYYY-MM-DD` spelling counts; anything else is not a date.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .ok()
            .filter(|date| date.format(DATE_FORMAT).to_string() == self.date)
    }
}

/// Set of dates flagged as holidays. Absence means "not a holiday".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    dates: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dates<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        Self {
            dates: dates.into_iter().collect(),
        }
    }

    /// Build the calendar from input records. Only the date is used; repeated
    /// dates collapse into one entry and unparsable dates are ignored.
    pub fn from_records(records: &[Holiday]) -> Self {
        let mut calendar = Self::new();
        for record in records {
            match record.parsed_date() {
                Some(date) => calendar.add_holiday(date),
                None => tracing::debug!(
                    name = %record.name,
                    date = %record.date,
                    "ignoring holiday entry with unrecognised date"
                ),
            }
        }
        calendar
    }

    pub fn add_holiday(&mut self, date: NaiveDate) {
        self.dates.insert(date);
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

impl FromIterator<NaiveDate> for HolidayCalendar {
    fn from_iter<T: IntoIterator<Item = NaiveDate>>(iter: T) -> Self {
        Self::from_dates(iter)
    }
}
