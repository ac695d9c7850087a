use chrono::{Datelike, Duration, Months, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A single calendar month as the closed interval `[first, last]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthRange {
    first: NaiveDate,
    last: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    Format(String),
    OutOfRange(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::Format(input) => write!(
                f,
                "invalid year-month '{input}' (expected YYYYMM, e.g. 202511)"
            ),
            MonthParseError::OutOfRange(input) => {
                write!(f, "year-month '{input}' is not a valid calendar month")
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

impl MonthRange {
    /// Returns `None` when `month` is not in `1..=12` or the year is outside
    /// what chrono can represent.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let last = first.checked_add_months(Months::new(1))? - Duration::days(1);
        Some(Self { first, last })
    }

    /// Parse `YYYYMM` or `YYYY-MM`.
    pub fn parse(input: &str) -> Result<Self, MonthParseError> {
        let trimmed = input.trim();
        if !trimmed.is_ascii() {
            return Err(MonthParseError::Format(input.to_string()));
        }
        let (year, month) = match trimmed.len() {
            6 => (&trimmed[..4], &trimmed[4..]),
            7 if trimmed.as_bytes()[4] == b'-' => (&trimmed[..4], &trimmed[5..]),
            _ => return Err(MonthParseError::Format(input.to_string())),
        };
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(MonthParseError::Format(input.to_string()));
        }
        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::Format(input.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::Format(input.to_string()))?;
        Self::new(year, month).ok_or_else(|| MonthParseError::OutOfRange(input.to_string()))
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Number of days in the month, 28 to 31.
    pub fn day_count(&self) -> u32 {
        self.last.day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first <= date && date <= self.last
    }

    /// Every date of the month in ascending order.
    pub fn days(&self) -> impl DoubleEndedIterator<Item = NaiveDate> {
        let first = self.first;
        (0..i64::from(self.day_count())).map(move |offset| first + Duration::days(offset))
    }
}

impl FromStr for MonthRange {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}
