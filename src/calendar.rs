use crate::holiday::HolidayCalendar;
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Business-day predicate: a date is a working day unless it falls on a
/// weekend or on one of the calendar's holidays.
///
/// The weekend is fixed to Saturday and Sunday.
#[derive(Debug, Clone, Default)]
pub struct WorkCalendar {
    holidays: HolidayCalendar,
}

impl WorkCalendar {
    pub fn new(holidays: HolidayCalendar) -> Self {
        Self { holidays }
    }

    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    pub fn is_weekend(date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.is_holiday(date)
    }

    /// Check if a date is a working day
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        !Self::is_weekend(date) && !self.is_holiday(date)
    }

    /// Find the nearest business day strictly before `from`.
    ///
    /// The scan has no explicit bound. It terminates because the holiday set is
    /// finite and every week has weekdays; a calendar flagging an unbounded run
    /// of consecutive days is outside what this type supports.
    pub fn previous_business_day(&self, from: NaiveDate) -> NaiveDate {
        let mut current = from - Duration::days(1);
        while !self.is_business_day(current) {
            current = current - Duration::days(1);
        }
        current
    }

    /// Get all business days in a closed date range
    pub fn business_days_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut days = Vec::new();
        let mut current = start;

        while current <= end {
            if self.is_business_day(current) {
                days.push(current);
            }
            current = current + Duration::days(1);
        }
        days
    }
}
