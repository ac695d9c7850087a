use crate::calendar::WorkCalendar;
use crate::month::MonthRange;
use crate::rule::RepeatRule;
use chrono::{Datelike, NaiveDate, Weekday};

/// Expand a repeat rule into the dates it falls on within `month`.
///
/// The result is in ascending order. A weekly occurrence that lands on a
/// holiday is moved to the previous business day, which may belong to the
/// month before `month`.
pub fn generate(rule: RepeatRule, month: &MonthRange, calendar: &WorkCalendar) -> Vec<NaiveDate> {
    match rule {
        RepeatRule::Daily => calendar.business_days_in_range(month.first(), month.last()),
        RepeatRule::MonthStart => month
            .days()
            .find(|date| calendar.is_business_day(*date))
            .into_iter()
            .collect(),
        RepeatRule::MonthEnd => month
            .days()
            .rev()
            .find(|date| calendar.is_business_day(*date))
            .into_iter()
            .collect(),
        RepeatRule::Weekly(weekday) => weekly(weekday, month, calendar),
    }
}

fn weekly(weekday: Weekday, month: &MonthRange, calendar: &WorkCalendar) -> Vec<NaiveDate> {
    month
        .days()
        .filter(|date| date.weekday() == weekday)
        .map(|date| {
            if calendar.is_holiday(date) {
                calendar.previous_business_day(date)
            } else {
                date
            }
        })
        .collect()
}
