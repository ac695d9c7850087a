use chrono::NaiveDate;
use monthly_tasks::{
    HolidayCalendar, MonthRange, OutputRow, ScheduleError, TaskTemplate, WorkCalendar, collate,
};

fn d(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn november() -> MonthRange {
    MonthRange::new(2025, 11).unwrap()
}

fn culture_day_calendar() -> WorkCalendar {
    WorkCalendar::new(HolidayCalendar::from_dates([d(2025, 11, 3)]))
}

fn rows_on(rows: &[OutputRow], date: NaiveDate) -> Vec<&OutputRow> {
    rows.iter().filter(|row| row.date == date).collect()
}

#[test]
fn task_name_breaks_ties_on_same_date_and_time() {
    let templates = vec![
        TaskTemplate::new("毎週水曜日", "Report").with_time("09:00"),
        TaskTemplate::new("毎週水曜日", "Backup").with_time("09:00"),
    ];
    let rows = collate(&templates, &november(), &WorkCalendar::default()).unwrap();

    let names: Vec<&str> = rows_on(&rows, d(2025, 11, 5))
        .iter()
        .map(|row| row.task_name.as_str())
        .collect();
    assert_eq!(names, vec!["Backup", "Report"]);
}

#[test]
fn rows_are_ordered_by_date_then_time() {
    let templates = vec![
        TaskTemplate::new("月末", "Close books").with_time("17:00"),
        TaskTemplate::new("毎日", "Standup").with_time("09:30"),
        TaskTemplate::new("月初", "Invoice").with_time("08:00"),
    ];
    let rows = collate(&templates, &november(), &culture_day_calendar()).unwrap();

    assert!(
        rows.windows(2)
            .all(|pair| (pair[0].date, &pair[0].time) <= (pair[1].date, &pair[1].time))
    );
    let first_day: Vec<&str> = rows_on(&rows, d(2025, 11, 4))
        .iter()
        .map(|row| row.task_name.as_str())
        .collect();
    assert_eq!(first_day, vec!["Invoice", "Standup"]);
    let last_day: Vec<&str> = rows_on(&rows, d(2025, 11, 28))
        .iter()
        .map(|row| row.task_name.as_str())
        .collect();
    assert_eq!(last_day, vec!["Standup", "Close books"]);
}

#[test]
fn identical_keys_keep_template_order() {
    let templates = vec![
        TaskTemplate::new("月初", "Check mail")
            .with_time("09:00")
            .with_note("first"),
        TaskTemplate::new("月初", "Check mail")
            .with_time("09:00")
            .with_note("second"),
    ];
    let rows = collate(&templates, &november(), &WorkCalendar::default()).unwrap();
    let notes: Vec<&str> = rows.iter().map(|row| row.task_note.as_str()).collect();
    assert_eq!(notes, vec!["first", "second"]);
}

#[test]
fn weekly_shift_produces_row_in_previous_month() {
    let templates = vec![TaskTemplate::new("weekly on monday", "Weekly sync").with_time("10:00")];
    let rows = collate(&templates, &november(), &culture_day_calendar()).unwrap();
    let dates: Vec<NaiveDate> = rows.iter().map(|row| row.date).collect();
    assert_eq!(
        dates,
        vec![d(2025, 10, 31), d(2025, 11, 10), d(2025, 11, 17), d(2025, 11, 24)]
    );
}

#[test]
fn rows_carry_template_fields_and_empty_actual_time() {
    let template = TaskTemplate::new("月初", "Invoice")
        .with_time("08:00")
        .with_estimated_time("1:00")
        .with_project("Accounting")
        .with_note("send to finance");
    let rows = collate(&[template], &november(), &culture_day_calendar()).unwrap();
    assert_eq!(
        rows,
        vec![OutputRow {
            date: d(2025, 11, 4),
            time: "08:00".into(),
            estimated_time: "1:00".into(),
            actual_time: String::new(),
            project: "Accounting".into(),
            task_name: "Invoice".into(),
            task_note: "send to finance".into(),
        }]
    );
}

#[test]
fn unknown_weekday_skips_only_that_template() {
    let templates = vec![
        TaskTemplate::new("毎週祝日", "Broken"),
        TaskTemplate::new("月末", "Close books"),
    ];
    let rows = collate(&templates, &november(), &WorkCalendar::default()).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].task_name, "Close books");
}

#[test]
fn unsupported_rule_aborts_collation() {
    let templates = vec![
        TaskTemplate::new("毎日", "Standup"),
        TaskTemplate::new("every quarter", "Audit"),
        TaskTemplate::new("月末", "Close books"),
    ];
    let err = collate(&templates, &november(), &WorkCalendar::default()).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::UnsupportedRule {
            task_name: "Audit".into(),
            tag: "every quarter".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported repeat rule 'every quarter' (task: Audit)"
    );
}

#[test]
fn empty_template_list_yields_no_rows() {
    let rows = collate(&[], &november(), &WorkCalendar::default()).unwrap();
    assert!(rows.is_empty());
}

#[test]
fn collate_is_repeatable() {
    let templates = vec![
        TaskTemplate::new("毎日", "Standup").with_time("09:30"),
        TaskTemplate::new("毎週月曜日", "Weekly sync").with_time("10:00"),
        TaskTemplate::new("月初", "Invoice").with_time("08:00"),
    ];
    let cal = culture_day_calendar();
    assert_eq!(
        collate(&templates, &november(), &cal).unwrap(),
        collate(&templates, &november(), &cal).unwrap()
    );
}
