mod errors;
mod free_days;
mod month;

use chrono::{Duration, NaiveDateTime};

use crate::event::{CalendarEvent, StaticSource};

#[macro_export]
macro_rules! date {
    ( $date: expr ) => {{
        use chrono::NaiveDate;
        NaiveDate::parse_from_str($date, "%Y-%m-%d").expect("invalid date literal")
    }};
}

#[macro_export]
macro_rules! datetime {
    ( $date: expr ) => {{
        use chrono::NaiveDateTime;
        NaiveDateTime::parse_from_str($date, "%Y-%m-%d %H:%M").expect("invalid datetime literal")
    }};
}

/// One-hour event starting at the given instant.
pub(crate) fn hour_event(title: &str, start: NaiveDateTime) -> CalendarEvent {
    CalendarEvent::new(title, start, start + Duration::hours(1))
}

/// Source holding a one-hour morning event per listed day.
pub(crate) fn days_source(titles_by_day: &[(&str, &str)]) -> StaticSource {
    StaticSource::from_events(titles_by_day.iter().map(|(date, title)| {
        hour_event(
            title,
            date!(date).and_hms_opt(9, 0, 0).expect("invalid fixture time"),
        )
    }))
}
