use chrono::NaiveDateTime;

use crate::date;
use crate::error::{Error, Result};
use crate::event::{CalendarEvent, EventSource};
use crate::overview::BusyCalendar;

/// A calendar backend with no access to its events.
struct DeniedSource;

impl EventSource for DeniedSource {
    fn between(&self, _start: NaiveDateTime, _end: NaiveDateTime) -> Result<Vec<CalendarEvent>> {
        Err(Error::from_source("calendar access denied"))
    }
}

#[test]
fn source_failure_fails_the_month_build() {
    let cal = BusyCalendar::new(DeniedSource);

    assert!(matches!(
        cal.month_map(date!("2024-06-01")),
        Err(Error::Source(_)),
    ));
}

#[test]
fn source_failure_fails_the_week_build() {
    let cal = BusyCalendar::new(DeniedSource);
    assert!(matches!(cal.week_map(date!("2024-06-01")), Err(Error::Source(_))));
}

#[test]
fn source_failure_fails_the_render() {
    let cal = BusyCalendar::new(DeniedSource);
    assert!(cal.render_model(date!("2024-06-10")).is_err());
}

#[test]
fn source_errors_keep_their_message() {
    let err = Error::from_source("calendar access denied");
    assert_eq!(err.to_string(), "event source failed: calendar access denied");
}
