use std::collections::HashSet;

use crate::event::CalendarEvent;

/// Title that marks a day as on-call, matched case-sensitively.
pub const ONCALL_TITLE: &str = "Oncall";

/// Busy and on-call flags derived for one calendar day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DayStatus {
    pub is_busy: bool,
    pub is_oncall: bool,
}

/// Derive the status of a day from the events it contains.
///
/// A day is *busy* when at least one event title is not in the blocklist,
/// and *on-call* when any event is titled exactly [`ONCALL_TITLE`]. An
/// empty or fully blocklisted event set leaves the day free.
///
/// ```
/// use std::collections::HashSet;
///
/// use busy_calendar::{classify, CalendarEvent, DayStatus, ONCALL_TITLE};
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap().and_hms_opt(9, 0, 0).unwrap();
/// let end = start + chrono::Duration::hours(1);
/// let blocklist = HashSet::from([ONCALL_TITLE.to_owned()]);
///
/// let oncall = CalendarEvent::new("Oncall", start, end);
/// let standup = CalendarEvent::new("Standup", start, end);
///
/// assert_eq!(
///     classify([&oncall], &blocklist),
///     DayStatus { is_busy: false, is_oncall: true },
/// );
///
/// assert_eq!(
///     classify([&standup, &oncall], &blocklist),
///     DayStatus { is_busy: true, is_oncall: true },
/// );
///
/// let no_events: Vec<CalendarEvent> = Vec::new();
/// assert_eq!(classify(&no_events, &blocklist), DayStatus::default());
/// ```
pub fn classify<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
    blocklist: &HashSet<String>,
) -> DayStatus {
    let mut status = DayStatus::default();

    for event in events {
        if event.title == ONCALL_TITLE {
            status.is_oncall = true;
        }

        if !blocklist.contains(&event.title) {
            status.is_busy = true;
        }
    }

    status
}
