use chrono::{Duration, NaiveDateTime};

use crate::event::CalendarEvent;

/// Most events the upcoming-events view will show.
pub const MAX_SHOWN: usize = 3;

/// Title prefix of declined meetings still present in the calendar.
const CANCELED_PREFIX: &str = "Canceled:";

/// Select the events worth showing in the upcoming-events view.
///
/// All-day events are kept while they started within the last day, so a
/// running all-day event stays visible. Timed events must start after `now`
/// and not carry the canceled marker. At most [`MAX_SHOWN`] events are
/// returned, in input order.
///
/// ```
/// use busy_calendar::upcoming::{upcoming_events, MAX_SHOWN};
/// use busy_calendar::CalendarEvent;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
/// let now = day.and_hms_opt(12, 0, 0).unwrap();
///
/// let events = vec![
///     CalendarEvent::new("Retro", day.and_hms_opt(9, 0, 0).unwrap(), now),
///     CalendarEvent::new("1:1", day.and_hms_opt(15, 0, 0).unwrap(), day.and_hms_opt(16, 0, 0).unwrap()),
///     CalendarEvent::new("Canceled: sync", day.and_hms_opt(17, 0, 0).unwrap(), day.and_hms_opt(18, 0, 0).unwrap()),
/// ];
///
/// let shown = upcoming_events(&events, now, true);
/// assert_eq!(shown.len(), 1);
/// assert_eq!(shown[0].title, "1:1");
/// ```
pub fn upcoming_events(
    events: &[CalendarEvent],
    now: NaiveDateTime,
    show_all_day: bool,
) -> Vec<&CalendarEvent> {
    let day_ago = now - Duration::days(1);

    events
        .iter()
        .filter(|event| {
            (show_all_day && event.is_all_day && event.start > day_ago)
                || (event.start > now && !event.title.starts_with(CANCELED_PREFIX))
        })
        .take(MAX_SHOWN)
        .collect()
}
