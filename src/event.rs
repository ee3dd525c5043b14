use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{Error, Result};

/// Hex color assigned to events created without an explicit calendar color.
pub const DEFAULT_CALENDAR_COLOR: &str = "#ffffff";

/// A single event pulled from the host calendar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub is_all_day: bool,
    /// Hex color of the calendar the event belongs to.
    pub calendar_color: String,
}

impl CalendarEvent {
    /// Create a timed event.
    ///
    /// ```
    /// use busy_calendar::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let event = CalendarEvent::new(
    ///     "Standup",
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(9, 30, 0).unwrap(),
    /// );
    ///
    /// assert!(!event.is_all_day);
    /// ```
    pub fn new(title: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            start,
            end,
            is_all_day: false,
            calendar_color: DEFAULT_CALENDAR_COLOR.to_owned(),
        }
    }

    /// Create an all-day event spanning the given date.
    pub fn all_day(title: impl Into<String>, date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN);
        let end = date
            .succ_opt()
            .expect("all-day event on the last supported date")
            .and_time(NaiveTime::MIN);

        Self { is_all_day: true, ..Self::new(title, start, end) }
    }

    /// Set the calendar color of the event.
    pub fn with_color(self, color: impl Into<String>) -> Self {
        Self { calendar_color: color.into(), ..self }
    }

    /// Short label for the event's time span, prefixed with the start day
    /// when the event does not start on `today`.
    ///
    /// ```
    /// use busy_calendar::CalendarEvent;
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let event = CalendarEvent::new(
    ///     "Standup",
    ///     day.and_hms_opt(9, 0, 0).unwrap(),
    ///     day.and_hms_opt(9, 30, 0).unwrap(),
    /// );
    ///
    /// assert_eq!(event.time_label(day), "09:00 - 09:30");
    /// assert_eq!(event.time_label(day.succ_opt().unwrap()), "3: 09:00 - 09:30");
    /// assert_eq!(CalendarEvent::all_day("Trip", day).time_label(day), "All Day");
    /// ```
    pub fn time_label(&self, today: NaiveDate) -> String {
        let time = if self.is_all_day {
            "All Day".to_owned()
        } else {
            format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
        };

        if self.start.date() == today {
            time
        } else {
            format!("{}: {}", self.start.day(), time)
        }
    }
}

/// Access to the host calendar, reduced to the one range query the pipeline
/// depends on.
pub trait EventSource {
    /// Return every event overlapping the half-open window `[start, end)`.
    fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<CalendarEvent>>;

    /// Events overlapping a single calendar day.
    fn events_on(&self, day: NaiveDate) -> Result<Vec<CalendarEvent>> {
        let next = day.succ_opt().ok_or(Error::DateOutOfRange(day))?;
        self.between(day.and_time(NaiveTime::MIN), next.and_time(NaiveTime::MIN))
    }
}

/// An [`EventSource`] backed by a plain in-memory event list.
#[derive(Clone, Debug, Default)]
pub struct StaticSource {
    events: Vec<CalendarEvent>,
}

impl StaticSource {
    /// Build a source from a list of events.
    ///
    /// ```
    /// use busy_calendar::{CalendarEvent, EventSource, StaticSource};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    /// let source = StaticSource::from_events([CalendarEvent::all_day("Trip", day)]);
    ///
    /// assert_eq!(source.events_on(day).unwrap().len(), 1);
    /// assert!(source.events_on(day.succ_opt().unwrap()).unwrap().is_empty());
    /// ```
    pub fn from_events(events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        Self { events: events.into_iter().collect() }
    }

    /// Add one more event to the source.
    pub fn push(&mut self, event: CalendarEvent) {
        self.events.push(event);
    }
}

impl EventSource for StaticSource {
    fn between(&self, start: NaiveDateTime, end: NaiveDateTime) -> Result<Vec<CalendarEvent>> {
        Ok(self
            .events
            .iter()
            .filter(|event| event.start < end && event.end > start)
            .cloned()
            .collect())
    }
}
