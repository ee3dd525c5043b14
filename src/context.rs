use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};

use crate::classify::ONCALL_TITLE;

/// First day of the displayed week grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// The weekday opening each grid row.
    pub fn weekday(self) -> Weekday {
        match self {
            Self::Sunday => Weekday::Sun,
            Self::Monday => Weekday::Mon,
        }
    }

    /// The week-start day on or before `date`: the first cell of the grid
    /// row containing `date`.
    ///
    /// ```
    /// use busy_calendar::WeekStart;
    /// use chrono::NaiveDate;
    ///
    /// // 2024-06-01 is a Saturday
    /// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    ///
    /// assert_eq!(
    ///     WeekStart::Sunday.on_or_before(date),
    ///     NaiveDate::from_ymd_opt(2024, 5, 26).unwrap(),
    /// );
    /// assert_eq!(
    ///     WeekStart::Monday.on_or_before(date),
    ///     NaiveDate::from_ymd_opt(2024, 5, 27).unwrap(),
    /// );
    /// ```
    pub fn on_or_before(self, date: NaiveDate) -> NaiveDate {
        date.week(self.weekday()).first_day()
    }

    /// Number of grid columns between the week start and the given weekday.
    pub fn days_from_start(self, weekday: Weekday) -> u32 {
        match self {
            Self::Sunday => weekday.num_days_from_sunday(),
            Self::Monday => weekday.num_days_from_monday(),
        }
    }
}

/// Immutable configuration for one render pass.
///
/// Every pipeline component reads its settings from here; there is no
/// process-wide state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Context {
    /// Event titles that never mark a day as busy.
    pub blocklist: HashSet<String>,
    /// Weekday opening each displayed week.
    pub week_start: WeekStart,
    /// Rendered month, as a signed offset in months from the current one.
    pub month_offset: i32,
    /// Pull upcoming events from the whole week instead of only today.
    pub whole_week_events: bool,
}

impl Context {
    /// Replace the busy blocklist.
    ///
    /// ```
    /// use busy_calendar::Context;
    ///
    /// let ctx = Context::default().with_blocklist(["Oncall", "Cleaners", "Haircut"]);
    /// assert!(ctx.blocklist.contains("Cleaners"));
    /// ```
    pub fn with_blocklist<S: Into<String>>(self, titles: impl IntoIterator<Item = S>) -> Self {
        Self {
            blocklist: titles.into_iter().map(Into::into).collect(),
            ..self
        }
    }

    /// Set the weekday opening each displayed week.
    pub fn with_week_start(self, week_start: WeekStart) -> Self {
        Self { week_start, ..self }
    }

    /// Set the offset of the rendered month, in months from the current one.
    pub fn with_month_offset(self, month_offset: i32) -> Self {
        Self { month_offset, ..self }
    }

    /// Choose whether upcoming events cover the whole week.
    pub fn with_whole_week_events(self, whole_week_events: bool) -> Self {
        Self { whole_week_events, ..self }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            blocklist: HashSet::from([ONCALL_TITLE.to_owned()]),
            week_start: WeekStart::Sunday,
            month_offset: 0,
            whole_week_events: false,
        }
    }
}
