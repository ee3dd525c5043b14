use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::classify::{classify, DayStatus};
use crate::context::Context;
use crate::error::{Error, Result};
use crate::event::{CalendarEvent, EventSource};
use crate::month::MonthMap;
use crate::upcoming::upcoming_events;
use crate::utils::dates::{
    count_days_in_month, first_of_month, first_of_next_month, same_month, shift_months,
};
use crate::week::{WeekField, WeekMap};

/// Month-overview pipeline over an event source.
///
/// Owns a calendar backend plus the render [`Context`] and derives every
/// value the widget renderer consumes. All computations are scoped to one
/// call; nothing is cached across renders.
#[derive(Clone, Debug)]
pub struct BusyCalendar<S> {
    source: S,
    ctx: Context,
}

impl<S: EventSource> BusyCalendar<S> {
    /// Wrap an event source with the default render context.
    pub fn new(source: S) -> Self {
        Self { source, ctx: Context::default() }
    }

    /// Replace the render context.
    pub fn with_context(self, ctx: Context) -> Self {
        Self { ctx, ..self }
    }

    /// The active render context.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Fetch and classify the events of a single day.
    pub fn day_status(&self, day: NaiveDate) -> Result<DayStatus> {
        let events = self.source.events_on(day)?;
        Ok(classify(&events, &self.ctx.blocklist))
    }

    /// Build the per-day status map of the month containing `month`.
    ///
    /// The map is complete even when the source returns no event at all; a
    /// source failure fails the whole build.
    pub fn month_map(&self, month: NaiveDate) -> Result<MonthMap> {
        let first = first_of_month(month);

        (1..=count_days_in_month(month))
            .map(|day| {
                let date = first.with_day(day).expect("day taken from its own month");
                self.day_status(date)
            })
            .collect()
    }

    /// Aggregate busy and on-call counts for every displayed grid row.
    ///
    /// Iteration starts at the week-start day on or before the first of the
    /// month and stops at the first week-start day falling in the following
    /// month, so boundary rows may count days from the neighbouring months.
    pub fn week_map(&self, month: NaiveDate) -> Result<WeekMap> {
        let start_weekday = self.ctx.week_start.weekday();
        let first = first_of_month(month);
        let next_month = first_of_next_month(month).ok_or(Error::DateOutOfRange(first))?;

        let mut weeks = WeekMap::default();
        let mut week = 0;
        let mut day = self.ctx.week_start.on_or_before(first);

        while !(same_month(day, next_month) && day.weekday() == start_weekday) {
            weeks.bucket_mut(week).add(self.day_status(day)?);
            day = day.succ_opt().ok_or(Error::DateOutOfRange(day))?;

            if day.weekday() == start_weekday {
                week += 1;
            }
        }

        Ok(weeks)
    }

    /// Events to show in the upcoming-events view, pulled from the rest of
    /// today or from the current week per the context.
    pub fn upcoming(&self, now: NaiveDateTime) -> Result<Vec<CalendarEvent>> {
        let today = now.date();

        let (window_start, window_end) = if self.ctx.whole_week_events {
            let start = self.ctx.week_start.on_or_before(today);
            let end = start
                .checked_add_days(Days::new(7))
                .ok_or(Error::DateOutOfRange(today))?;
            (start, end)
        } else {
            let end = today.succ_opt().ok_or(Error::DateOutOfRange(today))?;
            (today, end)
        };

        let events = self.source.between(
            window_start.and_time(NaiveTime::MIN),
            window_end.and_time(NaiveTime::MIN),
        )?;

        Ok(upcoming_events(&events, now, true).into_iter().cloned().collect())
    }

    /// Compute the full render model for the month `month_offset` months
    /// away from the one containing `today`.
    pub fn render_model(&self, today: NaiveDate) -> Result<RenderModel> {
        let month = shift_months(first_of_month(today), self.ctx.month_offset)
            .ok_or(Error::DateOutOfRange(today))?;

        let month_map = self.month_map(month)?;
        let week_map = self.week_map(month)?;
        let busy_percentages = week_map.percentages(WeekField::BusyDays);

        // Free days are defined against today, so they only exist when the
        // rendered month is the current one.
        let free_days = if self.ctx.month_offset == 0 {
            month_map.free_days(today.day(), month_map.days_in_month())
        } else {
            Vec::new()
        };

        Ok(RenderModel {
            month,
            today,
            month_map,
            week_map,
            busy_percentages,
            free_days,
        })
    }
}

/// Everything the renderer needs for one widget pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderModel {
    /// First day of the rendered month.
    pub month: NaiveDate,
    /// The date the model was computed for.
    pub today: NaiveDate,
    pub month_map: MonthMap,
    pub week_map: WeekMap,
    /// Weekly busy percentage series, one entry per grid row.
    pub busy_percentages: Vec<u8>,
    /// Free days remaining in the current month, empty for offset months.
    pub free_days: Vec<u32>,
}
