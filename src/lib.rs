#![doc = include_str!("../README.md")]

pub mod classify;
pub mod context;
pub mod error;
pub mod event;
pub mod grid;
pub mod month;
pub mod overview;
pub mod params;
pub mod upcoming;
pub mod week;

mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::classify::{classify, DayStatus, ONCALL_TITLE};
pub use crate::context::{Context, WeekStart};
pub use crate::error::{Error, Result};
pub use crate::event::{CalendarEvent, EventSource, StaticSource};
pub use crate::grid::MonthGrid;
pub use crate::month::MonthMap;
pub use crate::overview::{BusyCalendar, RenderModel};
pub use crate::params::{RenderParams, View};
pub use crate::week::{WeekBucket, WeekField, WeekMap};
