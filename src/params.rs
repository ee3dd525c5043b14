use serde::Deserialize;

use crate::classify::ONCALL_TITLE;
use crate::context::{Context, WeekStart};

/// Background image used when the host supplies none.
const DEFAULT_BACKGROUND: &str = "1121.jpg";

/// Which of the two widget views to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Events,
    Cal,
    #[default]
    Both,
}

impl View {
    /// Check if the events view is part of the widget.
    pub fn shows_events(self) -> bool {
        matches!(self, Self::Events | Self::Both)
    }

    /// Check if the calendar view is part of the widget.
    pub fn shows_calendar(self) -> bool {
        matches!(self, Self::Cal | Self::Both)
    }
}

/// Widget parameters supplied by the host, with built-in defaults for
/// anything missing.
///
/// The field names mirror the host's JSON parameter keys:
/// `{ "bg": "2111.jpg", "view": "events", "monthDiff": 1 }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderParams {
    /// Background image to draw behind the widget.
    #[serde(rename = "bg")]
    pub background_image: String,
    pub view: View,
    #[serde(rename = "monthDiff")]
    pub month_offset: i32,
    #[serde(rename = "weekStartsSunday")]
    pub week_starts_sunday: bool,
    #[serde(rename = "showEventsForWholeWeek")]
    pub show_events_for_whole_week: bool,
    pub blocklist: Vec<String>,
}

impl RenderParams {
    /// Parse host widget parameters, falling back to the defaults when the
    /// payload cannot be read.
    ///
    /// ```
    /// use busy_calendar::{RenderParams, View};
    ///
    /// let params = RenderParams::from_json(r#"{ "bg": "2111.jpg", "view": "cal" }"#);
    /// assert_eq!(params.background_image, "2111.jpg");
    /// assert_eq!(params.view, View::Cal);
    ///
    /// assert_eq!(RenderParams::from_json("not json"), RenderParams::default());
    /// ```
    pub fn from_json(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(params) => params,
            Err(_err) => {
                #[cfg(feature = "log")]
                log::warn!("could not parse widget parameters, using defaults: {_err}");
                Self::default()
            }
        }
    }

    /// Translate the host parameters into the core render context.
    pub fn context(&self) -> Context {
        let week_start = if self.week_starts_sunday {
            WeekStart::Sunday
        } else {
            WeekStart::Monday
        };

        Context::default()
            .with_blocklist(self.blocklist.iter().cloned())
            .with_week_start(week_start)
            .with_month_offset(self.month_offset)
            .with_whole_week_events(self.show_events_for_whole_week)
    }
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            background_image: DEFAULT_BACKGROUND.to_owned(),
            view: View::Both,
            month_offset: 0,
            week_starts_sunday: true,
            show_events_for_whole_week: false,
            blocklist: vec![ONCALL_TITLE.to_owned()],
        }
    }
}
