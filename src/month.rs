use crate::classify::DayStatus;

/// Day statuses for a whole month, keyed by 1-based day-of-month.
///
/// The map is dense: it holds exactly one entry per calendar day of the
/// month, `1..=days_in_month`, with no gaps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MonthMap {
    days: Vec<DayStatus>,
}

impl MonthMap {
    /// Build a map from per-day statuses, day 1 first.
    pub fn from_days(days: Vec<DayStatus>) -> Self {
        Self { days }
    }

    /// Number of days covered by the map.
    pub fn days_in_month(&self) -> u32 {
        self.days.len() as u32
    }

    /// Status of the given 1-based day of month.
    ///
    /// ```
    /// use busy_calendar::{DayStatus, MonthMap};
    ///
    /// let busy = DayStatus { is_busy: true, is_oncall: false };
    /// let map = MonthMap::from_days(vec![busy, DayStatus::default()]);
    ///
    /// assert_eq!(map.get(1), Some(busy));
    /// assert_eq!(map.get(2), Some(DayStatus::default()));
    /// assert_eq!(map.get(0), None);
    /// assert_eq!(map.get(3), None);
    /// ```
    pub fn get(&self, day: u32) -> Option<DayStatus> {
        self.days.get(day.checked_sub(1)? as usize).copied()
    }

    /// Iterate over all days in order along with their day-of-month number.
    pub fn iter(&self) -> impl Iterator<Item = (u32, DayStatus)> + '_ {
        (1..).zip(self.days.iter().copied())
    }

    /// Remaining free days of the month: every day in
    /// `today..month_end_exclusive` that is not busy, in increasing order.
    ///
    /// The upper bound is exclusive, so the last calendar day of the month
    /// is never considered when called with `month_end_exclusive =
    /// days_in_month`.
    ///
    /// ```
    /// use busy_calendar::{DayStatus, MonthMap};
    ///
    /// let busy = DayStatus { is_busy: true, is_oncall: false };
    /// let free = DayStatus::default();
    /// let map = MonthMap::from_days(vec![busy, free, busy, free, free]);
    ///
    /// assert_eq!(map.free_days(1, 5), vec![2, 4]);
    /// assert_eq!(map.free_days(3, 5), vec![4]);
    /// ```
    pub fn free_days(&self, today: u32, month_end_exclusive: u32) -> Vec<u32> {
        (today..month_end_exclusive)
            .filter(|&day| {
                self.get(day)
                    .map(|status| !status.is_busy)
                    .unwrap_or(false)
            })
            .collect()
    }
}

impl FromIterator<DayStatus> for MonthMap {
    fn from_iter<I: IntoIterator<Item = DayStatus>>(iter: I) -> Self {
        Self::from_days(iter.into_iter().collect())
    }
}
