use crate::classify::DayStatus;

/// Days in a displayed grid row.
pub const DAYS_PER_WEEK: u8 = 7;

/// Aggregated busy and on-call day counts for one displayed grid row.
///
/// A row covers exactly 7 calendar days and may span two months, so each
/// count stays in `0..=7`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct WeekBucket {
    pub busy_days: u8,
    pub oncall_days: u8,
}

impl WeekBucket {
    /// Count one more day into the bucket.
    pub(crate) fn add(&mut self, status: DayStatus) {
        self.busy_days += status.is_busy as u8;
        self.oncall_days += status.is_oncall as u8;
    }

    fn count(self, field: WeekField) -> u8 {
        match field {
            WeekField::BusyDays => self.busy_days,
            WeekField::OncallDays => self.oncall_days,
        }
    }
}

/// Field of a [`WeekBucket`] to reduce into a percentage series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeekField {
    BusyDays,
    OncallDays,
}

/// Week buckets for every displayed grid row, topmost row first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekMap {
    weeks: Vec<WeekBucket>,
}

impl WeekMap {
    /// Build a map from per-row buckets.
    pub fn from_weeks(weeks: Vec<WeekBucket>) -> Self {
        Self { weeks }
    }

    /// Number of displayed grid rows.
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Check if the map holds no row at all.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Bucket of the given 0-based row.
    pub fn get(&self, week: usize) -> Option<WeekBucket> {
        self.weeks.get(week).copied()
    }

    /// Iterate over the buckets in row order.
    pub fn iter(&self) -> impl Iterator<Item = WeekBucket> + '_ {
        self.weeks.iter().copied()
    }

    /// Bucket of the given row, created on first access.
    pub(crate) fn bucket_mut(&mut self, week: usize) -> &mut WeekBucket {
        while week >= self.weeks.len() {
            self.weeks.push(WeekBucket::default());
        }

        &mut self.weeks[week]
    }

    /// One integer percentage per row: `round(100 * count / 7)`.
    ///
    /// ```
    /// use busy_calendar::{WeekBucket, WeekField, WeekMap};
    ///
    /// let map = WeekMap::from_weeks(vec![
    ///     WeekBucket { busy_days: 0, oncall_days: 7 },
    ///     WeekBucket { busy_days: 1, oncall_days: 0 },
    ///     WeekBucket { busy_days: 7, oncall_days: 2 },
    /// ]);
    ///
    /// assert_eq!(map.percentages(WeekField::BusyDays), vec![0, 14, 100]);
    /// assert_eq!(map.percentages(WeekField::OncallDays), vec![100, 0, 29]);
    /// ```
    pub fn percentages(&self, field: WeekField) -> Vec<u8> {
        self.weeks
            .iter()
            .map(|bucket| percentage(bucket.count(field)))
            .collect()
    }
}

/// Share of the week the count covers, rounded half-up.
fn percentage(count: u8) -> u8 {
    (f64::from(count) * 100.0 / f64::from(DAYS_PER_WEEK)).round() as u8
}
