use chrono::{Datelike, NaiveDate};

use crate::context::WeekStart;
use crate::utils::dates::{count_days_in_month, first_of_month};

const BLANK: &str = " ";

/// Weekday-major layout of a month for a vertical calendar grid.
///
/// Each column holds the cells of one weekday, header letter first: blanks
/// for the slots before day 1, then the day numbers of that weekday, then
/// blank padding up to a uniform column height. A final `%` column carries
/// the weekly busy percentages, one per grid row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MonthGrid {
    week_start: WeekStart,
    columns: Vec<Vec<String>>,
}

impl MonthGrid {
    /// Lay out the month containing `month`.
    ///
    /// ```
    /// use busy_calendar::{MonthGrid, WeekStart};
    /// use chrono::NaiveDate;
    ///
    /// // June 2024 starts on a Saturday
    /// let month = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    /// let grid = MonthGrid::build(month, WeekStart::Sunday, &[0, 43, 0, 0, 0, 14]);
    ///
    /// let sunday = &grid.columns()[0];
    /// assert_eq!(sunday, &["S", " ", "2", "9", "16", "23", "30"].map(String::from).to_vec());
    ///
    /// let percent = grid.columns().last().unwrap();
    /// assert_eq!(percent[0], "%");
    /// assert_eq!(percent.len(), 7);
    /// ```
    pub fn build(month: NaiveDate, week_start: WeekStart, percentages: &[u8]) -> Self {
        let headers = match week_start {
            WeekStart::Sunday => ["S", "M", "T", "W", "T", "F", "S"],
            WeekStart::Monday => ["M", "T", "W", "T", "F", "S", "S"],
        };

        let mut columns: Vec<Vec<String>> =
            headers.iter().map(|header| vec![(*header).to_owned()]).collect();

        let first = first_of_month(month);
        let leading = week_start.days_from_start(first.weekday()) as usize;

        for column in columns.iter_mut().take(leading) {
            column.push(BLANK.to_owned());
        }

        let mut cursor = leading;
        for day in 1..=count_days_in_month(month) {
            columns[cursor].push(day.to_string());
            cursor = (cursor + 1) % 7;
        }

        let height = columns.iter().map(|column| column.len()).max().unwrap_or(1);
        for column in &mut columns {
            while column.len() < height {
                column.push(BLANK.to_owned());
            }
        }

        let mut percent_column = vec!["%".to_owned()];
        percent_column.extend(percentages.iter().map(u8::to_string));
        columns.push(percent_column);

        Self { week_start, columns }
    }

    /// The weekday columns followed by the percentage column.
    pub fn columns(&self) -> &[Vec<String>] {
        &self.columns
    }

    /// Check if a weekday column falls on the weekend: the first and last
    /// columns for a Sunday start, the last two for a Monday start.
    pub fn is_weekend(&self, column: usize) -> bool {
        match self.week_start {
            WeekStart::Sunday => matches!(column, 0 | 6),
            WeekStart::Monday => matches!(column, 5 | 6),
        }
    }
}
