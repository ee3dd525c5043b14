use chrono::{Datelike, Months, NaiveDate};

/// First day of the month containing `date`.
pub(crate) fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1)
        .expect("first of the month should always exist")
}

/// First day of the month following the one containing `date`.
pub(crate) fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    first_of_month(date).checked_add_months(Months::new(1))
}

/// Day count of the month containing `date`, measured up to day 0 of the
/// following month.
pub(crate) fn count_days_in_month(date: NaiveDate) -> u32 {
    let Some(first_next_month) = first_of_next_month(date) else {
        // December of last supported year
        return 31;
    };

    (first_next_month - first_of_month(date))
        .num_days()
        .try_into()
        .expect("time not monotonic while comparing dates")
}

/// Shift a date by a signed number of months.
pub(crate) fn shift_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Check that both dates fall in the same calendar month.
pub(crate) fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    (a.year(), a.month()) == (b.year(), b.month())
}

#[cfg(test)]
mod test {
    use super::{count_days_in_month, same_month, shift_months};
    use crate::date;

    #[test]
    fn test_count_days_in_month() {
        assert_eq!(count_days_in_month(date!("2024-01-15")), 31);
        assert_eq!(count_days_in_month(date!("2024-02-01")), 29);
        assert_eq!(count_days_in_month(date!("2023-02-28")), 28);
        assert_eq!(count_days_in_month(date!("2024-06-30")), 30);
    }

    #[test]
    fn test_shift_months() {
        assert_eq!(shift_months(date!("2024-06-01"), 0), Some(date!("2024-06-01")));
        assert_eq!(shift_months(date!("2024-06-01"), 7), Some(date!("2025-01-01")));
        assert_eq!(shift_months(date!("2024-06-01"), -6), Some(date!("2023-12-01")));
        assert_eq!(shift_months(date!("2024-01-31"), 1), Some(date!("2024-02-29")));
    }

    #[test]
    fn test_same_month() {
        assert!(same_month(date!("2024-06-01"), date!("2024-06-30")));
        assert!(!same_month(date!("2024-06-01"), date!("2024-07-01")));
        assert!(!same_month(date!("2023-06-01"), date!("2024-06-01")));
    }
}
