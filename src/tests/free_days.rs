use crate::classify::DayStatus;
use crate::date;
use crate::month::MonthMap;
use crate::overview::BusyCalendar;
use crate::tests::days_source;

const BUSY: DayStatus = DayStatus { is_busy: true, is_oncall: false };
const FREE: DayStatus = DayStatus { is_busy: false, is_oncall: false };

#[test]
fn last_day_of_month_is_never_listed() {
    // 30-day month, busy on the 25th, free from the 26th on
    let source = days_source(&[("2024-06-25", "Review"), ("2024-06-30", "Party")]);
    let map = BusyCalendar::new(source).month_map(date!("2024-06-01")).unwrap();

    assert_eq!(map.free_days(25, map.days_in_month()), vec![26, 27, 28, 29]);
}

#[test]
fn today_is_included_when_free() {
    let map = MonthMap::from_days(vec![FREE; 30]);
    assert_eq!(map.free_days(25, 30), vec![25, 26, 27, 28, 29]);
}

#[test]
fn fully_busy_month_has_no_free_day() {
    let map = MonthMap::from_days(vec![BUSY; 30]);
    assert!(map.free_days(1, 30).is_empty());
}

#[test]
fn days_outside_the_map_are_skipped() {
    let map = MonthMap::from_days(vec![FREE; 28]);

    assert!(map.free_days(29, 31).is_empty());
    assert_eq!(map.free_days(27, 31), vec![27, 28]);
}

#[test]
fn oncall_days_stay_free() {
    let source = days_source(&[("2024-06-26", "Oncall")]);
    let map = BusyCalendar::new(source).month_map(date!("2024-06-01")).unwrap();

    assert_eq!(map.free_days(25, map.days_in_month()), vec![25, 26, 27, 28, 29]);
}
