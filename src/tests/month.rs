use crate::date;
use crate::event::{CalendarEvent, StaticSource};
use crate::overview::BusyCalendar;
use crate::tests::days_source;

#[test]
fn map_is_dense_on_an_empty_source() {
    let cal = BusyCalendar::new(StaticSource::default());
    let map = cal.month_map(date!("2024-06-15")).unwrap();

    assert_eq!(map.days_in_month(), 30);
    assert_eq!(map.iter().count(), 30);
    assert!(map.iter().all(|(_, status)| status == Default::default()));

    assert!(map.get(0).is_none());
    assert!(map.get(1).is_some());
    assert!(map.get(30).is_some());
    assert!(map.get(31).is_none());
}

#[test]
fn month_lengths() {
    let cal = BusyCalendar::new(StaticSource::default());

    assert_eq!(cal.month_map(date!("2024-01-10")).unwrap().days_in_month(), 31);
    assert_eq!(cal.month_map(date!("2024-02-10")).unwrap().days_in_month(), 29);
    assert_eq!(cal.month_map(date!("2023-02-10")).unwrap().days_in_month(), 28);
    assert_eq!(cal.month_map(date!("2024-04-10")).unwrap().days_in_month(), 30);
}

#[test]
fn busy_days_are_flagged() {
    let source = days_source(&[
        ("2024-06-03", "Standup"),
        ("2024-06-15", "Review"),
        ("2024-06-20", "Oncall"),
    ]);

    let map = BusyCalendar::new(source).month_map(date!("2024-06-01")).unwrap();

    assert!(map.get(3).unwrap().is_busy);
    assert!(map.get(15).unwrap().is_busy);
    assert!(!map.get(4).unwrap().is_busy);

    // Oncall is blocklisted by default so the day stays free
    assert!(!map.get(20).unwrap().is_busy);
    assert!(map.get(20).unwrap().is_oncall);
}

#[test]
fn midnight_spanning_event_marks_both_days() {
    let event = CalendarEvent::new(
        "Flight",
        date!("2024-06-03").and_hms_opt(23, 0, 0).unwrap(),
        date!("2024-06-04").and_hms_opt(1, 0, 0).unwrap(),
    );

    let map = BusyCalendar::new(StaticSource::from_events([event]))
        .month_map(date!("2024-06-01"))
        .unwrap();

    assert!(map.get(3).unwrap().is_busy);
    assert!(map.get(4).unwrap().is_busy);
    assert!(!map.get(5).unwrap().is_busy);
}

#[test]
fn events_from_other_months_are_ignored() {
    let source = days_source(&[("2024-05-31", "Review"), ("2024-07-01", "Review")]);
    let map = BusyCalendar::new(source).month_map(date!("2024-06-01")).unwrap();

    assert!(map.iter().all(|(_, status)| !status.is_busy));
}
