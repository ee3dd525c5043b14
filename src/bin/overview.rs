use std::{env, fs};

use chrono::{Local, NaiveDate, NaiveDateTime};

use busy_calendar::{BusyCalendar, CalendarEvent, MonthGrid, RenderParams, StaticSource};

/// One event per line: `START END TITLE`, with `*` as the end marker for
/// all-day events (`2024-06-03T09:00 2024-06-03T09:30 Standup`).
fn parse_event(line: &str) -> CalendarEvent {
    let mut parts = line.splitn(3, ' ');
    let start = parts.next().expect("missing event start");
    let end = parts.next().expect("missing event end");
    let title = parts.next().expect("missing event title");

    if end == "*" {
        let date = NaiveDate::parse_from_str(start, "%Y-%m-%d").expect("invalid event date");
        CalendarEvent::all_day(title, date)
    } else {
        CalendarEvent::new(
            title,
            NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M").expect("invalid event start"),
            NaiveDateTime::parse_from_str(end, "%Y-%m-%dT%H:%M").expect("invalid event end"),
        )
    }
}

fn main() {
    let path = env::args()
        .nth(1)
        .expect("Usage: ./overview <EVENTS_FILE> [PARAMS_JSON]");
    let params = RenderParams::from_json(&env::args().nth(2).unwrap_or_default());

    let events: Vec<_> = fs::read_to_string(&path)
        .expect("could not read events file")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_event)
        .collect();

    let cal = BusyCalendar::new(StaticSource::from_events(events)).with_context(params.context());
    let today = Local::now().date_naive();

    let model = match cal.render_model(today) {
        Ok(val) => val,
        Err(err) => {
            panic!("{err}");
        }
    };

    println!("{}", model.month.format("%B %Y"));

    let grid = MonthGrid::build(model.month, cal.context().week_start, &model.busy_percentages);
    let height = grid.columns().iter().map(|col| col.len()).max().unwrap_or(0);

    for row in 0..height {
        for column in grid.columns() {
            let cell = column.get(row).map(String::as_str).unwrap_or(" ");
            print!("{cell:>4}");
        }

        println!()
    }

    println!(" - busy percentages: {:?}", model.busy_percentages);
    println!(" - free days: {:?}", model.free_days);

    let now = Local::now().naive_local();
    for event in cal.upcoming(now).expect("event source failed") {
        println!(" - upcoming: {} ({})", event.title, event.time_label(today));
    }
}
