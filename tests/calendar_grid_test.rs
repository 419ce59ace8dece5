use dioxus::prelude::*;
use promanage::domain::calendar::{tasks_for_day, CalendarMonth};
use promanage::ui_dioxus::sample_data::{self, CALENDAR_TODAY};
use promanage::ui_dioxus::views::calendar::CalendarGridProps;
use promanage::ui_dioxus::views::CalendarGrid;

fn render_grid(month: CalendarMonth) -> String {
    let props = CalendarGridProps::builder()
        .month(month)
        .tasks(sample_data::calendar_tasks())
        .today(CALENDAR_TODAY)
        .build();
    let mut dom = VirtualDom::new_with_props(CalendarGrid, props);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Markup of each day cell keyed by day number.
fn day_cells(html: &str) -> Vec<(u32, String)> {
    html.split("class=\"day-cell")
        .skip(1)
        .filter_map(|cell| {
            let (_, rest) = cell.split_once("data-day=\"")?;
            let (day, _) = rest.split_once('"')?;
            Some((day.parse().ok()?, cell.to_string()))
        })
        .collect()
}

#[test]
fn test_october_renders_every_day_once() {
    let html = render_grid(CalendarMonth::new(2023, 10).unwrap());
    let days: Vec<u32> = day_cells(&html).into_iter().map(|(day, _)| day).collect();

    assert_eq!(days, (1..=31).collect::<Vec<_>>());
    assert_eq!(html.matches("class=\"weekday\"").count(), 7);
    assert_eq!(html.matches("blank-cell").count(), 0);
}

#[test]
fn test_tasks_stay_in_their_own_day() {
    let html = render_grid(CalendarMonth::new(2023, 10).unwrap());
    let tasks = sample_data::calendar_tasks();

    for (day, cell) in day_cells(&html) {
        let expected = tasks_for_day(&tasks, day);
        assert_eq!(cell.matches("calendar-task").count(), expected.len(), "day {day}");
        for task in expected {
            assert!(cell.contains(task.title.as_str()), "day {day} is missing {}", task.title);
        }
    }
}

#[test]
fn test_today_is_highlighted() {
    let html = render_grid(CalendarMonth::new(2023, 10).unwrap());

    assert_eq!(html.matches("day-cell today").count(), 1);
    let today = day_cells(&html)
        .into_iter()
        .find(|(_, cell)| cell.starts_with(" today"))
        .map(|(day, _)| day);
    assert_eq!(today, Some(CALENDAR_TODAY));
}

#[test]
fn test_month_starting_midweek_has_leading_blanks() {
    // 1 November 2023 is a Wednesday
    let html = render_grid(CalendarMonth::new(2023, 11).unwrap());

    assert_eq!(html.matches("blank-cell").count(), 3);
    assert_eq!(day_cells(&html).len(), 30);
}
