use dioxus::prelude::*;

use crate::domain::calendar::{
    tasks_for_day, CalendarCell, CalendarMonth, CalendarTask, UnscheduledTask, WEEKDAY_HEADERS,
};
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Card};
use crate::ui_dioxus::sample_data;

#[component]
pub fn CalendarPage() -> Element {
    let tasks = sample_data::calendar_tasks();
    let unscheduled = sample_data::unscheduled_tasks();

    let body = match sample_data::calendar_month() {
        Ok(month) => rsx! {
            CalendarToolbar { title: month.title() }
            CalendarGrid { month, tasks, today: sample_data::CALENDAR_TODAY }
        },
        Err(e) => {
            tracing::error!("calendar fixture is invalid: {e}");
            rsx! {
                p { class: "calendar-error", style: "color: {TEXT_GRAY};", "{e}" }
            }
        }
    };

    rsx! {
        div {
            class: "calendar",
            style: "display: flex; gap: 24px; align-items: flex-start;",
            div {
                style: "flex: 1; min-width: 0;",
                Card { padding: 0, {body} }
            }
            UnscheduledPanel { tasks: unscheduled }
        }
    }
}

#[component]
fn CalendarToolbar(title: String) -> Element {
    let primary = Tone::Primary.color();
    let ghost = "height: 32px; padding: 0 12px; background: none; border: 1px solid #e5e7eb; border-radius: 8px; font-size: 13px; cursor: pointer;";

    rsx! {
        div {
            class: "calendar-toolbar",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 20px; border-bottom: 1px solid {BORDER};",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                span { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin-right: 8px;", "📅 Calendar" }
                button { r#type: "button", style: "{ghost}", "‹" }
                button { r#type: "button", style: "{ghost}", "Today" }
                button { r#type: "button", style: "{ghost}", "›" }
                span { class: "month-title", style: "font-size: 16px; font-weight: 600; color: {TEXT_DARK}; margin-left: 8px;", "{title}" }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                div {
                    style: "display: flex; background: #f3f4f6; border-radius: 8px; padding: 2px;",
                    button { r#type: "button", style: "border: none; background: none; padding: 6px 12px; font-size: 13px; color: {TEXT_GRAY};", "Day" }
                    button { r#type: "button", style: "border: none; background: none; padding: 6px 12px; font-size: 13px; color: {TEXT_GRAY};", "Week" }
                    button { r#type: "button", style: "border: none; background: {SURFACE}; border-radius: 6px; padding: 6px 12px; font-size: 13px; font-weight: 500; color: {TEXT_DARK};", "Month" }
                }
                input {
                    r#type: "text",
                    placeholder: "Search tasks...",
                    style: "width: 180px; height: 32px; padding: 0 10px; border: 1px solid {BORDER}; border-radius: 8px; font-size: 13px;",
                }
                button {
                    r#type: "button",
                    style: "height: 32px; padding: 0 14px; background: {primary}; color: white; border: none; border-radius: 8px; font-size: 13px; font-weight: 500;",
                    "+ Add Task"
                }
            }
        }
    }
}

/// Sunday-first month grid. Each day cell lists exactly the tasks dated
/// on that day; `today` is ringed.
#[component]
pub fn CalendarGrid(month: CalendarMonth, tasks: Vec<CalendarTask>, today: u32) -> Element {
    // Blank slots carry no day; day slots carry that day's tasks
    let slots: Vec<Option<(u32, Vec<CalendarTask>)>> = month
        .cells()
        .into_iter()
        .map(|cell| match cell {
            CalendarCell::Blank => None,
            CalendarCell::Day(day) => {
                Some((day, tasks_for_day(&tasks, day).into_iter().cloned().collect()))
            }
        })
        .collect();

    rsx! {
        div {
            class: "calendar-grid",
            style: "display: grid; grid-template-columns: repeat(7, 1fr); gap: 1px; background: {BORDER};",
            for header in WEEKDAY_HEADERS {
                div {
                    key: "{header}",
                    class: "weekday",
                    style: "background: #f9fafb; padding: 8px; text-align: center; font-size: 12px; font-weight: 600; color: {TEXT_GRAY};",
                    "{header}"
                }
            }
            for (i, slot) in slots.into_iter().enumerate() {
                if let Some((day, day_tasks)) = slot {
                    DayCell { key: "{i}", day, tasks: day_tasks, is_today: day == today }
                } else {
                    div { key: "{i}", class: "blank-cell", style: "background: #f9fafb; height: 96px;" }
                }
            }
        }
    }
}

#[component]
fn DayCell(day: u32, tasks: Vec<CalendarTask>, is_today: bool) -> Element {
    let primary = Tone::Primary.color();
    let (ring, number_color) = if is_today {
        (format!("box-shadow: inset 0 0 0 2px {primary};"), primary)
    } else {
        (String::new(), TEXT_DARK)
    };

    rsx! {
        div {
            class: if is_today { "day-cell today" } else { "day-cell" },
            "data-day": "{day}",
            style: "background: {SURFACE}; height: 96px; padding: 8px; overflow: hidden; {ring}",
            div { style: "font-size: 14px; font-weight: 500; color: {number_color}; margin-bottom: 4px;", "{day}" }
            for task in tasks {
                div {
                    key: "{task.id}",
                    class: "calendar-task",
                    "data-tone": task.color.token(),
                    title: "{task.assignee}",
                    style: "background: {task.color.color()}; color: white; font-size: 10px; font-weight: 500; padding: 2px 6px; border-radius: 4px; margin-bottom: 2px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                    "{task.title}"
                }
            }
        }
    }
}

#[component]
fn UnscheduledPanel(tasks: Vec<UnscheduledTask>) -> Element {
    let count = tasks.len();

    rsx! {
        div {
            class: "unscheduled",
            style: "width: 280px; flex-shrink: 0;",
            Card {
                padding: 20,
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 4px;",
                    h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Unscheduled" }
                    span { style: "font-size: 12px; font-weight: 600; padding: 2px 8px; background: #f3f4f6; border-radius: 9999px; color: {TEXT_GRAY};", "{count}" }
                }
                p { style: "font-size: 12px; color: {TEXT_GRAY}; margin: 0 0 16px 0;", "Drag tasks to the calendar" }
                for (i, task) in tasks.into_iter().enumerate() {
                    UnscheduledCard { key: "{task.id}", task, index: i }
                }
            }
        }
    }
}

#[component]
fn UnscheduledCard(task: UnscheduledTask, index: usize) -> Element {
    let priority_color = task.priority.tone().color();

    rsx! {
        div {
            class: "unscheduled-task",
            style: "padding: 12px; border: 1px solid {BORDER}; border-radius: 8px; margin-bottom: 10px; cursor: grab;",
            div { style: "font-size: 10px; font-weight: 700; color: {priority_color}; margin-bottom: 6px;", "{task.priority_label()}" }
            div { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK}; margin-bottom: 10px;", "{task.title}" }
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    style: "display: flex; align-items: center; gap: 6px;",
                    Avatar { initials: task.assignee_initials(), index, size: 22 }
                    span { style: "font-size: 12px; color: {TEXT_GRAY};", "{task.assignee}" }
                }
                span { style: "font-size: 12px; color: {TEXT_GRAY};", "⏱ {task.estimate}" }
            }
        }
    }
}
