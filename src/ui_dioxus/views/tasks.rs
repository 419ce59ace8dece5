use dioxus::prelude::*;

use crate::domain::task::Task;
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{AvatarStack, Badge, Card, ProgressBar, StatusDot};
use crate::ui_dioxus::sample_data;

const COLUMNS: &str = "grid-template-columns: 40px 2.4fr 1.2fr 1fr 1fr 0.8fr;";

#[component]
pub fn TasksPage() -> Element {
    let stats = sample_data::completion_stats();
    let tasks = sample_data::task_list();
    let shown = tasks.len();
    let primary = Tone::Primary.color();
    let chip = format!("height: 32px; padding: 0 12px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 8px; font-size: 13px; color: {TEXT_DARK}; cursor: pointer;");

    rsx! {
        div {
            class: "tasks",

            div {
                style: "margin-bottom: 24px;",
                Card {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 16px;",
                        div {
                            h2 { style: "font-size: 18px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Project Completion" }
                            p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Overall status across 17 active tasks" }
                        }
                        div { style: "font-size: 28px; font-weight: 700; color: {primary};", "{stats.percentage}%" }
                    }
                    ProgressBar { percent: stats.percentage, tone: Tone::Primary, height: 10 }
                    div {
                        class: "completion-counts",
                        style: "display: flex; gap: 24px; margin-top: 16px; font-size: 14px; color: {TEXT_GRAY};",
                        div { style: "display: flex; align-items: center; gap: 8px;", StatusDot { tone: Tone::Primary } "{stats.completed} Completed" }
                        div { style: "display: flex; align-items: center; gap: 8px;", StatusDot { tone: Tone::Warning } "{stats.in_progress} In Progress" }
                        div { style: "display: flex; align-items: center; gap: 8px;", StatusDot { tone: Tone::Muted } "{stats.remaining} Remaining" }
                    }
                }
            }

            div {
                class: "task-filters",
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 16px;",
                button { r#type: "button", style: "{chip}", "Status ▾" }
                button { r#type: "button", style: "{chip}", "Assignee ▾" }
                button { r#type: "button", style: "{chip}", "Priority ▾" }
                button { r#type: "button", style: "{chip}", "Due date ▾" }
                div {
                    class: "view-switch",
                    style: "margin-left: auto; display: flex; background: #f3f4f6; border-radius: 8px; padding: 2px;",
                    button { r#type: "button", style: "border: none; background: {SURFACE}; border-radius: 6px; padding: 6px 14px; font-size: 13px; font-weight: 500; color: {TEXT_DARK};", "List" }
                    button { r#type: "button", style: "border: none; background: none; padding: 6px 14px; font-size: 13px; color: {TEXT_GRAY};", "Board" }
                    button { r#type: "button", style: "border: none; background: none; padding: 6px 14px; font-size: 13px; color: {TEXT_GRAY};", "Timeline" }
                }
            }

            Card {
                padding: 0,
                div {
                    style: "display: grid; {COLUMNS} padding: 12px 20px; background: #f9fafb; border-bottom: 1px solid {BORDER}; font-size: 12px; font-weight: 600; color: {TEXT_GRAY}; text-transform: uppercase; border-radius: 12px 12px 0 0;",
                    div { input { r#type: "checkbox" } }
                    div { "Task Name" }
                    div { "Assignee" }
                    div { "Status" }
                    div { "Due Date" }
                    div { "Priority" }
                }
                for task in tasks {
                    TaskRow { key: "{task.id}", task }
                }
                div {
                    class: "table-footer",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 20px; font-size: 13px; color: {TEXT_GRAY};",
                    span { "Showing {shown} of {stats.total} tasks" }
                    div {
                        style: "display: flex; gap: 4px;",
                        button { r#type: "button", style: "{chip}", "‹" }
                        button { r#type: "button", style: "{chip} background: {primary}; color: white;", "1" }
                        button { r#type: "button", style: "{chip}", "›" }
                    }
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task) -> Element {
    let due_color = match task.due_tone() {
        Tone::Neutral => TEXT_DARK,
        tone => tone.color(),
    };
    let priority_color = task.priority.tone().color();

    rsx! {
        div {
            class: "task-row",
            style: "display: grid; {COLUMNS} align-items: center; padding: 14px 20px; border-bottom: 1px solid {BORDER};",
            div { input { r#type: "checkbox" } }
            div {
                div { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK};", "{task.name}" }
                div { style: "font-size: 12px; color: {TEXT_GRAY};", "{task.category}" }
            }
            div {
                if task.is_assigned() {
                    AvatarStack { initials: task.assignees.clone() }
                } else {
                    span { class: "unassigned", style: "font-size: 13px; font-style: italic; color: {TEXT_GRAY};", "Unassigned" }
                }
            }
            div { Badge { label: task.status.label(), tone: task.status.tone() } }
            div { span { class: "due-date", style: "font-size: 14px; color: {due_color};", "{task.due_date}" } }
            div {
                style: "display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 13px; font-weight: 600; color: {priority_color};", "{task.priority.short_label()}" }
                button { r#type: "button", title: "More", style: "border: none; background: none; color: {TEXT_GRAY}; cursor: pointer;", "⋮" }
            }
        }
    }
}
