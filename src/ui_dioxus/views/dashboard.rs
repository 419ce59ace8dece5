use dioxus::prelude::*;

use crate::domain::activity::Activity;
use crate::domain::calendar::format_long_date;
use crate::domain::task::Task;
use crate::domain::tone::{Tone, BORDER, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Badge, Card, CardHeader, MetricCard, StatusDot};
use crate::ui_dioxus::sample_data;

#[component]
pub fn DashboardPage() -> Element {
    let stats = sample_data::dashboard_stats();
    let velocity = sample_data::team_velocity();
    let activities = sample_data::recent_activity();
    let tasks = sample_data::my_tasks();
    let today = sample_data::today().map(format_long_date).unwrap_or_default();
    let link_color = Tone::Primary.color();

    rsx! {
        div {
            class: "dashboard",

            div {
                style: "margin-bottom: 32px;",
                h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Welcome back, Alex" }
                p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "{today}" }
            }

            div {
                class: "stats-grid",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 32px;",
                for card in stats {
                    MetricCard { key: "{card.title}", card }
                }
                div {
                    class: "velocity-card",
                    style: "background: linear-gradient(135deg, #2563eb, #1d4ed8); border-radius: 12px; padding: 20px; color: white;",
                    div { style: "font-size: 12px; font-weight: 600; letter-spacing: 0.05em; opacity: 0.8; margin-bottom: 8px;", "{velocity.title}" }
                    div { style: "font-size: 28px; font-weight: 700;", "{velocity.value}" }
                    if let Some(change) = &velocity.change {
                        div { style: "font-size: 12px; font-weight: 500; opacity: 0.9;", "{change}" }
                    }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 2fr; gap: 24px;",

                Card {
                    CardHeader {
                        title: "Recent Activity",
                        a { href: "#", style: "font-size: 14px; color: {link_color}; text-decoration: none;", "View all" }
                    }
                    for (i, activity) in activities.into_iter().enumerate() {
                        ActivityRow { key: "{activity.id}", activity, index: i }
                    }
                }

                Card {
                    CardHeader {
                        title: "My Tasks",
                        button { r#type: "button", title: "Filter", style: "border: none; background: none; cursor: pointer;", "⚙" }
                        button { r#type: "button", title: "More", style: "border: none; background: none; cursor: pointer;", "⋯" }
                    }
                    div {
                        style: "display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; padding: 0 0 12px 0; border-bottom: 1px solid {BORDER}; font-size: 12px; font-weight: 600; color: {TEXT_GRAY}; text-transform: uppercase;",
                        div { "Task Name" }
                        div { "Status" }
                        div { "Priority" }
                        div { "Due Date" }
                    }
                    for task in tasks {
                        MyTaskRow { key: "{task.id}", task }
                    }
                    div {
                        style: "padding-top: 16px; text-align: center;",
                        a { href: "#", style: "font-size: 14px; font-weight: 500; color: {link_color}; text-decoration: none;", "Show 18 more tasks" }
                    }
                }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: Activity, index: usize) -> Element {
    rsx! {
        div {
            class: "activity",
            style: "display: flex; gap: 12px; margin-bottom: 20px;",
            Avatar { initials: activity.user.avatar.clone(), index, size: 36 }
            div {
                div {
                    style: "font-size: 14px; color: {TEXT_GRAY};",
                    span { style: "font-weight: 600; color: {TEXT_DARK};", "{activity.user.name}" }
                    " {activity.action} "
                    span { style: "font-weight: 500; color: {TEXT_DARK};", "{activity.target}" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 6px; margin-top: 4px;",
                    StatusDot { tone: activity.kind.tone() }
                    span { style: "font-size: 12px; color: {TEXT_GRAY};", "{activity.timestamp}" }
                }
            }
        }
    }
}

#[component]
fn MyTaskRow(task: Task) -> Element {
    let priority_color = task.priority.tone().color();

    rsx! {
        div {
            class: "task-row",
            style: "display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; align-items: center; padding: 14px 0; border-bottom: 1px solid {BORDER};",
            div {
                div { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK};", "{task.name}" }
                div { style: "font-size: 12px; color: {TEXT_GRAY};", "{task.category}" }
            }
            div { Badge { label: task.status.label(), tone: task.status.tone() } }
            div { span { style: "font-size: 14px; font-weight: 500; color: {priority_color};", "{task.priority.label()}" } }
            div { span { style: "font-size: 14px; color: {TEXT_GRAY};", "{task.due_date}" } }
        }
    }
}
