use dioxus::prelude::*;

use crate::domain::metrics::DetailedTask;
use crate::domain::team::StaffProgress;
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Card, CardHeader, MetricTile, ProgressBar};
use crate::ui_dioxus::sample_data;

#[component]
pub fn SubAdminPage() -> Element {
    let tiles = sample_data::subadmin_stats();
    let staff = sample_data::staff_progress();
    let tasks = sample_data::detailed_tasks();
    let primary = Tone::Primary.color();
    let outline_button = format!("height: 32px; padding: 0 12px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 6px; font-size: 13px; color: {TEXT_DARK};");

    rsx! {
        div {
            class: "subadmin",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 32px;",
                div {
                    h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Progress Overview" }
                    p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Monitor team performance and task completion status." }
                }
                button {
                    r#type: "button",
                    style: "height: 40px; padding: 0 16px; background: {primary}; border: none; border-radius: 8px; font-size: 14px; font-weight: 500; color: white;",
                    "⬆ Upload Task"
                }
            }

            div {
                class: "subadmin-stats",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 32px;",
                for tile in tiles {
                    MetricTile { key: "{tile.card.title}", tile }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 1fr 2fr; gap: 24px; margin-bottom: 32px;",

                Card {
                    CardHeader {
                        title: "Staff Progress",
                        button { r#type: "button", title: "More", style: "border: none; background: none; color: {TEXT_GRAY};", "⋯" }
                    }
                    for (i, person) in staff.into_iter().enumerate() {
                        StaffRow { key: "{person.name}", person, index: i }
                    }
                    a {
                        href: "#",
                        style: "display: block; text-align: center; margin-top: 8px; font-size: 14px; font-weight: 500; color: {primary}; text-decoration: none;",
                        "View All Staff"
                    }
                }

                Card {
                    CardHeader {
                        title: "Detailed Task Progress",
                        button { r#type: "button", style: "{outline_button}", "Filter: All" }
                    }
                    for task in tasks {
                        DetailedTaskRow { key: "{task.id}", task }
                    }
                    button {
                        r#type: "button",
                        style: "width: 100%; height: 40px; margin-top: 8px; border: 1px dashed {BORDER}; background: none; border-radius: 8px; font-size: 14px; color: {TEXT_GRAY};",
                        "+ Upload New Task Details"
                    }
                }
            }

            footer {
                style: "text-align: center; font-size: 13px; color: {TEXT_GRAY}; padding: 16px 0;",
                "© 2023 TaskManagement System. Sub-Admin Dashboard Overview."
            }
        }
    }
}

#[component]
fn StaffRow(person: StaffProgress, index: usize) -> Element {
    rsx! {
        div {
            class: "staff-row",
            style: "margin-bottom: 16px;",
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 8px;",
                Avatar { initials: person.avatar.clone(), index, size: 36 }
                div {
                    style: "flex: 1;",
                    div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{person.name}" }
                    div { style: "font-size: 12px; color: {TEXT_GRAY};", "{person.role}" }
                }
                div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{person.progress}%" }
            }
            ProgressBar { percent: person.progress, tone: Tone::Primary }
        }
    }
}

#[component]
fn DetailedTaskRow(task: DetailedTask) -> Element {
    let tone = task.tone();
    let color = tone.color();
    let tint = tone.tint();

    rsx! {
        div {
            class: "detailed-task",
            "data-tone": tone.token(),
            style: "padding: 16px 0; border-bottom: 1px solid {BORDER};",
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 10px;",
                div {
                    style: "width: 40px; height: 40px; border-radius: 10px; background: {tint}; color: {color}; display: flex; align-items: center; justify-content: center; font-size: 18px; flex-shrink: 0;",
                    "{task.icon}"
                }
                div {
                    style: "flex: 1;",
                    h3 { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK}; margin: 0;", "{task.title}" }
                    p { style: "font-size: 12px; color: {TEXT_GRAY}; margin: 0;", "Assigned to: {task.team}" }
                }
                span { style: "font-size: 13px; font-weight: 500; color: {color};", "{task.status}" }
            }
            ProgressBar { percent: task.progress, tone }
        }
    }
}
