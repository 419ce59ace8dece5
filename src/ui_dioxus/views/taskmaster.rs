use dioxus::prelude::*;

use crate::domain::activity::Comment;
use crate::domain::task::{category_tone, ActiveTask};
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, AvatarStack, Badge, Card, CardHeader, ProgressBar};
use crate::ui_dioxus::sample_data;

const OVERALL_PROGRESS: u8 = 75;

#[component]
pub fn TaskMasterPage() -> Element {
    let tasks = sample_data::active_tasks();
    let breakdown = sample_data::progress_breakdown();
    let primary = Tone::Primary.color();

    rsx! {
        div {
            class: "taskmaster",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 32px;",
                div {
                    h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Welcome back, Alex" }
                    p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Project Manager" }
                }
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    button {
                        r#type: "button",
                        title: "Notifications",
                        style: "width: 40px; height: 40px; border: 1px solid {BORDER}; background: {SURFACE}; border-radius: 9999px;",
                        "🔔"
                    }
                    Avatar { initials: "A", index: 1, size: 40 }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",

                Card {
                    CardHeader {
                        title: "Active Tasks",
                        a { href: "#", style: "font-size: 14px; font-weight: 500; color: {primary}; text-decoration: none;", "View All" }
                    }
                    div {
                        style: "display: grid; grid-template-columns: repeat(2, 1fr); gap: 16px;",
                        for task in tasks {
                            ActiveTaskCard { key: "{task.id}", task }
                        }
                        button {
                            r#type: "button",
                            class: "create-task",
                            style: "min-height: 160px; border: 2px dashed {BORDER}; background: none; border-radius: 12px; font-size: 14px; font-weight: 500; color: {TEXT_GRAY}; cursor: pointer;",
                            "+ Create Task"
                        }
                    }
                }

                div {
                    style: "display: flex; flex-direction: column; gap: 24px;",

                    Card {
                        CardHeader { title: "Overall Progress" }
                        div {
                            style: "text-align: center; margin-bottom: 20px;",
                            div { class: "overall-progress", style: "font-size: 40px; font-weight: 700; color: {primary};", "{OVERALL_PROGRESS}%" }
                            div { style: "font-size: 13px; color: {TEXT_GRAY};", "Total Done" }
                        }
                        for (label, percent) in breakdown {
                            div {
                                key: "{label}",
                                style: "margin-bottom: 12px;",
                                div {
                                    style: "display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 6px;",
                                    span { style: "color: {TEXT_GRAY};", "{label}" }
                                    span { style: "font-weight: 600; color: {TEXT_DARK};", "{percent}%" }
                                }
                                ProgressBar { percent, tone: Tone::Primary }
                            }
                        }
                    }

                    TaskDetailPanel {}
                }
            }
        }
    }
}

#[component]
fn ActiveTaskCard(task: ActiveTask) -> Element {
    let border = if task.highlighted {
        format!("2px solid {}", Tone::Primary.color())
    } else {
        format!("1px solid {BORDER}")
    };
    let due_color = task.due_tone().color();

    rsx! {
        div {
            class: if task.highlighted { "active-task highlighted" } else { "active-task" },
            style: "border: {border}; border-radius: 12px; padding: 16px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
                Badge { label: task.category.clone(), tone: category_tone(&task.category) }
                button { r#type: "button", title: "More", style: "border: none; background: none; color: {TEXT_GRAY};", "⋯" }
            }
            h3 { style: "font-size: 15px; font-weight: 600; color: {TEXT_DARK}; margin: 0 0 4px 0;", "{task.title}" }
            p { style: "font-size: 13px; color: {TEXT_GRAY}; margin: 0 0 16px 0;", "{task.description}" }
            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                AvatarStack { initials: task.assignees.clone(), size: 24 }
                span { class: "due-label", style: "font-size: 12px; font-weight: 500; color: {due_color};", "{task.due_label}" }
            }
        }
    }
}

#[component]
fn TaskDetailPanel() -> Element {
    let discussion = sample_data::taskmaster_discussion();
    let assignees = sample_data::taskmaster_assignees();
    let icon_tint = Tone::Primary.tint();
    let heading = format!("font-size: 14px; font-weight: 600; color: {TEXT_DARK}; margin: 0 0 12px 0;");

    rsx! {
        Card {
            div {
                style: "display: flex; align-items: center; gap: 12px; margin-bottom: 20px;",
                div {
                    style: "width: 40px; height: 40px; border-radius: 10px; background: {icon_tint}; display: flex; align-items: center; justify-content: center;",
                    "📄"
                }
                div {
                    style: "flex: 1;",
                    h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Task Detail View" }
                    p { style: "font-size: 12px; color: {TEXT_GRAY}; margin: 0;", "Project: Marketing Campaign Q4" }
                }
                button { r#type: "button", title: "Edit", style: "border: none; background: none;", "✎" }
                button { r#type: "button", title: "Close", style: "border: none; background: none;", "✕" }
            }

            div {
                style: "margin-bottom: 20px;",
                h4 { style: "{heading}", "Team Discussion" }
                for (i, comment) in discussion.into_iter().enumerate() {
                    DiscussionEntry { key: "{i}", comment, index: i }
                }
            }

            div {
                style: "margin-bottom: 20px;",
                h4 { style: "{heading}", "Assignees" }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 8px;",
                    for (i, person) in assignees.into_iter().enumerate() {
                        div {
                            key: "{person.name}",
                            class: "assignee",
                            style: "display: flex; align-items: center; gap: 6px; padding: 4px 10px 4px 4px; border: 1px solid {BORDER}; border-radius: 9999px;",
                            Avatar { initials: person.avatar.clone(), index: i, size: 24 }
                            span { style: "font-size: 12px; color: {TEXT_DARK};", "{person.name}" }
                        }
                    }
                    button {
                        r#type: "button",
                        style: "padding: 4px 12px; border: 1px dashed {BORDER}; background: none; border-radius: 9999px; font-size: 12px; color: {TEXT_GRAY};",
                        "+ Invite New"
                    }
                }
            }

            div {
                style: "margin-bottom: 20px;",
                h4 { style: "{heading}", "Attachments" }
                div {
                    style: "display: flex; gap: 8px;",
                    div { style: "width: 64px; height: 64px; border-radius: 8px; background: #f3f4f6;" }
                    button {
                        r#type: "button",
                        style: "width: 64px; height: 64px; border: 1px dashed {BORDER}; background: none; border-radius: 8px; font-size: 11px; color: {TEXT_GRAY};",
                        "Upload"
                    }
                }
            }

            input {
                r#type: "text",
                placeholder: "Any comments for the team?",
                style: "width: 100%; height: 40px; padding: 0 12px; border: 1px solid {BORDER}; border-radius: 8px; font-size: 13px; box-sizing: border-box;",
            }
        }
    }
}

/// One message in a discussion thread; highlighted messages use the
/// primary fill.
#[component]
pub fn DiscussionEntry(comment: Comment, index: usize) -> Element {
    let (background, color) = if comment.highlighted {
        (Tone::Primary.color(), "white")
    } else {
        ("#f9fafb", TEXT_DARK)
    };

    rsx! {
        div {
            class: "discussion-entry",
            style: "display: flex; gap: 10px; margin-bottom: 12px;",
            Avatar { initials: comment.author.avatar.clone(), index, size: 32 }
            div {
                style: "flex: 1;",
                div {
                    style: "display: flex; justify-content: space-between; margin-bottom: 4px;",
                    span { style: "font-size: 13px; font-weight: 600; color: {TEXT_DARK};", "{comment.author.name}" }
                    span { style: "font-size: 11px; color: {TEXT_GRAY};", "{comment.timestamp}" }
                }
                div {
                    class: if comment.highlighted { "message highlighted" } else { "message" },
                    style: "font-size: 13px; padding: 10px 12px; border-radius: 8px; background: {background}; color: {color};",
                    "{comment.message}"
                }
            }
        }
    }
}
