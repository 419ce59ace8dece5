use dioxus::prelude::*;

use crate::domain::task::Priority;
use crate::domain::team::GroupMember;
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Badge, Card, ProgressBar, StatusDot};
use crate::ui_dioxus::sample_data::{self, TASKFLOW_PROGRESS};
use crate::ui_dioxus::views::taskmaster::DiscussionEntry;

const DUE_DATE: &str = "Oct 24, 2023";
const COMMENT_COUNT: u32 = 4;

#[component]
pub fn TaskFlowPage() -> Element {
    let discussion = sample_data::taskflow_discussion();
    let primary = Tone::Primary.color();

    rsx! {
        div {
            class: "taskflow",
            style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px;",

            div {
                style: "display: flex; flex-direction: column; gap: 24px;",

                Card {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: flex-start; gap: 16px; margin-bottom: 24px;",
                        div {
                            div { style: "font-size: 12px; font-weight: 600; letter-spacing: 0.05em; color: {primary}; margin-bottom: 8px;", "PROJECT A • SPRINT 4" }
                            h1 { style: "font-size: 26px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "Develop Responsive Dashboard Layout" }
                            p {
                                style: "font-size: 14px; line-height: 1.6; color: {TEXT_GRAY}; margin: 0;",
                                "Implementation of the main dashboard grid system. Needs to be mobile-friendly and support both light and dark modes according to the provided sketch designs."
                            }
                        }
                        Badge { label: "In Progress", tone: Tone::Primary }
                    }
                    div {
                        style: "display: flex; justify-content: space-between; font-size: 13px; margin-bottom: 8px;",
                        span { style: "font-weight: 500; color: {TEXT_DARK};", "Overall Progress" }
                        span { class: "taskflow-progress", style: "font-weight: 600; color: {primary};", "{TASKFLOW_PROGRESS}%" }
                    }
                    ProgressBar { percent: TASKFLOW_PROGRESS, tone: Tone::Primary, height: 8 }
                }

                Card {
                    div {
                        style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 20px;",
                        h2 { style: "font-size: 18px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Team Discussion" }
                        span { style: "font-size: 13px; color: {TEXT_GRAY};", "{COMMENT_COUNT} Comments" }
                    }
                    for (i, comment) in discussion.into_iter().enumerate() {
                        DiscussionEntry { key: "{i}", comment, index: i }
                    }
                    div {
                        style: "display: flex; gap: 8px; margin-top: 16px;",
                        input {
                            r#type: "text",
                            placeholder: "Type a comment for the group...",
                            style: "flex: 1; height: 40px; padding: 0 12px; border: 1px solid {BORDER}; border-radius: 8px; font-size: 13px;",
                        }
                        button {
                            r#type: "button",
                            title: "Send",
                            style: "width: 40px; height: 40px; background: {primary}; border: none; border-radius: 8px; color: white;",
                            "➤"
                        }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 24px;",
                TaskResources {}
                GroupMembers {}
                TaskFacts {}
            }
        }
    }
}

#[component]
fn TaskResources() -> Element {
    rsx! {
        Card {
            h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 16px 0;", "Task Resources" }
            div {
                style: "height: 140px; border-radius: 8px; background: #f3f4f6; display: flex; align-items: flex-end; justify-content: center; padding-bottom: 12px; margin-bottom: 12px;",
                button {
                    r#type: "button",
                    style: "height: 32px; padding: 0 12px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 6px; font-size: 12px; color: {TEXT_DARK};",
                    "Upload Photo"
                }
            }
            button {
                r#type: "button",
                style: "width: 100%; height: 40px; border: 1px dashed {BORDER}; background: none; border-radius: 8px; font-size: 13px; color: {TEXT_GRAY};",
                "Upload Documents"
            }
        }
    }
}

#[component]
fn GroupMembers() -> Element {
    let members = sample_data::group_members();
    let primary = Tone::Primary.color();

    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Group Members" }
                button {
                    r#type: "button",
                    style: "border: none; background: none; font-size: 13px; font-weight: 500; color: {primary};",
                    "+ Add New"
                }
            }
            for (i, member) in members.into_iter().enumerate() {
                GroupMemberRow { key: "{member.name}", member, index: i }
            }
        }
    }
}

#[component]
fn GroupMemberRow(member: GroupMember, index: usize) -> Element {
    rsx! {
        div {
            class: "group-member",
            style: "display: flex; align-items: center; gap: 12px; padding: 8px 0;",
            div {
                style: "position: relative;",
                Avatar { initials: member.avatar.clone(), index, size: 36 }
                if member.online {
                    div {
                        class: "online-indicator",
                        style: "position: absolute; bottom: 0; right: 0; line-height: 0; border: 2px solid white; border-radius: 9999px;",
                        StatusDot { tone: Tone::Success, size: 10 }
                    }
                }
            }
            div {
                style: "flex: 1;",
                div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{member.name}" }
                div { style: "font-size: 12px; color: {TEXT_GRAY};", "{member.role}" }
            }
            button { r#type: "button", title: "Message", style: "border: none; background: none; color: {TEXT_GRAY};", "✉" }
        }
    }
}

#[component]
fn TaskFacts() -> Element {
    let priority = Priority::High;
    let priority_color = priority.tone().color();
    let label = format!("font-size: 12px; font-weight: 600; letter-spacing: 0.05em; color: {TEXT_GRAY};");

    rsx! {
        Card {
            div {
                style: "display: flex; justify-content: space-between; margin-bottom: 12px;",
                span { style: "{label}", "DUE DATE" }
                span { class: "due-date", style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{DUE_DATE}" }
            }
            div {
                style: "display: flex; justify-content: space-between;",
                span { style: "{label}", "PRIORITY" }
                span { class: "priority", style: "font-size: 14px; font-weight: 600; color: {priority_color};", "! {priority.label()}" }
            }
        }
    }
}
