use dioxus::prelude::*;

use crate::domain::metrics::StatCard;
use crate::domain::team::{Presence, TeamMember};
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Card, MetricCard, ProgressBar, StatusDot};
use crate::ui_dioxus::sample_data;

const COLUMNS: &str = "grid-template-columns: 2fr 1.2fr 1.6fr 1.6fr 0.6fr;";

#[component]
pub fn TeamPage() -> Element {
    let stats = sample_data::team_stats();
    let members = sample_data::team_members();
    let cards = vec![
        StatCard::new("Total Members", stats.total_members.to_string()),
        StatCard::new("Avg. Workload", format!("{}%", stats.avg_workload)),
        StatCard::new("Active Tasks", stats.active_tasks.to_string()),
        StatCard::new("Full Capacity", stats.full_capacity.to_string()),
    ];
    let shown = members.len();
    let primary = Tone::Primary.color();
    let page_button = format!("min-width: 32px; height: 32px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 6px; font-size: 13px; color: {TEXT_DARK};");

    rsx! {
        div {
            class: "team",

            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 32px;",
                div {
                    h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Team Management" }
                    p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Review your team's current availability and manage permissions." }
                }
                div {
                    style: "display: flex; gap: 12px;",
                    button {
                        r#type: "button",
                        style: "height: 40px; padding: 0 16px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 8px; font-size: 14px; font-weight: 500; color: {TEXT_DARK};",
                        "🛡 Manage Roles"
                    }
                    button {
                        r#type: "button",
                        style: "height: 40px; padding: 0 16px; background: {primary}; border: none; border-radius: 8px; font-size: 14px; font-weight: 500; color: white;",
                        "+ Invite Member"
                    }
                }
            }

            div {
                class: "team-stats",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 32px;",
                for card in cards {
                    MetricCard { key: "{card.title}", card }
                }
            }

            Card {
                padding: 0,
                div {
                    style: "display: grid; {COLUMNS} padding: 12px 24px; background: #f9fafb; border-bottom: 1px solid {BORDER}; font-size: 12px; font-weight: 600; color: {TEXT_GRAY}; text-transform: uppercase; border-radius: 12px 12px 0 0;",
                    div { "Member" }
                    div { "Role" }
                    div { "Email" }
                    div { "Workload Status" }
                    div { style: "text-align: right;", "Actions" }
                }
                for (i, member) in members.into_iter().enumerate() {
                    MemberRow { key: "{member.id}", member, index: i }
                }
                div {
                    class: "table-footer",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 14px 24px; font-size: 13px; color: {TEXT_GRAY};",
                    span { "Showing 1-{shown} of {stats.total_members} members" }
                    div {
                        style: "display: flex; align-items: center; gap: 4px;",
                        button { r#type: "button", style: "{page_button}", "‹" }
                        button { r#type: "button", style: "{page_button} background: {primary}; color: white; border-color: {primary};", "1" }
                        button { r#type: "button", style: "{page_button}", "2" }
                        button { r#type: "button", style: "{page_button}", "3" }
                        span { style: "padding: 0 4px;", "..." }
                        button { r#type: "button", style: "{page_button}", "8" }
                        button { r#type: "button", style: "{page_button}", "›" }
                    }
                }
            }
        }
    }
}

#[component]
fn MemberRow(member: TeamMember, index: usize) -> Element {
    let presence_color = if member.presence == Presence::Online {
        member.presence.tone().color()
    } else {
        TEXT_GRAY
    };
    let workload_tone = member.workload_status.tone();
    let workload_color = workload_tone.color();

    rsx! {
        div {
            class: "member-row",
            style: "display: grid; {COLUMNS} align-items: center; padding: 16px 24px; border-bottom: 1px solid {BORDER};",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                div {
                    style: "position: relative;",
                    Avatar { initials: member.avatar.clone(), index, size: 40 }
                    div {
                        style: "position: absolute; bottom: 0; right: 0; line-height: 0; border: 2px solid white; border-radius: 9999px;",
                        StatusDot { tone: member.presence.tone(), size: 10 }
                    }
                }
                div {
                    div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{member.name}" }
                    div { class: "presence", style: "font-size: 12px; color: {presence_color};", "● {member.presence.label()}" }
                }
            }
            div { style: "font-size: 14px; color: {TEXT_DARK};", "{member.role}" }
            div { style: "font-size: 14px; color: {TEXT_GRAY};", "{member.email}" }
            div {
                style: "padding-right: 24px;",
                div {
                    style: "display: flex; justify-content: space-between; margin-bottom: 6px;",
                    span { style: "font-size: 12px; font-weight: 700; color: {workload_color};", "{member.workload_status.label()}" }
                    span { style: "font-size: 12px; color: {TEXT_GRAY};", "{member.workload_percent()}%" }
                }
                ProgressBar { percent: member.workload_percent(), tone: workload_tone }
            }
            div {
                style: "display: flex; justify-content: flex-end; gap: 4px;",
                button { r#type: "button", title: "Message", style: "border: none; background: none; cursor: pointer;", "✉" }
                button { r#type: "button", title: "More", style: "border: none; background: none; cursor: pointer;", "⋮" }
            }
        }
    }
}
