use dioxus::prelude::*;

use crate::domain::project::{count_with_status, Project, ProjectStatus};
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{AvatarStack, Badge, ProgressBar};
use crate::ui_dioxus::sample_data;

#[component]
pub fn ProjectsPage() -> Element {
    let projects = sample_data::projects();
    let active = count_with_status(&projects, ProjectStatus::Active);
    let primary = Tone::Primary.color();

    rsx! {
        div {
            class: "projects",

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                h1 { style: "font-size: 24px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Projects" }
                div {
                    style: "display: flex; align-items: center; gap: 12px;",
                    div {
                        class: "view-toggle",
                        style: "display: flex; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 8px; padding: 2px;",
                        button { r#type: "button", title: "Grid view", style: "border: none; background: #eff6ff; color: {primary}; border-radius: 6px; padding: 6px 10px;", "▦" }
                        button { r#type: "button", title: "List view", style: "border: none; background: none; color: {TEXT_GRAY}; padding: 6px 10px;", "☰" }
                    }
                    input {
                        r#type: "text",
                        placeholder: "Search projects...",
                        style: "width: 240px; height: 36px; padding: 0 12px; border: 1px solid {BORDER}; border-radius: 8px; font-size: 14px;",
                    }
                    button {
                        r#type: "button",
                        style: "height: 36px; padding: 0 16px; background: {primary}; color: white; border: none; border-radius: 8px; font-size: 14px; font-weight: 500;",
                        "+ Create New Project"
                    }
                }
            }

            div {
                style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                h2 { style: "font-size: 16px; font-weight: 600; color: {TEXT_DARK}; margin: 0;", "Active Projects ({active})" }
                div {
                    style: "display: flex; align-items: center; gap: 8px; font-size: 14px; color: {TEXT_GRAY};",
                    span { "Sort by:" }
                    select {
                        style: "border: none; background: transparent; font-size: 14px; font-weight: 500; color: {TEXT_DARK};",
                        option { "Last Updated" }
                        option { "Name" }
                        option { "Progress" }
                    }
                }
            }

            div {
                class: "project-grid",
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 24px;",
                for project in projects {
                    ProjectCard { key: "{project.id}", project }
                }
                button {
                    r#type: "button",
                    class: "new-project",
                    style: "min-height: 240px; border: 2px dashed #d1d5db; border-radius: 12px; background: transparent; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 4px; cursor: pointer;",
                    div { style: "font-size: 28px; color: {TEXT_GRAY};", "+" }
                    div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "New Project" }
                    div { style: "font-size: 12px; color: {TEXT_GRAY};", "Start a new team initiative" }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(project: Project) -> Element {
    let team = project.visible_team().to_vec();
    let overflow = project.team_overflow();

    rsx! {
        div {
            class: "project-card",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 20px; display: flex; flex-direction: column;",

            div {
                style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                Badge { label: project.status.label(), tone: project.status.badge_tone() }
                button { r#type: "button", title: "More", style: "border: none; background: none; color: {TEXT_GRAY}; cursor: pointer;", "⋯" }
            }
            h3 { style: "font-size: 16px; font-weight: 600; color: {TEXT_DARK}; margin: 0 0 8px 0;", "{project.title}" }
            p { style: "flex: 1; font-size: 14px; color: {TEXT_GRAY}; margin: 0 0 20px 0;", "{project.description}" }

            div {
                style: "margin-bottom: 20px;",
                div {
                    style: "display: flex; justify-content: space-between; font-size: 12px; margin-bottom: 6px;",
                    span { style: "color: {TEXT_GRAY};", "Progress" }
                    span { style: "font-weight: 600; color: {TEXT_DARK};", "{project.progress_percent()}%" }
                }
                ProgressBar { percent: project.progress_percent(), tone: project.status.progress_tone() }
            }

            div {
                style: "display: flex; justify-content: space-between; align-items: center;",
                div {
                    style: "display: flex; align-items: center;",
                    AvatarStack { initials: team }
                    if let Some(extra) = overflow {
                        div {
                            class: "team-overflow",
                            style: "margin-left: -8px; width: 28px; height: 28px; border-radius: 9999px; background: #f3f4f6; border: 2px solid white; display: flex; align-items: center; justify-content: center; font-size: 10px; font-weight: 600; color: {TEXT_GRAY};",
                            "+{extra}"
                        }
                    }
                }
                span { style: "font-size: 12px; color: {TEXT_GRAY};", "{project.updated_at}" }
            }
        }
    }
}
