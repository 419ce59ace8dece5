use dioxus::prelude::*;

use crate::domain::settings::Integration;
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{primary_button, SettingsPanel, INPUT_STYLE, SECONDARY_BUTTON};
use crate::ui_dioxus::components::Badge;
use crate::ui_dioxus::sample_data;

#[component]
pub fn IntegrationSettings() -> Element {
    let integrations = sample_data::integrations();
    let submit_button = primary_button();

    rsx! {
        SettingsPanel {
            title: "Integrations & Apps",
            subtitle: "Connect your favorite tools to streamline your workflow.",

            div {
                style: "margin-bottom: 24px; max-width: 360px;",
                input { r#type: "text", placeholder: "Search all apps...", style: "{INPUT_STYLE}" }
            }

            div {
                class: "integration-grid",
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-bottom: 32px;",
                for integration in integrations {
                    IntegrationCard { key: "{integration.name}", integration }
                }
            }

            div {
                class: "request-integration",
                style: "padding: 32px; border: 2px dashed {BORDER}; border-radius: 12px; text-align: center;",
                div { style: "font-size: 28px; margin-bottom: 8px;", "➕" }
                h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "Request an Integration" }
                p {
                    style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0 0 16px 0;",
                    "Don't see the app you use? Let us know what you'd like to use next, or build your own with our API."
                }
                div {
                    style: "display: flex; justify-content: center; gap: 12px;",
                    button { r#type: "button", style: "{SECONDARY_BUTTON}", "View API Docs" }
                    button { r#type: "button", style: "{submit_button}", "Submit Request" }
                }
            }
        }
    }
}

#[component]
fn IntegrationCard(integration: Integration) -> Element {
    let action_style = if integration.connected {
        SECONDARY_BUTTON.to_string()
    } else {
        primary_button()
    };

    rsx! {
        div {
            class: "integration-card",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 20px; display: flex; flex-direction: column;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 16px;",
                div {
                    style: "width: 48px; height: 48px; border-radius: 10px; background: #f3f4f6; display: flex; align-items: center; justify-content: center; font-size: 24px;",
                    "{integration.icon}"
                }
                if integration.connected {
                    Badge { label: "Connected", tone: Tone::Success }
                }
            }
            h3 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "{integration.name}" }
            p { style: "flex: 1; font-size: 13px; color: {TEXT_GRAY}; margin: 0 0 16px 0;", "{integration.description}" }
            button { r#type: "button", style: "{action_style} width: 100%;", "{integration.action_label()}" }
        }
    }
}
