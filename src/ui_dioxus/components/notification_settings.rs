use dioxus::prelude::*;

use crate::domain::settings::NotificationPreference;
use crate::domain::tone::{Tone, BORDER, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{primary_button, Field, SettingsPanel, INPUT_STYLE};
use crate::ui_dioxus::sample_data;

#[component]
pub fn NotificationSettings() -> Element {
    let preferences = sample_data::notification_preferences();
    let primary = Tone::Primary.color();
    let save_button = primary_button();
    let header_cell = "font-size: 12px; font-weight: 600; color: #6b7280; text-transform: uppercase; text-align: center;";

    rsx! {
        SettingsPanel {
            title: "Notification Preferences",
            subtitle: "Decide how and when you want to be notified about workspace activity.",

            div {
                class: "notification-table",
                style: "border: 1px solid {BORDER}; border-radius: 8px; overflow: hidden; margin-bottom: 32px;",
                div {
                    style: "display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; padding: 12px 16px; background: #f9fafb; border-bottom: 1px solid {BORDER};",
                    div { style: "{header_cell} text-align: left;", "Trigger" }
                    div { style: "{header_cell}", "Email" }
                    div { style: "{header_cell}", "Desktop" }
                    div { style: "{header_cell}", "Mobile" }
                }
                for pref in preferences {
                    PreferenceRow { key: "{pref.trigger}", pref }
                }
            }

            div {
                style: "padding: 20px; background: #f9fafb; border-radius: 8px; margin-bottom: 32px;",
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    div {
                        div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "Quiet Hours" }
                        div {
                            style: "font-size: 12px; color: {TEXT_GRAY};",
                            "Mute all notifications during specific times of the day to stay focused or rest."
                        }
                    }
                    input { r#type: "checkbox", checked: true, style: "width: 20px; height: 20px; accent-color: {primary};" }
                }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field {
                        label: "Start Time",
                        input { r#type: "time", value: "22:00", style: "{INPUT_STYLE}" }
                    }
                    Field {
                        label: "End Time",
                        input { r#type: "time", value: "08:00", style: "{INPUT_STYLE}" }
                    }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 12px;",
                button {
                    r#type: "button",
                    style: "height: 40px; padding: 0 24px; background: none; border: none; font-size: 14px; font-weight: 500; color: {TEXT_DARK}; cursor: pointer;",
                    "Discard Changes"
                }
                button { r#type: "button", style: "{save_button}", "Save Preferences" }
            }
        }
    }
}

#[component]
fn PreferenceRow(pref: NotificationPreference) -> Element {
    let primary = Tone::Primary.color();
    let check = format!("width: 16px; height: 16px; accent-color: {primary};");

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 2fr 1fr 1fr 1fr; align-items: center; padding: 16px; border-bottom: 1px solid {BORDER};",
            div {
                div { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK};", "{pref.trigger}" }
                div { style: "font-size: 12px; color: {TEXT_GRAY};", "{pref.description}" }
            }
            div { style: "text-align: center;", input { r#type: "checkbox", checked: pref.email, style: "{check}" } }
            div { style: "text-align: center;", input { r#type: "checkbox", checked: pref.desktop, style: "{check}" } }
            div { style: "text-align: center;", input { r#type: "checkbox", checked: pref.mobile, style: "{check}" } }
        }
    }
}
