use dioxus::prelude::*;

use crate::domain::tone::{avatar_gradient, Tone, BORDER, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{
    primary_button, Field, SectionHeading, SettingsPanel, INPUT_STYLE, SECONDARY_BUTTON,
};

#[component]
pub fn ProfileSettings() -> Element {
    let gradient = avatar_gradient(0);
    let danger = Tone::Danger.color();
    let success = Tone::Success.color();
    let primary = Tone::Primary.color();
    let update_button = primary_button();

    rsx! {
        SettingsPanel {
            title: "Profile Settings",
            subtitle: "Update your personal information and security preferences.",

            div {
                style: "margin-bottom: 32px;",
                SectionHeading { title: "Profile Picture" }
                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    div {
                        style: "width: 80px; height: 80px; border-radius: 9999px; background: {gradient}; color: white; display: flex; align-items: center; justify-content: center; font-size: 24px; font-weight: 700;",
                        "AJ"
                    }
                    button { r#type: "button", style: "{SECONDARY_BUTTON}", "Change Photo" }
                    button {
                        r#type: "button",
                        style: "height: 40px; padding: 0 16px; background: none; border: none; font-size: 14px; font-weight: 500; color: {danger}; cursor: pointer;",
                        "Remove"
                    }
                }
                p { style: "font-size: 12px; color: {TEXT_GRAY}; margin-top: 8px;", "JPG, GIF or PNG. Max size of 2MB." }
            }

            div {
                style: "margin-bottom: 32px;",
                SectionHeading { title: "Personal Information" }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field {
                        label: "Full Name",
                        input { r#type: "text", value: "Alex Johnson", style: "{INPUT_STYLE}" }
                    }
                    Field {
                        label: "Email Address",
                        input { r#type: "email", value: "alex.j@acme.com", style: "{INPUT_STYLE}" }
                    }
                    Field {
                        label: "Job Title",
                        input { r#type: "text", value: "Senior Project Manager", style: "{INPUT_STYLE}" }
                    }
                    Field {
                        label: "Phone Number",
                        input { r#type: "tel", value: "+1 (555) 123-4567", style: "{INPUT_STYLE}" }
                    }
                }
            }

            div {
                style: "margin-bottom: 32px;",
                SectionHeading { title: "Password & Security" }
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 16px; background: #f9fafb; border-radius: 8px; margin-bottom: 16px;",
                    div {
                        div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK}; margin-bottom: 4px;", "Password" }
                        div { style: "font-size: 12px; color: {TEXT_GRAY};", "Last changed 3 months ago" }
                    }
                    button { r#type: "button", style: "{SECONDARY_BUTTON}", "Change Password" }
                }
                div {
                    style: "display: flex; align-items: center; justify-content: space-between; padding: 16px; background: #f9fafb; border-radius: 8px;",
                    div {
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                            span { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "Two-Factor Authentication" }
                            span {
                                style: "padding: 2px 8px; background: {success}; color: white; font-size: 10px; font-weight: 700; border-radius: 4px; text-transform: uppercase;",
                                "Recommended"
                            }
                        }
                        div { style: "font-size: 12px; color: {TEXT_GRAY};", "Add an extra layer of security to your account" }
                    }
                    input { r#type: "checkbox", checked: true, style: "width: 20px; height: 20px; accent-color: {primary};" }
                }
            }

            div {
                style: "display: flex; justify-content: flex-end; gap: 12px; padding-top: 24px; border-top: 1px solid {BORDER};",
                button {
                    r#type: "button",
                    style: "height: 40px; padding: 0 24px; background: none; border: none; font-size: 14px; font-weight: 500; color: {TEXT_DARK}; cursor: pointer;",
                    "Cancel"
                }
                button { r#type: "button", style: "{update_button}", "Update Profile" }
            }
        }
    }
}
