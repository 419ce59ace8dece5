use dioxus::prelude::*;

use crate::domain::tone::{BACKGROUND, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};

/// Fixed header with the page title, search and icon buttons.
///
/// Only the title varies; the controls are decorative.
#[component]
pub fn TopBar(title: &'static str) -> Element {
    let icon_button = "width: 36px; height: 36px; display: flex; align-items: center; justify-content: center; border: none; background: transparent; border-radius: 8px; cursor: pointer; font-size: 16px;";

    rsx! {
        header {
            class: "top-bar",
            style: "height: 64px; background: {SURFACE}; border-bottom: 1px solid {BORDER}; position: fixed; top: 0; left: 240px; right: 0; z-index: 10;",
            div {
                style: "height: 100%; padding: 0 32px; display: flex; align-items: center; justify-content: space-between;",

                h1 { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK}; margin: 0;", "{title}" }

                div {
                    style: "display: flex; align-items: center; gap: 16px;",
                    input {
                        r#type: "text",
                        placeholder: "Search projects...",
                        style: "width: 280px; height: 36px; padding: 0 12px; background: {BACKGROUND}; border: 1px solid {BORDER}; border-radius: 8px; font-size: 14px; color: {TEXT_GRAY};",
                    }
                    button { r#type: "button", title: "Notifications", style: "{icon_button}", "🔔" }
                    button { r#type: "button", title: "Messages", style: "{icon_button}", "💬" }
                    button {
                        r#type: "button",
                        class: "profile",
                        style: "width: 36px; height: 36px; border-radius: 9999px; border: none; background: linear-gradient(135deg, #fb923c, #f472b6); color: white; font-weight: 500; font-size: 14px;",
                        "A"
                    }
                }
            }
        }
    }
}
