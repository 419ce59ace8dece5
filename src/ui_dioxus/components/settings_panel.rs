use dioxus::prelude::*;

use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};

pub const INPUT_STYLE: &str = "width: 100%; height: 40px; padding: 0 12px; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px; color: #111827; background: white; box-sizing: border-box;";
pub const SECONDARY_BUTTON: &str = "height: 40px; padding: 0 16px; background: white; border: 1px solid #d1d5db; border-radius: 8px; font-size: 14px; font-weight: 500; color: #111827; cursor: pointer;";

pub fn primary_button() -> String {
    format!(
        "height: 40px; padding: 0 24px; background: {}; border: none; border-radius: 8px; font-size: 14px; font-weight: 500; color: white; cursor: pointer;",
        Tone::Primary.color()
    )
}

/// White card with the tab heading; the tab body goes in `children`.
#[component]
pub fn SettingsPanel(title: &'static str, subtitle: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "settings-panel",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 32px;",
            div {
                style: "margin-bottom: 32px;",
                h1 { style: "font-size: 24px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "{title}" }
                p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "{subtitle}" }
            }
            {children}
        }
    }
}

#[component]
pub fn SectionHeading(title: &'static str) -> Element {
    rsx! {
        h2 { style: "font-size: 16px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 16px 0;", "{title}" }
    }
}

/// Label stacked over a form control.
#[component]
pub fn Field(label: &'static str, children: Element) -> Element {
    rsx! {
        div {
            label { style: "display: block; font-size: 14px; font-weight: 500; color: {TEXT_DARK}; margin-bottom: 8px;", "{label}" }
            {children}
        }
    }
}
