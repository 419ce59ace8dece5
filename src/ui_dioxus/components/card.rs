use dioxus::prelude::*;

use crate::domain::tone::{BORDER, SURFACE, TEXT_DARK};

/// White rounded container used for page sections.
#[component]
pub fn Card(#[props(default = 24)] padding: u32, children: Element) -> Element {
    rsx! {
        div {
            class: "card",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: {padding}px;",
            {children}
        }
    }
}

/// Section title with optional trailing controls.
#[component]
pub fn CardHeader(title: &'static str, #[props(default)] children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 20px;",
            h2 { style: "font-size: 18px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "{title}" }
            div { style: "display: flex; align-items: center; gap: 8px;", {children} }
        }
    }
}
