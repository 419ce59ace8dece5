use dioxus::prelude::*;

use crate::domain::tone::{Tone, BACKGROUND, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::router::Route;

#[component]
pub fn NotFoundPage(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    tracing::warn!(%path, "no route matches path");
    let primary = Tone::Primary.color();

    rsx! {
        div {
            class: "not-found",
            style: "min-height: 100vh; background: {BACKGROUND}; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; font-family: Inter, system-ui, sans-serif;",
            h1 { style: "font-size: 28px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Page not found" }
            p { class: "missing-path", style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Nothing lives at {path}" }
            Link {
                to: Route::Dashboard {},
                span { style: "color: {primary}; font-weight: 500;", "Back to dashboard" }
            }
        }
    }
}
