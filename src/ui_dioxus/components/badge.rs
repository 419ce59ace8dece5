use dioxus::prelude::*;

use crate::domain::tone::Tone;

#[component]
pub fn Badge(#[props(into)] label: String, tone: Tone) -> Element {
    let style = tone.badge_style();
    rsx! {
        span {
            class: "badge",
            "data-tone": tone.token(),
            style: "{style}",
            "{label}"
        }
    }
}

/// Small filled circle, used for presence and activity markers.
#[component]
pub fn StatusDot(tone: Tone, #[props(default = 8)] size: u32) -> Element {
    let color = tone.color();
    rsx! {
        span {
            class: "status-dot",
            "data-tone": tone.token(),
            style: "display: inline-block; width: {size}px; height: {size}px; border-radius: 9999px; background: {color}; flex-shrink: 0;",
        }
    }
}
