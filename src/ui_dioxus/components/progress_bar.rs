use dioxus::prelude::*;

use crate::domain::tone::Tone;

/// Horizontal bar filled to `percent` (clamped to 100).
#[component]
pub fn ProgressBar(percent: u8, tone: Tone, #[props(default = 6)] height: u32) -> Element {
    let width = percent.min(100);
    let color = tone.color();

    rsx! {
        div {
            class: "progress-track",
            style: "width: 100%; height: {height}px; background: #f3f4f6; border-radius: 9999px; overflow: hidden;",
            div {
                class: "progress-fill",
                "data-tone": tone.token(),
                style: "width: {width}%; height: 100%; background: {color}; border-radius: 9999px;",
            }
        }
    }
}
