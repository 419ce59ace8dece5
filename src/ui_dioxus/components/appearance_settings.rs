use dioxus::prelude::*;

use crate::domain::settings::Appearance;
use crate::domain::tone::{Tone, BORDER, TEXT_DARK, TEXT_GRAY};

/// The three appearance cards. Selecting one only updates page state.
#[component]
pub fn AppearanceSettings(selected: Appearance, on_select: EventHandler<Appearance>) -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;",
            for mode in Appearance::ALL {
                AppearanceCard {
                    key: "{mode.label()}",
                    mode,
                    selected: mode == selected,
                    onclick: move |_| on_select.call(mode),
                }
            }
        }
    }
}

#[component]
fn AppearanceCard(mode: Appearance, selected: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (border, background) = if selected {
        (Tone::Primary.color(), "#eff6ff")
    } else {
        (BORDER, "white")
    };
    let swatch = match mode {
        Appearance::Light => "background: white; border: 2px solid #d1d5db;",
        Appearance::Dark => "background: #111827; border: 2px solid #374151;",
        Appearance::System => "background: linear-gradient(135deg, white, #111827); border: 2px solid #d1d5db;",
    };

    rsx! {
        button {
            r#type: "button",
            class: if selected { "appearance-card selected" } else { "appearance-card" },
            style: "position: relative; padding: 16px; border: 2px solid {border}; background: {background}; border-radius: 12px; cursor: pointer; text-align: center;",
            onclick: move |evt| onclick.call(evt),

            div {
                style: "display: flex; justify-content: center; margin-bottom: 12px;",
                div {
                    style: "width: 48px; height: 48px; border-radius: 9999px; display: flex; align-items: center; justify-content: center; {swatch}",
                    "{mode.icon()}"
                }
            }
            if selected {
                div {
                    class: "selected-check",
                    style: "position: absolute; top: 8px; right: 8px; width: 20px; height: 20px; background: {border}; border-radius: 9999px; color: white; font-size: 12px;",
                    "✓"
                }
            }
            div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{mode.label()}" }
            div { style: "font-size: 12px; color: {TEXT_GRAY}; margin-top: 2px;", "{mode.description()}" }
        }
    }
}
