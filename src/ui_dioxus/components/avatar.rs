use dioxus::prelude::*;

use crate::domain::tone::avatar_gradient;

/// Round initials avatar; `index` picks the gradient.
#[component]
pub fn Avatar(#[props(into)] initials: String, index: usize, #[props(default = 32)] size: u32) -> Element {
    let gradient = avatar_gradient(index);
    let font_size = size * 3 / 8;

    rsx! {
        div {
            class: "avatar",
            style: "width: {size}px; height: {size}px; border-radius: 9999px; background: {gradient}; color: white; display: flex; align-items: center; justify-content: center; font-size: {font_size}px; font-weight: 600; border: 2px solid white; flex-shrink: 0;",
            "{initials}"
        }
    }
}

/// Overlapping row of avatars.
#[component]
pub fn AvatarStack(initials: Vec<String>, #[props(default = 28)] size: u32) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center;",
            for (i, item) in initials.into_iter().enumerate() {
                div {
                    key: "{i}",
                    style: if i == 0 { "" } else { "margin-left: -8px;" },
                    Avatar { initials: item, index: i, size }
                }
            }
        }
    }
}
