use dioxus::prelude::*;

use crate::domain::tone::{BORDER, SURFACE, TEXT_GRAY};
use crate::ui_dioxus::components::BrandMark;

/// Top strip of the login and signup screens. The right-hand side
/// (help link or login link) is passed as children.
#[component]
pub fn AuthBrandBar(children: Element) -> Element {
    rsx! {
        div {
            class: "auth-brand-bar",
            style: "height: 56px; background: {SURFACE}; border-bottom: 1px solid {BORDER}; padding: 0 24px; display: flex; align-items: center; justify-content: space-between;",
            BrandMark {}
            div { style: "font-size: 14px; color: {TEXT_GRAY};", {children} }
        }
    }
}
