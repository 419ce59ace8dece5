use dioxus::prelude::*;

use crate::domain::settings::{SettingsState, SettingsTab};
use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{
    BillingSettings, GeneralSettings, IntegrationSettings, NotificationSettings, ProfileSettings,
};

/// Settings page with its own tab menu. The active tab and appearance
/// mode live only as long as the page is mounted.
#[component]
pub fn SettingsPage(#[props(default)] initial_tab: SettingsTab) -> Element {
    let mut state = use_signal(|| SettingsState {
        tab: initial_tab,
        ..Default::default()
    });
    let current = state();

    rsx! {
        div {
            class: "settings-container",
            style: "display: flex; gap: 32px; align-items: flex-start;",

            div {
                class: "settings-tabs",
                style: "width: 256px; flex-shrink: 0; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 16px;",
                div {
                    style: "margin-bottom: 16px;",
                    h2 { style: "font-size: 14px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Workspace Settings" }
                    p { style: "font-size: 12px; color: {TEXT_GRAY}; margin: 0;", "Manage your team's preferences" }
                }
                nav {
                    for tab in SettingsTab::ALL {
                        TabButton {
                            key: "{tab}",
                            tab,
                            active: current.is_active(tab),
                            onclick: move |_| {
                                tracing::debug!(%tab, "settings tab selected");
                                state.write().select_tab(tab);
                            }
                        }
                    }
                }
            }

            div {
                class: "settings-content",
                style: "flex: 1; min-width: 0;",
                {match current.tab {
                    SettingsTab::General => rsx! {
                        GeneralSettings {
                            appearance: current.appearance,
                            on_appearance: move |mode| state.write().select_appearance(mode),
                        }
                    },
                    SettingsTab::Profile => rsx! { ProfileSettings {} },
                    SettingsTab::Notifications => rsx! { NotificationSettings {} },
                    SettingsTab::Billing => rsx! { BillingSettings {} },
                    SettingsTab::Integrations => rsx! { IntegrationSettings {} },
                }}
            }
        }
    }
}

#[component]
fn TabButton(tab: SettingsTab, active: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (background, color, weight) = if active {
        ("#eff6ff", Tone::Primary.color(), 500)
    } else {
        ("transparent", TEXT_GRAY, 400)
    };

    rsx! {
        button {
            r#type: "button",
            class: if active { "settings-tab active" } else { "settings-tab" },
            "data-tab": tab.id(),
            style: "width: 100%; display: flex; align-items: center; gap: 12px; padding: 8px 12px; margin-bottom: 4px; border: none; border-radius: 8px; background: {background}; color: {color}; font-size: 14px; font-weight: {weight}; cursor: pointer; text-align: left;",
            onclick: move |evt| onclick.call(evt),
            span { "{tab.icon()}" }
            "{tab.label()}"
        }
    }
}
