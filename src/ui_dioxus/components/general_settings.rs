use dioxus::prelude::*;

use crate::domain::settings::Appearance;
use crate::domain::tone::TEXT_GRAY;
use crate::ui_dioxus::components::settings_panel::{Field, SectionHeading, SettingsPanel, INPUT_STYLE};
use crate::ui_dioxus::components::AppearanceSettings;
use crate::ui_dioxus::sample_data::{DATE_FORMATS, TIMEZONES};

#[component]
pub fn GeneralSettings(appearance: Appearance, on_appearance: EventHandler<Appearance>) -> Element {
    rsx! {
        SettingsPanel {
            title: "General Settings",
            subtitle: "Configure your workspace basics, localization, and appearance",

            div {
                style: "margin-bottom: 32px;",
                SectionHeading { title: "Workspace Details" }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field {
                        label: "Workspace Name",
                        input { r#type: "text", value: "Acme Marketing Group", style: "{INPUT_STYLE}" }
                    }
                    Field {
                        label: "Workspace URL",
                        div {
                            style: "display: flex; align-items: center;",
                            span {
                                style: "height: 40px; padding: 0 12px; background: #f3f4f6; border: 1px solid #d1d5db; border-right: none; border-radius: 8px 0 0 8px; display: flex; align-items: center; font-size: 14px; color: {TEXT_GRAY};",
                                "promanage.com/"
                            }
                            input {
                                r#type: "text",
                                value: "acme-marketing",
                                style: "{INPUT_STYLE} border-radius: 0 8px 8px 0;",
                            }
                        }
                    }
                }
            }

            div {
                style: "margin-bottom: 32px;",
                SectionHeading { title: "Localization" }
                div {
                    style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                    Field {
                        label: "Timezone",
                        select {
                            style: "{INPUT_STYLE}",
                            for zone in TIMEZONES {
                                option { key: "{zone}", "{zone}" }
                            }
                        }
                    }
                    Field {
                        label: "Date Format",
                        select {
                            style: "{INPUT_STYLE}",
                            for format in DATE_FORMATS {
                                option { key: "{format}", "{format}" }
                            }
                        }
                    }
                }
            }

            div {
                SectionHeading { title: "Appearance" }
                p {
                    style: "font-size: 14px; color: {TEXT_GRAY}; margin: -8px 0 16px 0;",
                    "Customize how the interface looks on your device."
                }
                AppearanceSettings {
                    selected: appearance,
                    on_select: move |mode| on_appearance.call(mode),
                }
            }
        }
    }
}
