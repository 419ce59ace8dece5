use dioxus::prelude::*;

use crate::domain::tone::{Tone, BACKGROUND, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{Field, INPUT_STYLE, SECONDARY_BUTTON};
use crate::ui_dioxus::components::AuthBrandBar;
use crate::ui_dioxus::router::Route;

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// Years offered by the date-of-birth picker, newest first
const FIRST_BIRTH_YEAR: i32 = 1940;
const LAST_BIRTH_YEAR: i32 = 2010;

#[component]
pub fn SignupPage() -> Element {
    let primary = Tone::Primary.color();
    let years: Vec<i32> = (FIRST_BIRTH_YEAR..=LAST_BIRTH_YEAR).rev().collect();

    rsx! {
        div {
            class: "signup",
            style: "min-height: 100vh; background: {BACKGROUND}; font-family: Inter, system-ui, sans-serif;",

            AuthBrandBar {
                "Already have an account? "
                Link {
                    to: Route::Login {},
                    class: "auth-link",
                    span { style: "color: {primary}; font-weight: 500;", "Log in" }
                }
            }

            div {
                style: "display: flex; justify-content: center; padding: 48px 16px;",
                div {
                    style: "width: 100%; max-width: 560px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 40px;",

                    div {
                        style: "text-align: center; margin-bottom: 32px;",
                        h1 { style: "font-size: 28px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "Create your account" }
                        p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Start collaborating with your team today." }
                    }

                    form {
                        style: "display: flex; flex-direction: column; gap: 20px;",
                        div {
                            style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                            Field { label: "First Name", input { r#type: "text", placeholder: "John", style: "{INPUT_STYLE}" } }
                            Field { label: "Last Name", input { r#type: "text", placeholder: "Doe", style: "{INPUT_STYLE}" } }
                        }
                        Field { label: "Phone Number", input { r#type: "tel", placeholder: "+1 (555) 000-0000", style: "{INPUT_STYLE}" } }
                        Field { label: "Email Address", input { r#type: "email", placeholder: "name@company.com", style: "{INPUT_STYLE}" } }
                        Field { label: "Password", input { r#type: "password", placeholder: "Create a password", style: "{INPUT_STYLE}" } }
                        Field { label: "Re-enter Password", input { r#type: "password", placeholder: "Confirm your password", style: "{INPUT_STYLE}" } }

                        Field {
                            label: "Date of Birth",
                            div {
                                class: "date-of-birth",
                                style: "display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 12px;",
                                select {
                                    style: "{INPUT_STYLE}",
                                    option { value: "", "Month" }
                                    for month in MONTHS {
                                        option { key: "{month}", value: "{month}", "{month}" }
                                    }
                                }
                                select {
                                    style: "{INPUT_STYLE}",
                                    option { value: "", "Day" }
                                    for day in 1..=31u32 {
                                        option { key: "{day}", value: "{day}", "{day}" }
                                    }
                                }
                                select {
                                    style: "{INPUT_STYLE}",
                                    option { value: "", "Year" }
                                    for year in years {
                                        option { key: "{year}", value: "{year}", "{year}" }
                                    }
                                }
                            }
                        }

                        label {
                            style: "display: flex; align-items: flex-start; gap: 8px; font-size: 13px; color: {TEXT_GRAY};",
                            input { r#type: "checkbox", style: "margin-top: 2px;" }
                            span {
                                "I agree to the "
                                a { href: "#", style: "color: {primary}; text-decoration: none;", "Terms of Service" }
                                " and "
                                a { href: "#", style: "color: {primary}; text-decoration: none;", "Privacy Policy" }
                            }
                        }

                        button {
                            r#type: "button",
                            style: "height: 44px; background: {primary}; border: none; border-radius: 8px; font-size: 15px; font-weight: 600; color: white; cursor: pointer;",
                            "Create Account"
                        }
                    }

                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin: 24px 0; font-size: 12px; color: {TEXT_GRAY};",
                        div { style: "flex: 1; height: 1px; background: {BORDER};" }
                        "OR SIGN UP WITH"
                        div { style: "flex: 1; height: 1px; background: {BORDER};" }
                    }

                    div {
                        style: "display: grid; grid-template-columns: 1fr 1fr; gap: 12px;",
                        button { r#type: "button", style: "{SECONDARY_BUTTON}", "G  Google" }
                        button { r#type: "button", style: "{SECONDARY_BUTTON}", "⊞  Microsoft" }
                    }
                }
            }
        }
    }
}
