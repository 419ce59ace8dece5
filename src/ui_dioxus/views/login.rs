use dioxus::prelude::*;

use crate::domain::tone::{Tone, BACKGROUND, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{Field, INPUT_STYLE, SECONDARY_BUTTON};
use crate::ui_dioxus::components::AuthBrandBar;
use crate::ui_dioxus::router::Route;

#[component]
pub fn LoginPage() -> Element {
    let primary = Tone::Primary.color();

    rsx! {
        div {
            class: "login",
            style: "min-height: 100vh; background: {BACKGROUND}; font-family: Inter, system-ui, sans-serif;",

            AuthBrandBar {
                "Need Help? "
                a { href: "#", style: "color: {primary}; text-decoration: none; font-weight: 500;", "Contact Support" }
            }

            div {
                style: "display: flex; justify-content: center; padding: 64px 16px;",
                div {
                    style: "width: 100%; max-width: 420px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 40px;",

                    div {
                        style: "text-align: center; margin-bottom: 32px;",
                        h1 { style: "font-size: 28px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 8px 0;", "Welcome back" }
                        p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Login to manage your projects" }
                    }

                    form {
                        style: "display: flex; flex-direction: column; gap: 20px;",
                        Field {
                            label: "Email Address",
                            input { r#type: "email", placeholder: "name@company.com", style: "{INPUT_STYLE}" }
                        }
                        div {
                            div {
                                style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                                label { style: "font-size: 14px; font-weight: 500; color: {TEXT_DARK};", "Password" }
                                a { href: "#", style: "font-size: 13px; color: {primary}; text-decoration: none;", "Forgot password?" }
                            }
                            input { r#type: "password", placeholder: "Enter your password", style: "{INPUT_STYLE}" }
                        }
                        button {
                            r#type: "button",
                            style: "height: 44px; background: {primary}; border: none; border-radius: 8px; font-size: 15px; font-weight: 600; color: white; cursor: pointer;",
                            "Sign In"
                        }
                    }

                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin: 24px 0; font-size: 12px; color: {TEXT_GRAY};",
                        div { style: "flex: 1; height: 1px; background: {BORDER};" }
                        "OR"
                        div { style: "flex: 1; height: 1px; background: {BORDER};" }
                    }

                    div {
                        style: "display: flex; flex-direction: column; gap: 12px;",
                        button { r#type: "button", style: "{SECONDARY_BUTTON}", "G  Sign in with Google" }
                        button { r#type: "button", style: "{SECONDARY_BUTTON}", "🔑  Sign in with SSO" }
                    }

                    p {
                        style: "text-align: center; font-size: 14px; color: {TEXT_GRAY}; margin: 24px 0 0 0;",
                        "Don't have an account? "
                        Link {
                            to: Route::Signup {},
                            class: "auth-link",
                            span { style: "color: {primary}; font-weight: 500;", "Sign up" }
                        }
                    }
                }
            }
        }
    }
}
