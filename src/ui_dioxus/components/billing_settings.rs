use dioxus::prelude::*;

use crate::domain::settings::{Invoice, PaymentMethod};
use crate::domain::tone::{Tone, BORDER, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::settings_panel::{primary_button, SectionHeading, SettingsPanel, SECONDARY_BUTTON};
use crate::ui_dioxus::components::Badge;
use crate::ui_dioxus::sample_data;

#[component]
pub fn BillingSettings() -> Element {
    let methods = sample_data::payment_methods();
    let invoices = sample_data::invoices();
    let primary = Tone::Primary.color();
    let manage_button = primary_button();

    rsx! {
        SettingsPanel {
            title: "Billing and Subscription",
            subtitle: "Manage your plan, payment methods, and billing history.",

            div {
                class: "current-plan",
                style: "padding: 24px; border: 2px solid {primary}; border-radius: 12px; background: #eff6ff; margin-bottom: 32px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 20px;",
                    div {
                        div {
                            style: "display: flex; align-items: center; gap: 8px; margin-bottom: 4px;",
                            h2 { style: "font-size: 18px; font-weight: 700; color: {TEXT_DARK}; margin: 0;", "Pro Plan" }
                            Badge { label: "Active", tone: Tone::Success }
                        }
                        p {
                            style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;",
                            "Our most popular plan for scaling teams. Next renewal: June 15, 2024"
                        }
                    }
                    button { r#type: "button", style: "{SECONDARY_BUTTON}", "Cancel Subscription" }
                }
                div {
                    style: "display: flex; align-items: flex-end; gap: 48px;",
                    div {
                        div { style: "font-size: 12px; color: {TEXT_GRAY};", "Price" }
                        div { style: "font-size: 20px; font-weight: 700; color: {TEXT_DARK};", "$49/month" }
                    }
                    div {
                        div { style: "font-size: 12px; color: {TEXT_GRAY};", "Users" }
                        div { style: "font-size: 20px; font-weight: 700; color: {TEXT_DARK};", "Unlimited" }
                    }
                    div {
                        style: "margin-left: auto;",
                        button { r#type: "button", style: "{manage_button}", "Manage Subscription" }
                    }
                }
            }

            div {
                style: "margin-bottom: 32px;",
                div {
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
                    SectionHeading { title: "Payment Methods" }
                    button {
                        r#type: "button",
                        style: "background: none; border: none; font-size: 14px; font-weight: 500; color: {primary}; cursor: pointer;",
                        "+ Add New Card"
                    }
                }
                for method in methods {
                    PaymentMethodRow { key: "{method.last4}", method }
                }
            }

            div {
                SectionHeading { title: "Billing History" }
                div {
                    class: "billing-history",
                    style: "border: 1px solid {BORDER}; border-radius: 8px; overflow: hidden;",
                    div {
                        style: "display: grid; grid-template-columns: 1.2fr 2fr 1fr 1fr 0.8fr; padding: 12px 16px; background: #f9fafb; font-size: 12px; font-weight: 600; color: {TEXT_GRAY}; text-transform: uppercase;",
                        div { "Date" }
                        div { "Description" }
                        div { "Amount" }
                        div { "Status" }
                        div { "Invoice" }
                    }
                    for (i, invoice) in invoices.into_iter().enumerate() {
                        InvoiceRow { key: "{i}", invoice }
                    }
                }
            }
        }
    }
}

#[component]
fn PaymentMethodRow(method: PaymentMethod) -> Element {
    let primary = Tone::Primary.color();
    let border = if method.is_default { primary } else { BORDER };

    rsx! {
        div {
            class: "payment-method",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; border: 1px solid {border}; border-radius: 8px; margin-bottom: 12px;",
            div {
                style: "display: flex; align-items: center; gap: 12px;",
                div {
                    style: "width: 48px; height: 32px; border-radius: 4px; background: #f3f4f6; display: flex; align-items: center; justify-content: center; font-size: 11px; font-weight: 700; color: {TEXT_DARK};",
                    "{method.brand}"
                }
                div {
                    div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{method.title()}" }
                    div { style: "font-size: 12px; color: {TEXT_GRAY};", "{method.subtitle()}" }
                }
            }
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                if !method.is_default {
                    button {
                        r#type: "button",
                        style: "background: none; border: none; font-size: 13px; font-weight: 500; color: {primary}; cursor: pointer;",
                        "Set as default"
                    }
                }
                button { r#type: "button", title: "Edit", style: "background: none; border: none; cursor: pointer;", "✏️" }
                button { r#type: "button", title: "Remove", style: "background: none; border: none; cursor: pointer;", "🗑" }
            }
        }
    }
}

#[component]
fn InvoiceRow(invoice: Invoice) -> Element {
    let primary = Tone::Primary.color();

    rsx! {
        div {
            style: "display: grid; grid-template-columns: 1.2fr 2fr 1fr 1fr 0.8fr; align-items: center; padding: 14px 16px; border-top: 1px solid {BORDER}; font-size: 14px; color: {TEXT_DARK};",
            div { "{invoice.date}" }
            div { "{invoice.description}" }
            div { style: "font-weight: 500;", "{invoice.amount}" }
            div { Badge { label: invoice.status.clone(), tone: Tone::Success } }
            div {
                button {
                    r#type: "button",
                    style: "background: none; border: none; font-size: 13px; font-weight: 500; color: {primary}; cursor: pointer;",
                    "PDF"
                }
            }
        }
    }
}
