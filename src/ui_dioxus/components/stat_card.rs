use dioxus::prelude::*;

use crate::domain::metrics::{stat_progress_tone, StatCard, StatTile};
use crate::domain::tone::{BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::ProgressBar;

/// Headline number with an optional trend line underneath.
#[component]
pub fn MetricCard(card: StatCard) -> Element {
    let change_color = card.trend.tone().color();

    rsx! {
        div {
            class: "stat-card",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 20px;",
            div {
                style: "font-size: 12px; font-weight: 600; letter-spacing: 0.05em; color: {TEXT_GRAY}; margin-bottom: 8px;",
                "{card.title}"
            }
            div {
                style: "display: flex; align-items: baseline; gap: 8px;",
                span { style: "font-size: 28px; font-weight: 700; color: {TEXT_DARK};", "{card.value}" }
                if let Some(change) = &card.change {
                    span { style: "font-size: 13px; font-weight: 500; color: {change_color};", "{change}" }
                }
            }
        }
    }
}

/// Stat card with an icon chip and an optional progress bar.
#[component]
pub fn MetricTile(tile: StatTile) -> Element {
    let tint = tile.tint.tint();
    let icon_color = tile.tint.color();
    let change_color = tile.card.trend.tone().color();

    rsx! {
        div {
            class: "stat-tile",
            style: "background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 12px; padding: 20px;",
            div {
                style: "display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 12px;",
                div {
                    div { style: "font-size: 13px; color: {TEXT_GRAY}; margin-bottom: 4px;", "{tile.card.title}" }
                    div { style: "font-size: 28px; font-weight: 700; color: {TEXT_DARK};", "{tile.card.value}" }
                }
                div {
                    style: "width: 40px; height: 40px; border-radius: 10px; background: {tint}; color: {icon_color}; display: flex; align-items: center; justify-content: center; font-size: 18px;",
                    "{tile.icon}"
                }
            }
            if let Some(progress) = tile.progress {
                ProgressBar { percent: progress, tone: stat_progress_tone(progress) }
            }
            if let Some(change) = &tile.card.change {
                div { style: "font-size: 12px; font-weight: 500; color: {change_color}; margin-top: 8px;", "{change}" }
            }
        }
    }
}
