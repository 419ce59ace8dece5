use dioxus::prelude::*;

use crate::domain::report::{bar_heights, group_thousands, MemberProductivity, TaskDistribution, WeeklyCount, DONUT_RADIUS};
use crate::domain::tone::{initials, Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};
use crate::ui_dioxus::components::{Avatar, Card, CardHeader, MetricCard, ProgressBar, StatusDot};
use crate::ui_dioxus::sample_data;

#[component]
pub fn ReportsPage() -> Element {
    let cards = sample_data::report_stats().cards();
    let series = sample_data::tasks_over_time();
    let distribution = sample_data::task_distribution();
    let members = sample_data::member_productivity();
    let primary = Tone::Primary.color();
    let outline = format!("height: 36px; padding: 0 14px; background: {SURFACE}; border: 1px solid {BORDER}; border-radius: 8px; font-size: 13px; font-weight: 500; color: {TEXT_DARK}; cursor: pointer;");

    rsx! {
        div {
            class: "reports",

            div {
                style: "margin-bottom: 24px;",
                div { class: "breadcrumb", style: "font-size: 13px; color: {TEXT_GRAY}; margin-bottom: 8px;", "Workspace › Reports" }
                div {
                    style: "display: flex; justify-content: space-between; align-items: flex-end;",
                    div {
                        h1 { style: "font-size: 30px; font-weight: 700; color: {TEXT_DARK}; margin: 0 0 4px 0;", "Analytics & Reports" }
                        p { style: "font-size: 14px; color: {TEXT_GRAY}; margin: 0;", "Track team productivity and task completion velocity" }
                    }
                    div {
                        style: "display: flex; gap: 8px;",
                        button { r#type: "button", style: "{outline}", "⬇ CSV" }
                        button {
                            r#type: "button",
                            style: "{outline} background: {primary}; border-color: {primary}; color: white;",
                            "⬇ Export PDF"
                        }
                    }
                }
            }

            div {
                class: "report-filters",
                style: "display: flex; align-items: center; gap: 8px; margin-bottom: 24px;",
                button { r#type: "button", style: "{outline}", "📅 Oct 1, 2023 - Oct 30, 2023 ▾" }
                button { r#type: "button", style: "{outline}", "👥 All Members ▾" }
                button { r#type: "button", style: "{outline}", "⚲ Filters" }
                div { style: "margin-left: auto; font-size: 12px; font-weight: 600; color: {TEXT_GRAY};", "AUTO-REFRESH: 5M" }
            }

            div {
                class: "report-stats",
                style: "display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; margin-bottom: 24px;",
                for card in cards {
                    MetricCard { key: "{card.title}", card }
                }
            }

            div {
                style: "display: grid; grid-template-columns: 2fr 1fr; gap: 24px; margin-bottom: 24px;",
                Card {
                    CardHeader {
                        title: "Tasks Completed over Time",
                        StatusDot { tone: Tone::Primary }
                        span { style: "font-size: 12px; color: {TEXT_GRAY};", "Completed Tasks" }
                    }
                    BarChart { series }
                }
                Card {
                    CardHeader { title: "Task Distribution by Status" }
                    DonutChart { distribution }
                }
            }

            Card {
                CardHeader {
                    title: "Individual Member Productivity",
                    a { href: "#", style: "font-size: 14px; font-weight: 500; color: {primary}; text-decoration: none;", "View all members →" }
                }
                for (i, member) in members.into_iter().enumerate() {
                    ProductivityRow { key: "{member.name}", member, index: i }
                }
            }
        }
    }
}

/// Vertical bars scaled against the tallest; the tallest is highlighted.
#[component]
pub fn BarChart(series: Vec<WeeklyCount>) -> Element {
    let bars: Vec<(WeeklyCount, String, &'static str)> = series
        .iter()
        .cloned()
        .zip(bar_heights(&series))
        .map(|(point, height)| {
            let fill = if height >= 100.0 { Tone::Primary.color() } else { "#bfdbfe" };
            (point, format!("{height:.1}"), fill)
        })
        .collect();

    rsx! {
        div {
            class: "bar-chart",
            style: "display: flex; align-items: flex-end; gap: 12px;",
            for (point, height, fill) in bars {
                div {
                    key: "{point.label}",
                    style: "flex: 1; display: flex; flex-direction: column; align-items: center; gap: 8px;",
                    div {
                        style: "width: 100%; height: 200px; display: flex; align-items: flex-end;",
                        div {
                            class: "bar",
                            title: "{point.count}",
                            style: "width: 100%; height: {height}%; background: {fill}; border-radius: 4px 4px 0 0;",
                        }
                    }
                    span { style: "font-size: 10px; font-weight: 500; color: {TEXT_GRAY};", "{point.label}" }
                }
            }
        }
    }
}

/// Status share donut with its legend.
#[component]
pub fn DonutChart(distribution: TaskDistribution) -> Element {
    let segments = distribution.donut_segments();
    let total = distribution.total();
    let legend = distribution.entries();

    rsx! {
        div {
            class: "donut-chart",
            div {
                style: "position: relative; width: 180px; height: 180px; margin: 0 auto 24px auto;",
                svg {
                    view_box: "0 0 100 100",
                    width: "180",
                    height: "180",
                    circle { cx: "50", cy: "50", r: "{DONUT_RADIUS}", fill: "none", stroke: "#f3f4f6", stroke_width: "12" }
                    for segment in segments {
                        circle {
                            key: "{segment.label}",
                            cx: "50",
                            cy: "50",
                            r: "{DONUT_RADIUS}",
                            fill: "none",
                            stroke: "{segment.tone.color()}",
                            stroke_width: "12",
                            stroke_dasharray: "{segment.dasharray()}",
                            stroke_dashoffset: "{segment.dashoffset()}",
                            transform: "rotate(-90 50 50)",
                        }
                    }
                }
                div {
                    style: "position: absolute; inset: 0; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                    div { class: "donut-total", style: "font-size: 24px; font-weight: 700; color: {TEXT_DARK};", "{total}" }
                    div { style: "font-size: 12px; color: {TEXT_GRAY};", "Total Tasks" }
                }
            }
            for (label, value, tone) in legend {
                div {
                    key: "{label}",
                    class: "legend-row",
                    style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 10px;",
                    div {
                        style: "display: flex; align-items: center; gap: 8px;",
                        StatusDot { tone, size: 10 }
                        span { style: "font-size: 14px; color: {TEXT_DARK};", "{label}" }
                    }
                    span { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{value}" }
                }
            }
        }
    }
}

#[component]
fn ProductivityRow(member: MemberProductivity, index: usize) -> Element {
    rsx! {
        div {
            class: "productivity-row",
            style: "display: flex; align-items: center; gap: 16px;",
            Avatar { initials: initials(&member.name), index, size: 40 }
            div {
                style: "flex: 1;",
                div {
                    style: "display: flex; justify-content: space-between; margin-bottom: 6px;",
                    span { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "{member.name}" }
                    span { style: "font-size: 13px; color: {TEXT_GRAY};", "{group_thousands(member.tasks)} Tasks" }
                }
                ProgressBar { percent: member.percentage, tone: Tone::Primary, height: 8 }
            }
        }
    }
}
