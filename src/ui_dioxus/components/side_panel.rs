use dioxus::prelude::*;

use crate::domain::tone::{Tone, BORDER, SURFACE, TEXT_DARK, TEXT_GRAY};

/// One entry of the side menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub icon: &'static str,
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ENTRIES: [NavEntry; 7] = [
    NavEntry { icon: "📊", label: "Dashboard", path: "/dashboard" },
    NavEntry { icon: "📁", label: "Projects", path: "/projects" },
    NavEntry { icon: "✓", label: "Tasks", path: "/tasks" },
    NavEntry { icon: "📅", label: "Calendar", path: "/calendar" },
    NavEntry { icon: "👥", label: "Team", path: "/team" },
    NavEntry { icon: "📈", label: "Reports", path: "/reports" },
    NavEntry { icon: "⚙️", label: "Settings", path: "/settings" },
];

/// The menu entry whose path is exactly `current_path`, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    NAV_ENTRIES.iter().find(|entry| entry.path == current_path)
}

#[component]
pub fn SidePanel(current_path: String) -> Element {
    let active = active_entry(&current_path).map(|entry| entry.path);

    rsx! {
        aside {
            class: "side-panel",
            style: "width: 240px; height: 100vh; background: {SURFACE}; border-right: 1px solid {BORDER}; position: fixed; left: 0; top: 0; display: flex; flex-direction: column;",

            div {
                style: "padding: 20px 24px; border-bottom: 1px solid {BORDER};",
                BrandMark {}
            }

            nav {
                style: "flex: 1; padding: 16px 12px;",
                for entry in NAV_ENTRIES.iter() {
                    NavItem {
                        key: "{entry.path}",
                        entry: *entry,
                        active: active == Some(entry.path),
                    }
                }
            }
        }
    }
}

#[component]
fn NavItem(entry: NavEntry, active: bool) -> Element {
    let (background, color, weight) = if active {
        ("#eff6ff", Tone::Primary.color(), 500)
    } else {
        ("transparent", TEXT_GRAY, 400)
    };

    rsx! {
        Link {
            to: entry.path,
            div {
                class: if active { "nav-item active" } else { "nav-item" },
                "data-active": if active { "true" } else { "false" },
                style: "display: flex; align-items: center; gap: 12px; padding: 10px 12px; border-radius: 8px; margin-bottom: 4px; background: {background}; color: {color}; text-decoration: none;",
                span { style: "font-size: 18px;", "{entry.icon}" }
                span { style: "font-size: 14px; font-weight: {weight};", "{entry.label}" }
            }
        }
    }
}

/// "W" logo with the workspace name and plan.
#[component]
pub fn BrandMark() -> Element {
    let primary = Tone::Primary.color();
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px;",
            div {
                style: "width: 32px; height: 32px; background: {primary}; border-radius: 8px; display: flex; align-items: center; justify-content: center; color: white; font-weight: 700; font-size: 14px;",
                "W"
            }
            div {
                div { style: "font-size: 14px; font-weight: 600; color: {TEXT_DARK};", "Workspace" }
                div { style: "font-size: 12px; color: {TEXT_GRAY};", "Standard Plan" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_order() {
        let labels: Vec<_> = NAV_ENTRIES.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            vec!["Dashboard", "Projects", "Tasks", "Calendar", "Team", "Reports", "Settings"]
        );
    }

    #[test]
    fn test_active_entry_is_exact_match() {
        assert_eq!(active_entry("/team").map(|e| e.label), Some("Team"));
        assert!(active_entry("/team/").is_none());
        assert!(active_entry("/taskmaster").is_none());
        assert!(active_entry("/subadmin").is_none());
        assert!(active_entry("/").is_none());
    }
}
