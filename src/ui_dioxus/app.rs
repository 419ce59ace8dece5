use dioxus::prelude::*;

use crate::domain::tone::BACKGROUND;
use crate::ui_dioxus::components::{SidePanel, TopBar};
use crate::ui_dioxus::router::Route;

/// Root component: the router over the platform's default history.
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}

/// Router starting at `initial` instead of the platform location.
///
/// Used for rendering a single route headlessly.
#[component]
pub fn RoutedApp(initial: Route) -> Element {
    rsx! {
        Router::<Route> {
            config: move || {
                RouterConfig::default().history(MemoryHistory::with_initial_path(initial.clone()))
            }
        }
    }
}

/// Shared chrome around every signed-in page.
#[component]
pub fn AppShell() -> Element {
    let route = use_route::<Route>();
    let current_path = route.to_string();
    tracing::debug!(path = %current_path, "rendering page");

    rsx! {
        div {
            style: "min-height: 100vh; background: {BACKGROUND}; font-family: Inter, system-ui, sans-serif;",

            SidePanel { current_path: current_path.clone() }

            div {
                style: "margin-left: 240px;",
                TopBar { title: route.title() }

                main {
                    style: "padding: 96px 32px 32px 32px;",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
