use dioxus::prelude::*;

use crate::ui_dioxus::app::AppShell;
use crate::ui_dioxus::views::*;

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Login {})]
    #[route("/login", LoginPage)]
    Login {},

    #[route("/signup", SignupPage)]
    Signup {},

    #[layout(AppShell)]
        #[route("/dashboard", DashboardPage)]
        Dashboard {},

        #[route("/projects", ProjectsPage)]
        Projects {},

        #[route("/tasks", TasksPage)]
        Tasks {},

        #[route("/calendar", CalendarPage)]
        Calendar {},

        #[route("/team", TeamPage)]
        Team {},

        #[route("/reports", ReportsPage)]
        Reports {},

        #[route("/settings", SettingsRoute)]
        Settings {},

        #[route("/taskmaster", TaskMasterPage)]
        TaskMaster {},

        #[route("/subadmin", SubAdminPage)]
        SubAdmin {},

        #[route("/taskflow", TaskFlowPage)]
        TaskFlow {},
    #[end_layout]

    #[route("/:..segments", NotFoundPage)]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Text shown in the top bar while this route is open.
    pub fn title(&self) -> &'static str {
        match self {
            Route::Login {} => "Login",
            Route::Signup {} => "Sign Up",
            Route::Dashboard {} => "Dashboard",
            Route::Projects {} => "Projects",
            Route::Tasks {} => "Tasks",
            Route::Calendar {} => "Calendar",
            Route::Team {} => "Team",
            Route::Reports {} => "Reports",
            Route::Settings {} => "Settings",
            Route::TaskMaster {} => "TaskMaster",
            Route::SubAdmin {} => "Sub-Admin Portal",
            Route::TaskFlow {} => "TaskFlow",
            Route::NotFound { .. } => "Not Found",
        }
    }

    /// Whether the page renders inside the side panel and top bar.
    pub fn has_chrome(&self) -> bool {
        !matches!(
            self,
            Route::Login {} | Route::Signup {} | Route::NotFound { .. }
        )
    }
}

// The settings route always opens on the default tab
#[component]
fn SettingsRoute() -> Element {
    rsx! { SettingsPage {} }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_redirects_to_login() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Login {});
    }

    #[test]
    fn test_paths() {
        assert_eq!(Route::Dashboard {}.to_string(), "/dashboard");
        assert_eq!(Route::SubAdmin {}.to_string(), "/subadmin");
        assert_eq!("/taskflow".parse::<Route>().unwrap(), Route::TaskFlow {});
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route = "/does/not/exist".parse::<Route>().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
        assert!(!route.has_chrome());
    }

    #[test]
    fn test_chrome() {
        assert!(!Route::Login {}.has_chrome());
        assert!(!Route::Signup {}.has_chrome());
        assert!(Route::Calendar {}.has_chrome());
        assert!(Route::TaskFlow {}.has_chrome());
    }

    #[test]
    fn test_titles() {
        assert_eq!(Route::Team {}.title(), "Team");
        assert_eq!(Route::SubAdmin {}.title(), "Sub-Admin Portal");
    }
}
