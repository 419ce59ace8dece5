use dioxus::prelude::*;
use promanage::ui_dioxus::app::RoutedAppProps;
use promanage::ui_dioxus::{Route, RoutedApp};
use rstest::rstest;

fn render_route(route: Route) -> String {
    let mut dom = VirtualDom::new_with_props(RoutedApp, RoutedAppProps::builder().initial(route).build());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[rstest]
#[case::login(Route::Login {}, "Welcome back")]
#[case::signup(Route::Signup {}, "Create your account")]
#[case::dashboard(Route::Dashboard {}, "Welcome back, Alex")]
#[case::projects(Route::Projects {}, "Active Projects (3)")]
#[case::tasks(Route::Tasks {}, "Project Completion")]
#[case::calendar(Route::Calendar {}, "October 2023")]
#[case::team(Route::Team {}, "Team Management")]
#[case::reports(Route::Reports {}, "Track team productivity")]
#[case::settings(Route::Settings {}, "General Settings")]
#[case::taskmaster(Route::TaskMaster {}, "Active Tasks")]
#[case::subadmin(Route::SubAdmin {}, "Progress Overview")]
#[case::taskflow(Route::TaskFlow {}, "Develop Responsive Dashboard Layout")]
fn test_route_renders_its_heading(#[case] route: Route, #[case] heading: &str) {
    let html = render_route(route);
    assert!(html.contains(heading), "missing {heading:?}");
}

#[test]
fn test_root_path_opens_login() {
    let route: Route = "/".parse().unwrap();
    assert_eq!(route, Route::Login {});

    let html = render_route(route);
    assert!(html.contains("Login to manage your projects"));
    assert!(html.contains("href=\"/signup\""));
}

#[test]
fn test_auth_pages_have_no_side_panel() {
    for route in [Route::Login {}, Route::Signup {}] {
        let html = render_route(route);
        assert!(!html.contains("side-panel"));
    }
}

#[test]
fn test_signup_links_back_to_login() {
    let html = render_route(Route::Signup {});
    assert!(html.contains("href=\"/login\""));
    assert!(html.contains("OR SIGN UP WITH"));
}

#[test]
fn test_unknown_path_renders_not_found() {
    let route: Route = "/no/such/page".parse().unwrap();
    let html = render_route(route);

    assert!(html.contains("Page not found"));
    assert!(html.contains("/no/such/page"));
    assert!(html.contains("href=\"/dashboard\""));
    assert!(!html.contains("side-panel"));
}

#[rstest]
#[case(Route::Dashboard {}, "Dashboard")]
#[case(Route::Projects {}, "Projects")]
#[case(Route::Tasks {}, "Tasks")]
#[case(Route::Calendar {}, "Calendar")]
#[case(Route::Team {}, "Team")]
#[case(Route::Reports {}, "Reports")]
#[case(Route::Settings {}, "Settings")]
fn test_side_panel_marks_current_entry(#[case] route: Route, #[case] label: &str) {
    let html = render_route(route);

    assert_eq!(html.matches("data-active=\"true\"").count(), 1);
    assert_eq!(html.matches("data-active=\"false\"").count(), 6);

    let active = html
        .split("data-active=\"true\"")
        .nth(1)
        .and_then(|rest| rest.split("</a>").next())
        .unwrap();
    assert!(active.contains(label));
}

#[rstest]
#[case(Route::TaskMaster {})]
#[case(Route::SubAdmin {})]
#[case(Route::TaskFlow {})]
fn test_detail_routes_mark_no_entry(#[case] route: Route) {
    let html = render_route(route);

    assert!(html.contains("side-panel"));
    assert_eq!(html.matches("data-active=\"true\"").count(), 0);
    assert_eq!(html.matches("data-active=\"false\"").count(), 7);
}

#[test]
fn test_top_bar_uses_route_title() {
    let html = render_route(Route::SubAdmin {});
    assert!(html.contains("Sub-Admin Portal"));
    assert!(html.contains("Search projects..."));
}
