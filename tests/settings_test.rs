use std::rc::Rc;

use dioxus::prelude::*;
use dioxus::dioxus_core::ElementId;
use dioxus_html::{PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData};
use promanage::domain::settings::SettingsTab;
use promanage::ui_dioxus::views::settings_view::SettingsPageProps;
use promanage::ui_dioxus::views::SettingsPage;
use rstest::rstest;

fn render_settings(tab: SettingsTab) -> String {
    let mut dom = VirtualDom::new_with_props(SettingsPage, SettingsPageProps::builder().initial_tab(tab).build());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn heading(tab: SettingsTab) -> &'static str {
    match tab {
        SettingsTab::General => "General Settings",
        SettingsTab::Profile => "Profile Settings",
        SettingsTab::Notifications => "Notification Preferences",
        SettingsTab::Billing => "Billing and Subscription",
        SettingsTab::Integrations => "Connect your favorite tools",
    }
}

fn active_tab_id(html: &str) -> Option<&str> {
    let start = html.find("settings-tab active\"")?;
    let rest = &html[start..];
    let value = &rest[rest.find("data-tab=\"")? + "data-tab=\"".len()..];
    Some(&value[..value.find('"')?])
}

fn click(dom: &mut VirtualDom, id: usize) -> String {
    let data = Rc::new(PlatformEventData::new(Box::new(SerializedMouseData::default())));
    dom.handle_event("click", data, ElementId(id), true);
    dom.render_immediate_to_vec();
    dioxus_ssr::render(dom)
}

// Walks element ids until clicking one makes `tab` active.
fn click_until_active(dom: &mut VirtualDom, tab: SettingsTab) -> String {
    for id in 1..1000 {
        let html = click(dom, id);
        if active_tab_id(&html) == Some(tab.id()) {
            return html;
        }
    }
    panic!("no element switches to the {} tab", tab.id());
}

#[test]
fn test_clicking_tabs_switches_panel() {
    dioxus_html::set_event_converter(Box::new(SerializedHtmlEventConverter));
    let mut dom = VirtualDom::new_with_props(
        SettingsPage,
        SettingsPageProps::builder().initial_tab(SettingsTab::General).build(),
    );
    dom.rebuild_in_place();
    assert_eq!(active_tab_id(&dioxus_ssr::render(&dom)), Some("general"));

    let order = [
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Billing,
        SettingsTab::Integrations,
        SettingsTab::General,
    ];
    for tab in order {
        let html = click_until_active(&mut dom, tab);

        assert!(html.contains(heading(tab)), "{} panel missing", tab.id());
        assert_eq!(html.matches("settings-tab active").count(), 1);
        for other in SettingsTab::ALL.into_iter().filter(|t| *t != tab) {
            assert!(!html.contains(heading(other)), "{} panel still shown", other.id());
        }
    }
}

#[rstest]
#[case::general(SettingsTab::General, "General Settings")]
#[case::profile(SettingsTab::Profile, "Profile Settings")]
#[case::notifications(SettingsTab::Notifications, "Notification Preferences")]
#[case::billing(SettingsTab::Billing, "Billing and Subscription")]
#[case::integrations(SettingsTab::Integrations, "Connect your favorite tools")]
fn test_selected_tab_shows_its_panel(#[case] tab: SettingsTab, #[case] heading: &str) {
    let html = render_settings(tab);

    assert!(html.contains(heading));
    assert_eq!(html.matches("settings-tab active").count(), 1);
    assert!(html.contains(&format!("data-tab=\"{}\"", tab.id())));
}

#[test]
fn test_only_selected_panel_is_rendered() {
    let html = render_settings(SettingsTab::Billing);

    assert!(!html.contains("General Settings"));
    assert!(!html.contains("Profile Settings"));
    assert!(!html.contains("Notification Preferences"));
}

#[test]
fn test_every_tab_is_listed() {
    let html = render_settings(SettingsTab::General);

    for tab in SettingsTab::ALL {
        assert!(html.contains(tab.label()));
    }
    assert_eq!(html.matches("class=\"settings-tab\"").count(), SettingsTab::ALL.len() - 1);
}

#[test]
fn test_general_tab_marks_light_appearance() {
    let html = render_settings(SettingsTab::General);
    assert_eq!(html.matches("appearance-card selected").count(), 1);
}
