use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SettingsTab {
    #[default]
    General,
    Profile,
    Notifications,
    Billing,
    Integrations,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 5] = [
        SettingsTab::General,
        SettingsTab::Profile,
        SettingsTab::Notifications,
        SettingsTab::Billing,
        SettingsTab::Integrations,
    ];

    pub fn id(self) -> &'static str {
        match self {
            SettingsTab::General => "general",
            SettingsTab::Profile => "profile",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Billing => "billing",
            SettingsTab::Integrations => "integrations",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SettingsTab::General => "General",
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Billing => "Billing",
            SettingsTab::Integrations => "Integrations",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SettingsTab::General => "⚙️",
            SettingsTab::Profile => "👤",
            SettingsTab::Notifications => "🔔",
            SettingsTab::Billing => "💳",
            SettingsTab::Integrations => "🔗",
        }
    }
}

impl FromStr for SettingsTab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingsTab::ALL
            .into_iter()
            .find(|tab| tab.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::unknown_label("settings tab", s))
    }
}

impl fmt::Display for SettingsTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Appearance {
    #[default]
    Light,
    Dark,
    System,
}

impl Appearance {
    pub const ALL: [Appearance; 3] = [Appearance::Light, Appearance::Dark, Appearance::System];

    pub fn label(self) -> &'static str {
        match self {
            Appearance::Light => "Light Mode",
            Appearance::Dark => "Dark Mode",
            Appearance::System => "System Default",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Appearance::Light => "High contrast, light background",
            Appearance::Dark => "Easier on eyes in dark space",
            Appearance::System => "Matches your OS settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Appearance::Light => "☀️",
            Appearance::Dark => "🌙",
            Appearance::System => "💻",
        }
    }
}

/// Local view state of the settings page. Lives only as long as the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SettingsState {
    pub tab: SettingsTab,
    pub appearance: Appearance,
}

impl SettingsState {
    pub fn select_tab(&mut self, tab: SettingsTab) {
        self.tab = tab;
    }

    pub fn select_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    pub fn is_active(&self, tab: SettingsTab) -> bool {
        self.tab == tab
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPreference {
    pub trigger: String,
    pub description: String,
    pub email: bool,
    pub desktop: bool,
    pub mobile: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub date: String,
    pub description: String,
    pub amount: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentMethod {
    pub brand: String,
    pub last4: String,
    pub expiry: String,
    pub is_default: bool,
}

impl PaymentMethod {
    pub fn title(&self) -> String {
        format!("{} ending in {}", self.brand, self.last4)
    }

    pub fn subtitle(&self) -> String {
        if self.is_default {
            format!("Expires {} • Default", self.expiry)
        } else {
            format!("Expires {}", self.expiry)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Integration {
    pub name: String,
    pub description: String,
    pub icon: String,
    pub connected: bool,
}

impl Integration {
    pub fn action_label(&self) -> &'static str {
        if self.connected {
            "Configure"
        } else {
            "Connect"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = SettingsState::default();
        assert_eq!(state.tab, SettingsTab::General);
        assert_eq!(state.appearance, Appearance::Light);
    }

    #[test]
    fn test_exactly_one_tab_active() {
        let mut state = SettingsState::default();
        for tab in SettingsTab::ALL {
            state.select_tab(tab);
            let active: Vec<_> = SettingsTab::ALL
                .into_iter()
                .filter(|t| state.is_active(*t))
                .collect();
            assert_eq!(active, vec![tab]);
        }
    }

    #[test]
    fn test_appearance_does_not_move_tab() {
        let mut state = SettingsState::default();
        state.select_tab(SettingsTab::Billing);
        state.select_appearance(Appearance::Dark);
        assert_eq!(state.tab, SettingsTab::Billing);
        assert_eq!(state.appearance, Appearance::Dark);
    }

    #[test]
    fn test_tab_from_id() {
        assert_eq!("billing".parse::<SettingsTab>().unwrap(), SettingsTab::Billing);
        assert_eq!("Profile".parse::<SettingsTab>().unwrap(), SettingsTab::Profile);
        assert!("security".parse::<SettingsTab>().is_err());
    }

    #[test]
    fn test_payment_method_labels() {
        let visa = PaymentMethod {
            brand: "Visa".to_string(),
            last4: "4242".to_string(),
            expiry: "12/2025".to_string(),
            is_default: true,
        };
        assert_eq!(visa.title(), "Visa ending in 4242");
        assert_eq!(visa.subtitle(), "Expires 12/2025 • Default");
    }
}
