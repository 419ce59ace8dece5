pub mod auth_brand_bar;
pub mod avatar;
pub mod badge;
pub mod card;
pub mod progress_bar;
pub mod side_panel;
pub mod stat_card;
pub mod top_bar;

// Settings tab panels
pub mod appearance_settings;
pub mod billing_settings;
pub mod general_settings;
pub mod integration_settings;
pub mod notification_settings;
pub mod profile_settings;
pub mod settings_panel;

pub use auth_brand_bar::AuthBrandBar;
pub use avatar::{Avatar, AvatarStack};
pub use badge::{Badge, StatusDot};
pub use card::{Card, CardHeader};
pub use progress_bar::ProgressBar;
pub use side_panel::{active_entry, BrandMark, NavEntry, SidePanel, NAV_ENTRIES};
pub use stat_card::{MetricCard, MetricTile};
pub use top_bar::TopBar;

pub use appearance_settings::AppearanceSettings;
pub use billing_settings::BillingSettings;
pub use general_settings::GeneralSettings;
pub use integration_settings::IntegrationSettings;
pub use notification_settings::NotificationSettings;
pub use profile_settings::ProfileSettings;
