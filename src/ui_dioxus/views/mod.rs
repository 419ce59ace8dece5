// Signed-in pages
pub mod calendar;
pub mod dashboard;
pub mod projects;
pub mod reports;
pub mod settings_view;
pub mod tasks;
pub mod team;

// Detail and portal pages
pub mod subadmin;
pub mod taskflow;
pub mod taskmaster;

// Pages without the side panel
pub mod login;
pub mod not_found;
pub mod signup;

pub use calendar::{CalendarGrid, CalendarPage};
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use projects::ProjectsPage;
pub use reports::{BarChart, DonutChart, ReportsPage};
pub use settings_view::SettingsPage;
pub use signup::SignupPage;
pub use subadmin::SubAdminPage;
pub use taskflow::TaskFlowPage;
pub use taskmaster::TaskMasterPage;
pub use tasks::TasksPage;
pub use team::TeamPage;
