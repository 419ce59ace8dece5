// Dioxus UI module - routed pages over static fixtures
pub mod app;
pub mod components;
pub mod router;
pub mod sample_data;
pub mod views;

pub use app::{App, RoutedApp};
pub use router::Route;
