pub mod config;
pub mod domain;
pub mod error;

// Dioxus UI module - routed pages over static fixtures
pub mod ui_dioxus;
