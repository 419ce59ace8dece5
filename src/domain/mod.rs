pub mod activity;
pub mod calendar;
pub mod metrics;
pub mod project;
pub mod report;
pub mod settings;
pub mod task;
pub mod team;
pub mod tone;
