pub mod app;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod package;
pub mod reconciler;
pub mod ui;
pub mod version;
