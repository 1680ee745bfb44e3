pub mod api;
pub mod config;
pub mod logging;
pub mod media;
pub mod ui;
