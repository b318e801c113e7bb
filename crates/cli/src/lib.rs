pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod source;

pub use taskview_core as core;
pub use taskview_core::model;

pub use config::AppConfig;
