pub use taskview_cli::cli;
pub use taskview_cli::commands;
pub use taskview_cli::config;
pub use taskview_cli::logging;
pub use taskview_cli::source;
pub use taskview_cli::AppConfig;

pub use taskview_core as core;
pub use taskview_core::dates;
pub use taskview_core::model;
