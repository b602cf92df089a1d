// quota-tray library - public API

// Re-export error types
pub mod error;
pub use error::{QuotaError, Result};

// Module declarations
pub mod commands;
pub mod core;
pub mod host;
pub mod ui;

// Re-export commonly used types
pub use crate::core::config::Config;

// Initialize logging
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
