// Core business logic module

pub mod config;
pub mod quota;
pub mod tools;

// Re-export commonly used items
pub use config::Config;
pub use quota::{DiskQuota, OverallStatus, QuotaPoller, QuotaRecord, QuotaSnapshot};
pub use tools::{find_executable, locate_tool, open_cleanup_tool, ToolAvailability};
