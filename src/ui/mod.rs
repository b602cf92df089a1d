// UI and formatting module

pub mod formatters;
pub mod prompts;
pub mod quota_formatters;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_bytes, format_timestamp};
pub use prompts::{dimmed, success, warn};
pub use quota_formatters::{print_records, print_snapshot, snapshot_to_json};
