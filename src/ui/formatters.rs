use chrono::{Local, TimeZone};
use humansize::{format_size, FormatSizeOptions, BINARY};

/// Format a byte count with binary units and one decimal ("2.9 MiB")
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes, FormatSizeOptions::from(BINARY).decimal_places(1))
}

/// Format a unix timestamp as local time (HH:MM:SS)
pub fn format_timestamp(unix_secs: i64) -> String {
    match Local.timestamp_opt(unix_secs, 0).single() {
        Some(datetime) => datetime.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}
