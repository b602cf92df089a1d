//! Parsing of the quota tool's comma-separated output.
//!
//! Each line has the shape `<flag>,<label>,<used KiB>,<hard limit KiB>`,
//! e.g. `True,lliurex,182,5000`. Only lines whose flag is the true marker
//! describe a quota.

use super::record::QuotaRecord;
use crate::error::{QuotaError, Result};

const FIELD_COUNT: usize = 4;

/// Parse one output line.
///
/// `label_override` replaces the label reported by the tool.
pub fn parse_line(line: &str, label_override: Option<&str>) -> Result<QuotaRecord> {
    let parts: Vec<&str> = line
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != FIELD_COUNT {
        return Err(QuotaError::malformed_line(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            parts.len()
        )));
    }

    if !is_true_marker(parts[0]) {
        return Err(QuotaError::malformed_line(format!(
            "quota flag is '{}'",
            parts[0]
        )));
    }

    let used_kb = parse_kilobytes(parts[2], "used")?;
    let hard_limit_kb = parse_kilobytes(parts[3], "hard limit")?;

    // 0 is what the tool prints for "no limit"
    if hard_limit_kb == 0 {
        return Err(QuotaError::malformed_line("hard limit is 0"));
    }

    let used = used_kb.saturating_mul(1024);
    let hard_limit = hard_limit_kb.saturating_mul(1024);
    let label = label_override.unwrap_or(parts[1]);

    Ok(QuotaRecord::from_usage(label, used, hard_limit))
}

/// Parse the complete stdout of one run, skipping lines that are not quotas.
pub fn parse_output(output: &str, label_override: Option<&str>) -> Vec<QuotaRecord> {
    output
        .split(|c| c == '\r' || c == '\n')
        .filter(|line| !line.is_empty())
        .filter_map(|line| match parse_line(line, label_override) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("Skipping line {:?}: {}", line, e);
                None
            }
        })
        .collect()
}

fn is_true_marker(field: &str) -> bool {
    field == "True" || field == "true"
}

fn parse_kilobytes(field: &str, what: &str) -> Result<u64> {
    field
        .parse::<u64>()
        .map_err(|_| QuotaError::malformed_line(format!("{} is not a number: '{}'", what, field)))
}
