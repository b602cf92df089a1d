// Parsing of quota tool output lines

use quota_tray::core::quota::{parse_line, parse_output};
use quota_tray::QuotaError;

#[test]
fn test_percent_formula_over_many_values() {
    for (used, limit) in [(0u64, 1u64), (1, 3), (2, 3), (3000, 5000), (5000, 5000), (7000, 5000), (123_456, 9_999_999)] {
        let line = format!("true,home,{},{}", used, limit);
        let record = parse_line(&line, None).unwrap();

        let expected = ((used * 1024) as f64 * 100.0 / (limit * 1024) as f64)
            .round()
            .clamp(0.0, 100.0) as u8;
        assert_eq!(record.usage_percent, expected, "line {}", line);
        assert_eq!(record.used_bytes, used * 1024);
        assert_eq!(record.limit_bytes, limit * 1024);
        assert_eq!(record.free_bytes, (limit * 1024).saturating_sub(used * 1024));
    }
}

#[test]
fn test_lliurex_example() {
    let record = parse_line("true,lliurex,3000,5000", None).unwrap();
    assert_eq!(record.used_bytes, 3_072_000);
    assert_eq!(record.limit_bytes, 5_120_000);
    assert_eq!(record.usage_percent, 60);
    assert_eq!(record.icon_name, "quota-low");
    assert_eq!(record.mount_summary, "lliurex: 60% used");
}

#[test]
fn test_rejected_lines() {
    for line in [
        "true,home,9500",
        "false,home,100,200",
        "true,home,100,200,300",
        "yes,home,100,200",
        "true,home,100,0",
        "",
        "/home/peterpan 3975379*  5000000 7000000",
    ] {
        assert!(
            matches!(parse_line(line, None), Err(QuotaError::MalformedLine(_))),
            "line {:?} should be rejected",
            line
        );
    }
}

#[test]
fn test_every_line_malformed_gives_empty_list() {
    let records = parse_output("garbage\nmore garbage\nfalse,a,1,2\n", None);
    assert!(records.is_empty());
}

#[test]
fn test_crlf_output() {
    let records = parse_output("True,home,10,100\r\nTrue,share,20,100\r\n", None);
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].usage_percent, 20);
}
