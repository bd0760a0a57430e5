use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_log_push_and_clear() {
    let mut log = SessionLog::new(false);
    log.push("first");
    log.push(String::from("second"));
    assert_eq!(log.lines(), ["first", "second"]);
    log.clear();
    assert!(log.lines().is_empty());
}

#[test]
fn test_mirrored_log_still_records() {
    let mut log = SessionLog::new(true);
    log.push("line");
    assert_eq!(log.lines(), ["line"]);
}

#[test]
fn test_statistics_lookup() {
    let stats = Statistics::new(vec![("addition", 2), ("power", 1)]);
    assert_eq!(stats.get("addition"), Some(2));
    assert_eq!(stats.get("power"), Some(1));
    assert_eq!(stats.get("modulo"), None);
    assert_eq!(stats.total(), 3);
    assert_eq!(stats.len(), 2);
    assert!(!stats.is_empty());
}

#[test]
fn test_statistics_panel() {
    let stats = Statistics::new(vec![("addition", 3), ("division", 1)]);
    let panel = stats.to_string();
    let lines: Vec<&str> = panel.lines().collect();
    assert_eq!(lines[1], "  OPERATION STATISTICS");
    assert_eq!(
        lines[4],
        format!("  addition             :   3 [{}] 75.0%", "█".repeat(37))
    );
    assert_eq!(
        lines[5],
        format!("  division             :   1 [{}] 25.0%", "█".repeat(12))
    );
    assert_eq!(lines[7], "  TOTAL                :   4");
}

#[test]
fn test_statistics_panel_without_operations() {
    let stats = Statistics::new(vec![("addition", 0)]);
    assert!(stats
        .to_string()
        .contains("  addition             :   0 [] 0.0%"));
}

#[test]
fn test_format_value() {
    assert_eq!(format_value(14.0), "14");
    assert_eq!(format_value(2.5), "2.5");
    assert_eq!(format_value(-8.0), "-8");
    assert_eq!(format_value(1.0 / 3.0), "0.333333");
    assert_eq!(format_value(100.0), "100");
    assert_eq!(format_value(0.0), "0");
    assert_eq!(format_value(-0.0), "0");
    assert_eq!(format_value(f64::INFINITY), "inf");
    assert_eq!(format_value(f64::NAN), "NaN");
}
