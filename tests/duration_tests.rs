use rexitlog::core::calculator::{duration, elapsed_seconds};
use rexitlog::models::duration::DurationLabel;

#[test]
fn test_duration_hours_and_minutes() {
    assert_eq!(
        duration(Some("09:00:00 AM"), Some("10:05:00 AM")).to_string(),
        "1h 5m"
    );
}

#[test]
fn test_duration_hour_only() {
    assert_eq!(duration(Some("9:00:00 AM"), Some("11:00:00 AM")).to_string(), "2h");
}

#[test]
fn test_duration_minutes_only() {
    assert_eq!(duration(Some("01:15:00 PM"), Some("01:45:00 PM")).to_string(), "30m");
}

#[test]
fn test_duration_under_one_minute() {
    assert_eq!(
        duration(Some("9:00:00 AM"), Some("9:00:30 AM")),
        DurationLabel::UnderOneMinute
    );
    assert_eq!(duration(Some("9:00:00 AM"), Some("9:00:30 AM")).to_string(), "< 1m");
}

#[test]
fn test_duration_same_time_is_under_one_minute() {
    assert_eq!(duration(Some("10:00 AM"), Some("10:00 AM")).to_string(), "< 1m");
}

#[test]
fn test_duration_midnight_rollover() {
    assert_eq!(
        duration(Some("11:50:00 PM"), Some("12:10:00 AM")).to_string(),
        "20m"
    );
    assert_eq!(
        elapsed_seconds(Some("11:50:00 PM"), Some("12:10:00 AM")),
        Some(20 * 60)
    );
}

#[test]
fn test_duration_accepts_short_clock_format() {
    assert_eq!(duration(Some("9:00 AM"), Some("9:45 AM")).to_string(), "45m");
}

#[test]
fn test_duration_missing_side_is_not_available() {
    assert_eq!(duration(None, Some("9:00 AM")), DurationLabel::NotAvailable);
    assert_eq!(duration(Some("9:00 AM"), None).to_string(), "N/A");
    assert_eq!(duration(Some(""), Some("9:00 AM")).to_string(), "N/A");
}

#[test]
fn test_duration_malformed_is_not_available() {
    assert_eq!(duration(Some("25:99"), Some("9:00 AM")).to_string(), "N/A");
    assert_eq!(duration(Some("9:00 AM"), Some("soon")).to_string(), "N/A");
}

#[test]
fn test_duration_is_never_negative() {
    let times = [
        "12:00:00 AM",
        "06:30:00 AM",
        "11:59:59 AM",
        "12:00:00 PM",
        "05:15:00 PM",
        "11:59:00 PM",
    ];
    for a in times {
        for b in times {
            let secs = elapsed_seconds(Some(a), Some(b)).unwrap();
            assert!((0..86_400).contains(&secs), "{a} -> {b} gave {secs}");
        }
    }
}

#[test]
fn test_still_out_label() {
    assert_eq!(DurationLabel::StillOut.to_string(), "Still Out");
}
