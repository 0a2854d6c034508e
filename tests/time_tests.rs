use rstopwatch::errors::AppError;
use rstopwatch::utils::time::{format_duration_ms, format_ms, parse_time_input, parse_time_string};

#[test]
fn test_format_ms_basic_values() {
    assert_eq!(format_ms(0.0), "00:00:00");
    assert_eq!(format_ms(3_661_000.0), "01:01:01");
    assert_eq!(format_ms(59_999.9), "00:00:59");
    assert_eq!(format_duration_ms(123_000), "00:02:03");
}

#[test]
fn test_format_ms_clamps_bad_input() {
    assert_eq!(format_ms(-1.0), "00:00:00");
    assert_eq!(format_ms(-3_600_000.0), "00:00:00");
    assert_eq!(format_ms(f64::NAN), "00:00:00");
    assert_eq!(format_ms(f64::NEG_INFINITY), "00:00:00");
}

#[test]
fn test_format_ms_hours_are_not_wrapped() {
    assert_eq!(format_duration_ms(100 * 3_600_000), "100:00:00");
    assert_eq!(format_duration_ms(99 * 3_600_000 + 59 * 60_000 + 59_000), "99:59:59");
}

#[test]
fn test_parse_time_string_accepted_forms() {
    assert_eq!(parse_time_string("90"), Some(90_000));
    assert_eq!(parse_time_string("2:03"), Some(123_000));
    assert_eq!(parse_time_string("1:02:03"), Some(3_723_000));
    assert_eq!(parse_time_string("  2:03 "), Some(123_000));
    assert_eq!(parse_time_string("0"), Some(0));
}

#[test]
fn test_parse_time_string_groups_are_not_range_checked() {
    assert_eq!(parse_time_string("2:75"), Some(195_000));
    assert_eq!(parse_time_string("0:90:00"), Some(5_400_000));
}

#[test]
fn test_parse_time_string_rejections() {
    for bad in [
        "", "   ", "1:2:3:4", "-5", "1.5", "a", "1:", ":30", "1::2", "1 2",
        "99999999999999999999999",
    ] {
        assert_eq!(parse_time_string(bad), None, "'{}' should be rejected", bad);
    }
}

#[test]
fn test_parse_time_input_reports_invalid_time() {
    match parse_time_input(" nope ") {
        Err(AppError::InvalidTime(text)) => assert_eq!(text, "nope"),
        other => panic!("expected InvalidTime, got {:?}", other),
    }
    assert_eq!(parse_time_input("1:00").unwrap(), 60_000);
}
