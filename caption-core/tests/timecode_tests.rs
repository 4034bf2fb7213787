use caption_core::timecode::*;

#[test]
fn parses_fractional_seconds() {
    assert_eq!(parse_timecode("00:00:02,500").unwrap(), 2.5);
}

#[test]
fn parses_hours() {
    assert_eq!(parse_timecode("01:00:00,000").unwrap(), 3600.0);
}

#[test]
fn does_not_range_check_fields() {
    assert_eq!(parse_timecode("00:75:00,000").unwrap(), 4500.0);
}

#[test]
fn tolerates_surrounding_whitespace() {
    assert_eq!(parse_timecode("  00:01:01,250 ").unwrap(), 61.25);
}

#[test]
fn rejects_dot_separator() {
    assert!(matches!(
        parse_timecode("00:00:02.500"),
        Err(TimecodeError::Shape(_))
    ));
}

#[test]
fn rejects_missing_fields() {
    assert!(parse_timecode("00:02,500").is_err());
    assert!(parse_timecode("").is_err());
}

#[test]
fn rejects_non_numeric_fields() {
    let err = parse_timecode("00:xx:02,500").unwrap_err();
    assert_eq!(
        err,
        TimecodeError::Field {
            field: "minutes",
            input: "00:xx:02,500".to_string()
        }
    );
    assert!(parse_timecode("-1:00:00,000").is_err());
}

#[test]
fn formats_timecodes() {
    assert_eq!(format_timecode(5.5), "00:00:05,500");
    assert_eq!(format_timecode(3723.042), "01:02:03,042");
    assert_eq!(format_timecode(-3.0), "00:00:00,000");
    assert_eq!(format_timecode(f64::NAN), "00:00:00,000");
}

#[test]
fn formats_card_seconds() {
    assert_eq!(format_seconds(2.0), "2.0");
    assert_eq!(format_seconds(5.5), "5.5");
    assert_eq!(format_seconds(116.0), "116.0");
}
