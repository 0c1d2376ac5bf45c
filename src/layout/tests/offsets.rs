use chrono::{DateTime, FixedOffset, TimeZone};
use crate::layout::{Layout, Timestamp, RFC1123, RFC3339};

fn at_offset(seconds: i32) -> Timestamp {
    let offset = FixedOffset::east_opt(seconds).unwrap();
    let time: DateTime<FixedOffset> = offset.with_ymd_and_hms(2024, 7, 4, 21, 30, 0).unwrap();
    Timestamp::fixed(time)
}

/// Tests every numeric offset form at a positive half-hour offset.
#[test]
fn test_positive_offset_forms() {
    let stamp = at_offset(5 * 3600 + 1800);
    let cases = [
        ("-070000", "+053000"),
        ("-07:00:00", "+05:30:00"),
        ("-0700", "+0530"),
        ("-07:00", "+05:30"),
        ("-07", "+05"),
        ("Z070000", "+053000"),
        ("Z07:00:00", "+05:30:00"),
        ("Z0700", "+0530"),
        ("Z07:00", "+05:30"),
        ("Z07", "+05"),
        ("MST", "+0530"),
    ];
    for (layout, expected) in cases {
        assert_eq!(Layout::new(layout).format(&stamp), expected, "layout {}", layout);
    }
    assert_eq!(Layout::new(RFC3339).format(&stamp), "2024-07-04T21:30:00+05:30");
    assert_eq!(Layout::new("3:04pm _2 Jan").format(&stamp), "9:30pm  4 Jul");
}

/// Tests negative offsets, including one with a seconds component.
#[test]
fn test_negative_offsets() {
    assert_eq!(Layout::new("Z07:00").format(&at_offset(-3 * 3600)), "-03:00");
    assert_eq!(Layout::new("-0700").format(&at_offset(-(3 * 3600 + 1800))), "-0330");
    assert_eq!(Layout::new("-07:00:00").format(&at_offset(-(3600 + 125))), "-01:02:05");
}

/// Tests that a zero offset prints `Z` only in the `Z` forms.
#[test]
fn test_zero_offset() {
    let stamp = at_offset(0);
    assert_eq!(stamp.zone(), None);
    assert_eq!(stamp.time().offset().local_minus_utc(), 0);
    assert_eq!(stamp.with_zone("GMT").zone(), Some("GMT"));
    assert_eq!(Layout::new("Z07:00").format(&stamp), "Z");
    assert_eq!(Layout::new("Z0700").format(&stamp), "Z");
    assert_eq!(Layout::new("-07:00").format(&stamp), "+00:00");
    assert_eq!(Layout::new("MST").format(&stamp), "+0000");
    assert_eq!(
        Layout::new(RFC1123).format(&stamp.with_zone("GMT")),
        "Thu, 04 Jul 2024 21:30:00 GMT"
    );
}
