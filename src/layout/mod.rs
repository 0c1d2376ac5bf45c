//! Reference-date timestamp layouts.
//!
//! A layout shows how the reference time
//!
//! ```text
//! Mon Jan 2 15:04:05 MST 2006
//! ```
//!
//! would be written; rendering substitutes the matching components of another
//! instant. `"2006-01-02"` renders a date, `"15:04:05.000"` a time with
//! milliseconds. Text that is not a recognised component is copied verbatim.

use chrono::{DateTime, Datelike, FixedOffset, Local, Offset, TimeZone, Timelike, Utc};
use std::fmt;
use std::ops::Range;

pub mod constants;
pub mod timer;

pub use constants::*;
pub use timer::LayoutTimer;

#[cfg(test)]
mod tests;

const LONG_MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const LONG_DAY_NAMES: [&str; 7] = [
    "Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday",
];

/// How a numeric zone offset is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OffsetStyle {
    /// Write `Z` instead of a zero offset
    zulu: bool,
    colons: bool,
    minutes: bool,
    seconds: bool,
}

impl OffsetStyle {
    const fn new(zulu: bool, colons: bool, minutes: bool, seconds: bool) -> Self {
        Self { zulu, colons, minutes, seconds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    LongMonth,
    Month,
    NumMonth,
    ZeroMonth,
    LongWeekDay,
    WeekDay,
    Day,
    UnderDay,
    ZeroDay,
    UnderYearDay,
    ZeroYearDay,
    Hour,
    Hour12,
    ZeroHour12,
    Minute,
    ZeroMinute,
    Second,
    ZeroSecond,
    LongYear,
    Year,
    UpperPm,
    LowerPm,
    Zone,
    ZoneOffset(OffsetStyle),
    /// Fractional seconds; `trim` drops trailing zeros
    Fraction { separator: u8, digits: usize, trim: bool },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Chunk {
    /// Byte range of literal text in the layout source
    Literal(Range<usize>),
    Component(Component),
}

/// An instant paired with the zone abbreviation to print for `MST`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
    time: DateTime<FixedOffset>,
    zone: Option<&'static str>,
}

impl Timestamp {
    /// Stamps `now` in UTC when `utc` is set, otherwise in local time.
    pub fn new(now: DateTime<Utc>, utc: bool) -> Self {
        if utc {
            Self::utc(now)
        } else {
            Self::local(now.with_timezone(&Local))
        }
    }

    pub fn utc(time: DateTime<Utc>) -> Self {
        Self { time: fixed(&time), zone: Some("UTC") }
    }

    /// Local times carry no abbreviation, so `MST` renders as a numeric offset.
    pub fn local(time: DateTime<Local>) -> Self {
        Self { time: fixed(&time), zone: None }
    }

    pub fn fixed(time: DateTime<FixedOffset>) -> Self {
        Self { time, zone: None }
    }

    pub fn with_zone(mut self, zone: &'static str) -> Self {
        self.zone = Some(zone);
        self
    }

    pub fn time(&self) -> DateTime<FixedOffset> {
        self.time
    }

    pub fn zone(&self) -> Option<&'static str> {
        self.zone
    }
}

fn fixed<Tz: TimeZone>(time: &DateTime<Tz>) -> DateTime<FixedOffset> {
    time.with_timezone(&time.offset().fix())
}

/// A parsed layout, ready to render timestamps without re-scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    source: String,
    chunks: Vec<Chunk>,
}

impl Layout {
    /// Parses a layout. Never fails: anything unrecognised is literal text.
    pub fn new(layout: impl Into<String>) -> Self {
        let source = layout.into();
        let chunks = parse(&source);
        Self { source, chunks }
    }

    /// The layout as it was written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Appends `stamp` rendered with this layout to `buf`.
    pub fn append_to(&self, buf: &mut Vec<u8>, stamp: &Timestamp) {
        for chunk in &self.chunks {
            match chunk {
                Chunk::Literal(range) => buf.extend_from_slice(&self.source.as_bytes()[range.clone()]),
                Chunk::Component(component) => append_component(buf, *component, stamp),
            }
        }
    }

    pub fn format(&self, stamp: &Timestamp) -> String {
        let mut buf = Vec::with_capacity(self.source.len() + 16);
        self.append_to(&mut buf, stamp);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(RFC3339)
    }
}

impl From<&str> for Layout {
    fn from(layout: &str) -> Self {
        Self::new(layout)
    }
}

impl From<String> for Layout {
    fn from(layout: String) -> Self {
        Self::new(layout)
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

fn parse(source: &str) -> Vec<Chunk> {
    let bytes = source.as_bytes();
    let mut chunks = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match scan(bytes, i) {
            Some((component, len)) => {
                if literal_start < i {
                    chunks.push(Chunk::Literal(literal_start..i));
                }
                chunks.push(Chunk::Component(component));
                i += len;
                literal_start = i;
            }
            None => i += 1,
        }
    }
    if literal_start < bytes.len() {
        chunks.push(Chunk::Literal(literal_start..bytes.len()));
    }
    chunks
}

fn is_lower(layout: &[u8], i: usize) -> bool {
    layout.get(i).is_some_and(|c| c.is_ascii_lowercase())
}

fn is_digit(layout: &[u8], i: usize) -> bool {
    layout.get(i).is_some_and(|c| c.is_ascii_digit())
}

/// Recognises the component starting at `layout[i]`, returning it with its
/// length in bytes.
fn scan(layout: &[u8], i: usize) -> Option<(Component, usize)> {
    use Component::*;

    let rest = &layout[i..];
    let starts = |prefix: &str| rest.starts_with(prefix.as_bytes());

    match rest[0] {
        b'J' if starts("January") => Some((LongMonth, 7)),
        b'J' if starts("Jan") && !is_lower(layout, i + 3) => Some((Month, 3)),
        b'M' if starts("Monday") => Some((LongWeekDay, 6)),
        b'M' if starts("Mon") && !is_lower(layout, i + 3) => Some((WeekDay, 3)),
        b'M' if starts("MST") => Some((Zone, 3)),
        b'0' => match rest.get(1) {
            Some(b'1') => Some((ZeroMonth, 2)),
            Some(b'2') => Some((ZeroDay, 2)),
            Some(b'3') => Some((ZeroHour12, 2)),
            Some(b'4') => Some((ZeroMinute, 2)),
            Some(b'5') => Some((ZeroSecond, 2)),
            Some(b'6') => Some((Year, 2)),
            Some(b'0') if rest.get(2) == Some(&b'2') => Some((ZeroYearDay, 3)),
            _ => None,
        },
        b'1' if rest.get(1) == Some(&b'5') => Some((Hour, 2)),
        b'1' => Some((NumMonth, 1)),
        b'2' if starts("2006") => Some((LongYear, 4)),
        b'2' => Some((Day, 1)),
        // `_2006` is a literal underscore followed by the year
        b'_' if starts("_2006") => None,
        b'_' if starts("_2") => Some((UnderDay, 2)),
        b'_' if starts("__2") => Some((UnderYearDay, 3)),
        b'3' => Some((Hour12, 1)),
        b'4' => Some((Minute, 1)),
        b'5' => Some((Second, 1)),
        b'P' if starts("PM") => Some((UpperPm, 2)),
        b'p' if starts("pm") => Some((LowerPm, 2)),
        b'-' | b'Z' => scan_offset(rest),
        b'.' | b',' => scan_fraction(layout, i),
        _ => None,
    }
}

fn scan_offset(rest: &[u8]) -> Option<(Component, usize)> {
    let zulu = rest[0] == b'Z';
    let body = &rest[1..];
    let forms: [(&str, OffsetStyle); 5] = [
        ("070000", OffsetStyle::new(zulu, false, true, true)),
        ("07:00:00", OffsetStyle::new(zulu, true, true, true)),
        ("0700", OffsetStyle::new(zulu, false, true, false)),
        ("07:00", OffsetStyle::new(zulu, true, true, false)),
        ("07", OffsetStyle::new(zulu, false, false, false)),
    ];
    forms
        .iter()
        .find(|(form, _)| body.starts_with(form.as_bytes()))
        .map(|(form, style)| (Component::ZoneOffset(*style), form.len() + 1))
}

/// `.000`, `,000`, `.999` or `,999`, only when the run of digits ends there.
fn scan_fraction(layout: &[u8], i: usize) -> Option<(Component, usize)> {
    let digit = *layout.get(i + 1)?;
    if digit != b'0' && digit != b'9' {
        return None;
    }
    let mut j = i + 1;
    while layout.get(j) == Some(&digit) {
        j += 1;
    }
    if is_digit(layout, j) {
        return None;
    }
    let fraction = Component::Fraction {
        separator: layout[i],
        digits: j - (i + 1),
        trim: digit == b'9',
    };
    Some((fraction, j - i))
}

/// Appends `value` left-padded with zeros to `width` digits; a negative value
/// gets its sign ahead of the padding.
fn append_int(buf: &mut Vec<u8>, value: i64, width: usize) {
    if value < 0 {
        buf.push(b'-');
    }
    let digits = value.unsigned_abs().to_string();
    for _ in digits.len()..width {
        buf.push(b'0');
    }
    buf.extend_from_slice(digits.as_bytes());
}

fn append_component(buf: &mut Vec<u8>, component: Component, stamp: &Timestamp) {
    use Component::*;

    let time = &stamp.time;
    match component {
        LongMonth => buf.extend_from_slice(LONG_MONTH_NAMES[time.month0() as usize].as_bytes()),
        Month => buf.extend_from_slice(&LONG_MONTH_NAMES[time.month0() as usize].as_bytes()[..3]),
        NumMonth => append_int(buf, time.month() as i64, 0),
        ZeroMonth => append_int(buf, time.month() as i64, 2),
        LongWeekDay => {
            let day = time.weekday().num_days_from_sunday() as usize;
            buf.extend_from_slice(LONG_DAY_NAMES[day].as_bytes())
        }
        WeekDay => {
            let day = time.weekday().num_days_from_sunday() as usize;
            buf.extend_from_slice(&LONG_DAY_NAMES[day].as_bytes()[..3])
        }
        Day => append_int(buf, time.day() as i64, 0),
        UnderDay => {
            if time.day() < 10 {
                buf.push(b' ');
            }
            append_int(buf, time.day() as i64, 0)
        }
        ZeroDay => append_int(buf, time.day() as i64, 2),
        UnderYearDay => {
            let yday = time.ordinal();
            if yday < 100 {
                buf.push(b' ');
                if yday < 10 {
                    buf.push(b' ');
                }
            }
            append_int(buf, yday as i64, 0)
        }
        ZeroYearDay => append_int(buf, time.ordinal() as i64, 3),
        Hour => append_int(buf, time.hour() as i64, 2),
        Hour12 => append_int(buf, hour12(time.hour()), 0),
        ZeroHour12 => append_int(buf, hour12(time.hour()), 2),
        Minute => append_int(buf, time.minute() as i64, 0),
        ZeroMinute => append_int(buf, time.minute() as i64, 2),
        Second => append_int(buf, time.second() as i64, 0),
        ZeroSecond => append_int(buf, time.second() as i64, 2),
        LongYear => append_int(buf, time.year() as i64, 4),
        Year => append_int(buf, (time.year() % 100) as i64, 2),
        UpperPm => buf.extend_from_slice(if time.hour() >= 12 { b"PM" } else { b"AM" }),
        LowerPm => buf.extend_from_slice(if time.hour() >= 12 { b"pm" } else { b"am" }),
        Zone => match stamp.zone {
            Some(name) => buf.extend_from_slice(name.as_bytes()),
            None => append_offset(buf, offset_seconds(time), OffsetStyle::new(false, false, true, false)),
        },
        ZoneOffset(style) => append_offset(buf, offset_seconds(time), style),
        Fraction { separator, digits, trim } => {
            append_fraction(buf, time.nanosecond() % 1_000_000_000, separator, digits, trim)
        }
    }
}

fn hour12(hour: u32) -> i64 {
    match hour % 12 {
        0 => 12,
        h => h as i64,
    }
}

fn offset_seconds(time: &DateTime<FixedOffset>) -> i64 {
    time.offset().local_minus_utc() as i64
}

fn append_offset(buf: &mut Vec<u8>, offset: i64, style: OffsetStyle) {
    if style.zulu && offset == 0 {
        buf.push(b'Z');
        return;
    }
    buf.push(if offset < 0 { b'-' } else { b'+' });
    let offset = offset.abs();
    append_int(buf, offset / 3600, 2);
    if style.minutes {
        if style.colons {
            buf.push(b':');
        }
        append_int(buf, offset / 60 % 60, 2);
    }
    if style.seconds {
        if style.colons {
            buf.push(b':');
        }
        append_int(buf, offset % 60, 2);
    }
}

fn append_fraction(buf: &mut Vec<u8>, nanos: u32, separator: u8, digits: usize, trim: bool) {
    if trim && (digits == 0 || nanos == 0) {
        return;
    }
    let nanos = format!("{:09}", nanos);
    let mut fraction = &nanos[..digits.min(9)];
    if trim {
        fraction = fraction.trim_end_matches('0');
        if fraction.is_empty() {
            return;
        }
    }
    buf.push(separator);
    buf.extend_from_slice(fraction.as_bytes());
}
