use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use chrono::{TimeZone, Utc};
use crate::clock::FixedClock;
use crate::layout::{LayoutTimer, RFC3339};

/// Shared in-memory writer for the fmt subscriber
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Tests that tracing events are stamped through the layout.
#[test]
fn test_layout_timer() {
    let noon = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();

    let subscriber = tracing_subscriber::fmt()
        .with_timer(LayoutTimer::with_clock(RFC3339, FixedClock(noon)).with_utc())
        .with_ansi(false)
        .with_target(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("stamped");
    });

    let written = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(written.starts_with("2024-01-15T12:00:00Z "), "{:?}", written);
    assert!(written.trim_end().ends_with("stamped"), "{:?}", written);
}
