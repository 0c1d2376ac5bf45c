use std::fmt;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use super::{Layout, Timestamp};
use crate::clock::{Clock, SystemClock};

/// Renders `tracing-subscriber` event timestamps with a [`Layout`], so
/// `tracing` output and [`Logger`](crate::Logger) lines share one format.
///
/// ```ignore
/// tracing_subscriber::fmt()
///     .with_timer(LayoutTimer::new(RFC3339).with_utc())
///     .init();
/// ```
pub struct LayoutTimer {
    layout: Layout,
    utc: bool,
    clock: Box<dyn Clock>,
}

impl LayoutTimer {
    /// Local-time timer reading the system clock
    pub fn new(layout: impl Into<Layout>) -> Self {
        Self::with_clock(layout, SystemClock)
    }

    pub fn with_clock(layout: impl Into<Layout>, clock: impl Clock + 'static) -> Self {
        Self {
            layout: layout.into(),
            utc: false,
            clock: Box::new(clock),
        }
    }

    pub fn with_utc(mut self) -> Self {
        self.utc = true;
        self
    }
}

impl FormatTime for LayoutTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let stamp = Timestamp::new(self.clock.now(), self.utc);
        w.write_str(&self.layout.format(&stamp))
    }
}
