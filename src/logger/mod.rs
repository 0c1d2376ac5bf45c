use std::fmt::{self, Display};
use std::io::{self, Write};
use std::process;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::clock::{Clock, SystemClock};
use crate::layout::{Layout, Timestamp};

pub mod format;
pub use format::{sprint, sprintf, sprintln};


/// State guarded by the logger's lock
struct State<W> {
    /// Sink receiving one write per line
    out: W,
    /// Timestamp layout, fixed at construction
    layout: Layout,
    /// Stamp in UTC instead of local time
    utc: bool,
    /// Scratch space reused across lines
    buf: Vec<u8>,
}

/// Writes `<timestamp> <message>\n` lines to a sink.
///
/// All methods take `&self`; one lock serializes formatting and the write, so
/// lines from concurrent callers never interleave.
pub struct Logger<W> {
    state: Mutex<State<W>>,
    clock: Box<dyn Clock>,
}

impl<W: Write> Logger<W> {
    /// Create a logger stamping lines in local time with the system clock
    pub fn new(out: W, layout: impl Into<Layout>) -> Self {
        Self::with_clock(out, layout, SystemClock)
    }

    /// Create a logger reading the time from `clock`
    pub fn with_clock(out: W, layout: impl Into<Layout>, clock: impl Clock + 'static) -> Self {
        Self {
            state: Mutex::new(State {
                out,
                layout: layout.into(),
                utc: false,
                buf: Vec::new(),
            }),
            clock: Box::new(clock),
        }
    }

    /// Stamp subsequent lines in UTC
    pub fn use_utc(&self) {
        self.lock().utc = true;
    }

    pub fn is_utc(&self) -> bool {
        self.lock().utc
    }

    pub fn layout(&self) -> Layout {
        self.lock().layout.clone()
    }

    /// Writes one line: the current time rendered with the layout, a space,
    /// then `message`, with a newline appended unless `message` already ends
    /// with one.
    ///
    /// The line reaches the sink in a single `write_all`; its error is
    /// returned as is. Failed writes are not retried, except that `write_all`
    /// itself repeats a write failing with `ErrorKind::Interrupted`.
    pub fn output(&self, message: &str) -> io::Result<()> {
        let mut state = self.lock();
        let State { out, layout, utc, buf } = &mut *state;

        let stamp = Timestamp::new(self.clock.now(), *utc);
        buf.clear();
        layout.append_to(buf, &stamp);
        buf.push(b' ');
        buf.extend_from_slice(message.as_bytes());
        if buf.last() != Some(&b'\n') {
            buf.push(b'\n');
        }
        out.write_all(buf)
    }

    /// Logs the arguments concatenated, discarding any write error
    pub fn print(&self, args: &[&dyn Display]) {
        let _ = self.output(&sprint(args));
    }

    /// Logs `format_args!` output, discarding any write error
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        let _ = self.output(&sprintf(args));
    }

    /// Logs the arguments space-separated, discarding any write error
    pub fn println(&self, args: &[&dyn Display]) {
        let _ = self.output(&sprintln(args));
    }

    /// Logs like [`print`](Self::print), then exits the process with status 1.
    ///
    /// The exit happens whether or not the write succeeded.
    pub fn fatal(&self, args: &[&dyn Display]) -> ! {
        let _ = self.output(&sprint(args));
        process::exit(1)
    }

    /// Logs like [`printf`](Self::printf), then exits the process with status 1.
    pub fn fatalf(&self, args: fmt::Arguments<'_>) -> ! {
        let _ = self.output(&sprintf(args));
        process::exit(1)
    }

    /// Logs like [`println`](Self::println), then exits the process with status 1.
    pub fn fatalln(&self, args: &[&dyn Display]) -> ! {
        let _ = self.output(&sprintln(args));
        process::exit(1)
    }

    /// Consumes the logger, returning its sink
    pub fn into_inner(self) -> W {
        self.state
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .out
    }

    // A panic inside the sink leaves nothing half-updated: the buffer is
    // cleared on the next call.
    fn lock(&self) -> MutexGuard<'_, State<W>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
