//! Terminal output: the refresh throttle and the single-line renderer.

use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Minimum interval between terminal writes.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(100);

/// Drop-latest refresh throttle.
///
/// A candidate line is either rendered now or dropped; nothing is queued
/// for later. Under rapid packet arrival only whichever line happens to be
/// current when the interval elapses reaches the screen.
pub struct RefreshThrottle {
    last_render: Instant,
    min_interval: Duration,
}

impl RefreshThrottle {
    /// The interval starts counting from construction, so a line arriving
    /// within the first interval is suppressed like any other.
    pub fn new(min_interval: Duration) -> Self {
        Self {
            last_render: Instant::now(),
            min_interval,
        }
    }

    /// Approve a render at `now` (consuming the interval) or suppress it.
    pub fn should_render(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_render) >= self.min_interval {
            self.last_render = now;
            true
        } else {
            false
        }
    }
}

/// Writes each approved line over the previous one: clear to end of line,
/// carriage return, then the line, with no trailing newline.
pub struct LineRenderer<W: Write> {
    out: W,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn render_line(&mut self, line: &str) -> io::Result<()> {
        write!(self.out, "\x1b[K\r{line}")?;
        self.out.flush()
    }
}
