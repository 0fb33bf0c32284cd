//! The monitor session: a single-threaded poll loop that ties the byte
//! source, framer, decoder, and renderer together.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::{Local, LocalResult, TimeZone};
use core_types::{monitor_debug, ByteSource, Frame, SerialSettings};
use decoders::{collapse_line_breaks, HexDecoder, PayloadDecoder, TextDecoder};
use framing::{Framer, PacketFramer, RawFramer};
use transport_serial::SerialByteSource;

use crate::render::{LineRenderer, RefreshThrottle, REFRESH_INTERVAL};

/// Idle sleep per loop iteration. Bounds busy-poll CPU use; runs whether or
/// not data arrived.
const IDLE_SLEEP: Duration = Duration::from_millis(10);

/// Upper bound on one read. Larger backlogs drain across iterations.
const READ_CHUNK: usize = 4096;

/// Session lifecycle. Cancellation is observed between iterations, so the
/// current iteration always completes before `Running → Draining`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonitorState {
    Connecting,
    Running,
    Draining,
    Closed,
}

/// One monitoring session over an open byte source.
///
/// Owns every piece of per-session state: the framer's accumulation
/// buffer, the decoder, and the refresh throttle. The source handle is
/// released by drop, whichever way `run` returns.
pub struct Monitor<S: ByteSource> {
    source: S,
    framer: Box<dyn Framer>,
    decoder: Box<dyn PayloadDecoder>,
    /// Pass-through framing leaves delimiter bytes in the payload; collapse
    /// them at display time.
    collapse_breaks: bool,
    throttle: RefreshThrottle,
    state: MonitorState,
}

impl<S: ByteSource> Monitor<S> {
    pub fn new(
        source: S,
        framer: Box<dyn Framer>,
        decoder: Box<dyn PayloadDecoder>,
        collapse_breaks: bool,
        throttle: RefreshThrottle,
    ) -> Self {
        Self {
            source,
            framer,
            decoder,
            collapse_breaks,
            throttle,
            state: MonitorState::Connecting,
        }
    }

    pub fn state(&self) -> MonitorState {
        self.state
    }

    /// Poll until the stop flag is set or the transport fails.
    ///
    /// Partial data still buffered when the stop flag is observed is
    /// discarded in `Draining`; reassembly is best effort across the
    /// session boundary.
    pub fn run<W: Write>(
        &mut self,
        stop: &AtomicBool,
        renderer: &mut LineRenderer<W>,
    ) -> Result<()> {
        self.transition(MonitorState::Running);
        let mut chunk = vec![0u8; READ_CHUNK];

        while !stop.load(Ordering::SeqCst) {
            let available = self.source.bytes_available()?;
            if available > 0 {
                let want = available.min(READ_CHUNK);
                let n = self
                    .source
                    .read(&mut chunk[..want])
                    .context("serial read failed")?;
                if n > 0 {
                    let timestamp_us = now_epoch_us();
                    for frame in self.framer.push(&chunk[..n], timestamp_us) {
                        let line = self.format_line(&frame);
                        if self.throttle.should_render(Instant::now()) {
                            renderer
                                .render_line(&line)
                                .context("terminal write failed")?;
                        }
                    }
                }
            }
            thread::sleep(IDLE_SLEEP);
        }

        self.transition(MonitorState::Draining);
        self.framer.reset();
        self.transition(MonitorState::Closed);
        Ok(())
    }

    fn format_line(&self, frame: &Frame) -> String {
        let text = self.decoder.decode(&frame.payload);
        let text = if self.collapse_breaks {
            collapse_line_breaks(&text)
        } else {
            text
        };
        format!("[{}] {}", format_timestamp(frame.timestamp_us), text)
    }

    fn transition(&mut self, next: MonitorState) {
        monitor_debug!("Monitor: {:?} → {:?}", self.state, next);
        self.state = next;
    }
}

/// Run a full session against a real serial port: open, banner, poll loop.
pub fn run_session(
    settings: &SerialSettings,
    hex: bool,
    raw: bool,
    stop: &AtomicBool,
) -> Result<()> {
    let source = SerialByteSource::open(settings)
        .with_context(|| format!("failed to open serial port {}", settings.port))?;
    println!(
        "Connected to {} at {} baud",
        settings.port, settings.baud_rate
    );
    println!("Press Ctrl+C to exit...");

    let framer: Box<dyn Framer> = if raw {
        Box::new(RawFramer::new())
    } else {
        Box::new(PacketFramer::new())
    };
    let decoder: Box<dyn PayloadDecoder> = if hex {
        Box::new(HexDecoder::new())
    } else {
        Box::new(TextDecoder::new())
    };

    let mut monitor = Monitor::new(
        source,
        framer,
        decoder,
        raw,
        RefreshThrottle::new(REFRESH_INTERVAL),
    );
    let mut renderer = LineRenderer::new(std::io::stdout());
    monitor.run(stop, &mut renderer)
}

fn now_epoch_us() -> u64 {
    Local::now().timestamp_micros().max(0) as u64
}

/// Format an epoch-microsecond stamp as local `HH:MM:SS.mmm`.
fn format_timestamp(timestamp_us: u64) -> String {
    match Local.timestamp_micros(timestamp_us as i64) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.format("%H:%M:%S%.3f").to_string()
        }
        LocalResult::None => "--:--:--.---".to_string(),
    }
}
