use core_types::Frame;

use crate::Framer;

/// Pass-through strategy: every chunk read from the transport is one frame.
///
/// Trades frame-boundary correctness for latency; nothing is buffered
/// across pushes, so delimiter bytes stay embedded in the payload and are
/// dealt with at display time.
pub struct RawFramer;

impl RawFramer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RawFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for RawFramer {
    fn push(&mut self, bytes: &[u8], timestamp_us: u64) -> Vec<Frame> {
        if bytes.is_empty() {
            return Vec::new();
        }
        vec![Frame::new(bytes.to_vec(), timestamp_us)]
    }

    fn reset(&mut self) {
        // Stateless.
    }

    fn name(&self) -> &'static str {
        "Raw"
    }
}
