use core_types::{monitor_debug, Frame};

use crate::Framer;

/// Reassembles packets framed as `\r <payload> \n`.
///
/// Bytes accumulate until both a start marker (`\r`) and a later end marker
/// (`\n`) are present; the bytes strictly between them form one payload.
/// Trailing bytes after the last complete packet stay buffered for future
/// pushes.
///
/// Two behaviors of the wire protocol are replicated deliberately:
/// - any bytes before the first `\r` are discarded together with the packet
///   that follows them;
/// - only the first `\r` is honored as the start marker, so a stray `\r`
///   from a malformed segment shifts the window and ends up inside the
///   payload of the next packet.
pub struct PacketFramer {
    buffer: Vec<u8>,
}

impl PacketFramer {
    pub fn new() -> Self {
        Self {
            buffer: Vec::with_capacity(1024),
        }
    }

    /// Bytes held back waiting for a complete delimiter pair.
    pub fn pending(&self) -> &[u8] {
        &self.buffer
    }
}

impl Default for PacketFramer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framer for PacketFramer {
    fn push(&mut self, bytes: &[u8], timestamp_us: u64) -> Vec<Frame> {
        self.buffer.extend_from_slice(bytes);
        let mut frames = Vec::new();

        loop {
            // Start marker: first \r anywhere in the buffer.
            let Some(start_idx) = self.buffer.iter().position(|&b| b == b'\r') else {
                break;
            };
            // End marker: first \n strictly after the start marker.
            let Some(end_idx) = self.buffer[start_idx + 1..]
                .iter()
                .position(|&b| b == b'\n')
                .map(|offset| start_idx + 1 + offset)
            else {
                break;
            };

            let payload = self.buffer[start_idx + 1..end_idx].to_vec();
            if start_idx > 0 {
                monitor_debug!(
                    "PacketFramer: discarded {} bytes before start marker",
                    start_idx
                );
            }
            // Drop everything through the end marker in place; bytes before
            // the start marker go with it.
            self.buffer.drain(..=end_idx);

            frames.push(Frame::new(payload, timestamp_us));
        }

        frames
    }

    fn reset(&mut self) {
        self.buffer.clear();
    }

    fn name(&self) -> &'static str {
        "Packet"
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn payloads(frames: &[Frame]) -> Vec<Vec<u8>> {
        frames.iter().map(|f| f.payload.clone()).collect()
    }

    #[test]
    fn test_single_packet() {
        let mut framer = PacketFramer::new();
        let frames = framer.push(b"\rhello\n", 100);
        assert_eq!(payloads(&frames), vec![b"hello".to_vec()]);
        assert_eq!(frames[0].timestamp_us, 100);
        assert!(framer.pending().is_empty());
    }

    #[test]
    fn test_empty_payload() {
        // Adjacent \r\n is a complete packet with an empty payload; it must
        // still be emitted, not skipped.
        let mut framer = PacketFramer::new();
        let frames = framer.push(b"\r\n", 100);
        assert_eq!(payloads(&frames), vec![Vec::<u8>::new()]);
    }

    #[test]
    fn test_lone_start_marker_is_retained() {
        let mut framer = PacketFramer::new();
        assert!(framer.push(b"\r", 100).is_empty());
        assert_eq!(framer.pending(), b"\r");

        // The matching \n arrives later and completes an empty packet.
        let frames = framer.push(b"\n", 200);
        assert_eq!(payloads(&frames), vec![Vec::<u8>::new()]);
        assert_eq!(frames[0].timestamp_us, 200);
        assert!(framer.pending().is_empty());
    }

    #[test]
    fn test_no_marker_accumulates() {
        let mut framer = PacketFramer::new();
        assert!(framer.push(b"abc", 100).is_empty());
        assert!(framer.push(b"def", 200).is_empty());
        assert_eq!(framer.pending(), b"abcdef");
    }

    #[test]
    fn test_multiple_packets_one_push() {
        let mut framer = PacketFramer::new();
        let frames = framer.push(b"\rone\n\rtwo\n", 100);
        assert_eq!(payloads(&frames), vec![b"one".to_vec(), b"two".to_vec()]);
    }

    #[test]
    fn test_split_feed_matches_single_feed() {
        // Feeding the stream byte by byte must produce the same payload
        // sequence as feeding it in one call.
        let stream = b"\rone\n\rtwo\nrest";

        let mut whole = PacketFramer::new();
        let whole_frames = whole.push(stream, 100);

        let mut split = PacketFramer::new();
        let mut split_frames = Vec::new();
        for &b in stream {
            split_frames.extend(split.push(&[b], 100));
        }

        assert_eq!(payloads(&whole_frames), payloads(&split_frames));
        assert_eq!(whole.pending(), split.pending());
        assert_eq!(whole.pending(), b"rest");
    }

    #[test]
    fn test_prefix_before_start_marker_is_discarded() {
        // Bytes preceding the first \r ("junk") vanish with the extraction.
        // The stray \r after A is not honored as a start marker, so it stays
        // inside the first payload; B\r\n then reduces to an empty payload.
        let mut framer = PacketFramer::new();
        let frames = framer.push(b"junk\rA\r\nB\r\nC", 100);
        assert_eq!(payloads(&frames), vec![b"A\r".to_vec(), Vec::<u8>::new()]);
        assert_eq!(framer.pending(), b"C");
    }

    #[test]
    fn test_byte_conservation() {
        // Every input byte is accounted for: emitted payloads, consumed
        // markers, discarded pre-marker bytes, or the residual buffer.
        let stream = b"xx\rfirst\nyy\rsecond\ntail";
        let mut framer = PacketFramer::new();
        let frames = framer.push(stream, 100);

        let payload_bytes: usize = frames.iter().map(|f| f.payload.len()).sum();
        let markers = frames.len() * 2;
        let discarded = 2 + 2; // "xx" and "yy"
        assert_eq!(
            payload_bytes + markers + discarded + framer.pending().len(),
            stream.len()
        );
        assert_eq!(framer.pending(), b"tail");
    }

    #[test]
    fn test_reset_discards_partial_data() {
        let mut framer = PacketFramer::new();
        framer.push(b"\rpartial", 100);
        framer.reset();
        assert!(framer.pending().is_empty());

        // A fresh \n must not complete the discarded packet.
        assert!(framer.push(b"\n", 200).is_empty());
    }
}
