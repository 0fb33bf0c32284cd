use serde::{Deserialize, Serialize};

pub mod logging;
pub mod transport;
pub use transport::{ByteSource, TransportError};

/// One delimited unit of the byte stream.
///
/// The payload excludes the framing markers; in pass-through mode it is the
/// raw chunk as read from the transport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Frame {
    /// Content bytes of this frame. May be empty (`\r\n` with nothing between).
    pub payload: Vec<u8>,
    /// Epoch microseconds of the push that completed this frame.
    pub timestamp_us: u64,
}

impl Frame {
    pub fn new(payload: Vec<u8>, timestamp_us: u64) -> Self {
        Self {
            payload,
            timestamp_us,
        }
    }
}

/// Serial session parameters, assembled from the CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerialSettings {
    /// Port path or name (e.g. `/dev/ttyUSB0`, `COM3`).
    pub port: String,
    /// Baud rate.
    pub baud_rate: u32,
    /// Read timeout in seconds. Bounds the blocking read, nothing else.
    pub timeout_secs: f64,
}

impl SerialSettings {
    pub fn new(port: impl Into<String>, baud_rate: u32, timeout_secs: f64) -> Self {
        Self {
            port: port.into(),
            baud_rate,
            timeout_secs,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_serialization() {
        let frame = Frame::new(vec![0x01, 0x02, 0x03], 1000);
        let json = serde_json::to_string(&frame).unwrap();
        let deserialized: Frame = serde_json::from_str(&json).unwrap();
        assert_eq!(frame, deserialized);
    }

    #[test]
    fn test_empty_payload_is_valid() {
        let frame = Frame::new(Vec::new(), 42);
        assert!(frame.payload.is_empty());
        assert_eq!(frame.timestamp_us, 42);
    }

    #[test]
    fn test_settings_roundtrip() {
        let settings = SerialSettings::new("/dev/ttyUSB0", 9600, 1.0);
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: SerialSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, deserialized);
    }
}
