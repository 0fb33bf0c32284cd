use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("port enumeration failed: {0}")]
    Enumeration(String),
}

/// A raw byte supplier (serial port, or a scripted source in tests).
///
/// The monitor loop drives this with a poll/read cycle: `bytes_available`
/// never blocks, `read` blocks at most for the transport's configured
/// timeout. A timed-out read reports zero bytes rather than an error.
///
/// Releasing the underlying handle is tied to ownership: dropping the
/// source closes it, so it is released exactly once on every exit path.
pub trait ByteSource: Send {
    /// Number of bytes ready to read right now, without blocking.
    fn bytes_available(&mut self) -> Result<usize, TransportError>;

    /// Read into `buf`, blocking up to the configured timeout.
    /// Returns the number of bytes read (0 on timeout).
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, TransportError>;
}
