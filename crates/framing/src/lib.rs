use core_types::Frame;

pub mod packet;
pub mod raw;

pub use packet::PacketFramer;
pub use raw::RawFramer;

/// Trait for turning a stream of bytes into discrete Frames.
///
/// Implementations are interchangeable strategies: the monitor loop feeds
/// every chunk it reads through `push` and renders whatever comes out,
/// regardless of whether the strategy buffers across calls.
pub trait Framer: Send {
    /// Ingest a chunk of newly read bytes and return any complete frames.
    ///
    /// `timestamp_us` is the arrival time of this chunk; frames completed
    /// by this call inherit it.
    fn push(&mut self, bytes: &[u8], timestamp_us: u64) -> Vec<Frame>;

    /// Discard any buffered partial data.
    fn reset(&mut self);

    /// Strategy name, for diagnostics.
    fn name(&self) -> &'static str;
}
