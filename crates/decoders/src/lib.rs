//! # Payload decoders
//!
//! Converts frame payload bytes into a displayable string. Decoding never
//! fails: malformed input degrades to replacement characters, not errors.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing,
    clippy::todo
)]

pub mod hex;
pub mod text;

pub use hex::HexDecoder;
pub use text::{collapse_line_breaks, TextDecoder};

/// Trait for rendering payload bytes as display text.
///
/// Implementations are stateless and infallible; the monitor loop picks one
/// per session from the CLI flags.
pub trait PayloadDecoder: Send {
    /// Render `payload` as display text.
    fn decode(&self, payload: &[u8]) -> String;

    /// Decoder name, for diagnostics.
    fn name(&self) -> &'static str;
}
