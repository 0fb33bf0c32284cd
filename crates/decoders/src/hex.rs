use crate::PayloadDecoder;

/// Renders any payload as lowercase hexadecimal, two characters per byte,
/// no separators.
pub struct HexDecoder;

impl HexDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HexDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDecoder for HexDecoder {
    fn decode(&self, payload: &[u8]) -> String {
        payload.iter().map(|b| format!("{b:02x}")).collect()
    }

    fn name(&self) -> &'static str {
        "Hex"
    }
}
