use crate::PayloadDecoder;

/// Decode strategies, tried in order. The first one that accepts the
/// payload wins; the lossy fallback accepts everything.
#[derive(Debug, Clone, Copy)]
enum Strategy {
    /// Strict UTF-8. Taken when the payload validates.
    Utf8Strict,
    /// GBK, for devices that emit legacy double-byte text. Only consulted
    /// after strict UTF-8 validation failed, and only taken when the whole
    /// payload decodes without errors. Strict-validation failure is the
    /// "failed outright" trigger here: a replace-on-error decode can never
    /// signal failure on its own.
    Gbk,
    /// UTF-8 with replacement characters per invalid sequence. Never fails.
    Utf8Lossy,
}

const STRATEGIES: &[Strategy] = &[Strategy::Utf8Strict, Strategy::Gbk, Strategy::Utf8Lossy];

impl Strategy {
    fn try_decode(self, payload: &[u8]) -> Option<String> {
        match self {
            Strategy::Utf8Strict => std::str::from_utf8(payload).map(str::to_owned).ok(),
            Strategy::Gbk => {
                let (text, _, had_errors) = encoding_rs::GBK.decode(payload);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
            Strategy::Utf8Lossy => Some(String::from_utf8_lossy(payload).into_owned()),
        }
    }
}

/// Text decoder with an encoding fallback chain.
pub struct TextDecoder;

impl TextDecoder {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl PayloadDecoder for TextDecoder {
    fn decode(&self, payload: &[u8]) -> String {
        STRATEGIES
            .iter()
            .find_map(|strategy| strategy.try_decode(payload))
            .unwrap_or_default()
    }

    fn name(&self) -> &'static str {
        "Text"
    }
}

/// Replace embedded line breaks with spaces and trim the result.
///
/// Used only in pass-through framing, where no delimiter extraction removed
/// the `\r`/`\n` bytes upstream.
pub fn collapse_line_breaks(text: &str) -> String {
    text.replace(['\n', '\r'], " ").trim().to_string()
}
