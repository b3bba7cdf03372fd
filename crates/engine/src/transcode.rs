//! Verdict → codec mapping and UTF-8 (BOM 付き) への変換

use std::borrow::Cow;

use encoding_rs::{EUC_JP, Encoding, ISO_2022_JP, SHIFT_JIS, UTF_8, UTF_16LE};
use script_encoder_core::{UTF8_BOM, Verdict};

/// Codec used to decode a buffer with the given verdict.
///
/// ASCII is decoded as UTF-8, of which it is a subset.
#[must_use]
pub fn encoding_for(verdict: Verdict) -> Option<&'static Encoding> {
    match verdict {
        Verdict::NoDetection => None,
        Verdict::Utf16 => Some(UTF_16LE),
        Verdict::Ascii | Verdict::Utf8 => Some(UTF_8),
        Verdict::Jis => Some(ISO_2022_JP),
        Verdict::ShiftJis => Some(SHIFT_JIS),
        Verdict::Euc => Some(EUC_JP),
    }
}

#[derive(Debug)]
pub struct Decoded<'a> {
    pub text: Cow<'a, str>,
    /// Malformed input was replaced with U+FFFD.
    pub had_errors: bool,
}

/// Decode `bytes` with the codec for `verdict`. BOMs are not sniffed.
#[must_use]
pub fn decode(verdict: Verdict, bytes: &[u8]) -> Option<Decoded<'_>> {
    let encoding = encoding_for(verdict)?;
    let (text, had_errors) = encoding.decode_without_bom_handling(bytes);
    Some(Decoded { text, had_errors })
}

#[must_use]
pub fn encode_utf8_with_bom(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(UTF8_BOM.len() + text.len());
    out.extend_from_slice(&UTF8_BOM);
    out.extend_from_slice(text.as_bytes());
    out
}
