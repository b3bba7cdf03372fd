//! マルチバイト判定のスコアリング
//!
//! Each pass walks the whole buffer once and greedily consumes matched
//! sequences, so bytes of a match are never the start of another match in
//! the same pass. The passes are independent of one another.

use serde::{Deserialize, Serialize};

use crate::verdict::Verdict;

/// Number of bytes that matched each multi-byte encoding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub sjis: usize,
    pub euc: usize,
    pub utf8: usize,
}

impl Scores {
    #[must_use]
    pub fn compute(bytes: &[u8]) -> Self {
        Self {
            sjis: shift_jis_score(bytes),
            euc: euc_jp_score(bytes),
            utf8: utf8_score(bytes),
        }
    }

    /// Strict winner of the three scores; any tie for the maximum yields
    /// [`Verdict::NoDetection`].
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        let Self { sjis, euc, utf8 } = *self;
        if euc > sjis && euc > utf8 {
            Verdict::Euc
        } else if sjis > euc && sjis > utf8 {
            Verdict::ShiftJis
        } else if utf8 > euc && utf8 > sjis {
            Verdict::Utf8
        } else {
            Verdict::NoDetection
        }
    }
}

const fn in_range(b: u8, lo: u8, hi: u8) -> bool {
    lo <= b && b <= hi
}

const fn is_sjis_lead(b: u8) -> bool {
    in_range(b, 0x81, 0x9F) || in_range(b, 0xE0, 0xFC)
}

const fn is_sjis_trail(b: u8) -> bool {
    in_range(b, 0x40, 0x7E) || in_range(b, 0x80, 0xFC)
}

const fn is_euc_byte(b: u8) -> bool {
    in_range(b, 0xA1, 0xFE)
}

const fn is_utf8_continuation(b: u8) -> bool {
    in_range(b, 0x80, 0xBF)
}

/// Length of the Shift_JIS double-byte character starting `rest`, if any.
fn shift_jis_match(rest: &[u8]) -> Option<usize> {
    match *rest {
        [b0, b1, ..] if is_sjis_lead(b0) && is_sjis_trail(b1) => Some(2),
        _ => None,
    }
}

/// Length of the EUC-JP character starting `rest`, if any.
///
/// Covers JIS X 0208 pairs, half-width katakana (`SS2`) and JIS X 0212
/// (`SS3`) triples.
fn euc_jp_match(rest: &[u8]) -> Option<usize> {
    match *rest {
        [b0, b1, ..] if is_euc_byte(b0) && is_euc_byte(b1) => Some(2),
        [0x8E, b1, ..] if in_range(b1, 0xA1, 0xDF) => Some(2),
        [0x8F, b1, b2, ..] if is_euc_byte(b1) && is_euc_byte(b2) => Some(3),
        _ => None,
    }
}

/// Length of the two- or three-byte UTF-8 sequence starting `rest`, if any.
fn utf8_match(rest: &[u8]) -> Option<usize> {
    match *rest {
        [b0, b1, ..] if in_range(b0, 0xC0, 0xDF) && is_utf8_continuation(b1) => Some(2),
        [b0, b1, b2, ..]
            if in_range(b0, 0xE0, 0xEF) && is_utf8_continuation(b1) && is_utf8_continuation(b2) =>
        {
            Some(3)
        }
        _ => None,
    }
}

fn greedy_score(bytes: &[u8], matcher: fn(&[u8]) -> Option<usize>) -> usize {
    let mut score = 0;
    let mut i = 0;
    while i < bytes.len() {
        match matcher(&bytes[i..]) {
            Some(n) => {
                score += n;
                i += n;
            }
            None => i += 1,
        }
    }
    score
}

#[must_use]
pub fn shift_jis_score(bytes: &[u8]) -> usize {
    greedy_score(bytes, shift_jis_match)
}

#[must_use]
pub fn euc_jp_score(bytes: &[u8]) -> usize {
    greedy_score(bytes, euc_jp_match)
}

#[must_use]
pub fn utf8_score(bytes: &[u8]) -> usize {
    greedy_score(bytes, utf8_match)
}
