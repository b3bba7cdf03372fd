//! エンコーディング判定
//!
//! The detection pipeline runs in a fixed order and the first stage that
//! reaches a decision wins:
//!
//! 1. control-byte veto (with the UTF-16LE null-byte heuristic)
//! 2. plain ASCII
//! 3. ISO-2022-JP escape sequences
//! 4. Shift_JIS / EUC-JP / UTF-8 scoring
//! 5. strict tie-break on the scores

use serde::{Deserialize, Serialize};

use crate::escape::{ESC, has_jis_escape};
use crate::scoring::Scores;
use crate::verdict::Verdict;

/// Verdict together with the multi-byte scores, when scoring ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub verdict: Verdict,
    pub scores: Option<Scores>,
}

impl Classification {
    const fn decided(verdict: Verdict) -> Self {
        Self { verdict, scores: None }
    }
}

/// Classify `bytes` into the most likely encoding.
///
/// Never fails: any input, including an empty one, yields a verdict.
#[must_use]
pub fn classify(bytes: &[u8]) -> Verdict {
    classify_detailed(bytes).verdict
}

#[must_use]
pub fn classify_detailed(bytes: &[u8]) -> Classification {
    if let Some(verdict) = control_veto(bytes) {
        return Classification::decided(verdict);
    }
    if is_plain_ascii(bytes) {
        return Classification::decided(Verdict::Ascii);
    }
    if has_jis_escape(bytes) {
        return Classification::decided(Verdict::Jis);
    }

    let scores = Scores::compute(bytes);
    log::debug!("sjis = {}, euc = {}, utf8 = {}", scores.sjis, scores.euc, scores.utf8);
    Classification {
        verdict: scores.verdict(),
        scores: Some(scores),
    }
}

const fn is_vetoed(b: u8) -> bool {
    b <= 0x06 || b == 0x7F || b == 0xFF
}

/// Decides on the first vetoed byte.
///
/// A null followed by an ASCII-range byte reads as a UTF-16LE code unit;
/// anything else vetoed means the buffer is not text we handle.
fn control_veto(bytes: &[u8]) -> Option<Verdict> {
    let i = bytes.iter().position(|&b| is_vetoed(b))?;
    match (bytes[i], bytes.get(i + 1)) {
        (0x00, Some(&next)) if next <= 0x7F => Some(Verdict::Utf16),
        _ => Some(Verdict::NoDetection),
    }
}

fn is_plain_ascii(bytes: &[u8]) -> bool {
    !bytes.iter().any(|&b| b == ESC || b >= 0x80)
}
