use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// 判定結果のエンコーディング
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No supported encoding could be identified.
    #[serde(rename = "none")]
    NoDetection,
    /// Little-endian UTF-16.
    #[serde(rename = "utf-16le")]
    Utf16,
    /// 7-bit ASCII.
    #[serde(rename = "ascii")]
    Ascii,
    /// ISO-2022-JP (any JIS escape variant).
    #[serde(rename = "iso-2022-jp")]
    Jis,
    #[serde(rename = "shift_jis")]
    ShiftJis,
    /// EUC-JP
    #[serde(rename = "euc-jp")]
    Euc,
    #[serde(rename = "utf-8")]
    Utf8,
}

impl Verdict {
    pub const ALL: [Self; 7] = [
        Self::NoDetection,
        Self::Utf16,
        Self::Ascii,
        Self::Jis,
        Self::ShiftJis,
        Self::Euc,
        Self::Utf8,
    ];

    /// `false` only for [`Verdict::NoDetection`].
    #[must_use]
    pub const fn is_detected(self) -> bool {
        !matches!(self, Self::NoDetection)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoDetection => "none",
            Self::Utf16 => "utf-16le",
            Self::Ascii => "ascii",
            Self::Jis => "iso-2022-jp",
            Self::ShiftJis => "shift_jis",
            Self::Euc => "euc-jp",
            Self::Utf8 => "utf-8",
        }
    }

    /// Windows code page identifier for the verdict.
    #[must_use]
    pub const fn code_page(self) -> Option<u16> {
        match self {
            Self::NoDetection => None,
            Self::Utf16 => Some(1200),
            Self::Ascii => Some(20127),
            Self::Jis => Some(50220),
            Self::ShiftJis => Some(932),
            Self::Euc => Some(51932),
            Self::Utf8 => Some(65001),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Verdict {
    type Err = UnknownVerdict;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.label().eq_ignore_ascii_case(s))
            .ok_or(UnknownVerdict)
    }
}

/// Returned by [`Verdict::from_str`] for an unrecognised label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownVerdict;

impl fmt::Display for UnknownVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown encoding label")
    }
}
