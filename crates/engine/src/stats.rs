use std::path::PathBuf;

use script_encoder_core::Verdict;
use serde::Serialize;

use crate::error::EngineError;

/// What happened (or would happen, in dry-run) to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Converted,
    WouldConvert,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// The classifier found no supported encoding.
    Undetected,
    /// Already UTF-8 with a byte order mark.
    AlreadyUtf8Bom,
    /// Decoding would replace malformed input.
    Malformed,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Converted => "converted",
            Self::WouldConvert => "would-convert",
            Self::Skipped => "skipped",
        }
    }
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undetected => "undetected",
            Self::AlreadyUtf8Bom => "already-utf8-bom",
            Self::Malformed => "malformed",
        }
    }
}

/// Per-file outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub verdict: Verdict,
    pub action: Action,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<SkipReason>,
    pub bytes_in: usize,
    pub bytes_out: usize,
    /// Replacement characters were written (only with `allow_lossy`).
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub lossy: bool,
}

impl FileReport {
    #[must_use]
    pub fn skipped(path: PathBuf, verdict: Verdict, reason: SkipReason, bytes_in: usize) -> Self {
        Self {
            path,
            verdict,
            action: Action::Skipped,
            reason: Some(reason),
            bytes_in,
            bytes_out: bytes_in,
            lossy: false,
        }
    }

    #[must_use]
    pub const fn is_change(&self) -> bool {
        matches!(self.action, Action::Converted | Action::WouldConvert)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub converted: usize,
    pub skipped: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub reports: Vec<FileReport>,
    pub errors: Vec<(PathBuf, EngineError)>,
}

impl RunResult {
    #[must_use]
    pub fn summary(&self) -> Summary {
        let converted = self.reports.iter().filter(|r| r.is_change()).count();
        Summary {
            total: self.reports.len() + self.errors.len(),
            converted,
            skipped: self.reports.len() - converted,
            failed: self.errors.len(),
        }
    }

    /// Reports sorted by path, for stable output.
    pub fn sort(&mut self) {
        self.reports.sort_by(|a, b| a.path.cmp(&b.path));
        self.errors.sort_by(|a, b| a.0.cmp(&b.0));
    }
}
