use std::path::Path;

use script_encoder_core::{Verdict, classify, has_utf8_bom, normalize_crlf};

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::persistence::atomic_write;
use crate::stats::{Action, FileReport, SkipReason};
use crate::transcode::{decode, encode_utf8_with_bom};

/// Decision for one buffer, before anything touches the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Convert {
        verdict: Verdict,
        output: Vec<u8>,
        lossy: bool,
    },
    Skip {
        verdict: Verdict,
        reason: SkipReason,
    },
}

impl Plan {
    #[must_use]
    pub const fn verdict(&self) -> Verdict {
        match self {
            Self::Convert { verdict, .. } | Self::Skip { verdict, .. } => *verdict,
        }
    }
}

/// 判定 → デコード → 改行正規化 → UTF-8 (BOM 付き) へのエンコード
#[must_use]
pub fn process_bytes(bytes: &[u8], config: &Config) -> Plan {
    // BOM 付きは分類器のスコアに関係なく変換済みとみなす
    if has_utf8_bom(bytes) {
        return Plan::Skip { verdict: Verdict::Utf8, reason: SkipReason::AlreadyUtf8Bom };
    }

    let verdict = classify(bytes);
    if !verdict.is_detected() {
        return Plan::Skip { verdict, reason: SkipReason::Undetected };
    }

    let Some(decoded) = decode(verdict, bytes) else {
        return Plan::Skip { verdict, reason: SkipReason::Undetected };
    };
    if decoded.had_errors && !config.allow_lossy {
        return Plan::Skip { verdict, reason: SkipReason::Malformed };
    }

    let text = normalize_crlf(&decoded.text);
    Plan::Convert {
        verdict,
        output: encode_utf8_with_bom(&text),
        lossy: decoded.had_errors,
    }
}

/// Process a single file: read, plan, and rewrite it unless in dry-run.
///
/// # Errors
///
/// Returns [`EngineError::FileRead`] / [`EngineError::FileWrite`] on I/O failure.
pub fn process_file(path: &Path, config: &Config) -> Result<FileReport> {
    let bytes = std::fs::read(path).map_err(|e| EngineError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    match process_bytes(&bytes, config) {
        Plan::Skip { verdict, reason } => {
            log::debug!("skip {} ({verdict}, {})", path.display(), reason.as_str());
            Ok(FileReport::skipped(path.to_path_buf(), verdict, reason, bytes.len()))
        }
        Plan::Convert { verdict, output, lossy } => {
            if lossy {
                log::warn!(
                    "{}: malformed {verdict} input, replacement characters written",
                    path.display()
                );
            }

            let action = if config.dry_run {
                Action::WouldConvert
            } else {
                atomic_write(path, &output).map_err(|e| EngineError::FileWrite {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                log::info!("converted {} from {verdict} to UTF-8 with BOM", path.display());
                Action::Converted
            };

            Ok(FileReport {
                path: path.to_path_buf(),
                verdict,
                action,
                reason: None,
                bytes_in: bytes.len(),
                bytes_out: output.len(),
                lossy,
            })
        }
    }
}
