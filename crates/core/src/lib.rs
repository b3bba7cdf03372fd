//! # script_encoder core
//!
//! Pure classification of text buffers into one of the encodings used by
//! Japanese source files. [`classify`] never allocates; only
//! [`normalize_crlf`] builds a new string, and only when a line ending changes.
//!
//! - [`classifier`]: the ordered detection pipeline ([`classify`])
//! - [`escape`]: ISO-2022-JP escape sequence detection
//! - [`scoring`]: multi-byte scoring and tie-break
//! - [`verdict`]: the classification result
//! - [`bom`], [`newline`]: small helpers callers need around a verdict
//!
//! Nothing in this crate performs I/O.

#![no_std]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]

extern crate alloc;

pub mod bom;
pub mod classifier;
pub mod escape;
pub mod newline;
pub mod scoring;
pub mod verdict;

pub use bom::{UTF8_BOM, has_utf8_bom};
pub use classifier::{Classification, classify, classify_detailed};
pub use newline::normalize_crlf;
pub use scoring::Scores;
pub use verdict::Verdict;
