//! # script_encoder engine
//!
//! Finds source files, classifies their encoding and rewrites them as UTF-8
//! with a byte order mark and CRLF line endings.
//!
//! - [`config`]: run configuration and builders
//! - [`filesystem`]: parallel directory walk
//! - [`processor`]: per-file classify / decode / rewrite
//! - [`transcode`]: verdict to codec mapping
//! - [`persistence`]: atomic file replacement
//! - [`watch`]: file-change watcher

#![allow(clippy::multiple_crate_versions)]

use rayon::prelude::*;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod filesystem;
pub mod persistence;
pub mod processor;
pub mod stats;
pub mod transcode;
pub mod watch;

use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::stats::{FileReport, RunResult};

/// Walk every configured root and process each matching file.
///
/// Per-file failures are collected in [`RunResult::errors`] unless
/// `config.strict` is set.
///
/// # Errors
///
/// Returns an error if the walk cannot start, or for the first per-file
/// failure in strict mode.
pub fn run(config: &Config) -> Result<RunResult> {
    let (tx, rx) = crossbeam_channel::bounded(1024);
    let (err_tx, err_rx) = std::sync::mpsc::channel();

    let walk = config.walk.clone();
    let extensions = config.extensions.clone();

    let walker = std::thread::spawn(move || {
        if let Err(e) = filesystem::walk_parallel(&walk, &extensions, &tx) {
            let _ = err_tx.send(e);
        }
    });

    let result = collect(rx.into_iter().par_bridge(), config);
    join_walker(walker)?;

    if let Ok(walk_err) = err_rx.try_recv() {
        return Err(walk_err);
    }

    result
}

fn join_walker(handle: std::thread::JoinHandle<()>) -> Result<()> {
    handle.join().map_err(|_| EngineError::WalkerPanicked)
}

/// Process an explicit batch of paths, e.g. files reported by the watcher.
///
/// Paths that no longer exist, are not regular files, or fail the extension
/// filter are ignored.
///
/// # Errors
///
/// Returns the first per-file failure in strict mode.
pub fn process_paths(paths: &[PathBuf], config: &Config) -> Result<RunResult> {
    let iter = paths
        .par_iter()
        .filter(|p| p.is_file() && config.matches_extension(p))
        .cloned();
    collect(iter, config)
}

fn collect<I>(paths: I, config: &Config) -> Result<RunResult>
where
    I: ParallelIterator<Item = PathBuf>,
{
    let mut result = if config.strict {
        let reports = paths
            .map(|path| processor::process_file(&path, config))
            .collect::<Result<Vec<_>>>()?;
        RunResult { reports, errors: Vec::new() }
    } else {
        let (reports, errors): (Vec<FileReport>, Vec<(PathBuf, EngineError)>) = paths
            .map(|path| processor::process_file(&path, config).map_err(|e| (path, e)))
            .partition_map(|r| match r {
                Ok(report) => rayon::iter::Either::Left(report),
                Err(err) => rayon::iter::Either::Right(err),
            });
        RunResult { reports, errors }
    };

    result.sort();
    Ok(result)
}
