// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use script_encoder_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use std::path::PathBuf;
use std::time::Duration;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let walk = walk_options_from_args(args)?;
        let extensions = if args.filter.all {
            Vec::new()
        } else {
            args.filter
                .ext
                .iter()
                .map(|e| e.trim().trim_start_matches('.').to_string())
                .filter(|e| !e.is_empty())
                .collect()
        };

        ConfigBuilder::default()
            .walk(walk)
            .extensions(extensions)
            .dry_run(args.behavior.dry_run)
            .allow_lossy(args.behavior.allow_lossy)
            .strict(args.behavior.strict)
            .watch(args.behavior.watch)
            .watch_interval(Duration::from_secs(args.behavior.watch_interval))
            .build()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

fn walk_options_from_args(args: &Args) -> Result<WalkOptions, AppError> {
    let scan = &args.scan;

    let threads = scan.jobs.unwrap_or_else(num_cpus::get).max(1);
    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    WalkOptionsBuilder::default()
        .roots(roots)
        .threads(threads)
        .hidden(scan.hidden)
        .git_ignore(!scan.no_gitignore)
        .max_depth(scan.max_depth)
        .follow_links(scan.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Config {
        let args = Args::try_parse_from(argv).unwrap();
        Config::try_from(&args).unwrap()
    }

    #[test]
    fn defaults_to_current_directory_and_cs() {
        let config = config(&["script_encoder"]);
        assert_eq!(config.walk.roots, vec![PathBuf::from(".")]);
        assert_eq!(config.extensions, vec!["cs".to_string()]);
        assert!(config.walk.threads >= 1);
        assert!(config.walk.git_ignore);
        assert!(!config.dry_run);
    }

    #[test]
    fn all_clears_extension_filter() {
        let config = config(&["script_encoder", "--all"]);
        assert!(config.extensions.is_empty());
    }

    #[test]
    fn extensions_are_trimmed() {
        let config = config(&["script_encoder", "--ext", ".cs, .shader,"]);
        assert_eq!(config.extensions, vec!["cs".to_string(), "shader".to_string()]);
    }

    #[test]
    fn behavior_flags_are_mapped() {
        let config = config(&[
            "script_encoder",
            "-n",
            "--strict",
            "--allow-lossy",
            "-w",
            "--watch-interval",
            "5",
            "-j",
            "3",
            "--no-gitignore",
            "--max-depth",
            "2",
            "Assets",
        ]);
        assert!(config.dry_run && config.strict && config.allow_lossy && config.watch);
        assert_eq!(config.watch_interval, Duration::from_secs(5));
        assert_eq!(config.walk.threads, 3);
        assert!(!config.walk.git_ignore);
        assert_eq!(config.walk.max_depth, Some(2));
        assert_eq!(config.walk.roots, vec![PathBuf::from("Assets")]);
    }
}
