use derive_builder::Builder;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 既定の対象拡張子 (C# スクリプト)
pub const DEFAULT_EXTENSIONS: &[&str] = &["cs"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default)]
    pub roots: Vec<PathBuf>,
    #[builder(default = "1")]
    pub threads: usize,
    #[builder(default)]
    pub hidden: bool,
    #[builder(default = "true")]
    pub git_ignore: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            roots: vec![],
            threads: 1,
            hidden: false,
            git_ignore: true,
            max_depth: None,
            follow_links: false,
        }
    }
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,

    /// Extensions (without the dot) of files to process. Empty means all files.
    #[builder(default = "default_extensions()")]
    pub extensions: Vec<String>,

    /// Report what would change without writing anything.
    #[builder(default)]
    pub dry_run: bool,
    /// Write files even when decoding produced replacement characters.
    #[builder(default)]
    pub allow_lossy: bool,
    /// Abort on the first per-file error.
    #[builder(default)]
    pub strict: bool,

    #[builder(default)]
    pub watch: bool,
    #[builder(default = "Duration::from_secs(1)")]
    pub watch_interval: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            walk: WalkOptions::default(),
            extensions: default_extensions(),
            dry_run: false,
            allow_lossy: false,
            strict: false,
            watch: false,
            watch_interval: Duration::from_secs(1),
        }
    }
}

impl Config {
    /// 拡張子フィルタ (大文字小文字を区別しない)
    #[must_use]
    pub fn matches_extension(&self, path: &Path) -> bool {
        extension_matches(path, &self.extensions)
    }
}

/// Case-insensitive extension check; an empty allow-list accepts every path.
#[must_use]
pub fn extension_matches(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_csharp_scripts() {
        let config = Config::default();
        assert_eq!(config.extensions, vec!["cs".to_string()]);
        assert!(config.matches_extension(Path::new("Assets/Player.cs")));
        assert!(config.matches_extension(Path::new("Assets/Player.CS")));
        assert!(!config.matches_extension(Path::new("Assets/Player.cs.meta")));
        assert!(!config.matches_extension(Path::new("Makefile")));
    }

    #[test]
    fn empty_extension_list_matches_everything() {
        let config = ConfigBuilder::default()
            .extensions(Vec::<String>::new())
            .build()
            .unwrap();
        assert!(config.matches_extension(Path::new("Makefile")));
        assert!(config.matches_extension(Path::new("a.txt")));
    }

    #[test]
    fn leading_dot_is_tolerated() {
        let exts = vec![".txt".to_string(), "shader".to_string()];
        assert!(extension_matches(Path::new("notes.txt"), &exts));
        assert!(extension_matches(Path::new("Water.shader"), &exts));
        assert!(!extension_matches(Path::new("Player.cs"), &exts));
    }

    #[test]
    fn builder_applies_defaults() {
        let config = ConfigBuilder::default().dry_run(true).build().unwrap();
        assert!(config.dry_run);
        assert!(!config.allow_lossy);
        assert_eq!(config.watch_interval, Duration::from_secs(1));
        assert_eq!(config.walk.threads, 1);
        assert!(config.walk.git_ignore);
    }
}
