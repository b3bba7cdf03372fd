use crate::config::{WalkOptions, extension_matches};
use crate::error::{EngineError, Result};
use crossbeam_channel::Sender;
use ignore::WalkBuilder;
use std::path::PathBuf;

/// Parallel recursive walk of all roots, sending every regular file whose
/// extension is in `extensions`.
///
/// # Errors
/// Returns an error if a root does not exist. Errors on individual entries
/// are logged and skipped.
pub fn walk_parallel(options: &WalkOptions, extensions: &[String], tx: &Sender<PathBuf>) -> Result<()> {
    let Some((first, rest)) = options.roots.split_first() else {
        return Ok(());
    };

    if let Some(missing) = options.roots.iter().find(|r| !r.exists()) {
        return Err(EngineError::Config(format!("path does not exist: {}", missing.display())));
    }

    let mut builder = WalkBuilder::new(first);
    for root in rest {
        builder.add(root);
    }

    builder
        .threads(options.threads)
        .hidden(!options.hidden)
        .git_ignore(options.git_ignore)
        .follow_links(options.follow_links)
        .max_depth(options.max_depth);

    let walker = builder.build_parallel();
    walker.run(|| {
        let tx = tx.clone();
        Box::new(move |entry| {
            match entry {
                Ok(entry)
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && extension_matches(entry.path(), extensions) =>
                {
                    if tx.send(entry.into_path()).is_err() {
                        return ignore::WalkState::Quit;
                    }
                }
                Ok(_) => {}
                Err(err) => log::warn!("walk: {err}"),
            }
            ignore::WalkState::Continue
        })
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn collect(options: &WalkOptions, extensions: &[String]) -> Vec<PathBuf> {
        let (tx, rx) = crossbeam_channel::unbounded();
        walk_parallel(options, extensions, &tx).unwrap();
        drop(tx);
        let mut paths: Vec<_> = rx.into_iter().collect();
        paths.sort();
        paths
    }

    #[test]
    fn finds_matching_files_recursively() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("Assets/Scripts")).unwrap();
        fs::write(dir.path().join("Assets/Scripts/Player.cs"), "class Player {}").unwrap();
        fs::write(dir.path().join("Assets/Scripts/Player.cs.meta"), "guid: 1").unwrap();
        fs::write(dir.path().join("Assets/Enemy.CS"), "class Enemy {}").unwrap();

        let options = WalkOptions { roots: vec![dir.path().to_path_buf()], ..WalkOptions::default() };
        let paths = collect(&options, &["cs".to_string()]);

        assert_eq!(
            paths,
            vec![dir.path().join("Assets/Enemy.CS"), dir.path().join("Assets/Scripts/Player.cs")]
        );
    }

    #[test]
    fn file_roots_are_yielded_directly() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("Only.cs");
        fs::write(&file, "x").unwrap();

        let options = WalkOptions { roots: vec![file.clone()], ..WalkOptions::default() };
        assert_eq!(collect(&options, &["cs".to_string()]), vec![file]);
    }

    #[test]
    fn hidden_files_need_opt_in() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".hidden")).unwrap();
        fs::write(dir.path().join(".hidden/Secret.cs"), "x").unwrap();

        let mut options = WalkOptions { roots: vec![dir.path().to_path_buf()], ..WalkOptions::default() };
        assert!(collect(&options, &[]).is_empty());

        options.hidden = true;
        assert_eq!(collect(&options, &[]), vec![dir.path().join(".hidden/Secret.cs")]);
    }

    #[test]
    fn missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let options = WalkOptions { roots: vec![dir.path().join("nope")], ..WalkOptions::default() };
        let (tx, _rx) = crossbeam_channel::unbounded();
        assert!(matches!(walk_parallel(&options, &[], &tx), Err(EngineError::Config(_))));
    }
}
