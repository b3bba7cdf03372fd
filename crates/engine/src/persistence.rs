use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

/// Atomically replace `path` with `data` via a temp file in the same directory.
///
/// Best-effort fsync of the file and its directory.
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        Some(_) => Path::new("."),
        None => return Err(std::io::Error::other("path has no parent")),
    };

    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let result = write_then_rename(&tmp, path, data);
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result?;

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}

fn write_then_rename(tmp: &Path, path: &Path, data: &[u8]) -> std::io::Result<()> {
    let file = File::create(tmp)?;
    // 元ファイルのパーミッションを引き継ぐ
    if let Ok(meta) = fs::metadata(path) {
        let _ = file.set_permissions(meta.permissions());
    }
    let mut w = BufWriter::new(file);
    w.write_all(data)?;
    w.flush()?;
    let _ = w.get_ref().sync_all();
    drop(w);
    fs::rename(tmp, path)
}
