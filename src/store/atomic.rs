//! Locked atomic file writes shared by the config and state files

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use fs2::FileExt;

/// Write `content` to `path` atomically.
///
/// An exclusive lock on `<path>.lock` is held for the duration, the bytes go
/// to `<path>.tmp` first and are renamed over the target, and the parent
/// directory is created if needed.
pub fn write_atomic(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;

    let temp_path = sibling(path, "tmp");
    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)?;
    temp_file.write_all(content)?;
    temp_file.sync_all()?;

    std::fs::rename(&temp_path, path)?;

    // Lock is released when lock_file is dropped
    Ok(())
}

/// Remove `path` under the same lock used for writes; missing files are fine
pub fn remove_locked(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let lock_path = sibling(path, "lock");
    let lock_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)?;
    lock_file.lock_exclusive()?;

    match std::fs::remove_file(path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
        _ => Ok(()),
    }
}

/// `state.json` -> `state.json.<suffix>`
fn sibling(path: &Path, suffix: &str) -> std::path::PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(suffix);
    path.with_file_name(name)
}
