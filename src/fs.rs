//! Atomic file writes.
//!
//! Story files are written via temp file + fsync + rename so a crash mid-save
//! never leaves a partial story on disk. The temp file lives in the same
//! directory as the target (rename is only atomic within one filesystem) and
//! is named `.{filename}.tmp`; on crash it may remain behind.

use crate::error::{MadlibError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file.
///
/// The parent directory must already exist. The target is either fully
/// written or untouched.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();
    let temp_path = temp_path_for(path)?;

    write_and_sync(&temp_path, content.as_bytes())?;
    atomic_replace(&temp_path, path)?;

    Ok(())
}

/// Temp file path in the same directory as the target.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| MadlibError::Storage("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        MadlibError::Storage(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        MadlibError::Storage(format!("failed to write to temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        MadlibError::Storage(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}

#[cfg(unix)]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // rename(2) is atomic and replaces an existing destination.
    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MadlibError::Storage(format!(
            "failed to atomically replace '{}': {}",
            target.display(),
            e
        ))
    })
}

#[cfg(not(unix))]
fn atomic_replace(source: &Path, target: &Path) -> Result<()> {
    // Windows rename fails if the destination exists; remove it first.
    // Not perfectly atomic, but the window is tiny and story files are
    // never rewritten in normal operation.
    if target.exists() {
        fs::remove_file(target).map_err(|e| {
            let _ = fs::remove_file(source);
            MadlibError::Storage(format!(
                "failed to remove existing file '{}': {}",
                target.display(),
                e
            ))
        })?;
    }

    fs::rename(source, target).map_err(|e| {
        let _ = fs::remove_file(source);
        MadlibError::Storage(format!(
            "failed to replace '{}': {}",
            target.display(),
            e
        ))
    })
}
