//! File system helpers used when writing configuration

use crate::error::FileError;
use std::path::Path;

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory_exists<P: AsRef<Path>>(path: P) -> crate::Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path).map_err(|source| FileError::Io {
            path: path.to_string_lossy().to_string(),
            source,
        })?;
    }
    Ok(())
}

/// Write `contents` to a new file, refusing to replace an existing one
pub fn write_new_file<P: AsRef<Path>>(path: P, contents: &str) -> crate::Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Err(FileError::AlreadyExists {
            path: path.to_string_lossy().to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    std::fs::write(path, contents).map_err(|source| FileError::Io {
        path: path.to_string_lossy().to_string(),
        source,
    })?;
    Ok(())
}
