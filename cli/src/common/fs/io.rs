//! # Pienkuu Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Thin async wrappers around `tokio::fs` reads used while staging folder
//! files and running `copy` actions. Every failure is reported as
//! `PienkuuError::FileRead` naming the offending path, which aborts the run.
//!
//! - **`read_file_bytes`**: Reads a file as raw bytes (untransformed staging).
//! - **`read_file_to_string`**: Reads a file as UTF-8 text (lint/minify, `copy`).
//! - **`write_file_bytes`**: Writes the finished archive to disk, replacing any
//!   previous file of the same name.
//! - **`remove_file_if_exists`**: Deletes a stale output archive.
//!
use crate::core::error::{PienkuuError, Result};
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

/// Reads the entire content of a file as bytes.
pub async fn read_file_bytes(path: &str) -> Result<Vec<u8>> {
    tokio::fs::read(Path::new(path))
        .await
        .map_err(|e| file_read_error(path, e.to_string()))
}

/// Reads the entire content of a file as UTF-8 text.
///
/// # Errors
///
/// Returns `PienkuuError::FileRead` if the file cannot be read or is not valid UTF-8.
pub async fn read_file_to_string(path: &str) -> Result<String> {
    let bytes = read_file_bytes(path).await?;
    String::from_utf8(bytes).map_err(|e| file_read_error(path, format!("not valid UTF-8 ({})", e)))
}

/// Writes `contents` to `path`, overwriting any existing file.
pub async fn write_file_bytes(path: &Path, contents: &[u8]) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|e| anyhow::anyhow!(e).context(format!("Failed to write {:?}", path)))?;
    info!("Wrote {} bytes to {:?}", contents.len(), path);
    Ok(())
}

/// Removes `path` if it exists. A missing file is not an error.
pub async fn remove_file_if_exists(path: &Path) -> Result<()> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            debug!("Removed previous output file {:?}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(anyhow::anyhow!(e).context(format!("Failed to remove {:?}", path))),
    }
}

fn file_read_error(path: &str, reason: String) -> anyhow::Error {
    anyhow::anyhow!(PienkuuError::FileRead {
        path: path.to_string(),
        reason,
    })
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_read_file_bytes_and_string() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("a.txt");
        std::fs::write(&path, "hello")?;
        let path = path.to_string_lossy().to_string();

        assert_eq!(read_file_bytes(&path).await?, b"hello");
        assert_eq!(read_file_to_string(&path).await?, "hello");
        Ok(())
    }

    #[tokio::test]
    async fn test_read_missing_file_is_file_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt").to_string_lossy().to_string();
        let err = read_file_bytes(&path).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PienkuuError>(),
            Some(PienkuuError::FileRead { .. })
        ));
    }

    #[tokio::test]
    async fn test_read_non_utf8_as_string_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bin.dat");
        std::fs::write(&path, [0xffu8, 0xfe, 0x00]).unwrap();
        let err = read_file_to_string(&path.to_string_lossy())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not valid UTF-8"));
    }

    #[tokio::test]
    async fn test_write_then_remove() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out.zip");
        write_file_bytes(&path, b"one").await?;
        write_file_bytes(&path, b"two").await?;
        assert_eq!(std::fs::read(&path)?, b"two");

        remove_file_if_exists(&path).await?;
        assert!(!path.exists());
        // Second removal is a no-op.
        remove_file_if_exists(&path).await?;
        Ok(())
    }
}
