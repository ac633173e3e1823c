//! File system helpers for the pipeline.

use std::{io, path::Path};

use tokio::fs;

use crate::error::Result;

/// Creates all of the directories of the specified path, erasing it first if
/// specified.
///
/// With `erase`, this implements the output-directory reset invariant: the
/// directory is removed and recreated empty, so stale contents never survive.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    Ok(fs::create_dir_all(path).await?)
}

/// Removes the directory and its contents if it exists.
///
/// Only "not found" is treated as success; every other failure propagates.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}
