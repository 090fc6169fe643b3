use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::fs::try_exists;

use crate::error::RunError;

pub fn resolve_absolute(path: &Path) -> Result<PathBuf, RunError> {
    std::path::absolute(path).map_err(|err| RunError::io("Unable to resolve path", path, err))
}

/// Resolves `path`, checks it exists and reads it whole. Bytes that are not
/// valid UTF-8 become U+FFFD. Returns the absolute path alongside the contents.
pub async fn read_prompt_file(path: &Path) -> Result<(PathBuf, String), RunError> {
    let absolute = resolve_absolute(path)?;

    if !try_exists(&absolute)
        .await
        .map_err(|err| RunError::io("Failed to verify file existence", &absolute, err))?
    {
        return Err(RunError::FileNotFound(absolute));
    }

    let bytes = fs::read(&absolute)
        .await
        .map_err(|err| RunError::io("Error reading file", &absolute, err))?;

    Ok((absolute, String::from_utf8_lossy(&bytes).into_owned()))
}

/// Writes `text` to `path`, replacing whatever was there.
pub async fn write_output(path: &Path, text: &str) -> Result<PathBuf, RunError> {
    let absolute = resolve_absolute(path)?;

    fs::write(&absolute, text)
        .await
        .map_err(|err| RunError::io("Error writing to file", &absolute, err))?;

    Ok(absolute)
}
