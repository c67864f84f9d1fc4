//! Transient per-request report files.
//!
//! A report file exists only between rendering and delivery. Its name is derived
//! from the candidate email, so two concurrent requests for the same email share
//! a path.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{error, info, warn};

/// `CARR_Report_{slug}.pdf`, where every character of `email` that is not an
/// ASCII alphanumeric, `-` or `_` becomes `_`.
pub fn report_file_name(email: &str) -> String {
    let slug: String = email
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("CARR_Report_{slug}.pdf")
}

/// Writes `bytes` to `{dir}/CARR_Report_{slug}.pdf`, creating `dir` if needed.
pub async fn save_report(dir: &Path, email: &str, bytes: &[u8]) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create reports directory {}", dir.display()))?;

    let path = dir.join(report_file_name(email));
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write report {}", path.display()))?;

    Ok(path)
}

/// Deletes a report file. Failures are logged, never returned.
pub async fn delete_report(path: &Path) -> bool {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            info!("File deleted: {}", path.display());
            true
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            false
        }
        Err(e) => {
            error!("Failed to delete file {}: {e}", path.display());
            false
        }
    }
}
