//! Rendering and persisting the result artifact.

use crate::constants::ASN_DELIMITER;
use crate::errors::{AppError, AppResult};
use crate::models::{AsnId, OutputFormat};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

/// Joins identifiers with commas: no leading or trailing delimiter, no whitespace.
pub fn join_asns(ids: &[AsnId]) -> String {
    ids.iter()
        .map(AsnId::as_str)
        .collect::<Vec<_>>()
        .join(ASN_DELIMITER)
}

/// Renders the full artifact content for the given format.
///
/// `List` is exactly the joined list. `Env` is a single `NAME=list` line, the form
/// read by proxies configured through a comma-separated `BLOCKED_ASN` variable.
pub fn render(ids: &[AsnId], format: OutputFormat, env_var: &str) -> String {
    let joined = join_asns(ids);
    match format {
        OutputFormat::List => joined,
        OutputFormat::Env => format!("{env_var}={joined}\n"),
    }
}

fn part_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".part");
    path.with_file_name(name)
}

/// Writes `content` as the entire content of `path`, replacing any previous artifact.
///
/// # Behavior
///
/// - **Atomic**: content goes to a sibling `.part` file which is renamed over the
///   target once fully written, so readers never observe a partial artifact.
/// - **All-or-nothing**: on failure the previous artifact (if any) is left untouched
///   and the `.part` file is removed on a best-effort basis.
///
/// # Errors
///
/// Returns [`AppError::OutputWriteFailure`] if the file cannot be created, written or renamed.
pub async fn write_artifact(path: &Path, content: &str) -> AppResult<()> {
    let tmp_path = part_path(path);
    let fail = |reason: String| AppError::OutputWriteFailure {
        path: path.to_path_buf(),
        reason,
    };

    let result = async {
        let mut file = File::create(&tmp_path).await.map_err(|e| {
            fail(format!(
                "Failed to create temp file {}: {e}",
                tmp_path.display()
            ))
        })?;
        file.write_all(content.as_bytes()).await.map_err(|e| {
            fail(format!(
                "Failed to write to temp file {}: {e}",
                tmp_path.display()
            ))
        })?;
        file.sync_all()
            .await
            .map_err(|e| fail(format!("Failed to flush {}: {e}", tmp_path.display())))?;

        // Ensure the file is closed before renaming
        drop(file);

        fs::rename(&tmp_path, path).await.map_err(|e| {
            fail(format!(
                "Failed to rename temp file {}: {e}",
                tmp_path.display()
            ))
        })
    }
    .await;

    match result {
        Ok(()) => {
            debug!(output = %path.display(), bytes = content.len(), "Artifact written");
            Ok(())
        }
        Err(e) => {
            if fs::metadata(&tmp_path).await.is_ok() {
                if let Err(rm) = fs::remove_file(&tmp_path).await {
                    warn!(
                        file_path = %tmp_path.display(),
                        error = %rm,
                        "Failed to remove temp file"
                    );
                }
            }
            Err(e)
        }
    }
}
