//! Writing the project layout to disk
//!
//! Folders are created with their missing ancestors. Files are only written
//! when nothing exists at the destination, so re-running against an existing
//! project never overwrites the user's edits.

use crate::templates::layout::ProjectFile;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// Outcome of a [`write_project`] call, as paths relative to the root
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteReport {
    pub written: Vec<String>,
    pub skipped: Vec<String>,
}

/// Create `folders` under `root`, then write each of `files` that is absent
pub async fn write_project(
    root: &Path,
    folders: &[&str],
    files: &[ProjectFile],
) -> Result<WriteReport> {
    for folder in folders {
        let dir = root.join(folder);
        fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }

    let mut report = WriteReport::default();

    for file in files {
        let target_path = root.join(&file.path);

        if fs::try_exists(&target_path)
            .await
            .with_context(|| format!("Failed to inspect: {}", target_path.display()))?
        {
            report.skipped.push(file.path.clone());
            continue;
        }

        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target_path, &file.content)
            .await
            .with_context(|| format!("Failed to write file: {}", target_path.display()))?;

        report.written.push(file.path.clone());
    }

    Ok(report)
}
