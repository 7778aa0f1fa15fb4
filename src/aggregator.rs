use std::path::Path;

use crate::config::SCAN_DIRS;
use crate::discovery::collect_entries;
use crate::io::{SnapshotWriter, read_lossy};
use crate::models::ReadOutcome;

/// Snapshot the scan roots under the current working directory into
/// `output_filename`. Only an output-stream failure aborts the run; every
/// per-file problem is recorded inline and skipped past.
pub async fn aggregate(output_filename: &str) -> Result<(), Box<dyn std::error::Error>> {
    let base = std::env::current_dir()?;
    aggregate_from(&base, output_filename).await
}

pub async fn aggregate_from(
    base: &Path,
    output_filename: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut writer = SnapshotWriter::create(&base.join(output_filename)).await?;
    let mut manifest: Vec<String> = Vec::new();

    for dir_name in SCAN_DIRS {
        for entry in collect_entries(base, dir_name) {
            // Manifest entry first, so even an unreadable file is listed
            manifest.push(entry.relative.clone());
            writer.header(&entry.relative).await?;

            match read_lossy(&entry.path).await {
                ReadOutcome::Content(text) => writer.content(&text).await?,
                ReadOutcome::Failed(reason) => {
                    writer.error_block(&entry.relative, &reason).await?
                }
            }
        }
    }

    writer.manifest(&manifest).await?;
    writer.finish().await?;

    println!(
        "✅ Snapshot written to '{}' ({} files)",
        output_filename,
        manifest.len()
    );
    Ok(())
}
