use std::path::Path;
use walkdir::WalkDir;

use crate::models::FileEntry;
use crate::utils::relative_path;

/// Collect every file under `base/dir_name`, arbitrarily deep.
///
/// A missing root is a warning and zero files, never an error. Entries are
/// sorted per directory so the traversal order is stable for a fixed tree.
/// Symlinks are yielded like any other file; a broken one surfaces later as
/// a per-file read failure.
pub fn collect_entries(base: &Path, dir_name: &str) -> Vec<FileEntry> {
    let dir_path = base.join(dir_name);

    if !dir_path.exists() {
        println!("⚠️ Directory '{}' does not exist, skipping", dir_path.display());
        return Vec::new();
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(&dir_path).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_dir() {
                    continue;
                }
                let path = entry.path().to_path_buf();
                let relative = relative_path(base, &path);
                entries.push(FileEntry::new(path, relative));
            }
            Err(e) => {
                // Unreadable subdirectory: skip it, keep walking
                println!("⚠️ Skipping unreadable entry under '{}': {}", dir_name, e);
            }
        }
    }

    entries
}
