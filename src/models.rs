use std::path::PathBuf;


/// A file found under one of the scan roots.
#[derive(Debug, Clone)]
pub struct FileEntry {
    /// Absolute path, used for the read.
    pub path: PathBuf,
    /// Path relative to the base directory, used for headers and the manifest.
    pub relative: String,
}

impl FileEntry {
    pub fn new(path: PathBuf, relative: String) -> Self {
        Self { path, relative }
    }
}

/// Per-file read result. A failed read never aborts the batch; it is carried
/// here as a value and rendered as an inline error block.
#[derive(Debug)]
pub enum ReadOutcome {
    Content(String),
    Failed(String),
}
