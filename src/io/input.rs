use std::path::Path;
use tokio::fs;

use crate::models::ReadOutcome;

/// Read a file as text, replacing invalid byte sequences instead of failing.
/// Only an I/O-level failure (permissions, vanished file) yields `Failed`.
pub async fn read_lossy(path: &Path) -> ReadOutcome {
    match fs::read(path).await {
        Ok(bytes) => ReadOutcome::Content(String::from_utf8_lossy(&bytes).into_owned()),
        Err(e) => ReadOutcome::Failed(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_read_plain_text() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("a.h");
        std_fs::write(&path, "int x;").unwrap();

        match read_lossy(&path).await {
            ReadOutcome::Content(text) => assert_eq!(text, "int x;"),
            ReadOutcome::Failed(reason) => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced_not_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbled.bin");
        std_fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        match read_lossy(&path).await {
            ReadOutcome::Content(text) => assert!(text.contains('\u{FFFD}')),
            ReadOutcome::Failed(reason) => panic!("unexpected failure: {}", reason),
        }
    }

    #[tokio::test]
    async fn test_missing_file_is_a_failure_value() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone.txt");

        match read_lossy(&path).await {
            ReadOutcome::Content(_) => panic!("read of a missing file succeeded"),
            ReadOutcome::Failed(reason) => assert!(!reason.is_empty()),
        }
    }
}
