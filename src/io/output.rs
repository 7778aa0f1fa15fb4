use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::config::{MANIFEST_SEPARATOR, MANIFEST_TITLE, NO_FILES_NOTICE};

/// Writes the snapshot file block by block. The underlying file is opened
/// once and stays open for the whole run; `finish` flushes it.
pub struct SnapshotWriter {
    writer: BufWriter<File>,
}

impl SnapshotWriter {
    pub async fn create(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::create(path).await?;
        Ok(Self { writer: BufWriter::new(file) })
    }

    /// Header line naming the file the next block belongs to.
    pub async fn header(&mut self, relative: &str) -> Result<(), Box<dyn std::error::Error>> {
        let line = format!("--- 文件路径: {} ---\n\n", relative);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }

    pub async fn content(&mut self, text: &str) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.write_all(b"\n\n").await?;
        Ok(())
    }

    /// Inline marker written in place of content when a file could not be read.
    pub async fn error_block(
        &mut self,
        relative: &str,
        reason: &str,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let line = format!("*** 无法读取文件: {} | 错误: {} ***\n\n", relative, reason);
        self.writer.write_all(line.as_bytes()).await?;
        Ok(())
    }

    /// Trailing manifest: separator, title, then one relative path per line,
    /// or the fixed notice when nothing was found.
    pub async fn manifest(&mut self, paths: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        let mut section = String::new();
        section.push_str(MANIFEST_SEPARATOR);
        section.push('\n');
        section.push_str(MANIFEST_TITLE);
        section.push('\n');
        section.push_str(MANIFEST_SEPARATOR);
        section.push_str("\n\n");

        if paths.is_empty() {
            section.push_str(NO_FILES_NOTICE);
            section.push('\n');
        } else {
            for path in paths {
                section.push_str(path);
                section.push('\n');
            }
        }

        self.writer.write_all(section.as_bytes()).await?;
        Ok(())
    }

    pub async fn finish(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.writer.flush().await?;
        Ok(())
    }
}
