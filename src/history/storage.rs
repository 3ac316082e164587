use super::Entry;
use crate::Result;
use std::path::PathBuf;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

/// Append-only chat log. The file is opened, appended, flushed, and closed per
/// entry; the mutex serializes appends so concurrent requests cannot interleave
/// blocks.
pub struct ChatLog {
    path: PathBuf,
    writer: Mutex<()>,
}

impl ChatLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: Mutex::new(()),
        }
    }

    pub async fn append(&self, entry: &Entry) -> Result<()> {
        let _guard = self.writer.lock().await;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;

        file.write_all(entry.render().as_bytes()).await?;
        file.flush().await?;

        debug!("Appended chat log entry to {}", self.path.display());
        Ok(())
    }
}
