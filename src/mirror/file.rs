//! File-backed mirror: one payload file per key.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{MirrorError, PersistenceMirror};

/// Mirror that keeps the payload for key `k` in `<dir>/<k>.json`.
///
/// Writes land in a temporary sibling first and are renamed into place after
/// a flush and sync, so a crash mid-write leaves the previous payload
/// intact rather than a truncated file.
pub struct JsonFileMirror {
    dir: PathBuf,
}

impl JsonFileMirror {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

#[async_trait]
impl PersistenceMirror for JsonFileMirror {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, MirrorError> {
        match fs::read(self.slot_path(key)).await {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn write(&self, key: &str, payload: &[u8]) -> Result<(), MirrorError> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.slot_path(key);
        let tmp = path.with_extension("json.tmp");
        let mut file = fs::File::create(&tmp).await?;
        file.write_all(payload).await?;
        file.flush().await?;
        file.sync_all().await?;
        fs::rename(&tmp, &path).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_slot_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let mirror = JsonFileMirror::new(dir.path());
        assert!(mirror.read("cart").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn writes_overwrite_and_read_back() {
        let dir = TempDir::new().unwrap();
        let mirror = JsonFileMirror::new(dir.path());

        mirror.write("cart", b"[1]").await.unwrap();
        assert_eq!(mirror.read("cart").await.unwrap().unwrap(), b"[1]");

        mirror.write("cart", b"[1,2]").await.unwrap();
        assert_eq!(mirror.read("cart").await.unwrap().unwrap(), b"[1,2]");

        // No stray temp file left behind.
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("cart.json")]);
    }
}
