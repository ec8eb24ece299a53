//! Local filesystem storage for uploaded receipts.
//!
//! Receipts live in a single flat directory that is also served publicly
//! under [`PUBLIC_UPLOAD_PREFIX`](reimburse_core::receipt::PUBLIC_UPLOAD_PREFIX).
//! Writes are not serialized: saving under an existing name replaces the
//! previous file.

use std::path::{Path, PathBuf};

use reimburse_core::receipt;

/// Scratch file written and removed by [`ReceiptStore::is_writable`].
const WRITE_CHECK_FILE: &str = ".write-check";

/// Directory-backed receipt store.
#[derive(Debug, Clone)]
pub struct ReceiptStore {
    root: PathBuf,
}

impl ReceiptStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory receipts are written to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Absolute or relative on-disk location of `filename`.
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.root.join(filename)
    }

    /// Create the upload directory and any missing parents. Idempotent.
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.root).await
    }

    /// Whether the upload directory exists and accepts new files.
    ///
    /// Does not create the directory.
    pub async fn is_writable(&self) -> bool {
        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => {}
            _ => return false,
        }
        let path = self.path_for(WRITE_CHECK_FILE);
        if let Err(err) = tokio::fs::write(&path, b"").await {
            tracing::warn!(dir = %self.root.display(), error = %err, "Upload directory not writable");
            return false;
        }
        let _ = tokio::fs::remove_file(&path).await;
        true
    }

    /// Write `data` as `filename`, returning the receipt's public path.
    pub async fn save(&self, filename: &str, data: &[u8]) -> std::io::Result<String> {
        self.ensure_dir().await?;
        let path = self.path_for(filename);
        tokio::fs::write(&path, data).await?;
        tracing::debug!(path = %path.display(), bytes = data.len(), "Receipt written");
        Ok(receipt::public_path(filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(tmp.path().join("public").join("uploads"));

        let public = store.save("receipt-1.png", b"png-bytes").await.unwrap();

        assert_eq!(public, "/uploads/receipt-1.png");
        let written = tokio::fs::read(store.path_for("receipt-1.png")).await.unwrap();
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(tmp.path().join("uploads"));
        store.ensure_dir().await.unwrap();
        store.ensure_dir().await.unwrap();
        assert!(store.root().is_dir());
    }

    #[tokio::test]
    async fn existing_directory_is_writable() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(tmp.path());
        assert!(store.is_writable().await);
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn missing_directory_is_not_writable_and_not_created() {
        let tmp = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(tmp.path().join("uploads"));
        assert!(!store.is_writable().await);
        assert!(!store.root().exists());
    }

    #[tokio::test]
    async fn file_in_place_of_directory_is_not_writable() {
        let tmp = tempfile::tempdir().unwrap();
        let root = tmp.path().join("uploads");
        std::fs::write(&root, b"not a directory").unwrap();
        assert!(!ReceiptStore::new(root).is_writable().await);
    }

    #[tokio::test]
    async fn same_name_overwrites_previous_file() {
        // Two uploads in the same millisecond share a name; the second wins.
        let tmp = tempfile::tempdir().unwrap();
        let store = ReceiptStore::new(tmp.path());
        let name = receipt::receipt_filename("first.png", 1_700_000_000_000);

        store.save(&name, b"first").await.unwrap();
        store
            .save(&receipt::receipt_filename("second.png", 1_700_000_000_000), b"second")
            .await
            .unwrap();

        let written = tokio::fs::read(store.path_for(&name)).await.unwrap();
        assert_eq!(written, b"second");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    #[tokio::test]
    async fn save_fails_when_root_is_a_file() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("uploads");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let store = ReceiptStore::new(&blocker);
        assert!(store.save("receipt-1.png", b"data").await.is_err());
    }
}
