//! Local filesystem document backend

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::fs;

use crate::documents::{Document, DocumentBackend, DocumentSession};
use crate::error::{StorageError, StorageResult};

/// Distinguishes temp files of concurrent writers to the same key
static WRITE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Local filesystem document storage
///
/// One JSON file per document. Structure: `{root}/{collection}/{hex(key)}.json`.
/// Keys are hex-encoded so any string maps to a distinct file name, with no
/// path separators and no case folding on case-insensitive filesystems.
/// Collection names must be plain directory names. Writes go to a temp file that is then renamed over the target, so a
/// reader sees either the old or the new document, never a partial one.
pub struct LocalDocumentBackend {
    root: PathBuf,
}

impl LocalDocumentBackend {
    /// Create storage at the given root directory
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(root: impl AsRef<Path>) -> StorageResult<Self> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

struct LocalSession {
    root: PathBuf,
}

/// File stem for a document key
fn file_stem(key: &str) -> String {
    hex::encode(key.as_bytes())
}

fn check_collection(collection: &str) -> StorageResult<()> {
    let bad = collection.is_empty()
        || collection.starts_with('.')
        || collection.contains(['/', '\\', '\0']);
    if bad {
        return Err(StorageError::InvalidKey(collection.to_owned()));
    }
    Ok(())
}

impl LocalSession {
    fn collection_dir(&self, collection: &str) -> StorageResult<PathBuf> {
        check_collection(collection)?;
        Ok(self.root.join(collection))
    }
}

#[async_trait]
impl DocumentSession for LocalSession {
    async fn put(&mut self, collection: &str, key: &str, doc: &Document) -> StorageResult<()> {
        let dir = self.collection_dir(collection)?;
        fs::create_dir_all(&dir).await?;

        let stem = file_stem(key);
        let bytes = serde_json::to_vec(doc)?;
        let seq = WRITE_SEQ.fetch_add(1, Ordering::Relaxed);
        let tmp = dir.join(format!(".{stem}.{}.{seq}.tmp", std::process::id()));

        fs::write(&tmp, &bytes).await?;
        if let Err(e) = fs::rename(&tmp, dir.join(format!("{stem}.json"))).await {
            let _ = fs::remove_file(&tmp).await;
            return Err(e.into());
        }
        Ok(())
    }

    async fn get(&mut self, collection: &str, key: &str) -> StorageResult<Option<Document>> {
        let path = self
            .collection_dir(collection)?
            .join(format!("{}.json", file_stem(key)));
        match fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map(Some)
                .map_err(|source| StorageError::Corrupt {
                    key: format!("{collection}/{key}"),
                    source,
                }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[async_trait]
impl DocumentBackend for LocalDocumentBackend {
    async fn open(&self) -> StorageResult<Box<dyn DocumentSession>> {
        Ok(Box::new(LocalSession {
            root: self.root.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        "local"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_stem_is_path_safe_and_case_preserving() {
        assert_eq!(file_stem("uid1"), "75696431");
        assert_ne!(file_stem("Abc"), file_stem("abc"));
        for key in ["../up", "a/b", "C:\\x", ".hidden"] {
            let stem = file_stem(key);
            assert!(stem.chars().all(|c| c.is_ascii_hexdigit()), "{key}");
        }
    }

    #[test]
    fn test_check_collection() {
        assert!(check_collection("users").is_ok());
        assert!(check_collection("user-docs_2").is_ok());
        assert!(check_collection("").is_err());
        assert!(check_collection("..").is_err());
        assert!(check_collection(".hidden").is_err());
        assert!(check_collection("a/b").is_err());
        assert!(check_collection("a\\b").is_err());
    }
}
