//! Per-user document storage

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::{StorageError, StorageResult};

/// A stored JSON object
pub type Document = Map<String, Value>;

/// Collection user documents live in unless configured otherwise
pub const DEFAULT_COLLECTION: &str = "users";

/// A handle acquired from a [`DocumentBackend`]
///
/// Whatever the handle holds (a connection, a file lock) is released when
/// it is dropped.
#[async_trait]
pub trait DocumentSession: Send {
    /// Store `doc` under `collection/key`, replacing any previous document
    async fn put(&mut self, collection: &str, key: &str, doc: &Document) -> StorageResult<()>;

    /// Fetch the document at `collection/key`
    ///
    /// Returns `Ok(None)` if there is none.
    async fn get(&mut self, collection: &str, key: &str) -> StorageResult<Option<Document>>;
}

/// External key/document database
#[async_trait]
pub trait DocumentBackend: Send + Sync {
    /// Acquire a session for one logical operation
    async fn open(&self) -> StorageResult<Box<dyn DocumentSession>>;

    /// Short backend name for logs
    fn name(&self) -> &'static str;
}

fn require_uid(uid: &str) -> StorageResult<()> {
    if uid.is_empty() {
        return Err(StorageError::InvalidKey(uid.to_owned()));
    }
    Ok(())
}

/// One document per identity uid
///
/// Each call acquires its own backend session and releases it before
/// returning, on success and failure alike. Any non-empty uid is accepted;
/// mapping it onto backend keys is the backend's job. No retries or
/// coordination: concurrent writers to the same uid resolve last-write-wins in the backend.
#[derive(Clone)]
pub struct UserDocumentStore {
    backend: Arc<dyn DocumentBackend>,
    collection: String,
}

impl UserDocumentStore {
    pub fn new(backend: Arc<dyn DocumentBackend>, collection: impl Into<String>) -> Self {
        Self {
            backend,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Replace the document for `uid` with `payload` (no merge)
    pub async fn put(&self, uid: &str, payload: &Document) -> StorageResult<()> {
        require_uid(uid)?;

        let mut session = self.backend.open().await?;
        session.put(&self.collection, uid, payload).await?;
        tracing::debug!(uid, backend = self.backend.name(), "user document stored");
        Ok(())
    }

    /// The latest document stored for `uid`, if any
    pub async fn get(&self, uid: &str) -> StorageResult<Option<Document>> {
        require_uid(uid)?;

        let mut session = self.backend.open().await?;
        session.get(&self.collection, uid).await
    }
}
