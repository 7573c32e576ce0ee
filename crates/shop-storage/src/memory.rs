//! In-memory document backend (for testing)

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::documents::{Document, DocumentBackend, DocumentSession};
use crate::error::StorageResult;

type Collections = HashMap<(String, String), Document>;

/// Documents held in a shared map
///
/// Not persistent; data is lost on drop. Sessions share the map, so opening
/// one is free.
#[derive(Default, Clone)]
pub struct InMemoryDocumentBackend {
    docs: Arc<RwLock<Collections>>,
}

impl InMemoryDocumentBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents across all collections
    pub fn len(&self) -> usize {
        self.docs.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.docs.write().clear();
    }
}

struct InMemorySession {
    docs: Arc<RwLock<Collections>>,
}

#[async_trait]
impl DocumentSession for InMemorySession {
    async fn put(&mut self, collection: &str, key: &str, doc: &Document) -> StorageResult<()> {
        self.docs
            .write()
            .insert((collection.to_owned(), key.to_owned()), doc.clone());
        Ok(())
    }

    async fn get(&mut self, collection: &str, key: &str) -> StorageResult<Option<Document>> {
        Ok(self
            .docs
            .read()
            .get(&(collection.to_owned(), key.to_owned()))
            .cloned())
    }
}

#[async_trait]
impl DocumentBackend for InMemoryDocumentBackend {
    async fn open(&self) -> StorageResult<Box<dyn DocumentSession>> {
        Ok(Box::new(InMemorySession {
            docs: self.docs.clone(),
        }))
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
