//! shop-storage: Item and per-user document storage
//!
//! Two independent stores sit behind the authenticated API:
//!
//! - [`ItemStore`]: the shop's item collection, held in process memory and
//!   guarded by a single lock.
//! - [`UserDocumentStore`]: one JSON document per identity uid, delegated to
//!   a pluggable [`DocumentBackend`].
//!
//! No authentication logic lives here; callers pass an already verified uid.
//!
//! ## Document backends
//!
//! | Backend                  | Use Case                       |
//! |--------------------------|--------------------------------|
//! | `InMemoryDocumentBackend`| Unit tests, development        |
//! | `LocalDocumentBackend`   | Single-node deployments        |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use shop_storage::{InMemoryDocumentBackend, ItemStore, UserDocumentStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let items = ItemStore::with_sample_items();
//!     let widget = items.create("Widget");
//!     assert_eq!(widget.id, 3);
//!
//!     let docs = UserDocumentStore::new(Arc::new(InMemoryDocumentBackend::new()), "users");
//!     let payload = serde_json::json!({ "name": "A" });
//!     docs.put("uid1", payload.as_object().unwrap()).await?;
//!
//!     Ok(())
//! }
//! ```

mod documents;
mod error;
mod items;

mod local;
mod memory;

// Re-exports
pub use documents::{
    DEFAULT_COLLECTION, Document, DocumentBackend, DocumentSession, UserDocumentStore,
};
pub use error::{StorageError, StorageResult, StoreError, StoreResult};
pub use items::{Item, ItemStore};

pub use local::LocalDocumentBackend;
pub use memory::InMemoryDocumentBackend;
