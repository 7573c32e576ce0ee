//! In-memory item collection

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// A shop item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

impl Item {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

struct Table {
    /// Keyed by insertion sequence, so iteration is insertion order
    items: BTreeMap<u64, Item>,
    /// Item id -> insertion sequence
    index: HashMap<i64, u64>,
    next_seq: u64,
    next_id: i64,
}

impl Table {
    fn empty() -> Self {
        Self {
            items: BTreeMap::new(),
            index: HashMap::new(),
            next_seq: 0,
            next_id: 1,
        }
    }

    /// Append `item`, or replace in place when its id is already present
    fn insert(&mut self, item: Item) {
        if let Some(seq) = self.index.get(&item.id) {
            self.items.insert(*seq, item);
            return;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.index.insert(item.id, seq);
        self.items.insert(seq, item);
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Item> {
        let seq = self.index.get(&id)?;
        self.items.get_mut(seq)
    }

    fn remove(&mut self, id: i64) -> Option<Item> {
        let seq = self.index.remove(&id)?;
        self.items.remove(&seq)
    }
}

/// Shared item collection
///
/// Every operation takes the one lock: `list` on the read side, mutators on
/// the write side. Ids come from a monotonic counter and are never reused,
/// even after a delete. Nothing is persisted.
pub struct ItemStore {
    table: RwLock<Table>,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Empty store; the first item gets id 1
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    /// Store pre-populated with `items`
    ///
    /// Items are listed in the order given. New ids continue from the
    /// largest seeded id. A later item with a repeated id replaces the
    /// earlier one and keeps its position.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut table = Table::empty();
        for item in items {
            table.next_id = table.next_id.max(item.id + 1);
            table.insert(item);
        }

        Self {
            table: RwLock::new(table),
        }
    }

    /// The two demo items the service starts with
    pub fn with_sample_items() -> Self {
        Self::with_items([Item::new(1, "Item 1"), Item::new(2, "Item 2")])
    }

    /// All items, in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.table.read().items.values().cloned().collect()
    }

    /// Add an item under a fresh id; duplicate names are allowed
    pub fn create(&self, name: impl Into<String>) -> Item {
        let mut table = self.table.write();
        let item = Item::new(table.next_id, name);
        table.next_id += 1;
        table.insert(item.clone());
        item
    }

    /// Rename an item
    ///
    /// Leaves the store untouched when `id` is absent.
    pub fn update(&self, id: i64, name: impl Into<String>) -> StoreResult<Item> {
        let mut table = self.table.write();
        let item = table.get_mut(id).ok_or(StoreError::ItemNotFound(id))?;
        item.name = name.into();
        Ok(item.clone())
    }

    /// Remove an item. Succeeds whether or not it existed; returns whether
    /// anything was removed.
    pub fn delete(&self, id: i64) -> bool {
        self.table.write().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.table.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
