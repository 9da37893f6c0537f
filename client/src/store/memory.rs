//! In-process storage engine.
//!
//! Mirrors the IndexedDB contract closely enough for tests and non-browser
//! builds: a versioned database of named collections of JSON records,
//! provisioned on open, iterated in key order. Failures can be switched on to exercise the error
//! paths of callers.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;

use super::{Connection, FavoriteItem, StorageEngine, StoreError, StoreSchema};

type Collection = BTreeMap<String, serde_json::Value>;

/// Engine backed by shared in-memory maps. Clones share the same data.
#[derive(Clone, Default)]
pub struct MemoryEngine {
    shared: Rc<MemoryShared>,
}

#[derive(Default)]
struct MemoryShared {
    version: Cell<u32>,
    collections: RefCell<BTreeMap<String, Collection>>,
    opens: Cell<usize>,
    attempts: Cell<usize>,
    fail_open: Cell<bool>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose every open is refused, like a browser with storage
    /// disabled.
    #[must_use]
    pub fn unavailable() -> Self {
        let engine = Self::default();
        engine.set_fail_open(true);
        engine
    }

    pub fn set_fail_open(&self, fail: bool) {
        self.shared.fail_open.set(fail);
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.shared.fail_reads.set(fail);
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.shared.fail_writes.set(fail);
    }

    /// Number of successful opens served so far.
    #[must_use]
    pub fn open_count(&self) -> usize {
        self.shared.opens.get()
    }

    /// Number of opens requested, including refused ones.
    #[must_use]
    pub fn open_attempts(&self) -> usize {
        self.shared.attempts.get()
    }

    /// Current database version; 0 before the first open.
    #[must_use]
    pub fn version(&self) -> u32 {
        self.shared.version.get()
    }

    /// Store `value` at `id` as-is, the way another writer of the database
    /// could. Creates `collection` if needed.
    pub fn insert_raw(&self, collection: &str, id: &str, value: serde_json::Value) {
        self.shared
            .collections
            .borrow_mut()
            .entry(collection.to_owned())
            .or_default()
            .insert(id.to_owned(), value);
    }

    /// Number of records in `collection`, or `None` if it was never created.
    #[must_use]
    pub fn record_count(&self, collection: &str) -> Option<usize> {
        self.shared.collections.borrow().get(collection).map(BTreeMap::len)
    }
}

#[async_trait(?Send)]
impl StorageEngine for MemoryEngine {
    async fn open(&self, schema: &StoreSchema) -> Result<Rc<dyn Connection>, StoreError> {
        let shared = &self.shared;
        shared.attempts.set(shared.attempts.get() + 1);
        if shared.fail_open.get() {
            return Err(StoreError::StorageUnavailable(format!("{} refused to open", schema.database)));
        }
        let current = shared.version.get();
        if schema.version < current {
            return Err(StoreError::StorageUnavailable(format!(
                "requested version {} is older than stored version {current}",
                schema.version
            )));
        }
        if schema.version > current {
            shared.collections.borrow_mut().entry(schema.collection.clone()).or_default();
            shared.version.set(schema.version);
        }
        shared.opens.set(shared.opens.get() + 1);
        Ok(Rc::new(MemoryConnection { shared: Rc::clone(shared), collection: schema.collection.clone() }))
    }
}

struct MemoryConnection {
    shared: Rc<MemoryShared>,
    collection: String,
}

impl MemoryConnection {
    fn check_read(&self) -> Result<(), StoreError> {
        if self.shared.fail_reads.get() {
            return Err(StoreError::Read(format!("{} read transaction aborted", self.collection)));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if self.shared.fail_writes.get() {
            return Err(StoreError::Write(format!("{} write transaction aborted", self.collection)));
        }
        Ok(())
    }

    fn missing(&self) -> String {
        format!("collection {} not found", self.collection)
    }
}

#[async_trait(?Send)]
impl Connection for MemoryConnection {
    async fn put(&self, item: &FavoriteItem) -> Result<(), StoreError> {
        self.check_write()?;
        let value = serde_json::to_value(item).map_err(|e| StoreError::Write(e.to_string()))?;
        let mut collections = self.shared.collections.borrow_mut();
        let records = collections.get_mut(&self.collection).ok_or_else(|| StoreError::Write(self.missing()))?;
        records.insert(item.id.clone(), value);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_write()?;
        let mut collections = self.shared.collections.borrow_mut();
        let records = collections.get_mut(&self.collection).ok_or_else(|| StoreError::Write(self.missing()))?;
        records.remove(id);
        Ok(())
    }

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        self.check_read()?;
        let collections = self.shared.collections.borrow();
        let records = collections.get(&self.collection).ok_or_else(|| StoreError::Read(self.missing()))?;
        Ok(records.contains_key(id))
    }

    async fn get_all(&self) -> Result<Vec<FavoriteItem>, StoreError> {
        self.check_read()?;
        let collections = self.shared.collections.borrow();
        let records = collections.get(&self.collection).ok_or_else(|| StoreError::Read(self.missing()))?;
        Ok(records
            .iter()
            .filter_map(|(id, value)| match serde_json::from_value(value.clone()) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("skipping malformed favorite record {id}: {e}");
                    None
                }
            })
            .collect())
    }
}
