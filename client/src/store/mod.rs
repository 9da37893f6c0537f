//! Local Store: asynchronous key-value persistence for favorited products.
//!
//! DESIGN
//! ======
//! `LocalStore` is a cheap-to-clone handle over one lazily opened connection.
//! The connection sits in a `OnceCell`: once an engine open succeeds, every
//! caller, concurrent or later, shares that one connection. Failed attempts
//! are not shared; each waiting caller makes its own.
//!
//! Each operation runs its own short transaction on the single collection; nothing
//! holds a transaction across operations, and concurrent writes to the same
//! id are last-commit-wins.
//!
//! Engines are pluggable: `IdbEngine` (browser IndexedDB, `hydrate` only) and
//! `MemoryEngine` (in-process, used by tests and non-browser builds).
//!
//! ERROR HANDLING
//! ==============
//! Failures are logged here, at the operation boundary, and returned as
//! `StoreError`. A failed open leaves the store `Closed`; the next operation
//! the user triggers tries again. Nothing retries on its own.

mod error;
#[cfg(feature = "hydrate")]
mod idb;
mod item;
mod memory;


use std::rc::Rc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

pub use error::StoreError;
#[cfg(feature = "hydrate")]
pub use idb::IdbEngine;
pub use item::{FavoriteItem, ProductAttributes, detail_link};
pub use memory::MemoryEngine;

pub const DEFAULT_DATABASE: &str = "SneakerFavoritesDB";
pub const DEFAULT_VERSION: u32 = 1;
pub const DEFAULT_COLLECTION: &str = "favorites";
pub const DEFAULT_KEY_PATH: &str = "id";

// =============================================================================
// SCHEMA
// =============================================================================

/// Database layout. Bumping `version` is the only schema evolution path; the
/// upgrade creates `collection` when absent and leaves existing records alone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSchema {
    pub database: String,
    pub version: u32,
    pub collection: String,
    pub key_path: String,
}

impl Default for StoreSchema {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_owned(),
            version: DEFAULT_VERSION,
            collection: DEFAULT_COLLECTION.to_owned(),
            key_path: DEFAULT_KEY_PATH.to_owned(),
        }
    }
}

// =============================================================================
// ENGINE TRAITS
// =============================================================================

/// Opens connections to a persistent key-value database.
///
/// Futures are not `Send`: browser storage handles are bound to the page's
/// single thread.
#[async_trait(?Send)]
pub trait StorageEngine {
    /// Open (and on first use, provision) the database described by `schema`.
    async fn open(&self, schema: &StoreSchema) -> Result<Rc<dyn Connection>, StoreError>;
}

/// An open database. Every call is its own transaction.
#[async_trait(?Send)]
pub trait Connection {
    async fn put(&self, item: &FavoriteItem) -> Result<(), StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
    /// Presence only; the record is not decoded.
    async fn contains(&self, id: &str) -> Result<bool, StoreError>;
    /// Decoded records. Records that fail to decode are skipped.
    async fn get_all(&self) -> Result<Vec<FavoriteItem>, StoreError>;
}

// =============================================================================
// LOCAL STORE
// =============================================================================

/// Whether the shared connection has been established yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreState {
    Closed,
    Open,
}

/// Shared handle to the favorites database.
#[derive(Clone)]
pub struct LocalStore {
    inner: Rc<StoreInner>,
}

struct StoreInner {
    engine: Box<dyn StorageEngine>,
    schema: StoreSchema,
    connection: OnceCell<Rc<dyn Connection>>,
}

impl LocalStore {
    /// Create a closed store over `engine` using the default schema.
    pub fn new(engine: impl StorageEngine + 'static) -> Self {
        Self::with_schema(engine, StoreSchema::default())
    }

    pub fn with_schema(engine: impl StorageEngine + 'static, schema: StoreSchema) -> Self {
        Self {
            inner: Rc::new(StoreInner { engine: Box::new(engine), schema, connection: OnceCell::new() }),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &StoreSchema {
        &self.inner.schema
    }

    #[must_use]
    pub fn state(&self) -> StoreState {
        if self.inner.connection.initialized() { StoreState::Open } else { StoreState::Closed }
    }

    /// Establish the shared connection, or return the one already open.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::StorageUnavailable` if the engine refuses to open.
    pub async fn open(&self) -> Result<Rc<dyn Connection>, StoreError> {
        let connection = self
            .inner
            .connection
            .get_or_try_init(|| async move {
                let schema = &self.inner.schema;
                match self.inner.engine.open(schema).await {
                    Ok(connection) => {
                        log::info!("favorites store opened: {} v{}", schema.database, schema.version);
                        Ok(connection)
                    }
                    Err(e) => {
                        log::error!("favorites store open failed: {e}");
                        Err(e)
                    }
                }
            })
            .await?;
        Ok(Rc::clone(connection))
    }

    /// Write `item`, replacing any record with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be opened, or
    /// `Write` if the transaction fails.
    pub async fn upsert(&self, item: &FavoriteItem) -> Result<(), StoreError> {
        let connection = self.open().await?;
        connection
            .put(item)
            .await
            .inspect_err(|e| log::error!("upsert {} failed: {e}", item.id))?;
        log::info!("favorite stored: {}", item.id);
        Ok(())
    }

    /// Delete the record at `id`. Deleting a missing id succeeds.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be opened, or
    /// `Write` if the transaction fails.
    pub async fn remove(&self, id: &str) -> Result<(), StoreError> {
        let connection = self.open().await?;
        connection
            .delete(id)
            .await
            .inspect_err(|e| log::error!("remove {id} failed: {e}"))?;
        log::info!("favorite removed: {id}");
        Ok(())
    }

    /// Whether a record exists at `id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be opened, or
    /// `Read` if the transaction fails.
    pub async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        let connection = self.open().await?;
        connection
            .contains(id)
            .await
            .inspect_err(|e| log::error!("exists {id} failed: {e}"))
    }

    /// Every stored record, in the engine's natural key order.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the store cannot be opened, or
    /// `Read` if the transaction fails.
    pub async fn get_all(&self) -> Result<Vec<FavoriteItem>, StoreError> {
        let connection = self.open().await?;
        connection
            .get_all()
            .await
            .inspect_err(|e| log::error!("listing favorites failed: {e}"))
    }
}
