//! IndexedDB storage engine (browser only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the callback-based IndexedDB API into the async `StorageEngine` /
//! `Connection` contract. Requests are bridged to futures through a oneshot
//! channel fed by the request's success/error handlers. Writes resolve on
//! transaction `complete`, so a resolved upsert/remove is durable.
//!
//! Records cross the JS boundary as JSON: serialized with `serde_json`,
//! parsed with `JSON.parse`, and read back with `JSON.stringify`.

use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;
use futures::channel::oneshot;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    DomException, IdbDatabase, IdbObjectStore, IdbObjectStoreParameters, IdbOpenDbRequest, IdbRequest,
    IdbTransaction, IdbTransactionMode, IdbVersionChangeEvent,
};

use super::{Connection, FavoriteItem, StorageEngine, StoreError, StoreSchema};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "idb_test.rs"]
mod idb_test;

/// Engine backed by `window.indexedDB`.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdbEngine;

#[async_trait(?Send)]
impl StorageEngine for IdbEngine {
    async fn open(&self, schema: &StoreSchema) -> Result<Rc<dyn Connection>, StoreError> {
        let factory = web_sys::window()
            .ok_or_else(|| StoreError::StorageUnavailable("no window".to_owned()))?
            .indexed_db()
            .map_err(|e| StoreError::StorageUnavailable(js_message(&e)))?
            .ok_or_else(|| StoreError::StorageUnavailable("indexedDB not supported".to_owned()))?;

        let request = factory
            .open_with_u32(&schema.database, schema.version)
            .map_err(|e| StoreError::StorageUnavailable(js_message(&e)))?;

        let collection = schema.collection.clone();
        let key_path = schema.key_path.clone();
        let on_upgrade = Closure::once(move |event: IdbVersionChangeEvent| {
            provision_collection(&event, &collection, &key_path);
        });
        request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

        let outcome = await_request(&request).await;
        request.set_onupgradeneeded(None);
        drop(on_upgrade);

        let db = outcome
            .map_err(StoreError::StorageUnavailable)?
            .dyn_into::<IdbDatabase>()
            .map_err(|_| StoreError::StorageUnavailable("open did not yield a database".to_owned()))?;
        Ok(Rc::new(IdbConnection { db, collection: schema.collection.clone() }))
    }
}

/// Upgrade handler: create the collection if this database version lacks it.
fn provision_collection(event: &IdbVersionChangeEvent, collection: &str, key_path: &str) {
    let Some(db) = event
        .target()
        .and_then(|target| target.dyn_into::<IdbOpenDbRequest>().ok())
        .and_then(|request| request.result().ok())
        .and_then(|result| result.dyn_into::<IdbDatabase>().ok())
    else {
        log::error!("upgrade event carried no database");
        return;
    };

    if db.object_store_names().contains(collection) {
        return;
    }

    let params = IdbObjectStoreParameters::new();
    params.set_key_path(&JsValue::from_str(key_path));
    match db.create_object_store_with_optional_parameters(collection, &params) {
        Ok(_) => log::info!("object store '{collection}' created"),
        Err(e) => log::error!("creating object store '{collection}' failed: {}", js_message(&e)),
    }
}

struct IdbConnection {
    db: IdbDatabase,
    collection: String,
}

impl IdbConnection {
    fn object_store(&self, mode: IdbTransactionMode) -> Result<(IdbTransaction, IdbObjectStore), String> {
        let transaction = self
            .db
            .transaction_with_str_and_mode(&self.collection, mode)
            .map_err(|e| js_message(&e))?;
        let store = transaction.object_store(&self.collection).map_err(|e| js_message(&e))?;
        Ok((transaction, store))
    }
}

#[async_trait(?Send)]
impl Connection for IdbConnection {
    async fn put(&self, item: &FavoriteItem) -> Result<(), StoreError> {
        let (transaction, store) = self.object_store(IdbTransactionMode::Readwrite).map_err(StoreError::Write)?;
        let value = to_js(item).map_err(StoreError::Write)?;
        store.put(&value).map_err(|e| StoreError::Write(js_message(&e)))?;
        await_transaction(&transaction).await.map_err(StoreError::Write)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let (transaction, store) = self.object_store(IdbTransactionMode::Readwrite).map_err(StoreError::Write)?;
        store
            .delete(&JsValue::from_str(id))
            .map_err(|e| StoreError::Write(js_message(&e)))?;
        await_transaction(&transaction).await.map_err(StoreError::Write)
    }

    async fn contains(&self, id: &str) -> Result<bool, StoreError> {
        let (_transaction, store) = self.object_store(IdbTransactionMode::Readonly).map_err(StoreError::Read)?;
        let request = store
            .count_with_key(&JsValue::from_str(id))
            .map_err(|e| StoreError::Read(js_message(&e)))?;
        let count = await_request(&request).await.map_err(StoreError::Read)?;
        Ok(count.as_f64().is_some_and(|n| n > 0.0))
    }

    async fn get_all(&self) -> Result<Vec<FavoriteItem>, StoreError> {
        let (_transaction, store) = self.object_store(IdbTransactionMode::Readonly).map_err(StoreError::Read)?;
        let request = store.get_all().map_err(|e| StoreError::Read(js_message(&e)))?;
        let value = await_request(&request).await.map_err(StoreError::Read)?;
        let records = value
            .dyn_into::<js_sys::Array>()
            .map_err(|_| StoreError::Read("getAll did not yield an array".to_owned()))?;

        let mut items = Vec::with_capacity(records.length() as usize);
        for record in records.iter() {
            match from_js(&record) {
                Ok(item) => items.push(item),
                Err(e) => log::warn!("skipping malformed favorite record: {e}"),
            }
        }
        Ok(items)
    }
}

// =============================================================================
// REQUEST BRIDGING
// =============================================================================

/// Resolve once `request` fires success or error; yields `request.result`.
async fn await_request(request: &IdbRequest) -> Result<JsValue, String> {
    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let success_sender = Rc::clone(&sender);
    let on_success = Closure::once(move |_event: web_sys::Event| {
        if let Some(tx) = success_sender.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });

    let failed_request = request.clone();
    let on_error = Closure::once(move |_event: web_sys::Event| {
        if let Some(tx) = sender.borrow_mut().take() {
            let message = failed_request
                .error()
                .ok()
                .flatten()
                .map_or_else(|| "IndexedDB request failed".to_owned(), |e| e.message());
            let _ = tx.send(Err(message));
        }
    });

    request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
    request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    let outcome = receiver
        .await
        .unwrap_or_else(|_| Err("IndexedDB request dropped".to_owned()));
    request.set_onsuccess(None);
    request.set_onerror(None);

    outcome?;
    request.result().map_err(|e| js_message(&e))
}

/// Resolve once `transaction` commits, or fail if it errors or aborts.
async fn await_transaction(transaction: &IdbTransaction) -> Result<(), String> {
    let (sender, receiver) = oneshot::channel::<Result<(), String>>();
    let sender = Rc::new(RefCell::new(Some(sender)));

    let complete_sender = Rc::clone(&sender);
    let on_complete = Closure::once(move |_event: web_sys::Event| {
        if let Some(tx) = complete_sender.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });

    let failed = transaction.clone();
    let on_failure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        if let Some(tx) = sender.borrow_mut().take() {
            let message = failed
                .error()
                .map_or_else(|| "IndexedDB transaction aborted".to_owned(), |e: DomException| e.message());
            let _ = tx.send(Err(message));
        }
    });

    transaction.set_oncomplete(Some(on_complete.as_ref().unchecked_ref()));
    transaction.set_onerror(Some(on_failure.as_ref().unchecked_ref()));
    transaction.set_onabort(Some(on_failure.as_ref().unchecked_ref()));
    let outcome = receiver
        .await
        .unwrap_or_else(|_| Err("IndexedDB transaction dropped".to_owned()));
    transaction.set_oncomplete(None);
    transaction.set_onerror(None);
    transaction.set_onabort(None);
    outcome
}

// =============================================================================
// JS CONVERSION
// =============================================================================

fn to_js(item: &FavoriteItem) -> Result<JsValue, String> {
    let raw = serde_json::to_string(item).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&raw).map_err(|e| js_message(&e))
}

fn from_js(value: &JsValue) -> Result<FavoriteItem, String> {
    let raw: String = js_sys::JSON::stringify(value).map_err(|e| js_message(&e))?.into();
    serde_json::from_str(&raw).map_err(|e| e.to_string())
}

fn js_message(value: &JsValue) -> String {
    if let Some(exception) = value.dyn_ref::<DomException>() {
        return exception.message();
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
