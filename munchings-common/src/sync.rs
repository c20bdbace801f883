use std::fmt::Display;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::PersistenceError;

pub mod memory;
pub mod record;

pub use memory::MemoryBackend;
pub use record::{LiveRecords, Record};

pub type Document = Map<String, Value>;

#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum Collection {
    MenuItems,
    Reservations,
    Orders,
    Users,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::MenuItems => "menuItems",
            Collection::Reservations => "reservations",
            Collection::Orders => "orders",
            Collection::Users => "users",
        }
    }
}

impl Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DocumentSnapshot {
    pub id: String,
    pub data: Document,
}

/// The full contents of one collection at a point in time. Versions grow with
/// every write to the backend, so a newer snapshot always has a larger version.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    pub collection: Collection,
    pub version: u64,
    pub documents: Vec<DocumentSnapshot>,
}

pub trait SnapshotListener: Send + Sync {
    fn on_snapshot(&self, snapshot: &Snapshot);
}

impl<F> SnapshotListener for F
where
    F: Fn(&Snapshot) + Send + Sync,
{
    fn on_snapshot(&self, snapshot: &Snapshot) {
        self(snapshot)
    }
}

/// Handle for a live subscription. Delivery stops when the handle is
/// unsubscribed or dropped; a snapshot whose delivery call is already running
/// still completes.
#[must_use = "dropping a Subscription stops snapshot delivery"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Persistence and live-query boundary of the managed backend.
#[async_trait]
pub trait SyncAdapter: Send + Sync {
    async fn create(&self, collection: Collection, data: Document)
        -> Result<String, PersistenceError>;

    /// Merges `fields` into an existing document.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), PersistenceError>;

    async fn update_status(
        &self,
        collection: Collection,
        id: &str,
        status: &str,
    ) -> Result<(), PersistenceError> {
        let mut fields = Document::new();
        fields.insert("status".to_string(), Value::String(status.to_string()));
        self.update(collection, id, fields).await
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), PersistenceError>;

    /// Registers `listener`; it receives the current snapshot right away and a
    /// fresh one after every change to `collection`.
    fn subscribe(&self, collection: Collection, listener: Arc<dyn SnapshotListener>)
        -> Subscription;
}
