use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::PersistenceError;
use crate::lock;
use crate::sync::{Collection, Document, DocumentSnapshot, Snapshot, Subscription, SyncAdapter};

/// A typed view of the documents stored in one collection.
pub trait Record: DeserializeOwned + Clone + Send + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Orders a decoded snapshot the way views list it.
    fn sort(_records: &mut [Self]) {}
}

/// Serializes a payload into a document. Payloads must serialize to a JSON
/// object.
pub fn to_document<P: Serialize>(payload: &P) -> Result<Document, PersistenceError> {
    match serde_json::to_value(payload)? {
        Value::Object(map) => Ok(map),
        other => Err(PersistenceError::Malformed(serde::ser::Error::custom(
            format!("expected an object, got {}", other),
        ))),
    }
}

/// Decodes one document, exposing its id as the `id` field.
pub fn decode<T: Record>(document: &DocumentSnapshot) -> Result<T, serde_json::Error> {
    let mut data = document.data.clone();
    data.insert("id".to_string(), Value::String(document.id.clone()));
    serde_json::from_value(Value::Object(data))
}

/// Decodes a snapshot, skipping documents that do not match the record shape.
pub fn decode_snapshot<T: Record>(snapshot: &Snapshot) -> Vec<T> {
    let mut records = snapshot
        .documents
        .iter()
        .filter_map(|document| match decode::<T>(document) {
            Ok(record) => Some(record),
            Err(err) => {
                warn!(
                    collection = %snapshot.collection,
                    id = %document.id,
                    "skipping malformed document: {}",
                    err
                );
                None
            }
        })
        .collect::<Vec<_>>();
    T::sort(&mut records);
    records
}

struct LiveState<T> {
    version: Option<u64>,
    records: Vec<T>,
}

impl<T> LiveState<T> {
    fn apply(&mut self, version: u64, records: Vec<T>) -> bool {
        if self.version.is_some_and(|v| v >= version) {
            return false;
        }
        self.version = Some(version);
        self.records = records;
        true
    }
}

/// Locally held copy of the latest snapshot of a collection. The copy only
/// changes when a newer snapshot arrives.
pub struct LiveRecords<T> {
    state: Arc<Mutex<LiveState<T>>>,
    _subscription: Subscription,
}

impl<T: Record> LiveRecords<T> {
    pub fn subscribe(adapter: &dyn SyncAdapter) -> Self {
        let state = Arc::new(Mutex::new(LiveState {
            version: None,
            records: Vec::new(),
        }));
        let sink = Arc::clone(&state);
        let subscription = adapter.subscribe(
            T::COLLECTION,
            Arc::new(move |snapshot: &Snapshot| {
                let records = decode_snapshot::<T>(snapshot);
                if !lock(&sink).apply(snapshot.version, records) {
                    debug!(
                        collection = %snapshot.collection,
                        version = snapshot.version,
                        "ignoring stale snapshot"
                    );
                }
            }),
        );
        Self {
            state,
            _subscription: subscription,
        }
    }

    pub fn records(&self) -> Vec<T> {
        lock(&self.state).records.clone()
    }

    pub fn find(&self, id: &str) -> Option<T> {
        lock(&self.state)
            .records
            .iter()
            .find(|r| r.id() == id)
            .cloned()
    }

    pub fn version(&self) -> Option<u64> {
        lock(&self.state).version
    }
}
