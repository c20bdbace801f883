use std::collections::HashMap;
use std::sync::{Arc, Mutex, Weak};

use async_trait::async_trait;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::PersistenceError;
use crate::lock;
use crate::sync::{
    Collection, Document, DocumentSnapshot, Snapshot, SnapshotListener, Subscription, SyncAdapter,
};

struct ListenerEntry {
    id: u64,
    collection: Collection,
    listener: Arc<dyn SnapshotListener>,
}

#[derive(Default)]
struct Inner {
    collections: HashMap<Collection, Vec<DocumentSnapshot>>,
    listeners: Vec<ListenerEntry>,
    next_listener_id: u64,
    version: u64,
    fail_writes: bool,
}

impl Inner {
    fn snapshot(&self, collection: Collection) -> Snapshot {
        Snapshot {
            collection,
            version: self.version,
            documents: self
                .collections
                .get(&collection)
                .cloned()
                .unwrap_or_default(),
        }
    }

    fn listeners_of(&self, collection: Collection) -> Vec<(u64, Arc<dyn SnapshotListener>)> {
        self.listeners
            .iter()
            .filter(|l| l.collection == collection)
            .map(|l| (l.id, Arc::clone(&l.listener)))
            .collect()
    }

    fn is_registered(&self, id: u64) -> bool {
        self.listeners.iter().any(|l| l.id == id)
    }

    fn check_writable(&self) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable(
                "writes are currently failing".to_string(),
            ));
        }
        Ok(())
    }
}

/// In-process backend with live snapshots. Listeners run on the writing task,
/// after the write is applied and outside the internal lock. A listener removed
/// while a write is delivering is skipped, unless its call has already begun.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every following write fail with `PersistenceError::Unavailable`.
    pub fn fail_writes(&self, fail: bool) {
        lock(&self.inner).fail_writes = fail;
    }

    pub fn get(&self, collection: Collection, id: &str) -> Option<Document> {
        lock(&self.inner)
            .collections
            .get(&collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .map(|d| d.data.clone())
    }

    pub fn len(&self, collection: Collection) -> usize {
        lock(&self.inner)
            .collections
            .get(&collection)
            .map_or(0, Vec::len)
    }

    pub fn listener_count(&self) -> usize {
        lock(&self.inner).listeners.len()
    }

    fn write<T>(
        &self,
        collection: Collection,
        apply: impl FnOnce(&mut Vec<DocumentSnapshot>) -> Result<T, PersistenceError>,
    ) -> Result<T, PersistenceError> {
        let (result, snapshot, listeners) = {
            let mut inner = lock(&self.inner);
            if let Err(err) = inner.check_writable() {
                warn!(%collection, "write rejected: {}", err);
                return Err(err);
            }
            let result = apply(inner.collections.entry(collection).or_default())?;
            inner.version += 1;
            (result, inner.snapshot(collection), inner.listeners_of(collection))
        };

        debug!(
            %collection,
            version = snapshot.version,
            listeners = listeners.len(),
            "delivering snapshot"
        );
        for (id, listener) in listeners {
            if !lock(&self.inner).is_registered(id) {
                continue;
            }
            listener.on_snapshot(&snapshot);
        }
        Ok(result)
    }
}

#[async_trait]
impl SyncAdapter for MemoryBackend {
    async fn create(
        &self,
        collection: Collection,
        data: Document,
    ) -> Result<String, PersistenceError> {
        let id = Uuid::new_v4().simple().to_string();
        self.write(collection, |docs| {
            docs.push(DocumentSnapshot {
                id: id.clone(),
                data,
            });
            Ok(())
        })?;
        info!(%collection, %id, "document created");
        Ok(id)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        fields: Document,
    ) -> Result<(), PersistenceError> {
        self.write(collection, |docs| {
            let doc = docs.iter_mut().find(|d| d.id == id).ok_or_else(|| {
                PersistenceError::NotFound {
                    collection,
                    id: id.to_string(),
                }
            })?;
            doc.data.extend(fields);
            Ok(())
        })?;
        info!(%collection, %id, "document updated");
        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), PersistenceError> {
        self.write(collection, |docs| {
            docs.retain(|d| d.id != id);
            Ok(())
        })?;
        info!(%collection, %id, "document deleted");
        Ok(())
    }

    fn subscribe(
        &self,
        collection: Collection,
        listener: Arc<dyn SnapshotListener>,
    ) -> Subscription {
        let (id, snapshot) = {
            let mut inner = lock(&self.inner);
            let id = inner.next_listener_id;
            inner.next_listener_id += 1;
            inner.listeners.push(ListenerEntry {
                id,
                collection,
                listener: Arc::clone(&listener),
            });
            (id, inner.snapshot(collection))
        };
        listener.on_snapshot(&snapshot);

        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = inner.upgrade() {
                lock(&inner).listeners.retain(|l| l.id != id);
                debug!(%collection, listener = id, "unsubscribed");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    fn recorder() -> (Arc<Mutex<Vec<Snapshot>>>, Arc<dyn SnapshotListener>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let listener: Arc<dyn SnapshotListener> =
            Arc::new(move |s: &Snapshot| sink.lock().unwrap().push(s.clone()));
        (seen, listener)
    }

    #[tokio::test]
    async fn test_subscribe_delivers_current_snapshot_immediately() {
        let backend = MemoryBackend::new();
        backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();

        let (seen, listener) = recorder();
        let _subscription = backend.subscribe(Collection::Orders, listener);

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].documents.len(), 1);
        assert_eq!(seen[0].documents[0].data["status"], "new");
    }

    #[tokio::test]
    async fn test_writes_push_full_snapshot_to_listeners_of_that_collection() {
        let backend = MemoryBackend::new();
        let (orders, orders_listener) = recorder();
        let (reservations, reservations_listener) = recorder();
        let _a = backend.subscribe(Collection::Orders, orders_listener);
        let _b = backend.subscribe(Collection::Reservations, reservations_listener);

        let first = backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();
        backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();
        backend
            .update_status(Collection::Orders, &first, "preparing")
            .await
            .unwrap();

        let orders = orders.lock().unwrap();
        assert_eq!(orders.len(), 4);
        let last = orders.last().unwrap();
        assert_eq!(last.documents.len(), 2);
        assert_eq!(last.documents[0].id, first);
        assert_eq!(last.documents[0].data["status"], "preparing");
        assert!(orders.windows(2).all(|w| w[0].version < w[1].version));

        assert_eq!(reservations.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_merges_fields() {
        let backend = MemoryBackend::new();
        let id = backend
            .create(
                Collection::MenuItems,
                doc(json!({"name": "Tiramisu", "price": "11.99"})),
            )
            .await
            .unwrap();
        backend
            .update(Collection::MenuItems, &id, doc(json!({"price": "12.49"})))
            .await
            .unwrap();

        let stored = backend.get(Collection::MenuItems, &id).unwrap();
        assert_eq!(stored["name"], "Tiramisu");
        assert_eq!(stored["price"], "12.49");
    }

    #[tokio::test]
    async fn test_update_missing_document_is_not_found() {
        let backend = MemoryBackend::new();
        let result = backend
            .update_status(Collection::Orders, "missing", "served")
            .await;
        assert!(matches!(
            result,
            Err(PersistenceError::NotFound { collection: Collection::Orders, .. })
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_document_and_tolerates_missing() {
        let backend = MemoryBackend::new();
        let id = backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();
        backend.delete(Collection::Orders, &id).await.unwrap();
        backend.delete(Collection::Orders, &id).await.unwrap();
        assert_eq!(backend.len(Collection::Orders), 0);
    }

    #[tokio::test]
    async fn test_failing_writes_leave_data_and_listeners_untouched() {
        let backend = MemoryBackend::new();
        let id = backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();
        let (seen, listener) = recorder();
        let _subscription = backend.subscribe(Collection::Orders, listener);

        backend.fail_writes(true);
        let result = backend
            .update_status(Collection::Orders, &id, "preparing")
            .await;
        assert!(matches!(result, Err(PersistenceError::Unavailable(_))));
        assert_eq!(backend.get(Collection::Orders, &id).unwrap()["status"], "new");
        assert_eq!(seen.lock().unwrap().len(), 1);

        backend.fail_writes(false);
        backend
            .update_status(Collection::Orders, &id, "preparing")
            .await
            .unwrap();
        assert_eq!(seen.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_listener_removed_mid_delivery_is_skipped() {
        let backend = MemoryBackend::new();
        let slot: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));
        let taken = Arc::clone(&slot);
        let _first = backend.subscribe(
            Collection::Orders,
            Arc::new(move |_: &Snapshot| {
                let subscription = taken.lock().unwrap().take();
                drop(subscription);
            }),
        );
        let (seen, listener) = recorder();
        *slot.lock().unwrap() = Some(backend.subscribe(Collection::Orders, listener));
        assert_eq!(seen.lock().unwrap().len(), 1);

        backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();

        assert_eq!(seen.lock().unwrap().len(), 1);
        assert_eq!(backend.listener_count(), 1);
    }

    #[tokio::test]
    async fn test_unsubscribe_and_drop_stop_delivery() {
        let backend = MemoryBackend::new();
        let (explicit, explicit_listener) = recorder();
        let (dropped, dropped_listener) = recorder();

        let subscription = backend.subscribe(Collection::Orders, explicit_listener);
        {
            let _scoped = backend.subscribe(Collection::Orders, dropped_listener);
        }
        subscription.unsubscribe();
        assert_eq!(backend.listener_count(), 0);

        backend
            .create(Collection::Orders, doc(json!({"status": "new"})))
            .await
            .unwrap();
        assert_eq!(explicit.lock().unwrap().len(), 1);
        assert_eq!(dropped.lock().unwrap().len(), 1);
    }
}
