//! In-process implementations of the external collaborators.
//!
//! `MemoryAuthProvider` and `MemoryProfileStore` stand in for the hosted auth
//! and document-store services in the demo binary and the test suite. Both
//! deliver callbacks synchronously on the calling thread, matching the
//! single-threaded, event-driven model the real providers are consumed under.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde_json::{Map, Value};

use crate::types::errors::{AuthError, StoreError};
use crate::types::identity::Identity;
use crate::types::profile::ProfileDocument;

use super::auth::{AuthCallback, AuthProvider};
use super::profile_store::{ProfileStore, SnapshotCallback};
use super::subscription::Subscription;

type AuthListener = dyn Fn(Result<Option<Identity>, AuthError>) + Send + Sync;
type SnapshotListener = dyn Fn(Result<Option<ProfileDocument>, StoreError>) + Send + Sync;

// === MemoryAuthProvider ===

/// In-process auth provider holding the current identity and a listener
/// registry. `sign_in` / `sign_out` drive the identity stream.
pub struct MemoryAuthProvider {
    current: Mutex<Option<Identity>>,
    listeners: Arc<Mutex<HashMap<u64, Arc<AuthListener>>>>,
    next_listener_id: AtomicU64,
}

impl MemoryAuthProvider {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(None),
            listeners: Arc::new(Mutex::new(HashMap::new())),
            next_listener_id: AtomicU64::new(0),
        }
    }

    /// Sets the current identity and notifies every listener.
    pub fn sign_in(&self, identity: Identity) {
        *self.current.lock().unwrap() = Some(identity.clone());
        self.notify(|| Ok(Some(identity.clone())));
    }

    /// Clears the current identity and notifies every listener.
    pub fn sign_out(&self) {
        *self.current.lock().unwrap() = None;
        self.notify(|| Ok(None));
    }

    /// Delivers a stream error to every listener. The current identity is
    /// left untouched and the subscriptions stay registered.
    pub fn emit_error(&self, message: &str) {
        self.notify(|| Err(AuthError::Unavailable(message.to_string())));
    }

    /// Returns the identity the provider currently holds.
    pub fn current_identity(&self) -> Option<Identity> {
        self.current.lock().unwrap().clone()
    }

    /// Number of registered identity listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.lock().unwrap().len()
    }

    /// Invokes every registered listener with a freshly built event.
    ///
    /// Listeners are collected under the lock but invoked after it is
    /// released, so a callback may register or cancel subscriptions without
    /// deadlocking.
    fn notify<F>(&self, event: F)
    where
        F: Fn() -> Result<Option<Identity>, AuthError>,
    {
        let listeners: Vec<Arc<AuthListener>> =
            self.listeners.lock().unwrap().values().cloned().collect();
        for listener in listeners {
            listener(event());
        }
    }
}

impl Default for MemoryAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthProvider for MemoryAuthProvider {
    /// Registers a listener and immediately delivers the current identity.
    fn subscribe(&self, on_change: AuthCallback) -> Subscription {
        let id = self.next_listener_id.fetch_add(1, Ordering::SeqCst);
        let listener: Arc<AuthListener> = Arc::from(on_change);
        self.listeners.lock().unwrap().insert(id, Arc::clone(&listener));

        listener(Ok(self.current.lock().unwrap().clone()));

        let registry = Arc::clone(&self.listeners);
        Subscription::new(move || {
            registry.lock().unwrap().remove(&id);
        })
    }
}

// === MemoryProfileStore ===

struct DocWatcher {
    uid: String,
    listener: Arc<SnapshotListener>,
}

/// In-process document store keyed by uid.
///
/// Documents are held as raw JSON values so the array mutations can match
/// elements by full value equality, the way the hosted store does. Mutations
/// notify every watcher of the touched document synchronously, in call order.
pub struct MemoryProfileStore {
    documents: Mutex<HashMap<String, Value>>,
    watchers: Arc<Mutex<HashMap<u64, DocWatcher>>>,
    next_watcher_id: AtomicU64,
    fail_writes: Mutex<Option<String>>,
}

impl MemoryProfileStore {
    pub fn new() -> Self {
        Self {
            documents: Mutex::new(HashMap::new()),
            watchers: Arc::new(Mutex::new(HashMap::new())),
            next_watcher_id: AtomicU64::new(0),
            fail_writes: Mutex::new(None),
        }
    }

    /// Seeds (or replaces) a profile document and notifies its watchers.
    pub fn put_document(&self, uid: &str, document: &ProfileDocument) -> Result<(), StoreError> {
        let value = serde_json::to_value(document)
            .map_err(|e| StoreError::SerializationError(e.to_string()))?;
        self.put_raw(uid, value);
        Ok(())
    }

    /// Seeds (or replaces) a document from a raw JSON value and notifies its
    /// watchers. Lets tests shape legacy or sparse documents directly.
    pub fn put_raw(&self, uid: &str, value: Value) {
        self.documents.lock().unwrap().insert(uid.to_string(), value.clone());
        self.notify_watchers(uid, &value);
    }

    /// Raw JSON value of a document, if present.
    pub fn raw_document(&self, uid: &str) -> Option<Value> {
        self.documents.lock().unwrap().get(uid).cloned()
    }

    /// Number of live watchers on the given document.
    pub fn watcher_count(&self, uid: &str) -> usize {
        self.watchers
            .lock()
            .unwrap()
            .values()
            .filter(|w| w.uid == uid)
            .count()
    }

    /// Number of live watchers across all documents.
    pub fn total_watchers(&self) -> usize {
        self.watchers.lock().unwrap().len()
    }

    /// Makes every subsequent write fail with `WriteRejected(message)`.
    /// Pass `None` to restore normal behavior.
    pub fn set_fail_writes(&self, message: Option<&str>) {
        *self.fail_writes.lock().unwrap() = message.map(str::to_string);
    }

    fn decode(value: &Value) -> Result<ProfileDocument, StoreError> {
        serde_json::from_value(value.clone())
            .map_err(|e| StoreError::SerializationError(e.to_string()))
    }

    /// Delivers the given document state to every watcher of `uid`.
    ///
    /// Watchers are collected under the lock but invoked after it is
    /// released, so a snapshot callback may cancel its own subscription.
    fn notify_watchers(&self, uid: &str, value: &Value) {
        let listeners: Vec<Arc<SnapshotListener>> = self
            .watchers
            .lock()
            .unwrap()
            .values()
            .filter(|w| w.uid == uid)
            .map(|w| Arc::clone(&w.listener))
            .collect();
        for listener in listeners {
            listener(Self::decode(value).map(Some));
        }
    }

    /// Applies a mutation to an existing document, then notifies watchers.
    fn mutate<F>(&self, uid: &str, apply: F) -> Result<(), StoreError>
    where
        F: FnOnce(&mut Value) -> Result<(), StoreError>,
    {
        if let Some(message) = self.fail_writes.lock().unwrap().clone() {
            return Err(StoreError::WriteRejected(message));
        }

        let snapshot = {
            let mut documents = self.documents.lock().unwrap();
            let doc = documents
                .get_mut(uid)
                .ok_or_else(|| StoreError::DocumentNotFound(uid.to_string()))?;
            apply(doc)?;
            doc.clone()
        };
        self.notify_watchers(uid, &snapshot);
        Ok(())
    }

    /// The named array field of a document, created empty if missing.
    fn array_field<'a>(doc: &'a mut Value, field: &str) -> Result<&'a mut Vec<Value>, StoreError> {
        let obj = doc.as_object_mut().ok_or_else(|| {
            StoreError::SerializationError("document is not a JSON object".to_string())
        })?;
        let entry = obj
            .entry(field.to_string())
            .or_insert_with(|| Value::Array(Vec::new()));
        entry.as_array_mut().ok_or_else(|| {
            StoreError::SerializationError(format!("field is not an array: {}", field))
        })
    }
}

impl Default for MemoryProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for MemoryProfileStore {
    fn get_document(&self, uid: &str) -> Result<Option<ProfileDocument>, StoreError> {
        match self.documents.lock().unwrap().get(uid) {
            Some(value) => Self::decode(value).map(Some),
            None => Ok(None),
        }
    }

    /// Registers a watcher and immediately delivers the current snapshot
    /// (`None` when the document does not exist).
    fn subscribe_document(&self, uid: &str, on_snapshot: SnapshotCallback) -> Subscription {
        let id = self.next_watcher_id.fetch_add(1, Ordering::SeqCst);
        let listener: Arc<SnapshotListener> = Arc::from(on_snapshot);
        self.watchers.lock().unwrap().insert(
            id,
            DocWatcher {
                uid: uid.to_string(),
                listener: Arc::clone(&listener),
            },
        );

        let current = self.documents.lock().unwrap().get(uid).cloned();
        listener(match &current {
            Some(value) => Self::decode(value).map(Some),
            None => Ok(None),
        });

        let registry = Arc::clone(&self.watchers);
        Subscription::new(move || {
            registry.lock().unwrap().remove(&id);
        })
    }

    fn update_fields(&self, uid: &str, fields: Map<String, Value>) -> Result<(), StoreError> {
        self.mutate(uid, |doc| {
            let obj = doc.as_object_mut().ok_or_else(|| {
                StoreError::SerializationError("document is not a JSON object".to_string())
            })?;
            for (key, value) in fields {
                obj.insert(key, value);
            }
            Ok(())
        })
    }

    fn add_to_set(&self, uid: &str, field: &str, value: Value) -> Result<(), StoreError> {
        self.mutate(uid, |doc| {
            let array = Self::array_field(doc, field)?;
            if !array.contains(&value) {
                array.push(value);
            }
            Ok(())
        })
    }

    fn remove_from_set(&self, uid: &str, field: &str, value: Value) -> Result<(), StoreError> {
        self.mutate(uid, |doc| {
            let array = Self::array_field(doc, field)?;
            array.retain(|element| element != &value);
            Ok(())
        })
    }

    fn remove_many_from_set(
        &self,
        uid: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), StoreError> {
        self.mutate(uid, |doc| {
            let array = Self::array_field(doc, field)?;
            array.retain(|element| !values.contains(element));
            Ok(())
        })
    }
}
