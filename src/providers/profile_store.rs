//! Consumed interface of the external profile document store.

use serde_json::{Map, Value};

use crate::types::errors::StoreError;
use crate::types::profile::ProfileDocument;

use super::subscription::Subscription;

/// Document-change listener.
///
/// Receives the current snapshot immediately on subscribe (`None` when the
/// document does not exist), then one snapshot per committed change, in
/// commit order. Store-layer failures arrive as errors and do not end the
/// subscription.
pub type SnapshotCallback =
    Box<dyn Fn(Result<Option<ProfileDocument>, StoreError>) + Send + Sync>;

/// Interface of the external document store holding profile documents,
/// keyed by the owning identity's uid.
///
/// The array mutation operations carry set semantics matched on full JSON
/// value equality: adding a value that is already present and removing a
/// value that is absent are both no-ops, never errors. Mutating a missing
/// document fails with `DocumentNotFound`.
pub trait ProfileStore: Send + Sync {
    /// Point read of a profile document.
    fn get_document(&self, uid: &str) -> Result<Option<ProfileDocument>, StoreError>;

    /// Opens a live subscription to the document keyed by `uid`.
    fn subscribe_document(&self, uid: &str, on_snapshot: SnapshotCallback) -> Subscription;

    /// Merges the given top-level fields into the document.
    fn update_fields(&self, uid: &str, fields: Map<String, Value>) -> Result<(), StoreError>;

    /// Adds `value` to the array field unless an equal value is present.
    fn add_to_set(&self, uid: &str, field: &str, value: Value) -> Result<(), StoreError>;

    /// Removes every element equal to `value` from the array field.
    fn remove_from_set(&self, uid: &str, field: &str, value: Value) -> Result<(), StoreError>;

    /// Removes every element equal to any of `values` in one write.
    fn remove_many_from_set(
        &self,
        uid: &str,
        field: &str,
        values: Vec<Value>,
    ) -> Result<(), StoreError>;
}
