//! In-process snapshot subscriber registry.

use crate::model::todo::TodoItem;
use std::collections::BTreeMap;

/// Callback invoked with the full post-mutation item sequence.
///
/// `Send` so a store wrapped in a mutex stays usable across threads.
pub type SnapshotFn = Box<dyn FnMut(&[TodoItem]) + Send>;

/// Handle identifying one active subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

/// Ordered registry of snapshot subscribers.
///
/// Keys grow monotonically, so map order equals registration order and
/// notification order stays deterministic.
#[derive(Default)]
pub(crate) struct SubscriberRegistry {
    entries: BTreeMap<u64, SnapshotFn>,
    next_id: u64,
}

impl SubscriberRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registers one callback and returns its handle.
    pub(crate) fn register(&mut self, callback: SnapshotFn) -> SubscriptionId {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.insert(id, callback);
        SubscriptionId(id)
    }

    /// Removes one registration. Returns whether it was present.
    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id.0).is_some()
    }

    /// Delivers `items` to every subscriber in registration order.
    pub(crate) fn notify_all(&mut self, items: &[TodoItem]) {
        for callback in self.entries.values_mut() {
            callback(items);
        }
    }

    /// Delivers `items` to a single subscriber.
    pub(crate) fn notify_one(&mut self, id: SubscriptionId, items: &[TodoItem]) {
        if let Some(callback) = self.entries.get_mut(&id.0) {
            callback(items);
        }
    }
}
