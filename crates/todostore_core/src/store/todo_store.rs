//! Observable in-memory to-do store.
//!
//! # Responsibility
//! - Own the ordered to-do sequence and every mutation over it.
//! - Publish the post-mutation sequence to registered subscribers.
//!
//! # Invariants
//! - Item ids are unique within the sequence at all times.
//! - Every successful mutation publishes exactly one snapshot.
//! - Failed lookups leave the sequence untouched and publish nothing.

use crate::model::todo::{TodoId, TodoItem};
use crate::store::subscriber_registry::{SubscriberRegistry, SubscriptionId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No current item carries the requested id.
    NotFound(TodoId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "todo not found: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Observable container of to-do items.
///
/// Items are cloned on the way in and out; edits build a working copy and
/// write it back at the located position.
#[derive(Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
    subscribers: SubscriberRegistry,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current item sequence in insertion order.
    pub fn todos(&self) -> &[TodoItem] {
        &self.items
    }

    /// Returns the number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Creates a new unchecked item, appends it, and publishes.
    ///
    /// Returns the created item. Never fails.
    pub fn add_todo(&mut self, title: impl Into<String>) -> TodoItem {
        let todo = TodoItem::new(title);
        self.items.push(todo.clone());
        debug!(
            "event=todo_added module=store status=ok id={} count={}",
            todo.id,
            self.items.len()
        );
        self.publish();
        todo
    }

    /// Returns a copy of the first item carrying `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no current item carries `id`.
    pub fn get_todo(&self, id: TodoId) -> StoreResult<TodoItem> {
        self.items
            .iter()
            .find(|todo| todo.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Returns the zero-based position of the first item carrying `id`.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no current item carries `id`.
    pub fn get_todo_index(&self, id: TodoId) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|todo| todo.id == id)
            .ok_or(StoreError::NotFound(id))
    }

    /// Overwrites the provided fields on the item carrying `id`.
    ///
    /// A `None` field is left as-is; with both fields absent the item is
    /// rewritten unchanged and still published. The working copy keeps the
    /// original `id` and `created_at`. Returns the updated item.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no current item carries `id`.
    pub fn edit_todo(
        &mut self,
        id: TodoId,
        title: Option<String>,
        checked: Option<bool>,
    ) -> StoreResult<TodoItem> {
        let mut todo = self.get_todo(id)?;
        let index = self.get_todo_index(id)?;

        if let Some(title) = title {
            todo.title = title;
        }
        if let Some(checked) = checked {
            todo.checked = checked;
        }

        self.items[index] = todo.clone();
        debug!(
            "event=todo_edited module=store status=ok id={} index={}",
            todo.id, index
        );
        self.publish();

        Ok(todo)
    }

    /// Removes and returns the item carrying `id`.
    ///
    /// Later items shift one position down.
    ///
    /// # Errors
    /// - `StoreError::NotFound` when no current item carries `id`.
    pub fn remove_todo(&mut self, id: TodoId) -> StoreResult<TodoItem> {
        let index = self.get_todo_index(id)?;
        let todo = self.items.remove(index);
        debug!(
            "event=todo_removed module=store status=ok id={} count={}",
            todo.id,
            self.items.len()
        );
        self.publish();

        Ok(todo)
    }

    /// Registers a snapshot callback and returns its subscription handle.
    ///
    /// The current sequence is delivered to the new subscriber immediately,
    /// then again after every successful mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&[TodoItem]) + Send + 'static,
    {
        let id = self.subscribers.register(Box::new(callback));
        self.subscribers.notify_one(id, &self.items);
        id
    }

    /// Drops one subscription. Returns whether it was still registered.
    ///
    /// No snapshots are delivered past this call.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id)
    }

    fn publish(&mut self) {
        self.subscribers.notify_all(&self.items);
    }
}
