//! Observable in-memory to-do store.
//! This crate is the single source of truth for the to-do collection: an
//! ordered, identity-keyed sequence of items with copy-on-write value
//! semantics, published to subscribers after every mutation.

pub mod logging;
pub mod model;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::todo::{CopyOptions, TodoId, TodoItem};
pub use store::subscriber_registry::{SnapshotFn, SubscriptionId};
pub use store::todo_store::{StoreError, StoreResult, TodoStore};
