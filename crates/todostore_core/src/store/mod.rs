//! Store layer: the observable to-do container and its subscription wiring.
//!
//! # Responsibility
//! - Own all mutations of the to-do sequence.
//! - Publish post-mutation snapshots to registered observers.
//!
//! # Invariants
//! - Subscribers only ever observe fully applied mutations.
//! - Notification order is registration order.

pub mod subscriber_registry;
pub mod todo_store;
