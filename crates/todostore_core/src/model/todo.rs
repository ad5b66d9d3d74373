//! To-do item domain model.
//!
//! # Responsibility
//! - Define the canonical to-do record owned by the store.
//! - Provide value-copy derivation with selectable field resets.
//!
//! # Invariants
//! - `id` is stable for the lifetime of a value and never reused in a store.
//! - `created_at` is stamped once at construction and carried unchanged.

use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Stable identifier for one to-do item.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TodoId = Uuid;

/// One to-do entry.
///
/// Values are copied into and out of the store, so a caller holding a
/// returned item never aliases store-internal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Stable ID used for lookup and positional access.
    pub id: TodoId,
    /// Human-readable description.
    pub title: String,
    /// Completion flag.
    pub checked: bool,
    /// Creation timestamp in Unix epoch milliseconds.
    pub created_at: i64,
    /// Reserved for last-edit timestamps in Unix epoch milliseconds; not
    /// written by current store operations.
    pub updated_at: Option<i64>,
}

/// Field-reset selection for `TodoItem::copy_with`.
///
/// The default resets everything resettable: fresh id, fresh `created_at`,
/// cleared `updated_at`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CopyOptions {
    /// Reuse the source id instead of generating a fresh one.
    pub keep_id: bool,
    /// Reuse the source `created_at` instead of stamping now.
    pub with_creation: bool,
    /// Reuse the source `updated_at` instead of clearing it.
    pub with_updating: bool,
}

impl TodoItem {
    /// Creates a new unchecked item with a generated stable ID.
    ///
    /// # Invariants
    /// - `checked` starts as `false`.
    /// - `updated_at` starts as `None`.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            checked: false,
            created_at: now_epoch_ms(),
            updated_at: None,
        }
    }

    /// Derives a copy of this item with selectable field resets.
    ///
    /// `title` and `checked` are always carried over; see `CopyOptions` for
    /// the id/timestamp selection. Pure, never fails.
    pub fn copy_with(&self, options: CopyOptions) -> Self {
        Self {
            id: if options.keep_id {
                self.id
            } else {
                Uuid::new_v4()
            },
            title: self.title.clone(),
            checked: self.checked,
            created_at: if options.with_creation {
                self.created_at
            } else {
                now_epoch_ms()
            },
            updated_at: if options.with_updating {
                self.updated_at
            } else {
                None
            },
        }
    }
}

/// Current wall-clock time in Unix epoch milliseconds.
///
/// A clock set before the epoch collapses to 0 instead of panicking.
fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}
