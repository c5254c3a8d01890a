//! The `MoodStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `moodlog-store-sqlite`).
//! Higher layers (`moodlog-session`, `moodlog-cli`) depend on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::entry::{MoodEntry, NewMoodEntry};

/// Abstraction over a mood document store backend.
///
/// Writes are append-only; entries are never updated or deleted. Reads
/// return the whole ordered collection — per-owner filtering is deliberately
/// the caller's job, so the contract holds on backends that can order but
/// not filter server-side.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes.
pub trait MoodStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Persist a new entry and return it with its store-assigned timestamp.
  fn append(
    &self,
    entry: NewMoodEntry,
  ) -> impl Future<Output = Result<MoodEntry, Self::Error>> + Send + '_;

  /// Return ALL entries, ordered by timestamp descending. Entries with
  /// equal timestamps appear in store-native insertion order; callers must
  /// not rely on a particular tie order.
  fn query_ordered(
    &self,
  ) -> impl Future<Output = Result<Vec<MoodEntry>, Self::Error>> + Send + '_;
}
