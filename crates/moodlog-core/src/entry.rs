//! MoodEntry — one persisted mood observation.
//!
//! Entries are immutable claims: never updated, never deleted. The serde
//! field names (`mood`, `timestamp`, `userId`) are the bit-exact external
//! contract shared with pre-existing documents in the store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::Mood;

/// A persisted mood observation owned by exactly one identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
  pub mood:        Mood,
  /// Store-assigned instant; never changes after creation.
  #[serde(rename = "timestamp")]
  pub recorded_at: DateTime<Utc>,
  /// Must equal the id of the identity that created the entry.
  #[serde(rename = "userId")]
  pub owner_id:    String,
}

/// Input to [`crate::store::MoodStore::append`].
/// `recorded_at` is always assigned by the store; it is not accepted from
/// callers, so an entry's timestamp is read at the moment of the append.
#[derive(Debug, Clone)]
pub struct NewMoodEntry {
  pub mood:     Mood,
  pub owner_id: String,
}

impl NewMoodEntry {
  pub fn new(mood: Mood, owner_id: impl Into<String>) -> Self {
    Self {
      mood,
      owner_id: owner_id.into(),
    }
  }
}
