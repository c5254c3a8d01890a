//! [`SqliteStore`] — the SQLite implementation of [`MoodStore`].

use std::path::Path;

use chrono::Utc;
use moodlog_core::{
  entry::{MoodEntry, NewMoodEntry},
  store::MoodStore,
};

use crate::{
  Error, Result,
  encode::{RawEntry, encode_dt},
  schema::SCHEMA,
};

/// A mood store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── MoodStore impl ──────────────────────────────────────────────────────────

impl MoodStore for SqliteStore {
  type Error = Error;

  async fn append(&self, entry: NewMoodEntry) -> Result<MoodEntry> {
    // The timestamp is assigned here, at the moment of the append — never
    // accepted from the caller.
    let entry = MoodEntry {
      mood:        entry.mood,
      recorded_at: Utc::now(),
      owner_id:    entry.owner_id,
    };

    let mood_str = entry.mood.label().to_owned();
    let at_str = encode_dt(entry.recorded_at);
    let user_str = entry.owner_id.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO moods (mood, timestamp, user_id) VALUES (?1, ?2, ?3)",
          rusqlite::params![mood_str, at_str, user_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(entry)
  }

  async fn query_ordered(&self) -> Result<Vec<MoodEntry>> {
    let raws: Vec<RawEntry> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT mood, timestamp, user_id FROM moods
           ORDER BY timestamp DESC, rowid DESC",
        )?;
        let rows = stmt
          .query_map([], |row| {
            Ok(RawEntry {
              mood:      row.get(0)?,
              timestamp: row.get(1)?,
              user_id:   row.get(2)?,
            })
          })?
          .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawEntry::into_entry).collect()
  }
}
