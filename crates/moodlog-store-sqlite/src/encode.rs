//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.

use chrono::{DateTime, SecondsFormat, Utc};
use moodlog_core::{entry::MoodEntry, mood::Mood};

use crate::{Error, Result};

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

/// Fixed-width RFC 3339 with microsecond precision and a `Z` suffix, so the
/// TEXT column sorts lexicographically in chronological order.
pub fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Row type ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `moods` row.
pub struct RawEntry {
  pub mood:      String,
  pub timestamp: String,
  pub user_id:   String,
}

impl RawEntry {
  pub fn into_entry(self) -> Result<MoodEntry> {
    Ok(MoodEntry {
      mood:        Mood::parse(&self.mood)?,
      recorded_at: decode_dt(&self.timestamp)?,
      owner_id:    self.user_id,
    })
  }
}
