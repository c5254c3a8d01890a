//! The fixed, closed set of mood labels.
//!
//! The serialized label strings are load-bearing: pre-existing documents
//! were written with exactly these seven strings, so any change here is a
//! data-format break.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// One of the seven moods a user can record.
///
/// Serialized by label (`"Happy"`, `"Sad"`, …) — the variant names ARE the
/// wire strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mood {
  Happy,
  Sad,
  Angry,
  Frustrated,
  Sleepy,
  Neutral,
  Enjoying,
}

/// All moods, in the order they are presented to the user.
pub const ALL_MOODS: [Mood; 7] = [
  Mood::Happy,
  Mood::Sad,
  Mood::Angry,
  Mood::Frustrated,
  Mood::Sleepy,
  Mood::Neutral,
  Mood::Enjoying,
];

impl Mood {
  /// The exact label string stored in the `mood` field.
  pub fn label(&self) -> &'static str {
    match self {
      Self::Happy => "Happy",
      Self::Sad => "Sad",
      Self::Angry => "Angry",
      Self::Frustrated => "Frustrated",
      Self::Sleepy => "Sleepy",
      Self::Neutral => "Neutral",
      Self::Enjoying => "Enjoying",
    }
  }

  /// Display glyph paired with the label. Presentation only — never stored.
  pub fn glyph(&self) -> &'static str {
    match self {
      Self::Happy => "😊",
      Self::Sad => "😢",
      Self::Angry => "😡",
      Self::Frustrated => "😤",
      Self::Sleepy => "😴",
      Self::Neutral => "😐",
      Self::Enjoying => "🥳",
    }
  }

  /// Parse a label string. Anything outside the fixed set is a caller
  /// contract error.
  pub fn parse(label: &str) -> Result<Self> {
    ALL_MOODS
      .iter()
      .copied()
      .find(|m| m.label() == label)
      .ok_or_else(|| Error::UnknownMood(label.to_owned()))
  }
}

impl std::fmt::Display for Mood {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.label())
  }
}
