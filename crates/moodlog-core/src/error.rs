//! Error types for `moodlog-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The caller passed a label outside the fixed mood set. Rejected before
  /// any provider or store interaction.
  #[error("unknown mood label: {0:?}")]
  UnknownMood(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
