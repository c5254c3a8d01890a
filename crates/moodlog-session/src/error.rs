//! Error type for `moodlog-session`.
//!
//! Two outcomes that look like errors deliberately are not: a declined
//! sign-in ([`crate::SubmitOutcome::SignInDeclined`]) and a `history()` call
//! with nobody signed in (empty result). Only contract violations and store
//! failures surface here.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// Label outside the fixed mood set — rejected before any I/O.
  #[error(transparent)]
  InvalidMood(#[from] moodlog_core::Error),

  /// The backend rejected or failed an append. Never retried here; the
  /// entry was not recorded.
  #[error("store write failed: {0}")]
  StoreWrite(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The backend failed a query. Never retried here; history is idempotently
  /// re-fetchable by the caller.
  #[error("store read failed: {0}")]
  StoreRead(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
