//! Session-gated synchronization for the moodlog store.
//!
//! Two pieces live here:
//!
//! - [`AuthSession`] — wraps an [`IdentityProvider`]'s change stream into a
//!   single observable current-identity value.
//! - [`MoodLog`] — gates writes behind a present identity, tags each entry
//!   with its owner, and produces the per-owner, newest-first read view.
//!
//! Both are backend-agnostic: any [`moodlog_core::store::MoodStore`] works.

pub mod error;
pub mod log;
pub mod provider;
pub mod session;

pub use error::{Error, Result};
pub use log::{MoodLog, SubmitOutcome};
pub use provider::IdentityProvider;
pub use session::AuthSession;
