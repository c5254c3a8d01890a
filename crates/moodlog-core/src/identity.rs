//! Identity — the authenticated principal performing actions.

use serde::{Deserialize, Serialize};

/// The authenticated user, as reported by the identity provider.
///
/// The id is opaque to this system; we only ever compare it for equality.
/// Identities are held for the duration of a session and never persisted —
/// the provider owns persistence of the session itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
  pub user_id:      String,
  pub display_name: String,
}

impl Identity {
  pub fn new(
    user_id: impl Into<String>,
    display_name: impl Into<String>,
  ) -> Self {
    Self {
      user_id:      user_id.into(),
      display_name: display_name.into(),
    }
  }
}
