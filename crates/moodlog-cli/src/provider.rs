//! Console-backed [`IdentityProvider`].
//!
//! Interactive sign-in prompts for a display name on stdin; an empty line
//! cancels. The user id is derived deterministically from the name (UUID v5)
//! so the same person sees their own history across sessions.

use std::sync::Mutex;

use moodlog_core::identity::Identity;
use moodlog_session::IdentityProvider;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Read one line from stdin without blocking the runtime.
/// Returns `None` on EOF.
pub async fn prompt_line(prompt: &str) -> std::io::Result<Option<String>> {
  use std::io::{BufRead as _, Write as _};

  let prompt = prompt.to_owned();
  tokio::task::spawn_blocking(move || {
    let mut out = std::io::stdout();
    out.write_all(prompt.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    let read = std::io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
  })
  .await
  .map_err(std::io::Error::other)?
}

/// Identity provider that runs its interactive flow on the terminal.
pub struct ConsoleProvider {
  current: Mutex<Option<Identity>>,
  events:  broadcast::Sender<Option<Identity>>,
}

impl ConsoleProvider {
  pub fn new() -> Self {
    let (events, _) = broadcast::channel(16);
    Self {
      current: Mutex::new(None),
      events,
    }
  }
}

impl Default for ConsoleProvider {
  fn default() -> Self {
    Self::new()
  }
}

impl IdentityProvider for ConsoleProvider {
  async fn sign_in(&self) -> Option<Identity> {
    // An existing session satisfies the request without prompting.
    if let Some(identity) = self.current.lock().unwrap().clone() {
      return Some(identity);
    }

    let prompt = "Sign in — display name (empty line cancels): ";
    let name = match prompt_line(prompt).await {
      Ok(Some(name)) => name,
      Ok(None) => return None,
      Err(e) => {
        // The provider contract: failures resolve to a declined sign-in.
        tracing::warn!(error = %e, "sign-in prompt failed");
        return None;
      }
    };

    let name = name.trim();
    if name.is_empty() {
      return None;
    }

    let user_id =
      Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string();
    let identity = Identity::new(user_id, name);

    *self.current.lock().unwrap() = Some(identity.clone());
    let _ = self.events.send(Some(identity.clone()));
    Some(identity)
  }

  async fn sign_out(&self) {
    *self.current.lock().unwrap() = None;
    let _ = self.events.send(None);
  }

  fn subscribe(&self) -> broadcast::Receiver<Option<Identity>> {
    self.events.subscribe()
  }
}
