//! [`AuthSession`] — the observable current-identity value.

use std::sync::Arc;

use moodlog_core::identity::Identity;
use tokio::sync::{broadcast, watch};

use crate::provider::IdentityProvider;

/// Capacity of the re-published change stream. Identity changes are rare
/// (interactive sign-in/out), so a small buffer is plenty.
const EVENT_BUFFER: usize = 16;

/// Tracks the latest identity reported by an [`IdentityProvider`] and fans
/// it out to any number of observers.
///
/// A single pump task is the only writer of the held value; readers go
/// through [`watch`] / [`broadcast`] receivers, so no locking is needed.
/// Dropping the session aborts the pump, releasing the provider
/// subscription.
pub struct AuthSession<P: IdentityProvider> {
  provider: Arc<P>,
  current:  watch::Sender<Option<Identity>>,
  events:   broadcast::Sender<Option<Identity>>,
  pump:     tokio::task::JoinHandle<()>,
}

impl<P: IdentityProvider> AuthSession<P> {
  /// Subscribe to `provider`'s change stream and start tracking it.
  ///
  /// The current identity is `None` until the provider emits its first
  /// event.
  pub fn attach(provider: Arc<P>) -> Self {
    let mut source = provider.subscribe();
    let (current, _) = watch::channel(None);
    let (events, _) = broadcast::channel(EVENT_BUFFER);

    let current_tx = current.clone();
    let events_tx = events.clone();
    let pump = tokio::spawn(async move {
      loop {
        match source.recv().await {
          Ok(identity) => {
            tracing::debug!(
              signed_in = identity.is_some(),
              "identity change"
            );
            current_tx.send_replace(identity.clone());
            // No receivers is fine — nobody is observing right now.
            let _ = events_tx.send(identity);
          }
          Err(broadcast::error::RecvError::Lagged(missed)) => {
            // We fell behind the provider; the next recv returns the
            // oldest retained event, so ordering is preserved.
            tracing::warn!(missed, "identity change stream lagged");
          }
          Err(broadcast::error::RecvError::Closed) => {
            // Provider stream gone: the current identity simply stops
            // updating. Not our failure to handle.
            tracing::debug!("identity change stream closed");
            break;
          }
        }
      }
    });

    Self {
      provider,
      current,
      events,
      pump,
    }
  }

  /// The most recently observed identity; `None` before the first event or
  /// after a sign-out.
  pub fn current(&self) -> Option<Identity> {
    self.current.borrow().clone()
  }

  /// Watch the current value. `borrow()` always yields the latest state;
  /// intermediate states may be skipped by a slow reader.
  pub fn watch(&self) -> watch::Receiver<Option<Identity>> {
    self.current.subscribe()
  }

  /// Subscribe to the change stream itself: every event, in emission order,
  /// no coalescing.
  pub fn subscribe(&self) -> broadcast::Receiver<Option<Identity>> {
    self.events.subscribe()
  }

  /// Run the provider's interactive sign-in flow. `None` means declined.
  ///
  /// The returned identity is also delivered through the change stream, but
  /// callers that need it immediately should use this return value rather
  /// than racing the pump.
  pub async fn sign_in(&self) -> Option<Identity> {
    self.provider.sign_in().await
  }

  /// End the current session via the provider.
  pub async fn sign_out(&self) {
    self.provider.sign_out().await;
  }
}

impl<P: IdentityProvider> Drop for AuthSession<P> {
  fn drop(&mut self) {
    self.pump.abort();
  }
}
