//! The `IdentityProvider` trait — the external sign-in service.

use std::future::Future;

use moodlog_core::identity::Identity;
use tokio::sync::broadcast;

/// Abstraction over the third-party identity service.
///
/// The provider owns session persistence and the interactive sign-in flow;
/// this system only observes the results. Every successful sign-in and every
/// sign-out must emit one event on the change stream, in the order the state
/// changes happened.
pub trait IdentityProvider: Send + Sync {
  /// Run the interactive sign-in flow.
  ///
  /// Returns `None` when the user declines or the flow fails — a normal
  /// outcome, not an error. A pending sign-in the user abandons resolves to
  /// `None` rather than hanging.
  fn sign_in(&self) -> impl Future<Output = Option<Identity>> + Send + '_;

  /// End the current session. Emits a `None` change event.
  fn sign_out(&self) -> impl Future<Output = ()> + Send + '_;

  /// Subscribe to identity changes. Each event is the full new state:
  /// `Some(identity)` after a sign-in, `None` after a sign-out.
  fn subscribe(&self) -> broadcast::Receiver<Option<Identity>>;
}
