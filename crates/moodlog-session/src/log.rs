//! [`MoodLog`] — gated writes and the per-owner read view.

use std::sync::Arc;

use moodlog_core::{
  entry::{MoodEntry, NewMoodEntry},
  mood::Mood,
  store::MoodStore,
};
use tokio::sync::watch;

use crate::{
  error::{Error, Result},
  provider::IdentityProvider,
  session::AuthSession,
};

/// What became of a [`MoodLog::submit`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  /// The entry was written; the read view has been refreshed to include it.
  Recorded(MoodEntry),
  /// Nobody was signed in and the interactive sign-in was declined.
  /// Nothing was written. This is an expected outcome, not an error.
  SignInDeclined,
}

/// The session-gated mood log.
///
/// Submission requires an identity (obtained on demand via interactive
/// sign-in); history is never gated but only ever shows entries the current
/// identity authored, newest first.
pub struct MoodLog<P: IdentityProvider, S: MoodStore> {
  session: Arc<AuthSession<P>>,
  store:   Arc<S>,
  view:    watch::Sender<Vec<MoodEntry>>,
}

impl<P, S> MoodLog<P, S>
where
  P: IdentityProvider,
  S: MoodStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  pub fn new(session: Arc<AuthSession<P>>, store: Arc<S>) -> Self {
    let (view, _) = watch::channel(Vec::new());
    Self {
      session,
      store,
      view,
    }
  }

  /// The read view: the current identity's entries as of the last refresh.
  /// Updated by [`submit`](Self::submit) and [`history`](Self::history).
  pub fn view(&self) -> watch::Receiver<Vec<MoodEntry>> {
    self.view.subscribe()
  }

  /// Record `mood` for the current identity.
  ///
  /// With nobody signed in, runs the interactive sign-in first; a declined
  /// sign-in aborts with [`SubmitOutcome::SignInDeclined`] and zero store
  /// interaction. On success the read view is re-queried so the new entry
  /// is observable without an explicit refresh (read-after-write as seen
  /// through this component — never served from a cache).
  ///
  /// Racing submits are independent appends; no deduplication.
  pub async fn submit(&self, mood: Mood) -> Result<SubmitOutcome> {
    let identity = match self.session.current() {
      Some(identity) => identity,
      None => match self.session.sign_in().await {
        Some(identity) => identity,
        None => {
          tracing::debug!(%mood, "sign-in declined; mood not recorded");
          return Ok(SubmitOutcome::SignInDeclined);
        }
      },
    };

    let entry = self
      .store
      .append(NewMoodEntry::new(mood, identity.user_id.clone()))
      .await
      .map_err(|e| Error::StoreWrite(Box::new(e)))?;
    tracing::info!(%mood, owner = %entry.owner_id, "mood recorded");

    self.refresh(&identity.user_id).await?;
    Ok(SubmitOutcome::Recorded(entry))
  }

  /// [`submit`](Self::submit), but parsing `label` first. An unknown label
  /// fails before any provider or store interaction.
  pub async fn submit_label(&self, label: &str) -> Result<SubmitOutcome> {
    let mood = Mood::parse(label)?;
    self.submit(mood).await
  }

  /// The current identity's entries, newest first.
  ///
  /// With nobody signed in this returns an empty list — viewing history is
  /// not a gated action, so no sign-in prompt.
  pub async fn history(&self) -> Result<Vec<MoodEntry>> {
    match self.session.current() {
      Some(identity) => self.refresh(&identity.user_id).await,
      None => {
        self.view.send_replace(Vec::new());
        Ok(Vec::new())
      }
    }
  }

  /// Empty the read view. Called by the controller on sign-out.
  pub fn clear_view(&self) {
    self.view.send_replace(Vec::new());
  }

  /// Query-then-filter: fetch the whole ordered collection, keep only
  /// `owner_id`'s entries, publish and return them.
  ///
  /// The owner filter stays on this side of the store boundary so the
  /// contract holds on backends that can order but not filter server-side.
  async fn refresh(&self, owner_id: &str) -> Result<Vec<MoodEntry>> {
    let entries: Vec<MoodEntry> = self
      .store
      .query_ordered()
      .await
      .map_err(|e| Error::StoreRead(Box::new(e)))?
      .into_iter()
      .filter(|e| e.owner_id == owner_id)
      .collect();

    self.view.send_replace(entries.clone());
    Ok(entries)
  }
}
