//! `moodlog` — terminal client for the mood log.
//!
//! Reads `config.toml` (or the path given with `--config`), opens the SQLite
//! store, and runs an interactive command loop:
//!
//! ```text
//! moodlog> mood Happy
//! moodlog> history
//! ```

mod provider;

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use moodlog_core::mood::ALL_MOODS;
use moodlog_session::{AuthSession, Error, MoodLog, SubmitOutcome};
use moodlog_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use provider::{ConsoleProvider, prompt_line};

#[derive(Parser)]
#[command(author, version, about = "Record moods and review your history")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,

  /// Path to the SQLite store (overrides the config file).
  #[arg(short, long)]
  store: Option<PathBuf>,
}

/// Runtime configuration, deserialised from `config.toml` / `MOODLOG_*` env.
#[derive(Deserialize)]
struct AppConfig {
  #[serde(default = "default_store_path")]
  store_path: PathBuf,
}

fn default_store_path() -> PathBuf {
  PathBuf::from("moods.sqlite3")
}

type App = MoodLog<ConsoleProvider, SqliteStore>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(config::Environment::with_prefix("MOODLOG"))
    .build()
    .context("failed to read config file")?;

  let app_cfg: AppConfig = settings
    .try_deserialize()
    .context("failed to deserialise AppConfig")?;

  let store_path = cli.store.unwrap_or(app_cfg.store_path);
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let provider = Arc::new(ConsoleProvider::new());
  let session = Arc::new(AuthSession::attach(provider));
  let log = MoodLog::new(session.clone(), Arc::new(store));

  // Report identity transitions as they happen.
  let mut events = session.subscribe();
  tokio::spawn(async move {
    while let Ok(identity) = events.recv().await {
      match identity {
        Some(identity) => {
          tracing::info!(user = %identity.display_name, "signed in");
        }
        None => tracing::info!("signed out"),
      }
    }
  });

  println!("moodlog — type `help` for commands.");
  loop {
    let line = match prompt_line("moodlog> ").await? {
      Some(line) => line,
      None => break, // EOF
    };

    let line = line.trim();
    let (command, rest) = match line.split_once(char::is_whitespace) {
      Some((c, r)) => (c, r.trim()),
      None => (line, ""),
    };

    match command {
      "" => {}
      "mood" => submit(&log, rest).await?,
      "history" => history(&log, &session).await?,
      "moods" => {
        for mood in ALL_MOODS {
          println!("  {} {}", mood.glyph(), mood.label());
        }
      }
      "signin" => match session.sign_in().await {
        Some(identity) => println!("Welcome, {}!", identity.display_name),
        None => println!("Sign-in cancelled."),
      },
      "signout" => {
        session.sign_out().await;
        log.clear_view();
        println!("Signed out.");
      }
      "whoami" => match session.current() {
        Some(identity) => println!("{}", identity.display_name),
        None => println!("Not signed in."),
      },
      "help" => help(),
      "quit" | "exit" => break,
      other => println!("Unknown command {other:?} — try `help`."),
    }
  }

  Ok(())
}

async fn submit(log: &App, label: &str) -> anyhow::Result<()> {
  match log.submit_label(label).await {
    Ok(SubmitOutcome::Recorded(entry)) => {
      println!("{} {} recorded.", entry.mood.glyph(), entry.mood.label());
    }
    Ok(SubmitOutcome::SignInDeclined) => {
      println!("Sign-in declined; mood not recorded.");
    }
    Err(Error::InvalidMood(e)) => {
      println!("{e} — `moods` lists the valid labels.");
    }
    Err(e) => return Err(e).context("recording mood"),
  }
  Ok(())
}

async fn history(
  log: &App,
  session: &AuthSession<ConsoleProvider>,
) -> anyhow::Result<()> {
  if session.current().is_none() {
    println!("Sign in to see your mood history.");
    return Ok(());
  }

  let entries = log.history().await.context("fetching history")?;
  if entries.is_empty() {
    println!("No moods recorded yet.");
    return Ok(());
  }
  for entry in entries {
    println!(
      "  {} {:<10} {}",
      entry.mood.glyph(),
      entry.mood.label(),
      entry
        .recorded_at
        .with_timezone(&chrono::Local)
        .format("%Y-%m-%d %H:%M")
    );
  }
  Ok(())
}

fn help() {
  println!("  mood <label>   record a mood (prompts for sign-in if needed)");
  println!("  moods          list the available moods");
  println!("  history        show your recorded moods, newest first");
  println!("  signin         sign in");
  println!("  signout        sign out");
  println!("  whoami         show the signed-in user");
  println!("  quit           exit");
}
