//! SQL schema for the SQLite mood store.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// The `moods` table is strictly append-only: no UPDATE or DELETE is ever
/// issued against it. `rowid` doubles as the insertion-order tie-break for
/// entries sharing a timestamp.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS moods (
    mood      TEXT NOT NULL,   -- one of the seven fixed labels
    timestamp TEXT NOT NULL,   -- RFC 3339 UTC, fixed width; store-assigned
    user_id   TEXT NOT NULL    -- opaque owner id from the identity provider
);

CREATE INDEX IF NOT EXISTS moods_timestamp_idx ON moods(timestamp);
CREATE INDEX IF NOT EXISTS moods_user_idx      ON moods(user_id);

PRAGMA user_version = 1;
";
