//! SQL schema for the trivia SQLite store.
//!
//! Executed once at connection startup. Idempotent, so reopening an existing
//! file leaves its rows alone.

/// Categories present in every fresh database, as `(id, type)`.
pub const SEEDED_CATEGORIES: &[(i64, &str)] = &[
  (1, "Science"),
  (2, "Art"),
  (3, "Geography"),
  (4, "History"),
  (5, "Entertainment"),
  (6, "Sports"),
];

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS categories (
    id    INTEGER PRIMARY KEY,
    type  TEXT NOT NULL UNIQUE
);

-- AUTOINCREMENT: ids of deleted questions are never handed out again.
CREATE TABLE IF NOT EXISTS questions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    question    TEXT    NOT NULL,
    answer      TEXT    NOT NULL,
    category    INTEGER NOT NULL REFERENCES categories(id),
    difficulty  INTEGER NOT NULL CHECK (difficulty BETWEEN 1 AND 5)
);

CREATE INDEX IF NOT EXISTS questions_category_idx ON questions(category);

PRAGMA user_version = 1;
";

/// Seed statement for [`SEEDED_CATEGORIES`]; existing rows are kept.
pub const SEED_CATEGORY: &str =
  "INSERT OR IGNORE INTO categories (id, type) VALUES (?1, ?2)";
