//! [`SqliteStore`] — the SQLite implementation of [`TriviaStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use trivia_core::{
  category::Category,
  question::{NewQuestion, Question},
  store::{QuestionQuery, TriviaStore},
};

use crate::{
  Error, Result,
  encode::{
    QUESTION_COLUMNS, category_from_row, question_from_row, register_functions,
    sql_limit, sql_offset,
  },
  schema::{SCHEMA, SEED_CATEGORY, SEEDED_CATEGORIES},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A trivia store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path`, run schema initialisation and seed
  /// the default categories.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    let seeded = self
      .conn
      .call(|conn| {
        register_functions(conn)?;
        conn.execute_batch(SCHEMA)?;
        let tx = conn.transaction()?;
        let mut seeded = 0;
        {
          let mut stmt = tx.prepare(SEED_CATEGORY)?;
          for (id, kind) in SEEDED_CATEGORIES {
            seeded += stmt.execute(rusqlite::params![id, kind])?;
          }
        }
        tx.commit()?;
        Ok(seeded)
      })
      .await?;
    if seeded > 0 {
      tracing::info!(seeded, "seeded default categories");
    }
    Ok(())
  }
}

/// Shared filter for `list_questions` / `count_questions`; `?1` is the raw
/// search term and `?2` the category id, either may be NULL.
const QUESTION_FILTER: &str = "
  WHERE (?1 IS NULL OR contains_folded(question, ?1))
    AND (?2 IS NULL OR category = ?2)";

// ─── TriviaStore impl ────────────────────────────────────────────────────────

impl TriviaStore for SqliteStore {
  type Error = Error;

  // ── Categories ────────────────────────────────────────────────────────────

  async fn list_categories(&self) -> Result<Vec<Category>> {
    let categories = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare("SELECT id, type FROM categories ORDER BY id")?;
        let rows = stmt
          .query_map([], category_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(categories)
  }

  async fn get_category(&self, id: i64) -> Result<Option<Category>> {
    let category = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, type FROM categories WHERE id = ?1",
              rusqlite::params![id],
              category_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(category)
  }

  // ── Questions ─────────────────────────────────────────────────────────────

  async fn list_questions(&self, query: &QuestionQuery) -> Result<Vec<Question>> {
    let term     = query.search.clone();
    let category = query.category;
    let limit    = sql_limit(query.page.map(|p| p.limit()));
    let offset   = sql_offset(query.page.map_or(0, |p| p.offset()));

    let questions = self
      .conn
      .call(move |conn| {
        let sql = format!(
          "SELECT {QUESTION_COLUMNS} FROM questions {QUESTION_FILTER}
           ORDER BY id
           LIMIT ?3 OFFSET ?4"
        );
        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(
            rusqlite::params![term, category, limit, offset],
            question_from_row,
          )?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(questions)
  }

  async fn count_questions(&self, query: &QuestionQuery) -> Result<usize> {
    let term     = query.search.clone();
    let category = query.category;

    let count: i64 = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT COUNT(*) FROM questions {QUESTION_FILTER}");
        Ok(conn.query_row(&sql, rusqlite::params![term, category], |r| r.get(0))?)
      })
      .await?;
    usize::try_from(count).map_err(|_| Error::CountOutOfRange(count))
  }

  async fn get_question(&self, id: i64) -> Result<Option<Question>> {
    let question = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE id = ?1");
        Ok(
          conn
            .query_row(&sql, rusqlite::params![id], question_from_row)
            .optional()?,
        )
      })
      .await?;
    Ok(question)
  }

  async fn add_question(&self, input: NewQuestion) -> Result<Question> {
    let question   = input.question().to_owned();
    let answer     = input.answer().to_owned();
    let category   = input.category();
    let difficulty = input.difficulty();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO questions (question, answer, category, difficulty)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![question, answer, category, difficulty],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await?;

    Ok(input.into_question(id))
  }

  async fn delete_question(&self, id: i64) -> Result<bool> {
    let affected = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "DELETE FROM questions WHERE id = ?1",
          rusqlite::params![id],
        )?)
      })
      .await?;
    Ok(affected > 0)
  }
}
