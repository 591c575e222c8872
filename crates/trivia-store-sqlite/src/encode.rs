//! Helpers between SQL rows / parameters and the domain types.

use rusqlite::functions::FunctionFlags;
use trivia_core::{category::Category, question::Question};

pub const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

pub fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
  Ok(Category {
    id:   row.get(0)?,
    kind: row.get(1)?,
  })
}

pub fn question_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question {
    id:         row.get(0)?,
    question:   row.get(1)?,
    answer:     row.get(2)?,
    category:   row.get(3)?,
    difficulty: row.get(4)?,
  })
}

/// Name of the scalar SQL function backing question search.
pub const CONTAINS_FOLDED: &str = "contains_folded";

/// Case-insensitive substring test using full Unicode lowercasing, so
/// "école" matches "ÉCOLE".
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
  haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Register [`CONTAINS_FOLDED`] on `conn`. A NULL argument never matches.
pub fn register_functions(conn: &rusqlite::Connection) -> rusqlite::Result<()> {
  conn.create_scalar_function(
    CONTAINS_FOLDED,
    2,
    FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
    |ctx| {
      let haystack: Option<String> = ctx.get(0)?;
      let needle: Option<String> = ctx.get(1)?;
      Ok(match (haystack, needle) {
        (Some(h), Some(n)) => contains_folded(&h, &n),
        _ => false,
      })
    },
  )
}

/// SQLite treats a negative `LIMIT` as "no limit".
pub fn sql_limit(limit: Option<usize>) -> i64 {
  limit.map_or(-1, |l| i64::try_from(l).unwrap_or(i64::MAX))
}

pub fn sql_offset(offset: usize) -> i64 { i64::try_from(offset).unwrap_or(i64::MAX) }
