//! The `TriviaStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{
  category::Category,
  page::Page,
  question::{NewQuestion, Question},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`TriviaStore::list_questions`] and
/// [`TriviaStore::count_questions`].
#[derive(Debug, Clone, Default)]
pub struct QuestionQuery {
  /// Case-insensitive literal substring of the question text.
  pub search:   Option<String>,
  /// Restrict to a single category.
  pub category: Option<i64>,
  /// Window over the id-ordered results. Ignored by `count_questions`.
  pub page:     Option<Page>,
}

impl QuestionQuery {
  pub fn all() -> Self { Self::default() }

  pub fn search(term: impl Into<String>) -> Self {
    Self { search: Some(term.into()), ..Self::default() }
  }

  pub fn in_category(category: i64) -> Self {
    Self { category: Some(category), ..Self::default() }
  }

  pub fn paged(mut self, page: Option<Page>) -> Self {
    self.page = page;
    self
  }
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a trivia store backend.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Categories ────────────────────────────────────────────────────────

  /// All categories, ordered by id.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  // ── Questions ─────────────────────────────────────────────────────────

  /// Questions matching `query`, ordered by id and windowed by `query.page`.
  fn list_questions<'a>(
    &'a self,
    query: &'a QuestionQuery,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Number of questions matching `query`'s filters. The page is ignored.
  fn count_questions<'a>(
    &'a self,
    query: &'a QuestionQuery,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + 'a;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Persist a new question and return it with its assigned id.
  fn add_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Delete a question. Returns `false` if no row with `id` existed, which
  /// includes losing a race against a concurrent delete.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
