//! JSON REST API for the trivia question bank.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = trivia_api::api_router(store.clone()).layer(cors);
//! ```

pub mod categories;
pub mod deserializers;
pub mod error;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use serde::Serialize;
use trivia_core::{question::Question, store::TriviaStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// Unknown paths answer 404 and known paths with the wrong method answer
/// 405, both with the same JSON error body as the handlers.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TriviaStore + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>))
    .route("/categories/{id}/questions", get(categories::questions::<S>))
    // Questions
    .route(
      "/questions",
      get(questions::list::<S>).post(questions::create_or_search::<S>),
    )
    .route("/questions/search", post(questions::search::<S>))
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    // Quizzes
    .route("/quizzes", post(quizzes::next_question::<S>))
    .fallback(error::not_found)
    .method_not_allowed_fallback(error::method_not_allowed)
    .with_state(store)
}

/// The question listing shape shared by several endpoints.
#[derive(Debug, Serialize)]
pub struct QuestionList {
  pub success:          bool,
  pub questions:        Vec<Question>,
  pub total_questions:  usize,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub categories:       Option<std::collections::BTreeMap<i64, String>>,
  pub current_category: Option<i64>,
}
