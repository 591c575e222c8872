//! Handler for `POST /quizzes`.
//!
//! Body: `{"previous_questions": [1, 2], "quiz_category": {"id": 0}}`.
//! Category id `0` draws from every question. The response carries no
//! `question` field once every question in the pool has been served.

use std::sync::Arc;

use axum::{
  Json,
  extract::{State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  question::Question,
  quiz::pick_unseen,
  store::{QuestionQuery, TriviaStore},
};

use crate::{deserializers::IntOrString, error::ApiError};

/// Category id meaning "any category".
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Deserialize)]
pub struct QuizBody {
  pub previous_questions: Option<Vec<i64>>,
  pub quiz_category:      Option<QuizCategory>,
}

/// Only the id is read; the front end also sends the category `type`.
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
  pub id: IntOrString,
}

#[derive(Debug, Serialize)]
pub struct NextQuestion {
  pub success:  bool,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub question: Option<Question>,
}

/// `POST /quizzes`
pub async fn next_question<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<QuizBody>, JsonRejection>,
) -> Result<Json<NextQuestion>, ApiError>
where
  S: TriviaStore,
{
  let Json(body) = body?;
  let (Some(previous), Some(category)) = (body.previous_questions, body.quiz_category)
  else {
    return Err(ApiError::BadRequest(
      "previous_questions and quiz_category are required".to_owned(),
    ));
  };
  let category = category
    .id
    .to_int("quiz_category.id")
    .map_err(|e| ApiError::BadRequest(e.to_string()))?;

  let query = if category == ALL_CATEGORIES {
    QuestionQuery::all()
  } else {
    QuestionQuery::in_category(category)
  };
  let pool = store.list_questions(&query).await.map_err(ApiError::store)?;

  let question = pick_unseen(&pool, &previous, &mut rand::thread_rng()).cloned();
  tracing::debug!(
    category,
    pool = pool.len(),
    seen = previous.len(),
    picked = question.as_ref().map(|q| q.id),
    "quiz question selected"
  );

  Ok(Json(NextQuestion { success: true, question }))
}
