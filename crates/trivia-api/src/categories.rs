//! Handlers for `/categories` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/categories` | `{"<id>": "<type>"}` mapping |
//! | `GET`  | `/categories/{id}/questions` | 400 if the category does not exist |

use std::{collections::BTreeMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, State, rejection::PathRejection},
};
use serde::Serialize;
use trivia_core::{
  category::category_map,
  store::{QuestionQuery, TriviaStore},
};

use crate::{QuestionList, error::ApiError};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryList {
  pub success:    bool,
  pub categories: BTreeMap<i64, String>,
}

/// `GET /categories`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<CategoryList>, ApiError>
where
  S: TriviaStore,
{
  let categories = store.list_categories().await.map_err(ApiError::store)?;
  Ok(Json(CategoryList {
    success:    true,
    categories: category_map(&categories),
  }))
}

// ─── Questions in a category ──────────────────────────────────────────────────

/// `GET /categories/{id}/questions`
///
/// The category is looked up before its questions, so an unknown or
/// non-numeric id is a 400 rather than an empty 200.
pub async fn questions<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<QuestionList>, ApiError>
where
  S: TriviaStore,
{
  let Path(id) = id.map_err(|r| ApiError::BadRequest(r.body_text()))?;

  store
    .get_category(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::BadRequest(format!("category {id} does not exist")))?;

  let query = QuestionQuery::in_category(id);
  let questions = store.list_questions(&query).await.map_err(ApiError::store)?;

  Ok(Json(QuestionList {
    success: true,
    total_questions: questions.len(),
    questions,
    categories: None,
    current_category: Some(id),
  }))
}
