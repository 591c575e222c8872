//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions` | Optional `?page=N`; absent or `0` returns everything |
//! | `POST`   | `/questions` | Body: [`QuestionsRequest`], either a search or a new question |
//! | `POST`   | `/questions/search` | Body: `{"searchTerm": "..."}`; unpaginated |
//! | `DELETE` | `/questions/{id}` | 422 if the question does not exist |
//!
//! Searches match the question text as a case-insensitive literal substring.
//! `total_questions` is always the size of the filtered, unpaginated set.

use std::sync::Arc;

use axum::{
  Json,
  extract::{
    Path, Query, State,
    rejection::{JsonRejection, PathRejection, QueryRejection},
  },
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use trivia_core::{
  Error,
  category::category_map,
  page::Page,
  question::NewQuestion,
  store::{QuestionQuery, TriviaStore},
};

use crate::{QuestionList, deserializers::IntOrString, error::ApiError};

#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
  pub page: Option<u32>,
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /questions[?page=N]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<QuestionList>, ApiError>
where
  S: TriviaStore,
{
  let Query(params) = params?;
  let page = Page::from_query(params.page);
  let query = QuestionQuery::all().paged(page);

  let questions = store.list_questions(&query).await.map_err(ApiError::store)?;
  if let Some(page) = page
    && questions.is_empty()
  {
    return Err(ApiError::NotFound(format!("page {} is empty", page.number())));
  }

  let total_questions = store.count_questions(&query).await.map_err(ApiError::store)?;
  let categories = store.list_categories().await.map_err(ApiError::store)?;

  Ok(Json(QuestionList {
    success: true,
    questions,
    total_questions,
    categories: Some(category_map(&categories)),
    current_category: None,
  }))
}

// ─── Create or search ─────────────────────────────────────────────────────────

/// JSON body accepted by `POST /questions`.
///
/// The presence of `searchTerm` selects [`QuestionsRequest::Search`]; any other
/// object is treated as a new question and validated field by field.
#[derive(Debug)]
pub enum QuestionsRequest {
  Search { search_term: Option<String> },
  Create(NewQuestionBody),
}

impl QuestionsRequest {
  /// Split a syntactically valid JSON body into a search or a create form.
  /// Anything other than an object is a 400. A field of the wrong type is a
  /// 422, the same as a missing or empty one.
  pub fn from_json(body: Value) -> Result<Self, ApiError> {
    let Value::Object(mut fields) = body else {
      return Err(ApiError::BadRequest("expected a JSON object".to_owned()));
    };
    match fields.remove("searchTerm") {
      Some(term) => {
        let search_term = serde_json::from_value(term)
          .map_err(|e| ApiError::Unprocessable(format!("searchTerm: {e}")))?;
        Ok(Self::Search { search_term })
      }
      None => serde_json::from_value(Value::Object(fields))
        .map(Self::Create)
        .map_err(|e| ApiError::Unprocessable(e.to_string())),
    }
  }
}

/// The create form. Every field is optional at the JSON level so a missing
/// field is a 422 rather than a deserialisation failure.
#[derive(Debug, Default, Deserialize)]
pub struct NewQuestionBody {
  pub question:   Option<String>,
  pub answer:     Option<String>,
  pub difficulty: Option<IntOrString>,
  pub category:   Option<IntOrString>,
}

impl NewQuestionBody {
  /// Check presence and shape of every field, then build a [`NewQuestion`].
  pub fn validate(self) -> Result<NewQuestion, Error> {
    let question = self.question.ok_or(Error::EmptyField("question"))?;
    let answer = self.answer.ok_or(Error::EmptyField("answer"))?;
    let difficulty = self
      .difficulty
      .ok_or(Error::EmptyField("difficulty"))?
      .to_int("difficulty")?;
    let category = self
      .category
      .ok_or(Error::EmptyField("category"))?
      .to_int("category")?;
    NewQuestion::new(&question, &answer, difficulty, category)
  }
}

#[derive(Debug, Serialize)]
pub struct Created {
  pub success:          bool,
  pub created:          i64,
  pub question_created: String,
  pub questions:        Vec<trivia_core::question::Question>,
  pub total_questions:  usize,
}

/// `POST /questions[?page=N]`: search when the body carries `searchTerm`,
/// create otherwise. Both responses are paginated, defaulting to page 1.
/// A search with no matches, or a page past the last match, is a 404.
pub async fn create_or_search<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<PageParams>, QueryRejection>,
  body: Result<Json<Value>, JsonRejection>,
) -> Result<Response, ApiError>
where
  S: TriviaStore,
{
  let Query(params) = params?;
  let Json(body) = body?;
  let page = Page::from_query(params.page).unwrap_or(Page::FIRST);

  match QuestionsRequest::from_json(body)? {
    QuestionsRequest::Search { search_term } => {
      let term = search_term_or_reject(search_term)?;
      let query = QuestionQuery::search(term);

      let total_questions = store.count_questions(&query).await.map_err(ApiError::store)?;
      if total_questions == 0 {
        return Err(ApiError::NotFound("no question matches the search term".to_owned()));
      }
      let questions = store
        .list_questions(&query.paged(Some(page)))
        .await
        .map_err(ApiError::store)?;
      if questions.is_empty() {
        return Err(ApiError::NotFound(format!("page {} is empty", page.number())));
      }

      Ok(
        Json(QuestionList {
          success: true,
          questions,
          total_questions,
          categories: None,
          current_category: None,
        })
        .into_response(),
      )
    }
    QuestionsRequest::Create(form) => {
      let input = form.validate()?;

      let category = input.category();
      store
        .get_category(category)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?
        .ok_or_else(|| ApiError::Unprocessable(format!("category {category} does not exist")))?;

      let created = store
        .add_question(input)
        .await
        .map_err(|e| ApiError::Unprocessable(e.to_string()))?;
      tracing::info!(id = created.id, category, "question created");

      let all = QuestionQuery::all();
      let questions = store
        .list_questions(&all.clone().paged(Some(page)))
        .await
        .map_err(ApiError::store)?;
      let total_questions = store.count_questions(&all).await.map_err(ApiError::store)?;

      Ok(
        Json(Created {
          success: true,
          created: created.id,
          question_created: created.question,
          questions,
          total_questions,
        })
        .into_response(),
      )
    }
  }
}

// ─── Search ───────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
pub struct SearchBody {
  #[serde(rename = "searchTerm")]
  pub search_term: Option<String>,
}

/// `POST /questions/search` — every match, unpaginated. No matches is an
/// empty 200.
pub async fn search<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<SearchBody>, JsonRejection>,
) -> Result<Json<QuestionList>, ApiError>
where
  S: TriviaStore,
{
  let Json(body) = body?;
  let term = search_term_or_reject(body.search_term)?;
  let query = QuestionQuery::search(term);
  let questions = store.list_questions(&query).await.map_err(ApiError::store)?;

  Ok(Json(QuestionList {
    success: true,
    total_questions: questions.len(),
    questions,
    categories: None,
    current_category: None,
  }))
}

fn search_term_or_reject(term: Option<String>) -> Result<String, ApiError> {
  match term.as_deref().map(str::trim) {
    Some(t) if !t.is_empty() => Ok(t.to_owned()),
    _ => Err(Error::EmptyField("searchTerm").into()),
  }
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct Deleted {
  pub success: bool,
  pub deleted: i64,
  pub message: &'static str,
}

/// `DELETE /questions/{id}` — a missing, already deleted, or non-numeric id
/// is a 422.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Deleted>, ApiError>
where
  S: TriviaStore,
{
  let Path(id) = id.map_err(|r| ApiError::Unprocessable(r.body_text()))?;

  let deleted = store.delete_question(id).await.map_err(ApiError::store)?;
  if !deleted {
    return Err(ApiError::Unprocessable(format!("question {id} does not exist")));
  }
  tracing::info!(id, "question deleted");

  Ok(Json(Deleted {
    success: true,
    deleted: id,
    message: "Question successfully deleted",
  }))
}
