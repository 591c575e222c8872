//! Question — a single trivia item.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The accepted range for [`Question::difficulty`].
pub const DIFFICULTY_RANGE: std::ops::RangeInclusive<i64> = 1..=5;

/// A stored question, serialised exactly as the front end consumes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}

/// Validated input for [`TriviaStore::add_question`](crate::store::TriviaStore::add_question).
///
/// Construct with [`NewQuestion::new`]; the fields are only readable so a
/// value always carries non-empty text and an in-range difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  question:   String,
  answer:     String,
  difficulty: i64,
  category:   i64,
}

impl NewQuestion {
  /// Trim and validate the text fields and the difficulty.
  ///
  /// Category existence is not checked here; that needs the store.
  pub fn new(
    question: &str,
    answer: &str,
    difficulty: i64,
    category: i64,
  ) -> Result<Self> {
    let question = question.trim();
    if question.is_empty() {
      return Err(Error::EmptyField("question"));
    }
    let answer = answer.trim();
    if answer.is_empty() {
      return Err(Error::EmptyField("answer"));
    }
    if !DIFFICULTY_RANGE.contains(&difficulty) {
      return Err(Error::DifficultyOutOfRange(difficulty));
    }
    Ok(Self {
      question: question.to_owned(),
      answer: answer.to_owned(),
      difficulty,
      category,
    })
  }

  pub fn question(&self) -> &str { &self.question }

  pub fn answer(&self) -> &str { &self.answer }

  pub fn difficulty(&self) -> i64 { self.difficulty }

  pub fn category(&self) -> i64 { self.category }

  /// Attach the id assigned by the store.
  pub fn into_question(self, id: i64) -> Question {
    Question {
      id,
      question: self.question,
      answer: self.answer,
      category: self.category,
      difficulty: self.difficulty,
    }
  }
}
