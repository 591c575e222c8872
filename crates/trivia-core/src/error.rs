//! Error types for `trivia-core`.

use thiserror::Error;

/// A validation failure on input destined for the store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("field `{0}` is missing or empty")]
  EmptyField(&'static str),

  #[error("field `{0}` is not an integer")]
  NotAnInteger(&'static str),

  #[error("difficulty {0} is outside 1..=5")]
  DifficultyOutOfRange(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
