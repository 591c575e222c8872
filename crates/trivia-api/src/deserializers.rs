//! Lenient request-body field types.

use serde::Deserialize;
use trivia_core::Error;

/// An integer field that browsers often send as a string (`"3"` from a
/// `<select>`). Accepts either form.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntOrString {
  Int(i64),
  Str(String),
}

impl IntOrString {
  /// Resolve to an integer. A blank string counts as a missing field.
  pub fn to_int(&self, field: &'static str) -> Result<i64, Error> {
    match self {
      IntOrString::Int(n) => Ok(*n),
      IntOrString::Str(s) => {
        let s = s.trim();
        if s.is_empty() {
          return Err(Error::EmptyField(field));
        }
        s.parse().map_err(|_| Error::NotAnInteger(field))
      }
    }
  }
}
