//! Category — a topical grouping for questions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A category row. Categories are seeded with the schema and never change
/// through the HTTP surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: String,
}

/// The `{"<id>": "<type>"}` mapping the front end expects.
pub fn category_map(categories: &[Category]) -> BTreeMap<i64, String> {
  categories
    .iter()
    .map(|c| (c.id, c.kind.clone()))
    .collect()
}
