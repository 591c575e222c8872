//! Quiz question selection.
//!
//! Each call is stateless: the client sends the ids it has already seen and
//! gets back one unseen question, or nothing once the pool is exhausted.

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use crate::question::Question;

/// Pick one question uniformly at random from `pool`, excluding every id in
/// `previous`. Returns `None` when every question has been served.
pub fn pick_unseen<'a, R>(
  pool: &'a [Question],
  previous: &[i64],
  rng: &mut R,
) -> Option<&'a Question>
where
  R: Rng + ?Sized,
{
  let seen: HashSet<i64> = previous.iter().copied().collect();
  let eligible: Vec<&Question> =
    pool.iter().filter(|q| !seen.contains(&q.id)).collect();
  eligible.choose(rng).copied()
}

#[cfg(test)]
mod tests {
  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn pool(ids: impl IntoIterator<Item = i64>) -> Vec<Question> {
    ids
      .into_iter()
      .map(|id| Question {
        id,
        question: format!("Question {id}?"),
        answer: format!("Answer {id}"),
        category: 1,
        difficulty: 1,
      })
      .collect()
  }

  #[test]
  fn never_returns_a_previous_question() {
    let pool = pool(1..=6);
    let previous = [1, 2, 3, 4];
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
      let q = pick_unseen(&pool, &previous, &mut rng).unwrap();
      assert!(!previous.contains(&q.id));
    }
  }

  #[test]
  fn exhausted_pool_returns_none() {
    let pool = pool(1..=3);
    let mut rng = StdRng::seed_from_u64(1);
    assert!(pick_unseen(&pool, &[3, 1, 2], &mut rng).is_none());
    assert!(pick_unseen(&[], &[], &mut rng).is_none());
  }

  #[test]
  fn repeated_calls_walk_the_whole_pool() {
    let pool = pool(10..20);
    let mut rng = StdRng::seed_from_u64(42);
    let mut previous = Vec::new();
    while let Some(q) = pick_unseen(&pool, &previous, &mut rng) {
      previous.push(q.id);
    }
    previous.sort_unstable();
    assert_eq!(previous, (10..20).collect::<Vec<_>>());
  }

  #[test]
  fn unknown_previous_ids_are_ignored() {
    let pool = pool([5]);
    let mut rng = StdRng::seed_from_u64(3);
    let q = pick_unseen(&pool, &[99, 100], &mut rng).unwrap();
    assert_eq!(q.id, 5);
  }
}
