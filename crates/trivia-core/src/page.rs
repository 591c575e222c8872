//! The pagination window.

use std::ops::Range;

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-indexed page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
  /// The first page.
  pub const FIRST: Page = Page(1);

  /// Interpret an optional `?page=` value. An absent page or page `0` means
  /// "no window": the caller should return the whole sequence.
  pub fn from_query(page: Option<u32>) -> Option<Page> {
    page.filter(|&n| n > 0).map(Page)
  }

  pub fn number(self) -> u32 { self.0 }

  /// `(page-1)*10 .. (page-1)*10 + 10`.
  pub fn range(self) -> Range<usize> {
    let lower = (self.0 as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);
    lower..lower.saturating_add(QUESTIONS_PER_PAGE)
  }

  pub fn offset(self) -> usize { self.range().start }

  pub fn limit(self) -> usize { QUESTIONS_PER_PAGE }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn absent_or_zero_page_means_everything() {
    assert_eq!(Page::from_query(None), None);
    assert_eq!(Page::from_query(Some(0)), None);
    assert_eq!(Page::from_query(Some(3)).map(Page::number), Some(3));
  }

  #[test]
  fn range_is_ten_wide() {
    assert_eq!(Page::FIRST.range(), 0..10);
    assert_eq!(Page(2).range(), 10..20);
    assert_eq!(Page(5).offset(), 40);
    assert_eq!(Page(5).limit(), 10);
  }

  #[test]
  fn huge_page_does_not_overflow() {
    let range = Page(u32::MAX).range();
    assert_eq!(range.end - range.start, QUESTIONS_PER_PAGE);
  }
}
