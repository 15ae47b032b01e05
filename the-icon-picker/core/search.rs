//! Catalog filtering and pagination.
//!
//! Deliberately not fuzzy: the grid promises catalog order, so matching is a
//! plain case-folded substring test and the result is always a subsequence
//! of the catalog. Pagination is derived state, recomputed from
//! (catalog, query, page) on every render.

use crate::core::catalog::Catalog;

/// Number of icons shown per page.
pub const PAGE_SIZE: usize = 100;

/// All identifiers matching `query`, in catalog order.
///
/// An empty or whitespace-only query means "no filter" and returns the whole
/// catalog. Matching case-folds the query only; identifiers are canonical
/// kebab-case and already lowercase.
pub fn filter<'c>(catalog: &'c Catalog, query: &str) -> Vec<&'c str> {
  let query = query.trim();
  if query.is_empty() {
    return catalog.names().collect();
  }
  let query = query.to_lowercase();
  catalog
    .names()
    .filter(|name| name.contains(query.as_str()))
    .collect()
}

/// One page of `filtered` plus the total page count.
///
/// A page index past the end is clamped to the last page; zero matches yield
/// zero pages and an empty slice.
pub fn paginate<'a, 'c>(
  filtered: &'a [&'c str],
  page: usize,
  page_size: usize,
) -> (&'a [&'c str], usize) {
  let total_pages = filtered.len().div_ceil(page_size);
  if total_pages == 0 {
    return (&[], 0);
  }
  let page = page.min(total_pages - 1);
  let start = page * page_size;
  let end = (start + page_size).min(filtered.len());
  (&filtered[start..end], total_pages)
}

/// Search state owned by the grid: the active query and the requested page.
///
/// The page resets to 0 whenever the query changes; any residual
/// out-of-range index is clamped when the page view is computed, so a stale
/// page can never dangle past the last page of a shrunken result set.
#[derive(Debug, Clone, Default)]
pub struct PagedSearch {
  query: String,
  page:  usize,
}

/// A computed view over one page of results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'c> {
  pub items:         Vec<&'c str>,
  /// The page actually shown, after clamping.
  pub page:          usize,
  pub total_pages:   usize,
  pub total_matches: usize,
}

impl PageView<'_> {
  /// The human-readable count line, e.g. `Page 1 of 5 (471 icons)`.
  pub fn count_line(&self) -> String {
    format!(
      "Page {} of {} ({} icons)",
      self.page + 1,
      self.total_pages.max(1),
      self.total_matches
    )
  }
}

impl PagedSearch {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn query(&self) -> &str {
    &self.query
  }

  pub fn set_query(&mut self, query: impl Into<String>) {
    let query = query.into();
    if query != self.query {
      self.query = query;
      self.page = 0;
    }
  }

  pub fn push_char(&mut self, ch: char) {
    self.query.push(ch);
    self.page = 0;
  }

  pub fn pop_char(&mut self) {
    self.query.pop();
    self.page = 0;
  }

  pub fn page(&self) -> usize {
    self.page
  }

  pub fn prev_page(&mut self) {
    self.page = self.page.saturating_sub(1);
  }

  pub fn next_page(&mut self) {
    self.page += 1;
  }

  /// Filter, clamp the page and slice out the current view.
  pub fn view<'c>(&mut self, catalog: &'c Catalog) -> PageView<'c> {
    let filtered = filter(catalog, &self.query);
    let total_matches = filtered.len();
    let (items, total_pages) = paginate(&filtered, self.page, PAGE_SIZE);
    // Persist the clamp so page navigation stays in range.
    self.page = if total_pages == 0 {
      0
    } else {
      self.page.min(total_pages - 1)
    };
    PageView {
      items: items.to_vec(),
      page: self.page,
      total_pages,
      total_matches,
    }
  }
}

#[cfg(test)]
mod tests {
  use quickcheck::quickcheck;

  use super::*;

  fn fixture(names: &[&str]) -> Catalog {
    Catalog::new(names.iter().copied())
  }

  #[test]
  fn empty_query_returns_whole_catalog() {
    let catalog = fixture(&["accessibility", "activity", "anchor"]);
    assert_eq!(filter(&catalog, ""), ["accessibility", "activity", "anchor"]);
    assert_eq!(
      filter(&catalog, "   "),
      ["accessibility", "activity", "anchor"]
    );
  }

  #[test]
  fn query_is_case_folded() {
    let catalog = fixture(&["credit-card", "creeper"]);
    assert_eq!(filter(&catalog, "CREDIT"), ["credit-card"]);
  }

  #[test]
  fn matches_keep_catalog_order() {
    let catalog = fixture(&["zoom-in", "anchor", "zoom-out"]);
    assert_eq!(filter(&catalog, "zoom"), ["zoom-in", "zoom-out"]);
  }

  #[test]
  fn acc_query_fits_one_page() {
    let catalog = Catalog::builtin();
    let matches = filter(&catalog, "acc");
    assert!(!matches.is_empty());
    assert!(matches.contains(&"accessibility"));
    assert!(matches.len() <= PAGE_SIZE);

    let (page, total_pages) = paginate(&matches, 0, PAGE_SIZE);
    assert_eq!(total_pages, 1);
    assert_eq!(page, &matches[..]);
  }

  #[test]
  fn zero_matches_mean_zero_pages() {
    let (items, total_pages) = paginate(&[], 3, PAGE_SIZE);
    assert!(items.is_empty());
    assert_eq!(total_pages, 0);
  }

  #[test]
  fn page_index_is_clamped_to_last_page() {
    let names: Vec<String> = (0..250).map(|i| format!("icon-{i:03}")).collect();
    let filtered: Vec<&str> = names.iter().map(String::as_str).collect();

    let (items, total_pages) = paginate(&filtered, 99, 100);
    assert_eq!(total_pages, 3);
    assert_eq!(items.len(), 50);
    assert_eq!(items[0], "icon-200");
  }

  #[test]
  fn query_change_resets_page() {
    let mut search = PagedSearch::new();
    search.next_page();
    search.next_page();
    assert_eq!(search.page(), 2);

    search.set_query("arrow");
    assert_eq!(search.page(), 0);

    // Setting the identical query keeps the page.
    search.next_page();
    search.set_query("arrow");
    assert_eq!(search.page(), 1);
  }

  #[test]
  fn view_clamps_stale_pages_after_shrink() {
    let catalog = Catalog::builtin();
    let mut search = PagedSearch::new();
    for _ in 0..20 {
      search.next_page();
    }
    let view = search.view(&catalog);
    assert_eq!(view.page, view.total_pages - 1);
    assert_eq!(search.page(), view.page);
  }

  #[test]
  fn count_line_reads_naturally() {
    let catalog = fixture(&["smile", "smile-plus"]);
    let mut search = PagedSearch::new();
    search.set_query("smile");
    let view = search.view(&catalog);
    assert_eq!(view.count_line(), "Page 1 of 1 (2 icons)");
  }

  #[test]
  fn count_line_with_no_matches() {
    let catalog = fixture(&["smile"]);
    let mut search = PagedSearch::new();
    search.set_query("zzz");
    let view = search.view(&catalog);
    assert_eq!(view.count_line(), "Page 1 of 1 (0 icons)");
  }

  quickcheck! {
    fn filtered_is_ordered_subsequence(names: Vec<String>, query: String) -> bool {
      let names: Vec<String> = names.into_iter().map(|n| n.to_lowercase()).collect();
      let catalog = Catalog::new(names.iter().map(String::as_str));
      let filtered = filter(&catalog, &query);

      // Every match must appear in the catalog, in catalog order.
      let mut cursor = catalog.names();
      filtered
        .iter()
        .all(|m| cursor.any(|name| name == *m))
    }

    fn filtered_entries_contain_query(names: Vec<String>, query: String) -> bool {
      let names: Vec<String> = names.into_iter().map(|n| n.to_lowercase()).collect();
      let catalog = Catalog::new(names.iter().map(String::as_str));
      let needle = query.trim().to_lowercase();
      if needle.is_empty() {
        return true;
      }
      filter(&catalog, &query).iter().all(|m| m.contains(&needle))
    }

    fn pages_partition_the_filtered_set(len: usize) -> bool {
      let len = len % 1000;
      let names: Vec<String> = (0..len).map(|i| format!("icon-{i:04}")).collect();
      let filtered: Vec<&str> = names.iter().map(String::as_str).collect();

      let (_, total_pages) = paginate(&filtered, 0, PAGE_SIZE);
      if total_pages != len.div_ceil(PAGE_SIZE) {
        return false;
      }

      let mut rebuilt = Vec::new();
      for page in 0..total_pages {
        let (items, _) = paginate(&filtered, page, PAGE_SIZE);
        rebuilt.extend_from_slice(items);
      }
      rebuilt == filtered
    }
  }
}
