use serde::{Deserialize, Serialize};

/// Pages always shown at the start of the pager.
pub const LEADING_PAGES: u32 = 2;
/// Pages shown before the current one.
pub const PAGES_BEFORE_CURRENT: u32 = 2;
/// Pages shown after the current one.
pub const PAGES_AFTER_CURRENT: u32 = 4;
/// Pages always shown at the end of the pager.
pub const TRAILING_PAGES: u32 = 2;

/// Builds the page numbers shown by a pager over `1..=total_pages`.
///
/// The result holds three runs (leading edge, window around
/// `current_page`, trailing edge) in ascending order. Overlapping runs are
/// merged. `None` marks a gap between two runs that do not touch.
fn get_pages(
    total_pages: u32,
    current_page: u32,
    left_edge: u32,
    left_current: u32,
    right_current: u32,
    right_edge: u32,
) -> Vec<Option<u32>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// List payload returned by the search endpoints.
///
/// `totalCount` is only present when the search asked for it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult<T> {
    pub items: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

impl<T> PagedResult<T> {
    pub fn new(items: Vec<T>, total_count: Option<u64>) -> Self {
        Self { items, total_count }
    }

    /// Number of pages for `page_size`, or `None` without a total count.
    pub fn total_pages(&self, page_size: u32) -> Option<u32> {
        let total = self.total_count?;
        if page_size == 0 {
            return Some(0);
        }
        let pages = total.div_ceil(u64::from(page_size));
        Some(u32::try_from(pages).unwrap_or(u32::MAX))
    }

    /// Page window for a pager, shaped by [`LEADING_PAGES`],
    /// [`PAGES_BEFORE_CURRENT`], [`PAGES_AFTER_CURRENT`] and [`TRAILING_PAGES`].
    /// Page 0 is treated as page 1.
    pub fn page_links(&self, current_page: u32, page_size: u32) -> Vec<Option<u32>> {
        let current_page = if current_page == 0 { 1 } else { current_page };
        match self.total_pages(page_size) {
            Some(total_pages) => get_pages(
                total_pages,
                current_page,
                LEADING_PAGES,
                PAGES_BEFORE_CURRENT,
                PAGES_AFTER_CURRENT,
                TRAILING_PAGES,
            ),
            None => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pages_without_gaps_when_short() {
        assert_eq!(
            get_pages(5, 3, 2, 2, 4, 2),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn pages_with_gaps_on_both_sides() {
        assert_eq!(
            get_pages(30, 15, 2, 2, 4, 2),
            vec![
                Some(1),
                Some(2),
                None,
                Some(13),
                Some(14),
                Some(15),
                Some(16),
                Some(17),
                Some(18),
                Some(19),
                None,
                Some(29),
                Some(30),
            ]
        );
    }

    #[test]
    fn page_links_near_the_end() {
        let result = PagedResult::new(vec![()], Some(200));
        assert_eq!(
            result.page_links(19, 10),
            vec![Some(1), Some(2), None, Some(17), Some(18), Some(19), Some(20)]
        );
    }

    #[test]
    fn no_pages_for_empty_result() {
        assert!(get_pages(0, 1, 2, 2, 4, 2).is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        let result = PagedResult::new(vec![1, 2, 3], Some(41));
        assert_eq!(result.total_pages(20), Some(3));
        assert_eq!(result.total_pages(0), Some(0));
    }

    #[test]
    fn page_links_need_a_total_count() {
        let result = PagedResult::new(vec![1], None);
        assert_eq!(result.total_pages(10), None);
        assert!(result.page_links(1, 10).is_empty());
    }

    #[test]
    fn page_links_treat_zero_as_first_page() {
        let result = PagedResult::new(vec!["a"], Some(30));
        assert_eq!(
            result.page_links(0, 10),
            vec![Some(1), Some(2), Some(3)]
        );
    }
}
