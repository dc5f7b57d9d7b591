// src/services/pagination.rs

use serde::Deserialize;

use crate::config::QUESTIONS_PER_PAGE;

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(number: u64) -> Self {
        Page(number.max(1))
    }

    /// Parses the `page` query parameter.
    /// Absent, non-numeric, negative or zero values fall back to page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<u64>().ok())
            .map(Page::new)
            .unwrap_or(Page::FIRST)
    }

    pub fn number(self) -> u64 {
        self.0
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

/// Query string accepted by every paginated endpoint.
///
/// Kept as a raw string so that `?page=abc` degrades to page 1 instead of
/// failing extraction.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn page(&self) -> Page {
        Page::from_param(self.page.as_deref())
    }
}

/// Returns the `page`-th slice of `items` with the fixed page size.
pub fn paginate<T>(items: &[T], page: Page) -> &[T] {
    paginate_with_size(items, page, QUESTIONS_PER_PAGE)
}

fn paginate_with_size<T>(items: &[T], page: Page, page_size: usize) -> &[T] {
    let offset = (page.number() - 1).saturating_mul(page_size as u64);
    let start = match usize::try_from(offset) {
        Ok(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn twenty_five_items_split_into_three_pages() {
        let all = items(25);
        assert_eq!(paginate(&all, Page::new(1)), &all[0..10]);
        assert_eq!(paginate(&all, Page::new(2)), &all[10..20]);
        assert_eq!(paginate(&all, Page::new(3)), &all[20..25]);
        assert!(paginate(&all, Page::new(4)).is_empty());
    }

    #[test]
    fn page_length_matches_formula_and_pages_reconstruct_input() {
        for n in [0usize, 1, 9, 10, 11, 20, 37] {
            let all = items(n);
            let mut rebuilt = Vec::new();
            for p in 1..=6u64 {
                let page = paginate(&all, Page::new(p));
                let expected = n.saturating_sub((p as usize - 1) * QUESTIONS_PER_PAGE)
                    .min(QUESTIONS_PER_PAGE);
                assert_eq!(page.len(), expected, "n={n} page={p}");
                rebuilt.extend_from_slice(page);
            }
            assert_eq!(rebuilt, all);
        }
    }

    #[test]
    fn huge_page_is_empty_not_overflow() {
        let all = items(5);
        assert!(paginate(&all, Page::new(9_999_999_999)).is_empty());
        assert!(paginate(&all, Page::new(u64::MAX)).is_empty());
    }

    #[test]
    fn page_param_defaults_to_first() {
        assert_eq!(Page::from_param(None), Page::FIRST);
        assert_eq!(Page::from_param(Some("abc")), Page::FIRST);
        assert_eq!(Page::from_param(Some("-3")), Page::FIRST);
        assert_eq!(Page::from_param(Some("0")), Page::FIRST);
        assert_eq!(Page::from_param(Some("3")), Page::new(3));
        assert_eq!(Page::from_param(Some("9999999999")).number(), 9_999_999_999);
    }

    #[test]
    fn custom_page_size() {
        let all = items(7);
        assert_eq!(paginate_with_size(&all, Page::new(2), 3), &[3, 4, 5]);
        assert_eq!(paginate_with_size(&all, Page::new(3), 3), &[6]);
    }
}
