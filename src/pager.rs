// src/pager.rs
//! Page-token computation for the paginated job list.
//!
//! Always shows the first and last page, a window of one page either side
//! of the current page, and an ellipsis wherever the window is not
//! adjacent to the edge tokens. Callers hide the whole pager when there
//! is at most one page.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Tokens to render for `current_page` of `total_pages`.
pub fn page_tokens(current_page: u32, total_pages: u32) -> Vec<PageToken> {
    let mut tokens = Vec::new();

    if total_pages > 0 {
        tokens.push(PageToken::Page(1));
    }

    if current_page > 3 {
        tokens.push(PageToken::Ellipsis);
    }

    let window_start = current_page.saturating_sub(1).max(2);
    let window_end = (current_page + 1).min(total_pages.saturating_sub(1));
    for page in window_start..=window_end {
        tokens.push(PageToken::Page(page));
    }

    if current_page + 2 < total_pages {
        tokens.push(PageToken::Ellipsis);
    }

    if total_pages > 1 {
        tokens.push(PageToken::Page(total_pages));
    }

    tokens
}

pub fn prev_enabled(current_page: u32) -> bool {
    current_page != 1
}

pub fn next_enabled(current_page: u32, total_pages: u32) -> bool {
    !(current_page == total_pages || total_pages == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageToken::{Ellipsis, Page};

    fn pages(tokens: &[PageToken]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|token| match token {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_single_page() {
        assert_eq!(page_tokens(1, 1), vec![Page(1)]);
    }

    #[test]
    fn test_few_pages_no_ellipsis() {
        assert_eq!(page_tokens(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert_eq!(
            page_tokens(1, 4),
            vec![Page(1), Page(2), Ellipsis, Page(4)]
        );
    }

    #[test]
    fn test_middle_of_many_pages() {
        assert_eq!(
            page_tokens(5, 10),
            vec![Page(1), Ellipsis, Page(4), Page(5), Page(6), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_near_start() {
        assert_eq!(
            page_tokens(2, 10),
            vec![Page(1), Page(2), Page(3), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn test_near_end() {
        assert_eq!(
            page_tokens(9, 10),
            vec![Page(1), Ellipsis, Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn test_last_page() {
        assert_eq!(
            page_tokens(10, 10),
            vec![Page(1), Ellipsis, Page(9), Page(10)]
        );
    }

    // First, last, and current are always present; never more than one
    // ellipsis per side.
    #[test]
    fn test_token_invariants_across_grid() {
        for total in 1..=30u32 {
            for current in 1..=total {
                let tokens = page_tokens(current, total);
                let page_numbers = pages(&tokens);

                assert!(page_numbers.contains(&1), "1 missing for {current}/{total}");
                assert!(
                    page_numbers.contains(&current),
                    "current missing for {current}/{total}"
                );
                if total > 1 {
                    assert!(
                        page_numbers.contains(&total),
                        "last missing for {current}/{total}"
                    );
                }

                let ellipsis_count = tokens.iter().filter(|t| **t == Ellipsis).count();
                assert!(ellipsis_count <= 2, "too many ellipses for {current}/{total}");

                // tokens are strictly ascending, no duplicates
                let mut sorted = page_numbers.clone();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted, page_numbers, "unordered for {current}/{total}");
            }
        }
    }

    #[test]
    fn test_nav_enablement() {
        assert!(!prev_enabled(1));
        assert!(prev_enabled(2));

        assert!(!next_enabled(1, 1));
        assert!(!next_enabled(5, 5));
        assert!(next_enabled(4, 5));
        assert!(!next_enabled(1, 0));
    }
}
