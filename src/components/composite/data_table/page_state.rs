//! Page State
//!
//! Pagination arithmetic for the DataTable. A `PageState` is derived once per
//! render and is the only place the pagination mode is decided: the body, the
//! navigation buttons and the footer all read from the same value.

use std::ops::Range;

/// Who owns the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationMode {
    /// The table holds the full row set and slices it itself
    Client,
    /// The caller fetched exactly one page; rows are shown verbatim
    Manual,
}

impl PaginationMode {
    /// Manual mode iff the caller supplied server page metadata
    pub fn of(manual: Option<&ManualPage>) -> Self {
        if manual.is_some() {
            PaginationMode::Manual
        } else {
            PaginationMode::Client
        }
    }
}

/// Caller-supplied page position for manual mode (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualPage {
    /// Current page, 1-based
    pub page_index: usize,
    /// Total number of pages known to the caller
    pub page_count: usize,
    /// Total number of rows known to the caller
    pub total: usize,
}

/// Navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageNav {
    Previous,
    Next,
}

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    /// Client mode: the table moved to `page`
    Moved { page: usize },
    /// Manual mode: the caller was asked to show `page`
    Requested { page: usize },
    /// Manual mode without a page-change handler; nothing happened
    Unhandled { page: usize },
    /// The button was disabled
    Blocked,
}

/// Figures shown in the table footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSummary {
    pub mode: PaginationMode,
    /// Rows currently rendered
    pub shown: usize,
    /// Total rows known
    pub total: usize,
    /// Current page, 1-based
    pub page: usize,
    pub page_count: usize,
}

/// Derived pagination state for one render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub mode: PaginationMode,
    /// Current page, 1-based
    pub page: usize,
    pub page_count: usize,
    pub page_size: usize,
    /// Indices into the row set that are visible on this page
    pub visible: Range<usize>,
    /// Total rows known (caller metadata in manual mode)
    pub total: usize,
}

impl PageState {
    /// Derive the page state.
    ///
    /// `client_page` is the table's own 0-based page index and is ignored in
    /// manual mode.
    pub fn derive(
        row_count: usize,
        page_size: usize,
        client_page: usize,
        manual: Option<ManualPage>,
    ) -> Self {
        let page_size = page_size.max(1);

        match (PaginationMode::of(manual.as_ref()), manual) {
            (PaginationMode::Manual, Some(manual)) => Self {
                mode: PaginationMode::Manual,
                page: manual.page_index,
                page_count: manual.page_count,
                page_size,
                visible: 0..row_count,
                total: manual.total,
            },
            _ => {
                let page_count = client_page_count(row_count, page_size);
                let index = client_page.min(page_count - 1);
                let start = (index * page_size).min(row_count);
                let end = (start + page_size).min(row_count);
                Self {
                    mode: PaginationMode::Client,
                    page: index + 1,
                    page_count,
                    page_size,
                    visible: start..end,
                    total: row_count,
                }
            }
        }
    }

    pub fn can_previous(&self) -> bool {
        self.page > 1
    }

    pub fn can_next(&self) -> bool {
        self.page < self.page_count
    }

    /// Target page (1-based) for a navigation, or `None` when disabled
    pub fn target(&self, nav: PageNav) -> Option<usize> {
        match nav {
            PageNav::Previous => self.can_previous().then(|| self.page - 1),
            PageNav::Next => self.can_next().then(|| self.page + 1),
        }
    }

    /// Number of rows visible on this page
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn summary(&self) -> FooterSummary {
        FooterSummary {
            mode: self.mode,
            shown: self.visible_len(),
            total: self.total,
            page: self.page,
            page_count: self.page_count,
        }
    }
}

/// Page count for client-side slicing; never less than one
pub fn client_page_count(row_count: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    row_count.div_ceil(page_size).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(rows: usize, page: usize) -> PageState {
        PageState::derive(rows, 10, page - 1, None)
    }

    fn manual(rows: usize, page_index: usize, page_count: usize) -> PageState {
        PageState::derive(
            rows,
            10,
            0,
            Some(ManualPage {
                page_index,
                page_count,
                total: page_count * 10,
            }),
        )
    }

    #[test]
    fn client_rows_per_page() {
        for len in [0usize, 1, 9, 10, 11, 25, 40] {
            let pages = client_page_count(len, 10);
            for page in 1..=pages {
                let state = client(len, page);
                let expected = 10.min(len - 10 * (page - 1));
                assert_eq!(state.visible_len(), expected, "len {len} page {page}");
                assert_eq!(state.can_next(), page * 10 < len, "len {len} page {page}");
            }
        }
    }

    #[test]
    fn client_first_page_of_25() {
        let state = client(25, 1);
        assert_eq!(state.mode, PaginationMode::Client);
        assert_eq!(state.visible, 0..10);
        assert!(!state.can_previous());
        assert!(state.can_next());
        assert_eq!(state.target(PageNav::Next), Some(2));

        let next = client(25, 2);
        assert_eq!(next.visible, 10..20);
        let last = client(25, 3);
        assert_eq!(last.visible, 20..25);
        assert!(!last.can_next());
    }

    #[test]
    fn client_page_is_clamped() {
        let state = PageState::derive(12, 10, 7, None);
        assert_eq!(state.page, 2);
        assert_eq!(state.visible, 10..12);
    }

    #[test]
    fn empty_rows_stay_on_page_one() {
        let state = client(0, 1);
        assert_eq!(state.page, 1);
        assert_eq!(state.page_count, 1);
        assert_eq!(state.visible, 0..0);
        assert_eq!(state.target(PageNav::Previous), None);
        assert_eq!(state.target(PageNav::Next), None);
    }

    #[test]
    fn manual_rows_are_verbatim() {
        for page_index in 1..=5 {
            let state = manual(3, page_index, 5);
            assert_eq!(state.mode, PaginationMode::Manual);
            assert_eq!(state.visible, 0..3);
        }
        // More rows than a page: still not sliced
        let state = manual(42, 2, 5);
        assert_eq!(state.visible_len(), 42);
    }

    #[test]
    fn manual_last_page() {
        let state = manual(4, 3, 3);
        assert!(!state.can_next());
        assert!(state.can_previous());
        assert_eq!(state.target(PageNav::Previous), Some(2));
        assert_eq!(state.target(PageNav::Next), None);
    }

    #[test]
    fn manual_out_of_range_index() {
        let below = manual(0, 0, 3);
        assert!(!below.can_previous());
        assert_eq!(below.target(PageNav::Next), Some(1));

        let above = manual(0, 9, 3);
        assert!(!above.can_next());
        assert_eq!(above.target(PageNav::Previous), Some(8));

        let no_pages = manual(0, 1, 0);
        assert!(!no_pages.can_next());
        assert!(!no_pages.can_previous());
    }

    #[test]
    fn zero_page_count_in_manual_mode_is_still_manual() {
        let state = PageState::derive(
            2,
            10,
            0,
            Some(ManualPage {
                page_index: 1,
                page_count: 0,
                total: 0,
            }),
        );
        assert_eq!(state.mode, PaginationMode::Manual);
        assert_eq!(state.visible_len(), 2);
    }

    #[test]
    fn footer_uses_caller_metadata_in_manual_mode() {
        let state = PageState::derive(
            3,
            10,
            0,
            Some(ManualPage {
                page_index: 2,
                page_count: 5,
                total: 43,
            }),
        );
        let summary = state.summary();
        assert_eq!(summary.shown, 3);
        assert_eq!(summary.total, 43);
        assert_eq!((summary.page, summary.page_count), (2, 5));
    }

    #[test]
    fn footer_uses_local_rows_in_client_mode() {
        let summary = client(25, 3).summary();
        assert_eq!(summary.mode, PaginationMode::Client);
        assert_eq!(summary.shown, 5);
        assert_eq!(summary.total, 25);
        assert_eq!((summary.page, summary.page_count), (3, 3));
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let state = PageState::derive(3, 0, 1, None);
        assert_eq!(state.page_size, 1);
        assert_eq!(state.visible, 1..2);
        assert_eq!(client_page_count(3, 0), 3);
    }
}
