//! AuditState - Audit Log Page State
//!
//! Owns the 1-based page number and the filters of the audit page. The table
//! only mirrors what is stored here.

use crate::components::composite::data_table::data_provider::{PageMeta, PageRequest, RowPage};
use crate::constants::DEFAULT_PAGE_SIZE;
use crate::domain::audit_log::{ActionFilter, AuditFilter, AuditLog, AuditPeriod};
use crate::error::{Error, Result};

/// State for the audit log page
#[derive(Debug, Clone)]
pub struct AuditState {
    /// Rows of the current page
    pub rows: Vec<AuditLog>,
    /// Pagination metadata of the last successful fetch
    pub meta: Option<PageMeta>,
    /// Current page (1-based)
    pub page: usize,
    /// Server page limit
    pub page_size: usize,
    pub filter: AuditFilter,
    pub loading: bool,
    /// Message of the last failed fetch
    pub error: Option<String>,
    /// Entry shown in the details dialog
    pub selected: Option<AuditLog>,
    request_seq: u64,
}

impl Default for AuditState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl AuditState {
    pub fn new(page_size: usize) -> Self {
        Self {
            rows: Vec::new(),
            meta: None,
            page: 1,
            page_size: page_size.max(1),
            filter: AuditFilter::default(),
            loading: false,
            error: None,
            selected: None,
            request_seq: 0,
        }
    }

    /// Total pages known from the last response, at least 1
    pub fn total_pages(&self) -> usize {
        self.meta.map_or(1, |meta| meta.total_pages.max(1))
    }

    /// Metadata of the last response; an empty result until one arrives
    pub fn page_meta(&self) -> PageMeta {
        self.meta
            .unwrap_or_else(|| PageMeta::for_total(0, self.page_size))
    }

    /// The request for the current page
    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Change the period filter; returns whether a refetch is needed
    pub fn set_period(&mut self, period: AuditPeriod) -> bool {
        if self.filter.period == period {
            return false;
        }
        self.filter.period = period;
        self.page = 1;
        true
    }

    /// Change the action filter; returns whether a refetch is needed
    pub fn set_action(&mut self, action: ActionFilter) -> bool {
        if self.filter.action == action {
            return false;
        }
        self.filter.action = action;
        self.page = 1;
        true
    }

    /// Move to `page`, clamped to `[1, total_pages]`; returns whether it changed
    pub fn request_page(&mut self, page: usize) -> bool {
        let page = page.clamp(1, self.total_pages());
        if page == self.page {
            return false;
        }
        self.page = page;
        true
    }

    /// Mark a fetch as started and return its sequence number
    pub fn begin_fetch(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.error = None;
        self.request_seq
    }

    /// Apply a fetch result; stale results are dropped and return `false`
    pub fn finish_fetch(&mut self, seq: u64, result: Result<RowPage<AuditLog>>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(RowPage {
                rows,
                pagination: Some(meta),
            }) => {
                self.rows = rows;
                self.meta = Some(meta);
            }
            Ok(RowPage {
                pagination: None, ..
            }) => self.fail(Error::Source {
                message: "response missing pagination metadata".to_string(),
            }),
            Err(err) => self.fail(err),
        }
        true
    }

    fn fail(&mut self, err: Error) {
        self.rows.clear();
        self.meta = None;
        self.error = Some(err.to_string());
    }

    pub fn select(&mut self, log: Option<AuditLog>) {
        self.selected = log;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_of(count: usize, total: usize) -> RowPage<AuditLog> {
        let rows = (0..count)
            .map(|i| AuditLog {
                id: i.to_string(),
                action: "USER_LOGIN".to_string(),
                details: None,
                timestamp: chrono::Utc::now(),
                user: None,
            })
            .collect();
        RowPage {
            rows,
            pagination: Some(PageMeta::for_total(total, 10)),
        }
    }

    #[test]
    fn filters_reset_page() {
        let mut state = AuditState::default();
        let seq = state.begin_fetch();
        state.finish_fetch(seq, Ok(page_of(10, 43)));
        assert!(state.request_page(3));
        assert_eq!(state.page, 3);

        assert!(state.set_period(AuditPeriod::Week));
        assert_eq!(state.page, 1);

        state.request_page(2);
        assert!(state.set_action(ActionFilter::Payments));
        assert_eq!(state.page, 1);
        assert!(!state.set_action(ActionFilter::Payments));
    }

    #[test]
    fn requested_page_is_clamped() {
        let mut state = AuditState::default();
        let seq = state.begin_fetch();
        state.finish_fetch(seq, Ok(page_of(10, 43)));
        assert_eq!(state.total_pages(), 5);

        assert!(state.request_page(9));
        assert_eq!(state.page, 5);
        assert!(state.request_page(0));
        assert_eq!(state.page, 1);
        assert!(!state.request_page(1));
    }

    #[test]
    fn stale_responses_are_dropped() {
        let mut state = AuditState::default();
        let first = state.begin_fetch();
        let second = state.begin_fetch();

        assert!(!state.finish_fetch(first, Ok(page_of(10, 100))));
        assert!(state.loading);
        assert!(state.rows.is_empty());

        assert!(state.finish_fetch(second, Ok(page_of(3, 3))));
        assert!(!state.loading);
        assert_eq!(state.rows.len(), 3);
        assert_eq!(state.page_meta(), PageMeta { total: 3, total_pages: 1 });
    }

    #[test]
    fn failed_fetch_sets_error() {
        let mut state = AuditState::default();
        let seq = state.begin_fetch();
        state.finish_fetch(seq, Ok(page_of(10, 43)));

        let seq = state.begin_fetch();
        let err = Error::Source {
            message: "timeout".to_string(),
        };
        assert!(state.finish_fetch(seq, Err(err)));
        assert!(state.rows.is_empty());
        assert!(state.error.as_deref().unwrap_or_default().contains("timeout"));
        assert_eq!(state.total_pages(), 1);
        assert_eq!(state.page_meta(), PageMeta { total: 0, total_pages: 1 });

        state.begin_fetch();
        assert_eq!(state.error, None);
    }

    #[test]
    fn page_without_metadata_is_an_error() {
        let mut state = AuditState::default();
        let seq = state.begin_fetch();
        let page = RowPage {
            rows: page_of(10, 10).rows,
            pagination: None,
        };
        assert!(state.finish_fetch(seq, Ok(page)));
        assert!(!state.loading);
        assert_eq!(state.meta, None);
        assert!(state.rows.is_empty());
        assert!(state
            .error
            .as_deref()
            .unwrap_or_default()
            .contains("missing pagination metadata"));
    }
}
