//! Row Sources
//!
//! Abstraction over where table rows come from. Whole-set sources feed
//! client-paged tables; paged sources feed manually paged tables one page at
//! a time.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Server-side pagination metadata returned alongside a page of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total rows matching the query
    pub total: usize,
    /// Total pages for the requested limit
    pub total_pages: usize,
}

impl PageMeta {
    /// Metadata for `total` rows split into pages of `limit`
    pub fn for_total(total: usize, limit: usize) -> Self {
        Self {
            total,
            total_pages: total.div_ceil(limit.max(1)).max(1),
        }
    }
}

/// One page of rows plus optional pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RowPage<R> {
    pub rows: Vec<R>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageMeta>,
}

/// A request for one page (1-based)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Offset of the first row of this page
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// Source that returns every row at once
pub trait RowSource: Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;

    /// Fetch all rows
    fn fetch_all(&self) -> Result<Vec<Self::Row>>;
}

/// Source that returns one page of a filtered query
pub trait PagedSource: Send + Sync + 'static {
    type Row: Clone + Send + Sync + 'static;
    type Query: Clone + Send + Sync + 'static;

    /// Fetch one page of rows matching `query`
    fn fetch(&self, query: &Self::Query, request: PageRequest) -> Result<RowPage<Self::Row>>;
}

/// Slice one page out of an ordered row set
pub fn paginate<R: Clone>(rows: &[R], request: PageRequest) -> Result<RowPage<R>> {
    if request.limit == 0 {
        return Err(Error::Invalid {
            message: "page limit must be at least 1".to_string(),
        });
    }

    let meta = PageMeta::for_total(rows.len(), request.limit);
    let start = request.offset().min(rows.len());
    let end = start.saturating_add(request.limit).min(rows.len());

    Ok(RowPage {
        rows: rows[start..end].to_vec(),
        pagination: Some(meta),
    })
}

/// Simple in-memory row source
pub struct VecSource<R> {
    rows: Arc<Vec<R>>,
}

impl<R: Clone + Send + Sync + 'static> VecSource<R> {
    /// Create a new VecSource
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            rows: Arc::new(rows),
        }
    }

    /// Get all rows
    pub fn all(&self) -> &[R] {
        &self.rows
    }
}

impl<R: Clone + Send + Sync + 'static> RowSource for VecSource<R> {
    type Row = R;

    fn fetch_all(&self) -> Result<Vec<R>> {
        Ok(self.rows.as_ref().clone())
    }
}

impl<R: Clone + Send + Sync + 'static> PagedSource for VecSource<R> {
    type Row = R;
    type Query = ();

    fn fetch(&self, _query: &(), request: PageRequest) -> Result<RowPage<R>> {
        paginate(&self.rows, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_meta_rounds_up() {
        assert_eq!(PageMeta::for_total(25, 10).total_pages, 3);
        assert_eq!(PageMeta::for_total(30, 10).total_pages, 3);
        assert_eq!(PageMeta::for_total(0, 10).total_pages, 1);
    }

    #[test]
    fn page_meta_wire_format() {
        let meta: PageMeta = serde_json::from_str(r#"{"total": 43, "totalPages": 5}"#).unwrap();
        assert_eq!(meta, PageMeta { total: 43, total_pages: 5 });

        let page: RowPage<u32> = serde_json::from_str(r#"{"rows": [1, 2]}"#).unwrap();
        assert_eq!(page.pagination, None);
        assert_eq!(page.rows, vec![1, 2]);
    }

    #[test]
    fn paged_source_slices() {
        let source = VecSource::new((1..=25).collect::<Vec<u32>>());

        let page = source.fetch(&(), PageRequest::new(3, 10)).unwrap();
        assert_eq!(page.rows, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.pagination, Some(PageMeta { total: 25, total_pages: 3 }));

        let beyond = source.fetch(&(), PageRequest::new(7, 10)).unwrap();
        assert!(beyond.rows.is_empty());
        assert_eq!(beyond.pagination, Some(PageMeta { total: 25, total_pages: 3 }));
    }

    #[test]
    fn page_zero_reads_like_page_one() {
        let source = VecSource::new((1..=5).collect::<Vec<u32>>());
        let page = source.fetch(&(), PageRequest::new(0, 2)).unwrap();
        assert_eq!(page.rows, vec![1, 2]);
    }

    #[test]
    fn zero_limit_is_rejected() {
        let source = VecSource::new(vec![1u32, 2, 3]);
        assert!(matches!(
            source.fetch(&(), PageRequest::new(1, 0)),
            Err(Error::Invalid { .. })
        ));
    }

    #[test]
    fn fetch_all_returns_everything() {
        let source = VecSource::new(vec!["a", "b"]);
        assert_eq!(source.fetch_all().unwrap(), vec!["a", "b"]);
        assert_eq!(source.all().len(), 2);
    }
}
