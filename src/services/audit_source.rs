//! AuditLogSource - Paged Audit Log Queries
//!
//! Serves audit logs newest first, filtered by period and action family,
//! one page at a time with server-style pagination metadata.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::components::composite::data_table::data_provider::{
    paginate, PageRequest, PagedSource, RowPage,
};
use crate::domain::audit_log::{AuditFilter, AuditLog};
use crate::error::Result;

/// Time reference for period filters
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(at) => *at,
        }
    }
}

/// In-memory audit log store
pub struct AuditLogSource {
    logs: Vec<AuditLog>,
    clock: Clock,
}

impl AuditLogSource {
    /// Create a source using the system clock
    pub fn new(logs: Vec<AuditLog>) -> Self {
        Self::with_clock(logs, Clock::System)
    }

    /// Create a source with an explicit clock
    pub fn with_clock(mut logs: Vec<AuditLog>, clock: Clock) -> Self {
        logs.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Self { logs, clock }
    }
}

impl PagedSource for AuditLogSource {
    type Row = AuditLog;
    type Query = AuditFilter;

    fn fetch(&self, filter: &AuditFilter, request: PageRequest) -> Result<RowPage<AuditLog>> {
        let now = self.clock.now();
        let matching: Vec<AuditLog> = self
            .logs
            .iter()
            .filter(|log| filter.matches(log, now))
            .cloned()
            .collect();

        debug!(
            page = request.page,
            limit = request.limit,
            days = filter.period.days(),
            action = filter.action.value(),
            matching = matching.len(),
            "Fetching audit logs"
        );

        paginate(&matching, request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::data_provider::PageMeta;
    use crate::domain::audit_log::{ActionFilter, AuditPeriod};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn source() -> AuditLogSource {
        // 30 entries, one every 2 days, alternating families
        let logs = (0..30)
            .map(|i| AuditLog {
                id: format!("log-{i}"),
                action: if i % 2 == 0 {
                    "PATIENT_UPDATED".to_string()
                } else {
                    "PAYMENT_CREATED".to_string()
                },
                details: None,
                timestamp: now() - Duration::days(i * 2) - Duration::minutes(5),
                user: None,
            })
            .rev()
            .collect();
        AuditLogSource::with_clock(logs, Clock::Fixed(now()))
    }

    #[test]
    fn newest_first() {
        let page = source()
            .fetch(&AuditFilter::default(), PageRequest::new(1, 10))
            .unwrap();
        assert_eq!(page.rows[0].id, "log-0");
        assert!(page.rows.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn period_limits_rows_and_metadata() {
        let filter = AuditFilter {
            period: AuditPeriod::Week,
            action: ActionFilter::All,
        };
        // days 0, 2, 4, 6
        let page = source().fetch(&filter, PageRequest::new(1, 10)).unwrap();
        assert_eq!(page.rows.len(), 4);
        assert_eq!(page.pagination, Some(PageMeta { total: 4, total_pages: 1 }));
    }

    #[test]
    fn action_family_and_paging() {
        let filter = AuditFilter {
            period: AuditPeriod::Quarter,
            action: ActionFilter::Payments,
        };
        let source = source();
        let first = source.fetch(&filter, PageRequest::new(1, 10)).unwrap();
        assert_eq!(first.pagination, Some(PageMeta { total: 15, total_pages: 2 }));
        assert!(first.rows.iter().all(|log| log.action.starts_with("PAYMENT_")));

        let second = source.fetch(&filter, PageRequest::new(2, 10)).unwrap();
        assert_eq!(second.rows.len(), 5);
    }
}
