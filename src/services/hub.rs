//! Source Hub
//!
//! Owns the row sources behind the dashboard pages and the simulated network
//! latency applied before each fetch completes.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use crate::components::composite::data_table::data_provider::{
    PageRequest, PagedSource, RowPage, RowSource, VecSource,
};
use crate::domain::audit_log::{AuditFilter, AuditLog};
use crate::domain::installment::OverdueInstallment;
use crate::error::Result;
use crate::services::audit_source::AuditLogSource;
use crate::services::fixtures;

/// Shared handle to every row source
#[derive(Clone)]
pub struct SourceHub {
    audit: Arc<AuditLogSource>,
    overdue: Arc<VecSource<OverdueInstallment>>,
    latency: Duration,
}

impl SourceHub {
    /// Create a hub from explicit sources
    pub fn new(
        audit: AuditLogSource,
        overdue: VecSource<OverdueInstallment>,
        latency: Duration,
    ) -> Self {
        Self {
            audit: Arc::new(audit),
            overdue: Arc::new(overdue),
            latency,
        }
    }

    /// Create a hub backed by the sample clinic data
    pub fn with_fixtures(latency: Duration) -> Self {
        let now = Utc::now();
        let logs = fixtures::audit_logs(now);
        let installments = fixtures::overdue_installments(now.date_naive());
        info!(
            audit_logs = logs.len(),
            overdue_installments = installments.len(),
            latency_ms = latency.as_millis() as u64,
            "Source hub ready"
        );
        Self::new(
            AuditLogSource::new(logs),
            VecSource::new(installments),
            latency,
        )
    }

    /// Delay applied before a fetch result is delivered
    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Fetch one page of audit logs
    pub fn fetch_audit(
        &self,
        filter: &AuditFilter,
        request: PageRequest,
    ) -> Result<RowPage<AuditLog>> {
        self.audit.fetch(filter, request)
    }

    /// Fetch every overdue installment
    pub fn fetch_overdue(&self) -> Result<Vec<OverdueInstallment>> {
        self.overdue.fetch_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::composite::data_table::data_provider::PageMeta;

    #[test]
    fn fixture_hub_serves_both_pages() {
        let hub = SourceHub::with_fixtures(Duration::ZERO);
        assert_eq!(hub.latency(), Duration::ZERO);

        let page = hub
            .fetch_audit(&AuditFilter::default(), PageRequest::new(1, 10))
            .unwrap();
        assert_eq!(page.rows.len(), 10);
        let meta = page.pagination.unwrap();
        assert_eq!(meta, PageMeta::for_total(meta.total, 10));

        let overdue = hub.fetch_overdue().unwrap();
        assert!(!overdue.is_empty());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let hub = SourceHub::with_fixtures(Duration::ZERO);
        assert!(hub
            .fetch_audit(&AuditFilter::default(), PageRequest::new(1, 0))
            .is_err());
    }
}
