//! Navigation - Dashboard Pages
//!
//! Defines the pages reachable from the sidebar.

use serde::{Deserialize, Serialize};

/// Available pages in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivePage {
    /// Audit trail, paged by the server
    #[default]
    AuditLogs,
    /// Overdue installments, paged locally
    OverdueInstallments,
}

impl ActivePage {
    /// Get the translation key for the page title
    pub fn title_key(&self) -> &'static str {
        match self {
            ActivePage::AuditLogs => "nav-audit-logs",
            ActivePage::OverdueInstallments => "nav-overdue",
        }
    }

    /// Element id of the sidebar entry
    pub fn nav_id(&self) -> &'static str {
        match self {
            ActivePage::AuditLogs => "nav-audit-logs",
            ActivePage::OverdueInstallments => "nav-overdue",
        }
    }

    /// Get all available pages for sidebar
    pub fn all() -> &'static [ActivePage] {
        &[ActivePage::AuditLogs, ActivePage::OverdueInstallments]
    }
}
