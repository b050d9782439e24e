//! Audit Logs Controller
//!
//! Owns page and filter changes for the audit page and runs fetches off the
//! main thread. Only the newest fetch is applied.

use gpui::{App, AppContext};
use tracing::{debug, error};

use crate::app::entities::AppEntities;
use crate::domain::audit_log::{ActionFilter, AuditLog, AuditPeriod};

/// Audit logs page controller
#[derive(Clone)]
pub struct AuditLogsController {
    entities: AppEntities,
}

impl AuditLogsController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Refetch the current page
    pub fn refresh(&self, cx: &mut App) {
        self.fetch(cx);
    }

    /// Go to a 1-based page, clamped to the known page range
    pub fn go_to_page(&self, page: usize, cx: &mut App) {
        let changed = self
            .entities
            .audit
            .update(cx, |state, _cx| state.request_page(page));
        if changed {
            self.fetch(cx);
        }
    }

    /// Apply a period filter select value
    pub fn set_period(&self, value: &str, cx: &mut App) {
        let Some(period) = AuditPeriod::from_value(value) else {
            debug!(value, "Unknown period value");
            return;
        };
        let changed = self
            .entities
            .audit
            .update(cx, |state, _cx| state.set_period(period));
        if changed {
            self.fetch(cx);
        }
    }

    /// Apply an action filter select value
    pub fn set_action(&self, value: &str, cx: &mut App) {
        let Some(action) = ActionFilter::from_value(value) else {
            debug!(value, "Unknown action filter value");
            return;
        };
        let changed = self
            .entities
            .audit
            .update(cx, |state, _cx| state.set_action(action));
        if changed {
            self.fetch(cx);
        }
    }

    /// Show or hide the details dialog
    pub fn select(&self, log: Option<AuditLog>, cx: &mut App) {
        self.entities.audit.update(cx, |state, cx| {
            state.select(log);
            cx.notify();
        });
    }

    /// Start a fetch for the current page and filters
    fn fetch(&self, cx: &mut App) {
        let (seq, filter, request) = self.entities.audit.update(cx, |state, cx| {
            let seq = state.begin_fetch();
            cx.notify();
            (seq, state.filter, state.request())
        });

        debug!(seq, page = request.page, "Audit fetch started");

        let sources = self.entities.sources.clone();
        let audit = self.entities.audit.clone();
        cx.spawn(async move |cx| {
            cx.background_executor().timer(sources.latency()).await;
            let result = cx
                .background_spawn(async move { sources.fetch_audit(&filter, request) })
                .await;

            if let Err(err) = &result {
                error!(seq, error = %err, "Failed to load audit logs");
            }

            let applied = audit.update(cx, |state, cx| {
                let applied = state.finish_fetch(seq, result);
                if applied {
                    cx.notify();
                }
                applied
            });
            match applied {
                Ok(true) => debug!(seq, "Audit fetch applied"),
                Ok(false) => debug!(seq, "Stale audit fetch dropped"),
                Err(_) => debug!(seq, "Audit page gone before fetch completed"),
            }
        })
        .detach();
    }
}
