//! Overdue Installments Controller

use gpui::{App, AppContext};
use tracing::{debug, error};

use crate::app::entities::AppEntities;

/// Overdue installments page controller
#[derive(Clone)]
pub struct OverdueController {
    entities: AppEntities,
}

impl OverdueController {
    /// Create a new controller
    pub fn new(entities: AppEntities) -> Self {
        Self { entities }
    }

    /// Fetch the full installment list
    pub fn refresh(&self, cx: &mut App) {
        let seq = self.entities.overdue.update(cx, |state, cx| {
            let seq = state.begin_fetch();
            cx.notify();
            seq
        });

        let sources = self.entities.sources.clone();
        let overdue = self.entities.overdue.clone();
        cx.spawn(async move |cx| {
            cx.background_executor().timer(sources.latency()).await;
            let result = cx
                .background_spawn(async move { sources.fetch_overdue() })
                .await;

            match &result {
                Ok(rows) => debug!(seq, count = rows.len(), "Overdue installments loaded"),
                Err(err) => error!(seq, error = %err, "Failed to load overdue installments"),
            }

            let applied = overdue.update(cx, |state, cx| {
                let applied = state.finish_fetch(seq, result);
                if applied {
                    cx.notify();
                }
                applied
            });
            if !matches!(applied, Ok(true)) {
                debug!(seq, "Overdue fetch result dropped");
            }
        })
        .detach();
    }
}
