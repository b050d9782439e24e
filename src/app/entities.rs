//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split per page so a fetch on one page never re-renders the other.

use std::path::PathBuf;
use std::time::Duration;

use gpui::{App, AppContext, Entity, Global};

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::services::SourceHub;
use crate::state::{
    audit_state::AuditState, config_state::ConfigState, i18n_state::I18nState,
    navigation_state::NavigationState, overdue_state::OverdueState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Application configuration state
    pub config: Entity<ConfigState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
    /// Sidebar navigation state
    pub navigation: Entity<NavigationState>,
    /// Audit log page state
    pub audit: Entity<AuditState>,
    /// Overdue installments page state
    pub overdue: Entity<OverdueState>,
    /// Row sources behind the pages
    pub sources: SourceHub,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: AppConfig, config_path: Option<PathBuf>, locale: Locale, cx: &mut App) -> Self {
        let page_size = config.page_size;
        let sources = SourceHub::with_fixtures(Duration::from_millis(config.fetch_latency_ms));

        Self {
            config: cx.new(|_| ConfigState::new(config, config_path)),
            i18n: cx.new(|_| I18nState::new(locale)),
            navigation: cx.new(|_| NavigationState::default()),
            audit: cx.new(|_| AuditState::new(page_size)),
            overdue: cx.new(|_| OverdueState::default()),
            sources,
        }
    }
}
