//! Config - Application Configuration

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FETCH_LATENCY_MS, DEFAULT_PAGE_SIZE};
use crate::error::{Error, Result};
use crate::i18n::Locale;

/// Main application configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Language code (`en`, `pt`); detected from the system when absent
    pub locale: Option<String>,
    /// Rows requested per server page
    pub page_size: usize,
    /// Simulated latency of the row sources
    pub fetch_latency_ms: u64,
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: None,
            page_size: DEFAULT_PAGE_SIZE,
            fetch_latency_ms: DEFAULT_FETCH_LATENCY_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Check value ranges
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Invalid {
                message: "page_size must be at least 1".to_string(),
            });
        }
        if self.log_level.trim().is_empty() {
            return Err(Error::Invalid {
                message: "log_level must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Locale from the config, falling back to `system`
    pub fn resolved_locale(&self, system: &str) -> Locale {
        match self.locale.as_deref() {
            Some(code) if !code.trim().is_empty() => Locale::from_code(code),
            _ => Locale::from_code(system),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let config = AppConfig {
            page_size: 0,
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(Error::Invalid { .. })));
    }

    #[test]
    fn locale_resolution() {
        let mut config = AppConfig::default();
        assert_eq!(config.resolved_locale("pt-BR"), Locale::PtBR);
        config.locale = Some("en".to_string());
        assert_eq!(config.resolved_locale("pt-BR"), Locale::EnUS);
        config.locale = Some(" ".to_string());
        assert_eq!(config.resolved_locale("en-US"), Locale::EnUS);
    }
}
