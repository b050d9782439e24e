//! ConfigState - Application Configuration State

use std::path::PathBuf;

use crate::domain::config::AppConfig;
use crate::i18n::Locale;
use crate::utils::config_store;

/// State for application configuration
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration
    pub config: AppConfig,
    /// Where the configuration is persisted, if a config dir exists
    pub path: Option<PathBuf>,
}

impl ConfigState {
    pub fn new(config: AppConfig, path: Option<PathBuf>) -> Self {
        Self { config, path }
    }

    /// Remember the chosen locale and write it to disk
    pub fn set_locale(&mut self, locale: Locale) {
        self.config.locale = Some(locale.code().to_string());
        config_store::persist(self.path.as_deref(), &self.config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_locale_without_path_only_updates_memory() {
        let mut state = ConfigState::new(AppConfig::default(), None);
        state.set_locale(Locale::PtBR);
        assert_eq!(state.config.locale.as_deref(), Some("pt"));
    }
}
