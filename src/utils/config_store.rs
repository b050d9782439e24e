//! ConfigStore - Local Configuration Storage
//!
//! The config file lives in the platform config directory:
//! - **Linux**: `~/.config/easycore-admin/`
//! - **macOS**: `~/Library/Application Support/br.easycore.easycore-admin/`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\easycore\easycore-admin\config\`

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::{info, warn};

use crate::constants::CONFIG_FILE_NAME;
use crate::domain::config::AppConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("br", "easycore", "easycore-admin").ok_or(Error::ConfigDir { kind: "project" })
}

/// Get or create the application's configuration directory
pub fn config_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(dir.to_path_buf())
}

/// Get or create the application's log directory
pub fn log_dir() -> Result<PathBuf> {
    let dirs = project_dirs()?;
    let dir = dirs.data_local_dir().join("logs");
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

/// Path of the config file
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Parse config file contents. Empty contents yield defaults.
pub fn parse_config(content: &str) -> Result<AppConfig> {
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the config at `path`. A missing file yields defaults.
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Save the config to `path`
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    info!(path = ?path, "Saved config file");
    Ok(())
}

/// Load the config from the platform location, falling back to defaults.
///
/// Returns the config, its path when one could be determined, and the
/// error that forced the fallback, if any. Nothing is logged here because
/// logging is set up from the returned config.
pub fn load_or_default() -> (AppConfig, Option<PathBuf>, Option<Error>) {
    let path = match config_path() {
        Ok(path) => path,
        Err(err) => return (AppConfig::default(), None, Some(err)),
    };
    match load_config(&path) {
        Ok(config) => (config, Some(path), None),
        Err(err) => (AppConfig::default(), Some(path), Some(err)),
    }
}

/// Persist the config if it has a path; failures are logged, not returned
pub fn persist(path: Option<&Path>, config: &AppConfig) {
    let Some(path) = path else {
        return;
    };
    if let Err(err) = save_config(path, config) {
        warn!(error = %err, path = ?path, "Failed to save config file");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), AppConfig::default());
        assert_eq!(parse_config("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse_config("locale = \"pt\"\npage_size = 25\n").unwrap();
        assert_eq!(config.locale.as_deref(), Some("pt"));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.fetch_latency_ms, AppConfig::default().fetch_latency_ms);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = parse_config("theme = \"dark\"\n").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        assert!(matches!(parse_config("page_size = \"ten\""), Err(Error::TomlDe { .. })));
        assert!(matches!(parse_config("page_size = 0"), Err(Error::Invalid { .. })));
    }

    #[test]
    fn save_then_load() {
        let path = std::env::temp_dir().join(format!("easycore-admin-test-{}.toml", std::process::id()));
        let config = AppConfig {
            locale: Some("pt".to_string()),
            page_size: 20,
            ..AppConfig::default()
        };
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
        let _ = fs::remove_file(&path);

        assert_eq!(load_config(&path).unwrap(), AppConfig::default());
    }
}
