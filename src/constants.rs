//! UI Constants
//!
//! Centralized constants for layout, paging and data sources.

/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sidebar navigation width in pixels
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Header height in pixels
pub const HEADER_HEIGHT: f32 = 56.0;

/// Default window dimensions
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 820.0;

/// Simulated latency of the in-memory row sources
pub const DEFAULT_FETCH_LATENCY_MS: u64 = 250;

/// Audit details preview length (characters)
pub const AUDIT_DETAILS_PREVIEW_LEN: usize = 100;

/// Days past due after which an installment counts as a default
pub const DEFAULT_THRESHOLD_DAYS: i64 = 60;

/// Config and log file names
pub const CONFIG_FILE_NAME: &str = "easycore-admin.toml";
pub const LOG_FILE_NAME: &str = "easycore-admin.log";
