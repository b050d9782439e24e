//! Utilities - Formatting, Config Storage and Logging

pub mod config_store;
pub mod format;
pub mod logging;
