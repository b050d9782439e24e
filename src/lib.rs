//! EasyCore Admin Library
//!
//! This crate provides the administrative dashboard of the EasyCore dental
//! clinic system: a generic data table with client-side and server-driven
//! pagination, and the audit log and overdue installment pages built on it.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
