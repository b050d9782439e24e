//! Domain - Pure Data Structures
//!
//! These types don't depend on GPUI and represent the business domain.

pub mod audit_log;
pub mod config;
pub mod installment;
