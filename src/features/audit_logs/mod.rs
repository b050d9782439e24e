//! Audit Logs Feature
//!
//! Server-paged audit trail with period and action filters.

pub mod controller;
pub mod page;
