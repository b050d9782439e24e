//! Service Layer
//!
//! Row sources backing the dashboard pages.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  SourceHub                   │
//! │  ┌────────────────┐  ┌────────────────────┐  │
//! │  │ AuditLogSource │  │ VecSource<Overdue> │  │
//! │  │    (paged)     │  │    (whole set)     │  │
//! │  └────────────────┘  └────────────────────┘  │
//! └──────────────────────────────────────────────┘
//!                       │
//!                       ▼ RowPage / Vec<Row>
//! ┌──────────────────────────────────────────────┐
//! │                 State Layer                  │
//! └──────────────────────────────────────────────┘
//! ```

pub mod audit_source;
pub mod fixtures;
mod hub;

pub use audit_source::{AuditLogSource, Clock};
pub use hub::*;
