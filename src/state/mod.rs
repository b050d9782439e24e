//! State - GPUI Entity State Modules
//!
//! Each state module represents a distinct piece of application state,
//! split by page so a fetch on one page never re-renders the other.

pub mod audit_state;
pub mod config_state;
pub mod i18n_state;
pub mod navigation_state;
pub mod overdue_state;
