//! Layout Components
//!
//! Header and sidebar of the dashboard shell.

pub mod header;
pub mod sidebar;
