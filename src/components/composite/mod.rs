//! Composite Components
//!
//! Components assembled from primitives: the data table and the modal shell.

pub mod data_table;
pub mod modal;
