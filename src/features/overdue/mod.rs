//! Overdue Installments Feature
//!
//! Full list of overdue installments, paged locally by the table.

pub mod controller;
pub mod page;
