//! Primitive Components
//!
//! Basic building blocks like buttons, badges and selectors.

pub mod badge;
pub mod button;
pub mod select;
