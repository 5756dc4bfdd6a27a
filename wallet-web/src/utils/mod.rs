//! Utilities

pub mod chains;
pub mod constants;
pub mod format;
