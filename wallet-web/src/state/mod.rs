//! Page-wide reactive state

pub mod theme;
pub mod wallet;
