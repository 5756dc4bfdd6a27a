//! Browser services

pub mod wallet;
