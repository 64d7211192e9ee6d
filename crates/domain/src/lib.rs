//! Shared types for imaging-locator: configuration, errors and structured
//! trace events.

pub mod config;
pub mod error;
pub mod trace;
