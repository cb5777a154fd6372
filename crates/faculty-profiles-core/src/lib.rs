//! Domain types and configuration for the faculty-profiles presentation layer.
//!
//! ## Summary
//! Everything the higher layers share: the profile record and its metadata,
//! permissions, vocabulary entries, the page-bootstrap configuration and the
//! application settings. No network or UI dependencies live here.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
