//! Faculty profiles - integration test support.
//!
//! This crate re-exports the workspace crates so integration tests can use
//! `faculty_profiles_test::` paths.

pub use faculty_profiles_client as client;
pub use faculty_profiles_core as core;
pub use faculty_profiles_ui as ui;
