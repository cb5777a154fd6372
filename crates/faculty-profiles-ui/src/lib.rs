//! Headless UI layer for faculty profiles.
//!
//! ## Summary
//! Controllers and view models for every screen the plugin ships: the
//! create/edit form with its submission pipeline, the photo and CV
//! uploaders, the delete-confirmation modal, the danger zone, and the
//! read-only card/list views. Controllers own their UI state and drive the
//! API client directly on user action; rendering is left to the host shell.

pub mod form;
pub mod views;
