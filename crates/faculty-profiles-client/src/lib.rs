//! REST client for the faculty-profiles API.
//!
//! ## Summary
//! Thin wrapper over the HTTP verbs the server exposes, plus the error-body
//! serializer the forms consume and the cancellation token that ties
//! in-flight requests to a component's mount lifetime. No retry logic lives
//! here; a failed call propagates to the caller untouched.

pub mod api;
pub mod cancel;
pub mod error;

pub use api::{FileUpload, ListQuery, ProfileApi, RequestOptions};
pub use cancel::{CancelGuard, CancelToken};
pub use error::{ApiError, ApiResult, ErrorBody, FieldError, serialize_error};
