/// Route component constants shared across crates
pub const API_ROUTE_COMPONENT: &str = "api";
pub const API_ROUTE_PREFIX: &str = const_str::concat!("/", API_ROUTE_COMPONENT);

pub const PROFILES_ROUTE_COMPONENT: &str = "faculty-profiles";
pub const PROFILES_API_PREFIX: &str =
    const_str::concat!(API_ROUTE_PREFIX, "/", PROFILES_ROUTE_COMPONENT);

/// Landing page users are sent to after a profile is deleted.
pub const PROFILES_LANDING_PATH: &str = const_str::concat!("/", PROFILES_ROUTE_COMPONENT);

/// Placeholder image used when a profile has no photo.
pub const DEFAULT_PHOTO_PATH: &str = "/static/images/square-placeholder.png";

/// Upper bound for photo and CV uploads, enforced client-side before any
/// request is made.
pub const MAX_ARTIFACT_SIZE: u64 = 50_000_000;

/// Extensions accepted by the photo uploader (lowercase, no dot).
pub const PHOTO_EXTENSIONS: &[&str] = &["bmp", "gif", "jpeg", "jpg", "png", "webp", "svg", "avif"];

/// Extensions accepted by the CV uploader (lowercase, no dot).
pub const CV_EXTENSIONS: &[&str] = &["doc", "docx", "pdf", "txt"];

/// Query parameter appended to artifact URLs after a mutation so the browser
/// refetches instead of serving a cached copy.
pub const CACHE_BUST_PARAM: &str = "no-cache";
