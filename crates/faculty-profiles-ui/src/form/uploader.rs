//! Photo and CV uploaders.
//!
//! Both artifacts share one controller: the file is gated client-side on
//! extension and size before any request is made, and after every successful
//! mutation the artifact link gets a fresh cache-busting token so the next
//! render refetches instead of serving a stale copy.

use uuid::Uuid;

use faculty_profiles_client::api::{FileUpload, ProfileApi, RequestOptions};
use faculty_profiles_client::cancel::CancelGuard;
use faculty_profiles_client::error::{ApiError, ApiResult, serialize_error};
use faculty_profiles_core::config::PageConfig;
use faculty_profiles_core::constants::{
    CACHE_BUST_PARAM, CV_EXTENSIONS, DEFAULT_PHOTO_PATH, MAX_ARTIFACT_SIZE, PHOTO_EXTENSIONS,
};

/// Which artifact an uploader manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    Photo,
    Cv,
}

impl ArtifactKind {
    #[must_use]
    pub fn accepted_extensions(self) -> &'static [&'static str] {
        match self {
            Self::Photo => PHOTO_EXTENSIONS,
            Self::Cv => CV_EXTENSIONS,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Cv => "cv",
        }
    }
}

/// State of the last upload or delete action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadStatus {
    Idle,
    Working,
    Completed,
    /// The file never left the client; the reason is in
    /// [`ArtifactUploader::error`].
    Rejected,
    Failed,
}

/// Replaces any cache-busting token on `link` with a fresh one. Works on
/// relative links, which is what the server hands out.
fn cache_busted(link: &str) -> String {
    let (path, query) = link
        .split_once('?')
        .map_or((link, ""), |(path, query)| (path, query));
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        if name != CACHE_BUST_PARAM {
            serializer.append_pair(&name, &value);
        }
    }
    serializer.append_pair(CACHE_BUST_PARAM, &Uuid::new_v4().simple().to_string());
    format!("{path}?{}", serializer.finish())
}

/// Controller for one artifact slot on the edit form.
#[derive(Debug)]
pub struct ArtifactUploader {
    kind: ArtifactKind,
    profile_id: Option<String>,
    link: Option<String>,
    exists: bool,
    updated: bool,
    max_size: u64,
    status: UploadStatus,
    error: Option<String>,
    guard: CancelGuard,
}

impl ArtifactUploader {
    #[must_use]
    pub fn photo(page: &PageConfig) -> Self {
        // A zero configured limit means "no page-level limit"; the hard
        // client-side cap still applies.
        let max_size = if page.photo_max_size > 0 {
            page.photo_max_size.min(MAX_ARTIFACT_SIZE)
        } else {
            MAX_ARTIFACT_SIZE
        };
        Self {
            kind: ArtifactKind::Photo,
            profile_id: page.profile.id.clone(),
            link: page.profile.links.photo.clone(),
            exists: page.has_photo,
            updated: false,
            max_size,
            status: UploadStatus::Idle,
            error: None,
            guard: CancelGuard::new(),
        }
    }

    #[must_use]
    pub fn cv(page: &PageConfig) -> Self {
        Self {
            kind: ArtifactKind::Cv,
            profile_id: page.profile.id.clone(),
            link: page.profile.links.cv.clone(),
            exists: page.has_cv,
            updated: false,
            max_size: MAX_ARTIFACT_SIZE,
            status: UploadStatus::Idle,
            error: None,
            guard: CancelGuard::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    #[must_use]
    pub fn status(&self) -> &UploadStatus {
        &self.status
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Whether the artifact changed since the page was loaded.
    #[must_use]
    pub fn updated(&self) -> bool {
        self.updated
    }

    /// The URL to render for this artifact. The photo slot falls back to the
    /// placeholder image; the CV slot renders nothing without an upload.
    #[must_use]
    pub fn display_url(&self) -> Option<&str> {
        if self.exists {
            self.link.as_deref()
        } else {
            match self.kind {
                ArtifactKind::Photo => Some(DEFAULT_PHOTO_PATH),
                ArtifactKind::Cv => None,
            }
        }
    }

    /// Whether the upload control should be enabled at all. Artifacts hang
    /// off a persisted record, so a brand-new profile has nothing to attach
    /// to yet; a CV additionally needs its server-assigned link.
    #[must_use]
    pub fn can_upload(&self) -> bool {
        match self.kind {
            ArtifactKind::Photo => self.profile_id.is_some(),
            ArtifactKind::Cv => self.profile_id.is_some() && self.link.is_some(),
        }
    }

    fn reject(&mut self, file: &FileUpload, reason: String) {
        tracing::warn!(
            artifact = self.kind.name(),
            file = %file.name,
            size = file.size(),
            reason = %reason,
            "upload rejected client-side"
        );
        self.error = Some(reason);
        self.status = UploadStatus::Rejected;
    }

    fn check_file(&self, file: &FileUpload) -> Result<(), String> {
        let accepted = self.kind.accepted_extensions();
        match file.extension() {
            Some(ext) if accepted.contains(&ext.as_str()) => {}
            _ => {
                return Err(format!(
                    "File type not supported. Supported types: {}.",
                    accepted.join(", ")
                ));
            }
        }
        if file.size() > self.max_size {
            return Err(format!(
                "File exceeds the maximum size of {} bytes.",
                self.max_size
            ));
        }
        Ok(())
    }

    /// Uploads `file` as the new artifact. A file that fails the client-side
    /// gate is rejected without any request.
    pub async fn upload(&mut self, api: &ProfileApi, file: FileUpload) {
        if self.status == UploadStatus::Working {
            return;
        }
        if !self.can_upload() {
            self.reject(&file, "Save the profile before attaching files.".to_string());
            return;
        }
        let Some(id) = self.profile_id.clone() else {
            return;
        };
        if let Err(reason) = self.check_file(&file) {
            self.reject(&file, reason);
            return;
        }

        self.error = None;
        self.status = UploadStatus::Working;
        let token = self.guard.token();
        let options = RequestOptions::new();
        let outcome = match self.kind {
            ArtifactKind::Photo => token.wrap(api.update_photo(&id, &file, &options)).await,
            ArtifactKind::Cv => token.wrap(api.update_cv(&id, &file, &options)).await,
        };
        self.finish(outcome, true);
    }

    /// Removes the current artifact.
    pub async fn delete(&mut self, api: &ProfileApi) {
        if self.status == UploadStatus::Working || !self.exists {
            return;
        }
        let Some(id) = self.profile_id.clone() else {
            return;
        };

        self.error = None;
        self.status = UploadStatus::Working;
        let token = self.guard.token();
        let options = RequestOptions::new();
        let outcome = match self.kind {
            ArtifactKind::Photo => token.wrap(api.delete_photo(&id, &options)).await,
            ArtifactKind::Cv => token.wrap(api.delete_cv(&id, &options)).await,
        };
        self.finish(outcome, false);
    }

    fn finish(&mut self, outcome: ApiResult<()>, exists_after: bool) {
        match outcome {
            Ok(()) => {
                self.exists = exists_after;
                self.updated = true;
                self.link = self.link.as_deref().map(cache_busted);
                self.status = UploadStatus::Completed;
            }
            Err(error) if error.is_cancelled() => {
                // Component unmounted mid-flight; leave everything as is.
            }
            Err(error) => {
                self.error = Some(
                    serialize_error(&error)
                        .message
                        .unwrap_or_else(|| format!("The {} could not be updated.", self.kind.name())),
                );
                self.status = UploadStatus::Failed;
                self.log_failure(&error);
            }
        }
    }

    fn log_failure(&self, error: &ApiError) {
        tracing::error!(artifact = self.kind.name(), %error, "artifact mutation failed");
    }
}
