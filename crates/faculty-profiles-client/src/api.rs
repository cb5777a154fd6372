use reqwest::RequestBuilder;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use url::Url;

use faculty_profiles_core::constants::PROFILES_API_PREFIX;
use faculty_profiles_core::types::{Profile, SearchResponse};

use crate::error::{ApiError, ApiResult};

const OCTET_STREAM: &str = "application/octet-stream";
const JSON: &str = "application/json";

/// Header carrying the original filename of a binary upload.
pub const X_FILENAME: &str = "X-Filename";

/// Caller-supplied request options merged into each call.
///
/// Option headers are applied before the operation's fixed headers, so the
/// fixed ones win on conflict while everything else passes through.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// A file picked by the user, identified by its original name.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    #[must_use]
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Lowercased filename extension, if any.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        std::path::Path::new(&self.name)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }
}

/// Parameters of the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub q: String,
    pub sort: String,
    pub page: u32,
    pub size: u32,
}

impl Default for ListQuery {
    /// The frontpage "latest profiles" query.
    fn default() -> Self {
        Self {
            q: String::new(),
            sort: "newest".to_string(),
            page: 1,
            size: 5,
        }
    }
}

/// API client for faculty profiles.
///
/// One method per server operation; no retry logic. A failed call propagates
/// the transport error to the caller untouched.
#[derive(Debug, Clone)]
pub struct ProfileApi {
    http: reqwest::Client,
    base: Url,
}

impl ProfileApi {
    /// Builds a client rooted at `{origin}/api/faculty-profiles`.
    ///
    /// ## Errors
    /// Returns an error if the origin is not a valid absolute URL.
    pub fn new(origin: &str) -> ApiResult<Self> {
        let base = Url::parse(origin)?.join(PROFILES_API_PREFIX)?;
        Ok(Self {
            http: reqwest::Client::new(),
            base,
        })
    }

    fn collection_url(&self) -> Url {
        self.base.clone()
    }

    fn item_url(&self, profile_id: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}/{profile_id}", self.base))?)
    }

    fn artifact_url(&self, profile_id: &str, artifact: &str) -> ApiResult<Url> {
        Ok(Url::parse(&format!("{}/{profile_id}/{artifact}", self.base))?)
    }

    fn apply_options(mut builder: RequestBuilder, options: &RequestOptions) -> RequestBuilder {
        for (name, value) in &options.headers {
            builder = builder.header(name, value);
        }
        builder
    }

    async fn execute(builder: RequestBuilder) -> ApiResult<reqwest::Response> {
        let response = builder.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            // Keep whatever body the server sent; the serializer reads it
            // defensively later.
            let body = response
                .json::<serde_json::Value>()
                .await
                .unwrap_or(serde_json::Value::Null);
            Err(ApiError::Http {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Creates a new profile and returns the persisted record.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn create(
        &self,
        payload: &impl Serialize,
        options: &RequestOptions,
    ) -> ApiResult<Profile> {
        let builder = Self::apply_options(self.http.post(self.collection_url()), options)
            .header(ACCEPT, JSON)
            .json(payload);
        let response = Self::execute(builder).await?;
        Ok(response.json().await?)
    }

    /// Replaces the metadata of an existing profile.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn update(
        &self,
        profile_id: &str,
        payload: &impl Serialize,
        options: &RequestOptions,
    ) -> ApiResult<()> {
        let builder = Self::apply_options(self.http.put(self.item_url(profile_id)?), options)
            .header(ACCEPT, JSON)
            .json(payload);
        Self::execute(builder).await?;
        Ok(())
    }

    /// Deletes the profile.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn delete(&self, profile_id: &str, options: &RequestOptions) -> ApiResult<()> {
        let builder = Self::apply_options(self.http.delete(self.item_url(profile_id)?), options);
        Self::execute(builder).await?;
        Ok(())
    }

    /// Replaces the profile photo.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn update_photo(
        &self,
        profile_id: &str,
        file: &FileUpload,
        options: &RequestOptions,
    ) -> ApiResult<()> {
        self.put_artifact(profile_id, "photo", file, options).await
    }

    /// Removes the profile photo.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn delete_photo(&self, profile_id: &str, options: &RequestOptions) -> ApiResult<()> {
        self.delete_artifact(profile_id, "photo", options).await
    }

    /// Replaces the profile CV.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn update_cv(
        &self,
        profile_id: &str,
        file: &FileUpload,
        options: &RequestOptions,
    ) -> ApiResult<()> {
        self.put_artifact(profile_id, "cv", file, options).await
    }

    /// Removes the profile CV.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn delete_cv(&self, profile_id: &str, options: &RequestOptions) -> ApiResult<()> {
        self.delete_artifact(profile_id, "cv", options).await
    }

    /// Fetches a page of profiles.
    ///
    /// ## Errors
    /// Returns the transport error untouched on failure.
    pub async fn list(
        &self,
        query: &ListQuery,
        options: &RequestOptions,
    ) -> ApiResult<SearchResponse> {
        let builder = Self::apply_options(self.http.get(self.collection_url()), options)
            .header(ACCEPT, JSON)
            .query(&[
                ("q", query.q.clone()),
                ("sort", query.sort.clone()),
                ("page", query.page.to_string()),
                ("size", query.size.to_string()),
            ]);
        let response = Self::execute(builder).await?;
        Ok(response.json().await?)
    }

    async fn put_artifact(
        &self,
        profile_id: &str,
        artifact: &str,
        file: &FileUpload,
        options: &RequestOptions,
    ) -> ApiResult<()> {
        tracing::debug!(profile_id, artifact, file = %file.name, size = file.size(), "uploading artifact");
        let builder = Self::apply_options(
            self.http.put(self.artifact_url(profile_id, artifact)?),
            options,
        )
        .header(CONTENT_TYPE, OCTET_STREAM)
        .header(X_FILENAME, &file.name)
        .body(file.bytes.clone());
        Self::execute(builder).await?;
        Ok(())
    }

    async fn delete_artifact(
        &self,
        profile_id: &str,
        artifact: &str,
        options: &RequestOptions,
    ) -> ApiResult<()> {
        let builder = Self::apply_options(
            self.http.delete(self.artifact_url(profile_id, artifact)?),
            options,
        )
        .header(CONTENT_TYPE, OCTET_STREAM);
        Self::execute(builder).await?;
        Ok(())
    }
}
