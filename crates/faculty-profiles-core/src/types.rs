use serde::{Deserialize, Serialize};

/// A researcher profile record as exchanged with the REST API.
///
/// `id` is absent for profiles that have not been persisted yet; `links` are
/// only populated by the server for persisted profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub links: ProfileLinks,
    #[serde(default)]
    pub metadata: ProfileMetadata,
}

impl Profile {
    /// Whether this profile has never been persisted.
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    /// Full name used for display and for delete confirmation, built from the
    /// trimmed given and family names.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.metadata.given_names.as_deref().unwrap_or("").trim(),
            self.metadata.family_name.as_deref().unwrap_or("").trim()
        )
    }
}

/// Server-provided action URLs for a persisted profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit_html: Option<String>,
}

/// Profile metadata as persisted by the server.
///
/// All scalar fields are optional; the submission pipeline strips empties so
/// the server never sees explicit empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_pronouns: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub biography: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_email_address: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub identifiers: Vec<Identifier>,
}

/// A persisted identifier. The scheme is assigned by the server-side
/// vocabulary; the form only ever edits identifier values, so a missing
/// scheme marks an identifier the server has not classified yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheme: Option<String>,
}

impl Identifier {
    /// An identifier with no scheme, as created for values the server has
    /// never seen.
    #[must_use]
    pub fn unschemed(value: impl Into<String>) -> Self {
        Self {
            identifier: value.into(),
            scheme: None,
        }
    }
}

/// Server-computed permissions gating which actions render.
///
/// Unknown keys are tolerated and ignored; absent keys default to false.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    #[serde(default)]
    pub can_delete: bool,
    #[serde(default)]
    pub can_rename: bool,
}

/// An entry of the profile-type vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyType {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_l10n: Option<String>,
}

impl VocabularyType {
    /// Label shown in the type selector; falls back to the id when no
    /// localized title exists.
    #[must_use]
    pub fn label(&self) -> &str {
        self.title_l10n.as_deref().unwrap_or(&self.id)
    }
}

/// The paged hit envelope returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHits {
    #[serde(default)]
    pub hits: Vec<Profile>,
    #[serde(default)]
    pub total: u64,
}

/// Top-level body of a list response (`data.hits.hits[]`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub hits: SearchHits,
}
