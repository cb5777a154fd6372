//! The profile create/edit form and its submission pipeline.
//!
//! The form edits a projection of the server record: identifiers are
//! flattened to bare strings, and the submission step re-attaches the known
//! schemes and strips empty fields before anything goes over the wire.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use faculty_profiles_client::api::{ProfileApi, RequestOptions};
use faculty_profiles_client::cancel::CancelGuard;
use faculty_profiles_client::error::{ApiError, serialize_error};
use faculty_profiles_core::config::PageConfig;
use faculty_profiles_core::types::{Identifier, Profile, ProfileMetadata};

/// Form values: the metadata scalars plus the bare-string identifier
/// projection. Scheme is server-assigned vocabulary and never editable here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFormValues {
    pub metadata: ProfileMetadata,
    pub identifiers: Vec<String>,
}

/// Projects a server record into form values.
#[must_use]
pub fn deserialize_profile(profile: &Profile) -> ProfileFormValues {
    ProfileFormValues {
        metadata: ProfileMetadata {
            identifiers: Vec::new(),
            ..profile.metadata.clone()
        },
        identifiers: profile
            .metadata
            .identifiers
            .iter()
            .map(|entry| entry.identifier.clone())
            .collect(),
    }
}

/// A metadata entry is considered empty when the server should never see it.
/// Numbers and booleans, including `0` and `false`, are always kept.
fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

fn strip_empty(metadata: Map<String, Value>) -> Map<String, Value> {
    metadata
        .into_iter()
        .filter(|(_, value)| !is_empty_value(value))
        .collect()
}

/// Builds the submission payload from form values.
///
/// The form only ever edits identifier values, so each submitted string is
/// matched against the original record's identifiers: a match reuses the
/// persisted entry (scheme intact), anything unknown becomes a scheme-less
/// record. Empty metadata entries are dropped, never sent as explicit
/// empties.
#[must_use]
pub fn serialize_profile(values: &ProfileFormValues, original: &Profile) -> Value {
    let identifiers: Vec<Identifier> = values
        .identifiers
        .iter()
        .map(|submitted| {
            original
                .metadata
                .identifiers
                .iter()
                .find(|known| known.identifier == *submitted)
                .cloned()
                .unwrap_or_else(|| Identifier::unschemed(submitted.clone()))
        })
        .collect();

    let mut metadata = match serde_json::to_value(&values.metadata) {
        Ok(Value::Object(map)) => strip_empty(map),
        _ => Map::new(),
    };
    metadata.insert(
        "identifiers".to_string(),
        serde_json::to_value(identifiers).unwrap_or(Value::Array(Vec::new())),
    );

    let mut payload = Map::new();
    payload.insert("metadata".to_string(), Value::Object(metadata));
    Value::Object(payload)
}

/// Top-level submission state. Re-entering submit while `Submitting` is a
/// no-op; the trigger control is disabled in that state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Succeeded(SubmitOutcome),
    Failed,
}

/// What the host shell should do after a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Brand-new profile: navigate to the server-provided edit page.
    NavigateTo(String),
    /// Existing profile: reload in place.
    Reload,
}

/// Client-side limits checked before any request is issued.
fn validate(values: &ProfileFormValues) -> BTreeMap<String, String> {
    const LIMITS: &[(&str, usize)] = &[
        ("preferred_pronouns", 30),
        ("family_name", 100),
        ("given_names", 100),
        ("title_status", 200),
        ("department", 200),
        ("institution", 200),
    ];

    let mut errors = BTreeMap::new();
    let m = &values.metadata;
    let fields: &[(&str, &Option<String>)] = &[
        ("preferred_pronouns", &m.preferred_pronouns),
        ("family_name", &m.family_name),
        ("given_names", &m.given_names),
        ("title_status", &m.title_status),
        ("department", &m.department),
        ("institution", &m.institution),
    ];
    for (name, value) in fields {
        let Some(text) = value else { continue };
        let Some((_, limit)) = LIMITS.iter().find(|(n, _)| n == name) else {
            continue;
        };
        if text.chars().count() > *limit {
            errors.insert(
                format!("metadata.{name}"),
                format!("Maximum number of characters is {limit}"),
            );
        }
    }

    for (name, value) in [
        ("email_address", &m.email_address),
        ("contact_email_address", &m.contact_email_address),
    ] {
        if let Some(address) = value
            && !address.is_empty()
            && !address.contains('@')
        {
            errors.insert(format!("metadata.{name}"), "Invalid email address".to_string());
        }
    }

    errors
}

/// Controller for the create/edit profile form.
///
/// Holds top-level submission state, serializes the record on save and maps
/// structured failures to a page banner and per-field annotations. The
/// cancellation guard is tied to the form's mount lifetime; an aborted
/// request is ignored, not displayed.
#[derive(Debug)]
pub struct ProfileForm {
    original: Profile,
    pub values: ProfileFormValues,
    state: SubmissionState,
    global_error: Option<String>,
    field_errors: BTreeMap<String, String>,
    guard: CancelGuard,
}

impl ProfileForm {
    #[must_use]
    pub fn new(page: &PageConfig) -> Self {
        Self::from_profile(page.profile.clone())
    }

    #[must_use]
    pub fn from_profile(profile: Profile) -> Self {
        let values = deserialize_profile(&profile);
        Self {
            original: profile,
            values,
            state: SubmissionState::Idle,
            global_error: None,
            field_errors: BTreeMap::new(),
            guard: CancelGuard::new(),
        }
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    #[must_use]
    pub fn global_error(&self) -> Option<&str> {
        self.global_error.as_deref()
    }

    #[must_use]
    pub fn field_errors(&self) -> &BTreeMap<String, String> {
        &self.field_errors
    }

    #[must_use]
    pub fn original(&self) -> &Profile {
        &self.original
    }

    /// Surfaces an error from a nested component as the page-level banner.
    /// The cancellation sentinel is suppressed unconditionally.
    pub fn set_global_error(&mut self, error: &ApiError) {
        if error.is_cancelled() {
            return;
        }
        self.global_error = serialize_error(error).message;
    }

    /// Saves the form: POST for a brand-new profile, PUT otherwise.
    ///
    /// Calling while already submitting is a no-op. On success the resulting
    /// state carries the navigation the host should perform; on failure the
    /// banner and field annotations are populated from the structured body.
    pub async fn submit(&mut self, api: &ProfileApi) {
        if self.is_submitting() {
            return;
        }

        self.global_error = None;
        self.field_errors = validate(&self.values);
        if !self.field_errors.is_empty() {
            self.state = SubmissionState::Failed;
            return;
        }

        self.state = SubmissionState::Submitting;
        let payload = serialize_profile(&self.values, &self.original);
        let token = self.guard.token();
        let options = RequestOptions::new();

        let outcome = if let Some(id) = self.original.id.clone() {
            token
                .wrap(api.update(&id, &payload, &options))
                .await
                .map(|()| SubmitOutcome::Reload)
        } else {
            token.wrap(api.create(&payload, &options)).await.map(|created| {
                created
                    .links
                    .edit_html
                    .map_or(SubmitOutcome::Reload, SubmitOutcome::NavigateTo)
            })
        };

        match outcome {
            Ok(next) => self.state = SubmissionState::Succeeded(next),
            Err(error) if error.is_cancelled() => {
                // Form unmounted mid-flight; nothing to report.
            }
            Err(error) => {
                let body = serialize_error(&error);
                if let Some(message) = body.message {
                    self.global_error = Some(message);
                }
                if let Some(entries) = body.errors {
                    for entry in entries {
                        if let Some(first) = entry.first_message().map(str::to_string) {
                            self.field_errors.insert(entry.field, first);
                        }
                    }
                }
                self.state = SubmissionState::Failed;
            }
        }
    }
}
