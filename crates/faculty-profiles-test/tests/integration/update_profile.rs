//! Tests for the edit-profile flow.

use serde_json::json;

use faculty_profiles_core::types::Identifier;
use faculty_profiles_ui::form::{ProfileForm, SubmissionState, SubmitOutcome};

use super::helpers::*;

/// ## Summary
/// An existing profile is PUT to its item URL; identifiers the server
/// already classified keep their scheme while new ones are sent bare.
#[test_log::test(tokio::test)]
async fn update_puts_to_the_item_url_and_preserves_schemes() {
    let server = MockServer::spawn().await.expect("mock server starts");

    let mut profile = persisted_profile("abc123", "Grace", "Hopper");
    profile.metadata.identifiers = vec![Identifier {
        identifier: "0000-0002-1825-0097".to_string(),
        scheme: Some("orcid".to_string()),
    }];

    let mut form = ProfileForm::from_profile(profile);
    form.values.metadata.department = Some("Computer Science".to_string());
    form.values.identifiers.push("gnd:118624822".to_string());
    form.submit(&server.api()).await;

    assert_eq!(
        *form.state(),
        SubmissionState::Succeeded(SubmitOutcome::Reload)
    );

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/faculty-profiles/abc123");
    let metadata = &requests[0].json()["metadata"];
    assert_eq!(metadata["department"], json!("Computer Science"));
    assert_eq!(
        metadata["identifiers"],
        json!([
            { "identifier": "0000-0002-1825-0097", "scheme": "orcid" },
            { "identifier": "gnd:118624822" },
        ])
    );
}

/// ## Summary
/// A structured 400 maps its entries onto the matching fields and its
/// message onto the page banner.
#[test_log::test(tokio::test)]
async fn server_validation_errors_map_to_fields() {
    let server = MockServer::spawn().await.expect("mock server starts");
    server.respond_next(
        400,
        json!({
            "message": "A validation error occurred.",
            "status": 400,
            "errors": [
                { "field": "metadata.family_name", "messages": ["Required field."] },
            ],
        }),
    );

    let mut form = ProfileForm::from_profile(persisted_profile("abc123", "Grace", "Hopper"));
    form.submit(&server.api()).await;

    assert_eq!(*form.state(), SubmissionState::Failed);
    assert_eq!(form.global_error(), Some("A validation error occurred."));
    assert_eq!(
        form.field_errors().get("metadata.family_name").map(String::as_str),
        Some("Required field.")
    );
}
