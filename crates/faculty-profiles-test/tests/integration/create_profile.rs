//! Tests for the create-profile flow.

use serde_json::json;

use faculty_profiles_core::types::Profile;
use faculty_profiles_ui::form::{ProfileForm, SubmissionState, SubmitOutcome};

use super::helpers::*;

/// ## Summary
/// A brand-new profile is POSTed to the collection and the user is sent to
/// the server-provided edit page.
#[test_log::test(tokio::test)]
async fn create_posts_metadata_and_navigates_to_edit_page() {
    let server = MockServer::spawn().await.expect("mock server starts");

    let mut form = ProfileForm::from_profile(Profile::default());
    form.values.metadata.given_names = Some("Ada".to_string());
    form.values.metadata.family_name = Some("Lovelace".to_string());
    // Left blank in the form; must not reach the server.
    form.values.metadata.biography = Some(String::new());

    form.submit(&server.api()).await;

    assert_eq!(
        *form.state(),
        SubmissionState::Succeeded(SubmitOutcome::NavigateTo(
            "/faculty-profiles/abc123/settings/profile".to_string()
        ))
    );

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].path, "/api/faculty-profiles");
    assert_eq!(
        requests[0].json(),
        json!({
            "metadata": {
                "given_names": "Ada",
                "family_name": "Lovelace",
                "identifiers": [],
            },
        })
    );
}

/// ## Summary
/// A server failure surfaces its message as the page banner and the form
/// stays editable.
#[test_log::test(tokio::test)]
async fn create_failure_shows_the_server_message() {
    let server = MockServer::spawn().await.expect("mock server starts");
    server.respond_next(500, json!({ "message": "Something went wrong." }));

    let mut form = ProfileForm::from_profile(Profile::default());
    form.values.metadata.given_names = Some("Ada".to_string());
    form.submit(&server.api()).await;

    assert_eq!(*form.state(), SubmissionState::Failed);
    assert_eq!(form.global_error(), Some("Something went wrong."));
    assert!(form.field_errors().is_empty());
}

/// ## Summary
/// Client-side validation failures never produce a request.
#[test_log::test(tokio::test)]
async fn create_with_invalid_values_never_hits_the_server() {
    let server = MockServer::spawn().await.expect("mock server starts");

    let mut form = ProfileForm::from_profile(Profile::default());
    form.values.metadata.email_address = Some("not-an-address".to_string());
    form.submit(&server.api()).await;

    assert_eq!(*form.state(), SubmissionState::Failed);
    assert!(form.field_errors().contains_key("metadata.email_address"));
    assert!(server.requests().is_empty());
}
