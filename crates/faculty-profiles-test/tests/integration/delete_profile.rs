//! Tests for the delete-profile flow.

use serde_json::json;

use faculty_profiles_ui::form::{DeleteOutcome, DeleteProfileModal, ModalPhase, ModalState};

use super::helpers::*;

/// ## Summary
/// The confirm control only fires once the exact full name is typed, and a
/// successful confirm issues exactly one DELETE.
#[test_log::test(tokio::test)]
async fn delete_requires_the_typed_full_name() {
    let server = MockServer::spawn().await.expect("mock server starts");
    let api = server.api();

    let page = page_with(persisted_profile("abc123", "Grace", "Hopper"));
    let mut modal = DeleteProfileModal::new(&page);
    modal.open();
    modal.mounted();

    modal.set_input("Grace");
    assert_eq!(modal.confirm(&api).await, DeleteOutcome::Ignored);
    assert!(server.requests().is_empty());

    modal.set_input("Grace Hopper");
    assert_eq!(
        modal.confirm(&api).await,
        DeleteOutcome::Deleted {
            redirect: "/faculty-profiles".to_string(),
        }
    );
    assert_eq!(*modal.state(), ModalState::Closed);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/faculty-profiles/abc123");
}

/// ## Summary
/// A failed delete keeps the modal open with the server's message.
#[test_log::test(tokio::test)]
async fn failed_delete_keeps_the_modal_open() {
    let server = MockServer::spawn().await.expect("mock server starts");
    server.respond_next(403, json!({ "message": "Permission denied." }));

    let page = page_with(persisted_profile("abc123", "Grace", "Hopper"));
    let mut modal = DeleteProfileModal::new(&page);
    modal.open();
    modal.mounted();
    modal.set_input("Grace Hopper");

    assert_eq!(modal.confirm(&server.api()).await, DeleteOutcome::Ignored);
    assert_eq!(
        *modal.state(),
        ModalState::Open {
            phase: ModalPhase::Ready,
            input: "Grace Hopper".to_string(),
            error: Some("Permission denied.".to_string()),
        }
    );
}
