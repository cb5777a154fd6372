//! Tests for the photo and CV uploaders.

use faculty_profiles_client::api::FileUpload;
use faculty_profiles_ui::form::{ArtifactUploader, UploadStatus};

use super::helpers::*;

/// ## Summary
/// A photo upload PUTs the raw bytes with the octet-stream content type and
/// the original filename, then cache-busts the photo link.
#[test_log::test(tokio::test)]
async fn photo_upload_sends_raw_bytes_with_filename() {
    let server = MockServer::spawn().await.expect("mock server starts");

    let mut page = page_with(persisted_profile("abc123", "Grace", "Hopper"));
    page.has_photo = true;
    let mut uploader = ArtifactUploader::photo(&page);

    uploader
        .upload(&server.api(), FileUpload::new("portrait.png", vec![1, 2, 3]))
        .await;

    assert_eq!(*uploader.status(), UploadStatus::Completed);
    assert!(uploader.exists());
    assert!(uploader.updated());
    assert!(
        uploader
            .display_url()
            .is_some_and(|url| url.contains("no-cache="))
    );

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].path, "/api/faculty-profiles/abc123/photo");
    assert_eq!(
        requests[0].content_type.as_deref(),
        Some("application/octet-stream")
    );
    assert_eq!(requests[0].filename.as_deref(), Some("portrait.png"));
    assert_eq!(requests[0].body, vec![1, 2, 3]);
}

/// ## Summary
/// Files failing the client-side gate never reach the server.
#[test_log::test(tokio::test)]
async fn rejected_files_never_reach_the_server() {
    let server = MockServer::spawn().await.expect("mock server starts");
    let api = server.api();
    let page = page_with(persisted_profile("abc123", "Grace", "Hopper"));

    let mut cv = ArtifactUploader::cv(&page);
    cv.upload(&api, FileUpload::new("resume.exe", vec![0; 16])).await;
    assert_eq!(*cv.status(), UploadStatus::Rejected);

    let mut photo = ArtifactUploader::photo(&page);
    photo
        .upload(&api, FileUpload::new("huge.png", vec![0; 50_000_001]))
        .await;
    assert_eq!(*photo.status(), UploadStatus::Rejected);

    assert!(server.requests().is_empty());
}

/// ## Summary
/// Deleting the CV issues a DELETE and clears the slot.
#[test_log::test(tokio::test)]
async fn cv_delete_clears_the_slot() {
    let server = MockServer::spawn().await.expect("mock server starts");

    let mut page = page_with(persisted_profile("abc123", "Grace", "Hopper"));
    page.has_cv = true;
    let mut uploader = ArtifactUploader::cv(&page);

    uploader.delete(&server.api()).await;

    assert_eq!(*uploader.status(), UploadStatus::Completed);
    assert!(!uploader.exists());
    assert_eq!(uploader.display_url(), None);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].path, "/api/faculty-profiles/abc123/cv");
}

/// ## Summary
/// An accepted CV upload goes through with a document extension.
#[test_log::test(tokio::test)]
async fn cv_upload_accepts_documents() {
    let server = MockServer::spawn().await.expect("mock server starts");
    let page = page_with(persisted_profile("abc123", "Grace", "Hopper"));

    let mut uploader = ArtifactUploader::cv(&page);
    uploader
        .upload(&server.api(), FileUpload::new("resume.pdf", vec![0; 128]))
        .await;

    assert_eq!(*uploader.status(), UploadStatus::Completed);
    assert_eq!(uploader.error(), None);
    assert_eq!(server.requests()[0].filename.as_deref(), Some("resume.pdf"));
}
