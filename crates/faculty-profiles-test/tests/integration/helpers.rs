#![allow(clippy::expect_used, clippy::missing_panics_doc, clippy::missing_errors_doc)]
//! Shared test helpers: a socket-bound mock of the profiles REST API plus
//! fixture builders.
//!
//! The mock records every request it receives and answers with canned
//! responses; a test can script the next response to exercise failure paths.

use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use faculty_profiles_client::api::ProfileApi;
use faculty_profiles_core::config::PageConfig;
use faculty_profiles_core::constants::PROFILES_API_PREFIX;
use faculty_profiles_core::types::{Permissions, Profile};

const MAX_RECORDED_BODY: usize = 64 * 1024 * 1024;

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub filename: Option<String>,
    pub body: Vec<u8>,
}

impl RecordedRequest {
    /// The body parsed as JSON.
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("request body is JSON")
    }
}

#[derive(Debug, Default)]
struct MockState {
    requests: Vec<RecordedRequest>,
    next_response: Option<(u16, Value)>,
    hits: Vec<Value>,
    created: Value,
}

type SharedState = Arc<Mutex<MockState>>;

/// In-process profiles API listening on a real socket.
pub struct MockServer {
    origin: String,
    state: SharedState,
}

impl MockServer {
    pub async fn spawn() -> anyhow::Result<Self> {
        let state: SharedState = Arc::new(Mutex::new(MockState {
            created: created_profile_response("abc123"),
            ..MockState::default()
        }));
        let router = Router::new().fallback(handle).with_state(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, router).await;
        });
        Ok(Self {
            origin: format!("http://{addr}"),
            state,
        })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn api(&self) -> ProfileApi {
        ProfileApi::new(&self.origin).expect("mock origin is a valid URL")
    }

    /// Everything received so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().expect("state lock").requests.clone()
    }

    /// Scripts the next response regardless of route.
    pub fn respond_next(&self, status: u16, body: Value) {
        self.state.lock().expect("state lock").next_response = Some((status, body));
    }

    /// Sets the hit list served by the list endpoint.
    pub fn set_hits(&self, hits: Vec<Value>) {
        self.state.lock().expect("state lock").hits = hits;
    }
}

async fn handle(State(state): State<SharedState>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let bytes = axum::body::to_bytes(body, MAX_RECORDED_BODY)
        .await
        .unwrap_or_default();

    let header = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    };
    let method = parts.method.to_string();
    let path = parts.uri.path().to_string();
    let recorded = RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        query: parts.uri.query().map(ToString::to_string),
        content_type: header("content-type"),
        filename: header("x-filename"),
        body: bytes.to_vec(),
    };

    let (scripted, hits, created) = {
        let mut state = state.lock().expect("state lock");
        state.requests.push(recorded);
        (
            state.next_response.take(),
            state.hits.clone(),
            state.created.clone(),
        )
    };

    if let Some((status, body)) = scripted {
        return (status_code(status), Json(body)).into_response();
    }

    let Some(tail) = path.strip_prefix(PROFILES_API_PREFIX) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    let segments: Vec<&str> = tail.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("POST", []) => (StatusCode::CREATED, Json(created)).into_response(),
        ("GET", []) => Json(json!({
            "hits": { "hits": hits, "total": hits.len() },
        }))
        .into_response(),
        ("PUT", [_id]) | ("PUT" | "DELETE", [_id, "photo" | "cv"]) => {
            Json(json!({})).into_response()
        }
        ("DELETE", [_id]) => StatusCode::NO_CONTENT.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).expect("scripted status is valid")
}

/// The record the mock returns from a successful create.
pub fn created_profile_response(id: &str) -> Value {
    json!({
        "id": id,
        "links": {
            "self_html": format!("/faculty-profiles/{id}"),
            "edit_html": format!("/faculty-profiles/{id}/settings/profile"),
            "photo": format!("{PROFILES_API_PREFIX}/{id}/photo"),
            "cv": format!("{PROFILES_API_PREFIX}/{id}/cv"),
        },
        "metadata": {},
    })
}

/// A persisted profile fixture with server-assigned links.
pub fn persisted_profile(id: &str, given: &str, family: &str) -> Profile {
    serde_json::from_value(json!({
        "id": id,
        "links": {
            "self_html": format!("/faculty-profiles/{id}"),
            "edit_html": format!("/faculty-profiles/{id}/settings/profile"),
            "photo": format!("{PROFILES_API_PREFIX}/{id}/photo"),
            "cv": format!("{PROFILES_API_PREFIX}/{id}/cv"),
        },
        "metadata": {
            "given_names": given,
            "family_name": family,
        },
    }))
    .expect("profile fixture parses")
}

/// Page configuration for an owner who may do everything.
pub fn page_with(profile: Profile) -> PageConfig {
    PageConfig {
        profile,
        has_photo: false,
        has_cv: false,
        photo_max_size: 0,
        permissions: Permissions {
            can_delete: true,
            can_rename: true,
        },
        types: Vec::new(),
        default_photo: String::new(),
    }
}
