//! Fake registration backend and projects host for integration tests.
//!
//! Spins up a minimal `axum` HTTP server on a random TCP port bound to
//! 127.0.0.1. Serves:
//! - `POST /api/register/check-duplicates`: email / GitHub URL availability
//! - `POST /api/register`: stores the registration, returns its ID
//! - `GET /api/register?registrationId=…` or `?email=…`: record lookup
//! - `GET /projects.json`: a configurable document and status
//!
//! # Example
//!
//! ```rust,no_run
//! let backend = FakeBackend::start().await.unwrap();
//! backend.set_projects(200, r#"[{"name":"tokio"}]"#).await;
//! let config = config_for(&backend);
//! ```

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct StoredRegistration {
    pub registration_id: String,
    /// The request body exactly as received.
    pub body: Value,
}

impl StoredRegistration {
    fn field(&self, key: &str) -> Option<&str> {
        self.body.get(key).and_then(Value::as_str)
    }
}

/// State shared between the router and test code.
struct BackendState {
    registrations: Vec<StoredRegistration>,
    next_id: usize,
    duplicate_checks: usize,
    register_calls: usize,
    record_queries: Vec<HashMap<String, String>>,
    /// When set, `POST /api/register` answers 500 with this error.
    register_failure: Option<String>,
    /// When set, `GET /api/register` answers 500 with this error.
    lookup_failure: Option<String>,
    projects_status: u16,
    projects_body: String,
}

impl Default for BackendState {
    fn default() -> Self {
        Self {
            registrations: Vec::new(),
            next_id: 1,
            duplicate_checks: 0,
            register_calls: 0,
            record_queries: Vec::new(),
            register_failure: None,
            lookup_failure: None,
            projects_status: 200,
            projects_body: "[]".to_string(),
        }
    }
}

type Shared = Arc<Mutex<BackendState>>;

/// Handle to the running fake backend.
pub struct FakeBackend {
    addr: SocketAddr,
    state: Shared,
}

impl FakeBackend {
    /// Start the server on a random port. Returns once it is listening.
    pub async fn start() -> std::io::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let state: Shared = Arc::new(Mutex::new(BackendState::default()));

        let app = Router::new()
            .route("/api/register/check-duplicates", post(check_duplicates))
            .route("/api/register", post(register).get(find_record))
            .route("/projects.json", get(projects))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Ok(Self { addr, state })
    }

    /// Base URL for the API (e.g. `http://127.0.0.1:PORT`).
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn projects_url(&self) -> String {
        format!("http://{}/projects.json", self.addr)
    }

    /// Serve `body` with `status` from `/projects.json`.
    pub async fn set_projects(&self, status: u16, body: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.projects_status = status;
        state.projects_body = body.into();
    }

    /// Make every subsequent `POST /api/register` fail with a 500.
    pub async fn fail_registrations(&self, error: impl Into<String>) {
        self.state.lock().await.register_failure = Some(error.into());
    }

    /// Make every subsequent `GET /api/register` fail with a 500.
    pub async fn fail_record_lookups(&self, error: impl Into<String>) {
        self.state.lock().await.lookup_failure = Some(error.into());
    }

    /// Store a registration directly, bypassing the HTTP surface.
    pub async fn seed(&self, body: Value) -> String {
        let mut state = self.state.lock().await;
        store(&mut state, body)
    }

    pub async fn registrations(&self) -> Vec<StoredRegistration> {
        self.state.lock().await.registrations.clone()
    }

    pub async fn duplicate_checks(&self) -> usize {
        self.state.lock().await.duplicate_checks
    }

    pub async fn register_calls(&self) -> usize {
        self.state.lock().await.register_calls
    }

    /// Query parameters of every record lookup, in order.
    pub async fn record_queries(&self) -> Vec<HashMap<String, String>> {
        self.state.lock().await.record_queries.clone()
    }
}

fn store(state: &mut BackendState, body: Value) -> String {
    let registration_id = format!("OS101-{:04}", state.next_id);
    state.next_id += 1;
    state.registrations.push(StoredRegistration {
        registration_id: registration_id.clone(),
        body,
    });
    registration_id
}

fn record_json(r: &StoredRegistration) -> Value {
    json!({
        "registrationId": r.registration_id,
        "fullName": r.field("fullName"),
        "email": r.field("email"),
        "collegeName": r.field("collegeName"),
        "githubUrl": r.field("githubUrl"),
    })
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

async fn check_duplicates(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.duplicate_checks += 1;

    let email = body["email"].as_str().unwrap_or("").to_lowercase();
    let github = body["githubUrl"].as_str().unwrap_or("").to_lowercase();

    let taken = |key: &str, wanted: &str| {
        state
            .registrations
            .iter()
            .any(|r| r.field(key).map(str::to_lowercase).as_deref() == Some(wanted))
    };

    let reply = if taken("email", &email) {
        json!({"available": false, "message": "This email is already registered."})
    } else if taken("githubUrl", &github) {
        json!({"available": false, "message": "This GitHub profile is already registered."})
    } else {
        json!({"available": true, "message": "Available"})
    };
    Json(reply)
}

async fn register(State(state): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.register_calls += 1;

    if let Some(error) = state.register_failure.clone() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "error": error})),
        );
    }

    let id = store(&mut state, body);
    let stored = state
        .registrations
        .last()
        .cloned()
        .expect("just stored a registration");
    (
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "registrationId": id,
            "message": "Registration successful",
            "data": record_json(&stored),
        })),
    )
}

async fn find_record(
    State(state): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mut state = state.lock().await;
    state.record_queries.push(params.clone());
    if let Some(error) = state.lookup_failure.clone() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"success": false, "error": error})),
        );
    }

    let found = if let Some(id) = params.get("registrationId") {
        state.registrations.iter().find(|r| &r.registration_id == id)
    } else if let Some(email) = params.get("email") {
        state
            .registrations
            .iter()
            .find(|r| r.field("email").is_some_and(|e| e.eq_ignore_ascii_case(email)))
    } else {
        None
    };

    match found {
        Some(r) => (StatusCode::OK, Json(json!({"success": true, "data": record_json(r)}))),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"success": false, "error": "Registration not found"})),
        ),
    }
}

async fn projects(State(state): State<Shared>) -> impl IntoResponse {
    let state = state.lock().await;
    let status = StatusCode::from_u16(state.projects_status).unwrap_or(StatusCode::OK);
    (status, state.projects_body.clone())
}
