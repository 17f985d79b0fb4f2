//! # Remote API Flow Tests
//!
//! Runs the production adapters (reqwest + bcrypt) against an in-process axum
//! server standing in for the remote form API.
//!
//! ## Scenarios
//!
//! 1. Options fetch populates the dropdown choices
//! 2. 200 on submit → success, session cleared
//! 3. 500 on submit → failure, session kept
//! 4. Malformed email → generic validation failure, nothing sent

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use intake_core::{
    ApiConfig, ApiError, BcryptHasher, CredentialHasher, FormSession, HttpFormEndpoint,
    IntakeApi, IntakeService, NotificationKind, SubmitOutcome, ValidationFailure,
};

// =============================================================================
// TEST HELPERS
// =============================================================================

#[derive(Default)]
struct Recorded {
    content_type: Option<String>,
    body: Value,
}

struct MockApi {
    options_status: StatusCode,
    options_body: Value,
    submit_status: StatusCode,
    submissions: Mutex<Vec<Recorded>>,
}

impl MockApi {
    fn new(submit_status: StatusCode) -> Self {
        Self {
            options_status: StatusCode::OK,
            options_body: json!({
                "occupations": ["Engineer"],
                "states": [{"name": "Ohio", "abbreviation": "OH"}]
            }),
            submit_status,
            submissions: Mutex::new(Vec::new()),
        }
    }

    fn with_options_status(mut self, status: StatusCode) -> Self {
        self.options_status = status;
        self
    }
}

async fn options(State(api): State<Arc<MockApi>>) -> (StatusCode, Json<Value>) {
    (api.options_status, Json(api.options_body.clone()))
}

async fn submit(State(api): State<Arc<MockApi>>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);
    api.submissions.lock().unwrap().push(Recorded { content_type, body });
    api.submit_status
}

async fn spawn_api(api: MockApi) -> (String, Arc<MockApi>) {
    let api = Arc::new(api);
    let router = Router::new()
        .route("/form", get(options).post(submit))
        .with_state(Arc::clone(&api));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    (format!("http://{}/form", addr), api)
}

fn service_for(url: &str) -> IntakeService<HttpFormEndpoint, BcryptHasher> {
    let config = ApiConfig {
        endpoint: url.to_string(),
        timeout: None,
    };
    let endpoint = HttpFormEndpoint::new(&config).unwrap();
    IntakeService::new(Arc::new(endpoint), Arc::new(BcryptHasher::new(4)))
}

fn filled_session(session: &mut FormSession) {
    session.set_name("Ana");
    session.set_email("a@b.com");
    session.set_password("password1");
    session.set_occupation("Engineer");
    session.set_home_state("Ohio");
}

// =============================================================================
// OPTIONS FETCH
// =============================================================================

#[tokio::test]
async fn test_options_fetch_populates_choices() {
    let (url, _api) = spawn_api(MockApi::new(StatusCode::OK)).await;
    let service = service_for(&url);
    let mut session = FormSession::new();

    let catalog = service.load_options().await.unwrap();
    session.apply_catalog(catalog);

    let occupations = session.catalog().occupation_choices();
    let states = session.catalog().state_choices();
    assert_eq!(occupations, vec!["Occupation", "Engineer"]);
    assert_eq!(states, vec!["State", "Ohio"]);
}

#[tokio::test]
async fn test_options_fetch_non_2xx_leaves_lists_empty() {
    let api = MockApi::new(StatusCode::OK).with_options_status(StatusCode::SERVICE_UNAVAILABLE);
    let (url, _api) = spawn_api(api).await;
    let service = service_for(&url);
    let mut session = FormSession::new();

    let result = service.load_options().await;
    assert!(matches!(result, Err(ApiError::Status { status: 503 })));

    let alert = session.options_failed();
    assert_eq!(alert.kind, NotificationKind::Error);
    assert!(session.catalog().is_empty());
}

#[tokio::test]
async fn test_options_fetch_unreachable() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(&format!("http://{}/form", addr));
    assert!(service.load_options().await.is_err());
}

// =============================================================================
// SUBMISSION
// =============================================================================

#[tokio::test]
async fn test_submit_200_clears_session() {
    let (url, api) = spawn_api(MockApi::new(StatusCode::OK)).await;
    let service = service_for(&url);
    let mut session = FormSession::new();
    filled_session(&mut session);

    let outcome = service.submit(session.state().clone()).await;
    assert_eq!(outcome, SubmitOutcome::Accepted);

    let note = session.apply_outcome(&outcome);
    assert_eq!(note.title, "Data Submitted!");
    assert_eq!(note.kind, NotificationKind::Success);
    assert!(session.state().is_empty());

    let submissions = api.submissions.lock().unwrap();
    assert_eq!(submissions.len(), 1);
    let sent = &submissions[0];
    assert_eq!(sent.content_type.as_deref(), Some("application/json"));
    assert_eq!(sent.body["name"], "Ana");
    assert_eq!(sent.body["email"], "a@b.com");
    assert_eq!(sent.body["occupation"], "Engineer");
    assert_eq!(sent.body["state"], "Ohio");

    let hash = sent.body["password"].as_str().unwrap();
    assert_ne!(hash, "password1");
    assert!(BcryptHasher::new(4).verify("password1", hash).unwrap());
}

#[tokio::test]
async fn test_submit_500_keeps_session() {
    let (url, api) = spawn_api(MockApi::new(StatusCode::INTERNAL_SERVER_ERROR)).await;
    let service = service_for(&url);
    let mut session = FormSession::new();
    filled_session(&mut session);
    let before = session.state().clone();

    let outcome = service.submit(session.state().clone()).await;
    assert_eq!(outcome, SubmitOutcome::Rejected { status: 500 });

    let note = session.apply_outcome(&outcome);
    assert_eq!(note.title, "Data Not Submitted!");
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(session.state(), &before);
    assert_eq!(api.submissions.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_email_is_generic_and_not_sent() {
    let (url, api) = spawn_api(MockApi::new(StatusCode::OK)).await;
    let service = service_for(&url);
    let mut session = FormSession::new();
    filled_session(&mut session);
    session.set_email("not-an-email");

    let outcome = service.submit(session.state().clone()).await;
    assert_eq!(outcome, SubmitOutcome::Invalid(ValidationFailure::Generic));
    assert_eq!(
        session.apply_outcome(&outcome).text,
        "Check the form and try again"
    );
    assert_eq!(session.state().email, "not-an-email");
    assert!(api.submissions.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_unreachable_is_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = service_for(&format!("http://{}/form", addr));
    let mut session = FormSession::new();
    filled_session(&mut session);

    let outcome = service.submit(session.state().clone()).await;
    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(session.apply_outcome(&outcome).title, "Data Not Submitted!");
    assert!(!session.state().is_empty());
}
