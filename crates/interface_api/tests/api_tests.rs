//! End-to-end tests for the HTTP API over mock stores

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use rust_decimal_macros::dec;
use serde_json::json;
use tower::ServiceExt;

use domain_claims::ports::mock::MockClaimStore;
use domain_users::ports::mock::MockUserStore;
use interface_api::config::ApiConfig;
use interface_api::create_router;
use interface_api::dto::claims::{
    ClaimResponse, DecisionResponse, ProcessClaimResponse, SubmitClaimResponse,
    ValidateEntriesResponse,
};
use interface_api::dto::users::CheckDuplicateResponse;
use test_utils::{DocumentFixtures, TemporalFixtures, TestClaimBuilder, TestUserBuilder};

fn app(claims: Arc<MockClaimStore>, users: Arc<MockUserStore>) -> Router {
    create_router(claims, users, ApiConfig::default())
}

fn actor() -> String {
    core_kernel::UserId::new().to_string()
}

async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    actor_id: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(actor_id) = actor_id {
        builder = builder.header("x-actor-id", actor_id);
    }
    let request = match body {
        Some(value) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn test_health_is_public() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));

    let (status, body) = send(&app, "GET", "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_api_requires_actor_header() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));

    let (status, _) = send(&app, "GET", "/api/v1/claims", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_submit_process_and_fetch_claim() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));
    let actor = actor();

    let submit_body = json!({
        "claim_type": "Tutoring",
        "hourly_rate": "200",
        "entries": [
            { "work_date": TemporalFixtures::today().to_string(), "hours": "6" },
            { "work_date": TemporalFixtures::yesterday().to_string(), "hours": "4" },
        ],
        "documents": [
            { "file_name": "timesheet.pdf", "content_type": "application/pdf", "content": [1, 2, 3] },
        ],
    });

    let (status, body) = send(&app, "POST", "/api/v1/claims", Some(&actor), Some(submit_body)).await;
    assert_eq!(status, StatusCode::OK);
    let submitted: SubmitClaimResponse = serde_json::from_value(body).unwrap();
    assert!(submitted.success);
    assert_eq!(submitted.message, "Claim submitted successfully");

    let process_uri = format!("/api/v1/claims/{}/process", submitted.claim_id);
    let (status, body) = send(&app, "POST", &process_uri, Some(&actor), None).await;
    assert_eq!(status, StatusCode::OK);
    let processed: ProcessClaimResponse = serde_json::from_value(body).unwrap();
    assert!(processed.success);
    assert!(processed.auto_approved);
    assert_eq!(processed.message, "Claim automatically approved - Standard rates");

    let claim_uri = format!("/api/v1/claims/{}", submitted.claim_id);
    let (status, body) = send(&app, "GET", &claim_uri, Some(&actor), None).await;
    assert_eq!(status, StatusCode::OK);
    let claim: ClaimResponse = serde_json::from_value(body).unwrap();
    assert_eq!(claim.status, "Approved");
    assert_eq!(claim.amount, dec!(2000));
    assert!(claim.approval_date.is_some());
    assert_eq!(claim.documents, vec!["timesheet.pdf".to_string()]);
}

#[tokio::test]
async fn test_process_without_documents_fails_in_band() {
    let claims = Arc::new(MockClaimStore::new());
    let claim = TestClaimBuilder::new().build();
    claims.insert_claim(claim.clone()).await;
    let app = app(claims, Arc::new(MockUserStore::new()));

    let uri = format!("/api/v1/claims/{}/process", uuid::Uuid::from(claim.id));
    let (status, body) = send(&app, "POST", &uri, Some(&actor()), None).await;

    assert_eq!(status, StatusCode::OK);
    let processed: ProcessClaimResponse = serde_json::from_value(body).unwrap();
    assert!(!processed.success);
    assert!(!processed.auto_approved);
    assert_eq!(
        processed.message,
        "Supporting documents are required for claim processing"
    );
}

#[tokio::test]
async fn test_manual_decision_flow() {
    let claims = Arc::new(MockClaimStore::new());
    // outside the auto band: 30h at R300
    let claim = TestClaimBuilder::new()
        .with_hours_worked(dec!(30))
        .with_hourly_rate(dec!(300))
        .build();
    claims.insert_claim(claim.clone()).await;
    claims.attach_document(DocumentFixtures::timesheet(claim.id)).await;
    let app = app(claims, Arc::new(MockUserStore::new()));
    let actor = actor();

    let process_uri = format!("/api/v1/claims/{}/process", uuid::Uuid::from(claim.id));
    let (_, body) = send(&app, "POST", &process_uri, Some(&actor), None).await;
    let processed: ProcessClaimResponse = serde_json::from_value(body).unwrap();
    assert!(processed.success);
    assert!(!processed.auto_approved);
    assert_eq!(
        processed.message,
        "Claim requires manual review: Non-standard rate, Extended hours, High claim amount"
    );

    let decision_uri = format!("/api/v1/claims/{}/decision", uuid::Uuid::from(claim.id));
    let (status, body) = send(
        &app,
        "POST",
        &decision_uri,
        Some(&actor),
        Some(json!({ "status": "Approved" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let decided: DecisionResponse = serde_json::from_value(body).unwrap();
    assert!(decided.success);
    assert!(decided.message.contains("has been manually approved."));

    // second decision on a resolved claim conflicts
    let (status, _) = send(
        &app,
        "POST",
        &decision_uri,
        Some(&actor),
        Some(json!({ "status": "Rejected" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_unknown_decision_status_is_bad_request() {
    let claims = Arc::new(MockClaimStore::new());
    let claim = TestClaimBuilder::new().build();
    claims.insert_claim(claim.clone()).await;
    claims.attach_document(DocumentFixtures::timesheet(claim.id)).await;
    let app = app(claims, Arc::new(MockUserStore::new()));

    let uri = format!("/api/v1/claims/{}/decision", uuid::Uuid::from(claim.id));
    let (status, body) = send(
        &app,
        "POST",
        &uri,
        Some(&actor()),
        Some(json!({ "status": "Declined" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Invalid status");
}

#[tokio::test]
async fn test_process_unknown_claim_is_not_found() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));

    let uri = format!("/api/v1/claims/{}/process", uuid::Uuid::new_v4());
    let (status, _) = send(&app, "POST", &uri, Some(&actor()), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_validate_entries_reports_violation() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));

    let body = json!({
        "submission_date": TemporalFixtures::today().to_string(),
        "hourly_rate": "100",
        "entries": [
            { "work_date": TemporalFixtures::tomorrow().to_string(), "hours": "4" },
        ],
    });

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/claims/validate-entries",
        Some(&actor()),
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let validated: ValidateEntriesResponse = serde_json::from_value(body).unwrap();
    assert!(!validated.valid);
    assert_eq!(validated.total_hours, dec!(0));
    assert_eq!(validated.errors.len(), 1);
    assert!(validated.errors[0].contains("date after submission"));
}

#[tokio::test]
async fn test_validate_entries_returns_aggregate() {
    let app = app(Arc::new(MockClaimStore::new()), Arc::new(MockUserStore::new()));

    let body = json!({
        "submission_date": TemporalFixtures::today().to_string(),
        "hourly_rate": "100",
        "entries": [
            { "work_date": TemporalFixtures::today().to_string(), "hours": "5" },
            { "work_date": TemporalFixtures::yesterday().to_string(), "hours": "3" },
        ],
    });

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/claims/validate-entries",
        Some(&actor()),
        Some(body),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let validated: ValidateEntriesResponse = serde_json::from_value(body).unwrap();
    assert!(validated.valid);
    assert_eq!(validated.total_hours, dec!(8));
    assert_eq!(validated.amount, dec!(800));
    assert!(validated.errors.is_empty());
}

#[tokio::test]
async fn test_check_duplicate_by_email() {
    let users = Arc::new(
        MockUserStore::with_users(vec![TestUserBuilder::new()
            .with_email("john.doe@example.com")
            .build()])
        .await,
    );
    let app = app(Arc::new(MockClaimStore::new()), users);

    let candidate = json!({
        "username": "other",
        "first_name": "Jane",
        "last_name": "Smith",
        "email": "john.doe@example.com",
        "phone": "0830000000",
    });

    let (status, body) = send(
        &app,
        "POST",
        "/api/v1/users/check-duplicate",
        Some(&actor()),
        Some(candidate),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let checked: CheckDuplicateResponse = serde_json::from_value(body).unwrap();
    assert!(checked.is_duplicate);
    assert_eq!(checked.field, Some("email".to_string()));
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let users = Arc::new(
        MockUserStore::with_users(vec![TestUserBuilder::new()
            .with_email("john.doe@example.com")
            .build()])
        .await,
    );
    let app = app(Arc::new(MockClaimStore::new()), users);

    let candidate = json!({
        "username": "other",
        "first_name": "Jane",
        "last_name": "Smith",
        "email": "john.doe@example.com",
        "phone": "0830000000",
    });

    let (status, body) = send(&app, "POST", "/api/v1/users", Some(&actor()), Some(candidate)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "A user with this email already exists.");
}

#[tokio::test]
async fn test_register_unique_user() {
    let users = Arc::new(MockUserStore::new());
    let app = app(Arc::new(MockClaimStore::new()), users);

    let candidate = json!({
        "username": "janedoe",
        "first_name": "Jane",
        "last_name": "Doe",
        "email": "jane.doe@example.com",
        "phone": "0825550001",
        "role": "Lecturer",
    });

    let (status, body) = send(&app, "POST", "/api/v1/users", Some(&actor()), Some(candidate)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "janedoe");
    assert_eq!(body["role"], "Lecturer");
}
