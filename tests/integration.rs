//! Integration tests for the employee portal.
//!
//! This test suite drives the HTTP API end to end:
//! - Account creation and the welcome notice
//! - Renames and directory re-keying
//! - Password rotation (mismatch, weak password, success)
//! - Timesheet updates, summaries and resets
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::str::FromStr;
use tower::ServiceExt;

use employee_portal::api::{AppState, create_router};
use employee_portal::config::ConfigLoader;

// =============================================================================
// Test Helpers
// =============================================================================

fn create_router_for_test() -> Router {
    let config = ConfigLoader::load("./config/portal.yaml").expect("Failed to load config");
    create_router(AppState::from_config(&config))
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap()
    };

    (status, json)
}

async fn create_employee(router: &Router, first_name: &str, last_name: &str) -> Value {
    let (status, body) = send(
        router,
        "POST",
        "/employees",
        Some(json!({ "first_name": first_name, "last_name": last_name })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
    body
}

async fn record_time(router: &Router, username: &str, day: Value, minutes: i64) -> StatusCode {
    let (status, _) = send(
        router,
        "PUT",
        &format!("/employees/{}/timesheet", username),
        Some(json!({ "day": day, "minutes": minutes })),
    )
    .await;
    status
}

async fn summary(router: &Router, username: &str) -> (StatusCode, Value) {
    send(
        router,
        "GET",
        &format!("/employees/{}/timesheet", username),
        None,
    )
    .await
}

// =============================================================================
// Account Creation
// =============================================================================

#[tokio::test]
async fn test_create_employee_returns_credentials() {
    let router = create_router_for_test();

    let notice = create_employee(&router, "JOHN", "doe").await;

    assert_eq!(notice["first_name"], "John");
    assert_eq!(notice["username"], "j_doe");

    let password = notice["password"].as_str().unwrap();
    assert!((8..=16).contains(&password.len()));
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
}

#[tokio::test]
async fn test_short_last_name_username() {
    let router = create_router_for_test();

    let notice = create_employee(&router, "Al", "Li").await;

    assert_eq!(notice["username"], "a_li");
}

#[tokio::test]
async fn test_list_usernames() {
    let router = create_router_for_test();

    let (status, body) = send(&router, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["usernames"], json!([]));

    create_employee(&router, "Zoe", "Young").await;
    create_employee(&router, "Adam", "Brown").await;

    let (_, body) = send(&router, "GET", "/employees", None).await;
    assert_eq!(body["usernames"], json!(["a_bro", "z_you"]));
}

#[tokio::test]
async fn test_blank_name_rejected() {
    let router = create_router_for_test();

    let (status, body) = send(
        &router,
        "POST",
        "/employees",
        Some(json!({ "first_name": "  ", "last_name": "Doe" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Rename
// =============================================================================

#[tokio::test]
async fn test_rename_rekeys_employee() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;
    assert_eq!(record_time(&router, "j_doe", json!("monday"), 60).await, StatusCode::NO_CONTENT);

    let (status, body) = send(
        &router,
        "PUT",
        "/employees/j_doe/name",
        Some(json!({ "first_name": "Jane", "last_name": "Smith" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "j_smi");

    let (status, _) = summary(&router, "j_doe").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = summary(&router, "j_smi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["display_name"], "Jane Smith");
    assert_eq!(body["total_pay"], "12.00");

    let (_, body) = send(&router, "GET", "/employees", None).await;
    assert_eq!(body["usernames"], json!(["j_smi"]));
}

#[tokio::test]
async fn test_rename_onto_existing_username_conflicts() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;
    create_employee(&router, "Ada", "Lovelace").await;

    let (status, body) = send(
        &router,
        "PUT",
        "/employees/a_lov/name",
        Some(json!({ "first_name": "Jim", "last_name": "Doe" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], "USERNAME_TAKEN");

    let (_, body) = send(&router, "GET", "/employees", None).await;
    assert_eq!(body["usernames"], json!(["a_lov", "j_doe"]));
}

// =============================================================================
// Password Rotation
// =============================================================================

#[tokio::test]
async fn test_password_rotation_flow() {
    let router = create_router_for_test();
    let notice = create_employee(&router, "John", "Doe").await;
    let password = notice["password"].as_str().unwrap().to_string();

    // Wrong current password
    let (status, body) = send(
        &router,
        "PUT",
        "/employees/j_doe/password",
        Some(json!({ "current_password": "guess", "new_password": "NewPass123" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "PASSWORD_MISMATCH");

    // Correct current password, weak replacement
    let (status, body) = send(
        &router,
        "PUT",
        "/employees/j_doe/password",
        Some(json!({ "current_password": password, "new_password": "password" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "WEAK_PASSWORD");

    // The generated password is still current after both failures
    let (status, _) = send(
        &router,
        "PUT",
        "/employees/j_doe/password",
        Some(json!({ "current_password": password, "new_password": "NewPass123" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // And now the new one is
    let (status, _) = send(
        &router,
        "PUT",
        "/employees/j_doe/password",
        Some(json!({ "current_password": "NewPass123", "new_password": "Another456" })),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// =============================================================================
// Timesheet
// =============================================================================

#[tokio::test]
async fn test_summary_for_new_employee_reports_no_hours() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    let (status, body) = summary(&router, "j_doe").await;

    assert_eq!(status, StatusCode::OK);
    let days = body["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "sunday");
    assert_eq!(days[6]["day"], "saturday");
    assert!(days.iter().all(|d| d["display"] == "No hours reported."));
    assert_eq!(body["total_pay"], "0.00");
    assert_eq!(body["hourly_rate"], "12.00");
}

#[tokio::test]
async fn test_monday_and_tuesday_pay() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    assert_eq!(record_time(&router, "j_doe", json!("monday"), 60).await, StatusCode::NO_CONTENT);
    assert_eq!(record_time(&router, "j_doe", json!(2), 30).await, StatusCode::NO_CONTENT);

    let (_, body) = summary(&router, "j_doe").await;

    assert_eq!(body["days"][1]["display"], "1 hrs 0 min");
    assert_eq!(body["days"][2]["display"], "0 hrs 30 min");
    assert_eq!(body["total_minutes"], 90);
    assert_eq!(
        decimal(body["total_pay"].as_str().unwrap()),
        decimal("18.00")
    );
}

#[tokio::test]
async fn test_hours_and_minutes_display() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    record_time(&router, "j_doe", json!("Wednesday"), 125).await;

    let (_, body) = summary(&router, "j_doe").await;
    assert_eq!(body["days"][3]["display"], "2 hrs 5 min");
    assert_eq!(body["total_pay"], "25.00");
}

#[tokio::test]
async fn test_menu_number_seven_is_sunday() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    record_time(&router, "j_doe", json!(7), 45).await;

    let (_, body) = summary(&router, "j_doe").await;
    assert_eq!(body["days"][0]["minutes"], 45);
}

#[tokio::test]
async fn test_out_of_range_inputs_rejected() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    assert_eq!(record_time(&router, "j_doe", json!("monday"), 1441).await, StatusCode::BAD_REQUEST);
    assert_eq!(record_time(&router, "j_doe", json!("monday"), -1).await, StatusCode::BAD_REQUEST);
    assert_eq!(record_time(&router, "j_doe", json!(0), 60).await, StatusCode::BAD_REQUEST);
    assert_eq!(record_time(&router, "j_doe", json!("someday"), 60).await, StatusCode::BAD_REQUEST);

    let (_, body) = summary(&router, "j_doe").await;
    assert_eq!(body["total_minutes"], 0);
}

#[tokio::test]
async fn test_full_day_accepted() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;

    assert_eq!(record_time(&router, "j_doe", json!("friday"), 1440).await, StatusCode::NO_CONTENT);

    let (_, body) = summary(&router, "j_doe").await;
    assert_eq!(body["days"][5]["display"], "24 hrs 0 min");
    assert_eq!(body["total_pay"], "288.00");
}

#[tokio::test]
async fn test_reset_timesheet_is_idempotent() {
    let router = create_router_for_test();
    create_employee(&router, "John", "Doe").await;
    record_time(&router, "j_doe", json!("saturday"), 300).await;

    let (status, _) = send(&router, "DELETE", "/employees/j_doe/timesheet", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, once) = summary(&router, "j_doe").await;

    let (status, _) = send(&router, "DELETE", "/employees/j_doe/timesheet", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (_, twice) = summary(&router, "j_doe").await;

    assert_eq!(once["days"], twice["days"]);
    assert_eq!(twice["total_pay"], "0.00");
    assert!(
        twice["days"]
            .as_array()
            .unwrap()
            .iter()
            .all(|d| d["display"] == "No hours reported.")
    );
}

// =============================================================================
// Error Cases
// =============================================================================

#[tokio::test]
async fn test_unknown_employee_everywhere() {
    let router = create_router_for_test();

    let (status, body) = summary(&router, "ghost").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "EMPLOYEE_NOT_FOUND");

    assert_eq!(record_time(&router, "ghost", json!("monday"), 10).await, StatusCode::NOT_FOUND);

    let (status, _) = send(&router, "DELETE", "/employees/ghost/timesheet", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &router,
        "PUT",
        "/employees/ghost/name",
        Some(json!({ "first_name": "A", "last_name": "B" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_missing_content_type() {
    let router = create_router_for_test();

    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/employees")
                .body(Body::from(r#"{"first_name":"John","last_name":"Doe"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(body["code"], "MISSING_CONTENT_TYPE");
}
