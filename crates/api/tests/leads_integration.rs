//! Integration tests for public lead intake.

mod common;

use axum::http::{Method, StatusCode};
use common::{
    create_test_app, create_test_app_with, json_request, parse_response_body, seeded_store,
    test_config,
};
use domain::models::{LeadStatus, LeadType};
use domain::services::MockLeadRelay;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use persistence::repositories::LeadRepository;
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

fn lead_body(lead_type: &str) -> serde_json::Value {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    json!({
        "name": name,
        "email": email,
        "phone": "+91 98480 22338",
        "message": "Looking to open an outlet near Vijayawada.",
        "lead_type": lead_type
    })
}

#[tokio::test]
async fn test_submit_lead_success() {
    let relay = Arc::new(MockLeadRelay::new());
    let store = seeded_store();
    let app = create_test_app_with(test_config(), store.clone(), relay.clone());

    let request = json_request(Method::POST, "/api/v1/leads", lead_body("FRANCHISE"), None);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["relay"]["status"], "success");
    let lead_id = body["lead_id"].as_str().unwrap();

    let leads = LeadRepository::new(store).list_leads().unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id, lead_id);
    assert_eq!(leads[0].lead_type, LeadType::Franchise);
    assert_eq!(leads[0].status, LeadStatus::New);
    assert_eq!(relay.calls(), 1);
}

#[tokio::test]
async fn test_submit_lead_defaults_to_general() {
    let store = seeded_store();
    let app = create_test_app_with(test_config(), store.clone(), Arc::new(MockLeadRelay::new()));

    let mut body = lead_body("GENERAL");
    body.as_object_mut().unwrap().remove("lead_type");

    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/leads", body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let leads = LeadRepository::new(store).list_leads().unwrap();
    assert_eq!(leads[0].lead_type, LeadType::General);
}

#[tokio::test]
async fn test_relay_failure_keeps_lead() {
    let store = seeded_store();
    let app = create_test_app_with(
        test_config(),
        store.clone(),
        Arc::new(MockLeadRelay::failing()),
    );

    let request = json_request(Method::POST, "/api/v1/leads", lead_body("CALLBACK"), None);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = parse_response_body(response).await;
    assert_eq!(body["error"], "bad_gateway");
    let lead_id = body["lead_id"].as_str().unwrap();

    let leads = LeadRepository::new(store).list_leads().unwrap();
    assert_eq!(leads.len(), 2);
    assert_eq!(leads[0].id, lead_id);
    assert_eq!(leads[0].lead_type, LeadType::Callback);
}

#[tokio::test]
async fn test_relay_disabled_skips_forwarding() {
    let relay = Arc::new(MockLeadRelay::new());
    let mut config = test_config();
    config.relay.enabled = false;
    let app = create_test_app_with(config, seeded_store(), relay.clone());

    let request = json_request(Method::POST, "/api/v1/leads", lead_body("GENERAL"), None);
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = parse_response_body(response).await;
    assert_eq!(body["relay"]["status"], "skipped");
    assert_eq!(relay.calls(), 0);
}

#[tokio::test]
async fn test_submit_lead_validation_errors() {
    let cases = [
        (
            json!({ "name": "   ", "email": "a@example.com", "phone": "9876543210" }),
            "name",
        ),
        (
            json!({ "name": "Priya", "email": "not-an-email", "phone": "9876543210" }),
            "email",
        ),
        (
            json!({ "name": "Priya", "email": "a@example.com", "phone": "12" }),
            "phone",
        ),
    ];

    for (body, field) in cases {
        let store = seeded_store();
        let relay = Arc::new(MockLeadRelay::new());
        let app = create_test_app_with(test_config(), store.clone(), relay.clone());

        let response = app
            .oneshot(json_request(Method::POST, "/api/v1/leads", body.clone(), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);

        let parsed = parse_response_body(response).await;
        assert_eq!(parsed["error"], "validation_error");
        assert_eq!(parsed["details"].as_array().unwrap().len(), 1);
        assert_eq!(parsed["details"][0]["field"], field);
        assert!(!parsed["details"][0]["message"].as_str().unwrap().is_empty());
        assert_eq!(LeadRepository::new(store).list_leads().unwrap().len(), 1);
        assert_eq!(relay.calls(), 0);
    }
}

#[tokio::test]
async fn test_submit_lead_reports_every_invalid_field() {
    let (app, _store) = create_test_app();

    let body = json!({ "name": "Priya", "email": "not-an-email", "phone": "12" });
    let response = app
        .oneshot(json_request(Method::POST, "/api/v1/leads", body, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let parsed = parse_response_body(response).await;
    assert_eq!(parsed["message"], "2 validation errors");
    assert_eq!(parsed["details"][0]["field"], "email");
    assert_eq!(parsed["details"][0]["message"], "Invalid email address");
    assert_eq!(parsed["details"][1]["field"], "phone");
    assert_eq!(
        parsed["details"][1]["message"],
        "Phone number must contain 7-20 digits"
    );
}

#[tokio::test]
async fn test_submitted_lead_counts_as_new_in_stats() {
    let (app, _store) = create_test_app();
    let token = common::login_token(&app).await;

    let request = json_request(Method::POST, "/api/v1/leads", lead_body("FRANCHISE"), None);
    app.clone().oneshot(request).await.unwrap();

    let response = app
        .oneshot(common::get_request("/api/v1/admin/stats", Some(&token)))
        .await
        .unwrap();
    let body = parse_response_body(response).await;
    assert_eq!(body["total_leads"], 2);
    assert_eq!(body["new_leads"], 2);
}
