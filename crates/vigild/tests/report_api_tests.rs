//! HTTP contract tests for the report API.
//!
//! Drives the real router via tower's oneshot, no socket bind.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use vigild::server::{app, AppState};
use vigild::store::TicketStore;

fn test_app() -> Router {
    app(Arc::new(AppState::new(TicketStore::new())))
}

fn post_report(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/reports")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_reports(query: &str) -> Request<Body> {
    Request::builder()
        .uri(format!("/api/reports{}", query))
        .body(Body::empty())
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submit_then_list_shows_ticket_first() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_report(json!({
            "issue_type": "Phishing",
            "title": "t",
            "description": "d"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    let ticket_id = created["report"]["ticket_id"].as_str().unwrap();
    assert!(!ticket_id.is_empty());
    assert_eq!(created["report"]["status"], "Pending Review");
    assert!(!created["message"].as_str().unwrap().is_empty());

    let response = app
        .oneshot(get_reports("?page=1&limit=10"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    assert_eq!(listing["data"][0]["ticket_id"].as_str().unwrap(), ticket_id);
    assert_eq!(listing["data"][0]["status"], "Pending Review");
}

#[tokio::test]
async fn missing_required_field_is_rejected_with_400() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_report(json!({
            "issue_type": "",
            "title": "x",
            "description": "y"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("issue_type"));

    // Nothing was stored
    let listing = body_json(app.oneshot(get_reports("")).await.unwrap()).await;
    assert_eq!(listing["pagination"]["total_results"], 0);
}

#[tokio::test]
async fn absent_field_is_rejected_with_400_not_422() {
    let app = test_app();

    let response = app
        .oneshot(post_report(json!({
            "issue_type": "phishing",
            "title": "x"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert!(body["message"].as_str().unwrap().contains("description"));
}

#[tokio::test]
async fn location_is_optional_and_null_when_absent() {
    let app = test_app();

    let response = app
        .oneshot(post_report(json!({
            "issue_type": "lost-device",
            "title": "left my badge somewhere",
            "description": "last seen in building C"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let created = body_json(response).await;
    assert!(created["report"]["location"].is_null());
}

#[tokio::test]
async fn bad_query_parameters_fall_back_to_defaults() {
    let app = test_app();

    for i in 0..3 {
        let response = app
            .clone()
            .oneshot(post_report(json!({
                "issue_type": "phishing",
                "title": format!("t{}", i),
                "description": "d"
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(get_reports("?page=abc&limit=zero"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let listing = body_json(response).await;
    assert_eq!(listing["pagination"]["current_page"], 1);
    assert_eq!(listing["pagination"]["total_results"], 3);
    assert_eq!(listing["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn pagination_math_and_out_of_range_pages() {
    let app = test_app();

    for i in 0..25 {
        app.clone()
            .oneshot(post_report(json!({
                "issue_type": "strange-login",
                "title": format!("login alert {}", i),
                "description": "unfamiliar device"
            })))
            .await
            .unwrap();
    }

    let listing = body_json(
        app.clone()
            .oneshot(get_reports("?page=3&limit=10"))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(listing["pagination"]["total_results"], 25);
    assert_eq!(listing["pagination"]["total_pages"], 3);
    assert_eq!(listing["pagination"]["current_page"], 3);
    assert_eq!(listing["data"].as_array().unwrap().len(), 5);

    let listing = body_json(
        app.oneshot(get_reports("?page=4&limit=10")).await.unwrap(),
    )
    .await;
    assert_eq!(listing["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn concurrent_submissions_never_collide() {
    let app = test_app();

    let submit = |n: usize| {
        let app = app.clone();
        async move {
            let response = app
                .oneshot(post_report(json!({
                    "issue_type": "phishing",
                    "title": format!("concurrent {}", n),
                    "description": "d"
                })))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            body_json(response).await["report"]["ticket_id"]
                .as_str()
                .unwrap()
                .to_string()
        }
    };

    let (a, b, c, d) = tokio::join!(submit(0), submit(1), submit(2), submit(3));
    let ids = [a, b, c, d];
    let unique: std::collections::HashSet<&String> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
}

#[tokio::test]
async fn health_reports_ticket_count() {
    let app = test_app();

    app.clone()
        .oneshot(post_report(json!({
            "issue_type": "terror-threat",
            "title": "t",
            "description": "d"
        })))
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["tickets_stored"], 1);
}
