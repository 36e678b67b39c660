//! HTTP trigger tests exercising the router without a socket.

mod mocks;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::{Days, Utc};
use docreminder::repositories::Mailer;
use docreminder::{build_router, AppState, ReminderDispatcher};
use mocks::{sample_document, MockDocumentSource, MockEmailResolver, MockMailer};
use std::sync::Arc;
use tower::ServiceExt;

fn router_with(
    source: &MockDocumentSource,
    resolver: &MockEmailResolver,
    mailer: Option<&MockMailer>,
) -> Router {
    let dispatcher = ReminderDispatcher::new(
        Arc::new(source.clone()),
        Arc::new(resolver.clone()),
        mailer.map(|m| Arc::new(m.clone()) as Arc<dyn Mailer>),
        None,
        "DocReminder <onboarding@resend.dev>".to_string(),
        8,
    );
    build_router(Arc::new(AppState::new(dispatcher)))
}

async fn body_json(body: Body) -> serde_json::Value {
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let router = router_with(
        &MockDocumentSource::new(),
        &MockEmailResolver::new(),
        Some(&MockMailer::new()),
    );

    let response = router
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_trigger_returns_summary() {
    let today = Utc::now().date_naive();
    let source = MockDocumentSource::new();
    source.add_documents(vec![
        sample_document("doc-1", "owner-1", "Passport", today + Days::new(3)),
        sample_document("doc-2", "owner-2", "Visa", today + Days::new(7)),
    ]);
    let resolver = MockEmailResolver::new();
    resolver.add_email("owner-1", "one@example.com");
    // owner-2 unresolvable: counted and itemized, not dropped
    let mailer = MockMailer::new();

    let router = router_with(&source, &resolver, Some(&mailer));
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/send-reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response.into_body()).await;
    assert_eq!(json["success"], true);
    assert_eq!(
        json["message"],
        "Processed 2 documents. Sent: 1, Failed: 1"
    );
    assert_eq!(json["results"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_trigger_query_failure_returns_500() {
    let source = MockDocumentSource::new();
    source.fail_next();

    let router = router_with(&source, &MockEmailResolver::new(), Some(&MockMailer::new()));
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/send-reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("query failed"));
    assert!(json.get("results").is_none());
}

#[tokio::test]
async fn test_trigger_missing_credentials_returns_500() {
    let router = router_with(&MockDocumentSource::new(), &MockEmailResolver::new(), None);
    let response = router
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/send-reminders")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("RESEND_API_KEY"));
}

#[tokio::test]
async fn test_preflight_gets_permissive_cors() {
    let router = router_with(
        &MockDocumentSource::new(),
        &MockEmailResolver::new(),
        Some(&MockMailer::new()),
    );

    let response = router
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/send-reminders")
                .header(header::ORIGIN, "https://docs.example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "authorization")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
