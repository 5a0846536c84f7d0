use axum::Router;
use axum::body::Body;
use axum::extract::Extension;
use axum::http::{Request, StatusCode};
use axum::middleware;
use axum::routing::get;
use tower::ServiceExt;

use voice_minutes::infrastructure::observability::{
    REQUEST_ID_HEADER, RequestId, request_id_middleware,
};

fn echo_app() -> Router {
    Router::new()
        .route(
            "/echo",
            get(|Extension(RequestId(id)): Extension<RequestId>| async move { id }),
        )
        .layer(middleware::from_fn(request_id_middleware))
}

#[test]
fn given_request_id_header_constant_when_accessed_then_returns_correct_value() {
    assert_eq!(REQUEST_ID_HEADER, "x-request-id");
}

#[tokio::test]
async fn given_incoming_request_id_when_handled_then_echoes_it() {
    let request = Request::builder()
        .uri("/echo")
        .header(REQUEST_ID_HEADER, "req-42")
        .body(Body::empty())
        .unwrap();

    let response = echo_app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-42");
}

#[tokio::test]
async fn given_no_request_id_when_handled_then_generates_uuid() {
    let request = Request::builder().uri("/echo").body(Body::empty()).unwrap();

    let response = echo_app().oneshot(request).await.unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[tokio::test]
async fn given_oversized_request_id_when_handled_then_replaces_it() {
    let request = Request::builder()
        .uri("/echo")
        .header(REQUEST_ID_HEADER, "x".repeat(500))
        .body(Body::empty())
        .unwrap();

    let response = echo_app().oneshot(request).await.unwrap();

    let id = response.headers()[REQUEST_ID_HEADER].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok());
}

#[test]
fn given_header_with_spaces_when_reading_request_id_then_generates_new_one() {
    let header = axum::http::HeaderValue::from_static("two words");

    let request_id = RequestId::from_header(Some(&header));

    assert_ne!(request_id.as_str(), "two words");
    assert!(uuid::Uuid::parse_str(request_id.as_str()).is_ok());
}
