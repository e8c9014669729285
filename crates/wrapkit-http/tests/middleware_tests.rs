// Rust guideline compliant 2026-10-16

//! Tests for the show-error middleware.

use http::{Request, Response, StatusCode};
use std::convert::Infallible;
use tower::{service_fn, Layer, ServiceExt};
use wrapkit_core::context::show_error;
use wrapkit_core::{Config, Envelope};
use wrapkit_http::testkit::{decode_body, expect_status_and_message};
use wrapkit_http::{Renderer, ShowErrorLayer};

async fn failing_handler(req: Request<()>) -> Result<Response<Vec<u8>>, Infallible> {
    let envelope = Envelope::new()
        .with_code(StatusCode::INTERNAL_SERVER_ERROR)
        .with_plain_error("myErrorMsg");
    Ok(Renderer::new().respond_to(&req, envelope))
}

#[tokio::test]
async fn test_layer_sets_flag() {
    let service = ShowErrorLayer::new(true).layer(service_fn(|req: Request<()>| async move {
        Ok::<_, Infallible>(show_error(req.extensions()))
    }));

    let seen = service.oneshot(Request::new(())).await.expect("infallible");
    assert!(seen, "expected show-error flag to be true");
}

#[tokio::test]
async fn test_layer_can_clear_flag() {
    let service = ShowErrorLayer::new(false).layer(service_fn(|req: Request<()>| async move {
        Ok::<_, Infallible>(show_error(req.extensions()))
    }));

    let mut request = Request::new(());
    wrapkit_core::context::set_show_error(request.extensions_mut(), true);
    let seen = service.oneshot(request).await.expect("infallible");
    assert!(!seen);
}

#[tokio::test]
async fn test_flag_reveals_fail_message() {
    let service = ShowErrorLayer::new(true).layer(service_fn(failing_handler));

    let response = service.oneshot(Request::new(())).await.expect("infallible");
    let body = decode_body(response.body());
    expect_status_and_message(&response, &body, StatusCode::INTERNAL_SERVER_ERROR, "myErrorMsg");
}

#[tokio::test]
async fn test_without_layer_fail_message_is_generic() {
    let response = service_fn(failing_handler)
        .oneshot(Request::new(()))
        .await
        .expect("infallible");
    let body = decode_body(response.body());
    expect_status_and_message(
        &response,
        &body,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
    );
}

#[tokio::test]
async fn test_layer_from_config() {
    let config = Config {
        show_error: true,
        ..Config::default()
    };
    let service = ShowErrorLayer::from_config(&config).layer(service_fn(failing_handler));

    let response = service.oneshot(Request::new(())).await.expect("infallible");
    let body = decode_body(response.body());
    assert_eq!(body.message, "myErrorMsg");
}
