// Rust guideline compliant 2026-10-16

//! Request builders and assertions for rendered envelopes in tests.
//!
//! These helpers panic with a descriptive message on failure.

use http::header::CONTENT_TYPE;
use http::{Method, Request, Response, StatusCode};
use serde::Serialize;
use wrapkit_core::config::DEFAULT_CONTENT_TYPE;
use wrapkit_core::EnvelopeBody;

/// Builds a request with `body` encoded as JSON.
///
/// # Panics
///
/// Panics if the body cannot be encoded or the request cannot be built.
#[track_caller]
pub fn json_request<T: Serialize + ?Sized>(method: Method, uri: &str, body: &T) -> Request<Vec<u8>> {
    let bytes = serde_json::to_vec(body)
        .unwrap_or_else(|err| panic!("could not encode request body, err: '{}'", err));
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE)
        .body(bytes)
        .unwrap_or_else(|err| panic!("could not build request to '{}', err: '{}'", uri, err))
}

/// Decodes a rendered body.
///
/// # Panics
///
/// Panics if the body is not a valid envelope.
#[track_caller]
pub fn decode_body(body: &[u8]) -> EnvelopeBody {
    serde_json::from_slice(body).unwrap_or_else(|err| {
        panic!(
            "could not parse body to envelope, err: '{}', body: '{}'",
            err,
            String::from_utf8_lossy(body)
        )
    })
}

/// Expects `code` on the response status line and in the envelope.
///
/// # Panics
///
/// Panics if either code differs.
#[track_caller]
pub fn expect_status_code<B>(response: &Response<B>, body: &EnvelopeBody, code: StatusCode) {
    assert_eq!(
        response.status(),
        code,
        "expected status code (in response) '{}', got '{}'",
        code.as_u16(),
        response.status().as_u16()
    );
    assert_eq!(
        body.code,
        code.as_u16(),
        "expected status code (in envelope) '{}', got '{}'",
        code.as_u16(),
        body.code
    );
}

/// Expects `message` in the envelope.
///
/// # Panics
///
/// Panics if the message differs.
#[track_caller]
pub fn expect_message(body: &EnvelopeBody, message: &str) {
    assert_eq!(
        body.message, message,
        "expected message '{}', got '{}'",
        message, body.message
    );
}

/// Expects `code` on the status line and in the envelope, and `message` in the envelope.
///
/// # Panics
///
/// Panics on any mismatch.
#[track_caller]
pub fn expect_status_and_message<B>(
    response: &Response<B>,
    body: &EnvelopeBody,
    code: StatusCode,
    message: &str,
) {
    expect_status_code(response, body, code);
    expect_message(body, message);
}
