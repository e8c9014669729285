// Rust guideline compliant 2026-10-16

//! Canned envelopes for common status codes.
//!
//! These only pre-seed fields. Everything else is still derived by
//! [`Envelope::resolve`].

use crate::envelope::Envelope;
use crate::payload::Data;
use http::StatusCode;

impl Envelope {
    fn with_code_and_message(code: StatusCode, message: impl Into<String>) -> Self {
        Self::new().with_code(code).with_message(message)
    }

    fn with_code_and_data(code: StatusCode, data: impl Into<Data>) -> Self {
        Self::new().with_code(code).with_data(data)
    }

    // 2xx

    /// 200: the request has succeeded.
    #[must_use]
    pub fn ok(data: impl Into<Data>) -> Self {
        Self::with_code_and_data(StatusCode::OK, data)
    }

    /// 201: the request has succeeded and a new resource has been created.
    #[must_use]
    pub fn created(data: impl Into<Data>) -> Self {
        Self::with_code_and_data(StatusCode::CREATED, data)
    }

    /// 202: the request has been received but not yet acted upon.
    #[must_use]
    pub fn accepted(data: impl Into<Data>) -> Self {
        Self::with_code_and_data(StatusCode::ACCEPTED, data)
    }

    /// 204: there is no content to send for this request.
    #[must_use]
    pub fn no_content() -> Self {
        Self::new().with_code(StatusCode::NO_CONTENT)
    }

    /// 205: tells the user agent to reset the document which sent this request.
    #[must_use]
    pub fn reset_content() -> Self {
        Self::new().with_code(StatusCode::RESET_CONTENT)
    }

    // 4xx

    /// 400: the server could not understand the request.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::BAD_REQUEST, message)
    }

    /// 401: the client must authenticate itself.
    #[must_use]
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::UNAUTHORIZED, message)
    }

    /// 403: the client is known but has no access rights to the content.
    #[must_use]
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::FORBIDDEN, message)
    }

    /// 404: the server can not find the requested resource.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::NOT_FOUND, message)
    }

    /// 409: the request conflicts with the current state of the server.
    #[must_use]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::CONFLICT, message)
    }

    /// 410: the content has been permanently deleted.
    #[must_use]
    pub fn gone(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::GONE, message)
    }

    /// 415: the media format of the request is not supported.
    #[must_use]
    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    /// 429: the client has sent too many requests in a given amount of time.
    #[must_use]
    pub fn too_many_requests(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::TOO_MANY_REQUESTS, message)
    }

    /// 451: the resource cannot legally be provided.
    #[must_use]
    pub fn unavailable_for_legal_reasons(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::UNAVAILABLE_FOR_LEGAL_REASONS, message)
    }

    // 5xx

    /// 500: the server encountered a situation it doesn't know how to handle.
    #[must_use]
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// 501: the request method is not supported by the server.
    #[must_use]
    pub fn not_implemented(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::NOT_IMPLEMENTED, message)
    }

    /// 503: the server is not ready to handle the request.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::with_code_and_message(StatusCode::SERVICE_UNAVAILABLE, message)
    }
}
