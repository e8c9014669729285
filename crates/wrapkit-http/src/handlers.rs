// Rust guideline compliant 2026-10-16

//! Default handlers for unmatched routes.

use crate::render::Renderer;
use http::{Extensions, Response, StatusCode};
use wrapkit_core::Envelope;

/// Renders a 404 envelope.
#[must_use]
pub fn not_found(renderer: &Renderer, ctx: &Extensions) -> Response<Vec<u8>> {
    renderer.respond(ctx, Envelope::new().with_code(StatusCode::NOT_FOUND))
}

/// Renders a 405 envelope.
#[must_use]
pub fn method_not_allowed(renderer: &Renderer, ctx: &Extensions) -> Response<Vec<u8>> {
    renderer.respond(ctx, Envelope::new().with_code(StatusCode::METHOD_NOT_ALLOWED))
}
