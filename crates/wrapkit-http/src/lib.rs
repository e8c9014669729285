// Rust guideline compliant 2026-10-16

//! HTTP rendering for wrapkit envelopes.
//!
//! This crate provides the serialization boundary that turns an envelope
//! into a status line, content type and body, the tower middleware that
//! sets the "show error" flag per request, default handlers, and helpers
//! for asserting on rendered responses in tests.

pub mod handlers;
pub mod middleware;
pub mod render;
pub mod testkit;

pub use middleware::{ShowErrorLayer, ShowErrorService};
pub use render::{Encoder, JsonEncoder, Renderer, ResponseWriter};
