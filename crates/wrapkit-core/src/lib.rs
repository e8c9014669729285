// Rust guideline compliant 2026-10-16

//! Wrapkit Core Library
//!
//! This crate resolves uniform JSON response envelopes for HTTP services:
//! - Envelope model and the resolution algorithm (code, status, message, data)
//! - Optional capabilities that attached errors may expose
//! - Type-erased payloads with deferred JSON conversion
//! - The request-scoped "show error" visibility flag
//! - Canned envelopes for common status codes
//! - Configuration and error types

pub mod capability;
pub mod config;
pub mod context;
pub mod envelope;
pub mod error;
mod finite;
pub mod helpers;
pub mod payload;

pub use capability::{probe_data, probe_message, probe_status_code, BoxError, PlainError, Responder};
pub use config::Config;
pub use envelope::{Envelope, EnvelopeBody, StatusClass};
pub use error::{Error, Result};
pub use payload::Data;
