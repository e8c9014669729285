// Rust guideline compliant 2026-10-16

//! The response envelope and its resolution algorithm.
//!
//! An [`Envelope`] may be constructed with any subset of its fields set.
//! [`Envelope::resolve`] fills in the rest in a fixed order:
//!
//! - Code: the explicit value, else the error's status code capability,
//!   else 500 when an error is attached, else 200
//! - Status: derived from the final code, always overwritten
//! - Message: empty for success; otherwise the explicit value, else the
//!   error's message capability, else the error text for 4xx (and for 5xx
//!   when the visibility flag is set), else the canonical reason phrase
//! - Data: the explicit non-null value, else the error's data capability

use crate::capability::{probe_data, probe_message, probe_status_code, BoxError, PlainError, Responder};
use crate::context;
use crate::payload::Data;
use http::{Extensions, StatusCode};
use serde::ser::{Error as _, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Symbolic class of a response, derived from its status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusClass {
    /// Anything outside 400-599, including 1xx and 3xx.
    Success,
    /// Client errors (400-499).
    Error,
    /// Server errors (500-599).
    Fail,
}

impl StatusClass {
    /// Classifies a status code.
    ///
    /// 1xx and 3xx codes classify as [`StatusClass::Success`].
    #[must_use]
    pub fn from_code(code: StatusCode) -> Self {
        match code.as_u16() {
            500..=599 => StatusClass::Fail,
            400..=499 => StatusClass::Error,
            _ => StatusClass::Success,
        }
    }

    /// Returns the wire name of the class.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            StatusClass::Success => "success",
            StatusClass::Error => "error",
            StatusClass::Fail => "fail",
        }
    }
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A response from a REST endpoint.
///
/// Fields left at their zero value are filled in by [`Envelope::resolve`].
/// Explicitly set `code`, `message` and `data` always win over derived
/// values.
#[derive(Debug, Default)]
pub struct Envelope {
    /// HTTP status code. `None` until resolved.
    pub code: Option<StatusCode>,
    /// Response class. Overwritten during resolution.
    pub status: Option<StatusClass>,
    /// Message for `error` and `fail` responses. Always empty for `success`.
    pub message: String,
    /// Payload for the response.
    pub data: Option<Data>,
    /// Error driving resolution. Never serialized.
    pub err: Option<Box<dyn Responder>>,
}

impl Envelope {
    /// Creates an empty envelope.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an envelope carrying only `err`.
    #[must_use]
    pub fn from_error(err: impl Responder) -> Self {
        Self::new().with_error(err)
    }

    /// Sets the status code.
    #[must_use]
    pub fn with_code(mut self, code: StatusCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the payload.
    ///
    /// A payload that encodes to JSON `null` counts as unset: it is omitted
    /// from the wire and the error's data capability still applies.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<Data>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Attaches an error that may expose capabilities.
    #[must_use]
    pub fn with_error(mut self, err: impl Responder) -> Self {
        self.err = Some(Box::new(err));
        self
    }

    /// Attaches a plain error with no capabilities.
    #[must_use]
    pub fn with_plain_error(self, err: impl Into<BoxError>) -> Self {
        self.with_error(PlainError::new(err))
    }

    /// Returns whether code and status have been resolved.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.code.is_some() && self.status.is_some()
    }

    /// Returns the status code to put on the status line.
    ///
    /// Falls back to 500 when the envelope has not been resolved.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.code.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Resolves the envelope using the visibility flag carried by `ctx`.
    pub fn parse(&mut self, ctx: &Extensions) {
        self.resolve(context::show_error(ctx));
    }

    /// Resolves code, status, message and data.
    ///
    /// `show_error` controls whether a 5xx response reveals the attached
    /// error's text. Re-running on an unchanged envelope with the same flag
    /// yields the same result.
    pub fn resolve(&mut self, show_error: bool) {
        let code = self.resolve_code();
        let status = StatusClass::from_code(code);
        self.code = Some(code);
        self.status = Some(status);

        self.resolve_message(code, status, show_error);
        self.resolve_data();
    }

    /// Clears every field so the envelope can be reused.
    pub fn reset(&mut self) {
        self.code = None;
        self.status = None;
        self.message.clear();
        self.data = None;
        self.err = None;
    }

    fn resolve_code(&self) -> StatusCode {
        if let Some(code) = self.code {
            return code;
        }

        if let Some(code) = probe_status_code(self.err.as_deref()) {
            return code;
        }

        if self.err.is_some() {
            StatusCode::INTERNAL_SERVER_ERROR
        } else {
            StatusCode::OK
        }
    }

    fn resolve_message(&mut self, code: StatusCode, status: StatusClass, show_error: bool) {
        if status == StatusClass::Success {
            self.message.clear();
            return;
        }

        if !self.message.is_empty() {
            return;
        }

        let err = self.err.as_deref();
        if let Some(message) = probe_message(err) {
            self.message = message;
            return;
        }

        self.message = match (status, err) {
            (StatusClass::Error, Some(err)) => err.to_string(),
            (StatusClass::Fail, Some(err)) if show_error => err.to_string(),
            _ => code.canonical_reason().unwrap_or_default().to_string(),
        };
    }

    fn resolve_data(&mut self) {
        if self.data.as_ref().is_some_and(|data| !data.is_null()) {
            return;
        }

        self.data = probe_data(self.err.as_deref());
    }
}

impl Serialize for Envelope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // A payload that encodes to null is nil on the wire.
        let data = match &self.data {
            Some(data) => Some(data.to_value().map_err(S::Error::custom)?)
                .filter(|value| !value.is_null()),
            None => None,
        };

        let len = 2 + usize::from(!self.message.is_empty()) + usize::from(data.is_some());
        let mut state = serializer.serialize_struct("Envelope", len)?;
        state.serialize_field("code", &self.code.map_or(0, |code| code.as_u16()))?;
        state.serialize_field("status", self.status.map_or("", StatusClass::as_str))?;
        if self.message.is_empty() {
            state.skip_field("message")?;
        } else {
            state.serialize_field("message", &self.message)?;
        }
        match &data {
            Some(value) => state.serialize_field("data", value)?,
            None => state.skip_field("data")?,
        }
        state.end()
    }
}

/// The decoded wire form of an envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeBody {
    /// HTTP status code.
    pub code: u16,
    /// Response class.
    pub status: StatusClass,
    /// Message, empty when absent.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub message: String,
    /// Payload, `None` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}
