// Rust guideline compliant 2026-10-16

//! Optional capabilities an attached error may expose.
//!
//! An error attached to an envelope can customize three independent facets
//! of the response: the status code, the message and the payload. Each one
//! is a default method on [`Responder`] that returns `None` unless the error
//! type overrides it, so an error may supply none, some or all of them and
//! the resolver probes each one on its own.
//!
//! ```
//! use http::StatusCode;
//! use wrapkit_core::{probe_status_code, Responder};
//!
//! #[derive(Debug)]
//! struct Upstream;
//!
//! impl std::fmt::Display for Upstream {
//!     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
//!         f.write_str("upstream timed out")
//!     }
//! }
//!
//! impl std::error::Error for Upstream {}
//!
//! impl Responder for Upstream {
//!     fn status_code(&self) -> Option<StatusCode> {
//!         Some(StatusCode::BAD_GATEWAY)
//!     }
//! }
//!
//! let err: Box<dyn Responder> = Box::new(Upstream);
//! assert_eq!(probe_status_code(Some(err.as_ref())), Some(StatusCode::BAD_GATEWAY));
//! ```

use crate::payload::Data;
use http::StatusCode;
use std::error::Error as StdError;
use std::fmt;

/// Boxed standard error, the common currency for plain errors.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// An error that can be attached to an envelope.
///
/// Every capability is optional. The default implementations report the
/// capability as absent.
///
/// Capabilities are read from the attached error only, never from its
/// [`source`](StdError::source) chain. An error that wraps another
/// responder must forward `status_code`, `response_message` and
/// `response_data` itself, or the wrapped values are lost.
pub trait Responder: StdError + Send + Sync + 'static {
    /// Supplies the HTTP status code for the response.
    fn status_code(&self) -> Option<StatusCode> {
        None
    }

    /// Supplies the display message for the response.
    fn response_message(&self) -> Option<String> {
        None
    }

    /// Supplies auxiliary data for the response.
    fn response_data(&self) -> Option<Data> {
        None
    }
}

/// Adapter for errors that expose no capabilities.
///
/// Wraps any boxed standard error so it can ride on an envelope. Display
/// and `source()` delegate to the wrapped error.
#[derive(Debug)]
pub struct PlainError(BoxError);

impl PlainError {
    /// Wraps an error.
    #[must_use]
    pub fn new(err: impl Into<BoxError>) -> Self {
        Self(err.into())
    }

    /// Returns the wrapped error.
    #[must_use]
    pub fn into_inner(self) -> BoxError {
        self.0
    }
}

impl fmt::Display for PlainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl StdError for PlainError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl Responder for PlainError {}

/// Returns the status code supplied by `err`, if any.
#[must_use]
pub fn probe_status_code(err: Option<&dyn Responder>) -> Option<StatusCode> {
    err.and_then(|e| e.status_code())
}

/// Returns the message supplied by `err`, if any.
#[must_use]
pub fn probe_message(err: Option<&dyn Responder>) -> Option<String> {
    err.and_then(|e| e.response_message())
}

/// Returns the data supplied by `err`, if any.
#[must_use]
pub fn probe_data(err: Option<&dyn Responder>) -> Option<Data> {
    err.and_then(|e| e.response_data())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MessageOnly;

    impl fmt::Display for MessageOnly {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("raw text")
        }
    }

    impl StdError for MessageOnly {}

    impl Responder for MessageOnly {
        fn response_message(&self) -> Option<String> {
            Some("friendly text".to_string())
        }
    }

    #[derive(Debug)]
    struct Context {
        inner: MessageOnly,
        forward: bool,
    }

    impl fmt::Display for Context {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "loading profile: {}", self.inner)
        }
    }

    impl StdError for Context {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.inner)
        }
    }

    impl Responder for Context {
        fn response_message(&self) -> Option<String> {
            if self.forward {
                self.inner.response_message()
            } else {
                None
            }
        }
    }

    #[test]
    fn test_wrapped_capabilities_need_forwarding() {
        let hidden = Context { inner: MessageOnly, forward: false };
        assert!(hidden.source().is_some());
        assert_eq!(probe_message(Some(&hidden)), None);

        let forwarded = Context { inner: MessageOnly, forward: true };
        assert_eq!(probe_message(Some(&forwarded)).as_deref(), Some("friendly text"));
    }

    #[test]
    fn test_probe_none_reports_absence() {
        assert_eq!(probe_status_code(None), None);
        assert_eq!(probe_message(None), None);
        assert!(probe_data(None).is_none());
    }

    #[test]
    fn test_plain_error_has_no_capabilities() {
        let err = PlainError::new("boom");
        assert_eq!(probe_status_code(Some(&err)), None);
        assert_eq!(probe_message(Some(&err)), None);
        assert!(probe_data(Some(&err)).is_none());
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn test_capabilities_are_probed_independently() {
        let err = MessageOnly;
        assert_eq!(probe_status_code(Some(&err)), None);
        assert_eq!(probe_message(Some(&err)).as_deref(), Some("friendly text"));
        assert!(probe_data(Some(&err)).is_none());
    }

    #[test]
    fn test_plain_error_delegates_source() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk gone");
        let err = PlainError::new(io);
        assert_eq!(err.to_string(), "disk gone");
        assert!(err.source().is_none());
    }
}
