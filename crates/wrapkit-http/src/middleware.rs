// Rust guideline compliant 2026-10-16

//! Middleware that sets the "show error" flag on every request.
//!
//! With the flag set, 5xx envelopes reveal the attached error's text in
//! `message`. Meant for development or internal deployments.
//!
//! ```
//! use http::{Request, Response};
//! use std::convert::Infallible;
//! use tower::{service_fn, Layer};
//! use wrapkit_http::ShowErrorLayer;
//!
//! let service = ShowErrorLayer::new(true).layer(service_fn(|req: Request<()>| async move {
//!     let show = wrapkit_core::context::show_error(req.extensions());
//!     Ok::<_, Infallible>(Response::new(show))
//! }));
//! # let _ = service;
//! ```

use http::Request;
use std::task::{Context, Poll};
use tower::{Layer, Service};
use tracing::trace;
use wrapkit_core::context::set_show_error;
use wrapkit_core::Config;

/// Layer that wraps services in [`ShowErrorService`].
#[derive(Debug, Clone, Copy)]
pub struct ShowErrorLayer {
    show: bool,
}

impl ShowErrorLayer {
    /// Creates a layer that sets the flag to `show`.
    #[must_use]
    pub fn new(show: bool) -> Self {
        Self { show }
    }

    /// Creates a layer from the configured default.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.show_error)
    }
}

impl<S> Layer<S> for ShowErrorLayer {
    type Service = ShowErrorService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        ShowErrorService {
            inner,
            show: self.show,
        }
    }
}

/// Service that sets the flag on the request before delegating.
#[derive(Debug, Clone)]
pub struct ShowErrorService<S> {
    inner: S,
    show: bool,
}

impl<S, B> Service<Request<B>> for ShowErrorService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        set_show_error(req.extensions_mut(), self.show);
        trace!(show_error = self.show, "set show-error flag on request");
        self.inner.call(req)
    }
}
