// Rust guideline compliant 2026-10-16

//! Rendering envelopes onto HTTP responses.
//!
//! [`Renderer::render`] resolves an envelope against the request's
//! extensions, encodes it and writes content type, status and body. When
//! encoding fails the renderer re-enters resolution with a generic server
//! error carrying the encode failure, so the transport always receives a
//! well-formed body.

use http::header::CONTENT_TYPE;
use http::{Extensions, HeaderName, HeaderValue, Request, Response, StatusCode};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, warn};
use wrapkit_core::config::DEFAULT_CONTENT_TYPE;
use wrapkit_core::{Config, Envelope, Responder, Result};

/// Body written when even the generic error envelope cannot be encoded.
const LAST_RESORT_BODY: &[u8] = br#"{"code":500,"status":"fail","message":"Internal Server Error"}"#;

/// Turns a resolved envelope into body bytes.
pub trait Encoder: Send + Sync {
    /// Encodes `envelope`.
    ///
    /// # Errors
    ///
    /// Returns an error if the envelope cannot be represented.
    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>>;
}

/// JSON encoder backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    /// Creates a compact JSON encoder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pretty-printing JSON encoder.
    #[must_use]
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Encoder for JsonEncoder {
    fn encode(&self, envelope: &Envelope) -> Result<Vec<u8>> {
        let body = if self.pretty {
            serde_json::to_vec_pretty(envelope)?
        } else {
            serde_json::to_vec(envelope)?
        };
        Ok(body)
    }
}

/// Output sink for a rendered envelope.
pub trait ResponseWriter {
    /// Sets a response header, replacing any previous value.
    fn insert_header(&mut self, name: HeaderName, value: HeaderValue);
    /// Sets the status line.
    fn write_status(&mut self, status: StatusCode);
    /// Sets the body.
    fn write_body(&mut self, body: Vec<u8>);
}

impl ResponseWriter for Response<Vec<u8>> {
    fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers_mut().insert(name, value);
    }

    fn write_status(&mut self, status: StatusCode) {
        *self.status_mut() = status;
    }

    fn write_body(&mut self, body: Vec<u8>) {
        *self.body_mut() = body;
    }
}

/// Resolves, encodes and writes envelopes.
#[derive(Clone)]
pub struct Renderer {
    encoder: Arc<dyn Encoder>,
    content_type: HeaderValue,
}

impl fmt::Debug for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderer")
            .field("content_type", &self.content_type)
            .finish_non_exhaustive()
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    /// Creates a renderer with the compact JSON encoder and the default
    /// content type.
    #[must_use]
    pub fn new() -> Self {
        Self {
            encoder: Arc::new(JsonEncoder::new()),
            content_type: HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        }
    }

    /// Creates a renderer from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured content type is not a valid header value.
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            encoder: Arc::new(JsonEncoder { pretty: config.pretty }),
            content_type: config.content_type_header()?,
        })
    }

    /// Replaces the encoder.
    #[must_use]
    pub fn with_encoder(mut self, encoder: impl Encoder + 'static) -> Self {
        self.encoder = Arc::new(encoder);
        self
    }

    /// Replaces the content type.
    #[must_use]
    pub fn with_content_type(mut self, content_type: HeaderValue) -> Self {
        self.content_type = content_type;
        self
    }

    /// Resolves `envelope` with the flag carried by `ctx` and writes it to `w`.
    pub fn render<W>(&self, w: &mut W, ctx: &Extensions, envelope: &mut Envelope)
    where
        W: ResponseWriter + ?Sized,
    {
        self.render_inner(w, ctx, envelope, true);
    }

    /// Renders an envelope carrying only `err`.
    pub fn error<W>(&self, w: &mut W, ctx: &Extensions, err: impl Responder)
    where
        W: ResponseWriter + ?Sized,
    {
        self.render(w, ctx, &mut Envelope::from_error(err));
    }

    /// Renders `envelope` into a new response.
    #[must_use]
    pub fn respond(&self, ctx: &Extensions, mut envelope: Envelope) -> Response<Vec<u8>> {
        let mut response = Response::new(Vec::new());
        self.render(&mut response, ctx, &mut envelope);
        response
    }

    /// Renders `envelope` into a new response using the request's extensions.
    #[must_use]
    pub fn respond_to<B>(&self, req: &Request<B>, envelope: Envelope) -> Response<Vec<u8>> {
        self.respond(req.extensions(), envelope)
    }

    fn render_inner<W>(&self, w: &mut W, ctx: &Extensions, envelope: &mut Envelope, may_fall_back: bool)
    where
        W: ResponseWriter + ?Sized,
    {
        envelope.parse(ctx);
        let code = envelope.status_code();

        match self.encoder.encode(envelope) {
            Ok(body) => {
                debug!(
                    code = code.as_u16(),
                    status = envelope.status.map(|s| s.as_str()).unwrap_or_default(),
                    "rendered envelope"
                );
                self.write(w, code, body);
            }
            Err(err) if may_fall_back => {
                warn!(code = code.as_u16(), error = %err, "failed to encode envelope, rendering generic error");
                let mut fallback = Envelope::new().with_plain_error(err);
                self.render_inner(w, ctx, &mut fallback, false);
            }
            Err(err) => {
                error!(error = %err, "failed to encode generic error envelope");
                self.write(w, StatusCode::INTERNAL_SERVER_ERROR, LAST_RESORT_BODY.to_vec());
            }
        }
    }

    fn write<W>(&self, w: &mut W, status: StatusCode, body: Vec<u8>)
    where
        W: ResponseWriter + ?Sized,
    {
        w.insert_header(CONTENT_TYPE, self.content_type.clone());
        w.write_status(status);
        w.write_body(body);
    }
}
