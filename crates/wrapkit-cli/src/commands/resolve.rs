// Rust guideline compliant 2026-10-16

//! Resolves and renders an envelope described on the command line.

use anyhow::{anyhow, Context, Result};
use http::header::CONTENT_TYPE;
use http::{Extensions, Response, StatusCode};
use serde_json::Value;
use std::fmt;
use wrapkit_core::context::with_show_error;
use wrapkit_core::{Config, Data, Envelope, Responder};
use wrapkit_http::Renderer;

/// Inputs for the `resolve` command.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Explicit status code.
    pub code: Option<u16>,
    /// Explicit message.
    pub message: Option<String>,
    /// Explicit payload as JSON text.
    pub data: Option<String>,
    /// Text of an attached error.
    pub error: Option<String>,
    /// Status code the attached error supplies.
    pub error_code: Option<u16>,
    /// Message the attached error supplies.
    pub error_message: Option<String>,
    /// Payload the attached error supplies, as JSON text.
    pub error_data: Option<String>,
    /// Overrides the configured show-error default.
    pub show_error: Option<bool>,
    /// Overrides the configured pretty-printing.
    pub pretty: Option<bool>,
    /// Prints the status line and content type before the body.
    pub include: bool,
}

/// Error assembled from command-line flags.
#[derive(Debug)]
struct FlagError {
    text: String,
    code: Option<StatusCode>,
    message: Option<String>,
    data: Option<Value>,
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::error::Error for FlagError {}

impl Responder for FlagError {
    fn status_code(&self) -> Option<StatusCode> {
        self.code
    }

    fn response_message(&self) -> Option<String> {
        self.message.clone()
    }

    fn response_data(&self) -> Option<Data> {
        self.data.clone().map(Data::from)
    }
}

/// Resolves and prints the envelope.
///
/// # Errors
///
/// Returns an error if a flag value is invalid.
pub fn execute(options: ResolveOptions, config: &Config) -> Result<()> {
    let output = render(options, config)?;
    println!("{}", output);
    Ok(())
}

/// Resolves the envelope and returns the text `execute` prints.
///
/// # Errors
///
/// Returns an error if:
/// - A status code is outside 100-999
/// - A JSON payload cannot be parsed
/// - The configured content type is invalid
pub fn render(options: ResolveOptions, config: &Config) -> Result<String> {
    let mut config = config.clone();
    if let Some(pretty) = options.pretty {
        config.pretty = pretty;
    }
    let show_error = options.show_error.unwrap_or(config.show_error);
    let renderer = Renderer::from_config(&config)?;
    let include = options.include;

    let envelope = build_envelope(options)?;
    let ctx = with_show_error(&Extensions::new(), show_error);
    let response = renderer.respond(&ctx, envelope);

    let body = String::from_utf8_lossy(response.body()).into_owned();
    if include {
        Ok(format!("{}\n\n{}", head(&response), body))
    } else {
        Ok(body)
    }
}

fn build_envelope(options: ResolveOptions) -> Result<Envelope> {
    let mut envelope = Envelope::new();

    if let Some(code) = options.code {
        envelope = envelope.with_code(parse_code(code)?);
    }
    if let Some(message) = options.message {
        envelope = envelope.with_message(message);
    }
    if let Some(data) = options.data.as_deref() {
        envelope = envelope.with_data(parse_json(data, "--data")?);
    }

    let has_capability =
        options.error_code.is_some() || options.error_message.is_some() || options.error_data.is_some();
    if options.error.is_some() || has_capability {
        let err = FlagError {
            text: options.error.unwrap_or_else(|| "error".to_string()),
            code: options.error_code.map(parse_code).transpose()?,
            message: options.error_message,
            data: options
                .error_data
                .as_deref()
                .map(|data| parse_json(data, "--error-data"))
                .transpose()?,
        };
        envelope = envelope.with_error(err);
    }

    Ok(envelope)
}

fn parse_code(code: u16) -> Result<StatusCode> {
    StatusCode::from_u16(code).map_err(|_| anyhow!("Invalid status code: {} (expected 100-999)", code))
}

fn parse_json(text: &str, flag: &str) -> Result<Value> {
    serde_json::from_str(text).with_context(|| format!("{} is not valid JSON", flag))
}

fn head(response: &Response<Vec<u8>>) -> String {
    let status = response.status();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    format!(
        "HTTP/1.1 {} {}\ncontent-type: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        content_type
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_envelope() {
        let output = render(ResolveOptions::default(), &Config::default()).expect("render");
        assert_eq!(output, r#"{"code":200,"status":"success"}"#);
    }

    #[test]
    fn test_error_capabilities_from_flags() {
        let options = ResolveOptions {
            error: Some("dial tcp: refused".to_string()),
            error_code: Some(502),
            error_data: Some(r#"{"retry":true}"#.to_string()),
            ..ResolveOptions::default()
        };
        let output = render(options, &Config::default()).expect("render");
        assert_eq!(
            output,
            r#"{"code":502,"status":"fail","message":"Bad Gateway","data":{"retry":true}}"#
        );
    }

    #[test]
    fn test_show_error_flag_overrides_config() {
        let options = ResolveOptions {
            error: Some("boom".to_string()),
            show_error: Some(true),
            ..ResolveOptions::default()
        };
        let output = render(options, &Config::default()).expect("render");
        assert_eq!(output, r#"{"code":500,"status":"fail","message":"boom"}"#);
    }

    #[test]
    fn test_include_prints_head() {
        let options = ResolveOptions {
            code: Some(404),
            include: true,
            ..ResolveOptions::default()
        };
        let output = render(options, &Config::default()).expect("render");
        assert!(output.starts_with("HTTP/1.1 404 Not Found\ncontent-type: application/json; charset=utf-8\n\n"));
    }

    #[test]
    fn test_invalid_code_is_rejected() {
        let options = ResolveOptions {
            code: Some(42),
            ..ResolveOptions::default()
        };
        assert!(render(options, &Config::default()).is_err());
    }

    #[test]
    fn test_invalid_data_is_rejected() {
        let options = ResolveOptions {
            data: Some("{".to_string()),
            ..ResolveOptions::default()
        };
        let err = render(options, &Config::default()).expect_err("invalid json");
        assert!(err.to_string().contains("--data"));
    }
}
