//! Wallet backend GraphQL client: HTTPS transport.
//!
//! This crate provides [`GraphqlClient`], a standalone HTTPS client for
//! executing named GraphQL operations against the custodial-wallet
//! backend.
//!
//! # Architecture
//!
//! This crate is **transport only** -- it knows how to POST a GraphQL
//! document with variables and headers and to unwrap the response
//! envelope, but it has no knowledge of the SDK's session state or
//! workflows. The SDK bridges the gap by implementing its `Executor`
//! trait on top of this.
//!
//! The payload codec ([`payload`]) and base64 helpers ([`base64`]) also
//! live here: both are wire-format concerns, not workflow logic.

pub mod base64;
mod error;
pub mod payload;

pub use error::GraphqlError;

use serde::Deserialize;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Response envelope
// ---------------------------------------------------------------------------

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    errors: Option<Vec<ErrorEntry>>,
}

/// One entry of the GraphQL `errors` array.
#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(default)]
    message: String,
}

/// Unwrap a GraphQL response body into its `data` value.
///
/// GraphQL-level errors take precedence over `data`: the wallet backend
/// never returns partial data alongside errors, so any `errors` entry
/// fails the whole operation.
fn parse_response(body: &str) -> Result<Value, GraphqlError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|_| GraphqlError::InvalidResponse)?;

    if let Some(errors) = envelope.errors {
        if !errors.is_empty() {
            for err in &errors {
                tracing::error!(message = %err.message, "backend GraphQL error");
            }
            return Err(GraphqlError::Backend);
        }
    }

    envelope.data.ok_or(GraphqlError::InvalidResponse)
}

// ---------------------------------------------------------------------------
// GraphQL client
// ---------------------------------------------------------------------------

/// HTTPS GraphQL client for the wallet backend.
///
/// Uses hyper + rustls. The client is stateless: the endpoint is passed
/// per call because the SDK can switch networks at runtime without
/// rebuilding its transport.
#[derive(Debug, Default, Clone, Copy)]
pub struct GraphqlClient;

impl GraphqlClient {
    /// Creates a new client.
    pub fn new() -> Self {
        Self
    }

    /// Execute a GraphQL operation and return the response `data` value.
    ///
    /// `headers` are appended verbatim after `content-type`; the caller
    /// supplies `authorization` or per-operation identity headers as the
    /// operation requires.
    pub async fn execute(
        &self,
        endpoint: &str,
        document: &str,
        variables: Value,
        headers: &[(&str, String)],
    ) -> Result<Value, GraphqlError> {
        let client = make_https_client()?;

        let body_json = serde_json::json!({
            "query": document,
            "variables": variables,
        })
        .to_string();

        tracing::debug!(endpoint, body = %body_json, "GraphQL request");

        let body = hyper::body::Bytes::from(body_json);

        let mut builder = hyper::Request::builder()
            .method(hyper::Method::POST)
            .uri(endpoint)
            .header("content-type", "application/json");

        for (name, value) in headers {
            builder = builder.header(*name, value.as_str());
        }

        let req = builder
            .body(http_body_util::Full::new(body))
            .map_err(|_| GraphqlError::RequestFailed)?;

        let resp = client.request(req).await.map_err(|e| {
            tracing::error!(?e, "GraphQL HTTP request failed");
            GraphqlError::RequestFailed
        })?;

        let status = resp.status();
        use http_body_util::BodyExt;
        let body_bytes = resp
            .into_body()
            .collect()
            .await
            .map_err(|_| GraphqlError::RequestFailed)?
            .to_bytes();

        let body_str =
            std::str::from_utf8(&body_bytes).map_err(|_| GraphqlError::InvalidResponse)?;

        if !status.is_success() {
            tracing::error!(%status, body = body_str, "GraphQL HTTP error response");
            return Err(GraphqlError::RequestFailed);
        }

        tracing::debug!(response = body_str, "GraphQL response");
        parse_response(body_str)
    }
}

/// Build a TLS-enabled hyper client.
fn make_https_client() -> Result<
    hyper_util::client::legacy::Client<
        hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>,
        http_body_util::Full<hyper::body::Bytes>,
    >,
    GraphqlError,
> {
    let _ = rustls::crypto::ring::default_provider().install_default();

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_native_roots()
        .map_err(|_| GraphqlError::TlsFailed)?
        .https_or_http()
        .enable_http2()
        .build();

    Ok(
        hyper_util::client::legacy::Client::builder(hyper_util::rt::TokioExecutor::new())
            .build(https),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
