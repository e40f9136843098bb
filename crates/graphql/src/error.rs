//! GraphQL transport error type.

use std::fmt;

/// Errors from GraphQL communication with the wallet backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphqlError {
    /// TLS setup failed.
    TlsFailed,

    /// The HTTP request failed (network, timeout, non-2xx status).
    RequestFailed,

    /// The backend returned an unparseable or unexpected response.
    InvalidResponse,

    /// The backend answered with GraphQL-level errors.
    Backend,
}

impl fmt::Display for GraphqlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TlsFailed => write!(f, "TLS setup failed"),
            Self::RequestFailed => write!(f, "GraphQL request failed"),
            Self::InvalidResponse => write!(f, "invalid GraphQL response"),
            Self::Backend => write!(f, "backend returned GraphQL errors"),
        }
    }
}

impl std::error::Error for GraphqlError {}
