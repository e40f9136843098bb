//! SDK error types.
//!
//! [`SdkError`] is the unified error type for all SDK operations.
//! Variants are zero-size discriminants apart from `&'static str`
//! context on configuration and argument errors.

use std::fmt;

// ---------------------------------------------------------------------------
// SdkError
// ---------------------------------------------------------------------------

/// Errors from SDK operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SdkError {
    /// Invalid client construction arguments.
    InvalidConfig(&'static str),

    /// The client was used before successful construction.
    NotInitialized,

    /// The operation requires a session token but none is set.
    NotAuthenticated,

    /// A caller-supplied argument is empty or out of range.
    InvalidArgument(&'static str),

    /// The login token's `exp` claim is already in the past.
    ExpiredToken,

    /// The login token could not be decoded or is missing claims.
    InvalidToken,

    /// The transport call failed (network, TLS, non-2xx status).
    TransportFailed,

    /// The backend returned an unparseable or unexpected response.
    InvalidResponse,

    /// The backend answered with GraphQL-level errors.
    BackendRejected,
}

impl fmt::Display for SdkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::NotInitialized => write!(f, "client not initialized"),
            Self::NotAuthenticated => write!(f, "not authenticated, login first"),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            Self::ExpiredToken => write!(f, "session token expired"),
            Self::InvalidToken => write!(f, "session token invalid"),
            Self::TransportFailed => write!(f, "transport call failed"),
            Self::InvalidResponse => write!(f, "invalid backend response"),
            Self::BackendRejected => write!(f, "backend rejected the operation"),
        }
    }
}

impl std::error::Error for SdkError {}

impl From<graphql::GraphqlError> for SdkError {
    fn from(err: graphql::GraphqlError) -> Self {
        match err {
            graphql::GraphqlError::TlsFailed | graphql::GraphqlError::RequestFailed => {
                Self::TransportFailed
            }
            graphql::GraphqlError::InvalidResponse => Self::InvalidResponse,
            graphql::GraphqlError::Backend => Self::BackendRejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_map_through() {
        assert_eq!(
            SdkError::from(graphql::GraphqlError::TlsFailed),
            SdkError::TransportFailed
        );
        assert_eq!(
            SdkError::from(graphql::GraphqlError::RequestFailed),
            SdkError::TransportFailed
        );
        assert_eq!(
            SdkError::from(graphql::GraphqlError::InvalidResponse),
            SdkError::InvalidResponse
        );
        assert_eq!(
            SdkError::from(graphql::GraphqlError::Backend),
            SdkError::BackendRejected
        );
    }

    #[test]
    fn display_is_stable() {
        assert_eq!(
            SdkError::NotAuthenticated.to_string(),
            "not authenticated, login first"
        );
        assert_eq!(
            SdkError::InvalidArgument("count must be positive").to_string(),
            "invalid argument: count must be positive"
        );
    }
}
