//! Session JWT decoding.
//!
//! The backend issues Hasura-style JWTs. This module decodes the claims
//! segment locally -- signature verification is the backend's job; the
//! client only needs the expiry and the subject id.
//!
//! # Contract
//!
//! Token interpretation is strict and raises (login strategy "decode
//! and verify"): a malformed token is [`SdkError::InvalidToken`], an
//! `exp` in the past is [`SdkError::ExpiredToken`]. The login workflow
//! resets the session to logged-out on either error; decode failures
//! are never silently swallowed.

use serde_json::Value;

use config::constants::{JWT_CLAIMS_NAMESPACE, JWT_USER_ID_CLAIM};

use crate::SdkError;

/// Claims extracted from a session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TokenClaims {
    /// Expiry, unix seconds.
    pub exp: i64,
    /// Wallet user id from the Hasura claims namespace.
    pub user_id: String,
}

/// Decode the claims segment of a JWT without verifying the signature.
pub(crate) fn decode(token: &str) -> Result<TokenClaims, SdkError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(claims_b64), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(SdkError::InvalidToken);
    };

    let bytes = graphql::base64::decode_url(claims_b64).ok_or(SdkError::InvalidToken)?;
    let claims: Value = serde_json::from_slice(&bytes).map_err(|_| SdkError::InvalidToken)?;

    let exp = claims
        .get("exp")
        .and_then(Value::as_i64)
        .ok_or(SdkError::InvalidToken)?;

    let user_id = claims
        .get(JWT_CLAIMS_NAMESPACE)
        .and_then(|ns| ns.get(JWT_USER_ID_CLAIM))
        .and_then(Value::as_str)
        .ok_or(SdkError::InvalidToken)?
        .to_owned();

    Ok(TokenClaims { exp, user_id })
}

/// Decode and check freshness against `now` (unix seconds).
pub(crate) fn verify(token: &str, now: i64) -> Result<TokenClaims, SdkError> {
    let claims = decode(token)?;
    if claims.exp <= now {
        return Err(SdkError::ExpiredToken);
    }
    Ok(claims)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
