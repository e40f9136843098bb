//! Protocol-level constants.
//!
//! Workflow parameters fixed by the backend contract. None of these are
//! caller-tunable: the transfer TTL in particular is a workflow constant,
//! never supplied by the caller.

/// Lifetime of a newly created transfer, in seconds (24 hours).
///
/// `expirationAt` is always computed as creation time plus this value.
pub const TRANSFER_TTL_SECS: i64 = 24 * 3600;

/// Default page size for order listings.
pub const DEFAULT_ORDER_PAGE_LIMIT: u32 = 10;

/// JWT claims namespace holding the Hasura session claims.
pub const JWT_CLAIMS_NAMESPACE: &str = "https://hasura.io/jwt/claims";

/// Claim key (inside [`JWT_CLAIMS_NAMESPACE`]) holding the wallet user id.
pub const JWT_USER_ID_CLAIM: &str = "x-hasura-user-id";

/// Identity header for the pre-login user-existence lookup.
pub const HEADER_TELEGRAM_ID: &str = "x-hasura-tg-id";

/// Identity header for transfer lookups.
pub const HEADER_TRANSFER_ID: &str = "x-hasura-trans-id";
