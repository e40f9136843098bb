//! Transfer workflow: issue, fetch, and claim value transfers.
//!
//! A transfer is a pre-funded grant claimable by one (`Single`) or many
//! (`Multiple`) recipients before an expiration. The expiration is
//! always creation time plus [`TRANSFER_TTL_SECS`]; callers never
//! supply it. Amounts and counts are floored to integers before
//! transmission -- fractional inputs are truncated, not rejected, so
//! callers wanting rejection must pre-validate.

use serde::Deserialize;
use serde_json::{json, Value};

use config::constants::{HEADER_TRANSFER_ID, TRANSFER_TTL_SECS};
use sdk_core::TransferType;

use crate::{documents, utils, Client, Executor, SdkError};

// ---------------------------------------------------------------------------
// Parameter types
// ---------------------------------------------------------------------------

/// Parameters for [`Client::create_transfer`] (single recipient).
#[derive(Debug, Clone)]
pub struct CreateTransferParams {
    /// Transfer amount; floored to an integer before transmission.
    pub amount: f64,
    /// Token symbol. `None` lets the backend apply its default token.
    pub symbol: Option<String>,
}

/// Parameters for [`Client::create_multiple_transfer`] (N recipients).
#[derive(Debug, Clone)]
pub struct CreateMultipleTransferParams {
    /// Total transfer amount; floored to an integer before transmission.
    pub amount: f64,
    /// Token symbol. `None` lets the backend apply its default token.
    pub symbol: Option<String>,
    /// Recipient count; floored from a numeric-or-string input.
    pub count: CountInput,
}

/// Recipient count accepted as a number or a numeric string.
///
/// The backend's JS clients pass this field in either form, so the wire
/// contract tolerates both; either way it is floored to an integer.
#[derive(Debug, Clone)]
pub enum CountInput {
    /// Numeric count, possibly fractional.
    Number(f64),
    /// Count as a decimal string, e.g. `"3"` or `"3.7"`.
    Text(String),
}

impl CountInput {
    /// Floor to an integer count.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if a text input is not numeric.
    fn floored(&self) -> Result<i64, SdkError> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| SdkError::InvalidArgument("count is not numeric"))?,
        };
        if !value.is_finite() {
            return Err(SdkError::InvalidArgument("count is not numeric"));
        }
        Ok(value.floor() as i64)
    }
}

impl From<f64> for CountInput {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<u32> for CountInput {
    fn from(n: u32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for CountInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CountInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// A transfer record with its accumulated claims.
#[derive(Debug, Clone, Deserialize)]
pub struct Transfer {
    /// Backend transfer id.
    pub id: String,
    /// Issuing wallet user.
    #[serde(rename = "walletUserId")]
    pub wallet_user_id: String,
    /// Whether this record is a refund of an expired transfer.
    #[serde(rename = "isRefund")]
    pub is_refund: bool,
    /// Total granted amount, smallest unit.
    #[serde(rename = "totalAmount")]
    pub total_amount: i64,
    /// Maximum number of claims.
    #[serde(rename = "totalCount")]
    pub total_count: i64,
    /// Expiry, unix seconds. Creation time plus the workflow TTL.
    #[serde(rename = "expirationAt")]
    pub expiration_at: i64,
    /// Creation timestamp, backend format.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Claims recorded so far, in backend order. Monotonic: entries
    /// accumulate and are never removed.
    #[serde(rename = "transfer_claimeds", default)]
    pub claims: Vec<TransferClaim>,
    #[serde(rename = "transferClaimedsAggregate")]
    claimed_aggregate: ClaimAggregate,
}

impl Transfer {
    /// Backend-computed aggregate count of claims.
    pub fn claim_count(&self) -> u64 {
        self.claimed_aggregate.aggregate.count
    }
}

/// One recipient's claim against a transfer.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferClaim {
    /// Claiming wallet user.
    #[serde(rename = "walletUserId")]
    pub wallet_user_id: String,
    /// Claim timestamp, backend format.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Deserialize)]
struct ClaimAggregate {
    aggregate: ClaimAggregateCount,
}

#[derive(Debug, Clone, Deserialize)]
struct ClaimAggregateCount {
    count: u64,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl<E: Executor> Client<E> {
    /// Issue a single-recipient transfer.
    ///
    /// `expirationAt` is computed here as now plus the 24h workflow TTL.
    /// Returns the backend transfer id.
    pub async fn create_transfer(
        &self,
        params: CreateTransferParams,
    ) -> Result<String, SdkError> {
        self.require_authenticated()?;

        let variables = json!({
            "amount": params.amount.floor() as i64,
            "expirationAt": utils::unix_timestamp_secs() + TRANSFER_TTL_SECS,
            "symbol": params.symbol,
            "type": TransferType::Single.as_i32(),
        });

        self.send_create_transfer(variables).await
    }

    /// Issue a multi-recipient transfer claimable `count` times.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `count` is non-numeric or floors
    /// to zero or below. The check happens before any network call.
    pub async fn create_multiple_transfer(
        &self,
        params: CreateMultipleTransferParams,
    ) -> Result<String, SdkError> {
        self.require_authenticated()?;

        let count = params.count.floored()?;
        if count <= 0 {
            return Err(SdkError::InvalidArgument("count must be positive"));
        }

        let variables = json!({
            "amount": params.amount.floor() as i64,
            "count": count,
            "expirationAt": utils::unix_timestamp_secs() + TRANSFER_TTL_SECS,
            "symbol": params.symbol,
            "type": TransferType::Multiple.as_i32(),
        });

        self.send_create_transfer(variables).await
    }

    /// Fetch a transfer by id, including claims and the claim-count
    /// aggregate.
    ///
    /// Returns `Ok(None)` when the id matches nothing -- an unknown id
    /// is an empty result, not an error.
    pub async fn fetch_transfer(&self, id: &str) -> Result<Option<Transfer>, SdkError> {
        self.require_authenticated()?;
        if id.is_empty() {
            return Err(SdkError::InvalidArgument("transfer id is required"));
        }

        let headers = [(HEADER_TRANSFER_ID, id.to_owned())];
        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::FETCH_TRANSFER_QUERY,
                json!({ "id": id }),
                &headers,
            )
            .await?;

        let records: Vec<Transfer> = serde_json::from_value(
            data.get("transferCreated")
                .cloned()
                .unwrap_or(Value::Null),
        )
        .map_err(|_| SdkError::InvalidResponse)?;

        Ok(records.into_iter().next())
    }

    /// Claim a transfer on behalf of the session user.
    ///
    /// `transfer_param` is an opaque token owned by the backend (it
    /// identifies the transfer and the claim right being exercised) and
    /// is passed through end-to-end. The client makes no idempotency
    /// guarantee: retrying is safe only if the backend deduplicates.
    pub async fn claim_transfer(&self, transfer_param: &str) -> Result<bool, SdkError> {
        self.require_authenticated()?;

        let variables = json!({ "transferParam": transfer_param });

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::CLAIM_TRANSFER_MUTATION,
                variables,
                &self.auth_headers(),
            )
            .await?;

        data.get("claimTransfer")
            .and_then(Value::as_bool)
            .ok_or(SdkError::InvalidResponse)
    }

    /// Shared tail of both create-transfer entry points.
    async fn send_create_transfer(&self, variables: Value) -> Result<String, SdkError> {
        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::CREATE_TRANSFER_MUTATION,
                variables,
                &self.auth_headers(),
            )
            .await?;

        let transfer_id = data
            .get("createTransfer")
            .and_then(Value::as_str)
            .ok_or(SdkError::InvalidResponse)?;

        Ok(transfer_id.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
