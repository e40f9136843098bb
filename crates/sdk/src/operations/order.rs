//! Order workflow: create, simulate, confirm, and list payment orders.
//!
//! Order payloads are structured JSON documents, base64-encoded on the
//! wire (see `graphql::payload`). Status transitions are backend-owned;
//! [`Client::confirm_order`] is the only caller-triggered transition.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use config::constants::DEFAULT_ORDER_PAGE_LIMIT;
use graphql::payload::{decode_payload, encode_payload};
use sdk_core::OrderStatus;

use crate::{documents, Client, Executor, SdkError};

// ---------------------------------------------------------------------------
// Result types
// ---------------------------------------------------------------------------

/// One historical order with its decoded payload.
#[derive(Debug, Clone)]
pub struct Order {
    /// Backend order id.
    pub id: String,
    /// Application the order was created under.
    pub application_id: String,
    /// Owning wallet user.
    pub wallet_user_id: String,
    /// Decoded payload document. Empty object if the stored payload
    /// could not be decoded.
    pub payload: Value,
    /// Backend-owned lifecycle status.
    pub status: OrderStatus,
    /// On-chain transaction sequence number.
    pub transaction_seq_no: i64,
    /// Backend order type discriminant.
    pub order_type: i64,
    /// Creation timestamp, backend format.
    pub created_at: String,
    /// Last update timestamp, backend format.
    pub updated_at: String,
    /// Transactions submitted for this order, in backend order.
    pub transactions: Vec<OrderTransaction>,
}

/// One on-chain transaction attached to an order.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderTransaction {
    /// Transaction hash.
    pub hash: String,
    /// Gas fee paid, smallest unit.
    #[serde(rename = "gasFee")]
    pub gas_fee: i64,
    /// Submission timestamp, backend format.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Backend transaction status discriminant.
    pub status: i64,
    /// Backend transaction type discriminant.
    #[serde(rename = "type")]
    pub tx_type: i64,
}

/// One page of order history.
#[derive(Debug, Clone)]
pub struct OrderPage {
    /// Orders in backend order (newest first).
    pub data: Vec<Order>,
    /// Offset/limit pagination echo plus the total match count.
    pub pagination: Pagination,
}

/// Offset/limit pagination state for a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Total records matching the filter, across all pages.
    pub total: u64,
    /// Requested page size.
    pub limit: u32,
    /// Requested page offset.
    pub offset: u32,
}

/// Parameters for [`Client::fetch_order_list`].
#[derive(Debug, Clone)]
pub struct OrderListParams {
    /// Page size. Defaults to 10.
    pub limit: u32,
    /// Page offset. Defaults to 0.
    pub offset: u32,
    /// Status filter. Defaults to `[Success]`.
    pub status: Vec<OrderStatus>,
}

impl Default for OrderListParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_ORDER_PAGE_LIMIT,
            offset: 0,
            status: vec![OrderStatus::Success],
        }
    }
}

// ---------------------------------------------------------------------------
// Wire shapes
// ---------------------------------------------------------------------------

/// Order as returned by the backend: payload still base64-encoded.
#[derive(Debug, Deserialize)]
struct WireOrder {
    id: String,
    #[serde(rename = "applicationId")]
    application_id: String,
    #[serde(rename = "walletUserId")]
    wallet_user_id: String,
    payload: String,
    status: OrderStatus,
    #[serde(rename = "transactionSeqNo")]
    transaction_seq_no: i64,
    #[serde(rename = "type")]
    order_type: i64,
    #[serde(rename = "createdAt")]
    created_at: String,
    #[serde(rename = "updatedAt")]
    updated_at: String,
    #[serde(default)]
    transactions: Vec<OrderTransaction>,
}

impl WireOrder {
    /// Decode the payload, degrading to an empty document on failure.
    /// One malformed record never fails the page it arrived in.
    fn into_order(self) -> Order {
        let payload = match decode_payload(&self.payload) {
            Some(doc) => doc,
            None => {
                tracing::warn!(order_id = %self.id, "order payload decode failed");
                Value::Object(Map::new())
            }
        };

        Order {
            id: self.id,
            application_id: self.application_id,
            wallet_user_id: self.wallet_user_id,
            payload,
            status: self.status,
            transaction_seq_no: self.transaction_seq_no,
            order_type: self.order_type,
            created_at: self.created_at,
            updated_at: self.updated_at,
            transactions: self.transactions,
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireAggregate {
    aggregate: WireAggregateCount,
}

#[derive(Debug, Deserialize)]
struct WireAggregateCount {
    count: u64,
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

impl<E: Executor> Client<E> {
    /// Create a payment order from a structured payload.
    ///
    /// The payload is base64(JSON)-encoded before transmission. Returns
    /// the backend order id; no local state is created or cached.
    pub async fn create_order(&self, payload: &Value) -> Result<String, SdkError> {
        self.require_authenticated()?;

        let variables = json!({
            "appId": self.app_id(),
            "payload": encode_payload(payload),
        });

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::CREATE_ORDER_MUTATION,
                variables,
                &self.auth_headers(),
            )
            .await?;

        let order_id = data
            .get("createOrder")
            .and_then(Value::as_str)
            .ok_or(SdkError::InvalidResponse)?;

        Ok(order_id.to_owned())
    }

    /// Dry-run an order payload without creating a persistent order.
    ///
    /// Returns the backend's raw simulation result. Mutates nothing,
    /// locally or remotely.
    pub async fn simulate_order(&self, payload: &Value) -> Result<Value, SdkError> {
        self.require_authenticated()?;

        let variables = json!({
            "payload": encode_payload(payload),
        });

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::SIMULATE_ORDER_QUERY,
                variables,
                &self.auth_headers(),
            )
            .await?;

        data.get("simulateOrder")
            .cloned()
            .ok_or(SdkError::InvalidResponse)
    }

    /// Commit a previously created order after user review.
    ///
    /// This is the sole caller-triggered status transition; everything
    /// else in the order lifecycle is backend-owned.
    ///
    /// # Errors
    ///
    /// [`SdkError::InvalidArgument`] if `order_id` is empty.
    pub async fn confirm_order(&self, order_id: &str) -> Result<bool, SdkError> {
        self.require_authenticated()?;
        if order_id.is_empty() {
            return Err(SdkError::InvalidArgument("order_id is required"));
        }

        let variables = json!({ "orderId": order_id });

        let data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::CONFIRM_ORDER_MUTATION,
                variables,
                &self.auth_headers(),
            )
            .await?;

        data.get("confirmOrder")
            .and_then(Value::as_bool)
            .ok_or(SdkError::InvalidResponse)
    }

    /// Fetch one page of the session user's order history.
    ///
    /// Backend ordering (newest first) is preserved, never re-sorted.
    /// Each record's payload is decoded individually; a malformed
    /// payload degrades to an empty document without dropping the
    /// record or failing the page.
    pub async fn fetch_order_list(&self, params: OrderListParams) -> Result<OrderPage, SdkError> {
        self.require_authenticated()?;

        let status: Vec<i32> = params.status.iter().map(|s| s.as_i32()).collect();
        let variables = json!({
            "walletUserId": self.user_id(),
            "limit": params.limit,
            "offset": params.offset,
            "status": status,
        });

        let mut data = self
            .executor()
            .execute(
                self.graphql_endpoint(),
                documents::FETCH_ORDER_LIST_QUERY,
                variables,
                &self.auth_headers(),
            )
            .await?;

        let orders: Vec<WireOrder> = serde_json::from_value(
            data.get_mut("order").map(Value::take).unwrap_or(Value::Null),
        )
        .map_err(|_| SdkError::InvalidResponse)?;

        let aggregate: WireAggregate = serde_json::from_value(
            data.get_mut("orderAggregate")
                .map(Value::take)
                .unwrap_or(Value::Null),
        )
        .map_err(|_| SdkError::InvalidResponse)?;

        Ok(OrderPage {
            data: orders.into_iter().map(WireOrder::into_order).collect(),
            pagination: Pagination {
                total: aggregate.aggregate.count,
                limit: params.limit,
                offset: params.offset,
            },
        })
    }
}
