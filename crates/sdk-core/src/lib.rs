//! Core types for the wallet SDK.
//!
//! This crate provides foundational types used across the wallet client:
//!
//! - [`Network`] -- backend network identifier (Mainnet, Testnet)
//! - [`OrderStatus`] -- backend-owned order lifecycle states
//! - [`TransferType`] -- single- vs. multi-recipient transfers
//!
//! All enums carry their wire representation: the backend exposes order
//! status and transfer type as small integers, so each type maps to and
//! from `i32` explicitly rather than relying on discriminant order at a
//! distance.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Network
// ---------------------------------------------------------------------------

/// Wallet backend network identifier.
///
/// Determines which GraphQL endpoint the client talks to. The endpoint
/// table itself lives in the `config` crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Production mainnet.
    Mainnet,

    /// Public testnet.
    Testnet,
}

// ---------------------------------------------------------------------------
// OrderStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a payment order.
///
/// Transitions are backend-owned; the client only observes them. The
/// expected flow is `Pending -> Confirmed -> Executed -> Success | Fail`,
/// with `Pending`/`Confirmed` orders also eligible for `Canceled`. The
/// sole client-triggered transition is `confirm_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum OrderStatus {
    /// Created, awaiting user confirmation.
    Pending,

    /// Confirmed by the user, awaiting execution.
    Confirmed,

    /// Submitted for execution.
    Executed,

    /// Executed successfully.
    Success,

    /// Execution failed.
    Fail,

    /// Canceled before execution.
    Canceled,
}

impl OrderStatus {
    /// Wire representation (backend integer enum).
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Confirmed => 1,
            Self::Executed => 2,
            Self::Success => 3,
            Self::Fail => 4,
            Self::Canceled => 5,
        }
    }

    /// Parse the wire representation. Returns `None` for unknown values.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Pending),
            1 => Some(Self::Confirmed),
            2 => Some(Self::Executed),
            3 => Some(Self::Success),
            4 => Some(Self::Fail),
            5 => Some(Self::Canceled),
            _ => None,
        }
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> i32 {
        status.as_i32()
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = UnknownEnumValue;

    fn try_from(value: i32) -> Result<Self, UnknownEnumValue> {
        OrderStatus::from_i32(value).ok_or(UnknownEnumValue(value))
    }
}

// ---------------------------------------------------------------------------
// TransferType
// ---------------------------------------------------------------------------

/// Transfer fan-out: exactly one recipient vs. N recipients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i32", try_from = "i32")]
pub enum TransferType {
    /// Claimable by exactly one recipient.
    Single,

    /// Claimable by N recipients, N fixed at creation.
    Multiple,
}

impl TransferType {
    /// Wire representation (backend integer enum).
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Single => 0,
            Self::Multiple => 1,
        }
    }

    /// Parse the wire representation. Returns `None` for unknown values.
    pub const fn from_i32(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Single),
            1 => Some(Self::Multiple),
            _ => None,
        }
    }
}

impl From<TransferType> for i32 {
    fn from(ty: TransferType) -> i32 {
        ty.as_i32()
    }
}

impl TryFrom<i32> for TransferType {
    type Error = UnknownEnumValue;

    fn try_from(value: i32) -> Result<Self, UnknownEnumValue> {
        TransferType::from_i32(value).ok_or(UnknownEnumValue(value))
    }
}

// ---------------------------------------------------------------------------
// UnknownEnumValue
// ---------------------------------------------------------------------------

/// Error for an integer that maps to no known enum variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownEnumValue(pub i32);

impl std::fmt::Display for UnknownEnumValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown enum value {}", self.0)
    }
}

impl std::error::Error for UnknownEnumValue {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_wire_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Executed,
            OrderStatus::Success,
            OrderStatus::Fail,
            OrderStatus::Canceled,
        ] {
            assert_eq!(OrderStatus::from_i32(status.as_i32()), Some(status));
        }
    }

    #[test]
    fn order_status_unknown_value() {
        assert_eq!(OrderStatus::from_i32(6), None);
        assert_eq!(OrderStatus::from_i32(-1), None);
    }

    #[test]
    fn transfer_type_wire_values() {
        assert_eq!(TransferType::Single.as_i32(), 0);
        assert_eq!(TransferType::Multiple.as_i32(), 1);
        assert_eq!(TransferType::from_i32(2), None);
    }

    #[test]
    fn order_status_serde_as_integer() {
        let json = serde_json::to_string(&OrderStatus::Success).unwrap();
        assert_eq!(json, "3");

        let parsed: OrderStatus = serde_json::from_str("4").unwrap();
        assert_eq!(parsed, OrderStatus::Fail);

        assert!(serde_json::from_str::<OrderStatus>("9").is_err());
    }
}
