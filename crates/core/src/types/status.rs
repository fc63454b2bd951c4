//! Order status values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Order status as reported by the backend.
///
/// The backend sends a bare string. Known values map to variants; anything
/// else is carried through verbatim so a new backend status still renders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipping,
    Delivered,
    Cancelled,
    Refunded,
    Other(String),
}

impl OrderStatus {
    /// The wire value for this status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::Shipping => "SHIPPING",
            Self::Delivered => "DELIVERED",
            Self::Cancelled => "CANCELLED",
            Self::Refunded => "REFUNDED",
            Self::Other(raw) => raw,
        }
    }
}

impl From<String> for OrderStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => Self::Pending,
            "PAID" => Self::Paid,
            "SHIPPING" => Self::Shipping,
            "DELIVERED" => Self::Delivered,
            "CANCELLED" => Self::Cancelled,
            "REFUNDED" => Self::Refunded,
            _ => Self::Other(raw),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_status_parses_to_variant() {
        let status: OrderStatus = serde_json::from_str("\"DELIVERED\"").unwrap();
        assert_eq!(status, OrderStatus::Delivered);
    }

    #[test]
    fn test_unknown_status_is_kept_verbatim() {
        let status: OrderStatus = serde_json::from_str("\"배송준비중\"").unwrap();
        assert_eq!(status, OrderStatus::Other("배송준비중".to_string()));
        assert_eq!(status.to_string(), "배송준비중");
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"배송준비중\"");
    }
}
