//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Create a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Create an ID from an existing UUID
            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Get the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Parse an ID from a string
            pub fn parse(s: &str) -> Result<Self, uuid::Error> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, &self.0.to_string()[..8])
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Try to parse the full UUID
                if let Ok(uuid) = Uuid::parse_str(s) {
                    return Ok(Self(uuid));
                }
                // Try stripping common prefixes
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

define_id!(WalletId, "wal-");
define_id!(TransactionId, "txn-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wallet_id_creation() {
        let id = WalletId::new();
        assert!(!id.as_uuid().is_nil());
    }

    #[test]
    fn test_id_display() {
        let id = WalletId::new();
        let display = format!("{}", id);
        assert!(display.starts_with("wal-"));
        assert_eq!(display.len(), 12); // "wal-" + 8 chars
    }

    #[test]
    fn test_id_equality() {
        let id1 = WalletId::new();
        let id2 = id1;
        assert_eq!(id1, id2);

        let id3 = WalletId::new();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_id_ordering_is_total() {
        let mut ids: Vec<TransactionId> = (0..8).map(|_| TransactionId::new()).collect();
        ids.sort();
        for pair in ids.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_id_serialization() {
        let id = WalletId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: WalletId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_id_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id = WalletId::parse(uuid_str).unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_from_str_strips_prefix() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let prefixed = format!("txn-{}", uuid_str);
        let id: TransactionId = prefixed.parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), uuid_str);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the
        // underlying UUIDs can be compared.
        let wallet_id = WalletId::new();
        let transaction_id = TransactionId::new();
        assert_ne!(wallet_id.as_uuid(), transaction_id.as_uuid());
    }
}
