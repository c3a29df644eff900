//! # Identifier Types
//!
//! String-based identifiers for exchanges and resting orders.
//!
//! - [`ExchangeId`]: unique across a snapshot
//! - [`OrderId`]: unique within its exchange's order book

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Creates a new identifier.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            #[inline]
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id!(
    /// Identifier of an exchange.
    ///
    /// # Examples
    ///
    /// ```
    /// use execution_planner::domain::value_objects::ExchangeId;
    ///
    /// let id = ExchangeId::new("kraken");
    /// assert_eq!(id.as_str(), "kraken");
    /// ```
    ExchangeId
);

string_id!(
    /// Identifier of a resting order within an exchange.
    OrderId
);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_inner() {
        assert_eq!(ExchangeId::new("ex-1").to_string(), "ex-1");
        assert_eq!(OrderId::from("ask-7").to_string(), "ask-7");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(ExchangeId::new("a") < ExchangeId::new("b"));
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ExchangeId::new("ex-1")).unwrap();
        assert_eq!(json, "\"ex-1\"");
        let id: OrderId = serde_json::from_str("\"bid-1\"").unwrap();
        assert_eq!(id.as_str(), "bid-1");
    }
}
