//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Catalog item identifier.
///
/// The inner u64 is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Create a new `ItemId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item-{}", self.0)
    }
}

/// Identifier of the menu an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuId(u64);

impl MenuId {
    /// Create a new `MenuId` from a u64 value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the underlying value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for MenuId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "menu-{}", self.0)
    }
}

/// Business location identifier - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoreId(String);

impl StoreId {
    /// Create a new `StoreId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the store ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for StoreId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for StoreId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Laundromat identifier used by favorites.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaundromatId(String);

impl LaundromatId {
    /// Create a new `LaundromatId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the laundromat ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LaundromatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for LaundromatId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for LaundromatId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_new_and_value() {
        let id = ItemId::new(42);
        assert_eq!(id.value(), 42);
        assert_eq!(format!("{}", id), "item-42");
    }

    #[test]
    fn menu_id_display() {
        assert_eq!(MenuId::new(7).to_string(), "menu-7");
    }

    #[test]
    fn store_id_from_str() {
        let id = StoreId::from("stuy-1st-ave");
        assert_eq!(id.as_str(), "stuy-1st-ave");
        assert_eq!(format!("{}", id), "stuy-1st-ave");
    }

    #[test]
    fn laundromat_id_from_string() {
        let id = LaundromatId::from("lm-9".to_string());
        assert_eq!(id.as_str(), "lm-9");
    }

    #[test]
    fn ids_serialize_as_inner_value() {
        assert_eq!(serde_json::to_string(&ItemId::new(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&StoreId::new("s1")).unwrap(),
            "\"s1\""
        );
    }
}
