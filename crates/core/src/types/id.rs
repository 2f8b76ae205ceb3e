//! Newtype IDs for type-safe entity references.

use serde::{Deserialize, Serialize};

/// A catalog product identifier.
///
/// Product IDs are human-readable slugs, e.g. `elephant-2ft-mahogany`.
/// Wrapping them prevents mixing product IDs with other string values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a product ID from a slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for ProductId {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// A review identifier assigned by the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i32);

impl ReviewId {
    /// Create a review ID from an i32 value.
    #[must_use]
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the underlying i32 value.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ReviewId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<ReviewId> for i32 {
    fn from(id: ReviewId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_round_trips_through_json() {
        let id = ProductId::new("elephant-2ft-mahogany");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"elephant-2ft-mahogany\"");
        let back: ProductId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn test_review_id_is_transparent() {
        let id = ReviewId::new(42);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "42");
        assert_eq!(id.as_i32(), 42);
    }
}
