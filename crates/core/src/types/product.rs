//! The catalog product model.
//!
//! Products are owned by the catalog and referenced, never mutated, by the
//! rest of the system. They serialize cleanly so a cart snapshot can embed
//! the full product and round-trip it through storage.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::language::Language;
use crate::types::price::Rupees;

/// The wood a statue is carved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WoodType {
    Aakeshya,
    Mahogany,
}

impl WoodType {
    /// All wood types, in catalog display order.
    pub const ALL: [Self; 2] = [Self::Aakeshya, Self::Mahogany];

    /// The lowercase identifier used in URLs and serialized data.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aakeshya => "aakeshya",
            Self::Mahogany => "mahogany",
        }
    }

    /// Parse the URL form; unknown values are `None`.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "aakeshya" => Some(Self::Aakeshya),
            "mahogany" => Some(Self::Mahogany),
            _ => None,
        }
    }

    /// Localized display label.
    #[must_use]
    pub const fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (Self::Aakeshya, Language::En) => "Aakeshya",
            (Self::Aakeshya, Language::Ta) => "ஆகேஷ்யா",
            (Self::Mahogany, Language::En) => "Mahogany",
            (Self::Mahogany, Language::Ta) => "மஹோகனி",
        }
    }
}

impl std::fmt::Display for WoodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The cost components behind a product's base price.
///
/// Invariant: `total()` equals the product's `base_price`. The catalog tests
/// assert this for every listed product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// Raw making cost.
    pub cost: Rupees,
    /// GST charged on the making cost.
    pub gst: Rupees,
    /// Packing charges.
    pub packing: Rupees,
    /// Freight charges.
    pub freight: Rupees,
}

impl PriceBreakdown {
    /// Sum of all components; must equal the base price.
    #[must_use]
    pub fn total(&self) -> Rupees {
        self.cost + self.gst + self.packing + self.freight
    }
}

/// A handcrafted wooden elephant statue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    /// English display name.
    pub name: String,
    /// Tamil display name.
    pub name_ta: String,
    /// English description.
    pub description: String,
    /// Tamil description.
    pub description_ta: String,
    pub wood_type: WoodType,
    pub size_in_feet: f64,
    pub weight_in_kg: u32,
    /// The all-inclusive price charged per unit.
    pub base_price: Rupees,
    /// Cost components summing to `base_price`.
    pub breakdown: PriceBreakdown,
    /// Image paths under `/static`.
    pub images: Vec<String>,
    pub in_stock: bool,
}

impl Product {
    /// Display name in the requested language.
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name,
            Language::Ta => &self.name_ta,
        }
    }

    /// Description in the requested language.
    #[must_use]
    pub fn localized_description(&self, language: Language) -> &str {
        match language {
            Language::En => &self.description,
            Language::Ta => &self.description_ta,
        }
    }

    /// Primary image path, if the product has one.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: ProductId::new("elephant-2ft-mahogany"),
            name: "Elephant - 2 ft (Mahogany)".to_string(),
            name_ta: "யானை - 2 அடி (மஹோகனி)".to_string(),
            description: "Mahogany wood elephant statue.".to_string(),
            description_ta: "மஹோகனி மர யானை சிலை.".to_string(),
            wood_type: WoodType::Mahogany,
            size_in_feet: 2.0,
            weight_in_kg: 50,
            base_price: Rupees::new(36_444),
            breakdown: PriceBreakdown {
                cost: Rupees::new(31_200),
                gst: Rupees::new(3_744),
                packing: Rupees::new(1_000),
                freight: Rupees::new(500),
            },
            images: vec!["/2 Feet 50 kg.png".to_string()],
            in_stock: true,
        }
    }

    #[test]
    fn test_breakdown_total() {
        let product = sample();
        assert_eq!(product.breakdown.total(), product.base_price);
    }

    #[test]
    fn test_localized_accessors() {
        let product = sample();
        assert_eq!(
            product.localized_name(Language::En),
            "Elephant - 2 ft (Mahogany)"
        );
        assert_eq!(product.localized_name(Language::Ta), "யானை - 2 அடி (மஹோகனி)");
        assert!(product.localized_description(Language::Ta).contains("யானை"));
    }

    #[test]
    fn test_wood_type_parse() {
        assert_eq!(WoodType::parse("mahogany"), Some(WoodType::Mahogany));
        assert_eq!(WoodType::parse("aakeshya"), Some(WoodType::Aakeshya));
        assert_eq!(WoodType::parse("teak"), None);
    }

    #[test]
    fn test_product_round_trips_through_json() {
        let product = sample();
        let json = serde_json::to_string(&product).expect("serialize");
        let back: Product = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, product);
    }
}
