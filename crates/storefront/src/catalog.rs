//! The product catalog.
//!
//! The catalog is a fixed, read-only list built once at startup and held in
//! `AppState`. The cart and the page handlers reference catalog products;
//! nothing mutates them. Prices are whole rupees and every product's cost
//! breakdown sums to its base price.

use urban_elephant_core::{PriceBreakdown, Product, ProductId, Rupees, WoodType};

/// In-memory catalog of the handcrafted elephant statues.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the catalog with the full product range.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: product_range(),
        }
    }

    /// All products, in display order.
    #[must_use]
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    /// All products of one wood type, preserving display order.
    #[must_use]
    pub fn by_wood_type(&self, wood_type: WoodType) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.wood_type == wood_type)
            .collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn statue(
    id: &str,
    name: &str,
    name_ta: &str,
    description: &str,
    description_ta: &str,
    wood_type: WoodType,
    size_in_feet: f64,
    weight_in_kg: u32,
    cost: i64,
    gst: i64,
    image: &str,
) -> Product {
    let breakdown = PriceBreakdown {
        cost: Rupees::new(cost),
        gst: Rupees::new(gst),
        packing: Rupees::new(1_000),
        freight: Rupees::new(500),
    };
    Product {
        id: ProductId::new(id),
        name: name.to_string(),
        name_ta: name_ta.to_string(),
        description: description.to_string(),
        description_ta: description_ta.to_string(),
        wood_type,
        size_in_feet,
        weight_in_kg,
        base_price: breakdown.total(),
        breakdown,
        images: vec![image.to_string()],
        in_stock: true,
    }
}

/// The eight statues: four sizes in each of the two woods.
fn product_range() -> Vec<Product> {
    vec![
        // Aakeshya wood
        statue(
            "elephant-1-5ft-aakeshya",
            "Elephant - 1.5 ft (Aakeshya)",
            "யானை - 1.5 அடி (ஆகேஷ்யா)",
            "Handcrafted wooden elephant statue made from Aakeshya wood. Balanced size suitable for homes and offices.",
            "ஆகேஷ்யா மரத்தில் செய்யப்பட்ட கைவினை யானை சிலை. வீடும் அலுவலகமும் பொருந்தும் அளவு.",
            WoodType::Aakeshya,
            1.5,
            25,
            13_000,
            1_560,
            "/1.5 Feet 25 kg.png",
        ),
        statue(
            "elephant-2ft-aakeshya",
            "Elephant - 2 ft (Aakeshya)",
            "யானை - 2 அடி (ஆகேஷ்யா)",
            "Aakeshya wood elephant statue with detailed craftsmanship. Ideal medium display size.",
            "விவரமான செதுக்கலுடன் ஆகேஷ்யா மர யானை சிலை. நடுத்தர காட்சிக்குப் பொருத்தம்.",
            WoodType::Aakeshya,
            2.0,
            50,
            26_000,
            3_120,
            "/2 Feet 50 kg.png",
        ),
        statue(
            "elephant-2-5ft-aakeshya",
            "Elephant - 2.5 ft (Aakeshya)",
            "யானை - 2.5 அடி (ஆகேஷ்யா)",
            "Large Aakeshya wood elephant statue with traditional motifs and natural finish.",
            "பாரம்பரிய வடிவங்களுடன் இயற்கை பூச்சு கொண்ட பெரிய ஆகேஷ்யா மர யானை சிலை.",
            WoodType::Aakeshya,
            2.5,
            100,
            54_600,
            6_552,
            "/2.5 Feet 100 Kg.png",
        ),
        statue(
            "elephant-3ft-aakeshya",
            "Elephant - 3 ft (Aakeshya)",
            "யானை - 3 அடி (ஆகேஷ்யா)",
            "Majestic 3 ft Aakeshya wood elephant statue, ideal for grand interiors and halls.",
            "கம்பீரமான 3 அடி ஆகேஷ்யா மர யானை சிலை, பெரிய உள்ளகங்களுக்கு ஏற்றது.",
            WoodType::Aakeshya,
            3.0,
            180,
            110_500,
            13_260,
            "/3 Feet 180 Kg.png",
        ),
        // Mahogany wood
        statue(
            "elephant-1-5ft-mahogany",
            "Elephant - 1.5 ft (Mahogany)",
            "யானை - 1.5 அடி (மஹோகனி)",
            "Handcrafted elephant statue in premium Mahogany wood with smooth finish.",
            "பிரீமியம் மஹோகனி மரத்தில் கையால் செதுக்கப்பட்ட மென்மையான பூச்சுடன் யானை சிலை.",
            WoodType::Mahogany,
            1.5,
            25,
            15_600,
            1_872,
            "/1.5 Feet 25 kg.png",
        ),
        statue(
            "elephant-2ft-mahogany",
            "Elephant - 2 ft (Mahogany)",
            "யானை - 2 அடி (மஹோகனி)",
            "Mahogany wood elephant statue featuring detailed carving and rich grain.",
            "விவரமான செதுக்கலும் வளமான தானிய வடிவமும் கொண்ட மஹோகனி மர யானை சிலை.",
            WoodType::Mahogany,
            2.0,
            50,
            31_200,
            3_744,
            "/2 Feet 50 kg.png",
        ),
        statue(
            "elephant-2-5ft-mahogany",
            "Elephant - 2.5 ft (Mahogany)",
            "யானை - 2.5 அடி (மஹோகனி)",
            "Large mahogany elephant statue with natural finish and premium craftsmanship.",
            "இயற்கை பூச்சுடன் பிரீமியம் கைவினைத் திறன் கொண்ட பெரிய மஹோகனி யானை சிலை.",
            WoodType::Mahogany,
            2.5,
            100,
            59_800,
            7_176,
            "/2.5 Feet 100 Kg.png",
        ),
        statue(
            "elephant-3ft-mahogany",
            "Elephant - 3 ft (Mahogany)",
            "யானை - 3 அடி (மஹோகனி)",
            "Grand 3 ft mahogany elephant statue suitable for showrooms and large spaces.",
            "காட்சி அறைகள் மற்றும் பெரிய இடங்களுக்கு ஏற்ற கம்பீரமான 3 அடி மஹோகனி யானை சிலை.",
            WoodType::Mahogany,
            3.0,
            180,
            118_300,
            14_196,
            "/3 Feet 180 Kg.png",
        ),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_the_full_range() {
        let catalog = Catalog::new();
        assert_eq!(catalog.all().len(), 8);
        assert_eq!(catalog.by_wood_type(WoodType::Aakeshya).len(), 4);
        assert_eq!(catalog.by_wood_type(WoodType::Mahogany).len(), 4);
    }

    #[test]
    fn test_every_breakdown_sums_to_the_base_price() {
        for product in Catalog::new().all() {
            assert_eq!(
                product.breakdown.total(),
                product.base_price,
                "breakdown mismatch for {}",
                product.id
            );
        }
    }

    #[test]
    fn test_known_prices() {
        let catalog = Catalog::new();
        let small = catalog
            .get(&ProductId::new("elephant-1-5ft-aakeshya"))
            .unwrap();
        assert_eq!(small.base_price, Rupees::new(16_060));

        let grand = catalog
            .get(&ProductId::new("elephant-3ft-mahogany"))
            .unwrap();
        assert_eq!(grand.base_price, Rupees::new(133_996));
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let catalog = Catalog::new();
        assert!(catalog.get(&ProductId::new("elephant-4ft-teak")).is_none());
    }

    #[test]
    fn test_product_ids_are_unique() {
        let catalog = Catalog::new();
        let mut ids: Vec<&ProductId> = catalog.all().iter().map(|p| &p.id).collect();
        ids.sort_by_key(|id| id.as_str());
        ids.dedup();
        assert_eq!(ids.len(), catalog.all().len());
    }
}
