//! Product types.

use crate::catalog::{
    resolve_number, Attribute, DiamondSpecs, JewelrySpecs, ProductDetails, SpecValue,
};
use crate::ids::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Product type classification.
///
/// Decides which specification records are consulted, and in which
/// order, when an attribute is resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProductType {
    /// Mined diamond.
    NaturalDiamond,
    /// Laboratory-grown diamond.
    LabGrown,
    /// Finished jewelry (rings, necklaces, ...).
    Jewelry,
    /// Any tag the storefront does not know about, kept verbatim.
    Other(String),
}

impl ProductType {
    pub fn as_str(&self) -> &str {
        match self {
            ProductType::NaturalDiamond => "diamond",
            ProductType::LabGrown => "lab-grown",
            ProductType::Jewelry => "jewelry",
            ProductType::Other(tag) => tag,
        }
    }

    /// Read a type tag, accepting the spellings the backend uses.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "diamond" | "natural-diamond" | "natural" => ProductType::NaturalDiamond,
            "lab-grown" | "labgrown" | "lab_grown" => ProductType::LabGrown,
            "jewelry" | "jewellery" => ProductType::Jewelry,
            _ => ProductType::Other(s.to_string()),
        }
    }

    /// Loose stones, natural or lab-grown.
    pub fn is_diamond(&self) -> bool {
        matches!(self, ProductType::NaturalDiamond | ProductType::LabGrown)
    }
}

impl Default for ProductType {
    fn default() -> Self {
        ProductType::Other(String::new())
    }
}

impl From<String> for ProductType {
    fn from(s: String) -> Self {
        ProductType::parse(&s)
    }
}

impl From<ProductType> for String {
    fn from(t: ProductType) -> Self {
        t.as_str().to_string()
    }
}

/// A product as returned by the listing endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", try_from = "ProductRecord")]
pub struct Product {
    /// Unique product identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Selling price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<SpecValue>,
    /// Price before discount, for sale display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<SpecValue>,
    /// Advertised discount, for sale display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<SpecValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<SpecValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SpecValue>,
    /// Type tag.
    pub product_type: ProductType,
    /// Creation time, used by the `latest` sort.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ProductDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diamond_specs: Option<DiamondSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lab_grown_specs: Option<DiamondSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub natural_diamond_specs: Option<DiamondSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jewelry_specs: Option<JewelrySpecs>,
    /// Everything else the API sends (images, slugs, stock flags).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// A product record as it arrives on the wire.
///
/// Document-store exports may carry both `_id` and `id` (or both `name`
/// and `title`), and any field may be `null`. `_id` and `name` win.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    #[serde(default, rename = "_id")]
    primary_id: Option<ProductId>,
    #[serde(default)]
    id: Option<ProductId>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    price: Option<SpecValue>,
    #[serde(default)]
    original_price: Option<SpecValue>,
    #[serde(default)]
    discount: Option<SpecValue>,
    #[serde(default)]
    brand: Option<SpecValue>,
    #[serde(default)]
    category: Option<SpecValue>,
    #[serde(default)]
    product_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    details: Option<ProductDetails>,
    #[serde(default)]
    diamond_specs: Option<DiamondSpecs>,
    #[serde(default)]
    lab_grown_specs: Option<DiamondSpecs>,
    #[serde(default)]
    natural_diamond_specs: Option<DiamondSpecs>,
    #[serde(default)]
    jewelry_specs: Option<JewelrySpecs>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl TryFrom<ProductRecord> for Product {
    type Error = String;

    fn try_from(record: ProductRecord) -> Result<Self, Self::Error> {
        let id = record
            .primary_id
            .or(record.id)
            .ok_or_else(|| "missing field `_id`".to_string())?;

        Ok(Self {
            id,
            name: record.name.or(record.title).unwrap_or_default(),
            price: record.price,
            original_price: record.original_price,
            discount: record.discount,
            brand: record.brand,
            category: record.category,
            product_type: record
                .product_type
                .map(ProductType::from)
                .unwrap_or_default(),
            created_at: record.created_at,
            details: record.details,
            diamond_specs: record.diamond_specs,
            lab_grown_specs: record.lab_grown_specs,
            natural_diamond_specs: record.natural_diamond_specs,
            jewelry_specs: record.jewelry_specs,
            extra: record.extra,
        })
    }
}

impl Product {
    /// Create a bare product of the given type.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        product_type: ProductType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: None,
            original_price: None,
            discount: None,
            brand: None,
            category: None,
            product_type,
            created_at: None,
            details: None,
            diamond_specs: None,
            lab_grown_specs: None,
            natural_diamond_specs: None,
            jewelry_specs: None,
            extra: BTreeMap::new(),
        }
    }

    /// Set the selling price.
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(SpecValue::Number(price));
        self
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Set the top-level details record.
    pub fn with_details(mut self, details: ProductDetails) -> Self {
        self.details = Some(details);
        self
    }

    /// Price as a number; absent or unparseable is `0.0`.
    pub fn price_value(&self) -> f64 {
        resolve_number(self, Attribute::Price).unwrap_or(0.0)
    }

    /// Resolved carat weight; absent or unparseable is `0.0`.
    pub fn carat_value(&self) -> f64 {
        resolve_number(self, Attribute::Carat).unwrap_or(0.0)
    }

    /// Creation time in epoch milliseconds; absent is the epoch.
    pub fn created_at_millis(&self) -> i64 {
        self.created_at.map(|t| t.timestamp_millis()).unwrap_or(0)
    }

    /// Percentage saved against the original price, when on sale.
    pub fn sale_percentage(&self) -> Option<u32> {
        let original = self.original_price.as_ref()?.to_number();
        let price = self.price_value();
        if original <= 0.0 || price >= original {
            return None;
        }
        Some(((original - price) / original * 100.0).round() as u32)
    }
}

/// Accept RFC 3339 strings or epoch milliseconds; anything else is absent.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(serde_json::Value::String(s)) => DateTime::parse_from_rfc3339(&s)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Some(serde_json::Value::Number(n)) => {
            n.as_i64().and_then(DateTime::<Utc>::from_timestamp_millis)
        }
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_type_aliases() {
        assert_eq!(ProductType::parse("Lab-Grown"), ProductType::LabGrown);
        assert_eq!(ProductType::parse("natural"), ProductType::NaturalDiamond);
        assert_eq!(ProductType::parse("jewellery"), ProductType::Jewelry);
        assert_eq!(
            ProductType::parse("watch"),
            ProductType::Other("watch".to_string())
        );
        assert!(ProductType::LabGrown.is_diamond());
        assert!(!ProductType::Jewelry.is_diamond());
    }

    #[test]
    fn test_deserialize_listing_record() {
        let product: Product = serde_json::from_value(json!({
            "_id": "65f1",
            "name": "1.20ct Round Brilliant",
            "price": 4200,
            "productType": "lab-grown",
            "createdAt": "2024-03-01T10:00:00Z",
            "labGrownSpecs": { "shape": "Round", "weight": "1.20" },
            "images": ["a.jpg"]
        }))
        .unwrap();

        assert_eq!(product.id.as_str(), "65f1");
        assert_eq!(product.product_type, ProductType::LabGrown);
        assert_eq!(product.price_value(), 4200.0);
        assert_eq!(product.carat_value(), 1.2);
        assert!(product.created_at_millis() > 0);
        assert_eq!(product.extra.get("images"), Some(&json!(["a.jpg"])));
    }

    #[test]
    fn test_missing_fields_default() {
        let product: Product = serde_json::from_value(json!({ "_id": 3 })).unwrap();

        assert_eq!(product.id.as_str(), "3");
        assert_eq!(product.product_type, ProductType::Other(String::new()));
        assert_eq!(product.price_value(), 0.0);
        assert_eq!(product.carat_value(), 0.0);
        assert_eq!(product.created_at_millis(), 0);
    }

    #[test]
    fn test_bad_timestamp_is_absent_not_an_error() {
        let product: Product =
            serde_json::from_value(json!({ "_id": "x", "createdAt": "last tuesday" })).unwrap();
        assert_eq!(product.created_at, None);

        let product: Product =
            serde_json::from_value(json!({ "_id": "y", "createdAt": 1700000000000i64 })).unwrap();
        assert_eq!(product.created_at_millis(), 1_700_000_000_000);
    }

    #[test]
    fn test_record_with_both_id_keys_prefers_underscore_id() {
        let product: Product =
            serde_json::from_str(r#"{"_id":"65f1","id":"legacy-7","price":10}"#).unwrap();
        assert_eq!(product.id.as_str(), "65f1");
        assert_eq!(product.price_value(), 10.0);
        assert!(!product.extra.contains_key("id"));

        let product: Product = serde_json::from_value(json!({ "id": 42 })).unwrap();
        assert_eq!(product.id.as_str(), "42");

        let product: Product =
            serde_json::from_value(json!({ "_id": null, "id": "fallback" })).unwrap();
        assert_eq!(product.id.as_str(), "fallback");
    }

    #[test]
    fn test_record_without_any_id_is_rejected() {
        let err = serde_json::from_value::<Product>(json!({ "name": "Nameless" })).unwrap_err();
        assert!(err.to_string().contains("_id"));
    }

    #[test]
    fn test_null_name_and_type_fall_back_to_defaults() {
        let product: Product =
            serde_json::from_str(r#"{"_id":"a","productType":null}"#).unwrap();
        assert_eq!(product.product_type, ProductType::default());

        let product: Product = serde_json::from_str(r#"{"_id":"a","name":null}"#).unwrap();
        assert_eq!(product.name, "");

        let product: Product =
            serde_json::from_str(r#"{"_id":"a","name":null,"title":"Solitaire"}"#).unwrap();
        assert_eq!(product.name, "Solitaire");

        let product: Product =
            serde_json::from_str(r#"{"_id":"a","name":"Halo","title":"Other"}"#).unwrap();
        assert_eq!(product.name, "Halo");
    }

    #[test]
    fn test_serialized_product_reads_back() {
        let product = Product::new("r1", "Band", ProductType::Jewelry).with_price(99.0);
        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["_id"], json!("r1"));
        assert_eq!(value["productType"], json!("jewelry"));

        let back: Product = serde_json::from_value(value).unwrap();
        assert_eq!(back, product);
    }

    #[test]
    fn test_sale_percentage() {
        let mut product = Product::new("p", "Band", ProductType::Jewelry).with_price(750.0);
        assert_eq!(product.sale_percentage(), None);

        product.original_price = Some(SpecValue::Number(1000.0));
        assert_eq!(product.sale_percentage(), Some(25));
    }
}
