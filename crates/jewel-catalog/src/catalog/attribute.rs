//! Attribute resolution.
//!
//! A logical attribute such as "carat" can live in several places on a
//! product record. Resolution walks a fixed, per-product-type list of
//! [`Source`]s and returns the first value present.
//!
//! | Attribute | Diamond / unknown types | Jewelry |
//! |---|---|---|
//! | shape, cut, color, clarity, carat, certification | details → diamondSpecs → labGrownSpecs → naturalDiamondSpecs | details → jewelrySpecs |
//! | price | top level | top level |
//! | brand | top level → details | top level → details |
//! | category | details → jewelrySpecs → top level | details → jewelrySpecs → top level |
//! | metal, classification, stone type/shape, gem type | details → jewelrySpecs | details → jewelrySpecs |

use crate::catalog::{Product, ProductType, SpecValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A logical, filterable product attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Shape,
    Cut,
    Color,
    Clarity,
    Carat,
    Certification,
    Price,
    Metal,
    Category,
    Classification,
    Brand,
    StoneType,
    StoneShape,
    GemType,
}

impl Attribute {
    pub const ALL: [Attribute; 14] = [
        Attribute::Shape,
        Attribute::Cut,
        Attribute::Color,
        Attribute::Clarity,
        Attribute::Carat,
        Attribute::Certification,
        Attribute::Price,
        Attribute::Metal,
        Attribute::Category,
        Attribute::Classification,
        Attribute::Brand,
        Attribute::StoneType,
        Attribute::StoneShape,
        Attribute::GemType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Shape => "shape",
            Attribute::Cut => "cut",
            Attribute::Color => "color",
            Attribute::Clarity => "clarity",
            Attribute::Carat => "carat",
            Attribute::Certification => "certification",
            Attribute::Price => "price",
            Attribute::Metal => "metal",
            Attribute::Category => "category",
            Attribute::Classification => "classification",
            Attribute::Brand => "brand",
            Attribute::StoneType => "stoneType",
            Attribute::StoneShape => "stoneShape",
            Attribute::GemType => "gemType",
        }
    }

    /// Stone grading attributes, stored in the diamond spec records.
    pub fn is_grading(&self) -> bool {
        matches!(
            self,
            Attribute::Shape
                | Attribute::Cut
                | Attribute::Color
                | Attribute::Clarity
                | Attribute::Carat
                | Attribute::Certification
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A location on the product record that can hold attribute values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// Fields directly on the product (`price`, `brand`, `category`).
    TopLevel,
    /// The `details` record.
    Details,
    /// The `diamondSpecs` record.
    DiamondSpecs,
    /// The `labGrownSpecs` record.
    LabGrownSpecs,
    /// The `naturalDiamondSpecs` record.
    NaturalDiamondSpecs,
    /// The `jewelrySpecs` record.
    JewelrySpecs,
}

const STONE_GRADING: &[Source] = &[
    Source::Details,
    Source::DiamondSpecs,
    Source::LabGrownSpecs,
    Source::NaturalDiamondSpecs,
];
const JEWELRY_GRADING: &[Source] = &[Source::Details, Source::JewelrySpecs];
const PRICE: &[Source] = &[Source::TopLevel];
const BRAND: &[Source] = &[Source::TopLevel, Source::Details];
const CATEGORY: &[Source] = &[Source::Details, Source::JewelrySpecs, Source::TopLevel];
const SETTING: &[Source] = &[Source::Details, Source::JewelrySpecs];

impl Source {
    /// The lookup order for `attribute` on a product of type `product_type`.
    pub fn lookup_order(product_type: &ProductType, attribute: Attribute) -> &'static [Source] {
        match attribute {
            Attribute::Price => PRICE,
            Attribute::Brand => BRAND,
            Attribute::Category => CATEGORY,
            a if a.is_grading() => match product_type {
                ProductType::Jewelry => JEWELRY_GRADING,
                _ => STONE_GRADING,
            },
            _ => SETTING,
        }
    }

    /// Read `attribute` from this location on `product`.
    pub fn read(self, product: &Product, attribute: Attribute) -> Option<&SpecValue> {
        match self {
            Source::TopLevel => match attribute {
                Attribute::Price => product.price.as_ref(),
                Attribute::Brand => product.brand.as_ref(),
                Attribute::Category => product.category.as_ref(),
                _ => None,
            },
            Source::Details => product.details.as_ref()?.get(attribute),
            Source::DiamondSpecs => product.diamond_specs.as_ref()?.get(attribute),
            Source::LabGrownSpecs => product.lab_grown_specs.as_ref()?.get(attribute),
            Source::NaturalDiamondSpecs => product.natural_diamond_specs.as_ref()?.get(attribute),
            Source::JewelrySpecs => product.jewelry_specs.as_ref()?.get(attribute),
        }
    }
}

/// Resolve a logical attribute to the first value present on the product.
///
/// Absence is a normal outcome: the product simply has no value for it.
pub fn resolve(product: &Product, attribute: Attribute) -> Option<&SpecValue> {
    Source::lookup_order(&product.product_type, attribute)
        .iter()
        .find_map(|source| source.read(product, attribute))
}

/// Resolve an attribute and coerce it to a number (`0.0` if unparseable).
pub fn resolve_number(product: &Product, attribute: Attribute) -> Option<f64> {
    resolve(product, attribute).map(SpecValue::to_number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(value: serde_json::Value) -> Product {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_carat_from_diamond_specs_weight() {
        let p = product(json!({ "_id": 1, "diamondSpecs": { "weight": "1.2" } }));
        assert_eq!(resolve(&p, Attribute::Carat), Some(&SpecValue::from("1.2")));
    }

    #[test]
    fn test_lab_grown_follows_documented_order() {
        // diamondSpecs precedes labGrownSpecs even for a lab-grown product
        let p = product(json!({
            "_id": 2,
            "productType": "lab-grown",
            "labGrownSpecs": { "weight": "0.8" },
            "diamondSpecs": { "weight": "9.9" }
        }));
        assert_eq!(resolve(&p, Attribute::Carat), Some(&SpecValue::from("9.9")));

        let only_lab = product(json!({
            "_id": 3,
            "productType": "lab-grown",
            "labGrownSpecs": { "weight": "0.8" }
        }));
        assert_eq!(resolve(&only_lab, Attribute::Carat), Some(&SpecValue::from("0.8")));
    }

    #[test]
    fn test_details_take_precedence() {
        let p = product(json!({
            "_id": 4,
            "productType": "diamond",
            "details": { "color": "D" },
            "naturalDiamondSpecs": { "color": "F", "clarity": "VS2" }
        }));
        assert_eq!(resolve(&p, Attribute::Color), Some(&SpecValue::from("D")));
        assert_eq!(resolve(&p, Attribute::Clarity), Some(&SpecValue::from("VS2")));
    }

    #[test]
    fn test_jewelry_ignores_diamond_specs() {
        let p = product(json!({
            "_id": 5,
            "productType": "jewelry",
            "diamondSpecs": { "shape": "Round" },
            "jewelrySpecs": { "stoneShape": "Pear", "metal": "Platinum", "category": "Ring" },
            "category": "Bridal"
        }));
        assert_eq!(resolve(&p, Attribute::Shape), Some(&SpecValue::from("Pear")));
        assert_eq!(resolve(&p, Attribute::Metal), Some(&SpecValue::from("Platinum")));
        assert_eq!(resolve(&p, Attribute::Category), Some(&SpecValue::from("Ring")));
    }

    #[test]
    fn test_top_level_category_is_last_resort() {
        let p = product(json!({ "_id": 6, "productType": "jewelry", "category": "Necklace" }));
        assert_eq!(resolve(&p, Attribute::Category), Some(&SpecValue::from("Necklace")));
    }

    #[test]
    fn test_absent_attribute() {
        let p = product(json!({ "_id": 7, "productType": "diamond" }));
        for attribute in Attribute::ALL {
            assert_eq!(resolve(&p, attribute), None, "{attribute}");
        }
        assert_eq!(resolve_number(&p, Attribute::Carat), None);
    }

    #[test]
    fn test_unparseable_number_resolves_to_zero() {
        let p = product(json!({ "_id": 8, "details": { "carat": "tbd" } }));
        assert_eq!(resolve_number(&p, Attribute::Carat), Some(0.0));
    }
}
