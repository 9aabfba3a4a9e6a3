//! Specification records attached to products.
//!
//! Each product type stores its grading data in a differently named
//! sub-record, and the field names are not uniform between them (a
//! diamond's carat lives under `weight`, a ring's under `caratWeight`).
//! Every record exposes a `get` that maps a logical [`Attribute`] onto the
//! field that holds it for that record, or `None` when the record has no
//! such field.

use crate::catalog::{Attribute, SpecValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The top-level `details` record. Takes precedence over type-specific specs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carat: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metal: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone_type: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone_shape: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gem_type: Option<SpecValue>,
    /// Fields the catalog does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ProductDetails {
    pub fn get(&self, attribute: Attribute) -> Option<&SpecValue> {
        match attribute {
            Attribute::Shape => self.shape.as_ref(),
            Attribute::Cut => self.cut.as_ref(),
            Attribute::Color => self.color.as_ref(),
            Attribute::Clarity => self.clarity.as_ref(),
            Attribute::Carat => self.carat.as_ref(),
            Attribute::Certification => self.certification.as_ref(),
            Attribute::Metal => self.metal.as_ref(),
            Attribute::Category => self.category.as_ref(),
            Attribute::Classification => self.classification.as_ref(),
            Attribute::Brand => self.brand.as_ref(),
            Attribute::StoneType => self.stone_type.as_ref(),
            Attribute::StoneShape => self.stone_shape.as_ref(),
            Attribute::GemType => self.gem_type.as_ref(),
            Attribute::Price => None,
        }
    }
}

/// Grading record for a loose stone.
///
/// Shared by `diamondSpecs`, `labGrownSpecs` and `naturalDiamondSpecs`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiamondSpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cut: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clarity: Option<SpecValue>,
    /// Carat weight.
    #[serde(default, alias = "carat", skip_serializing_if = "Option::is_none")]
    pub weight: Option<SpecValue>,
    /// Grading lab (GIA, IGI, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polish: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symmetry: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fluorescence: Option<SpecValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DiamondSpecs {
    pub fn get(&self, attribute: Attribute) -> Option<&SpecValue> {
        match attribute {
            Attribute::Shape => self.shape.as_ref(),
            Attribute::Cut => self.cut.as_ref(),
            Attribute::Color => self.color.as_ref(),
            Attribute::Clarity => self.clarity.as_ref(),
            Attribute::Carat => self.weight.as_ref(),
            Attribute::Certification => self.certification.as_ref(),
            _ => None,
        }
    }
}

/// Specification record for finished jewelry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JewelrySpecs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metal: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone_type: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stone_shape: Option<SpecValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gem_type: Option<SpecValue>,
    /// Total carat weight of set stones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carat_weight: Option<SpecValue>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl JewelrySpecs {
    pub fn get(&self, attribute: Attribute) -> Option<&SpecValue> {
        match attribute {
            Attribute::Category => self.category.as_ref(),
            Attribute::Classification => self.classification.as_ref(),
            Attribute::Metal => self.metal.as_ref(),
            Attribute::StoneType => self.stone_type.as_ref(),
            Attribute::StoneShape | Attribute::Shape => self.stone_shape.as_ref(),
            Attribute::GemType => self.gem_type.as_ref(),
            Attribute::Carat => self.carat_weight.as_ref(),
            _ => None,
        }
    }
}
