//! Product catalog module.
//!
//! Contains the product record as the storefront API returns it, the
//! per-type specification records, and attribute resolution over them.

mod attribute;
mod product;
mod specs;
mod value;

pub use attribute::{resolve, resolve_number, Attribute, Source};
pub use product::{Product, ProductType};
pub use specs::{DiamondSpecs, JewelrySpecs, ProductDetails};
pub use value::SpecValue;

pub(crate) use value::parse_leading_f64;
