//! Storefront sections.

use jewel_catalog::search::FilterKey;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A top-level listing of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    NaturalDiamonds,
    LabGrownDiamonds,
    Jewelry,
}

const DIAMOND_FILTERS: &[FilterKey] = &[
    FilterKey::Shape,
    FilterKey::Cut,
    FilterKey::Color,
    FilterKey::Clarity,
    FilterKey::CaratRange,
    FilterKey::PriceRange,
    FilterKey::Certification,
    FilterKey::SortBy,
];

const JEWELRY_FILTERS: &[FilterKey] = &[
    FilterKey::JewelryCategory,
    FilterKey::JewelryClassification,
    FilterKey::Metal,
    FilterKey::StoneType,
    FilterKey::StoneShape,
    FilterKey::GemType,
    FilterKey::Brand,
    FilterKey::CaratRange,
    FilterKey::PriceRange,
    FilterKey::SortBy,
];

impl Section {
    pub const ALL: [Section; 3] = [
        Section::NaturalDiamonds,
        Section::LabGrownDiamonds,
        Section::Jewelry,
    ];

    /// Slug used in config files, data file names and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::NaturalDiamonds => "natural-diamonds",
            Section::LabGrownDiamonds => "lab-grown-diamonds",
            Section::Jewelry => "jewelry",
        }
    }

    /// Backend endpoint returning the section's collection.
    pub fn api_path(&self) -> &'static str {
        match self {
            Section::NaturalDiamonds => "/api/diamonds",
            Section::LabGrownDiamonds => "/api/lab-grown-diamonds",
            Section::Jewelry => "/api/jewelry",
        }
    }

    /// Storefront page the section is listed on.
    pub fn route(&self) -> &'static str {
        match self {
            Section::NaturalDiamonds => "/diamonds",
            Section::LabGrownDiamonds => "/lab-grown",
            Section::Jewelry => "/jewelry",
        }
    }

    /// Filters the section's page offers, in sidebar order.
    pub fn filter_keys(&self) -> &'static [FilterKey] {
        match self {
            Section::NaturalDiamonds | Section::LabGrownDiamonds => DIAMOND_FILTERS,
            Section::Jewelry => JEWELRY_FILTERS,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "natural-diamonds" | "natural" | "diamonds" | "diamond" => {
                Ok(Section::NaturalDiamonds)
            }
            "lab-grown-diamonds" | "lab-grown" | "labgrown" => Ok(Section::LabGrownDiamonds),
            "jewelry" | "jewellery" => Ok(Section::Jewelry),
            other => Err(format!(
                "unknown section '{}' (expected natural-diamonds, lab-grown-diamonds or jewelry)",
                other
            )),
        }
    }
}
