//! Where product collections come from.

use crate::{FetchError, Section};
use jewel_catalog::catalog::Product;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// A backend that can produce a section's full product collection.
///
/// Collections are fetched fresh on every call; nothing is cached.
pub trait ProductSource {
    fn fetch(&self, section: Section) -> Result<Vec<Product>, FetchError>;
}

/// Listing responses come either bare or wrapped in an envelope. Backends
/// that fail report `{"error": .., "status": ..}` instead.
#[derive(Deserialize)]
#[serde(untagged)]
enum Listing {
    Bare(Vec<Product>),
    Envelope {
        #[serde(alias = "data", alias = "items")]
        products: Vec<Product>,
    },
    Failure {
        #[serde(alias = "message")]
        error: String,
        #[serde(default, alias = "statusCode")]
        status: Option<u16>,
    },
}

/// Parse a listing response body.
pub fn parse_listing(body: &[u8]) -> Result<Vec<Product>, FetchError> {
    match serde_json::from_slice::<Listing>(body) {
        Ok(Listing::Bare(products)) | Ok(Listing::Envelope { products }) => Ok(products),
        Ok(Listing::Failure { error, status }) => Err(FetchError::Http {
            status: status.unwrap_or(500),
            message: error,
        }),
        // The untagged error hides the real cause; retry as a bare array
        // to surface it.
        Err(_) => serde_json::from_slice::<Vec<Product>>(body).map_err(FetchError::from),
    }
}

/// Products stored as JSON on disk.
///
/// `path` is either a directory holding `<section>.json` files or a single
/// file that serves every section.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file a section is read from.
    pub fn file_for(&self, section: Section) -> PathBuf {
        if self.path.is_dir() {
            self.path.join(format!("{}.json", section.as_str()))
        } else {
            self.path.clone()
        }
    }
}

impl ProductSource for JsonFileSource {
    fn fetch(&self, section: Section) -> Result<Vec<Product>, FetchError> {
        let file = self.file_for(section);
        if !file.exists() {
            return Err(FetchError::NotFound(section));
        }

        let body = fs::read(&file)?;
        let products = parse_listing(&body)?;
        debug!(
            section = %section,
            file = %file.display(),
            count = products.len(),
            "loaded products"
        );
        Ok(products)
    }
}

/// In-memory collections.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    sections: HashMap<Section, Vec<Product>>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_section(mut self, section: Section, products: Vec<Product>) -> Self {
        self.sections.insert(section, products);
        self
    }
}

impl ProductSource for StaticSource {
    fn fetch(&self, section: Section) -> Result<Vec<Product>, FetchError> {
        self.sections
            .get(&section)
            .cloned()
            .ok_or(FetchError::NotFound(section))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jewel_catalog::catalog::ProductType;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const LISTING: &str = r#"[{"_id": "a1", "name": "Round 1.01ct", "price": 4200}]"#;

    #[test]
    fn test_parse_bare_and_enveloped_listings() {
        assert_eq!(parse_listing(LISTING.as_bytes()).unwrap().len(), 1);

        for key in ["products", "data", "items"] {
            let body = format!(r#"{{"{}": {}, "total": 1}}"#, key, LISTING);
            let products = parse_listing(body.as_bytes()).unwrap();
            assert_eq!(products[0].id.as_str(), "a1");
        }
    }

    #[test]
    fn test_parse_rejects_other_payloads() {
        assert!(matches!(parse_listing(br#"{"total": 3}"#), Err(FetchError::Parse(_))));
        assert!(matches!(parse_listing(b"not json"), Err(FetchError::Parse(_))));
    }

    #[test]
    fn test_error_body_becomes_http_error() {
        let err = parse_listing(br#"{"error": "maintenance", "status": 503}"#).unwrap_err();
        assert!(matches!(
            &err,
            FetchError::Http { status: 503, message } if message == "maintenance"
        ));
        assert_eq!(err.to_string(), "HTTP 503: maintenance");

        let err = parse_listing(br#"{"message": "down"}"#).unwrap_err();
        assert_eq!(err.to_string(), "HTTP 500: down");
    }

    #[test]
    fn test_one_record_with_both_id_keys_keeps_the_listing() {
        let body = br#"[
            {"_id": "65f1", "id": "65f1", "price": 10},
            {"_id": "65f2", "name": null, "productType": null}
        ]"#;
        let products = parse_listing(body).unwrap();
        let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["65f1", "65f2"]);
        assert_eq!(products[1].product_type, ProductType::default());
    }

    #[test]
    fn test_directory_source_reads_per_section_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("jewelry.json"), LISTING).unwrap();
        let source = JsonFileSource::new(dir.path());

        assert_eq!(source.fetch(Section::Jewelry).unwrap().len(), 1);
        assert!(matches!(
            source.fetch(Section::NaturalDiamonds),
            Err(FetchError::NotFound(Section::NaturalDiamonds))
        ));
    }

    #[test]
    fn test_single_file_serves_every_section() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("catalog.json");
        fs::write(&file, LISTING).unwrap();
        let source = JsonFileSource::new(&file);

        for section in Section::ALL {
            assert_eq!(source.fetch(section).unwrap().len(), 1);
        }
    }

    #[test]
    fn test_static_source() {
        let source = StaticSource::new().with_section(
            Section::LabGrownDiamonds,
            vec![Product::new("lg", "Lab Oval", ProductType::LabGrown)],
        );
        assert_eq!(source.fetch(Section::LabGrownDiamonds).unwrap().len(), 1);
        assert!(source.fetch(Section::Jewelry).is_err());
    }
}
