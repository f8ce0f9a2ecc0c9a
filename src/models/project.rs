//! Static project catalog.

use serde::Deserialize;

use crate::config::PROJECTS_TOML;
use crate::core::error::CatalogError;

/// One listed initiative.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ContentItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Deserialize)]
struct Catalog {
    projects: Vec<ContentItem>,
}

impl ContentItem {
    /// Parse a catalog document with a `[[projects]]` array.
    pub fn parse_catalog(source: &str) -> Result<Vec<ContentItem>, CatalogError> {
        let catalog: Catalog = toml::from_str(source)?;
        Ok(catalog.projects)
    }

    /// The catalog bundled into the binary.
    pub fn bundled() -> Result<Vec<ContentItem>, CatalogError> {
        Self::parse_catalog(PROJECTS_TOML)
    }
}
