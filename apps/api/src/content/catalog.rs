//! Catalog loading and lookup.
//!
//! The default catalog ships inside the binary. `CONTENT_FILE` swaps it for an
//! external JSON document with the same shape.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::content::models::{Catalog, Location, PropertyType, Service};
use crate::layout::assignment::Slugged;

const EMBEDDED_CATALOG: &str = include_str!("catalog.json");

pub fn embedded_catalog() -> Result<Catalog> {
    parse_catalog(EMBEDDED_CATALOG).context("embedded catalog is malformed")
}

pub fn load_catalog(path: Option<&str>) -> Result<Catalog> {
    match path {
        None => embedded_catalog(),
        Some(path) => {
            let raw = std::fs::read_to_string(Path::new(path))
                .with_context(|| format!("Failed to read content file '{path}'"))?;
            parse_catalog(&raw).with_context(|| format!("Content file '{path}' is invalid"))
        }
    }
}

pub fn parse_catalog(raw: &str) -> Result<Catalog> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    check_unique("services", &catalog.services)?;
    check_unique("locations", &catalog.locations)?;
    check_unique("property_types", &catalog.property_types)?;
    Ok(catalog)
}

fn check_unique<T: Slugged>(category: &str, items: &[T]) -> Result<()> {
    let mut seen = HashSet::new();
    for item in items {
        let slug = item.slug();
        if slug.trim().is_empty() {
            bail!("{category} contains an item with an empty slug");
        }
        if !seen.insert(slug) {
            bail!("{category} contains duplicate slug '{slug}'");
        }
    }
    Ok(())
}

fn find<'a, T: Slugged>(items: &'a [T], slug: &str) -> Option<&'a T> {
    items.iter().find(|item| item.slug() == slug)
}

impl Catalog {
    pub fn service(&self, slug: &str) -> Option<&Service> {
        find(&self.services, slug)
    }

    pub fn location(&self, slug: &str) -> Option<&Location> {
        find(&self.locations, slug)
    }

    pub fn property_type(&self, slug: &str) -> Option<&PropertyType> {
        find(&self.property_types, slug)
    }
}
