// Page layout rotation.
// Tables are built once at startup from the catalog and shared read-only afterwards.

pub mod assignment;
pub mod handlers;
pub mod variants;

use tracing::{debug, warn};

use crate::content::models::Catalog;

pub use assignment::{assign_layouts, LayoutError, LayoutTable};
pub use variants::{find_variant, LayoutVariant, LOCATION_VARIANTS, SERVICE_VARIANTS};

/// Layout tables for every rotating content category.
#[derive(Debug, Clone)]
pub struct SiteLayouts {
    pub services: LayoutTable,
    pub locations: LayoutTable,
}

impl SiteLayouts {
    pub fn build(catalog: &Catalog) -> Result<Self, LayoutError> {
        let services = assign_layouts(&catalog.services, SERVICE_VARIANTS)?;
        debug!(items = services.len(), "Service layout table built");

        let locations = assign_layouts(&catalog.locations, LOCATION_VARIANTS)?;
        debug!(items = locations.len(), "Location layout table built");

        if services.is_empty() || locations.is_empty() {
            warn!("Catalog has no services or no locations to rotate layouts over");
        }

        Ok(SiteLayouts {
            services,
            locations,
        })
    }

    /// Resolves a service slug to its full variant descriptor.
    pub fn service_variant(&self, slug: &str) -> Option<&'static LayoutVariant> {
        self.services
            .get(slug)
            .and_then(|key| find_variant(SERVICE_VARIANTS, key))
    }

    /// Resolves a location slug to its full variant descriptor.
    pub fn location_variant(&self, slug: &str) -> Option<&'static LayoutVariant> {
        self.locations
            .get(slug)
            .and_then(|key| find_variant(LOCATION_VARIANTS, key))
    }
}
