use std::sync::Arc;

use crate::content::models::Catalog;
use crate::layout::SiteLayouts;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    /// Slug → layout variant tables, one per rotating content category.
    pub layouts: Arc<SiteLayouts>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> anyhow::Result<Self> {
        let layouts = SiteLayouts::build(&catalog)?;
        Ok(AppState {
            catalog: Arc::new(catalog),
            layouts: Arc::new(layouts),
        })
    }
}
