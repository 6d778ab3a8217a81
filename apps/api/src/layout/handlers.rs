use axum::{extract::State, Json};
use serde::Serialize;

use crate::layout::{LayoutTable, LayoutVariant, LOCATION_VARIANTS, SERVICE_VARIANTS};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct VariantSets {
    pub services: &'static [LayoutVariant],
    pub locations: &'static [LayoutVariant],
}

/// GET /api/v1/layouts/services
pub async fn handle_service_layouts(State(state): State<AppState>) -> Json<LayoutTable> {
    Json(state.layouts.services.clone())
}

/// GET /api/v1/layouts/locations
pub async fn handle_location_layouts(State(state): State<AppState>) -> Json<LayoutTable> {
    Json(state.layouts.locations.clone())
}

/// GET /api/v1/layouts/variants
pub async fn handle_variants() -> Json<VariantSets> {
    Json(VariantSets {
        services: SERVICE_VARIANTS,
        locations: LOCATION_VARIANTS,
    })
}
