//! Axum route handlers for content pages.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::content::models::{Location, PropertyType, Service};
use crate::errors::AppError;
use crate::layout::LayoutVariant;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: String,
    pub name: String,
    pub summary: String,
    /// Variant key assigned by the layout table; `None` for fixed-template pages.
    pub layout: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ServicePage {
    pub service: Service,
    pub layout: &'static LayoutVariant,
}

#[derive(Debug, Serialize)]
pub struct LocationPage {
    pub location: Location,
    pub layout: &'static LayoutVariant,
}

#[derive(Debug, Serialize)]
pub struct PropertyTypePage {
    pub property_type: PropertyType,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/services
pub async fn handle_list_services(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    let pages = state
        .catalog
        .services
        .iter()
        .map(|s| PageSummary {
            slug: s.slug.clone(),
            name: s.name.clone(),
            summary: s.summary.clone(),
            layout: state.layouts.services.get(&s.slug).map(str::to_string),
        })
        .collect();
    Json(pages)
}

/// GET /api/v1/services/:slug
pub async fn handle_get_service(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ServicePage>, AppError> {
    let service = state
        .catalog
        .service(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Service '{slug}' not found")))?;

    let layout = state.layouts.service_variant(&slug).ok_or_else(|| {
        AppError::InvalidConfiguration(format!("Service '{slug}' has no layout assignment"))
    })?;

    Ok(Json(ServicePage {
        service: service.clone(),
        layout,
    }))
}

/// GET /api/v1/locations
pub async fn handle_list_locations(State(state): State<AppState>) -> Json<Vec<PageSummary>> {
    let pages = state
        .catalog
        .locations
        .iter()
        .map(|l| PageSummary {
            slug: l.slug.clone(),
            name: l.display_name(),
            summary: l.summary.clone(),
            layout: state.layouts.locations.get(&l.slug).map(str::to_string),
        })
        .collect();
    Json(pages)
}

/// GET /api/v1/locations/:slug
pub async fn handle_get_location(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<LocationPage>, AppError> {
    let location = state
        .catalog
        .location(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Location '{slug}' not found")))?;

    let layout = state.layouts.location_variant(&slug).ok_or_else(|| {
        AppError::InvalidConfiguration(format!("Location '{slug}' has no layout assignment"))
    })?;

    Ok(Json(LocationPage {
        location: location.clone(),
        layout,
    }))
}

/// GET /api/v1/property-types
pub async fn handle_list_property_types(
    State(state): State<AppState>,
) -> Json<Vec<PageSummary>> {
    let pages = state
        .catalog
        .property_types
        .iter()
        .map(|p| PageSummary {
            slug: p.slug.clone(),
            name: p.name.clone(),
            summary: p.summary.clone(),
            layout: None,
        })
        .collect();
    Json(pages)
}

/// GET /api/v1/property-types/:slug
pub async fn handle_get_property_type(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<PropertyTypePage>, AppError> {
    let property_type = state
        .catalog
        .property_type(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Property type '{slug}' not found")))?;

    Ok(Json(PropertyTypePage {
        property_type: property_type.clone(),
    }))
}
