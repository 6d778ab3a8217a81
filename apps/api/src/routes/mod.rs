pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::calculators::handlers as tools;
use crate::content::handlers as content;
use crate::layout::handlers as layouts;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Content pages
        .route("/api/v1/services", get(content::handle_list_services))
        .route("/api/v1/services/:slug", get(content::handle_get_service))
        .route("/api/v1/locations", get(content::handle_list_locations))
        .route("/api/v1/locations/:slug", get(content::handle_get_location))
        .route(
            "/api/v1/property-types",
            get(content::handle_list_property_types),
        )
        .route(
            "/api/v1/property-types/:slug",
            get(content::handle_get_property_type),
        )
        // Layout tables
        .route(
            "/api/v1/layouts/services",
            get(layouts::handle_service_layouts),
        )
        .route(
            "/api/v1/layouts/locations",
            get(layouts::handle_location_layouts),
        )
        .route("/api/v1/layouts/variants", get(layouts::handle_variants))
        // Calculators
        .route("/api/v1/tools", get(tools::handle_list_tools))
        .route("/api/v1/tools/boot-calculator", post(tools::handle_boot))
        .route(
            "/api/v1/tools/exchange-cost-estimator",
            post(tools::handle_costs),
        )
        .route(
            "/api/v1/tools/identification-rules",
            post(tools::handle_identification),
        )
        .with_state(state)
}
