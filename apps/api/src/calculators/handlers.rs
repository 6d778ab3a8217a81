//! Axum route handlers for the calculator tools.
//!
//! Every handler is a pure transform of the submitted form. Field problems come
//! back as `Outcome::Invalid` (422); only malformed requests become `AppError`s.

use axum::{extract::rejection::JsonRejection, Json};
use tracing::debug;

use crate::calculators::boot::{calculate_boot, BootInputs, BootResults};
use crate::calculators::costs::{estimate_costs, CostInputs, CostResults};
use crate::calculators::identification::{
    check_identification, IdentificationInputs, IdentificationResults, MAX_IDENTIFIED_PROPERTIES,
};
use crate::calculators::outcome::Outcome;
use crate::calculators::tools::{ToolDescriptor, TOOLS};
use crate::errors::AppError;

/// Unwraps the JSON body, turning extractor rejections into the API error shape.
fn form<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(inputs)| inputs)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

/// Logs field names only; submitted values never reach the logs.
fn log_outcome<T>(tool: &str, outcome: &Outcome<T>) {
    if let Some(errors) = outcome.errors() {
        let fields: Vec<&str> = errors.keys().map(String::as_str).collect();
        debug!(tool, ?fields, "Calculator input rejected");
    }
    if let Some(warnings) = outcome.warnings().filter(|w| !w.is_empty()) {
        let fields: Vec<&str> = warnings.keys().map(String::as_str).collect();
        debug!(tool, ?fields, "Calculator plausibility warnings");
    }
    debug!(
        tool,
        computed = outcome.results().is_some(),
        "Calculator evaluated"
    );
}

/// GET /api/v1/tools
pub async fn handle_list_tools() -> Json<&'static [ToolDescriptor]> {
    Json(TOOLS)
}

/// POST /api/v1/tools/boot-calculator
pub async fn handle_boot(
    payload: Result<Json<BootInputs>, JsonRejection>,
) -> Result<Outcome<BootResults>, AppError> {
    let outcome = calculate_boot(&form(payload)?);
    log_outcome("boot-calculator", &outcome);
    Ok(outcome)
}

/// POST /api/v1/tools/exchange-cost-estimator
pub async fn handle_costs(
    payload: Result<Json<CostInputs>, JsonRejection>,
) -> Result<Outcome<CostResults>, AppError> {
    let outcome = estimate_costs(&form(payload)?);
    log_outcome("exchange-cost-estimator", &outcome);
    Ok(outcome)
}

/// POST /api/v1/tools/identification-rules
pub async fn handle_identification(
    payload: Result<Json<IdentificationInputs>, JsonRejection>,
) -> Result<Outcome<IdentificationResults>, AppError> {
    let inputs = form(payload)?;
    if inputs.identified_values.len() > MAX_IDENTIFIED_PROPERTIES {
        return Err(AppError::Validation(format!(
            "identified_values may list at most {MAX_IDENTIFIED_PROPERTIES} properties"
        )));
    }

    let outcome = check_identification(&inputs);
    log_outcome("identification-rules", &outcome);
    Ok(outcome)
}
