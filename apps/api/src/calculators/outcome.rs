use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::calculators::parsing::FieldErrors;

/// One formatted result row, as shown under a calculator form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayLine {
    pub label: &'static str,
    pub value: String,
}

impl DisplayLine {
    pub fn new(label: &'static str, value: String) -> Self {
        DisplayLine { label, value }
    }
}

/// Result sets that know how to render themselves for the results panel.
pub trait Presentable {
    fn display(&self) -> Vec<DisplayLine>;
}

/// Field name → plausibility warning. Warnings never block results.
pub type Warnings = BTreeMap<String, String>;

/// Either a fully validated result payload or the error state. There is no
/// partially populated variant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome<T> {
    Computed {
        results: T,
        display: Vec<DisplayLine>,
        warnings: Warnings,
    },
    Invalid {
        errors: FieldErrors,
    },
}

impl<T: Presentable> Outcome<T> {
    pub fn from_parts(results: Result<T, FieldErrors>, warnings: Warnings) -> Self {
        match results {
            Ok(results) => Outcome::Computed {
                display: results.display(),
                results,
                warnings,
            },
            Err(errors) => Outcome::Invalid { errors },
        }
    }
}

impl<T> Outcome<T> {
    pub fn results(&self) -> Option<&T> {
        match self {
            Outcome::Computed { results, .. } => Some(results),
            Outcome::Invalid { .. } => None,
        }
    }

    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            Outcome::Computed { .. } => None,
            Outcome::Invalid { errors } => Some(errors),
        }
    }

    pub fn warnings(&self) -> Option<&Warnings> {
        match self {
            Outcome::Computed { warnings, .. } => Some(warnings),
            Outcome::Invalid { .. } => None,
        }
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let status = match &self {
            Outcome::Computed { .. } => StatusCode::OK,
            Outcome::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::parsing::FieldError;

    #[derive(Debug, Serialize, PartialEq)]
    struct Doubled(f64);

    impl Presentable for Doubled {
        fn display(&self) -> Vec<DisplayLine> {
            vec![DisplayLine::new("Doubled", self.0.to_string())]
        }
    }

    #[test]
    fn test_computed_carries_display_lines() {
        let outcome = Outcome::from_parts(Ok(Doubled(4.0)), Warnings::new());
        assert_eq!(outcome.results(), Some(&Doubled(4.0)));
        assert!(outcome.errors().is_none());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "computed");
        assert_eq!(json["display"][0]["label"], "Doubled");
    }

    #[test]
    fn test_invalid_has_no_results() {
        let mut errors = FieldErrors::new();
        errors.insert("value".to_string(), FieldError::NotANumber);
        let outcome: Outcome<Doubled> = Outcome::from_parts(Err(errors), Warnings::new());
        assert!(outcome.results().is_none());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "invalid");
        assert_eq!(json["errors"]["value"], "Enter a valid number");
        assert!(json.get("results").is_none());
    }

    #[test]
    fn test_status_codes() {
        let ok = Outcome::from_parts(Ok(Doubled(1.0)), Warnings::new()).into_response();
        assert_eq!(ok.status(), StatusCode::OK);

        let mut errors = FieldErrors::new();
        errors.insert("value".to_string(), FieldError::Negative);
        let bad = Outcome::<Doubled>::from_parts(Err(errors), Warnings::new()).into_response();
        assert_eq!(bad.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
