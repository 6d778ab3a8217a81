//! Boot Exposure Calculator — estimates taxable boot and the tax it triggers.
//!
//! # Formulas
//! - property boot   = max(0, relinquished − replacement)
//! - cash boot       = max(0, cash received)
//! - mortgage boot   = max(0, old debt − new debt)
//! - total boot      = property + cash + mortgage
//! - estimated tax   = total boot × tax rate / 100
//! - reinvestment gap = max(0, relinquished − replacement)
//!
//! The reinvestment gap equals property boot numerically but is reported on its own.

use serde::{Deserialize, Serialize};

use crate::calculators::format::{format_currency, format_percent};
use crate::calculators::outcome::{DisplayLine, Outcome, Presentable, Warnings};
use crate::calculators::parsing::{field_text, text_or_number, FieldReader};

pub const DEFAULT_TAX_RATE: &str = "20";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BootInputs {
    #[serde(deserialize_with = "text_or_number")]
    pub relinquished_value: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub replacement_value: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub cash_received: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub old_debt: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub new_debt: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub tax_rate: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BootResults {
    pub property_boot: f64,
    pub cash_boot: f64,
    pub mortgage_boot: f64,
    pub total_boot: f64,
    pub tax_rate: f64,
    pub estimated_tax: f64,
    pub reinvestment_gap: f64,
}

impl Presentable for BootResults {
    fn display(&self) -> Vec<DisplayLine> {
        vec![
            DisplayLine::new("Property value boot", format_currency(self.property_boot)),
            DisplayLine::new("Cash boot", format_currency(self.cash_boot)),
            DisplayLine::new("Mortgage boot", format_currency(self.mortgage_boot)),
            DisplayLine::new("Total boot", format_currency(self.total_boot)),
            DisplayLine::new("Blended tax rate", format_percent(self.tax_rate)),
            DisplayLine::new("Estimated tax", format_currency(self.estimated_tax)),
            DisplayLine::new("Reinvestment gap", format_currency(self.reinvestment_gap)),
        ]
    }
}

pub fn calculate_boot(inputs: &BootInputs) -> Outcome<BootResults> {
    let mut reader = FieldReader::new();

    let relinquished = reader.non_negative(
        "relinquished_value",
        field_text(&inputs.relinquished_value, ""),
    );
    let replacement =
        reader.non_negative("replacement_value", field_text(&inputs.replacement_value, ""));
    let cash = reader.non_negative("cash_received", field_text(&inputs.cash_received, ""));
    let old_debt = reader.non_negative("old_debt", field_text(&inputs.old_debt, ""));
    let new_debt = reader.non_negative("new_debt", field_text(&inputs.new_debt, ""));
    let tax_rate = reader.bounded(
        "tax_rate",
        field_text(&inputs.tax_rate, DEFAULT_TAX_RATE),
        0.0,
        100.0,
    );

    let results = reader.finish(|| {
        let property_boot = (relinquished - replacement).max(0.0);
        let cash_boot = cash.max(0.0);
        let mortgage_boot = (old_debt - new_debt).max(0.0);
        let total_boot = property_boot + cash_boot + mortgage_boot;

        BootResults {
            property_boot,
            cash_boot,
            mortgage_boot,
            total_boot,
            tax_rate,
            estimated_tax: total_boot * tax_rate / 100.0,
            reinvestment_gap: (relinquished - replacement).max(0.0),
        }
    });

    Outcome::from_parts(results, Warnings::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::parsing::FieldError;

    fn inputs(fields: [&str; 6]) -> BootInputs {
        let [relinquished, replacement, cash, old_debt, new_debt, tax_rate] =
            fields.map(|f| Some(f.to_string()));
        BootInputs {
            relinquished_value: relinquished,
            replacement_value: replacement,
            cash_received: cash,
            old_debt,
            new_debt,
            tax_rate,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_zero_boot_when_trading_up() {
        let outcome = calculate_boot(&inputs([
            "1,000,000",
            "1,200,000",
            "0",
            "500,000",
            "600,000",
            "20",
        ]));
        let r = outcome.results().expect("computed");
        assert_eq!(r.property_boot, 0.0);
        assert_eq!(r.cash_boot, 0.0);
        assert_eq!(r.mortgage_boot, 0.0);
        assert_eq!(r.total_boot, 0.0);
        assert_eq!(r.estimated_tax, 0.0);
        assert_eq!(r.reinvestment_gap, 0.0);
    }

    #[test]
    fn test_mixed_boot() {
        let outcome = calculate_boot(&inputs([
            "1000000", "800000", "50000", "500000", "400000", "20",
        ]));
        let r = outcome.results().expect("computed");
        assert!(approx(r.property_boot, 200_000.0));
        assert!(approx(r.cash_boot, 50_000.0));
        assert!(approx(r.mortgage_boot, 100_000.0));
        assert!(approx(r.total_boot, 350_000.0));
        assert!(approx(r.estimated_tax, 70_000.0));
        assert!(approx(r.reinvestment_gap, r.property_boot));
    }

    #[test]
    fn test_missing_tax_rate_defaults_to_twenty_percent() {
        let mut i = inputs(["1000000", "900000", "0", "0", "0", ""]);
        i.tax_rate = None;
        let r = calculate_boot(&i).results().cloned().expect("computed");
        assert!(approx(r.tax_rate, 20.0));
        assert!(approx(r.estimated_tax, 20_000.0));
    }

    #[test]
    fn test_blank_tax_rate_is_zero() {
        let r = calculate_boot(&inputs(["1000000", "900000", "0", "0", "0", ""]))
            .results()
            .cloned()
            .expect("computed");
        assert_eq!(r.estimated_tax, 0.0);
        assert!(approx(r.total_boot, 100_000.0));
    }

    #[test]
    fn test_empty_form_computes_zeros() {
        let outcome = calculate_boot(&BootInputs::default());
        assert_eq!(outcome.results().unwrap().total_boot, 0.0);
    }

    #[test]
    fn test_non_numeric_blocks_results() {
        let outcome = calculate_boot(&inputs([
            "abc", "800000", "50000", "500000", "400000", "20",
        ]));
        assert!(outcome.results().is_none());
        let errors = outcome.errors().unwrap();
        assert_eq!(errors["relinquished_value"], FieldError::NotANumber);
    }

    #[test]
    fn test_tax_rate_out_of_range_blocks_results() {
        let outcome = calculate_boot(&inputs([
            "1000000", "800000", "50000", "500000", "400000", "150",
        ]));
        assert!(outcome.results().is_none());
        assert!(matches!(
            outcome.errors().unwrap()["tax_rate"],
            FieldError::OutOfRange { .. }
        ));
    }

    #[test]
    fn test_negative_amount_blocks_results() {
        let outcome = calculate_boot(&inputs(["1000000", "800000", "-5", "0", "0", "20"]));
        assert_eq!(
            outcome.errors().unwrap()["cash_received"],
            FieldError::Negative
        );
    }

    #[test]
    fn test_display_lines_are_formatted() {
        let outcome = calculate_boot(&inputs([
            "1000000", "800000", "50000", "500000", "400000", "20",
        ]));
        let json = serde_json::to_value(&outcome).unwrap();
        let display = json["display"].as_array().unwrap();
        assert!(display
            .iter()
            .any(|l| l["label"] == "Total boot" && l["value"] == "$350,000"));
        assert!(display
            .iter()
            .any(|l| l["label"] == "Blended tax rate" && l["value"] == "20%"));
    }

    #[test]
    fn test_oversized_amounts_block_results() {
        let huge = "9".repeat(308);
        let huge = huge.as_str();
        let outcome = calculate_boot(&inputs([huge, "0", huge, huge, "0", "20"]));
        assert!(outcome.results().is_none());
        let errors = outcome.errors().unwrap();
        for field in ["relinquished_value", "cash_received", "old_debt"] {
            assert!(matches!(errors[field], FieldError::TooLarge { .. }), "{field}");
        }
    }

    #[test]
    fn test_largest_accepted_amounts_stay_finite() {
        let max = "1000000000000000";
        let r = calculate_boot(&inputs([max, "0", max, max, "0", "100"]))
            .results()
            .cloned()
            .expect("computed");
        assert!(r.total_boot.is_finite());
        assert!(r.estimated_tax.is_finite());
    }

    #[test]
    fn test_numeric_json_fields_are_accepted() {
        let i: BootInputs = serde_json::from_value(serde_json::json!({
            "relinquished_value": 1_000_000,
            "replacement_value": "800,000",
            "tax_rate": 20
        }))
        .unwrap();
        let r = calculate_boot(&i).results().cloned().expect("computed");
        assert!(approx(r.estimated_tax, 40_000.0));
    }
}
