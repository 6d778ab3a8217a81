//! Identification Rules Checker.
//!
//! # Rules
//! - Three-property rule: at most 3 properties identified, any value.
//! - 200% rule: total identified value ≤ 200% of the relinquished value.
//! - 95% rule: acquired value ≥ 95% of the total identified value. This is a
//!   post-closing check, so it needs the acquired value as an input.
//!
//! Identification is compliant when ANY rule passes. Each rule's verdict is
//! reported alongside the overall one.

use serde::{Deserialize, Serialize};

use crate::calculators::format::{format_currency, format_percent};
use crate::calculators::outcome::{DisplayLine, Outcome, Presentable, Warnings};
use crate::calculators::parsing::{
    field_text, text_or_number, texts_or_numbers, FieldError, FieldReader,
};

/// Upper bound on how many properties one request may list.
pub const MAX_IDENTIFIED_PROPERTIES: usize = 100;

/// Thresholds for the three identification rules.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentificationRules {
    pub max_properties: usize,
    pub value_limit_percent: f64,
    pub acquisition_percent: f64,
}

impl Default for IdentificationRules {
    fn default() -> Self {
        IdentificationRules {
            max_properties: 3,
            value_limit_percent: 200.0,
            acquisition_percent: 95.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IdentificationInputs {
    #[serde(deserialize_with = "text_or_number")]
    pub relinquished_value: Option<String>,
    /// One entry per identified property (fair market value).
    #[serde(deserialize_with = "texts_or_numbers")]
    pub identified_values: Vec<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub acquired_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleCheck {
    pub passed: bool,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdentificationResults {
    pub property_count: usize,
    pub total_identified: f64,
    /// Total identified as a percentage of the relinquished value; `None` when
    /// the relinquished value is zero.
    pub identified_percent: Option<f64>,
    pub value_limit: f64,
    pub required_acquisition: f64,
    pub three_property_rule: RuleCheck,
    pub two_hundred_percent_rule: RuleCheck,
    pub ninety_five_percent_rule: RuleCheck,
    pub compliant: bool,
}

fn pass_fail(passed: bool) -> &'static str {
    if passed {
        "Pass"
    } else {
        "Fail"
    }
}

impl Presentable for IdentificationResults {
    fn display(&self) -> Vec<DisplayLine> {
        let mut lines = vec![
            DisplayLine::new("Properties identified", self.property_count.to_string()),
            DisplayLine::new("Total identified value", format_currency(self.total_identified)),
        ];
        if let Some(percent) = self.identified_percent {
            lines.push(DisplayLine::new(
                "Identified vs relinquished",
                format_percent(percent),
            ));
        }
        lines.extend([
            DisplayLine::new(
                "Three-property rule",
                pass_fail(self.three_property_rule.passed).to_string(),
            ),
            DisplayLine::new(
                "200% rule",
                pass_fail(self.two_hundred_percent_rule.passed).to_string(),
            ),
            DisplayLine::new(
                "95% rule",
                pass_fail(self.ninety_five_percent_rule.passed).to_string(),
            ),
            DisplayLine::new(
                "Identification",
                if self.compliant {
                    "Compliant".to_string()
                } else {
                    "Not compliant".to_string()
                },
            ),
        ]);
        lines
    }
}

pub fn check_identification(inputs: &IdentificationInputs) -> Outcome<IdentificationResults> {
    check_identification_with(inputs, &IdentificationRules::default())
}

pub fn check_identification_with(
    inputs: &IdentificationInputs,
    rules: &IdentificationRules,
) -> Outcome<IdentificationResults> {
    let mut reader = FieldReader::new();

    let relinquished = reader.non_negative(
        "relinquished_value",
        field_text(&inputs.relinquished_value, ""),
    );
    let identified: Vec<f64> = inputs
        .identified_values
        .iter()
        .enumerate()
        .map(|(i, raw)| reader.non_negative(&format!("identified_values[{i}]"), raw))
        .collect();
    let acquired = reader.non_negative("acquired_value", field_text(&inputs.acquired_value, ""));

    if identified.is_empty() {
        reader.reject(
            "identified_values",
            FieldError::Constraint("Identify at least one replacement property".to_string()),
        );
    }

    let results = reader.finish(|| evaluate(relinquished, &identified, acquired, rules));
    Outcome::from_parts(results, Warnings::new())
}

fn evaluate(
    relinquished: f64,
    identified: &[f64],
    acquired: f64,
    rules: &IdentificationRules,
) -> IdentificationResults {
    let property_count = identified.len();
    let total_identified: f64 = identified.iter().sum();
    let value_limit = relinquished * rules.value_limit_percent / 100.0;
    let required_acquisition = total_identified * rules.acquisition_percent / 100.0;

    let three_passed = property_count <= rules.max_properties;
    let three_property_rule = RuleCheck {
        passed: three_passed,
        detail: format!(
            "{property_count} identified; limit is {}",
            rules.max_properties
        ),
    };

    let value_passed = total_identified <= value_limit;
    let two_hundred_percent_rule = RuleCheck {
        passed: value_passed,
        detail: format!(
            "{} identified against a {} limit",
            format_currency(total_identified),
            format_currency(value_limit)
        ),
    };

    let acquisition_passed = acquired >= required_acquisition;
    let ninety_five_percent_rule = RuleCheck {
        passed: acquisition_passed,
        detail: format!(
            "{} acquired; {} required",
            format_currency(acquired),
            format_currency(required_acquisition)
        ),
    };

    IdentificationResults {
        property_count,
        total_identified,
        identified_percent: (relinquished > 0.0).then(|| total_identified / relinquished * 100.0),
        value_limit,
        required_acquisition,
        three_property_rule,
        two_hundred_percent_rule,
        ninety_five_percent_rule,
        compliant: three_passed || value_passed || acquisition_passed,
    }
}
