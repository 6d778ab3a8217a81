//! Exchange Cost Estimator — closing costs specific to completing an exchange.
//!
//! Hard errors (non-numeric, negative) block results. Plausibility warnings
//! (QI fee above 5%, title rate above 3%) are attached to computed results
//! and never suppress them.

use serde::{Deserialize, Serialize};

use crate::calculators::format::{format_currency, format_percent};
use crate::calculators::outcome::{DisplayLine, Outcome, Presentable, Warnings};
use crate::calculators::parsing::{field_text, text_or_number, FieldReader};

pub const DEFAULT_QI_FEE_PERCENT: &str = "0.75";
pub const DEFAULT_ESCROW_FEE: &str = "1100";
pub const DEFAULT_TITLE_RATE_PERCENT: &str = "0.40";
pub const DEFAULT_RECORDING_FEES: &str = "200";

const QI_FEE_WARN_ABOVE: f64 = 5.0;
const TITLE_RATE_WARN_ABOVE: f64 = 3.0;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CostInputs {
    #[serde(deserialize_with = "text_or_number")]
    pub property_value: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub qi_fee_percent: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub escrow_fee: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub title_rate_percent: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub recording_fees: Option<String>,
    #[serde(deserialize_with = "text_or_number")]
    pub other_costs: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResults {
    pub qi_fee: f64,
    pub escrow_fee: f64,
    pub title_premium: f64,
    pub recording_fees: f64,
    pub other_costs: f64,
    pub total: f64,
    /// Total cost scaled to a $1M property; zero when the property value is zero.
    pub cost_per_million: f64,
    /// Total as a percentage of property value; zero when the property value is zero.
    pub percent_of_value: f64,
}

impl Presentable for CostResults {
    fn display(&self) -> Vec<DisplayLine> {
        vec![
            DisplayLine::new("Qualified intermediary fee", format_currency(self.qi_fee)),
            DisplayLine::new("Escrow fee", format_currency(self.escrow_fee)),
            DisplayLine::new("Title insurance premium", format_currency(self.title_premium)),
            DisplayLine::new("Recording and filing", format_currency(self.recording_fees)),
            DisplayLine::new("Other closing costs", format_currency(self.other_costs)),
            DisplayLine::new("Estimated total", format_currency(self.total)),
            DisplayLine::new("Cost per $1M of value", format_currency(self.cost_per_million)),
            DisplayLine::new("Share of property value", format_percent(self.percent_of_value)),
        ]
    }
}

pub fn estimate_costs(inputs: &CostInputs) -> Outcome<CostResults> {
    let mut reader = FieldReader::new();

    let property_value =
        reader.non_negative("property_value", field_text(&inputs.property_value, ""));
    let qi_fee_percent = reader.non_negative(
        "qi_fee_percent",
        field_text(&inputs.qi_fee_percent, DEFAULT_QI_FEE_PERCENT),
    );
    let escrow_fee = reader.non_negative(
        "escrow_fee",
        field_text(&inputs.escrow_fee, DEFAULT_ESCROW_FEE),
    );
    let title_rate_percent = reader.non_negative(
        "title_rate_percent",
        field_text(&inputs.title_rate_percent, DEFAULT_TITLE_RATE_PERCENT),
    );
    let recording_fees = reader.non_negative(
        "recording_fees",
        field_text(&inputs.recording_fees, DEFAULT_RECORDING_FEES),
    );
    let other_costs = reader.non_negative("other_costs", field_text(&inputs.other_costs, ""));

    let mut warnings = Warnings::new();
    if !reader.has_errors() {
        if qi_fee_percent > QI_FEE_WARN_ABOVE {
            warnings.insert(
                "qi_fee_percent".to_string(),
                format!(
                    "QI fees above {} are unusual. Recheck this value.",
                    format_percent(QI_FEE_WARN_ABOVE)
                ),
            );
        }
        if title_rate_percent > TITLE_RATE_WARN_ABOVE {
            warnings.insert(
                "title_rate_percent".to_string(),
                format!(
                    "Title rates above {} are unusual. Recheck this value.",
                    format_percent(TITLE_RATE_WARN_ABOVE)
                ),
            );
        }
    }

    let results = reader.finish(|| {
        let qi_fee = property_value * qi_fee_percent / 100.0;
        let title_premium = property_value * title_rate_percent / 100.0;
        let total = qi_fee + escrow_fee + title_premium + recording_fees + other_costs;
        let (cost_per_million, percent_of_value) = if property_value > 0.0 {
            (
                total / property_value * 1_000_000.0,
                total / property_value * 100.0,
            )
        } else {
            (0.0, 0.0)
        };

        CostResults {
            qi_fee,
            escrow_fee,
            title_premium,
            recording_fees,
            other_costs,
            total,
            cost_per_million,
            percent_of_value,
        }
    });

    Outcome::from_parts(results, warnings)
}
