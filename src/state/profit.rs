//! Form model for the profit prediction page.
//!
//! The one piece of client-side arithmetic in the application lives here:
//! `total_cost` sums the itemized cost fields and is sent to the backend
//! alongside them.

#[cfg(test)]
#[path = "profit_test.rs"]
mod profit_test;

use crate::net::types::ProfitPayload;

/// Itemized cultivation cost labels, in display order. Each maps to one
/// text input on the page.
pub const COST_LABELS: [&str; 7] = [
    "Seeds",
    "Fertilizer",
    "Irrigation",
    "Labor",
    "Pesticides",
    "Equipment",
    "Other",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfitForm {
    pub crop: String,
    pub region: String,
    pub farm_size: String,
    pub expected_yield: String,
    /// Raw cost inputs, parallel to [`COST_LABELS`].
    pub costs: [String; 7],
}

impl ProfitForm {
    /// Names of required fields that are still empty. Cost fields are
    /// optional; a blank entry counts as zero.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.crop.trim().is_empty() {
            missing.push("crop");
        }
        if self.region.trim().is_empty() {
            missing.push("region");
        }
        if self.farm_size.trim().is_empty() {
            missing.push("farm size");
        }
        if self.expected_yield.trim().is_empty() {
            missing.push("expected yield");
        }
        missing
    }

    /// Sum of the cost fields. Entries that don't parse as a number count
    /// as zero rather than blocking submission.
    pub fn total_cost(&self) -> f64 {
        self.costs.iter().map(|c| parse_cost(c)).sum()
    }

    /// Snapshot the form into a request payload, including the computed
    /// total.
    pub fn payload(&self) -> ProfitPayload {
        ProfitPayload {
            crop: self.crop.trim().to_owned(),
            region: self.region.trim().to_owned(),
            farm_size: self.farm_size.trim().to_owned(),
            expected_yield: self.expected_yield.trim().to_owned(),
            seed_cost: parse_cost(&self.costs[0]),
            fertilizer_cost: parse_cost(&self.costs[1]),
            irrigation_cost: parse_cost(&self.costs[2]),
            labor_cost: parse_cost(&self.costs[3]),
            pesticide_cost: parse_cost(&self.costs[4]),
            equipment_cost: parse_cost(&self.costs[5]),
            other_cost: parse_cost(&self.costs[6]),
            total_cost: self.total_cost(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse one cost input; blanks and garbage count as zero.
fn parse_cost(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}
