use serde::{Serialize, Serializer};
use std::fmt;

use crate::domain::metrics::TierMetricsTable;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearlyResult {
    pub year: u32,
    pub year1_consultants: u32,
    pub year2_consultants: u32,
    pub full_consultants: u32,
    pub total_consultants: u32,
    pub new_hires: u32,
    pub billable_revenue: f64,
    /// Contracts won during the year; their value is recognised next year.
    pub contracts_won: f64,
    pub contract_revenue: f64,
    pub total_revenue: f64,
    pub salaries: f64,
    pub overhead: f64,
    pub recruiting_cost: f64,
    pub total_operating_cost: f64,
    pub operating_profit: f64,
    pub operating_margin: f64,
    pub cumulative_cash_flow: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meets_target_margin: Option<bool>,
}

/// First year in which the cumulative cash flow is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaybackPeriod {
    Year(u32),
    NotWithinHorizon,
}

impl PaybackPeriod {
    pub fn year(self) -> Option<u32> {
        match self {
            PaybackPeriod::Year(year) => Some(year),
            PaybackPeriod::NotWithinHorizon => None,
        }
    }
}

impl fmt::Display for PaybackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaybackPeriod::Year(year) => write!(f, "year {year}"),
            PaybackPeriod::NotWithinHorizon => f.write_str("not within horizon"),
        }
    }
}

impl Serialize for PaybackPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PaybackPeriod::Year(year) => serializer.serialize_u32(*year),
            PaybackPeriod::NotWithinHorizon => serializer.serialize_str("not_within_horizon"),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RoiSummary {
    pub total_recruiting_cost: f64,
    pub cumulative_operating_profit: f64,
    /// Cumulative profit per unit of recruiting spend. `inf` when nothing was
    /// spent on recruiting but the firm made a profit, written as `"infinity"`.
    #[serde(serialize_with = "serialize_ratio")]
    pub roi: f64,
    pub payback_period: PaybackPeriod,
}

/// JSON has no infinity, so non-finite ratios are written as text.
fn serialize_ratio<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str("nan")
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() { "infinity" } else { "-infinity" };
        serializer.serialize_str(text)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub years: Vec<YearlyResult>,
    pub roi: RoiSummary,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ModelOutput {
    pub tier_metrics: TierMetricsTable,
    pub years: Vec<YearlyResult>,
    pub roi: RoiSummary,
}
