use thiserror::Error;

use crate::domain::metrics::{TierMetrics, TierMetricsTable};
use crate::domain::parameters::{ModelParameters, ParameterError};
use crate::domain::tier::ConsultantTier;
use crate::services::model_types::{
    ModelOutput, PaybackPeriod, RoiSummary, SimulationRun, YearlyResult,
};
use crate::services::tier_metrics::compute_tier_metrics;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
}

/// Headcount and carried values at the end of a simulated year.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct CohortState {
    pub year1: u32,
    pub year2: u32,
    pub full: u32,
    /// Contracts won during the previous year, paid out in the current one.
    pub previous_year_contracts_won: f64,
    pub cumulative_cash_flow: f64,
}

impl CohortState {
    /// Ages every cohort by one year and adds this year's hires.
    pub fn advance(&mut self, new_hires: u32) {
        self.full += self.year2;
        self.year2 = self.year1;
        self.year1 = new_hires;
    }

    pub fn count(&self, tier: ConsultantTier) -> u32 {
        match tier {
            ConsultantTier::Year1 => self.year1,
            ConsultantTier::Year2 => self.year2,
            ConsultantTier::Full => self.full,
        }
    }

    pub fn total(&self) -> u32 {
        self.year1 + self.year2 + self.full
    }
}

/// Validates `params`, computes the tier metrics and runs the yearly loop.
pub fn run_financial_model(params: &ModelParameters) -> Result<ModelOutput, ModelError> {
    validate(params)?;
    let tier_metrics = compute_tier_metrics(params);
    let run = simulate_years(params, &tier_metrics);
    Ok(ModelOutput {
        tier_metrics,
        years: run.years,
        roi: run.roi,
    })
}

/// Runs the multi-year simulation with precomputed tier metrics.
///
/// Fails before simulating anything if the parameters are invalid, e.g. when
/// the hiring plan does not cover the horizon.
pub fn run_simulation(
    params: &ModelParameters,
    tier_metrics: &TierMetricsTable,
) -> Result<SimulationRun, ModelError> {
    validate(params)?;
    Ok(simulate_years(params, tier_metrics))
}

fn validate(params: &ModelParameters) -> Result<(), ModelError> {
    params.validate().map_err(|e| {
        log::warn!("rejecting parameter set: {e}");
        ModelError::from(e)
    })
}

fn simulate_years(params: &ModelParameters, tier_metrics: &TierMetricsTable) -> SimulationRun {
    let mut state = CohortState::default();
    let mut years = Vec::with_capacity(params.hiring_plan.len());

    for (index, &new_hires) in params.hiring_plan.iter().enumerate() {
        let year = index as u32 + 1;
        state.advance(new_hires);
        let result = simulate_year(params, tier_metrics, &mut state, year, new_hires);
        log::debug!(
            "year={year} headcount={} revenue={:.0} profit={:.0} cash_flow={:.0}",
            result.total_consultants,
            result.total_revenue,
            result.operating_profit,
            result.cumulative_cash_flow
        );
        if result.meets_target_margin == Some(false) {
            log::info!(
                "year={year} margin {:.1}% below target",
                result.operating_margin * 100.0
            );
        }
        years.push(result);
    }

    let roi = summarize_roi(&years, state.cumulative_cash_flow);
    log::info!(
        "simulated {} years: cumulative profit {:.0}, roi {:.4}, payback {}",
        years.len(),
        roi.cumulative_operating_profit,
        roi.roi,
        roi.payback_period
    );

    SimulationRun { years, roi }
}

fn simulate_year(
    params: &ModelParameters,
    tier_metrics: &TierMetricsTable,
    state: &mut CohortState,
    year: u32,
    new_hires: u32,
) -> YearlyResult {
    let headcount = state.total();

    let billable_revenue = headcount_weighted(state, tier_metrics, |m| m.billable_revenue);
    let contracts_won = headcount_weighted(state, tier_metrics, |m| m.won_contracts);

    let contract_revenue = state.previous_year_contracts_won * params.average_contract_value;
    let total_revenue = billable_revenue + contract_revenue;

    let salaries = f64::from(headcount) * params.annual_salary;
    let overhead = f64::from(headcount) * params.overhead_per_consultant;
    let recruiting_cost = f64::from(new_hires) * params.recruiting_cost_per_hire;
    let total_operating_cost = salaries + overhead + recruiting_cost;

    let operating_profit = total_revenue - total_operating_cost;
    let operating_margin = if total_revenue != 0.0 {
        operating_profit / total_revenue
    } else {
        0.0
    };

    state.previous_year_contracts_won = contracts_won;
    state.cumulative_cash_flow += operating_profit;

    YearlyResult {
        year,
        year1_consultants: state.year1,
        year2_consultants: state.year2,
        full_consultants: state.full,
        total_consultants: headcount,
        new_hires,
        billable_revenue,
        contracts_won,
        contract_revenue,
        total_revenue,
        salaries,
        overhead,
        recruiting_cost,
        total_operating_cost,
        operating_profit,
        operating_margin,
        cumulative_cash_flow: state.cumulative_cash_flow,
        meets_target_margin: params
            .target_operating_margin
            .map(|target| operating_margin >= target),
    }
}

/// Sums a per-consultant figure over the current headcount of every tier.
fn headcount_weighted(
    state: &CohortState,
    tier_metrics: &TierMetricsTable,
    value: impl Fn(&TierMetrics) -> f64,
) -> f64 {
    ConsultantTier::ALL
        .into_iter()
        .map(|tier| f64::from(state.count(tier)) * value(tier_metrics.get(tier)))
        .sum()
}

fn summarize_roi(years: &[YearlyResult], cumulative_operating_profit: f64) -> RoiSummary {
    let total_recruiting_cost: f64 = years.iter().map(|year| year.recruiting_cost).sum();

    let roi = if total_recruiting_cost > 0.0 {
        cumulative_operating_profit / total_recruiting_cost
    } else if cumulative_operating_profit > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };

    let payback_period = years
        .iter()
        .find(|year| year.cumulative_cash_flow > 0.0)
        .map(|year| PaybackPeriod::Year(year.year))
        .unwrap_or(PaybackPeriod::NotWithinHorizon);

    RoiSummary {
        total_recruiting_cost,
        cumulative_operating_profit,
        roi,
        payback_period,
    }
}
