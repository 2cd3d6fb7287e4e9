use crate::domain::metrics::{TierMetrics, TierMetricsTable};
use crate::domain::parameters::ModelParameters;
use crate::domain::tier::ConsultantTier;

/// Computes the annual metrics of one consultant for every tier.
///
/// Pure function of `params`; the result does not depend on the simulated
/// year, only on the tier.
pub fn compute_tier_metrics(params: &ModelParameters) -> TierMetricsTable {
    TierMetricsTable {
        year1: compute_for_tier(params, ConsultantTier::Year1),
        year2: compute_for_tier(params, ConsultantTier::Year2),
        full: compute_for_tier(params, ConsultantTier::Full),
    }
}

fn compute_for_tier(params: &ModelParameters, tier: ConsultantTier) -> TierMetrics {
    let annual_hours = params.annual_hours();
    let admin_hours = annual_hours * params.admin_fraction;
    let target_maintenance_hours = annual_hours * params.maintenance_fraction;

    let (billable_efficiency, sales_efficiency, maintenance_hours) = match tier {
        ConsultantTier::Year1 => (
            params.year1_billable_efficiency,
            params.year1_sales_efficiency,
            0.0,
        ),
        // Second-year consultants carry half of the target maintenance load.
        ConsultantTier::Year2 => (
            params.year2_billable_efficiency,
            params.year2_sales_efficiency,
            target_maintenance_hours * 0.5,
        ),
        ConsultantTier::Full => (1.0, 1.0, target_maintenance_hours),
    };

    let billable_hours = annual_hours * params.billable_fraction * billable_efficiency;

    let sales_hours = match tier {
        ConsultantTier::Full => annual_hours * params.sales_fraction(),
        ConsultantTier::Year1 | ConsultantTier::Year2 => {
            annual_hours - admin_hours - billable_hours - maintenance_hours
        }
    }
    .max(0.0);

    let billable_revenue = billable_hours * params.billable_rate;
    let generated_leads = params.leads_per_consultant * sales_efficiency;
    let won_contracts = generated_leads * params.conversion_rate;
    let potential_contract_revenue = won_contracts * params.average_contract_value;

    let salary_cost = params.annual_salary;
    let overhead_cost = params.overhead_per_consultant;
    let total_cost = salary_cost + overhead_cost;
    let total_potential_revenue = billable_revenue + potential_contract_revenue;

    TierMetrics {
        tier,
        annual_hours,
        admin_hours: admin_hours.max(0.0),
        billable_hours: billable_hours.max(0.0),
        maintenance_hours: maintenance_hours.max(0.0),
        sales_hours,
        billable_efficiency,
        sales_efficiency,
        billable_revenue,
        generated_leads,
        won_contracts,
        potential_contract_revenue,
        salary_cost,
        overhead_cost,
        total_cost,
        total_potential_revenue,
        potential_profit: total_potential_revenue - total_cost,
    }
}
