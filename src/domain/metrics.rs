use serde::Serialize;

use crate::domain::tier::ConsultantTier;

/// Annual figures for one consultant of a given tier.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierMetrics {
    pub tier: ConsultantTier,
    pub annual_hours: f64,
    pub admin_hours: f64,
    pub billable_hours: f64,
    pub maintenance_hours: f64,
    pub sales_hours: f64,
    pub billable_efficiency: f64,
    pub sales_efficiency: f64,
    pub billable_revenue: f64,
    pub generated_leads: f64,
    pub won_contracts: f64,
    pub potential_contract_revenue: f64,
    pub salary_cost: f64,
    pub overhead_cost: f64,
    pub total_cost: f64,
    pub total_potential_revenue: f64,
    pub potential_profit: f64,
}

impl TierMetrics {
    pub fn allocated_hours(&self) -> f64 {
        self.admin_hours + self.billable_hours + self.maintenance_hours + self.sales_hours
    }
}

/// Metrics for every tier, computed once per run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TierMetricsTable {
    pub year1: TierMetrics,
    pub year2: TierMetrics,
    pub full: TierMetrics,
}

impl TierMetricsTable {
    pub fn get(&self, tier: ConsultantTier) -> &TierMetrics {
        match tier {
            ConsultantTier::Year1 => &self.year1,
            ConsultantTier::Year2 => &self.year2,
            ConsultantTier::Full => &self.full,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &TierMetrics> {
        ConsultantTier::ALL.into_iter().map(|tier| self.get(tier))
    }
}
