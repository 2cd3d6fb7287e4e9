use thiserror::Error;

/// Fractions may overshoot 1.0 by rounding noise from YAML decimals.
const FRACTION_TOLERANCE: f64 = 1e-9;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: f64 },
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },
    #[error("{field} must be between 0 and 1 (got {value})")]
    OutOfUnitRange { field: &'static str, value: f64 },
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("admin, billable and maintenance fractions sum to {sum}, which exceeds 1")]
    FractionsExceedOne { sum: f64 },
    #[error("hours per month must be greater than zero")]
    ZeroHoursPerMonth,
    #[error("analysis horizon must be at least one year")]
    ZeroHorizon,
    #[error("hiring plan has {actual} entries but the horizon is {expected} years")]
    HiringPlanLength { expected: usize, actual: usize },
    #[error("hiring plan adds {total} consultants, more than the model can count")]
    HeadcountTooLarge { total: u64 },
}

/// The complete input of one model run.
///
/// The sales time fraction is not an input; it is whatever remains after
/// admin, billable and maintenance work (see [`ModelParameters::sales_fraction`]).
#[derive(Debug, Clone, PartialEq)]
pub struct ModelParameters {
    pub hours_per_month: u32,
    pub billable_rate: f64,
    pub annual_salary: f64,
    pub admin_fraction: f64,
    pub billable_fraction: f64,
    pub maintenance_fraction: f64,

    pub year1_billable_efficiency: f64,
    pub year2_billable_efficiency: f64,
    pub year1_sales_efficiency: f64,
    pub year2_sales_efficiency: f64,

    pub leads_per_consultant: f64,
    pub average_contract_value: f64,
    pub conversion_rate: f64,

    pub overhead_per_consultant: f64,
    pub recruiting_cost_per_hire: f64,

    /// Operating margin the yearly results are compared against, if any.
    pub target_operating_margin: Option<f64>,

    pub horizon_years: u32,
    /// New hires per year, one entry per year of the horizon.
    pub hiring_plan: Vec<u32>,
}

impl Default for ModelParameters {
    fn default() -> Self {
        Self {
            hours_per_month: 150,
            billable_rate: 500.0,
            annual_salary: 500_000.0,
            admin_fraction: 0.05,
            billable_fraction: 0.60,
            maintenance_fraction: 0.15,
            year1_billable_efficiency: 0.25,
            year2_billable_efficiency: 0.60,
            year1_sales_efficiency: 0.10,
            year2_sales_efficiency: 0.50,
            leads_per_consultant: 6.0,
            average_contract_value: 2_000_000.0,
            conversion_rate: 0.35,
            overhead_per_consultant: 120_000.0,
            recruiting_cost_per_hire: 100_000.0,
            target_operating_margin: Some(0.15),
            horizon_years: 5,
            hiring_plan: vec![2, 2, 3, 0, 0],
        }
    }
}

impl ModelParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Default parameters with the horizon taken from `hiring_plan`.
    ///
    /// A plan longer than `u32::MAX` years saturates the horizon, which
    /// [`ModelParameters::validate`] then rejects as a length mismatch.
    pub fn with_hiring_plan(hiring_plan: Vec<u32>) -> Self {
        Self {
            horizon_years: u32::try_from(hiring_plan.len()).unwrap_or(u32::MAX),
            hiring_plan,
            ..Self::default()
        }
    }

    /// Residual share of working time left for sales, never below zero.
    pub fn sales_fraction(&self) -> f64 {
        (1.0 - self.admin_fraction - self.billable_fraction - self.maintenance_fraction).max(0.0)
    }

    pub fn annual_hours(&self) -> f64 {
        f64::from(self.hours_per_month) * 12.0
    }

    pub fn total_hires(&self) -> u64 {
        self.hiring_plan.iter().map(|hires| u64::from(*hires)).sum()
    }

    /// Checks every documented range. A parameter set that passes can be
    /// simulated without further checks.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.hours_per_month == 0 {
            return Err(ParameterError::ZeroHoursPerMonth);
        }

        positive("billable_rate", self.billable_rate)?;
        positive("annual_salary", self.annual_salary)?;
        positive("leads_per_consultant", self.leads_per_consultant)?;
        positive("average_contract_value", self.average_contract_value)?;

        for (field, value) in [
            ("admin_fraction", self.admin_fraction),
            ("billable_fraction", self.billable_fraction),
            ("maintenance_fraction", self.maintenance_fraction),
            ("year1_billable_efficiency", self.year1_billable_efficiency),
            ("year2_billable_efficiency", self.year2_billable_efficiency),
            ("year1_sales_efficiency", self.year1_sales_efficiency),
            ("year2_sales_efficiency", self.year2_sales_efficiency),
            ("conversion_rate", self.conversion_rate),
        ] {
            unit_range(field, value)?;
        }

        let allocated = self.admin_fraction + self.billable_fraction + self.maintenance_fraction;
        if allocated > 1.0 + FRACTION_TOLERANCE {
            return Err(ParameterError::FractionsExceedOne { sum: allocated });
        }

        non_negative("overhead_per_consultant", self.overhead_per_consultant)?;
        non_negative("recruiting_cost_per_hire", self.recruiting_cost_per_hire)?;

        if let Some(target) = self.target_operating_margin {
            if !target.is_finite() {
                return Err(ParameterError::NotFinite {
                    field: "target_operating_margin",
                });
            }
        }

        if self.horizon_years == 0 {
            return Err(ParameterError::ZeroHorizon);
        }
        if self.hiring_plan.len() != self.horizon_years as usize {
            return Err(ParameterError::HiringPlanLength {
                expected: self.horizon_years as usize,
                actual: self.hiring_plan.len(),
            });
        }
        // Nobody leaves, so the last year's headcount is the sum of all hires.
        let total = self.total_hires();
        if total > u64::from(u32::MAX) {
            return Err(ParameterError::HeadcountTooLarge { total });
        }

        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, ParameterError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ParameterError::NotFinite { field })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if finite(field, value)? <= 0.0 {
        return Err(ParameterError::NotPositive { field, value });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if finite(field, value)? < 0.0 {
        return Err(ParameterError::Negative { field, value });
    }
    Ok(())
}

fn unit_range(field: &'static str, value: f64) -> Result<(), ParameterError> {
    if !(0.0..=1.0).contains(&finite(field, value)?) {
        return Err(ParameterError::OutOfUnitRange { field, value });
    }
    Ok(())
}
