use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::parameters::{ModelParameters, ParameterError};

#[derive(Error, Debug)]
pub enum ParametersYamlError {
    #[error("failed to read parameter file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse parameter yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid parameters: {0}")]
    Invalid(#[from] ParameterError),
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ParametersRecord {
    consultant: ConsultantRecord,
    ramp_up: RampUpRecord,
    sales: SalesRecord,
    corporate: CorporateRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    targets: Option<TargetsRecord>,
    model: ModelRecord,
    hiring_plan: Vec<u32>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConsultantRecord {
    hours_per_month: u32,
    billable_rate: f64,
    annual_salary: f64,
    admin_fraction: f64,
    billable_fraction: f64,
    maintenance_fraction: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RampUpRecord {
    year1_billable_efficiency: f64,
    year2_billable_efficiency: f64,
    year1_sales_efficiency: f64,
    year2_sales_efficiency: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct SalesRecord {
    leads_per_consultant: f64,
    average_contract_value: f64,
    conversion_rate: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct CorporateRecord {
    overhead_per_consultant: f64,
    recruiting_cost_per_hire: f64,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct TargetsRecord {
    operating_margin: Option<f64>,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct ModelRecord {
    horizon_years: u32,
}

/// Reads and validates a parameter set from a YAML file.
pub fn load_parameters_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<ModelParameters, ParametersYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ParametersYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("loaded parameter file {}", path.display());
    deserialize_parameters_from_yaml_str(&contents)
}

/// Parses a parameter set and rejects it unless every value is in range.
pub fn deserialize_parameters_from_yaml_str(
    input: &str,
) -> Result<ModelParameters, ParametersYamlError> {
    let record: ParametersRecord = serde_yaml::from_str(input)?;
    let params = parameters_from_record(record);
    params.validate()?;
    Ok(params)
}

pub fn serialize_parameters_to_yaml<W: Write>(
    writer: &mut W,
    params: &ModelParameters,
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(&parameters_to_record(params))
        .map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

fn parameters_from_record(record: ParametersRecord) -> ModelParameters {
    ModelParameters {
        hours_per_month: record.consultant.hours_per_month,
        billable_rate: record.consultant.billable_rate,
        annual_salary: record.consultant.annual_salary,
        admin_fraction: record.consultant.admin_fraction,
        billable_fraction: record.consultant.billable_fraction,
        maintenance_fraction: record.consultant.maintenance_fraction,
        year1_billable_efficiency: record.ramp_up.year1_billable_efficiency,
        year2_billable_efficiency: record.ramp_up.year2_billable_efficiency,
        year1_sales_efficiency: record.ramp_up.year1_sales_efficiency,
        year2_sales_efficiency: record.ramp_up.year2_sales_efficiency,
        leads_per_consultant: record.sales.leads_per_consultant,
        average_contract_value: record.sales.average_contract_value,
        conversion_rate: record.sales.conversion_rate,
        overhead_per_consultant: record.corporate.overhead_per_consultant,
        recruiting_cost_per_hire: record.corporate.recruiting_cost_per_hire,
        target_operating_margin: record.targets.and_then(|t| t.operating_margin),
        horizon_years: record.model.horizon_years,
        hiring_plan: record.hiring_plan,
    }
}

fn parameters_to_record(params: &ModelParameters) -> ParametersRecord {
    ParametersRecord {
        consultant: ConsultantRecord {
            hours_per_month: params.hours_per_month,
            billable_rate: params.billable_rate,
            annual_salary: params.annual_salary,
            admin_fraction: params.admin_fraction,
            billable_fraction: params.billable_fraction,
            maintenance_fraction: params.maintenance_fraction,
        },
        ramp_up: RampUpRecord {
            year1_billable_efficiency: params.year1_billable_efficiency,
            year2_billable_efficiency: params.year2_billable_efficiency,
            year1_sales_efficiency: params.year1_sales_efficiency,
            year2_sales_efficiency: params.year2_sales_efficiency,
        },
        sales: SalesRecord {
            leads_per_consultant: params.leads_per_consultant,
            average_contract_value: params.average_contract_value,
            conversion_rate: params.conversion_rate,
        },
        corporate: CorporateRecord {
            overhead_per_consultant: params.overhead_per_consultant,
            recruiting_cost_per_hire: params.recruiting_cost_per_hire,
        },
        targets: params.target_operating_margin.map(|margin| TargetsRecord {
            operating_margin: Some(margin),
        }),
        model: ModelRecord {
            horizon_years: params.horizon_years,
        },
        hiring_plan: params.hiring_plan.clone(),
    }
}
