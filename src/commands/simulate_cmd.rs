use std::process::ExitCode;

use thiserror::Error;

use crate::commands::base_commands::{Commands, OutputFormat};
use crate::commands::report_format::format_model_report;
use crate::services::cash_flow_chart::write_cash_flow_chart_png;
use crate::services::financial_model::run_financial_model;
use crate::services::headcount_chart::write_headcount_chart_png;
use crate::services::model_types::ModelOutput;
use crate::services::parameters_yaml::load_parameters_from_yaml_file;
use crate::services::revenue_chart::write_revenue_chart_png;

#[derive(Error, Debug)]
enum OutputError {
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn simulate_command(cmd: Commands) -> ExitCode {
    if let Commands::Simulate {
        input,
        output,
        format,
        chart,
        revenue_chart,
        headcount_chart,
    } = cmd
    {
        let params = match load_parameters_from_yaml_file(&input) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Failed to load parameters: {e}");
                return ExitCode::FAILURE;
            }
        };

        let model = match run_financial_model(&params) {
            Ok(model) => model,
            Err(e) => {
                eprintln!("Failed to run financial model: {e}");
                return ExitCode::FAILURE;
            }
        };

        let contents = match serialize_output(&model, format) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize model output: {e}");
                return ExitCode::FAILURE;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write model output: {e}");
            return ExitCode::FAILURE;
        }

        println!("{}", format_model_report(&model));
        println!("Model result written to {output}");

        if let Some(chart_path) = chart {
            if let Err(e) = write_cash_flow_chart_png(&chart_path, &model.years) {
                eprintln!("Failed to write cash flow chart: {e}");
                return ExitCode::FAILURE;
            }
            println!("Cash flow chart written to {chart_path}");
        }

        if let Some(chart_path) = revenue_chart {
            if let Err(e) = write_revenue_chart_png(&chart_path, &model.years) {
                eprintln!("Failed to write revenue chart: {e}");
                return ExitCode::FAILURE;
            }
            println!("Revenue chart written to {chart_path}");
        }

        if let Some(chart_path) = headcount_chart {
            if let Err(e) = write_headcount_chart_png(&chart_path, &model.years) {
                eprintln!("Failed to write headcount chart: {e}");
                return ExitCode::FAILURE;
            }
            println!("Headcount chart written to {chart_path}");
        }
    }
    ExitCode::SUCCESS
}

fn serialize_output(model: &ModelOutput, format: OutputFormat) -> Result<String, OutputError> {
    Ok(match format {
        OutputFormat::Yaml => serde_yaml::to_string(model)?,
        OutputFormat::Json => serde_json::to_string_pretty(model)?,
    })
}
