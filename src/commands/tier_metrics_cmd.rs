use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_tier_metrics;
use crate::services::parameters_yaml::load_parameters_from_yaml_file;
use crate::services::tier_metrics::compute_tier_metrics;

pub fn tier_metrics_command(cmd: Commands) -> ExitCode {
    if let Commands::TierMetrics { input, output } = cmd {
        let params = match load_parameters_from_yaml_file(&input) {
            Ok(params) => params,
            Err(e) => {
                eprintln!("Failed to load parameters: {e}");
                return ExitCode::FAILURE;
            }
        };

        let table = compute_tier_metrics(&params);
        println!("{}", format_tier_metrics(&table));

        if let Some(output) = output {
            let yaml = match serde_yaml::to_string(&table) {
                Ok(contents) => contents,
                Err(e) => {
                    eprintln!("Failed to serialize tier metrics: {e}");
                    return ExitCode::FAILURE;
                }
            };
            if let Err(e) = std::fs::write(&output, yaml) {
                eprintln!("Failed to write tier metrics: {e}");
                return ExitCode::FAILURE;
            }
            println!("Tier metrics written to {output}");
        }
    }
    ExitCode::SUCCESS
}
