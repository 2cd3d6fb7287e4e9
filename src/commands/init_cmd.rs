use std::process::ExitCode;

use crate::commands::base_commands::Commands;
use crate::domain::parameters::ModelParameters;
use crate::services::parameters_yaml::serialize_parameters_to_yaml;

pub fn init_command(cmd: Commands) -> ExitCode {
    if let Commands::Init { output } = cmd {
        let mut buffer = Vec::new();
        if let Err(e) = serialize_parameters_to_yaml(&mut buffer, &ModelParameters::default()) {
            eprintln!("Failed to serialize default parameters: {e}");
            return ExitCode::FAILURE;
        }
        if let Err(e) = std::fs::write(&output, buffer) {
            eprintln!("Failed to write parameter file: {e}");
            return ExitCode::FAILURE;
        }
        println!("Default parameters written to {output}");
    }
    ExitCode::SUCCESS
}
