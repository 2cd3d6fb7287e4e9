use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use staffing_model::commands::base_commands::{CliArgs, Commands};
use staffing_model::commands::init_cmd::init_command;
use staffing_model::commands::simulate_cmd::simulate_command;
use staffing_model::commands::tier_metrics_cmd::tier_metrics_command;

fn main() -> ExitCode {
    env_logger::init();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Simulate { .. } => simulate_command(cmd),
        cmd @ Commands::TierMetrics { .. } => tier_metrics_command(cmd),
        cmd @ Commands::Init { .. } => init_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}
