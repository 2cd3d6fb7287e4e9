use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the multi-year financial model for a parameter file
    Simulate {
        /// Parameter YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for yearly results and ROI summary
        #[arg(short, long)]
        output: String,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
        /// Optional PNG chart of operating profit and cumulative cash flow
        #[arg(short, long)]
        chart: Option<String>,
        /// Optional PNG bar chart of billable and contract revenue per year
        #[arg(long)]
        revenue_chart: Option<String>,
        /// Optional PNG area chart of consultants per tier and year
        #[arg(long)]
        headcount_chart: Option<String>,
    },
    /// Show the annual metrics of one consultant per experience tier
    TierMetrics {
        /// Parameter YAML file
        #[arg(short, long)]
        input: String,
        /// Optional output YAML file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Write the default parameter set to a YAML file
    Init {
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_defaults_to_yaml_without_chart() {
        let args = CliArgs::parse_from([
            "staffing-model",
            "simulate",
            "-i",
            "params.yaml",
            "-o",
            "results.yaml",
        ]);

        if let Commands::Simulate {
            format,
            chart,
            revenue_chart,
            headcount_chart,
            ..
        } = args.command
        {
            assert_eq!(format, OutputFormat::Yaml);
            assert_eq!(chart, None);
            assert_eq!(revenue_chart, None);
            assert_eq!(headcount_chart, None);
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn simulate_accepts_json_format_and_chart() {
        let args = CliArgs::parse_from([
            "staffing-model",
            "simulate",
            "-i",
            "params.yaml",
            "-o",
            "results.json",
            "--format",
            "json",
            "--chart",
            "cash_flow.png",
        ]);

        if let Commands::Simulate { format, chart, .. } = args.command {
            assert_eq!(format, OutputFormat::Json);
            assert_eq!(chart.as_deref(), Some("cash_flow.png"));
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn simulate_accepts_revenue_and_headcount_charts() {
        let args = CliArgs::parse_from([
            "staffing-model",
            "simulate",
            "-i",
            "params.yaml",
            "-o",
            "results.yaml",
            "--revenue-chart",
            "revenue.png",
            "--headcount-chart",
            "headcount.png",
        ]);

        if let Commands::Simulate {
            revenue_chart,
            headcount_chart,
            ..
        } = args.command
        {
            assert_eq!(revenue_chart.as_deref(), Some("revenue.png"));
            assert_eq!(headcount_chart.as_deref(), Some("headcount.png"));
        } else {
            panic!("expected simulate command");
        }
    }

    #[test]
    fn tier_metrics_output_is_optional() {
        let args = CliArgs::parse_from(["staffing-model", "tier-metrics", "-i", "params.yaml"]);

        if let Commands::TierMetrics { input, output } = args.command {
            assert_eq!(input, "params.yaml");
            assert_eq!(output, None);
        } else {
            panic!("expected tier-metrics command");
        }
    }
}
