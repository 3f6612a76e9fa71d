use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_OUTPUT: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Estimate the annual audit fee for a fund profile
    Estimate {
        /// Path to the fund profile (YAML)
        profile: PathBuf,

        /// Print the profile and estimate as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Print the rate card in effect as YAML
    Rates,
    /// Validate the rate card in effect and exit
    Check,
}

#[derive(Parser, Debug)]
#[command(name = "audit-fee")]
#[command(about = "Annual fund audit fee estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/audit-fee/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Why the CLI stopped, mapped to its exit code.
#[derive(Debug)]
enum Failure {
    /// Config file, log filter or rate card
    Config(Vec<String>),
    /// The profile given on the command line
    Input(String),
    /// Serializing a report or the rate card
    Output(String),
}

impl Failure {
    fn exit_code(&self) -> i32 {
        match self {
            Failure::Config(_) => EXIT_CONFIG,
            Failure::Input(_) => EXIT_INPUT,
            Failure::Output(_) => EXIT_OUTPUT,
        }
    }

    fn report(&self) {
        match self {
            Failure::Config(errors) => {
                for error in errors {
                    eprintln!("{}", error);
                }
            }
            Failure::Input(message) | Failure::Output(message) => eprintln!("{}", message),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => std::process::exit(EXIT_SUCCESS),
        Err(failure) => {
            failure.report();
            std::process::exit(failure.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), Failure> {
    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = audit_fee::config::load_config(config_path)
        .map_err(|e| Failure::Config(vec![format!("Config error: {:#}", e)]))?;

    let log_level = if cli.verbose {
        "debug"
    } else {
        config
            .log_level
            .as_deref()
            .unwrap_or(audit_fee::telemetry::DEFAULT_LOG_LEVEL)
    };
    audit_fee::telemetry::init(log_level)
        .map_err(|e| Failure::Config(vec![format!("Config error: {}", e)]))?;

    // Validate the rate card at startup
    let rates = config.effective_rates();
    debug!(custom = config.rates.is_some(), "rate card loaded");
    audit_fee::estimate::validate_tables(&rates).map_err(|errors| {
        let mut lines = vec!["Rate card errors:".to_string()];
        lines.extend(errors.into_iter().map(|error| format!("  - {}", error)));
        Failure::Config(lines)
    })?;

    match cli.command {
        Commands::Estimate { profile, json } => {
            let profile = audit_fee::config::load_profile(&profile)
                .map_err(|e| Failure::Input(format!("Profile error: {:#}", e)))?;

            let estimator = audit_fee::estimate::Estimator::new(rates);
            let estimate = estimator
                .estimate(&profile)
                .map_err(|e| Failure::Config(vec![format!("Rate card error: {}", e)]))?;

            if json {
                let output = audit_fee::output::format_report_json(&profile, &estimate)
                    .map_err(|e| Failure::Output(format!("Failed to serialize report: {}", e)))?;
                println!("{}", output);
            } else {
                let use_colors = audit_fee::output::should_use_colors();
                println!(
                    "{}",
                    audit_fee::output::format_estimate(&profile, &estimate, use_colors)
                );
            }
        }
        Commands::Rates => {
            let yaml = serde_saphyr::to_string(&rates).map_err(|e| {
                Failure::Output(format!("Failed to serialize rate card: {}", e))
            })?;
            print!("{}", yaml);
        }
        Commands::Check => {
            println!("Rate card OK");
        }
    }

    Ok(())
}
