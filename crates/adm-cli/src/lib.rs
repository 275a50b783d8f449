//! ADM CLI - Command-line interface for archetype classification
//!
//! This CLI lets governance reviewers and developers:
//! - Classify an application profile into archetypes, modifiers and a risk tier
//! - Inspect the additive risk score on its own
//! - Browse the archetype catalog
//! - Check the effective classifier configuration

use adm_engine::Classifier;
use clap::{Parser, Subcommand};
use std::ffi::OsString;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{archetypes, classify, risk};
use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::print_error;

/// ADM CLI application
#[derive(Parser)]
#[command(name = "adm")]
#[command(about = "ADM - Archetype Determination Matrix CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "ADM_CONFIG")]
    config: Option<String>,

    /// Output format (table, json, yaml)
    #[arg(short, long)]
    output: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Classify an application profile (JSON or YAML, `-` for stdin)
    Classify {
        /// Profile file
        file: String,

        /// Print the decision trace
        #[arg(short, long)]
        trace: bool,
    },

    /// Score the risk of an application profile
    Risk {
        /// Profile file
        file: String,
    },

    /// List the archetype catalog
    Archetypes,

    /// Show configuration
    Config,
}

/// Run using the current process arguments.
pub fn run() -> CliResult<()> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    // Load config
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.output.or(config.default_output).unwrap_or_default();

    match cli.command {
        Commands::Classify { file, trace } => {
            let classifier = Classifier::new(config.classifier.clone())?;
            classify::execute(&file, trace, &classifier, format)
        }
        Commands::Risk { file } => risk::execute(&file, format),
        Commands::Archetypes => archetypes::execute(format),
        Commands::Config => match format {
            output::OutputFormat::Table => {
                let source = config
                    .source
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "defaults".to_string());
                let classifier = &config.classifier;
                println!("Config: {}", source);
                println!("Survival threshold: {}", classifier.survival_threshold);
                println!("Dominance gap: {}", classifier.dominance_gap);
                println!("Max archetypes: {}", classifier.max_archetypes);
                println!(
                    "Enterprise modifier score: {}",
                    classifier.enterprise_modifier_score
                );
                Ok(())
            }
            _ => output::print_single(&config.classifier, format),
        },
    }
}
