//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::app::config::{ConfigOverrides, load_config};
use crate::domain::{AppError, BundleConfig, Schema};

#[derive(Parser)]
#[command(name = "manifest-bundle")]
#[command(version)]
#[command(
    about = "Validate board manifests and bundle them into a single JSON index",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    options: ConfigArgs,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Newline-delimited list of manifest locations [default: manifests]
    #[arg(short, long)]
    sources: Option<PathBuf>,
    /// Bundle output path [default: manifest_all_v1.1.0.json]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Environment variable holding the bearer token [default: GITHUB_TOKEN]
    #[arg(long)]
    token_env: Option<String>,
    /// Per-request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,
}

impl ConfigArgs {
    fn resolve(self) -> Result<BundleConfig, AppError> {
        let overrides = ConfigOverrides {
            sources: self.sources,
            output: self.output,
            token_env: self.token_env,
            timeout_secs: self.timeout_secs,
        };
        load_config(self.config.as_deref(), overrides)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch, validate and bundle every listed manifest (default)
    #[clap(visible_alias = "b")]
    Build,
    /// Validate manifests without writing a bundle
    #[clap(visible_alias = "c")]
    Check {
        /// Manifest locations (URLs or file:// paths)
        #[arg(required = true)]
        locations: Vec<String>,
    },
    /// Print the JSON Schema manifests are validated against
    Schema {
        /// Print the schema for the bundled array instead
        #[arg(long)]
        collection: bool,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            cli.options.resolve().and_then(|config| crate::bundle(&config)).map(|o| o.exit_code())
        }
        Commands::Check { locations } => cli
            .options
            .resolve()
            .and_then(|config| crate::check(&config, &locations))
            .map(|o| o.exit_code()),
        Commands::Schema { collection } => {
            let schema = if collection { Schema::Collection } else { Schema::Manifest };
            run_schema(schema).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_schema(schema: Schema) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&crate::schema(schema))?);
    Ok(())
}
