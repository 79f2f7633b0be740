//! cpe-tools: bind CPE Well-Formed Names to v2.2 URIs and v2.3 formatted strings.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use cpe_tools::{
    cli::{self, ConfigOverrides},
    config::{config_search_dirs, BindTarget, CONFIG_FILE_NAMES},
    model::{Attribute, AttributeValue, WellFormedName},
    reports::ReportFormat,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cpe-tools")]
#[command(author = "Binarly.io")]
#[command(version)]
#[command(about = "Bind CPE Well-Formed Names to URIs and formatted strings", long_about = None)]
#[command(after_help = "VALUES:
    Attribute values are WFN-quoted strings: escape every special character
    with a backslash (8\\.0\\.6001, foo\\$bar). The bare tokens ANY and NA are
    the logical values; an omitted attribute is ANY.

EXIT CODES:
    0  All names bound
    1  Some batch entries failed (with --fail-on-error)

EXAMPLES:
    # Bind one name to both forms
    cpe-tools bind --part a --vendor microsoft --product internet_explorer \\
        --version '8\\.0\\.6001' --update beta --language sp2

    # Formatted strings only, as JSON
    cpe-tools bind --part o --vendor linux --update NA -t fs -o json

    # Bind a file of names in CI
    cpe-tools batch names.yaml -o csv -O names.csv --fail-on-error")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "CPE_TOOLS_CONFIG")]
    config: Option<PathBuf>,

    /// Configuration preset (default, ci-cd, legacy, nvd)
    #[arg(long, global = true)]
    preset: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `bind` subcommand
#[derive(Parser)]
struct BindArgs {
    /// Part: a (application), o (operating system), h (hardware)
    #[arg(long)]
    part: Option<AttributeValue>,

    /// Vendor
    #[arg(long)]
    vendor: Option<AttributeValue>,

    /// Product
    #[arg(long)]
    product: Option<AttributeValue>,

    /// Version
    #[arg(long)]
    version: Option<AttributeValue>,

    /// Update
    #[arg(long)]
    update: Option<AttributeValue>,

    /// Legacy edition
    #[arg(long)]
    edition: Option<AttributeValue>,

    /// Language
    #[arg(long)]
    language: Option<AttributeValue>,

    /// Software edition
    #[arg(long)]
    sw_edition: Option<AttributeValue>,

    /// Target software
    #[arg(long)]
    target_sw: Option<AttributeValue>,

    /// Target hardware
    #[arg(long)]
    target_hw: Option<AttributeValue>,

    /// Other
    #[arg(long)]
    other: Option<AttributeValue>,

    /// Forms to produce
    #[arg(short, long)]
    target: Option<BindTarget>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

impl BindArgs {
    fn to_wfn(&self) -> WellFormedName {
        let values = [
            (Attribute::Part, &self.part),
            (Attribute::Vendor, &self.vendor),
            (Attribute::Product, &self.product),
            (Attribute::Version, &self.version),
            (Attribute::Update, &self.update),
            (Attribute::Edition, &self.edition),
            (Attribute::Language, &self.language),
            (Attribute::SwEdition, &self.sw_edition),
            (Attribute::TargetSw, &self.target_sw),
            (Attribute::TargetHw, &self.target_hw),
            (Attribute::Other, &self.other),
        ];

        let mut wfn = WellFormedName::new();
        for (attribute, value) in values {
            if let Some(value) = value {
                wfn.set(attribute, value.clone());
            }
        }
        wfn
    }
}

/// Arguments for the `batch` subcommand
#[derive(Parser)]
struct BatchArgs {
    /// JSON or YAML file with a list of names
    input: PathBuf,

    /// Forms to produce
    #[arg(short, long)]
    target: Option<BindTarget>,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if any entry fails to bind
    #[arg(long)]
    fail_on_error: bool,

    /// Bind entries one at a time instead of in parallel
    #[arg(long)]
    sequential: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Bind one name given as attribute flags
    Bind(BindArgs),

    /// Bind every name in a JSON or YAML file
    Batch(BatchArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the effective configuration as YAML
    Show,
    /// List the places a config file is looked for
    Path,
    /// Write a commented .cpe-tools.yaml to the current directory
    Init {
        /// Write only the default values, without comments
        #[arg(long)]
        minimal: bool,
    },
    /// Print the JSON Schema of the config file
    Schema {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Commands::Bind(ref args) => {
            let config = cli::resolve_config(
                cli.config.as_deref(),
                ConfigOverrides {
                    preset: cli.preset.clone(),
                    target: args.target,
                    format: args.output,
                    output_file: args.output_file.clone(),
                    quiet: cli.quiet,
                    ..ConfigOverrides::default()
                },
            )?;
            let exit_code = cli::run_bind(&args.to_wfn(), &config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Batch(ref args) => {
            let config = cli::resolve_config(
                cli.config.as_deref(),
                ConfigOverrides {
                    preset: cli.preset.clone(),
                    target: args.target,
                    format: args.output,
                    output_file: args.output_file.clone(),
                    quiet: cli.quiet,
                    fail_on_error: args.fail_on_error,
                    sequential: args.sequential,
                },
            )?;
            let exit_code = cli::run_batch(&args.input, &config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Config { ref action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = cli::resolve_config_with_source(
                    cli.config.as_deref(),
                    ConfigOverrides {
                        preset: cli.preset.clone(),
                        ..ConfigOverrides::default()
                    },
                )?;
                match loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file loaded; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                if let Some(path) = &cli.config {
                    eprintln!("Explicit config file: {}", path.display());
                    eprintln!();
                }
                eprintln!("Config file search paths (in order):");
                for dir in config_search_dirs() {
                    eprintln!("  {}", dir.display());
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match cpe_tools::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init { minimal } => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(CONFIG_FILE_NAMES[0]);
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = if *minimal {
                    cpe_tools::config::generate_example_config()
                } else {
                    cpe_tools::config::generate_full_example_config()
                };
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
            ConfigAction::Schema { output } => {
                let schema = cpe_tools::config::generate_json_schema();
                match output {
                    Some(path) => {
                        std::fs::write(path, &schema)
                            .with_context(|| format!("failed to write {}", path.display()))?;
                        eprintln!("Schema written to {}", path.display());
                    }
                    None => println!("{schema}"),
                }
                Ok(())
            }
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "cpe-tools", &mut std::io::stdout());
            Ok(())
        }
    }
}
