use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

mod config;
mod detector;
mod error;
mod host;
mod platform;
mod report;

use config::FactsConfig;
use detector::FirewallDetector;
use host::{FsConfigReader, SystemCommandRunner};
use platform::PlatformKind;
use report::{FailureReport, FirewallReport};

#[derive(Parser)]
#[command(name = "fwfacts")]
#[command(version, about = "Detect which firewall subsystem is active on this host", long_about = None)]
struct Cli {
    /// Configuration file (defaults to <config dir>/fwfacts/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log probe details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the active firewall (default)
    Detect {
        /// Evaluate another platform's table (e.g. "FreeBSD") instead of the host's
        #[arg(short, long)]
        platform: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Show current configuration
    Config {
        /// Write the default configuration file
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries only the result
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let command = cli.command.unwrap_or(Commands::Detect {
        platform: None,
        format: Format::Json,
    });

    match command {
        Commands::Detect { platform, format } => {
            let config = FactsConfig::load(cli.config.as_deref())?;
            let platform = match platform {
                Some(name) => PlatformKind::from_name(&name),
                None => PlatformKind::current(),
            };
            debug!("Platform: {}", platform);

            let detector =
                FirewallDetector::new(&SystemCommandRunner, &FsConfigReader, config.probes);

            match detector.detect(&platform) {
                Ok(kind) => {
                    let report = FirewallReport::new(kind);
                    match format {
                        Format::Json => println!("{}", report.to_json()?),
                        Format::Text => report.display(&platform),
                    }
                }
                Err(e) => {
                    if let Format::Json = format {
                        println!("{}", FailureReport::new(e.to_string()).to_json()?);
                    }
                    eprintln!("{} {}", "[✗] Detection failed:".bright_red(), e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { init } => {
            if init {
                let path = FactsConfig::default().save(cli.config.as_deref())?;
                println!(
                    "{} {}",
                    "[✓] Wrote default configuration to".green(),
                    path.display()
                );
            } else {
                let config = FactsConfig::load(cli.config.as_deref())?;
                println!("{}", "Current Configuration:".bright_blue().bold());
                println!("{}", "━".repeat(50).bright_blue());
                print!("{}", config.to_toml()?);
            }
        }
    }

    Ok(())
}
