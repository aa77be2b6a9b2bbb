//! CLI for the filtersum validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use filtersum_core::config::{self, OutputFormat};
use filtersum_core::logging;
use std::path::PathBuf;

use commands::{run_completions, run_compute, run_validate};

/// Top-level CLI for the filtersum validator.
#[derive(Debug, Parser)]
#[command(name = "filtersum")]
#[command(about = "filtersum: validate the embedded checksum of a filter subscription", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.config/filtersum/config.toml, optional).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check the `! Checksum:` line of a subscription. Exit status 0 only when valid.
    Validate {
        /// Subscription file; reads stdin when omitted or `-`.
        path: Option<PathBuf>,
        /// Output format: text or json (default from config, else text).
        #[arg(long, value_name = "FORMAT")]
        format: Option<OutputFormat>,
    },

    /// Print the checksum a subscription should declare. The file is not modified.
    Compute {
        /// Subscription file; reads stdin when omitted or `-`.
        path: Option<PathBuf>,
    },

    /// Print shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

impl CliCommand {
    /// Returns Ok(false) when the run completed but the document is not valid.
    pub fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let cfg = config::load(cli.config.as_deref())?;

        let filter = cfg.log_filter.as_deref();
        if !cfg.log_to_file || logging::init_logging(filter).is_err() {
            logging::init_logging_stderr(filter);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Validate { path, format } => {
                run_validate(path.as_deref(), format.unwrap_or(cfg.format))
            }
            CliCommand::Compute { path } => {
                run_compute(path.as_deref())?;
                Ok(true)
            }
            CliCommand::Completions { shell } => {
                run_completions(shell);
                Ok(true)
            }
        }
    }
}

#[cfg(test)]
mod tests;
