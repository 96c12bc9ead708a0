//! Command-line interface and command dispatch.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::bail;
use faultcalc_core::{ClampPolicy, Evaluator, RawInputs};

use crate::form::FormSession;
use crate::output::{OutputFormat, render};
use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "faultcalc")]
#[command(about = "Failure and compromise probabilities for a K-group, L-subunit redundancy model")]
pub struct Args {
    /// Path to the data directory (default: ~/.faultcalc/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Clamp results into [0, 1]
    #[arg(long, global = true, conflicts_with = "no_clamp")]
    pub clamp: bool,

    /// Report results exactly as computed
    #[arg(long, global = true)]
    pub no_clamp: bool,

    /// Output format (overrides the settings file)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Evaluate a single submission
    Eval {
        /// Per-subunit failure probability
        #[arg(long = "qf", allow_hyphen_values = true)]
        q_f: String,
        /// Per-subunit compromise probability
        #[arg(long = "qa", allow_hyphen_values = true)]
        q_a: String,
        /// Subunits per group
        #[arg(short = 'L', long = "group-size", allow_hyphen_values = true)]
        group_size: String,
        /// Number of groups
        #[arg(short = 'K', long = "group-count", allow_hyphen_values = true)]
        group_count: String,
    },
    /// Fill in the form interactively, one submission after another
    Form,
    /// Inspect or create the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    /// Print the effective settings
    Show,
    /// Write default settings to the data directory
    Init {
        /// Replace an existing settings file
        #[arg(long)]
        force: bool,
    },
}

impl Args {
    pub fn clamp_override(&self) -> Option<ClampPolicy> {
        if self.clamp {
            Some(ClampPolicy::Clamp)
        } else if self.no_clamp {
            Some(ClampPolicy::PassThrough)
        } else {
            None
        }
    }
}

/// How a command finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ok,
    /// The submission failed validation
    Rejected,
}

pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".faultcalc")
}

/// Run a command against already-resolved settings.
pub fn run<R: BufRead, W: Write>(
    command: &Command,
    settings: &Settings,
    data_dir: &Path,
    input: R,
    output: &mut W,
) -> color_eyre::Result<Status> {
    let evaluator = Evaluator::new(settings.evaluator);

    match command {
        Command::Eval {
            q_f,
            q_a,
            group_size,
            group_count,
        } => {
            let inputs = RawInputs::new(q_f, q_a, group_size, group_count);
            let outcome = evaluator.outcome(&inputs);
            write!(output, "{}", render(&outcome, &inputs, settings.output)?)?;

            if outcome.is_success() {
                tracing::debug!(?inputs, clamp = settings.evaluator.clamp.label(), "Evaluated submission");
                Ok(Status::Ok)
            } else {
                tracing::info!(?inputs, error = ?outcome.error(), "Submission rejected");
                Ok(Status::Rejected)
            }
        }

        Command::Form => {
            let summary = FormSession::new(evaluator, settings.output, input, &mut *output).run()?;
            tracing::info!(
                submissions = summary.submissions,
                rejected = summary.rejected,
                "Form session closed"
            );
            Ok(Status::Ok)
        }

        Command::Config {
            action: ConfigAction::Show,
        } => {
            write!(output, "{}", settings.to_yaml()?)?;
            Ok(Status::Ok)
        }

        Command::Config {
            action: ConfigAction::Init { force },
        } => {
            let path = Settings::path(data_dir);
            if path.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            Settings::default().save(data_dir)?;
            tracing::info!(path = %path.display(), "Wrote default settings");
            writeln!(output, "Wrote {}", path.display())?;
            Ok(Status::Ok)
        }
    }
}
