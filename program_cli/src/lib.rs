//! Inner Program CLI - command-line front end for the knowledge base
//!
//! This CLI lets a reader:
//! - List the situations (triggers) the knowledge base knows about
//! - Print the full report for one situation
//! - Page through the behavior pattern cards a situation activates
//! - Browse patterns by core need and inspect the supply escalation rule

use clap::{Parser, Subcommand};
use program_core::KnowledgeBase;
use program_rules::TriggerType;
use std::ffi::OsString;
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, error, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

use commands::{catalog, parse_need, parse_trigger, triggers};
pub use config::CliConfig;
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Trigger shown by `report` when neither the command line nor the config names one.
pub const DEFAULT_TRIGGER: TriggerType = TriggerType::Accountability;

/// Inner Program CLI application
#[derive(Parser)]
#[command(name = "inner-program")]
#[command(about = "Inner Program - recognize which behavioral program is running", long_about = None)]
#[command(version)]
struct Cli {
    /// Output format (text, json); overrides the config file
    #[arg(short, long)]
    output: Option<OutputFormat>,

    /// Path to a TOML config file
    #[arg(short, long, env = "INNER_PROGRAM_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every trigger with its meaning
    Triggers,

    /// Full report for a trigger: core needs, escalation path, and its cards
    Report {
        /// Trigger key (defaults to the configured trigger, then "accountability")
        trigger: Option<String>,
    },

    /// Describe a trigger and the patterns it activates
    Describe {
        /// Trigger key
        trigger: String,
    },

    /// Show one card for a trigger
    Cards {
        /// Trigger key
        trigger: String,

        /// Card number, starting at 1; wraps past the last card
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// List behavior patterns with their healing notes
    Patterns {
        /// Only patterns serving this core need key
        #[arg(short, long)]
        need: Option<String>,
    },

    /// Summarize the three core needs
    Needs,

    /// Show the supply escalation path
    Escalation {
        /// Current supply is failing
        #[arg(long)]
        failing: bool,
    },
}

/// Run using the current process arguments, writing to stdout.
pub fn run() -> CliResult<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_args(std::env::args_os(), &mut out)
}

/// Run using the provided argument iterator, writing to `out`.
pub fn run_with_args<I, T>(args: I, out: &mut dyn Write) -> CliResult<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    let (config, missing) = resolve_config(cli.config.as_deref())?;

    init_tracing(cli.verbose, config.log_level.as_deref());
    if let Some(path) = missing {
        warn!(path = %path.display(), "config file not found, using defaults");
    }

    let format = cli.output.or(config.output).unwrap_or_default();

    let kb = KnowledgeBase::load().map_err(|err| {
        error!(%err, "knowledge base failed to load");
        err
    })?;

    debug!(command = ?cli.command, "dispatching command");
    match cli.command {
        Commands::Triggers => triggers::list(&kb, format, out),
        Commands::Report { trigger } => {
            let trigger = match trigger {
                Some(key) => parse_trigger(&key)?,
                None => config.default_trigger.unwrap_or(DEFAULT_TRIGGER),
            };
            triggers::report(&kb, trigger, format, out)
        }
        Commands::Describe { trigger } => {
            triggers::describe(&kb, parse_trigger(&trigger)?, format, out)
        }
        Commands::Cards { trigger, page } => {
            triggers::cards(&kb, parse_trigger(&trigger)?, page, format, out)
        }
        Commands::Patterns { need } => {
            let need = need.as_deref().map(parse_need).transpose()?;
            catalog::patterns(&kb, need, format, out)
        }
        Commands::Needs => catalog::needs(&kb, format, out),
        Commands::Escalation { failing } => catalog::escalation(failing, format, out),
    }
}

/// Read the config file if one was named. A named file that does not exist
/// yields the defaults plus the path, so it can be reported after logging starts.
fn resolve_config(path: Option<&Path>) -> CliResult<(CliConfig, Option<&Path>)> {
    let Some(path) = path else {
        return Ok((CliConfig::default(), None));
    };

    match CliConfig::load(path)? {
        Some(config) => Ok((config, None)),
        None => Ok((CliConfig::default(), Some(path))),
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean.
fn init_tracing(verbose: bool, configured: Option<&str>) {
    let filter = if verbose {
        "debug"
    } else {
        configured.unwrap_or("warn")
    };

    let installed = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_ansi(std::io::stderr().is_terminal())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok();

    if installed {
        debug!(filter, "tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_to_string(args: &[&str]) -> CliResult<String> {
        let mut buf = Vec::new();
        let argv = std::iter::once("inner-program").chain(args.iter().copied());
        run_with_args(argv, &mut buf)?;
        Ok(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_report_default_trigger() {
        let text = run_to_string(&["report"]).unwrap();
        assert!(text.contains("Trigger: Held Accountable"));
    }

    #[test]
    fn test_describe_json() {
        let text = run_to_string(&["--output", "json", "describe", "boundary"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["trigger"], "boundary");
        assert!(value["text"]
            .as_str()
            .unwrap()
            .contains("Moral Blackmail, Punishment, Deny Feelings, Over-Control"));
    }

    #[test]
    fn test_unknown_trigger() {
        let err = run_to_string(&["describe", "nonsense"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidArgument(_)));
    }

    #[test]
    fn test_resolve_missing_config() {
        let path = Path::new("/nonexistent/inner-program.toml");
        let (config, missing) = resolve_config(Some(path)).unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(missing, Some(path));

        let (_, missing) = resolve_config(None).unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_unknown_need() {
        let err = run_to_string(&["patterns", "--need", "status"]).unwrap_err();
        assert!(err.to_string().contains("maintain_narcissism"));
    }
}
