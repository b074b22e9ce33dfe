// rollcall - roster/test-taker reconciliation, headless batch CLI

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use rollcall_cli::exit_codes::EXIT_SUCCESS;
use rollcall_cli::{run, CliError};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Reconcile a master roster against test-taker sheets")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a reconciliation from a TOML config file
    #[command(after_help = "\
Examples:
  rollcall run june.match.toml
  rollcall run june.match.toml --json
  rollcall run june.match.toml --output result.json")]
    Run {
        /// Path to the .match.toml config file
        config: PathBuf,

        /// Output JSON to stdout instead of human summary only
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a run config without running
    #[command(after_help = "\
Examples:
  rollcall validate june.match.toml")]
    Validate {
        /// Path to the .match.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output } => run::cmd_run(config, json, output),
        Commands::Validate { config } => run::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            if !message.is_empty() {
                eprintln!("error: {message}");
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {hint}");
            }
            ExitCode::from(code)
        }
    }
}
