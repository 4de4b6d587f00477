//! Muncht CLI - command-line front end for the munch scanner.
//!
//! Parses arguments with clap, sets up logging, loads `muncht.toml`, and
//! dispatches to the selected command.

mod commands;
mod config;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_check, run_tokenize, CheckArgs, TokenizeArgs};
use config::{Config, OutputFormat};
use error::{MunchtError, Result};

/// Muncht - tokenize text with the munch maximal-munch scanner
#[derive(Parser, Debug)]
#[command(name = "muncht")]
#[command(author = "Munch Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize text with the munch scanner", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MUNCHT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MUNCHT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MUNCHT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the muncht CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of a file
    ///
    /// Reads standard input when FILE is omitted or `-`.
    Tokenize(TokenizeCommand),

    /// Verify that files contain only recognized characters
    Check(CheckCommand),

    /// Print the effective configuration as TOML
    Config(ConfigCommand),
}

/// Output format as accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Input file
    input: Option<PathBuf>,

    /// Output format (default: from config)
    #[arg(short = 'F', long, value_enum)]
    format: Option<FormatArg>,

    /// Skip unrecognized characters instead of stopping
    #[arg(long)]
    skip_invalid: bool,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommand {
    /// Files to check
    #[arg(required = true)]
    inputs: Vec<PathBuf>,
}

/// Arguments for the config subcommand.
#[derive(Parser, Debug)]
struct ConfigCommand {
    /// Write the configuration to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

/// Load configuration, initialize logging, and run the selected command.
fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose || config.verbose, cli.no_color)?;
    tracing::debug!(path = ?cli.config, ?config, "loaded configuration");
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// Logs go to stderr so token output on stdout stays machine-readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MunchtError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Check(args) => execute_check(args),
        Commands::Config(args) => execute_config(args, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    run_tokenize(TokenizeArgs {
        input: args.input,
        format: args.format.map(OutputFormat::from),
        skip_invalid: args.skip_invalid,
        config,
    })
}

/// Execute the check command.
fn execute_check(args: CheckCommand) -> Result<()> {
    run_check(CheckArgs {
        inputs: args.inputs,
    })
}

/// Execute the config command.
fn execute_config(args: ConfigCommand, config: Config) -> Result<()> {
    match args.output {
        Some(path) => {
            config.save_to_path(&path)?;
            tracing::info!(path = %path.display(), "wrote configuration");
        },
        None => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokenize_stdin() {
        let cli = Cli::parse_from(["muncht", "tokenize"]);
        if let Commands::Tokenize(args) = cli.command {
            assert!(args.input.is_none());
            assert!(args.format.is_none());
            assert!(!args.skip_invalid);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_with_options() {
        let cli = Cli::parse_from([
            "muncht",
            "tokenize",
            "expr.txt",
            "--format",
            "json",
            "--skip-invalid",
        ]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("expr.txt")));
            assert_eq!(args.format, Some(FormatArg::Json));
            assert!(args.skip_invalid);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["muncht", "check", "a.txt", "b.txt"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.inputs.len(), 2);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_check_requires_files() {
        assert!(Cli::try_parse_from(["muncht", "check"]).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["muncht", "tokenize", "-F", "xml"]).is_err());
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "muncht",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/muncht.toml",
            "tokenize",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/muncht.toml")));
    }

    #[test]
    fn test_cli_parse_config() {
        let cli = Cli::parse_from(["muncht", "config", "--output", "out.toml"]);
        if let Commands::Config(args) = cli.command {
            assert_eq!(args.output, Some(PathBuf::from("out.toml")));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_format_arg_conversion() {
        assert_eq!(OutputFormat::from(FormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(FormatArg::Text), OutputFormat::Text);
    }
}
