//! descent CLI - Polish-notation calculator and identifier-chain recognizer.
//!
//! This is the main entry point for the descent binary. It uses clap for
//! argument parsing, installs logging on stderr, loads configuration, and
//! dispatches to the matching [`Session`] loop. Stdout carries only the
//! per-line reports.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use descent_drv::{write_default_config, Config, Grammar, Session};

/// descent - recursive-descent calculator and statement recognizer
#[derive(Parser, Debug)]
#[command(name = "descent")]
#[command(author = "Descent Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Recursive-descent calculator and statement recognizer", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "DESCENT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "DESCENT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "DESCENT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the descent CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate Polish-notation formulas, one per line
    ///
    /// Prints a banner, a prompt before each line, the value or error of
    /// each formula, and a farewell when input ends.
    Calc(CalcCommand),

    /// Recognize identifier-chain statements, one per line
    ///
    /// Prints the fields of each accepted statement, or `invalid input`.
    Chain(ChainCommand),

    /// Print the tokens of each line
    Tokens(TokensCommand),

    /// Write a default descent.toml
    InitConfig(InitConfigCommand),
}

/// Arguments for the calc subcommand.
#[derive(Parser, Debug)]
struct CalcCommand {
    /// Read formulas from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Maximum formula nesting depth (default: from config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_depth: Option<u64>,

    /// Do not print the prompt before each read
    #[arg(long)]
    no_prompt: bool,

    /// Echo each parsed formula before its value
    #[arg(long)]
    tree: bool,
}

/// Arguments for the chain subcommand.
#[derive(Parser, Debug)]
struct ChainCommand {
    /// Read statements from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Maximum chain nesting depth (default: from config)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_depth: Option<u64>,
}

/// Arguments for the tokens subcommand.
#[derive(Parser, Debug)]
struct TokensCommand {
    /// Which scanner to use
    #[arg(short, long, value_enum)]
    grammar: Grammar,

    /// Read lines from a file instead of standard input
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// Arguments for the init-config subcommand.
#[derive(Parser, Debug)]
struct InitConfigCommand {
    /// Directory to write descent.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

/// Main entry point for the descent CLI.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    init_logging(cli.verbose || config.verbose, cli.no_color)?;

    execute_command(cli.command, config)
}

/// Initialize the logging system on stderr.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config = match config_path {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::load()?,
    };
    Ok(config)
}

/// Open the input file, or lock standard input.
fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        },
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Apply a `--max-depth` override.
fn apply_max_depth(config: &mut Config, max_depth: Option<u64>) {
    if let Some(depth) = max_depth {
        config.parser.max_depth = usize::try_from(depth).unwrap_or(usize::MAX);
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Calc(args) => execute_calc(args, config),
        Commands::Chain(args) => execute_chain(args, config),
        Commands::Tokens(args) => execute_tokens(args, config),
        Commands::InitConfig(args) => execute_init_config(args),
    }
}

/// Execute the calc command.
fn execute_calc(args: CalcCommand, mut config: Config) -> Result<()> {
    apply_max_depth(&mut config, args.max_depth);
    if args.no_prompt {
        config.calculator.prompt.clear();
    }
    if args.tree {
        config.calculator.show_tree = true;
    }

    let input = open_input(args.input.as_deref())?;
    let session = Session::new(config);
    session
        .run_calculator(input, io::stdout().lock())
        .context("Calculator session failed")?;
    Ok(())
}

/// Execute the chain command.
fn execute_chain(args: ChainCommand, mut config: Config) -> Result<()> {
    apply_max_depth(&mut config, args.max_depth);

    let input = open_input(args.input.as_deref())?;
    let session = Session::new(config);
    session
        .run_recognizer(input, io::stdout().lock())
        .context("Recognizer session failed")?;
    Ok(())
}

/// Execute the tokens command.
fn execute_tokens(args: TokensCommand, config: Config) -> Result<()> {
    let input = open_input(args.input.as_deref())?;
    let session = Session::new(config);
    session
        .dump_tokens(args.grammar, input, io::stdout().lock())
        .context("Token dump failed")?;
    Ok(())
}

/// Execute the init-config command.
fn execute_init_config(args: InitConfigCommand) -> Result<()> {
    let dir = args.path.unwrap_or_else(|| PathBuf::from("."));
    let path = write_default_config(&dir, args.force)?;
    info!(path = %path.display(), "wrote default configuration");
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_calc() {
        let cli = Cli::parse_from(["descent", "calc"]);
        assert!(matches!(cli.command, Commands::Calc(_)));
    }

    #[test]
    fn test_cli_parse_calc_with_options() {
        let cli = Cli::parse_from([
            "descent",
            "calc",
            "--input",
            "formulas.txt",
            "--max-depth",
            "16",
            "--no-prompt",
            "--tree",
        ]);
        if let Commands::Calc(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("formulas.txt")));
            assert_eq!(args.max_depth, Some(16));
            assert!(args.no_prompt);
            assert!(args.tree);
        } else {
            panic!("Expected Calc command");
        }
    }

    #[test]
    fn test_cli_rejects_zero_depth() {
        let result = Cli::try_parse_from(["descent", "chain", "--max-depth", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_chain() {
        let cli = Cli::parse_from(["descent", "chain", "-i", "statements.txt"]);
        if let Commands::Chain(args) = cli.command {
            assert_eq!(args.input, Some(PathBuf::from("statements.txt")));
            assert_eq!(args.max_depth, None);
        } else {
            panic!("Expected Chain command");
        }
    }

    #[test]
    fn test_cli_parse_tokens_grammar() {
        let cli = Cli::parse_from(["descent", "tokens", "--grammar", "chain"]);
        if let Commands::Tokens(args) = cli.command {
            assert_eq!(args.grammar, Grammar::Chain);
        } else {
            panic!("Expected Tokens command");
        }
    }

    #[test]
    fn test_cli_tokens_requires_grammar() {
        assert!(Cli::try_parse_from(["descent", "tokens"]).is_err());
    }

    #[test]
    fn test_cli_parse_init_config_with_force() {
        let cli = Cli::parse_from(["descent", "init-config", "--path", "/tmp/d", "--force"]);
        if let Commands::InitConfig(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/d")));
            assert!(args.force);
        } else {
            panic!("Expected InitConfig command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "descent",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/descent.toml",
            "calc",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/descent.toml")));
    }

    #[test]
    fn test_max_depth_override() {
        let mut config = Config::default();
        apply_max_depth(&mut config, None);
        assert_eq!(config.parser.max_depth, 256);
        apply_max_depth(&mut config, Some(8));
        assert_eq!(config.parser.max_depth, 8);
    }
}
