//! Hashi CLI application entry point
//!
//! Reads candidate lines, lets the user pick one interactively and prints
//! the result on stdout, so it composes with other tools.
//!
//! # Usage
//!
//! ```bash
//! # Pick a line from stdin, print its index
//! ls | hashi
//!
//! # Pick from a file and print the line itself
//! hashi --file providers.txt --print line
//!
//! # Don't open the finder when there is only one choice
//! hashi -1 --file providers.txt
//!
//! # Show or create the configuration file
//! hashi config path
//! hashi config init
//! ```
//!
//! # Exit Codes
//!
//! - `0`: a candidate was selected
//! - `1`: an error occurred (no candidates, terminal unavailable, ...)
//! - `130`: the user aborted
//!
//! # Configuration
//!
//! Settings are read from `~/.config/hashi/config.toml` on Linux, overridden
//! by `HASHI_*` environment variables and then by command-line flags. Log
//! verbosity is controlled by `HASHI_LOG` (default `warn`).

use hashi::{
    HashiError,
    cli::{Cli, Commands, ConfigCommands, PickArgs},
    config::HashiConfig,
    picker,
    ui::{OutputWriter, RatatuiFinder, StdoutWriter},
};
use std::fs::{File, OpenOptions};
use std::io::{self, BufReader, IsTerminal};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, HashiError>;

/// Exit code reported when the user aborts
const ABORTED: u8 = 130;

/// Install the tracing subscriber
///
/// # Errors
///
/// Returns `HashiError` if the log file cannot be opened.
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_env("HASHI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(io::stderr).init(),
    }
    Ok(())
}

/// Handle `hashi config`
///
/// # Errors
///
/// Returns `HashiError` if the config path cannot be determined or the
/// file cannot be written.
fn handle_config_command(
    command: ConfigCommands,
    path_override: Option<&Path>,
    output: &impl OutputWriter,
) -> Result<()> {
    let path = match path_override {
        Some(path) => path.to_path_buf(),
        None => HashiConfig::config_path()?,
    };

    match command {
        ConfigCommands::Path => println!("{}", path.display()),
        ConfigCommands::Init => {
            if path.exists() {
                output.warning(&format!("Config file already exists: {}", path.display()));
            } else {
                HashiConfig::default().save_to(&path)?;
                output.info(&format!("Created {}", path.display()));
            }
        }
    }
    Ok(())
}

/// Handle `hashi pick`
///
/// # Errors
///
/// Returns `HashiError` if the candidates cannot be read, there are none,
/// or the finder fails.
fn handle_pick_command(
    args: &PickArgs,
    config: HashiConfig,
    output: &impl OutputWriter,
) -> Result<ExitCode> {
    let config = args.apply(config);

    let items = match &args.file {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                HashiError::InvalidInput(format!("Cannot read {}: {e}", path.display()))
            })?;
            picker::read_items(BufReader::new(file))?
        }
        None => {
            if io::stdin().is_terminal() {
                output.info("Reading candidates from stdin (Ctrl-D to finish)");
            }
            picker::read_items(io::stdin().lock())?
        }
    };

    if items.is_empty() {
        return Err(HashiError::InvalidInput(
            "No candidates given on input".to_string(),
        ));
    }

    let finder = RatatuiFinder::new();
    let finder_config = config.to_finder_config(items.clone());
    let outcome = picker::pick(&finder, finder_config, config.select_one)?;

    match picker::render_selection(&items, outcome, config.output)? {
        Some(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            output.info("Aborted");
            Ok(ExitCode::from(ABORTED))
        }
    }
}

fn run(cli: &Cli, output: &StdoutWriter) -> Result<ExitCode> {
    init_logging(cli.log_file.as_deref())?;

    match cli.get_command() {
        Commands::Config { command } => {
            handle_config_command(command, cli.config.as_deref(), output)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Pick { args } => {
            let config = match &cli.config {
                Some(path) => HashiConfig::load_from(path)?,
                None => HashiConfig::load()?,
            };
            handle_pick_command(&args, config, output)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    let output = StdoutWriter::quiet(cli.quiet);

    match run(&cli, &output) {
        Ok(code) => code,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
