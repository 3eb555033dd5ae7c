//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for hashi using the `clap` crate.
//!
//! # Commands
//!
//! - **pick**: Choose one line from a file or stdin (default)
//! - **config**: Show or create the configuration file
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use hashi::cli::{Cli, Commands};
//!
//! let cli = Cli::try_parse_from(["hashi", "--file", "list.txt", "--print", "line"]).unwrap();
//! match cli.get_command() {
//!     Commands::Pick { args } => assert!(args.file.is_some()),
//!     Commands::Config { .. } => unreachable!(),
//! }
//! ```

use crate::config::{HashiConfig, OutputMode};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Interactive fuzzy finder
#[derive(Parser, Debug)]
#[command(name = "hashi", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub pick: PickArgs,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Append logs to this file instead of stderr
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Options for choosing a line
#[derive(clap::Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct PickArgs {
    /// Read candidates from this file instead of stdin
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Prompt shown before the query
    #[arg(short = 'p', long = "prompt", value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Print the selected index or the selected line
    #[arg(long = "print", value_enum, value_name = "MODE")]
    pub print: Option<OutputMode>,

    /// Select the only candidate without opening the finder
    #[arg(short = '1', long = "select-one")]
    pub select_one: bool,
}

impl PickArgs {
    /// Apply command-line overrides on top of `config`
    #[must_use]
    pub fn apply(&self, mut config: HashiConfig) -> HashiConfig {
        if let Some(prompt) = &self.prompt {
            config.prompt.clone_from(prompt);
        }
        if let Some(print) = self.print {
            config.output = print;
        }
        config.select_one |= self.select_one;
        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Choose one line from a file or stdin (default)
    #[command(visible_alias = "p")]
    Pick {
        #[command(flatten)]
        args: PickArgs,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Pick with the top-level options
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or_else(|| Commands::Pick {
            args: self.pick.clone(),
        })
    }
}
