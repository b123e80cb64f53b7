//! CLI argument parsing using clap

use crate::emitter::DEFAULT_RULES_DIR;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for cursor-rules commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON Lines format (one JSON object per line)
    Jsonl,
}

/// cursor-rules CLI main entry point
#[derive(Parser, Debug)]
#[command(name = "cursor-rules")]
#[command(about = "Write the built-in Cursor rule files into a rules directory")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute (defaults to `write`)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Rules directory to write into
    #[arg(long, global = true, default_value = DEFAULT_RULES_DIR)]
    pub dir: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// The subcommand to run, falling back to a human-format `write`
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Write {
            format: OutputFormat::Human,
        })
    }
}

/// Available cursor-rules subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Write every built-in rule file, overwriting existing ones
    Write {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },

    /// List the built-in rules without writing anything
    List {
        /// Output format
        #[arg(short, long, default_value = "human")]
        format: OutputFormat,
    },
}
