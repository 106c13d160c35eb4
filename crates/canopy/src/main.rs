//! Canopy CLI - cross-language AST extraction from the command line.
//!
//! Canopy parses source files with tree-sitter grammars and emits a uniform,
//! semantically typed node stream as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

mod cli;

/// Canopy: normalized AST extraction across languages.
#[derive(Parser)]
#[command(name = "canopy")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse files and print their node streams as JSON
    Parse {
        /// Files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Parse every file as this language instead of sniffing extensions
        #[arg(short, long)]
        language: Option<String>,

        /// Worker threads (0 = all available cores)
        #[arg(short, long, default_value = "0")]
        threads: usize,

        /// Record per-file failures and keep going instead of aborting
        #[arg(long)]
        ignore_errors: bool,

        /// Context level: none, node-types, normalized, native
        #[arg(long, default_value = "normalized")]
        context: String,

        /// Peek level: none, smart, full
        #[arg(long, default_value = "smart")]
        peek: String,

        /// Print a per-file summary instead of full JSON
        #[arg(long)]
        summary: bool,
    },

    /// List supported languages and their aliases
    Languages,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Parse {
            files,
            language,
            threads,
            ignore_errors,
            context,
            peek,
            summary,
        } => cli::parse::run(
            &files,
            language.as_deref(),
            threads,
            ignore_errors,
            &context,
            &peek,
            summary,
        ),
        Commands::Languages => cli::languages::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e}", "error".red().bold());
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  {}: {cause}", "caused by".dimmed());
                source = std::error::Error::source(cause);
            }
            ExitCode::FAILURE
        }
    }
}
