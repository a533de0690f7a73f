//! CLI module for the proclang recognizer
//!
//! ## Commands
//!
//! - `<file>` - Parse a file and print its parse tree (default action)
//! - `parse <file>` - Same, with rendering options (`--format`, `--indent`, `--no-categories`)
//! - `check <file>` - Parse only and report success or the first error
//! - `tokens <file>` - Print the terminal sequence of the parse tree
//!
//! With no file and no subcommand, the CLI asks for a file name on stdin.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use crate::render::{OutputFormat, RenderConfig};
use crate::version::PROCLANG_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// How parse errors are rendered on stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DiagnosticStyle {
    /// Plain text with a caret under the offending input
    #[default]
    Plain,
    /// miette's graphical report
    Fancy,
}

/// Recognizer for the `procedure` toy language
#[derive(Parser, Debug)]
#[command(name = "proclang")]
#[command(version = PROCLANG_VERSION)]
#[command(about = "Recognize `procedure` programs and print their parse tree", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// File to parse (default action when no subcommand given)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Error report style
    #[arg(long, value_enum, global = true, default_value_t = DiagnosticStyle::Plain)]
    pub diagnostics: DiagnosticStyle,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse a file and print its parse tree
    Parse {
        /// Source file to parse
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Tree)]
        format: OutputFormat,
        /// Spaces per tree level
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Omit `[Category]` tags
        #[arg(long)]
        no_categories: bool,
    },

    /// Parse a file and report only success or the first error
    Check {
        /// Source file to check
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the terminal tokens of the parse tree, one per line
    Tokens {
        /// Source file to scan
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    let style = cli.diagnostics;
    match cli.command {
        Some(Command::Parse {
            file,
            format,
            indent,
            no_categories,
        }) => {
            let config = RenderConfig::new()
                .with_format(format)
                .with_indent_width(indent)
                .with_categories(!no_categories);
            commands::parse_file(&file, &config, style)
        }
        Some(Command::Check { file }) => commands::check_file(&file, style),
        Some(Command::Tokens { file }) => commands::tokens_file(&file, style),
        None => {
            let file = match cli.file {
                Some(file) => file,
                None => commands::prompt_for_file()?,
            };
            commands::parse_file(&file, &RenderConfig::default(), style)
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
