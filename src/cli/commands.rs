//! CLI command implementations
//!
//! All command functions return `CliResult<T>` instead of calling `process::exit`.
//! Errors are propagated to the top-level `run()` function.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use miette::{GraphicalReportHandler, GraphicalTheme, NamedSource, Report};
use proclang_syntax::diagnostics::format_error;
use proclang_syntax::{ParseError, ParseNode, parse};
use thiserror::Error;

use super::{CliError, CliResult, DiagnosticStyle, ExitCode};
use crate::render::{self, RenderConfig};

/// Maximum source file size (16 MB) to prevent memory exhaustion.
const MAX_SOURCE_SIZE: u64 = 16 * 1024 * 1024;

/// Failure to obtain source text for a parse.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Unable to open file '{path}': {source}")]
    Access {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Source file '{path}' is too large ({size} bytes, max {max} bytes)")]
    TooLarge { path: String, size: u64, max: u64 },
    #[error("Error reading file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("No file name given")]
    NoFileName,
}

impl From<SourceError> for CliError {
    fn from(err: SourceError) -> Self {
        CliError::failure(format!("Error: {err}"))
    }
}

/// Read source file contents.
///
/// ## Errors
///
/// Returns an error if:
/// - The file cannot be opened or read (I/O error)
/// - The file exceeds `MAX_SOURCE_SIZE` (16 MB)
pub fn read_source(file_path: &Path) -> Result<String, SourceError> {
    let path = file_path.display().to_string();
    let metadata = fs::metadata(file_path).map_err(|source| SourceError::Access {
        path: path.clone(),
        source,
    })?;

    if metadata.len() > MAX_SOURCE_SIZE {
        return Err(SourceError::TooLarge {
            path,
            size: metadata.len(),
            max: MAX_SOURCE_SIZE,
        });
    }

    fs::read_to_string(file_path).map_err(|source| SourceError::Read { path, source })
}

/// Ask for a file name on stdin.
pub fn prompt_for_file() -> CliResult<PathBuf> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    read_file_name(&mut stdin.lock(), &mut stdout).map_err(CliError::from)
}

/// Write the prompt to `output` and read one line from `input`, trimmed.
pub fn read_file_name(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf, SourceError> {
    let io_err = |source: io::Error| SourceError::Read {
        path: "<stdin>".to_string(),
        source,
    };
    write!(output, "Enter filename: ").map_err(io_err)?;
    output.flush().map_err(io_err)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(io_err)?;
    let name = line.trim();
    if name.is_empty() {
        return Err(SourceError::NoFileName);
    }
    Ok(PathBuf::from(name))
}

/// Render a parse error for stderr.
///
/// The first line always reads `Error at position N: message`; a source excerpt follows in the
/// requested style.
pub fn report_error(file_name: &str, source: &str, error: &ParseError, style: DiagnosticStyle) -> String {
    let headline = format!("Error at position {}: {}", error.offset(), error.message);
    let excerpt = match style {
        DiagnosticStyle::Plain => format_error(file_name, source, error),
        DiagnosticStyle::Fancy => render_fancy(file_name, source, error),
    };
    format!("{headline}\n\n{}", excerpt.trim_end())
}

fn render_fancy(file_name: &str, source: &str, error: &ParseError) -> String {
    let report = Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    match handler.render_report(&mut out, &*report) {
        Ok(()) => out,
        // Formatting into a String only fails if a Display impl does; fall back to the plain form.
        Err(_) => format_error(file_name, source, error),
    }
}

/// Read and parse a file, turning a parse failure into a `CliError` carrying the report.
fn parse_path(file_path: &Path, style: DiagnosticStyle) -> CliResult<ParseNode> {
    let source = read_source(file_path)?;
    let file_name = file_path.display().to_string();
    tracing::debug!(file = %file_name, bytes = source.len(), "read source");

    parse(&source).map_err(|err| {
        tracing::info!(file = %file_name, offset = err.offset(), kind = %err.kind, "parse failed");
        CliError::failure(report_error(&file_name, &source, &err, style))
    })
}

/// Parse a file and print the tree.
pub fn parse_file(file_path: &Path, config: &RenderConfig, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let tree = parse_path(file_path, style)?;
    tracing::info!(nodes = tree.node_count(), depth = tree.depth(), "parse succeeded");

    let rendered =
        render::render(&tree, config).map_err(|e| CliError::failure(format!("Error rendering parse tree: {e}")))?;

    match config.format {
        render::OutputFormat::Tree => {
            println!("Parsing successful!");
            println!("Parse Tree:");
            print!("{rendered}");
        }
        render::OutputFormat::Json => println!("{rendered}"),
    }
    Ok(ExitCode::SUCCESS)
}

/// Parse a file without printing the tree.
pub fn check_file(file_path: &Path, style: DiagnosticStyle) -> CliResult<ExitCode> {
    parse_path(file_path, style)?;
    println!("✓ {}: parse check passed", file_path.display());
    Ok(ExitCode::SUCCESS)
}

/// Parse a file and print its terminals, one `label  [Category]` per line.
pub fn tokens_file(file_path: &Path, style: DiagnosticStyle) -> CliResult<ExitCode> {
    let tree = parse_path(file_path, style)?;
    print!("{}", render::render_tokens(&tree, &RenderConfig::default()));
    Ok(ExitCode::SUCCESS)
}
