// Copyright 2026 Layne Penney
// SPDX-License-Identifier: AGPL-3.0-or-later

//! toolbadge main entry point - reads tool invocation records and prints
//! their status labels.

use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use tracing::{debug, Level};

use toolbadge::config::{self, CliOptions};
use toolbadge::telemetry::{init_telemetry, TelemetryConfig};
use toolbadge::{InvocationError, StatusFormatter, StatusLine, ToolInvocation};

/// toolbadge version string.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Icon shown next to a completed label.
const DONE_ICON: &str = "✓";

/// Icon shown next to an in-progress label.
const BUSY_ICON: &str = "…";

/// toolbadge - status labels for AI agent tool calls.
#[derive(Parser)]
#[command(name = "toolbadge")]
#[command(author, version, about = "Status labels for AI agent tool calls", long_about = None)]
struct Cli {
    /// Tool identifier treated as the string-replace editor
    #[arg(long, env = "TOOLBADGE_EDITOR_TOOL", global = true)]
    editor_tool: Option<String>,

    /// Tool identifier treated as the file manager
    #[arg(long, env = "TOOLBADGE_FILE_MANAGER_TOOL", global = true)]
    file_manager_tool: Option<String>,

    /// Display budget for file names, in characters
    #[arg(long = "max-len", env = "TOOLBADGE_MAX_LEN", global = true)]
    max_len: Option<usize>,

    /// Show informational log output
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Show debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Output format for labels.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Subcommands for toolbadge.
#[derive(Subcommand)]
enum Commands {
    /// Print a status label for each invocation record
    ///
    /// Input may be a single JSON object, a JSON array of objects, or one
    /// object per line.
    Format {
        /// File to read records from (stdin when omitted)
        file: Option<PathBuf>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: OutputFormat,

        /// Print bare labels without icons or colors
        #[arg(long)]
        plain: bool,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },

    /// Initialize a new configuration file
    Init,

    /// Show version information
    Version,
}

/// Config subcommand actions.
#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };
    let plain = matches!(cli.command, Commands::Format { plain: true, .. });
    let ansi = !plain && io::stderr().is_terminal();
    let _guard = init_telemetry(
        &TelemetryConfig::default()
            .with_level(level)
            .with_ansi(ansi),
    )?;

    let cli_options = CliOptions {
        editor_tool: cli.editor_tool,
        file_manager_tool: cli.file_manager_tool,
        max_file_name_length: cli.max_len,
    };

    match cli.command {
        Commands::Format {
            file,
            output_format,
            plain,
        } => handle_format(cli_options, file, output_format, plain),
        Commands::Config { action } => {
            let workspace_root = config::resolve_workspace_root(&std::env::current_dir()?);
            match action {
                Some(ConfigAction::Show) | None => {
                    let config = config::load_config(&workspace_root, cli_options)?;
                    println!("{}", serde_json::to_string_pretty(&config)?);
                }
            }
            Ok(())
        }
        Commands::Init => {
            let workspace_root = std::env::current_dir()?;
            let path = config::init_config(&workspace_root, None)?;
            println!("Created config file: {}", path.display());
            Ok(())
        }
        Commands::Version => {
            println!("toolbadge {}", VERSION);
            Ok(())
        }
    }
}

fn handle_format(
    cli_options: CliOptions,
    file: Option<PathBuf>,
    format: OutputFormat,
    plain: bool,
) -> anyhow::Result<()> {
    let workspace_root = config::resolve_workspace_root(&std::env::current_dir()?);
    let resolved = config::load_config(&workspace_root, cli_options)?;
    let formatter = StatusFormatter::new(resolved.formatter_config());

    let input = read_input(file.as_deref())?;
    let records = split_records(&input);
    debug!(count = records.len(), "read invocation records");

    let total = records.len();
    let failed = format_records(
        &formatter,
        records,
        format,
        plain,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if failed > 0 {
        anyhow::bail!("{} of {} records could not be decoded", failed, total);
    }
    Ok(())
}

fn read_input(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write one output line per decodable record and report the rest on `err`.
///
/// Returns how many records could not be decoded.
fn format_records(
    formatter: &StatusFormatter,
    records: Vec<Result<Value, InvocationError>>,
    format: OutputFormat,
    plain: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut failed = 0usize;
    for (index, record) in records.into_iter().enumerate() {
        match record.and_then(ToolInvocation::from_value) {
            Ok(invocation) => {
                let line = formatter.describe(&invocation);
                write_line(out, &invocation, &line, format, plain)?;
            }
            Err(e) => {
                failed += 1;
                let message = format!("record {}: {}", index + 1, e);
                if plain {
                    writeln!(err, "{}", message)?;
                } else {
                    writeln!(err, "{}", message.red())?;
                }
            }
        }
    }
    Ok(failed)
}

fn write_line(
    out: &mut impl Write,
    invocation: &ToolInvocation,
    line: &StatusLine,
    format: OutputFormat,
    plain: bool,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let value = serde_json::json!({
                "toolCallId": invocation.tool_call_id,
                "label": line.label,
                "completed": line.completed,
            });
            writeln!(out, "{}", serde_json::to_string(&value)?)?;
        }
        OutputFormat::Text if plain => writeln!(out, "{}", line.label)?,
        OutputFormat::Text => {
            let icon = if line.completed {
                DONE_ICON.green()
            } else {
                BUSY_ICON.yellow()
            };
            writeln!(out, "{} {}", icon, line.label)?;
        }
    }
    Ok(())
}

/// Split raw input into individual records.
///
/// A document that parses as a whole is either an array of records or a
/// single record. Anything else is read as JSON Lines, one record per
/// non-blank line.
fn split_records(input: &str) -> Vec<Result<Value, InvocationError>> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    match serde_json::from_str::<Value>(input) {
        Ok(Value::Array(items)) => items.into_iter().map(Ok).collect(),
        Ok(value) => vec![Ok(value)],
        Err(_) => input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str::<Value>(line).map_err(InvocationError::from))
            .collect(),
    }
}
