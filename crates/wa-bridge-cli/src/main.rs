// crates/wa-bridge-cli/src/main.rs
// ============================================================================
// Module: WhatsApp Bridge CLI Entry Point
// Description: Command dispatcher for bridge environment workflows.
// Purpose: Provide a safe, localized CLI for env validation and artifacts.
// Dependencies: clap, serde_json, thiserror, wa-bridge-env.
// ============================================================================

//! ## Overview
//! The wa-bridge CLI validates bridge env files and generates the env
//! artifacts (template, schema, docs). All user-facing strings are routed
//! through the i18n catalog to prepare for future localization.
//!
//! Security posture: env files and process variables are untrusted inputs and
//! are validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

#[cfg(test)]
mod main_tests;

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use serde_json::Value;
use thiserror::Error;
use wa_bridge_cli::t;
use wa_bridge_env::BridgeConfig;
use wa_bridge_env::DEFAULT_ENV_FILE_NAME;
use wa_bridge_env::EnvKey;
use wa_bridge_env::docs::DOCS_PATH;
use wa_bridge_env::env_schema;
use wa_bridge_env::env_template;
use wa_bridge_env::verify_env_docs;
use wa_bridge_env::write_env_docs;

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "wa-bridge", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Environment file utilities.
    Env {
        /// Selected env subcommand.
        #[command(subcommand)]
        command: EnvCommand,
    },
}

/// Env subcommands.
#[derive(Subcommand, Debug)]
enum EnvCommand {
    /// Validate an env file and report the result.
    Check(EnvCheckCommand),
    /// Print the resolved bridge configuration.
    Show(EnvShowCommand),
    /// Write the canonical env template.
    Template(EnvTemplateCommand),
    /// Generate or verify the env reference docs.
    Docs(EnvDocsCommand),
    /// Print the env JSON Schema.
    Schema,
}

/// Arguments for env validation.
#[derive(Args, Debug)]
struct EnvCheckCommand {
    /// Optional env file path (defaults to .env or the env file override variable).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

/// Arguments for the resolved configuration printout.
#[derive(Args, Debug)]
struct EnvShowCommand {
    /// Optional env file path (defaults to .env or the env file override variable).
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
    /// Emit the snapshot as pretty-printed JSON.
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,
    /// Resolve variables from the process environment instead of a file.
    #[arg(long, action = ArgAction::SetTrue)]
    process_env: bool,
}

/// Arguments for template generation.
#[derive(Args, Debug)]
struct EnvTemplateCommand {
    /// Output path for the template (defaults to .env).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Overwrite an existing file at the output path.
    #[arg(long, action = ArgAction::SetTrue)]
    force: bool,
}

/// Arguments for docs generation and verification.
#[derive(Args, Debug)]
struct EnvDocsCommand {
    /// Output path for the generated docs (defaults to the standard docs location).
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Verify the docs on disk instead of writing them.
    #[arg(long, action = ArgAction::SetTrue)]
    verify: bool,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Env {
            command,
        } => command_env(command),
    }
}

/// Emits the top-level help message for the CLI.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Env Commands
// ============================================================================

/// Dispatches env subcommands.
fn command_env(command: EnvCommand) -> CliResult<ExitCode> {
    match command {
        EnvCommand::Check(command) => command_env_check(&command),
        EnvCommand::Show(command) => command_env_show(&command),
        EnvCommand::Template(command) => command_env_template(&command),
        EnvCommand::Docs(command) => command_env_docs(&command),
        EnvCommand::Schema => command_env_schema(),
    }
}

/// Executes the env validation command.
fn command_env_check(command: &EnvCheckCommand) -> CliResult<ExitCode> {
    let _config = BridgeConfig::load(command.file.as_deref())
        .map_err(|err| CliError::new(t!("env.check.load_failed", error = err)))?;
    write_stdout_line(&t!("env.check.ok"))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the resolved configuration printout.
fn command_env_show(command: &EnvShowCommand) -> CliResult<ExitCode> {
    let config = if command.process_env {
        BridgeConfig::from_process_env()
            .map_err(|err| CliError::new(t!("env.show.process_failed", error = err)))?
    } else {
        BridgeConfig::load(command.file.as_deref())
            .map_err(|err| CliError::new(t!("env.show.load_failed", error = err)))?
    };

    if command.json {
        let snapshot = serde_json::to_string_pretty(&config)
            .map_err(|err| CliError::new(t!("env.show.serialize_failed", error = err)))?;
        write_stdout_line(&snapshot)
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    for line in render_env_lines(&config) {
        write_stdout_line(&line).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Executes the template generation command.
fn command_env_template(command: &EnvTemplateCommand) -> CliResult<ExitCode> {
    let target = command.out.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE_NAME));
    if target.exists() && !command.force {
        return Err(CliError::new(t!("env.template.exists", path = target.display())));
    }
    fs::write(&target, env_template()).map_err(|err| {
        CliError::new(t!("env.template.write_failed", path = target.display(), error = err))
    })?;
    write_stdout_line(&t!("env.template.ok", path = target.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the docs generation and verification command.
fn command_env_docs(command: &EnvDocsCommand) -> CliResult<ExitCode> {
    if command.verify {
        verify_env_docs(command.out.as_deref())
            .map_err(|err| CliError::new(t!("env.docs.verify_failed", error = err)))?;
        write_stdout_line(&t!("env.docs.verify_ok"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let target = command.out.clone().unwrap_or_else(|| PathBuf::from(DOCS_PATH));
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(|err| {
            CliError::new(t!("env.docs.dir_failed", path = parent.display(), error = err))
        })?;
    }
    write_env_docs(Some(&target)).map_err(|err| {
        CliError::new(t!("env.docs.write_failed", path = target.display(), error = err))
    })?;
    write_stdout_line(&t!("env.docs.ok", path = target.display()))
        .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

/// Executes the schema printout command.
fn command_env_schema() -> CliResult<ExitCode> {
    let schema = serde_json::to_string_pretty(&env_schema())
        .map_err(|err| CliError::new(t!("env.schema.serialize_failed", error = err)))?;
    write_stdout_line(&schema).map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders the resolved configuration as canonical `KEY=value` lines.
fn render_env_lines(config: &BridgeConfig) -> Vec<String> {
    let snapshot = config.to_env_json();
    EnvKey::ALL
        .into_iter()
        .map(|key| {
            let value = snapshot.get(key.as_str()).map_or_else(String::new, render_env_value);
            format!("{}={value}", key.as_str())
        })
        .collect()
}

/// Renders a single snapshot value in env-file form.
fn render_env_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
            .join(","),
        other => other.to_string(),
    }
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    let stream_label = match stream {
        "stdout" => t!("output.stream.stdout"),
        "stderr" => t!("output.stream.stderr"),
        _ => t!("output.stream.unknown"),
    };
    t!("output.write_failed", stream = stream_label, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
