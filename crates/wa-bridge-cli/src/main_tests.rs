// crates/wa-bridge-cli/src/main_tests.rs
// ============================================================================
// Module: CLI Main Helpers Tests
// Description: Unit tests for argument parsing and snapshot rendering.
// Purpose: Ensure the CLI grammar and env line rendering stay stable.
// Dependencies: wa-bridge-cli main helpers
// ============================================================================

//! ## Overview
//! Validates the clap command grammar and the `KEY=value` rendering used by
//! `env show`.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use clap::Parser;
use serde_json::json;
use wa_bridge_env::BridgeConfig;

use super::Cli;
use super::Commands;
use super::EnvCommand;
use super::render_env_lines;
use super::render_env_value;

// ============================================================================
// SECTION: Parsing Tests
// ============================================================================

#[test]
fn parse_version_flag_sets_show_version() {
    let cli = Cli::try_parse_from(["wa-bridge", "--version"]).expect("parse version");
    assert!(cli.show_version);
    assert!(cli.command.is_none());
}

#[test]
fn parse_env_check_accepts_file_flag() {
    let cli = Cli::try_parse_from(["wa-bridge", "env", "check", "--file", "custom.env"])
        .expect("parse check");
    assert!(!cli.show_version);
    match cli.command {
        Some(Commands::Env {
            command: EnvCommand::Check(command),
        }) => {
            assert_eq!(command.file.as_deref(), Some(Path::new("custom.env")));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_env_check_defaults_to_no_file() {
    let cli = Cli::try_parse_from(["wa-bridge", "env", "check"]).expect("parse check");
    match cli.command {
        Some(Commands::Env {
            command: EnvCommand::Check(command),
        }) => {
            assert!(command.file.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_env_show_accepts_json_and_process_env() {
    let cli = Cli::try_parse_from(["wa-bridge", "env", "show", "--json", "--process-env"])
        .expect("parse show");
    match cli.command {
        Some(Commands::Env {
            command: EnvCommand::Show(command),
        }) => {
            assert!(command.json);
            assert!(command.process_env);
            assert!(command.file.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_env_template_accepts_out_and_force() {
    let cli =
        Cli::try_parse_from(["wa-bridge", "env", "template", "--out", "demo.env", "--force"])
            .expect("parse template");
    match cli.command {
        Some(Commands::Env {
            command: EnvCommand::Template(command),
        }) => {
            assert_eq!(command.out.as_deref(), Some(Path::new("demo.env")));
            assert!(command.force);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_env_docs_accepts_out_and_verify() {
    let cli = Cli::try_parse_from(["wa-bridge", "env", "docs", "--out", "env.md", "--verify"])
        .expect("parse docs");
    match cli.command {
        Some(Commands::Env {
            command: EnvCommand::Docs(command),
        }) => {
            assert_eq!(command.out.as_deref(), Some(Path::new("env.md")));
            assert!(command.verify);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn parse_env_schema_takes_no_arguments() {
    let cli = Cli::try_parse_from(["wa-bridge", "env", "schema"]).expect("parse schema");
    assert!(matches!(
        cli.command,
        Some(Commands::Env {
            command: EnvCommand::Schema,
        })
    ));
}

#[test]
fn parse_rejects_unknown_subcommand() {
    let result = Cli::try_parse_from(["wa-bridge", "bogus"]);
    assert!(result.is_err());
}

// ============================================================================
// SECTION: Rendering Tests
// ============================================================================

#[test]
fn render_env_lines_covers_all_keys_in_order() {
    let lines = render_env_lines(&BridgeConfig::default());
    assert_eq!(lines.len(), 7);
    assert_eq!(lines[0], "NODE_ENV=development");
    assert_eq!(lines[1], "PORT=3000");
    assert_eq!(lines[2], "FLASK_APP_URL=http://localhost:5000");
    assert_eq!(lines[3], "FLASK_APP_URL_PRODUCTION=https://www.suaagenda.fun");
    assert_eq!(lines[4], "ALLOWED_ORIGINS=http://localhost:5000,https://www.suaagenda.fun");
    assert_eq!(lines[5], "WHATSAPP_SESSION_DIR=./auth_info");
    assert_eq!(lines[6], "WHATSAPP_LOG_LEVEL=info");
}

#[test]
fn render_env_value_joins_arrays_with_commas() {
    let value = json!(["http://a.example", "https://b.example"]);
    assert_eq!(render_env_value(&value), "http://a.example,https://b.example");
}

#[test]
fn render_env_value_formats_scalars() {
    assert_eq!(render_env_value(&json!("plain")), "plain");
    assert_eq!(render_env_value(&json!(3000)), "3000");
}
