// crates/wa-bridge-cli/src/tests.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for catalog integrity and message translation.
// Purpose: Ensure CLI output strings stay consistent and substitution works.
// Dependencies: wa-bridge-cli i18n module
// ============================================================================

//! ## Overview
//! Verifies the CLI message catalog has no duplicate keys, placeholder
//! substitution behaves deterministically, and unknown keys fall back safely.

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

use std::collections::BTreeSet;

use crate::i18n::CATALOG_ITEMS;
use crate::i18n::MessageArg;
use crate::i18n::translate;
use crate::t;

// ============================================================================
// SECTION: Tests
// ============================================================================

#[test]
fn catalog_keys_are_unique() {
    let keys: BTreeSet<&'static str> = CATALOG_ITEMS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), CATALOG_ITEMS.len(), "catalog keys must be unique");
}

#[test]
fn catalog_templates_are_non_empty() {
    for (key, template) in CATALOG_ITEMS {
        assert!(!template.is_empty(), "empty template for key {key}");
    }
}

#[test]
fn translate_substitutes_placeholders() {
    let output = translate(
        "output.write_failed",
        vec![MessageArg::new("stream", "stdout"), MessageArg::new("error", "broken pipe")],
    );
    assert_eq!(output, "Failed to write to stdout: broken pipe");
}

#[test]
fn translate_preserves_missing_placeholders() {
    let output = translate("output.write_failed", vec![MessageArg::new("stream", "stdout")]);
    assert!(output.contains("{error}"), "unsubstituted placeholder should remain: {output}");
}

#[test]
fn translate_ignores_extra_arguments() {
    let output = translate("env.check.ok", vec![MessageArg::new("extra", "value")]);
    assert_eq!(output, "Env file valid.");
}

#[test]
fn translate_falls_back_to_key_for_unknown_key() {
    let output = translate("nonexistent.key.does.not.exist", vec![]);
    assert_eq!(output, "nonexistent.key.does.not.exist");
}

#[test]
fn t_macro_formats_named_arguments() {
    let output = t!("main.version", version = "1.2.3");
    assert_eq!(output, "wa-bridge 1.2.3");
}

#[test]
fn t_macro_handles_no_arguments() {
    let output = t!("env.docs.verify_ok");
    assert_eq!(output, "Env docs up to date.");
}
