// crates/wa-bridge-env/src/docs.rs
// ============================================================================
// Module: Env Docs Generator
// Description: Markdown generator for bridge .env documentation.
// Purpose: Keep env docs in sync with schema and validation.
// Dependencies: serde_json, std
// ============================================================================

//! ## Overview
//! Generates `Docs/configuration/wa-bridge.env.md` from the canonical env
//! schema. This output is deterministic and used by the website.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

use crate::schema::env_schema;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default output path for generated env docs.
pub const DOCS_PATH: &str = "Docs/configuration/wa-bridge.env.md";

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when generating or verifying env docs.
#[derive(Debug, Error)]
pub enum DocsError {
    /// IO failure while writing docs.
    #[error("docs io error: {0}")]
    Io(String),
    /// Schema traversal or rendering error.
    #[error("docs schema error: {0}")]
    Schema(String),
    /// Generated docs do not match the committed file.
    #[error("docs drift: {0}")]
    Drift(String),
}

// ============================================================================
// SECTION: Public API
// ============================================================================

/// Generates the env markdown documentation.
///
/// # Errors
///
/// Returns [`DocsError`] when schema traversal fails.
pub fn env_docs_markdown() -> Result<String, DocsError> {
    let schema = env_schema();
    let properties = schema
        .get("properties")
        .and_then(|value| value.as_object())
        .ok_or_else(|| DocsError::Schema("schema properties missing".to_string()))?;

    let mut out = String::new();

    out.push_str("<!--\n");
    out.push_str("Docs/configuration/wa-bridge.env.md\n");
    out.push_str("============================================================================\n");
    out.push_str("Document: WhatsApp Bridge Environment\n");
    out.push_str("Description: Reference for the bridge .env variables.\n");
    out.push_str("Purpose: Document server, Flask, CORS, and WhatsApp settings.\n");
    out.push_str("Generated: This file is auto-generated; do not edit manually.\n");
    out.push_str("============================================================================\n");
    out.push_str("-->\n\n");

    out.push_str("# wa-bridge .env Configuration\n\n");
    out.push_str("## Overview\n\n");
    out.push_str("`.env` configures the WhatsApp bridge server, its companion Flask service\n");
    out.push_str("addresses, the CORS allow-list, and WhatsApp session settings. All inputs\n");
    out.push_str("are validated and fail closed on errors.\n\n");

    out.push_str("## Variables\n\n");

    let sections = build_sections();
    let mut documented = BTreeSet::new();
    for section in &sections {
        for key in section.keys {
            documented.insert(*key);
        }
    }
    for key in properties.keys() {
        if !documented.contains(key.as_str()) {
            return Err(DocsError::Schema(format!("key not documented: {key}")));
        }
    }

    for section in sections {
        out.push_str("### ");
        out.push_str(section.heading);
        out.push_str("\n\n");
        if !section.description.is_empty() {
            out.push_str(section.description);
            out.push_str("\n\n");
        }
        let table = render_table(properties, &section).map_err(DocsError::Schema)?;
        out.push_str(&table);
        if let Some(extra) = section.extra {
            out.push('\n');
            out.push_str(extra);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("## File Format\n\n");
    out.push_str("- One `KEY=value` assignment per line.\n");
    out.push_str("- Lines starting with `#` are comments; blank lines are ignored.\n");
    out.push_str("- Values are taken literally: no quoting, escaping, or interpolation.\n");
    out.push_str("- Each key may appear at most once.\n");

    Ok(out)
}

/// Writes the generated docs to the standard location.
///
/// # Errors
///
/// Returns [`DocsError`] when file output fails.
pub fn write_env_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = env_docs_markdown()?;
    fs::write(path, content.as_bytes()).map_err(|err| DocsError::Io(err.to_string()))
}

/// Verifies the on-disk docs match the generated output.
///
/// # Errors
///
/// Returns [`DocsError`] when the docs drift.
pub fn verify_env_docs(path: Option<&Path>) -> Result<(), DocsError> {
    let path = path.unwrap_or_else(|| Path::new(DOCS_PATH));
    let content = env_docs_markdown()?;
    let existing = fs::read_to_string(path).map_err(|err| DocsError::Io(err.to_string()))?;
    if existing != content {
        return Err(DocsError::Drift(format!("docs mismatch: {}", path.display())));
    }
    Ok(())
}

// ============================================================================
// SECTION: Section Specs
// ============================================================================

/// Specification for one rendered documentation section.
#[derive(Clone)]
struct SectionSpec {
    /// Section heading matching the artifact comment groups.
    heading: &'static str,
    /// Section description displayed beneath the heading.
    description: &'static str,
    /// Ordered variable list rendered in the docs table.
    keys: &'static [&'static str],
    /// Optional additional text appended after the table.
    extra: Option<&'static str>,
}

/// Builds the ordered list of env sections to render.
fn build_sections() -> Vec<SectionSpec> {
    vec![
        SectionSpec {
            heading: "Server",
            description: "Bridge server runtime settings.",
            keys: &["NODE_ENV", "PORT"],
            extra: None,
        },
        SectionSpec {
            heading: "Flask App",
            description: "Companion web service addresses.",
            keys: &["FLASK_APP_URL", "FLASK_APP_URL_PRODUCTION"],
            extra: Some(
                "`NODE_ENV` selects the active base URL: `FLASK_APP_URL` in development, \
                 `FLASK_APP_URL_PRODUCTION` in production.",
            ),
        },
        SectionSpec {
            heading: "CORS",
            description: "Cross-origin allow-list for the bridge HTTP API.",
            keys: &["ALLOWED_ORIGINS"],
            extra: Some(
                "Origins are compared by scheme, host, and port. Entries must not carry a \
                 path, query, fragment, or credentials.",
            ),
        },
        SectionSpec {
            heading: "WhatsApp",
            description: "WhatsApp client session settings.",
            keys: &["WHATSAPP_SESSION_DIR", "WHATSAPP_LOG_LEVEL"],
            extra: None,
        },
    ]
}

// ============================================================================
// SECTION: Rendering Helpers
// ============================================================================

/// Renders the markdown table for an env section.
fn render_table(properties: &Map<String, Value>, section: &SectionSpec) -> Result<String, String> {
    let mut table = String::new();
    table.push_str("| Key | Type | Default | Notes |\n");
    table.push_str("| --- | --- | --- | --- |\n");

    for key in section.keys {
        let prop_schema =
            properties.get(*key).ok_or_else(|| format!("missing key in schema: {key}"))?;
        let key_type = format_schema_type(prop_schema);
        let default_value =
            prop_schema.get("default").map_or_else(|| "n/a".to_string(), format_default_value);
        let notes =
            prop_schema.get("description").and_then(|value| value.as_str()).unwrap_or("");
        let _ = writeln!(&mut table, "| `{key}` | {key_type} | {default_value} | {notes} |");
    }

    Ok(table)
}

/// Formats a schema type for markdown tables.
fn format_schema_type(schema: &Value) -> String {
    let raw = format_schema_type_raw(schema);
    escape_table_cell(&raw)
}

/// Formats a schema type without markdown escaping.
fn format_schema_type_raw(schema: &Value) -> String {
    if let Some(enum_vals) = schema.get("enum").and_then(|val| val.as_array()) {
        let items = enum_vals.iter().map(format_enum_value).collect::<Vec<String>>();
        return items.join(" | ");
    }
    if let Some(type_str) = schema.get("type").and_then(|val| val.as_str()) {
        return match type_str {
            "boolean" => "bool".to_string(),
            other => other.to_string(),
        };
    }
    "unknown".to_string()
}

/// Escapes pipe characters for markdown table cells.
fn escape_table_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

/// Formats enum values as env-compatible strings.
fn format_enum_value(value: &Value) -> String {
    value.as_str().map_or_else(|| value.to_string(), |text| format!("\"{text}\""))
}

/// Formats schema defaults for display in docs.
fn format_default_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(val) => val.to_string(),
        Value::Number(val) => val.to_string(),
        Value::String(val) => val.clone(),
        Value::Array(arr) => {
            if arr.is_empty() {
                "[]".to_string()
            } else {
                let items = arr.iter().map(format_enum_value).collect::<Vec<String>>();
                format!("[{}]", items.join(", "))
            }
        }
        Value::Object(_) => "{...}".to_string(),
    }
}
