// crates/wa-bridge-env/src/schema.rs
// ============================================================================
// Module: Env Schemas
// Description: JSON schema builder for the bridge .env contract.
// Purpose: Provide canonical validation schema for env artifacts.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the bridge deployment environment.
//! The schema describes the normalized JSON view of the env file (the shape
//! returned by [`crate::BridgeConfig::to_env_json`]) and is used by tooling,
//! docs generation, and validation pipelines.

use serde_json::Value;
use serde_json::json;

use crate::config::MAX_ALLOWED_ORIGINS;
use crate::config::MAX_TOTAL_PATH_LENGTH;
use crate::config::MAX_URL_LENGTH;
use crate::config::RuntimeEnv;
use crate::config::SessionLogLevel;
use crate::config::default_allowed_origins;
use crate::config::default_flask_app_url;
use crate::config::default_flask_app_url_production;
use crate::config::default_port;
use crate::config::default_session_dir;

/// Returns the JSON schema for the bridge env contract.
#[must_use]
pub fn env_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": "wa-bridge://contract/schemas/env.schema.json",
        "title": "WhatsApp Bridge Environment",
        "description": "Deployment environment for the WhatsApp bridge and its companion Flask service.",
        "type": "object",
        "properties": {
            "NODE_ENV": node_env_schema(),
            "PORT": port_schema(),
            "FLASK_APP_URL": flask_app_url_schema(),
            "FLASK_APP_URL_PRODUCTION": flask_app_url_production_schema(),
            "ALLOWED_ORIGINS": allowed_origins_schema(),
            "WHATSAPP_SESSION_DIR": whatsapp_session_dir_schema(),
            "WHATSAPP_LOG_LEVEL": whatsapp_log_level_schema()
        },
        "required": [
            "NODE_ENV",
            "PORT",
            "FLASK_APP_URL",
            "FLASK_APP_URL_PRODUCTION",
            "ALLOWED_ORIGINS",
            "WHATSAPP_SESSION_DIR",
            "WHATSAPP_LOG_LEVEL"
        ],
        "additionalProperties": false
    })
}

// ============================================================================
// SECTION: Variable Schemas
// ============================================================================

/// Schema for the deployment mode flag.
fn node_env_schema() -> Value {
    json!({
        "type": "string",
        "enum": [RuntimeEnv::Development.as_str(), RuntimeEnv::Production.as_str()],
        "default": RuntimeEnv::default().as_str(),
        "description": "Deployment mode selecting the active Flask base URL."
    })
}

/// Schema for the bridge listener port.
fn port_schema() -> Value {
    json!({
        "type": "integer",
        "minimum": 1,
        "maximum": u16::MAX,
        "default": default_port(),
        "description": "TCP port for the bridge HTTP listener."
    })
}

/// Schema for the development Flask base URL.
fn flask_app_url_schema() -> Value {
    let mut schema = schema_for_http_url("Base address of the companion web service in development.");
    schema["default"] = json!(default_flask_app_url());
    schema
}

/// Schema for the production Flask base URL.
fn flask_app_url_production_schema() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": MAX_URL_LENGTH,
        "pattern": "^https://",
        "default": default_flask_app_url_production(),
        "description": "Base address of the companion web service in production (https only)."
    })
}

/// Schema for the CORS allow-list.
fn allowed_origins_schema() -> Value {
    json!({
        "type": "array",
        "items": schema_for_http_url("Origin permitted to call the bridge (scheme, host, port)."),
        "minItems": 1,
        "maxItems": MAX_ALLOWED_ORIGINS,
        "uniqueItems": true,
        "default": default_allowed_origins(),
        "description": "Origins permitted to call the bridge."
    })
}

/// Schema for the WhatsApp session directory.
fn whatsapp_session_dir_schema() -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": MAX_TOTAL_PATH_LENGTH,
        "default": default_session_dir().to_string_lossy(),
        "description": "Directory for persisted WhatsApp session/auth state."
    })
}

/// Schema for the WhatsApp client log level.
fn whatsapp_log_level_schema() -> Value {
    let levels: Vec<&str> = [
        SessionLogLevel::Info,
        SessionLogLevel::Debug,
        SessionLogLevel::Warn,
        SessionLogLevel::Error,
    ]
    .iter()
    .map(|level| level.as_str())
    .collect();
    json!({
        "type": "string",
        "enum": levels,
        "default": SessionLogLevel::default().as_str(),
        "description": "Logging verbosity for the WhatsApp client."
    })
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Schema for an http or https URL string.
fn schema_for_http_url(description: &str) -> Value {
    json!({
        "type": "string",
        "minLength": 1,
        "maxLength": MAX_URL_LENGTH,
        "pattern": "^https?://",
        "description": description
    })
}
