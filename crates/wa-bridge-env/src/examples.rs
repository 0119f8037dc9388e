// crates/wa-bridge-env/src/examples.rs
// ============================================================================
// Module: Env Examples
// Description: Canonical example env payloads.
// Purpose: Deterministic templates for docs and tooling.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Canonical template for the bridge `.env` file. Output is deterministic and
//! kept in sync with schema, docs, and validation defaults.

/// Returns the canonical bridge `.env` template.
#[must_use]
pub fn env_template() -> String {
    String::from(
        r#"# Node.js WhatsApp API Environment Variables
NODE_ENV=development
PORT=3000

# Flask App URL
FLASK_APP_URL=http://localhost:5000
FLASK_APP_URL_PRODUCTION=https://www.suaagenda.fun

# CORS
ALLOWED_ORIGINS=http://localhost:5000,https://www.suaagenda.fun

# WhatsApp
WHATSAPP_SESSION_DIR=./auth_info
WHATSAPP_LOG_LEVEL=info
"#,
    )
}
