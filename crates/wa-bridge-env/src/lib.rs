// crates/wa-bridge-env/src/lib.rs
// ============================================================================
// Module: WhatsApp Bridge Env Library
// Description: Canonical environment model, validation, and artifact generation.
// Purpose: Single source of truth for the bridge deployment .env semantics.
// Dependencies: serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! `wa-bridge-env` defines the canonical environment model for the WhatsApp
//! bridge deployment. It provides the dotenv-format document parser, strict
//! fail-closed validation, and deterministic generators for the env schema,
//! template, and docs.
//!
//! Security posture: env files and process variables are untrusted inputs and
//! are validated before use.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod docs;
pub mod envfile;
pub mod examples;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
pub use docs::env_docs_markdown;
pub use docs::verify_env_docs;
pub use docs::write_env_docs;
pub use envfile::EnvEntry;
pub use envfile::EnvFile;
pub use envfile::EnvFileError;
pub use examples::env_template;
pub use schema::env_schema;
