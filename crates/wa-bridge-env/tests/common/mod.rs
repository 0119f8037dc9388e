// crates/wa-bridge-env/tests/common/mod.rs
// =============================================================================
// Module: Env Test Helpers
// Description: Shared helpers for env validation tests.
// Purpose: Reduce duplication across integration tests for wa-bridge-env.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use wa_bridge_env::BridgeConfig;
use wa_bridge_env::ConfigError;
use wa_bridge_env::EnvFile;
use wa_bridge_env::env_template;

/// Parses an env document string into a `BridgeConfig` for tests.
pub fn config_from_str(content: &str) -> Result<BridgeConfig, ConfigError> {
    let file = EnvFile::parse(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
    BridgeConfig::from_env_file(&file)
}

/// Returns the config produced by the canonical env template.
pub fn template_config() -> Result<BridgeConfig, ConfigError> {
    config_from_str(&env_template())
}
