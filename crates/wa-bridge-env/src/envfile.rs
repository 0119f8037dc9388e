// crates/wa-bridge-env/src/envfile.rs
// ============================================================================
// Module: Env File Document Model
// Description: Parser for the dotenv-format environment file.
// Purpose: Provide a line-accurate document model for env file tooling.
// Dependencies: thiserror, std
// ============================================================================

//! ## Overview
//! Parses the plain-text environment file format consumed by the bridge
//! deployment: one `KEY=value` assignment per line, `#`-prefixed comment
//! lines, blank lines ignored, no quoting or escaping. The document model
//! keeps source line numbers so typed validation can report precise
//! locations.
//!
//! ## Invariants
//! - Every entry key matches `[A-Za-z_][A-Za-z0-9_]*`.
//! - Keys are unique within a parsed document.
//! - Entry order matches file order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;

use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum byte length for an env key.
pub(crate) const MAX_ENV_KEY_LENGTH: usize = 255;
/// Maximum byte length for an env value.
pub(crate) const MAX_ENV_VALUE_LENGTH: usize = 8 * 1024;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while parsing an env file document.
#[derive(Debug, Error)]
pub enum EnvFileError {
    /// A line does not satisfy the `KEY=value` grammar.
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based source line number.
        line: usize,
        /// Description of the grammar violation.
        message: String,
    },
    /// A key is assigned more than once.
    #[error("line {line}: duplicate key {key}")]
    Duplicate {
        /// 1-based line of the second assignment.
        line: usize,
        /// The repeated key name.
        key: String,
    },
}

// ============================================================================
// SECTION: Types
// ============================================================================

/// One `KEY=value` assignment with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvEntry {
    /// Variable name.
    pub key: String,
    /// Raw value with surrounding whitespace trimmed.
    pub value: String,
    /// 1-based source line number.
    pub line: usize,
}

/// Ordered document model for a parsed env file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    /// Assignments in file order.
    entries: Vec<EnvEntry>,
}

impl EnvFile {
    /// Parses env file text into a document model.
    ///
    /// Blank lines and lines whose first non-whitespace character is `#` are
    /// ignored. Every other line must contain `=`; the key is the text before
    /// the first `=` and the value the text after it, both trimmed. Values
    /// are kept verbatim: no quote stripping and no escape processing.
    ///
    /// # Errors
    ///
    /// Returns [`EnvFileError`] when a line violates the grammar or a key is
    /// assigned twice.
    pub fn parse(content: &str) -> Result<Self, EnvFileError> {
        let mut entries = Vec::new();
        let mut seen = BTreeSet::new();
        for (index, text) in content.lines().enumerate() {
            let line = index + 1;
            let trimmed = text.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let Some((raw_key, raw_value)) = text.split_once('=') else {
                return Err(EnvFileError::Syntax {
                    line,
                    message: "expected KEY=value".to_string(),
                });
            };
            let key = raw_key.trim();
            validate_key(line, key)?;
            let value = raw_value.trim();
            if value.len() > MAX_ENV_VALUE_LENGTH {
                return Err(EnvFileError::Syntax {
                    line,
                    message: "value exceeds size limit".to_string(),
                });
            }
            if !seen.insert(key.to_string()) {
                return Err(EnvFileError::Duplicate {
                    line,
                    key: key.to_string(),
                });
            }
            entries.push(EnvEntry {
                key: key.to_string(),
                value: value.to_string(),
                line,
            });
        }
        Ok(Self {
            entries,
        })
    }

    /// Returns the value assigned to `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.key == key).map(|entry| entry.value.as_str())
    }

    /// Returns the assignments in file order.
    #[must_use]
    pub fn entries(&self) -> &[EnvEntry] {
        &self.entries
    }

    /// Returns the assigned key names in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    /// Returns the number of assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the document has no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates an env key against the dotenv name grammar.
fn validate_key(line: usize, key: &str) -> Result<(), EnvFileError> {
    if key.is_empty() {
        return Err(EnvFileError::Syntax {
            line,
            message: "key is empty".to_string(),
        });
    }
    if key.len() > MAX_ENV_KEY_LENGTH {
        return Err(EnvFileError::Syntax {
            line,
            message: "key exceeds size limit".to_string(),
        });
    }
    let mut bytes = key.bytes();
    match bytes.next() {
        Some(first) if first.is_ascii_alphabetic() || first == b'_' => {}
        _ => {
            return Err(EnvFileError::Syntax {
                line,
                message: "key must start with a letter or underscore".to_string(),
            });
        }
    }
    if !bytes.all(|byte| byte.is_ascii_alphanumeric() || byte == b'_') {
        return Err(EnvFileError::Syntax {
            line,
            message: "key contains invalid characters".to_string(),
        });
    }
    Ok(())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
