// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the resolution engine.
//!
//! Ambiguous or malformed user input is never an error here; it degrades to
//! a `ResolvedUser::Failure` or an empty mod filter. These types cover
//! collaborator failures and broken configuration only.

/// A link lookup collaborator failed (as opposed to finding no link).
#[derive(Debug, thiserror::Error)]
#[error("Link lookup failed for platform user {platform_user_id}: {source}")]
pub struct LookupError {
    /// The platform user that was being looked up.
    platform_user_id: String,
    /// The collaborator's own error.
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl LookupError {
    /// Wraps a collaborator error for `platform_user_id`.
    #[must_use]
    pub fn new(
        platform_user_id: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            platform_user_id: platform_user_id.to_string(),
            source: source.into(),
        }
    }

    /// Returns the platform user that was being looked up.
    #[must_use]
    pub fn platform_user_id(&self) -> &str {
        &self.platform_user_id
    }
}

/// Errors that abort resolution of a command invocation.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The link lookup collaborator failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),
}

/// Errors that can occur while loading configuration or link tables.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid JSON for the expected shape.
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field parsed but holds an unusable value.
    #[error("Invalid configuration field '{field}': {message}")]
    Invalid {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}
