// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while constructing domain values.
///
/// None of these are raised for ambiguous user input: a token that is not a
/// mod or a string that is not a beatmap link is simply classified as
/// something else. These only guard constructors that have hard invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The game mode name is not one of the supported rulesets.
    UnknownGameMode(String),
    /// A player reference was empty or whitespace only.
    EmptyPlayerRef,
    /// The configured site origin is not an absolute http(s) origin.
    InvalidSiteOrigin {
        /// The rejected origin.
        origin: String,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGameMode(name) => write!(f, "Unknown game mode: '{name}'"),
            Self::EmptyPlayerRef => write!(f, "Player reference cannot be empty"),
            Self::InvalidSiteOrigin { origin, reason } => {
                write!(f, "Invalid site origin '{origin}': {reason}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
