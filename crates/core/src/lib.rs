// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod config;
mod error;
mod free_text;
mod identity;
mod lookup;
mod resolver;
mod structured;
mod tokens;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::{DEFAULT_LINK_COMMAND, DEFAULT_OPERAND_SWITCHES, ResolverConfig};
pub use error::{ConfigError, LookupError, ResolveError};
pub use free_text::{FreeTextArgs, QUOTE_TOKEN_CAP, resolve_free_text};
pub use identity::{IdentityRule, IdentitySignals, resolve_identity};
pub use lookup::{CommandIds, CommandRegistry, LinkLookup, LinkTable, LinkedPlayer, NoCommands};
pub use resolver::Resolver;
pub use structured::{StructuredArgs, StructuredInput, resolve_structured};
pub use tokens::{Switch, Token, classify_token, classify_tokens};

// The domain crate is part of this crate's public API.
pub use osu_args_domain::{
    BeatmapReference, DifficultyOptions, DomainError, GameMode, IdentitySource, ModAcronymSet,
    ModCode, ModFilter, ModIntent, PlayerRef, ResolvedUser, SiteOrigin,
};
