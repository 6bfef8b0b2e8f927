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

mod difficulty;
mod error;
mod mods;
mod types;
mod url;

#[cfg(test)]
mod tests;

// Re-export public types
pub use difficulty::DifficultyOptions;
pub use error::DomainError;
pub use mods::{
    ModAcronymSet, ModExpression, ModSign, NO_MOD, OSU_MOD_ACRONYMS, parse_mod_expression,
};
pub use types::{
    BeatmapReference, GameMode, IdentitySource, ModCode, ModFilter, ModIntent, PlayerRef,
    ResolvedUser,
};
pub use url::{SiteOrigin, decompose_beatmap_url};
