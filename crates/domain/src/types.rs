// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The ruleset a command should query statistics for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// osu!standard.
    #[default]
    Osu,
    /// osu!taiko.
    Taiko,
    /// osu!catch. The statistics service calls this ruleset `fruits`.
    Fruits,
    /// osu!mania.
    Mania,
}

impl FromStr for GameMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "osu" | "std" | "standard" => Ok(Self::Osu),
            "taiko" => Ok(Self::Taiko),
            "fruits" | "ctb" | "catch" => Ok(Self::Fruits),
            "mania" => Ok(Self::Mania),
            _ => Err(DomainError::UnknownGameMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl GameMode {
    /// Returns the name the statistics service uses for this mode.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Osu => "osu",
            Self::Taiko => "taiko",
            Self::Fruits => "fruits",
            Self::Mania => "mania",
        }
    }
}

/// An opaque reference to a player on the statistics service.
///
/// This is either a username typed by someone or a player id that was
/// previously linked to a platform account. It is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerRef {
    value: String,
}

impl PlayerRef {
    /// Creates a new `PlayerRef`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyPlayerRef` if `value` is empty or only whitespace.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        Self::try_from(value.to_string())
    }

    /// Returns the reference as typed or stored.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl TryFrom<String> for PlayerRef {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.trim().is_empty() {
            return Err(DomainError::EmptyPlayerRef);
        }
        Ok(Self { value })
    }
}

impl From<PlayerRef> for String {
    fn from(player: PlayerRef) -> Self {
        player.value
    }
}

impl std::fmt::Display for PlayerRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

/// Which identity rule produced a successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// A mentioned platform user with a linked account.
    Mention,
    /// A username given explicitly by the invoker.
    Username,
    /// The invoker's own linked account.
    SelfLink,
}

/// The outcome of identity resolution for a single command invocation.
///
/// Both variants carry the beatmap id parsed from the same invocation, so a
/// failed identity lookup never loses an already parsed beatmap reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedUser {
    /// A player was identified.
    Success {
        /// The player to query.
        player: PlayerRef,
        /// The ruleset to query.
        mode: GameMode,
        /// The beatmap the command refers to, if any.
        beatmap_id: Option<String>,
        /// The rule that identified the player.
        source: IdentitySource,
    },
    /// No player could be identified.
    Failure {
        /// A message suitable for replying to the invoker.
        reason: String,
        /// The beatmap the command refers to, if any.
        beatmap_id: Option<String>,
    },
}

impl ResolvedUser {
    /// Returns the beatmap id carried by either variant.
    #[must_use]
    pub fn beatmap_id(&self) -> Option<&str> {
        match self {
            Self::Success { beatmap_id, .. } | Self::Failure { beatmap_id, .. } => {
                beatmap_id.as_deref()
            }
        }
    }

    /// Returns the resolved player, if resolution succeeded.
    #[must_use]
    pub const fn player(&self) -> Option<&PlayerRef> {
        match self {
            Self::Success { player, .. } => Some(player),
            Self::Failure { .. } => None,
        }
    }

    /// Returns the failure message, if resolution failed.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { reason, .. } => Some(reason),
        }
    }

    /// Returns whether a player was identified.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// A mod acronym or combination of acronyms, e.g. `HD` or `HDDT`.
///
/// Normalized to uppercase. Whether the acronyms are known is decided by
/// `ModAcronymSet`, not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ModCode {
    value: String,
}

impl ModCode {
    /// Creates a new `ModCode`, normalized to uppercase.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_uppercase(),
        }
    }

    /// Returns the acronym text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// How a mod filter constrains the plays a command looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModIntent {
    /// Plays that include the mods.
    Include,
    /// Plays that do not include the mods.
    Exclude,
    /// Plays with exactly the mods.
    ForceInclude,
}

/// A mod constraint attached to a command.
///
/// At most one of `include`, `exclude` and `force_include` is `Some(true)`,
/// and `name` is set exactly when one of them is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ModFilter {
    include: Option<bool>,
    exclude: Option<bool>,
    force_include: Option<bool>,
    name: Option<ModCode>,
}

impl ModFilter {
    /// A filter that does not constrain mods.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            include: None,
            exclude: None,
            force_include: None,
            name: None,
        }
    }

    /// Creates a filter with a single intent for `name`.
    #[must_use]
    pub fn new(intent: ModIntent, name: ModCode) -> Self {
        Self {
            include: Some(intent == ModIntent::Include),
            exclude: Some(intent == ModIntent::Exclude),
            force_include: Some(intent == ModIntent::ForceInclude),
            name: Some(name),
        }
    }

    /// Returns the include flag.
    #[must_use]
    pub const fn include(&self) -> Option<bool> {
        self.include
    }

    /// Returns the exclude flag.
    #[must_use]
    pub const fn exclude(&self) -> Option<bool> {
        self.exclude
    }

    /// Returns the force-include flag.
    #[must_use]
    pub const fn force_include(&self) -> Option<bool> {
        self.force_include
    }

    /// Returns the mod acronyms the filter applies to.
    #[must_use]
    pub const fn name(&self) -> Option<&ModCode> {
        self.name.as_ref()
    }

    /// Returns the active intent, if any.
    #[must_use]
    pub fn intent(&self) -> Option<ModIntent> {
        if self.force_include == Some(true) {
            Some(ModIntent::ForceInclude)
        } else if self.exclude == Some(true) {
            Some(ModIntent::Exclude)
        } else if self.include == Some(true) {
            Some(ModIntent::Include)
        } else {
            None
        }
    }

    /// Returns whether the filter constrains nothing.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.name.is_none()
    }
}

/// A beatmap reference extracted from a link.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BeatmapReference {
    /// A single difficulty addressed directly, e.g. `/b/129891`.
    DirectMap {
        /// The beatmap id, taken verbatim from the link.
        id: String,
    },
    /// A beatmapset, optionally narrowed to a single difficulty.
    SetMap {
        /// The beatmapset id.
        set_id: String,
        /// The ruleset fragment, e.g. `osu` in `#osu/456`.
        game_mode: Option<String>,
        /// The difficulty id, e.g. `456` in `#osu/456`.
        difficulty_id: Option<String>,
    },
}

impl BeatmapReference {
    /// Returns the single beatmap id a command can act on.
    ///
    /// A set reference without a difficulty does not identify one beatmap.
    #[must_use]
    pub fn beatmap_id(&self) -> Option<&str> {
        match self {
            Self::DirectMap { id } => Some(id),
            Self::SetMap { difficulty_id, .. } => difficulty_id.as_deref(),
        }
    }
}
