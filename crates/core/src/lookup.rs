// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator contracts the engine consumes, plus in-memory implementations.

use crate::error::{ConfigError, LookupError};
use osu_args_domain::PlayerRef;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A player previously linked to a platform account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkedPlayer {
    player_id: PlayerRef,
}

impl LinkedPlayer {
    /// Creates a new `LinkedPlayer`.
    #[must_use]
    pub const fn new(player_id: PlayerRef) -> Self {
        Self { player_id }
    }

    /// Returns the linked player id.
    #[must_use]
    pub const fn player_id(&self) -> &PlayerRef {
        &self.player_id
    }
}

/// Looks up the player linked to a platform user.
///
/// `Ok(None)` means the user has not linked an account. `Err` means the
/// lookup itself failed and aborts resolution.
pub trait LinkLookup {
    /// Returns the player linked to `platform_user_id`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store could not be queried.
    fn linked_player(&self, platform_user_id: &str) -> Result<Option<LinkedPlayer>, LookupError>;
}

/// Resolves a command name to the id it was registered under.
///
/// Only used to render a clickable hint in failure messages.
pub trait CommandRegistry {
    /// Returns the registered id of `name`, if known.
    fn command_id(&self, name: &str) -> Option<String>;
}

/// An in-memory link table keyed by platform user id.
///
/// Deserializes from a JSON object mapping platform user ids to player ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkTable {
    links: HashMap<String, LinkedPlayer>,
}

impl LinkTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a table from a JSON object of `"<platform id>": "<player id>"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not such an object or contains an
    /// empty player id.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Links `platform_user_id` to `player`, returning the previous link.
    pub fn insert(&mut self, platform_user_id: &str, player: LinkedPlayer) -> Option<LinkedPlayer> {
        self.links.insert(platform_user_id.to_string(), player)
    }

    /// Returns the number of linked accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns whether no account is linked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl LinkLookup for LinkTable {
    fn linked_player(&self, platform_user_id: &str) -> Result<Option<LinkedPlayer>, LookupError> {
        Ok(self.links.get(platform_user_id).cloned())
    }
}

/// An in-memory command registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommandIds {
    ids: HashMap<String, String>,
}

impl CommandIds {
    /// Registers `name` under `id`.
    pub fn insert(&mut self, name: &str, id: &str) {
        self.ids.insert(name.to_string(), id.to_string());
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for CommandIds {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            ids: iter
                .into_iter()
                .map(|(name, id)| (name.to_string(), id.to_string()))
                .collect(),
        }
    }
}

impl CommandRegistry for CommandIds {
    fn command_id(&self, name: &str) -> Option<String> {
        self.ids.get(name).cloned()
    }
}

/// A registry that knows no commands. Failure hints fall back to plain text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoCommands;

impl CommandRegistry for NoCommands {
    fn command_id(&self, _name: &str) -> Option<String> {
        None
    }
}
