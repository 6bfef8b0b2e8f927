// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::ConfigError;
use osu_args_domain::{GameMode, ModAcronymSet, SiteOrigin};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Name of the slash command that links a platform account to a player.
pub const DEFAULT_LINK_COMMAND: &str = "link";

/// Switches that take a numeric operand, e.g. `-i 3` for the third play.
pub const DEFAULT_OPERAND_SWITCHES: [&str; 2] = ["i", "index"];

/// Constants the resolution engine depends on.
///
/// Nothing in the engine hard-codes the site origin or the mod acronyms, so
/// fixtures can substitute their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverConfig {
    /// Origin beatmap links must start with.
    site_origin: SiteOrigin,
    /// Acronyms a mod expression is validated against.
    mod_acronyms: ModAcronymSet,
    /// Mode used when the invocation does not name one.
    default_mode: GameMode,
    /// Command suggested to users who have not linked an account.
    link_command: String,
    /// Switch names that consume a following numeric token.
    operand_switches: BTreeSet<String>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            site_origin: SiteOrigin::default(),
            mod_acronyms: ModAcronymSet::default(),
            default_mode: GameMode::default(),
            link_command: String::from(DEFAULT_LINK_COMMAND),
            operand_switches: DEFAULT_OPERAND_SWITCHES.map(String::from).into(),
        }
    }
}

impl ResolverConfig {
    /// Creates a new configuration.
    ///
    /// # Arguments
    ///
    /// * `site_origin` - Origin beatmap links must start with
    /// * `mod_acronyms` - Acronyms a mod expression is validated against
    /// * `default_mode` - Mode used when the invocation does not name one
    /// * `link_command` - Command suggested to users without a linked account
    #[must_use]
    pub fn new(
        site_origin: SiteOrigin,
        mod_acronyms: ModAcronymSet,
        default_mode: GameMode,
        link_command: &str,
    ) -> Self {
        Self {
            site_origin,
            mod_acronyms,
            default_mode,
            link_command: link_command.to_string(),
            operand_switches: DEFAULT_OPERAND_SWITCHES.map(String::from).into(),
        }
    }

    /// Replaces the switch names that take a numeric operand.
    #[must_use]
    pub fn with_operand_switches<I, S>(mut self, switches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.operand_switches = switches
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        self
    }

    /// Parses a configuration from JSON. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The document is not valid JSON or has unknown fields
    /// - The site origin is not an http(s) origin
    /// - The link command is empty
    /// - The mod acronym set is empty
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks invariants that deserialization alone cannot enforce.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.link_command.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "link_command",
                message: String::from("must not be empty"),
            });
        }

        if self.mod_acronyms.is_empty() {
            return Err(ConfigError::Invalid {
                field: "mod_acronyms",
                message: String::from("must contain at least one acronym"),
            });
        }

        Ok(())
    }

    /// Returns the origin beatmap links must start with.
    #[must_use]
    pub const fn site_origin(&self) -> &SiteOrigin {
        &self.site_origin
    }

    /// Returns the acronyms a mod expression is validated against.
    #[must_use]
    pub const fn mod_acronyms(&self) -> &ModAcronymSet {
        &self.mod_acronyms
    }

    /// Returns the mode used when the invocation does not name one.
    #[must_use]
    pub const fn default_mode(&self) -> GameMode {
        self.default_mode
    }

    /// Returns the command suggested to users without a linked account.
    #[must_use]
    pub fn link_command(&self) -> &str {
        &self.link_command
    }

    /// Returns whether the switch `name` consumes a following numeric token.
    ///
    /// Names compare case-insensitively.
    #[must_use]
    pub fn takes_operand(&self, name: &str) -> bool {
        self.operand_switches
            .iter()
            .any(|switch| switch.eq_ignore_ascii_case(name))
    }
}
