// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::LookupError;
use crate::resolver::Resolver;
use osu_args_domain::{GameMode, IdentitySource, PlayerRef, ResolvedUser};
use tracing::{debug, trace};

/// Everything identity resolution may consult for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentitySignals<'a> {
    /// A mentioned platform user id.
    pub mention: Option<&'a str>,
    /// A username given explicitly, or assembled from free-text fragments.
    pub username: Option<&'a str>,
    /// The platform user who issued the command.
    pub invoker: &'a str,
    /// The mode the command runs in.
    pub mode: GameMode,
    /// The beatmap parsed from the same invocation.
    pub beatmap_id: Option<String>,
}

/// One step of the identity fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentityRule {
    /// A mentioned user's linked account. A mention without a link fails
    /// outright instead of falling through.
    Mention,
    /// An explicit username.
    Username,
    /// The invoker's own linked account.
    SelfLink,
    /// Nothing identifies a player.
    Unlinked,
}

impl IdentityRule {
    /// Every rule in priority order. The last one, `Unlinked`, always applies.
    pub const CHAIN: [Self; 4] = [
        Self::Mention,
        Self::Username,
        Self::SelfLink,
        Self::Unlinked,
    ];

    /// Applies this rule alone.
    ///
    /// Returns `Ok(None)` if the rule's signal is absent and the next rule
    /// should be consulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the link lookup collaborator fails.
    pub fn evaluate(
        self,
        resolver: &Resolver<'_>,
        signals: &IdentitySignals<'_>,
    ) -> Result<Option<ResolvedUser>, LookupError> {
        match self {
            Self::Mention => {
                let Some(mention) = signals.mention else {
                    return Ok(None);
                };
                let user: ResolvedUser = match resolver.links().linked_player(mention)? {
                    Some(linked) => success(
                        linked.player_id().clone(),
                        IdentitySource::Mention,
                        signals,
                    ),
                    None => failure(
                        format!("The user <@{mention}> hasn't linked their account to the bot yet!"),
                        signals,
                    ),
                };
                Ok(Some(user))
            }
            Self::Username => Ok(signals
                .username
                .and_then(|username| PlayerRef::new(username).ok())
                .map(|player| success(player, IdentitySource::Username, signals))),
            Self::SelfLink => Ok(resolver
                .links()
                .linked_player(signals.invoker)?
                .map(|linked| {
                    success(
                        linked.player_id().clone(),
                        IdentitySource::SelfLink,
                        signals,
                    )
                })),
            Self::Unlinked => Ok(Some(unlinked(resolver, signals))),
        }
    }
}

/// Resolves the player a command is about.
///
/// Rules are tried in `IdentityRule::CHAIN` order and the first that
/// applies wins. Lower rules are never consulted. The beatmap id in
/// `signals` ends up on whichever variant is produced.
///
/// # Errors
///
/// Returns an error if the link lookup collaborator fails. A missing link
/// is not an error.
pub fn resolve_identity(
    resolver: &Resolver<'_>,
    signals: &IdentitySignals<'_>,
) -> Result<ResolvedUser, LookupError> {
    for rule in IdentityRule::CHAIN {
        if let Some(user) = rule.evaluate(resolver, signals)? {
            debug!(?rule, success = user.is_success(), "Identity rule matched");
            return Ok(user);
        }
        trace!(?rule, "Identity rule did not apply");
    }

    // Only reachable if `CHAIN` stops ending in `Unlinked`.
    Ok(unlinked(resolver, signals))
}

fn success(player: PlayerRef, source: IdentitySource, signals: &IdentitySignals<'_>) -> ResolvedUser {
    ResolvedUser::Success {
        player,
        mode: signals.mode,
        beatmap_id: signals.beatmap_id.clone(),
        source,
    }
}

fn failure(reason: String, signals: &IdentitySignals<'_>) -> ResolvedUser {
    ResolvedUser::Failure {
        reason,
        beatmap_id: signals.beatmap_id.clone(),
    }
}

fn unlinked(resolver: &Resolver<'_>, signals: &IdentitySignals<'_>) -> ResolvedUser {
    failure(
        format!(
            "Please link your account to the bot using {}!",
            resolver.link_hint()
        ),
        signals,
    )
}
