// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::identity::{IdentitySignals, resolve_identity};
use crate::resolver::Resolver;
use crate::tokens::{Switch, Token, classify_tokens};
use osu_args_domain::{
    BeatmapReference, DifficultyOptions, GameMode, ModFilter, ResolvedUser, decompose_beatmap_url,
};
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use tracing::debug;

/// Quote-bearing tokens accepted before username assembly stops.
///
/// Two covers one quoted multi-word name such as `"Peaceful Days"`.
pub const QUOTE_TOKEN_CAP: usize = 2;

#[allow(clippy::expect_used)]
static MENTION: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern; failure here is a programming error.
    Regex::new(r"<@!?(\d+)>").expect("static regex must compile")
});

/// The descriptor produced for a free-text invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FreeTextArgs {
    /// The resolved player, or why none could be resolved.
    pub user: ResolvedUser,
    /// The mod constraint. The last mod expression in the input wins.
    pub mods: ModFilter,
    /// `key=value` pairs. The last occurrence of a key wins.
    pub flags: BTreeMap<String, String>,
    /// Signed words that were not mod expressions, in input order.
    pub switches: Vec<Switch>,
    /// Performance calculation overrides read from `flags`.
    pub difficulty: DifficultyOptions,
}

/// Resolves a free-text invocation into its descriptor.
///
/// The first beatmap link is taken out of `tokens`, every other token is
/// classified, and the username fragments decide identity ahead of the
/// invoker's own link. A mention inside the fragments is resolved as a
/// mention.
///
/// # Errors
///
/// Returns an error only if the link lookup collaborator fails.
pub fn resolve_free_text<S: AsRef<str>>(
    resolver: &Resolver<'_>,
    invoker: &str,
    tokens: &[S],
    mode: Option<GameMode>,
) -> Result<FreeTextArgs, ResolveError> {
    let config: &ResolverConfig = resolver.config();

    let (beatmap_id, remaining): (Option<String>, Vec<&str>) = take_first_link(config, tokens);

    let mut mods: ModFilter = ModFilter::none();
    let mut flags: BTreeMap<String, String> = BTreeMap::new();
    let mut switches: Vec<Switch> = Vec::new();
    let mut username: UsernameAssembly = UsernameAssembly::default();

    for token in classify_tokens(config, remaining.as_slice()) {
        match token {
            Token::Mod(filter) => mods = filter,
            Token::Switch(switch) => switches.push(switch),
            Token::Fragment { text, quotes } => {
                if !username.push(text, quotes) {
                    debug!("Dropped username fragment past the quote limit");
                }
            }
            Token::Flag { key, value } => {
                flags.insert(key, value);
            }
            Token::BeatmapLink(_) => debug!("Ignored additional beatmap link"),
            Token::Ignored => {}
        }
    }

    let username: Option<String> = username.finish();
    let mention: Option<&str> = username.as_deref().and_then(find_mention);

    let signals: IdentitySignals<'_> = IdentitySignals {
        mention,
        username: if mention.is_some() {
            None
        } else {
            username.as_deref()
        },
        invoker,
        mode: mode.unwrap_or_else(|| config.default_mode()),
        beatmap_id,
    };
    let user: ResolvedUser = resolve_identity(resolver, &signals)?;
    let difficulty: DifficultyOptions = DifficultyOptions::from_flags(&flags);

    Ok(FreeTextArgs {
        user,
        mods,
        flags,
        switches,
        difficulty,
    })
}

/// Removes the first beatmap link from `tokens` and returns its beatmap id.
///
/// A set link without a difficulty is still removed but yields no id.
fn take_first_link<'t, S: AsRef<str>>(
    config: &ResolverConfig,
    tokens: &'t [S],
) -> (Option<String>, Vec<&'t str>) {
    let mut remaining: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();

    let found: Option<(usize, BeatmapReference)> =
        remaining.iter().enumerate().find_map(|(index, token)| {
            decompose_beatmap_url(config.site_origin(), token).map(|reference| (index, reference))
        });

    let Some((index, reference)) = found else {
        return (None, remaining);
    };

    remaining.remove(index);
    debug!(?reference, "Took beatmap link from arguments");
    (reference.beatmap_id().map(str::to_string), remaining)
}

fn find_mention(text: &str) -> Option<&str> {
    MENTION
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|id| id.as_str())
}

/// Collects username fragments under the quote cap.
///
/// Every accepted fragment is part of the username, in input order. The cap
/// only stops further accumulation.
#[derive(Debug, Default)]
struct UsernameAssembly {
    fragments: Vec<String>,
    quote_tokens: usize,
}

impl UsernameAssembly {
    /// Offers a fragment. Returns `false` if the quote cap was already reached.
    fn push(&mut self, text: String, quotes: usize) -> bool {
        if self.quote_tokens >= QUOTE_TOKEN_CAP {
            return false;
        }

        if quotes > 0 {
            self.quote_tokens += 1;
        }

        if !text.is_empty() {
            self.fragments.push(text);
        }
        true
    }

    fn finish(self) -> Option<String> {
        if self.fragments.is_empty() {
            None
        } else {
            Some(self.fragments.join(" "))
        }
    }
}
