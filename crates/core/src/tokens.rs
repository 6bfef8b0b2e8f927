// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Classification of free-text tokens.
//!
//! Each token gets exactly one `Token` kind, decided by an ordered list of
//! checks. Nothing here resolves identities or accumulates usernames; that
//! happens in `free_text` once every token has a kind.

use crate::config::ResolverConfig;
use osu_args_domain::{BeatmapReference, ModExpression, ModFilter, ModSign, decompose_beatmap_url};
use serde::Serialize;
use tracing::trace;

/// A signed bare word that is not a mod expression, e.g. `-pass` or `-i 3`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Switch {
    /// `+` or `-`.
    pub sign: char,
    /// The word after the sign, without a trailing `!`.
    pub name: String,
    /// A numeric argument that directly followed an operand-taking switch.
    pub operand: Option<String>,
}

/// The kind of a single free-text token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A beatmap link. Only the first one in an invocation is used.
    BeatmapLink(BeatmapReference),
    /// A signed mod expression whose letters are known mods.
    Mod(ModFilter),
    /// A signed word that did not classify as mods.
    Switch(Switch),
    /// A bare word that may be part of a username.
    Fragment {
        /// The word with quote characters removed.
        text: String,
        /// How many quote characters the token contained.
        quotes: usize,
    },
    /// A `key=value` pair.
    Flag {
        /// Text before the first `=`.
        key: String,
        /// Text after the first `=`.
        value: String,
    },
    /// Nothing usable, e.g. `=value`.
    Ignored,
}

/// Classifies a single token.
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. beatmap link
/// 2. signed mod expression whose letters classify
/// 3. signed word that does not classify (a switch)
/// 4. word without a value (a username fragment)
/// 5. `key=value` flag
#[must_use]
pub fn classify_token(config: &ResolverConfig, token: &str) -> Token {
    if let Some(reference) = decompose_beatmap_url(config.site_origin(), token) {
        return Token::BeatmapLink(reference);
    }

    if let Some(expression) = ModExpression::parse(token)
        && let Some(sign) = expression.sign()
    {
        return expression.to_filter(config.mod_acronyms()).map_or_else(
            || {
                Token::Switch(Switch {
                    sign: sign.as_char(),
                    name: expression.letters().to_string(),
                    operand: None,
                })
            },
            Token::Mod,
        );
    }

    let (key, value): (&str, &str) = token.split_once('=').unwrap_or((token, ""));

    if !key.is_empty() && value.is_empty() {
        return Token::Fragment {
            text: key.replace('"', ""),
            quotes: key.matches('"').count(),
        };
    }

    if !key.is_empty() {
        return Token::Flag {
            key: key.to_string(),
            value: value.to_string(),
        };
    }

    Token::Ignored
}

/// Classifies every token in order.
///
/// A purely numeric token directly after a switch that takes an operand
/// becomes that switch's operand instead of a token of its own. After any
/// other switch it is classified normally.
#[must_use]
pub fn classify_tokens<S: AsRef<str>>(config: &ResolverConfig, tokens: &[S]) -> Vec<Token> {
    let mut classified: Vec<Token> = Vec::with_capacity(tokens.len());

    for token in tokens.iter().map(AsRef::as_ref) {
        if let Some(Token::Switch(switch)) = classified.last_mut()
            && switch.operand.is_none()
            && config.takes_operand(&switch.name)
            && is_operand(token)
        {
            trace!(switch = %switch.name, operand = %token, "Attached switch operand");
            switch.operand = Some(token.to_string());
            continue;
        }

        let kind: Token = classify_token(config, token);
        trace!(%token, ?kind, "Classified token");
        classified.push(kind);
    }

    classified
}

fn is_operand(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|byte| byte.is_ascii_digit())
}

impl Switch {
    /// Returns whether the switch was written with a leading `-`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == ModSign::Minus.as_char()
    }
}
