// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::identity::{IdentitySignals, resolve_identity};
use crate::resolver::Resolver;
use osu_args_domain::{
    DifficultyOptions, GameMode, ModAcronymSet, ModCode, ModExpression, ModFilter, ModIntent,
    ResolvedUser, decompose_beatmap_url,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// Fields of a slash command interaction, already typed by the platform.
///
/// Every field is optional. Surrounding whitespace is ignored and empty
/// strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredInput {
    /// A player username.
    pub username: Option<String>,
    /// A mode name, e.g. `taiko`.
    pub mode: Option<String>,
    /// A mentioned platform user id.
    pub mentioned_user_id: Option<String>,
    /// A compact mod expression, e.g. `HDDT` or `+HD!`.
    pub mods: Option<String>,
    /// A beatmap or beatmapset link.
    pub map: Option<String>,
    /// Include the mods.
    pub include: Option<bool>,
    /// Exclude the mods.
    pub exclude: Option<bool>,
    /// Require exactly the mods.
    pub force_include: Option<bool>,
    /// Performance calculation overrides.
    pub difficulty: DifficultyOptions,
}

/// The descriptor produced for a structured invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StructuredArgs {
    /// The resolved player, or why none could be resolved.
    pub user: ResolvedUser,
    /// The mod constraint.
    pub mods: ModFilter,
    /// Performance calculation overrides.
    pub difficulty: DifficultyOptions,
}

/// Resolves a structured invocation into its descriptor.
///
/// Identity is taken from the mentioned user, then the username field, then
/// the invoker's own link.
///
/// # Errors
///
/// Returns an error only if the link lookup collaborator fails. Invalid or
/// missing fields degrade to a `ResolvedUser::Failure` or an empty filter.
pub fn resolve_structured(
    resolver: &Resolver<'_>,
    invoker: &str,
    input: &StructuredInput,
) -> Result<StructuredArgs, ResolveError> {
    let config: &ResolverConfig = resolver.config();

    let beatmap_id: Option<String> = present(input.map.as_deref())
        .and_then(|map| decompose_beatmap_url(config.site_origin(), map))
        .and_then(|reference| reference.beatmap_id().map(str::to_string));

    let mods: ModFilter = structured_mods(config.mod_acronyms(), input);
    let mode: GameMode = structured_mode(input.mode.as_deref(), config.default_mode());

    let signals: IdentitySignals<'_> = IdentitySignals {
        mention: present(input.mentioned_user_id.as_deref()),
        username: present(input.username.as_deref()),
        invoker,
        mode,
        beatmap_id,
    };
    let user: ResolvedUser = resolve_identity(resolver, &signals)?;

    Ok(StructuredArgs {
        user,
        mods,
        difficulty: input.difficulty.clone(),
    })
}

/// Builds the mod filter for a structured invocation.
///
/// A mods field that classifies takes its intent from its own sign or force
/// marker, or from the boolean fields when it has neither. A mods field that
/// does not classify is passed through verbatim with the boolean fields'
/// intent, so callers can name mods outside the acronym set.
fn structured_mods(acronyms: &ModAcronymSet, input: &StructuredInput) -> ModFilter {
    let Some(raw) = present(input.mods.as_deref()) else {
        return ModFilter::none();
    };
    let flagged: Option<ModIntent> = flag_intent(input);

    let expression: ModExpression =
        ModExpression::parse(raw).unwrap_or_else(|| ModExpression::bare(raw));

    if expression.classifies(acronyms) {
        let intent: ModIntent = if expression.sign().is_some() || expression.forced() {
            expression.intent()
        } else {
            flagged.unwrap_or(ModIntent::Include)
        };
        return ModFilter::new(intent, ModCode::new(expression.letters()));
    }

    debug!(mods = %raw, ?flagged, "Mods field did not classify, using explicit fields");
    flagged.map_or_else(ModFilter::none, |intent| {
        ModFilter::new(intent, ModCode::new(raw))
    })
}

// Strongest flag wins so at most one intent is ever set.
const fn flag_intent(input: &StructuredInput) -> Option<ModIntent> {
    if matches!(input.force_include, Some(true)) {
        Some(ModIntent::ForceInclude)
    } else if matches!(input.exclude, Some(true)) {
        Some(ModIntent::Exclude)
    } else if matches!(input.include, Some(true)) {
        Some(ModIntent::Include)
    } else {
        None
    }
}

fn structured_mode(mode: Option<&str>, default_mode: GameMode) -> GameMode {
    match present(mode).map(GameMode::from_str) {
        Some(Ok(mode)) => mode,
        Some(Err(err)) => {
            warn!(error = %err, fallback = %default_mode, "Ignoring unknown mode");
            default_mode
        }
        None => default_mode,
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}
