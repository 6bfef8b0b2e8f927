// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::BeatmapReference;
use serde::{Deserialize, Serialize};

const DIRECT_MAP_SEGMENT: &str = "b/";
const BEATMAPSET_SEGMENT: &str = "beatmapsets/";

/// The origin that beatmap links must start with, e.g. `https://osu.ppy.sh/`.
///
/// Always ends with a single `/` so that path segments can be matched
/// directly after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SiteOrigin {
    value: String,
}

impl SiteOrigin {
    /// The public osu! website.
    pub const OSU: &'static str = "https://osu.ppy.sh/";

    /// Creates a new `SiteOrigin`, appending a trailing `/` if missing.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSiteOrigin` if the origin is not an
    /// `http://` or `https://` URL with a host.
    pub fn new(origin: &str) -> Result<Self, DomainError> {
        let trimmed: &str = origin.trim();
        let (scheme, rest): (&str, &str) = if let Some(rest) = trimmed.strip_prefix("https://") {
            ("https://", rest)
        } else if let Some(rest) = trimmed.strip_prefix("http://") {
            ("http://", rest)
        } else {
            return Err(DomainError::InvalidSiteOrigin {
                origin: origin.to_string(),
                reason: "must start with http:// or https://",
            });
        };

        let host: &str = rest.trim_end_matches('/');
        if host.is_empty() {
            return Err(DomainError::InvalidSiteOrigin {
                origin: origin.to_string(),
                reason: "missing host",
            });
        }

        Ok(Self {
            value: format!("{scheme}{host}/"),
        })
    }

    /// Returns the origin including its trailing `/`.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl Default for SiteOrigin {
    fn default() -> Self {
        Self {
            value: String::from(Self::OSU),
        }
    }
}

impl TryFrom<String> for SiteOrigin {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<SiteOrigin> for String {
    fn from(origin: SiteOrigin) -> Self {
        origin.value
    }
}

/// Decomposes a beatmap or beatmapset link.
///
/// Recognized shapes, relative to `origin`:
///
/// * `b/<id>` - a direct beatmap link; `<id>` is taken verbatim
/// * `beatmapsets/<set>[#<mode>][/<difficulty>]` - a beatmapset link
///
/// Anything else, including links to other hosts, yields `None`.
/// This never fails and never performs I/O.
#[must_use]
pub fn decompose_beatmap_url(origin: &SiteOrigin, input: &str) -> Option<BeatmapReference> {
    let path: &str = input.strip_prefix(origin.value())?;

    if let Some(id) = path.strip_prefix(DIRECT_MAP_SEGMENT) {
        return Some(BeatmapReference::DirectMap { id: id.to_string() });
    }

    let rest: &str = path.strip_prefix(BEATMAPSET_SEGMENT)?;
    Some(decompose_beatmapset(rest))
}

fn decompose_beatmapset(rest: &str) -> BeatmapReference {
    let (head, difficulty_id): (&str, Option<&str>) = match rest.split_once('/') {
        Some((head, difficulty)) => (head, Some(difficulty)),
        None => (rest, None),
    };

    let (set_id, game_mode): (&str, Option<&str>) = match head.split_once('#') {
        Some((set, mode)) => (set, Some(mode)),
        None => (head, None),
    };

    BeatmapReference::SetMap {
        set_id: set_id.to_string(),
        game_mode: game_mode.map(str::to_string),
        difficulty_id: difficulty_id.map(str::to_string),
    }
}
