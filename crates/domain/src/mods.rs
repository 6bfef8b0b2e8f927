// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{ModCode, ModFilter, ModIntent};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// The no-mod sentinel. Always classifies, whatever the configured set.
pub const NO_MOD: &str = "NM";

/// Acronyms of the osu! mod enum.
pub const OSU_MOD_ACRONYMS: [&str; 32] = [
    "NM", "NF", "EZ", "TD", "HD", "HR", "SD", "DT", "RX", "HT", "NC", "FL", "AT", "SO", "AP", "PF",
    "4K", "5K", "6K", "7K", "8K", "FI", "RD", "CN", "TP", "9K", "KC", "1K", "3K", "2K", "V2", "MR",
];

// Sign, mod letters, force marker.
#[allow(clippy::expect_used)]
static MOD_EXPRESSION: LazyLock<Regex> = LazyLock::new(|| {
    // Compile-time constant pattern; failure here is a programming error.
    Regex::new(r"^([+-])?([A-Za-z]+)(!)?$").expect("static regex must compile")
});

/// The set of mod acronyms a mod expression is validated against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ModAcronymSet {
    acronyms: BTreeSet<String>,
}

impl ModAcronymSet {
    /// Creates a set from the given acronyms, normalized to uppercase.
    #[must_use]
    pub fn new<I, S>(acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            acronyms: acronyms
                .into_iter()
                .map(|acronym| acronym.as_ref().trim().to_uppercase())
                .filter(|acronym| !acronym.is_empty())
                .collect(),
        }
    }

    /// Returns whether `acronym` is a member of the set.
    #[must_use]
    pub fn contains(&self, acronym: &str) -> bool {
        self.acronyms.contains(&acronym.to_uppercase())
    }

    /// Returns the number of acronyms in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.acronyms.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.acronyms.is_empty()
    }

    /// Decides whether `text` is a valid mod combination.
    ///
    /// `text` is split into 2-character chunks and every chunk must be in
    /// the set, so a dangling single character fails. The `NM` sentinel
    /// classifies regardless of set membership.
    #[must_use]
    pub fn classify(&self, text: &str) -> bool {
        if text.eq_ignore_ascii_case(NO_MOD) {
            return true;
        }

        let chars: Vec<char> = text.chars().collect();
        !chars.is_empty()
            && chars.chunks(2).all(|chunk| {
                let acronym: String = chunk.iter().collect();
                self.contains(&acronym)
            })
    }
}

impl Default for ModAcronymSet {
    fn default() -> Self {
        Self::new(OSU_MOD_ACRONYMS)
    }
}

impl From<Vec<String>> for ModAcronymSet {
    fn from(acronyms: Vec<String>) -> Self {
        Self::new(acronyms)
    }
}

impl From<ModAcronymSet> for Vec<String> {
    fn from(set: ModAcronymSet) -> Self {
        set.acronyms.into_iter().collect()
    }
}

/// The sign in front of a mod expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModSign {
    /// `+`
    Plus,
    /// `-`
    Minus,
}

impl ModSign {
    /// Returns the sign character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
        }
    }
}

/// A token that has the shape of a mod expression: `[+|-]<letters>[!]`.
///
/// The shape alone says nothing about whether the letters are real mods;
/// see `ModExpression::to_filter`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModExpression {
    sign: Option<ModSign>,
    letters: String,
    forced: bool,
}

impl ModExpression {
    /// Matches `token` against the mod expression grammar.
    #[must_use]
    pub fn parse(token: &str) -> Option<Self> {
        let captures = MOD_EXPRESSION.captures(token)?;
        let sign: Option<ModSign> = captures.get(1).map(|m| match m.as_str() {
            "-" => ModSign::Minus,
            _ => ModSign::Plus,
        });
        let letters: String = captures.get(2)?.as_str().to_string();
        let forced: bool = captures.get(3).is_some();

        Some(Self {
            sign,
            letters,
            forced,
        })
    }

    /// Wraps `letters` as an unsigned, unforced expression without checking
    /// the grammar. Used for input fields that already hold only mod codes.
    #[must_use]
    pub fn bare(letters: &str) -> Self {
        Self {
            sign: None,
            letters: letters.trim().to_string(),
            forced: false,
        }
    }

    /// Returns the leading sign, if present.
    #[must_use]
    pub const fn sign(&self) -> Option<ModSign> {
        self.sign
    }

    /// Returns the letters with sign and force marker removed.
    #[must_use]
    pub fn letters(&self) -> &str {
        &self.letters
    }

    /// Returns whether the trailing `!` was present.
    #[must_use]
    pub const fn forced(&self) -> bool {
        self.forced
    }

    /// Returns the intent the sign and force marker express.
    ///
    /// `-` always excludes; `!` makes it a hard exclude but the intent is
    /// the same. `+` or no sign includes, and `!` promotes that to a forced
    /// include.
    #[must_use]
    pub const fn intent(&self) -> ModIntent {
        match (self.sign, self.forced) {
            (Some(ModSign::Minus), _) => ModIntent::Exclude,
            (_, true) => ModIntent::ForceInclude,
            (_, false) => ModIntent::Include,
        }
    }

    /// Returns whether the letters form a valid mod combination.
    #[must_use]
    pub fn classifies(&self, acronyms: &ModAcronymSet) -> bool {
        acronyms.classify(&self.letters)
    }

    /// Builds a filter if the letters classify against `acronyms`.
    #[must_use]
    pub fn to_filter(&self, acronyms: &ModAcronymSet) -> Option<ModFilter> {
        self.to_filter_with(acronyms, self.intent())
    }

    /// Builds a filter with an explicit intent if the letters classify.
    #[must_use]
    pub fn to_filter_with(&self, acronyms: &ModAcronymSet, intent: ModIntent) -> Option<ModFilter> {
        if !self.classifies(acronyms) {
            return None;
        }
        Some(ModFilter::new(intent, ModCode::new(&self.letters)))
    }
}

/// Parses `token` as a mod expression and validates its letters.
///
/// Returns `None` if the token does not have the expression shape or if its
/// letters are not a valid combination; callers then treat the token as
/// ordinary text.
#[must_use]
pub fn parse_mod_expression(acronyms: &ModAcronymSet, token: &str) -> Option<ModFilter> {
    ModExpression::parse(token)?.to_filter(acronyms)
}
