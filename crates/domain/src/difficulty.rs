// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Overrides for performance and difficulty calculation.
///
/// Every field is optional; an unset field means "use the value from the play
/// or the beatmap".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyOptions {
    /// Maximum combo reached.
    pub combo: Option<u32>,
    /// Accuracy in percent.
    pub acc: Option<f64>,
    /// Playback rate multiplier.
    pub clock_rate: Option<f64>,
    /// Beats per minute, converted to a clock rate downstream.
    pub bpm: Option<f64>,
    /// Number of 300s.
    pub n300: Option<u32>,
    /// Number of 100s.
    pub n100: Option<u32>,
    /// Number of 50s.
    pub n50: Option<u32>,
    /// Number of misses.
    pub nmisses: Option<u32>,
    /// Number of gekis (mania MAX / catch large droplets).
    pub ngeki: Option<u32>,
    /// Number of katus.
    pub nkatu: Option<u32>,
    /// Approach rate.
    pub ar: Option<f64>,
    /// Overall difficulty.
    pub od: Option<f64>,
    /// Circle size.
    pub cs: Option<f64>,
}

impl DifficultyOptions {
    /// Reads difficulty overrides out of free-form `key=value` flags.
    ///
    /// Unknown keys are skipped, as are values that do not parse. The flags
    /// themselves are left to the caller.
    #[must_use]
    pub fn from_flags(flags: &BTreeMap<String, String>) -> Self {
        let mut options: Self = Self::default();

        for (key, value) in flags {
            match key.to_ascii_lowercase().as_str() {
                "combo" => options.combo = parse_count(value),
                "acc" | "accuracy" => options.acc = parse_float(value),
                "clock_rate" | "rate" => options.clock_rate = parse_float(value),
                "bpm" => options.bpm = parse_float(value),
                "n300" => options.n300 = parse_count(value),
                "n100" => options.n100 = parse_count(value),
                "n50" => options.n50 = parse_count(value),
                "nmisses" | "misses" => options.nmisses = parse_count(value),
                "ngeki" => options.ngeki = parse_count(value),
                "nkatu" => options.nkatu = parse_count(value),
                "ar" => options.ar = parse_float(value),
                "od" => options.od = parse_float(value),
                "cs" => options.cs = parse_float(value),
                _ => {}
            }
        }

        options
    }

    /// Returns whether no override is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_count(value: &str) -> Option<u32> {
    u32::from_str(value.trim()).ok()
}

fn parse_float(value: &str) -> Option<f64> {
    // Accuracy is commonly typed with a trailing percent sign.
    f64::from_str(value.trim().trim_end_matches('%'))
        .ok()
        .filter(|parsed| parsed.is_finite())
}
