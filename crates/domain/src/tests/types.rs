// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BeatmapReference, DomainError, GameMode, IdentitySource, ModCode, ModFilter, ModIntent,
    PlayerRef, ResolvedUser,
};
use std::str::FromStr;

#[test]
fn test_game_mode_defaults_to_osu() {
    assert_eq!(GameMode::default(), GameMode::Osu);
}

#[test]
fn test_game_mode_parses_wire_names_and_aliases() {
    assert_eq!(GameMode::from_str("osu").unwrap(), GameMode::Osu);
    assert_eq!(GameMode::from_str("Taiko").unwrap(), GameMode::Taiko);
    assert_eq!(GameMode::from_str("fruits").unwrap(), GameMode::Fruits);
    assert_eq!(GameMode::from_str("ctb").unwrap(), GameMode::Fruits);
    assert_eq!(GameMode::from_str(" mania ").unwrap(), GameMode::Mania);
    assert_eq!(GameMode::from_str("std").unwrap(), GameMode::Osu);
}

#[test]
fn test_game_mode_rejects_unknown_name() {
    let result: Result<GameMode, DomainError> = GameMode::from_str("rhythm");
    assert_eq!(
        result,
        Err(DomainError::UnknownGameMode(String::from("rhythm")))
    );
}

#[test]
fn test_game_mode_display_round_trips_through_from_str() {
    for mode in [
        GameMode::Osu,
        GameMode::Taiko,
        GameMode::Fruits,
        GameMode::Mania,
    ] {
        assert_eq!(GameMode::from_str(&mode.to_string()).unwrap(), mode);
    }
}

#[test]
fn test_player_ref_rejects_empty_and_whitespace() {
    assert_eq!(PlayerRef::new(""), Err(DomainError::EmptyPlayerRef));
    assert_eq!(PlayerRef::new("   "), Err(DomainError::EmptyPlayerRef));
}

#[test]
fn test_player_ref_keeps_value_verbatim() {
    let player: PlayerRef = PlayerRef::new("Peaceful Days").unwrap();
    assert_eq!(player.value(), "Peaceful Days");
    assert_eq!(player.to_string(), "Peaceful Days");
}

#[test]
fn test_mod_code_normalized_to_uppercase() {
    let code: ModCode = ModCode::new("hdDt");
    assert_eq!(code.value(), "HDDT");
}

#[test]
fn test_mod_filter_none_has_no_constraint() {
    let filter: ModFilter = ModFilter::none();
    assert!(filter.is_none());
    assert_eq!(filter.include(), None);
    assert_eq!(filter.exclude(), None);
    assert_eq!(filter.force_include(), None);
    assert_eq!(filter.name(), None);
    assert_eq!(filter.intent(), None);
    assert_eq!(filter, ModFilter::default());
}

#[test]
fn test_mod_filter_sets_exactly_one_flag() {
    let filter: ModFilter = ModFilter::new(ModIntent::ForceInclude, ModCode::new("HD"));
    assert_eq!(filter.include(), Some(false));
    assert_eq!(filter.exclude(), Some(false));
    assert_eq!(filter.force_include(), Some(true));
    assert_eq!(filter.name().map(ModCode::value), Some("HD"));
    assert_eq!(filter.intent(), Some(ModIntent::ForceInclude));

    let filter: ModFilter = ModFilter::new(ModIntent::Exclude, ModCode::new("DT"));
    assert_eq!(filter.include(), Some(false));
    assert_eq!(filter.exclude(), Some(true));
    assert_eq!(filter.force_include(), Some(false));
}

#[test]
fn test_beatmap_reference_beatmap_id() {
    let direct: BeatmapReference = BeatmapReference::DirectMap {
        id: String::from("129891"),
    };
    assert_eq!(direct.beatmap_id(), Some("129891"));

    let narrowed: BeatmapReference = BeatmapReference::SetMap {
        set_id: String::from("39804"),
        game_mode: Some(String::from("osu")),
        difficulty_id: Some(String::from("129891")),
    };
    assert_eq!(narrowed.beatmap_id(), Some("129891"));

    let whole_set: BeatmapReference = BeatmapReference::SetMap {
        set_id: String::from("39804"),
        game_mode: None,
        difficulty_id: None,
    };
    assert_eq!(whole_set.beatmap_id(), None);
}

#[test]
fn test_resolved_user_accessors() {
    let success: ResolvedUser = ResolvedUser::Success {
        player: PlayerRef::new("7562902").unwrap(),
        mode: GameMode::Taiko,
        beatmap_id: Some(String::from("42")),
        source: IdentitySource::SelfLink,
    };
    assert!(success.is_success());
    assert_eq!(success.player().map(PlayerRef::value), Some("7562902"));
    assert_eq!(success.beatmap_id(), Some("42"));
    assert_eq!(success.failure_reason(), None);

    let failure: ResolvedUser = ResolvedUser::Failure {
        reason: String::from("nope"),
        beatmap_id: Some(String::from("42")),
    };
    assert!(!failure.is_success());
    assert_eq!(failure.player(), None);
    assert_eq!(failure.beatmap_id(), Some("42"));
    assert_eq!(failure.failure_reason(), Some("nope"));
}

#[test]
fn test_resolved_user_serializes_with_type_tag() {
    let failure: ResolvedUser = ResolvedUser::Failure {
        reason: String::from("nope"),
        beatmap_id: None,
    };
    let json: serde_json::Value = serde_json::to_value(&failure).unwrap();
    assert_eq!(json["type"], "failure");
    assert_eq!(json["reason"], "nope");
    assert!(json["beatmap_id"].is_null());

    let success: ResolvedUser = ResolvedUser::Success {
        player: PlayerRef::new("mrekk").unwrap(),
        mode: GameMode::Fruits,
        beatmap_id: None,
        source: IdentitySource::Username,
    };
    let json: serde_json::Value = serde_json::to_value(&success).unwrap();
    assert_eq!(json["type"], "success");
    assert_eq!(json["player"], "mrekk");
    assert_eq!(json["mode"], "fruits");
    assert_eq!(json["source"], "username");
}

#[test]
fn test_player_ref_deserialization_rejects_empty() {
    let player: PlayerRef = serde_json::from_str("\"7562902\"").unwrap();
    assert_eq!(player.value(), "7562902");

    let result: Result<PlayerRef, serde_json::Error> = serde_json::from_str("\" \"");
    assert!(result.is_err());
}
