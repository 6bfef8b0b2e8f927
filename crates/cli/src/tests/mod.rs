// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used, clippy::float_cmp)]

use crate::{Args, Command, parse_key_value};
use clap::Parser;
use osu_args::{GameMode, StructuredInput};

#[test]
fn test_prefix_tokens_keep_leading_hyphens() {
    let args: Args = Args::try_parse_from([
        "osu-args-cli",
        "100",
        "prefix",
        "--mode",
        "taiko",
        "JustinNF",
        "-i",
        "8",
    ])
    .unwrap();

    assert_eq!(args.invoker, "100");
    let Command::Prefix { mode, tokens } = args.command else {
        panic!("expected prefix command");
    };
    assert_eq!(mode, Some(GameMode::Taiko));
    assert_eq!(tokens, vec!["JustinNF", "-i", "8"]);
}

#[test]
fn test_prefix_rejects_unknown_mode() {
    let result = Args::try_parse_from(["osu-args-cli", "100", "prefix", "--mode", "rhythm"]);
    assert!(result.is_err());
}

#[test]
fn test_slash_options_become_structured_input() {
    let args: Args = Args::try_parse_from([
        "osu-args-cli",
        "100",
        "slash",
        "--username",
        "mrekk",
        "--mods",
        "-HD",
        "--exclude",
        "-d",
        "acc=98.5",
    ])
    .unwrap();

    let Command::Slash(slash) = args.command else {
        panic!("expected slash command");
    };
    let input: StructuredInput = slash.into_structured_input();
    assert_eq!(input.username.as_deref(), Some("mrekk"));
    assert_eq!(input.mods.as_deref(), Some("-HD"));
    assert_eq!(input.include, None);
    assert_eq!(input.exclude, Some(true));
    assert_eq!(input.force_include, None);
    assert_eq!(input.difficulty.acc, Some(98.5));
}

#[test]
fn test_registered_commands_are_collected() {
    let args: Args = Args::try_parse_from([
        "osu-args-cli",
        "--command",
        "link=1234567890",
        "100",
        "slash",
    ])
    .unwrap();

    assert_eq!(
        args.commands,
        vec![(String::from("link"), String::from("1234567890"))]
    );
}

#[test]
fn test_key_value_parser() {
    assert_eq!(
        parse_key_value("acc=98=5"),
        Ok((String::from("acc"), String::from("98=5")))
    );
    assert!(parse_key_value("acc").is_err());
    assert!(parse_key_value("=98").is_err());
}
