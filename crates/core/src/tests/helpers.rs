// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CommandIds, GameMode, LinkLookup, LinkTable, LinkedPlayer, LookupError, ModAcronymSet,
    PlayerRef, ResolverConfig, SiteOrigin,
};

/// Platform user with a linked account.
pub const LINKED_INVOKER: &str = "100";
/// Player id linked to `LINKED_INVOKER`.
pub const INVOKER_PLAYER: &str = "7562902";
/// Another platform user with a linked account.
pub const LINKED_FRIEND: &str = "200";
/// Player id linked to `LINKED_FRIEND`.
pub const FRIEND_PLAYER: &str = "4504101";
/// Platform user without a linked account.
pub const UNLINKED_USER: &str = "300";

/// A lookup whose backing store is down.
pub struct FailingLookup;

impl LinkLookup for FailingLookup {
    fn linked_player(&self, platform_user_id: &str) -> Result<Option<LinkedPlayer>, LookupError> {
        Err(LookupError::new(platform_user_id, "database unavailable"))
    }
}

pub fn linked(player_id: &str) -> LinkedPlayer {
    LinkedPlayer::new(PlayerRef::new(player_id).unwrap())
}

pub fn create_test_links() -> LinkTable {
    let mut links: LinkTable = LinkTable::new();
    links.insert(LINKED_INVOKER, linked(INVOKER_PLAYER));
    links.insert(LINKED_FRIEND, linked(FRIEND_PLAYER));
    links
}

pub fn create_test_config() -> ResolverConfig {
    ResolverConfig::default()
}

/// A configuration that shares nothing with the osu! defaults.
pub fn create_fixture_config() -> ResolverConfig {
    ResolverConfig::new(
        SiteOrigin::new("https://fixture.test").unwrap(),
        ModAcronymSet::new(["PA", "SS", "HD"]),
        GameMode::Mania,
        "connect",
    )
}

pub fn create_test_commands() -> CommandIds {
    [("link", "1234567890")].into_iter().collect()
}

pub fn tokens(input: &[&str]) -> Vec<String> {
    input.iter().map(|token| String::from(*token)).collect()
}
