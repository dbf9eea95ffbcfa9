//! Static registry of the supported game-asset sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::ServiceError;

/// Upstream payload shape, selects the parser used for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceShape {
    /// Typed JSON API keyed under `data.items`.
    AvatarApi,
    /// Static JSON index file keyed by character id.
    CharacterIndex,
    /// Scraped wiki HTML page.
    WikiScrape,
    /// Hardcoded roster, no upstream request.
    StaticRoster,
}

/// Identifies one upstream catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKey {
    /// Genshin Impact playable characters.
    GenshinCharacters,
    /// Genshin Impact bosses scraped from the wiki.
    GenshinMonsters,
    /// Honkai: Star Rail playable characters.
    StarrailCharacters,
    /// Zenless Zone Zero agents.
    ZzzCharacters,
}

/// Immutable description of where a source lives and where it is cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Source key.
    pub key: SourceKey,
    /// Game tag reported to clients.
    pub game: &'static str,
    /// Category label reported to clients.
    pub category: &'static str,
    /// Upstream location, `None` for static rosters.
    pub url: Option<&'static str>,
    /// Snapshot file name under the cache root.
    pub cache_json: &'static str,
    /// Image directory name under the cache root.
    pub cache_subdir: &'static str,
    /// Upstream payload shape.
    pub shape: SourceShape,
}

static SOURCES: [SourceDescriptor; 4] = [
    SourceDescriptor {
        key: SourceKey::GenshinCharacters,
        game: "genshin",
        category: "角色",
        url: Some("https://gi.yatta.moe/api/v2/chs/avatar"),
        cache_json: "genshin_characters.json",
        cache_subdir: "genshin_char",
        shape: SourceShape::AvatarApi,
    },
    SourceDescriptor {
        key: SourceKey::GenshinMonsters,
        game: "genshin",
        category: "怪物",
        url: Some("https://wiki.biligame.com/ys/%E5%B9%BD%E5%A2%83%E5%8D%B1%E6%88%98"),
        cache_json: "genshin_monsters.json",
        cache_subdir: "genshin_mon",
        shape: SourceShape::WikiScrape,
    },
    SourceDescriptor {
        key: SourceKey::StarrailCharacters,
        game: "starrail",
        category: "角色",
        url: Some(
            "https://raw.githubusercontent.com/Mar-7th/StarRailRes/master/index_new/cn/characters.json",
        ),
        cache_json: "starrail_characters.json",
        cache_subdir: "starrail_char",
        shape: SourceShape::CharacterIndex,
    },
    SourceDescriptor {
        key: SourceKey::ZzzCharacters,
        game: "zzz",
        category: "角色",
        url: None,
        cache_json: "zzz_characters.json",
        cache_subdir: "zzz_char",
        shape: SourceShape::StaticRoster,
    },
];

impl SourceKey {
    /// Every known source, in registry order.
    pub const ALL: [Self; 4] = [
        Self::GenshinCharacters,
        Self::GenshinMonsters,
        Self::StarrailCharacters,
        Self::ZzzCharacters,
    ];

    /// Wire name of the source.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GenshinCharacters => "genshin_characters",
            Self::GenshinMonsters => "genshin_monsters",
            Self::StarrailCharacters => "starrail_characters",
            Self::ZzzCharacters => "zzz_characters",
        }
    }

    /// Registry entry for this source.
    #[must_use]
    pub fn descriptor(self) -> &'static SourceDescriptor {
        match self {
            Self::GenshinCharacters => &SOURCES[0],
            Self::GenshinMonsters => &SOURCES[1],
            Self::StarrailCharacters => &SOURCES[2],
            Self::ZzzCharacters => &SOURCES[3],
        }
    }

    /// Resolves the character catalog of a game (`genshin` → `genshin_characters`).
    ///
    /// # Errors
    /// Returns a bad-request error for unknown games.
    pub fn characters_of(game: &str) -> Result<Self, ServiceError> {
        format!("{game}_characters").parse()
    }
}

impl fmt::Display for SourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKey {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| ServiceError::bad_request(format!("unsupported source: {s}")))
    }
}
