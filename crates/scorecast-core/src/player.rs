use serde::{Deserialize, Serialize};

/// Identifier for a player. Unique within a single game's roster; the same
/// id may appear in several games with independent scores.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub String);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for PlayerId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A player as supplied by the caller at join time. Identity is immutable;
/// the `score` field only seeds the leaderboard entry when the player joins
/// a game — afterwards the leaderboard is authoritative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub display_name: String,
    pub score: i32,
}

impl Player {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, score: i32) -> Self {
        Self {
            id: PlayerId(id.into()),
            display_name: display_name.into(),
            score,
        }
    }
}
