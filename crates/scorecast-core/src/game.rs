use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::player::{Player, PlayerId};

/// Unique identifier for a game in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameId(pub String);

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::borrow::Borrow<str> for GameId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A named collection of players sharing one leaderboard.
///
/// Invariant: every leaderboard key belongs to a roster member. The entry is
/// created in `add_player` together with the roster append, and
/// `update_score` (via the registry) refuses ids outside the roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub display_name: String,
    /// Players in join order. Rejoining appends a second entry.
    pub roster: Vec<Player>,
    pub leaderboard: HashMap<PlayerId, i32>,
}

impl Game {
    pub fn new(id: GameId, display_name: String) -> Self {
        Self {
            id,
            display_name,
            roster: Vec::new(),
            leaderboard: HashMap::new(),
        }
    }

    /// Append a player to the roster and seed their leaderboard entry from
    /// the player's current score. Both updates complete before this returns,
    /// so no caller can observe one without the other.
    pub fn add_player(&mut self, player: Player) {
        self.leaderboard.insert(player.id.clone(), player.score);
        self.roster.push(player);
    }

    /// Whether the id belongs to a roster member.
    pub fn is_member(&self, player_id: &str) -> bool {
        self.roster.iter().any(|p| p.id.0 == player_id)
    }

    /// Overwrite a roster member's score. Returns false (and changes
    /// nothing) when the id is not in the roster.
    pub(crate) fn set_score(&mut self, player_id: &PlayerId, score: i32) -> bool {
        if !self.is_member(&player_id.0) {
            return false;
        }
        self.leaderboard.insert(player_id.clone(), score);
        true
    }
}
