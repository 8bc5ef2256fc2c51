use serde::{Deserialize, Serialize};

use crate::game::GameId;
use crate::player::PlayerId;

/// One notification per state-changing registry operation.
///
/// This is the canonical payload for sinks that forward changes somewhere
/// else (channel subscribers, logs, a future transport). The registry emits
/// exactly one event per mutation, after the mutation is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RegistryEvent {
    #[serde(rename = "game.created")]
    GameCreated { game_id: GameId, game_name: String },
    #[serde(rename = "player.joined")]
    PlayerJoined {
        game_id: GameId,
        game_name: String,
        player_id: PlayerId,
        player_name: String,
    },
    #[serde(rename = "score.updated")]
    ScoreUpdated {
        game_id: GameId,
        game_name: String,
        player_id: PlayerId,
        score: i32,
    },
}

impl RegistryEvent {
    pub fn game_created(game_id: &GameId, game_name: &str) -> Self {
        Self::GameCreated {
            game_id: game_id.clone(),
            game_name: game_name.to_string(),
        }
    }

    pub fn player_joined(
        game_id: &GameId,
        game_name: &str,
        player_id: &PlayerId,
        player_name: &str,
    ) -> Self {
        Self::PlayerJoined {
            game_id: game_id.clone(),
            game_name: game_name.to_string(),
            player_id: player_id.clone(),
            player_name: player_name.to_string(),
        }
    }

    pub fn score_updated(game_id: &GameId, game_name: &str, player_id: &PlayerId, score: i32) -> Self {
        Self::ScoreUpdated {
            game_id: game_id.clone(),
            game_name: game_name.to_string(),
            player_id: player_id.clone(),
            score,
        }
    }

    /// The game this event concerns.
    pub fn game_id(&self) -> &GameId {
        match self {
            Self::GameCreated { game_id, .. }
            | Self::PlayerJoined { game_id, .. }
            | Self::ScoreUpdated { game_id, .. } => game_id,
        }
    }
}
