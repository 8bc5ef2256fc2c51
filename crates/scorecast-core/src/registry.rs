use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::error::RegistryError;
use crate::game::{Game, GameId};
use crate::player::{Player, PlayerId};
use crate::sink::NotificationSink;

/// Shared handle for concurrent use: mutating operations take the write
/// lock, snapshots take the read lock. One exclusive lock serializes all
/// access to a registry instance.
pub type SharedRegistry = Arc<RwLock<GameRegistry>>;

/// Single source of truth for all games.
///
/// Every mutation commits to local state first, then invokes the sink
/// exactly once before returning. A caller that observes the notification
/// and immediately queries the registry sees the mutated state.
pub struct GameRegistry {
    games: HashMap<GameId, Game>,
    sink: Box<dyn NotificationSink>,
}

impl GameRegistry {
    /// The sink is fixed at construction and not swappable afterwards.
    pub fn new(sink: Box<dyn NotificationSink>) -> Self {
        Self {
            games: HashMap::new(),
            sink,
        }
    }

    /// Register a new game with an empty roster and leaderboard.
    /// A duplicate id is rejected and the existing game is left untouched.
    pub fn create_game(&mut self, game_id: &str, game_name: &str) -> Result<(), RegistryError> {
        let id = GameId(game_id.to_string());
        if self.games.contains_key(&id) {
            return Err(RegistryError::AlreadyExists(id));
        }
        self.games
            .insert(id.clone(), Game::new(id.clone(), game_name.to_string()));
        tracing::debug!(game = game_id, name = game_name, "Game registered");
        self.sink.game_created(&id, game_name);
        Ok(())
    }

    /// Add a player to a game's roster and seed their leaderboard entry,
    /// atomically with respect to any other registry caller. Rejoining is
    /// permitted: the roster gains a duplicate entry and the leaderboard
    /// score resets to the player's current field value.
    pub fn join_game(&mut self, game_id: &str, player: Player) -> Result<(), RegistryError> {
        let Some(game) = self.games.get_mut(game_id) else {
            return Err(RegistryError::NotFound(GameId(game_id.to_string())));
        };
        let player_id = player.id.clone();
        let player_name = player.display_name.clone();
        game.add_player(player);
        tracing::debug!(game = game_id, player = %player_id, "Player joined");
        self.sink
            .player_joined(&game.id, &game.display_name, &player_id, &player_name);
        Ok(())
    }

    /// Overwrite a roster member's score on the game's leaderboard.
    /// A player id outside the roster is rejected, keeping every
    /// leaderboard entry backed by a roster member.
    pub fn update_score(
        &mut self,
        game_id: &str,
        player_id: &str,
        score: i32,
    ) -> Result<(), RegistryError> {
        let Some(game) = self.games.get_mut(game_id) else {
            return Err(RegistryError::NotFound(GameId(game_id.to_string())));
        };
        let pid = PlayerId(player_id.to_string());
        if !game.set_score(&pid, score) {
            return Err(RegistryError::NotMember {
                game: game.id.clone(),
                player: pid,
            });
        }
        tracing::debug!(game = game_id, player = player_id, score, "Score updated");
        self.sink
            .score_updated(&game.id, &game.display_name, &pid, score);
        Ok(())
    }

    /// Read-only snapshot of a game's leaderboard. No notification.
    pub fn leaderboard(&self, game_id: &str) -> Result<HashMap<PlayerId, i32>, RegistryError> {
        self.games
            .get(game_id)
            .map(|g| g.leaderboard.clone())
            .ok_or_else(|| RegistryError::NotFound(GameId(game_id.to_string())))
    }

    /// Look up a game by id.
    pub fn game(&self, game_id: &str) -> Option<&Game> {
        self.games.get(game_id)
    }

    /// Number of registered games.
    pub fn game_count(&self) -> usize {
        self.games.len()
    }
}
