use crate::game::GameId;
use crate::player::PlayerId;

/// Errors returned by registry operations. No operation partially fails:
/// each one is a single local-state mutation plus a best-effort
/// notification, so there is nothing to roll back or retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested game id is not in the registry.
    NotFound(GameId),
    /// `create_game` was called with an id already in use.
    AlreadyExists(GameId),
    /// `update_score` targeted a player outside the game's roster.
    NotMember { game: GameId, player: PlayerId },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(game) => write!(f, "game not found: {game}"),
            Self::AlreadyExists(game) => write!(f, "game already exists: {game}"),
            Self::NotMember { game, player } => {
                write!(f, "player {player} is not a member of game {game}")
            },
        }
    }
}

impl std::error::Error for RegistryError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_ids() {
        let e = RegistryError::NotFound(GameId("game9".to_string()));
        assert_eq!(e.to_string(), "game not found: game9");

        let e = RegistryError::NotMember {
            game: GameId("game1".to_string()),
            player: PlayerId("ghost".to_string()),
        };
        assert_eq!(e.to_string(), "player ghost is not a member of game game1");
    }
}
