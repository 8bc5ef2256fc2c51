use std::collections::HashMap;

use crate::error::RegistryError;
use crate::player::PlayerId;
use crate::registry::GameRegistry;

/// Render a leaderboard snapshot, highest score first, ties broken by
/// player id so the output is deterministic.
pub fn render_leaderboard(game_name: &str, board: &HashMap<PlayerId, i32>) -> String {
    let mut entries: Vec<(&PlayerId, i32)> = board.iter().map(|(id, &s)| (id, s)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let mut out = format!("Leaderboard for {game_name}:\n");
    for (id, score) in entries {
        out.push_str(&format!("  {id}: {score}\n"));
    }
    out
}

/// Fetch and render the current leaderboard for a game. Pure read path:
/// no mutation, no notification.
pub fn game_report(registry: &GameRegistry, game_id: &str) -> Result<String, RegistryError> {
    let board = registry.leaderboard(game_id)?;
    // The game exists, the snapshot call just proved it.
    let name = registry
        .game(game_id)
        .map(|g| g.display_name.clone())
        .unwrap_or_else(|| game_id.to_string());
    Ok(render_leaderboard(&name, &board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Player;
    use crate::registry::GameRegistry;
    use crate::sink::NullSink;

    fn board(entries: &[(&str, i32)]) -> HashMap<PlayerId, i32> {
        entries
            .iter()
            .map(|&(id, score)| (PlayerId(id.to_string()), score))
            .collect()
    }

    #[test]
    fn renders_descending_by_score() {
        let rendered = render_leaderboard("Game One", &board(&[("p1", 10), ("p2", 20)]));
        assert_eq!(rendered, "Leaderboard for Game One:\n  p2: 20\n  p1: 10\n");
    }

    #[test]
    fn ties_break_by_player_id() {
        let rendered = render_leaderboard("Game One", &board(&[("b", 5), ("a", 5), ("c", 5)]));
        assert_eq!(
            rendered,
            "Leaderboard for Game One:\n  a: 5\n  b: 5\n  c: 5\n"
        );
    }

    #[test]
    fn empty_board_renders_header_only() {
        let rendered = render_leaderboard("Game One", &HashMap::new());
        assert_eq!(rendered, "Leaderboard for Game One:\n");
    }

    #[test]
    fn game_report_reads_through_the_registry() {
        let mut reg = GameRegistry::new(Box::new(NullSink));
        reg.create_game("g1", "Game One").unwrap();
        reg.join_game("g1", Player::new("p1", "Alice", 4)).unwrap();

        let rendered = game_report(&reg, "g1").unwrap();
        assert_eq!(rendered, "Leaderboard for Game One:\n  p1: 4\n");

        assert!(game_report(&reg, "missing").is_err());
    }
}
