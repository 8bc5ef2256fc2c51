//! End-to-end scenario tests: the reference demo script driven through the
//! public API, with notifications observed via the broadcast sink.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::sync::broadcast::error::TryRecvError;

use scorecast_core::events::RegistryEvent;
use scorecast_core::game::GameId;
use scorecast_core::player::{Player, PlayerId};
use scorecast_core::registry::{GameRegistry, SharedRegistry};
use scorecast_core::report::game_report;
use scorecast_core::sink::BroadcastSink;

fn drain(rx: &mut tokio::sync::broadcast::Receiver<RegistryEvent>) -> Vec<RegistryEvent> {
    let mut events = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(e) => events.push(e),
            Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            Err(TryRecvError::Lagged(_)) => continue,
        }
    }
    events
}

#[test]
fn reference_script_end_to_end() {
    let sink = BroadcastSink::new(64);
    let mut rx = sink.subscribe();
    let mut reg = GameRegistry::new(Box::new(sink));

    reg.create_game("game1", "Decentralized Game").unwrap();
    reg.create_game("game2", "Blockchain Battle").unwrap();

    let player1 = Player::new("player1", "Alice", 0);
    let player2 = Player::new("player2", "Bob", 0);

    reg.join_game("game1", player1.clone()).unwrap();
    reg.join_game("game1", player2).unwrap();
    reg.join_game("game2", player1).unwrap();

    reg.update_score("game1", "player1", 10).unwrap();
    reg.update_score("game1", "player2", 20).unwrap();
    reg.update_score("game2", "player1", 30).unwrap();

    let board1 = reg.leaderboard("game1").unwrap();
    assert_eq!(board1.len(), 2);
    assert_eq!(board1.get("player1"), Some(&10));
    assert_eq!(board1.get("player2"), Some(&20));

    let board2 = reg.leaderboard("game2").unwrap();
    assert_eq!(board2.len(), 1);
    assert_eq!(board2.get("player1"), Some(&30));

    let game1 = GameId("game1".to_string());
    let game2 = GameId("game2".to_string());
    let p1 = PlayerId("player1".to_string());
    let p2 = PlayerId("player2".to_string());

    let expected = vec![
        RegistryEvent::game_created(&game1, "Decentralized Game"),
        RegistryEvent::game_created(&game2, "Blockchain Battle"),
        RegistryEvent::player_joined(&game1, "Decentralized Game", &p1, "Alice"),
        RegistryEvent::player_joined(&game1, "Decentralized Game", &p2, "Bob"),
        RegistryEvent::player_joined(&game2, "Blockchain Battle", &p1, "Alice"),
        RegistryEvent::score_updated(&game1, "Decentralized Game", &p1, 10),
        RegistryEvent::score_updated(&game1, "Decentralized Game", &p2, 20),
        RegistryEvent::score_updated(&game2, "Blockchain Battle", &p1, 30),
    ];
    assert_eq!(drain(&mut rx), expected);

    let rendered = game_report(&reg, "game1").unwrap();
    assert_eq!(
        rendered,
        "Leaderboard for Decentralized Game:\n  player2: 20\n  player1: 10\n"
    );
}

#[tokio::test]
async fn shared_registry_serializes_concurrent_writers() {
    let sink = BroadcastSink::new(64);
    let mut rx = sink.subscribe();
    let registry: SharedRegistry = Arc::new(RwLock::new(GameRegistry::new(Box::new(sink))));

    {
        let mut reg = registry.write().await;
        reg.create_game("g1", "Game One").unwrap();
        reg.create_game("g2", "Game Two").unwrap();
    }

    let mut tasks = Vec::new();
    for (game, player, score) in [("g1", "p1", 10), ("g2", "p2", 30)] {
        let registry = Arc::clone(&registry);
        tasks.push(tokio::spawn(async move {
            let mut reg = registry.write().await;
            reg.join_game(game, Player::new(player, player, 0)).unwrap();
            reg.update_score(game, player, score).unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    let reg = registry.read().await;
    assert_eq!(reg.leaderboard("g1").unwrap().get("p1"), Some(&10));
    assert_eq!(reg.leaderboard("g2").unwrap().get("p2"), Some(&30));

    // Writers on different games may interleave, but each game's events
    // arrive in mutation order.
    let events = drain(&mut rx);
    assert_eq!(events.len(), 6);
    for game in ["g1", "g2"] {
        let for_game: Vec<_> = events.iter().filter(|e| e.game_id().0 == game).collect();
        assert_eq!(for_game.len(), 3);
        assert!(matches!(for_game[0], RegistryEvent::GameCreated { .. }));
        assert!(matches!(for_game[1], RegistryEvent::PlayerJoined { .. }));
        assert!(matches!(for_game[2], RegistryEvent::ScoreUpdated { .. }));
    }
}
