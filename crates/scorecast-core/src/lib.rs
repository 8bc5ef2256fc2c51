pub mod error;
pub mod events;
pub mod game;
pub mod player;
pub mod registry;
pub mod report;
pub mod sink;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use std::sync::Mutex;

    use crate::events::RegistryEvent;
    use crate::game::GameId;
    use crate::player::{Player, PlayerId};
    use crate::sink::NotificationSink;

    /// Sink that records every event in emission order for assertions.
    /// Wrap in an `Arc` and hand a clone to the registry to keep access.
    #[derive(Default)]
    pub struct RecordingSink {
        events: Mutex<Vec<RegistryEvent>>,
    }

    impl RecordingSink {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn events(&self) -> Vec<RegistryEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl NotificationSink for RecordingSink {
        fn game_created(&self, game_id: &GameId, game_name: &str) {
            self.events
                .lock()
                .unwrap()
                .push(RegistryEvent::game_created(game_id, game_name));
        }

        fn player_joined(
            &self,
            game_id: &GameId,
            game_name: &str,
            player_id: &PlayerId,
            player_name: &str,
        ) {
            self.events
                .lock()
                .unwrap()
                .push(RegistryEvent::player_joined(
                    game_id,
                    game_name,
                    player_id,
                    player_name,
                ));
        }

        fn score_updated(
            &self,
            game_id: &GameId,
            game_name: &str,
            player_id: &PlayerId,
            score: i32,
        ) {
            self.events
                .lock()
                .unwrap()
                .push(RegistryEvent::score_updated(
                    game_id, game_name, player_id, score,
                ));
        }
    }

    /// Create `n` test players with sequential ids starting at 1, all at
    /// score zero.
    pub fn make_players(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(format!("player{}", i + 1), format!("Player{}", i + 1), 0))
            .collect()
    }
}
