use std::sync::Arc;

use tokio::sync::broadcast;

use crate::events::RegistryEvent;
use crate::game::GameId;
use crate::player::PlayerId;

/// Observer for registry state changes.
///
/// The registry calls exactly one capability, synchronously, per mutating
/// operation, after the mutation is committed to local state. Nothing is
/// rolled back on a misbehaving sink — implementations have no way to fail
/// the operation and must not block the caller.
pub trait NotificationSink: Send + Sync {
    fn game_created(&self, game_id: &GameId, game_name: &str);

    fn player_joined(
        &self,
        game_id: &GameId,
        game_name: &str,
        player_id: &PlayerId,
        player_name: &str,
    );

    fn score_updated(&self, game_id: &GameId, game_name: &str, player_id: &PlayerId, score: i32);
}

impl<S: NotificationSink + ?Sized> NotificationSink for Arc<S> {
    fn game_created(&self, game_id: &GameId, game_name: &str) {
        (**self).game_created(game_id, game_name);
    }

    fn player_joined(
        &self,
        game_id: &GameId,
        game_name: &str,
        player_id: &PlayerId,
        player_name: &str,
    ) {
        (**self).player_joined(game_id, game_name, player_id, player_name);
    }

    fn score_updated(&self, game_id: &GameId, game_name: &str, player_id: &PlayerId, score: i32) {
        (**self).score_updated(game_id, game_name, player_id, score);
    }
}

/// Sink that emits one structured log line per change.
pub struct LogSink;

impl NotificationSink for LogSink {
    fn game_created(&self, game_id: &GameId, game_name: &str) {
        tracing::info!(game = %game_id, name = game_name, "Game created");
    }

    fn player_joined(
        &self,
        game_id: &GameId,
        game_name: &str,
        player_id: &PlayerId,
        player_name: &str,
    ) {
        tracing::info!(
            game = %game_id,
            name = game_name,
            player = %player_id,
            player_name,
            "Player joined"
        );
    }

    fn score_updated(&self, game_id: &GameId, game_name: &str, player_id: &PlayerId, score: i32) {
        tracing::info!(
            game = %game_id,
            name = game_name,
            player = %player_id,
            score,
            "Score updated"
        );
    }
}

/// Sink that fans events out over a bounded broadcast channel.
///
/// Send errors (no live subscribers) are ignored: notification is
/// best-effort signaling and never affects the registry.
pub struct BroadcastSink {
    tx: broadcast::Sender<RegistryEvent>,
}

impl BroadcastSink {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Subscribe to all events emitted after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.tx.subscribe()
    }

    fn send(&self, event: RegistryEvent) {
        let _ = self.tx.send(event);
    }
}

impl NotificationSink for BroadcastSink {
    fn game_created(&self, game_id: &GameId, game_name: &str) {
        self.send(RegistryEvent::game_created(game_id, game_name));
    }

    fn player_joined(
        &self,
        game_id: &GameId,
        game_name: &str,
        player_id: &PlayerId,
        player_name: &str,
    ) {
        self.send(RegistryEvent::player_joined(
            game_id,
            game_name,
            player_id,
            player_name,
        ));
    }

    fn score_updated(&self, game_id: &GameId, game_name: &str, player_id: &PlayerId, score: i32) {
        self.send(RegistryEvent::score_updated(
            game_id, game_name, player_id, score,
        ));
    }
}

/// Sink that drops everything, for embedding the registry without observers.
pub struct NullSink;

impl NotificationSink for NullSink {
    fn game_created(&self, _game_id: &GameId, _game_name: &str) {}

    fn player_joined(
        &self,
        _game_id: &GameId,
        _game_name: &str,
        _player_id: &PlayerId,
        _player_name: &str,
    ) {
    }

    fn score_updated(&self, _game_id: &GameId, _game_name: &str, _player_id: &PlayerId, _score: i32) {
    }
}
