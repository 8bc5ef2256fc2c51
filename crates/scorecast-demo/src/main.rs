mod config;

use tracing_subscriber::EnvFilter;

use scorecast_core::error::RegistryError;
use scorecast_core::player::Player;
use scorecast_core::registry::GameRegistry;
use scorecast_core::report::game_report;
use scorecast_core::sink::{BroadcastSink, LogSink, NotificationSink, NullSink};

use config::{DemoConfig, SinkKind};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = DemoConfig::load();
    config.validate();

    // The broadcast sink gets a subscriber task that logs each event as it
    // arrives; the other sinks need no plumbing.
    let mut subscriber_task = None;
    let sink: Box<dyn NotificationSink> = match config.sink {
        SinkKind::Log => Box::new(LogSink),
        SinkKind::Null => Box::new(NullSink),
        SinkKind::Broadcast => {
            let sink = BroadcastSink::new(config.limits.broadcast_capacity);
            let mut rx = sink.subscribe();
            subscriber_task = Some(tokio::spawn(async move {
                while let Ok(event) = rx.recv().await {
                    tracing::info!(?event, "Registry event");
                }
            }));
            Box::new(sink)
        },
    };

    let mut registry = GameRegistry::new(sink);
    run_script(&mut registry);

    for game_id in ["game1", "game2"] {
        match game_report(&registry, game_id) {
            Ok(rendered) => print!("{rendered}"),
            Err(e) => tracing::error!(game = game_id, error = %e, "Leaderboard unavailable"),
        }
    }

    // Dropping the registry drops the sink, closing the channel so the
    // subscriber drains its backlog and exits.
    drop(registry);
    if let Some(task) = subscriber_task {
        let _ = task.await;
    }
}

/// The fixed reference sequence: two games, three joins, three score
/// updates. Failures are reported with the offending operation and id.
fn run_script(registry: &mut GameRegistry) {
    let player1 = Player::new("player1", "Alice", 0);
    let player2 = Player::new("player2", "Bob", 0);

    log_op(
        "create game1",
        registry.create_game("game1", "Decentralized Game"),
    );
    log_op(
        "create game2",
        registry.create_game("game2", "Blockchain Battle"),
    );

    log_op("join game1", registry.join_game("game1", player1.clone()));
    log_op("join game1", registry.join_game("game1", player2));
    log_op("join game2", registry.join_game("game2", player1));

    log_op(
        "update game1/player1",
        registry.update_score("game1", "player1", 10),
    );
    log_op(
        "update game1/player2",
        registry.update_score("game1", "player2", 20),
    );
    log_op(
        "update game2/player1",
        registry.update_score("game2", "player1", 30),
    );
}

fn log_op(op: &str, result: Result<(), RegistryError>) {
    if let Err(e) = result {
        tracing::error!(op, error = %e, "Operation failed");
    }
}
