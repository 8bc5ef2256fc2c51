use serde::Deserialize;

/// Demo configuration, loaded from `scorecast.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub sink: SinkKind,
    pub limits: LimitsConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            sink: SinkKind::Log,
            limits: LimitsConfig::default(),
        }
    }
}

/// Which notification sink the demo wires into the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Log,
    Broadcast,
    Null,
}

/// Channel sizing for the broadcast sink.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    pub broadcast_capacity: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            broadcast_capacity: 64,
        }
    }
}

impl DemoConfig {
    /// Validate configuration, exiting on values the demo cannot run with.
    pub fn validate(&self) {
        if self.limits.broadcast_capacity == 0 {
            tracing::error!("limits.broadcast_capacity must be > 0");
            std::process::exit(1);
        }
    }

    /// Load config from `scorecast.toml` if it exists, then apply env var
    /// overrides.
    pub fn load() -> Self {
        let mut config = match std::fs::read_to_string("scorecast.toml") {
            Ok(content) => match toml::from_str::<DemoConfig>(&content) {
                Ok(cfg) => {
                    tracing::info!("Loaded configuration from scorecast.toml");
                    cfg
                },
                Err(e) => {
                    tracing::warn!("Failed to parse scorecast.toml: {e}, using defaults");
                    DemoConfig::default()
                },
            },
            Err(_) => {
                tracing::info!("No scorecast.toml found, using defaults");
                DemoConfig::default()
            },
        };

        if let Ok(kind) = std::env::var("SCORECAST_SINK")
            && !kind.is_empty()
        {
            match kind.as_str() {
                "log" => config.sink = SinkKind::Log,
                "broadcast" => config.sink = SinkKind::Broadcast,
                "null" => config.sink = SinkKind::Null,
                other => {
                    tracing::warn!(value = other, "Unknown SCORECAST_SINK, keeping configured sink");
                },
            }
        }
        if let Ok(val) = std::env::var("SCORECAST_BROADCAST_CAPACITY")
            && let Ok(n) = val.parse::<usize>()
        {
            config.limits.broadcast_capacity = n;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = DemoConfig::default();
        assert_eq!(config.sink, SinkKind::Log);
        assert_eq!(config.limits.broadcast_capacity, 64);
    }

    #[test]
    fn parse_minimal_toml() {
        let config: DemoConfig = toml::from_str("").unwrap();
        assert_eq!(config.sink, SinkKind::Log);
        assert_eq!(config.limits.broadcast_capacity, 64);
    }

    #[test]
    fn parse_full_toml() {
        let config: DemoConfig = toml::from_str(
            r#"
            sink = "broadcast"

            [limits]
            broadcast_capacity = 8
            "#,
        )
        .unwrap();
        assert_eq!(config.sink, SinkKind::Broadcast);
        assert_eq!(config.limits.broadcast_capacity, 8);
    }

    #[test]
    fn missing_limits_uses_defaults() {
        let config: DemoConfig = toml::from_str("sink = \"null\"").unwrap();
        assert_eq!(config.sink, SinkKind::Null);
        assert_eq!(config.limits.broadcast_capacity, 64);
    }
}
