use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use super::{helpers::deserialize_duration_from_seconds, kafka::KafkaConfig};

/// Provides the default value for shutdown_timeout.
fn default_shutdown_timeout() -> Duration {
    Duration::from_secs(30)
}

/// Application configuration for the publisher service.
///
/// Loaded once at startup and treated as immutable afterwards.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Broker connection and topic configuration.
    pub kafka: KafkaConfig,

    /// The maximum time to wait for in-flight deliveries to flush at
    /// shutdown.
    #[serde(
        deserialize_with = "deserialize_duration_from_seconds",
        default = "default_shutdown_timeout"
    )]
    pub shutdown_timeout: Duration,
}

impl AppConfig {
    /// Creates a new `AppConfig` by reading from the configuration
    /// directory, with environment variables (prefix `HERALD`, separator
    /// `__`) overriding file values.
    pub fn new(config_dir: Option<&str>) -> Result<Self, ConfigError> {
        let config_dir_str = config_dir.unwrap_or("configs");
        let s = Config::builder()
            .add_source(File::with_name(&format!("{config_dir_str}/app.yaml")))
            .add_source(Environment::with_prefix("HERALD").separator("__"))
            .build()?;
        s.try_deserialize()
    }

    /// Creates a new `AppConfigBuilder` for testing purposes.
    #[cfg(test)]
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

/// A builder for creating `AppConfig` instances for testing.
#[cfg(test)]
#[derive(Default)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn topic(mut self, topic: &str) -> Self {
        self.config.kafka.topic = topic.to_string();
        self
    }

    pub fn brokers(mut self, brokers: &str) -> Self {
        self.config.kafka.brokers = brokers.to_string();
        self
    }

    pub fn shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.config.shutdown_timeout = timeout;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
