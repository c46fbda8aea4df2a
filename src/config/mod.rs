//! Configuration module for the publisher service.

mod app_config;
mod helpers;
mod kafka;

pub use app_config::AppConfig;
pub use helpers::deserialize_duration_from_seconds;
pub use kafka::{KafkaConfig, KafkaProducerConfig, KafkaSecurityConfig};
