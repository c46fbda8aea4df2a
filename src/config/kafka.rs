use serde::Deserialize;

/// Configuration for the Kafka broker connection and the produced topic.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct KafkaConfig {
    /// The topic library events are published to.
    pub topic: String,

    /// Comma-separated list of Kafka bootstrap broker addresses.
    pub brokers: String,

    /// Optional security configuration for connecting to Kafka.
    #[serde(default)]
    pub security: KafkaSecurityConfig,

    /// Optional producer-specific configuration properties.
    #[serde(default)]
    pub producer: KafkaProducerConfig,
}

/// Security settings for the broker connection.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KafkaSecurityConfig {
    /// The security protocol to use. Common values are PLAINTEXT, SSL,
    /// SASL_PLAINTEXT, SASL_SSL.
    pub protocol: String,

    /// The SASL mechanism to use for authentication. Common values: PLAIN,
    /// SCRAM-SHA-256, SCRAM-SHA-512. Only used with the SASL protocols.
    #[serde(default)]
    pub sasl_mechanism: Option<String>,

    /// The username for SASL authentication.
    #[serde(default)]
    pub sasl_username: Option<String>,

    /// The password for SASL authentication.
    #[serde(default)]
    pub sasl_password: Option<String>,

    /// Path to the CA certificate file for verifying the broker's
    /// certificate.
    #[serde(default)]
    pub ssl_ca_location: Option<String>,
}

impl Default for KafkaSecurityConfig {
    fn default() -> Self {
        Self {
            protocol: "PLAINTEXT".to_string(),
            sasl_mechanism: None,
            sasl_username: None,
            sasl_password: None,
            ssl_ca_location: None,
        }
    }
}

/// Producer tuning properties, mapped onto librdkafka settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct KafkaProducerConfig {
    /// The maximum time in milliseconds a record may spend awaiting
    /// delivery, including retries inside the client.
    /// librdkafka property: `message.timeout.ms`
    #[serde(default = "default_message_timeout_ms")]
    pub message_timeout_ms: u64,

    /// The compression codec to use for message sets.
    /// Common values: none, gzip, snappy, lz4, zstd.
    /// librdkafka property: `compression.codec`
    #[serde(default = "default_compression_codec")]
    pub compression_codec: String,

    /// The number of acknowledgments required before a send counts as
    /// complete: `0`, `1`, or `all`.
    /// librdkafka property: `acks`
    #[serde(default = "default_acks")]
    pub acks: String,
}

fn default_message_timeout_ms() -> u64 {
    5000
}
fn default_compression_codec() -> String {
    "none".to_string()
}
fn default_acks() -> String {
    "all".to_string()
}

impl Default for KafkaProducerConfig {
    fn default() -> Self {
        Self {
            message_timeout_ms: default_message_timeout_ms(),
            compression_codec: default_compression_codec(),
            acks: default_acks(),
        }
    }
}
