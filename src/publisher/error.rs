/// Errors surfaced by the broker transport.
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    /// Kafka error
    #[error("Kafka error: {0}")]
    Kafka(#[from] rdkafka::error::KafkaError),
}

/// Errors surfaced by a publish call.
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// The event graph contained a value the encoder could not represent.
    /// Always raised synchronously, before anything is submitted.
    #[error("failed to serialize library event: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The broker acknowledged the send as failed, or the wait for the
    /// acknowledgment was interrupted. Only the synchronous strategy
    /// surfaces this; the fire-and-forget strategies log and drop it.
    #[error("broker send failed: {0}")]
    Broker(#[from] BrokerError),
}
