use std::sync::Arc;

use crate::{
    models::LibraryEvent,
    publisher::{
        error::{BrokerError, PublishError},
        record::{Delivery, PublishKey, PublishRecord},
        traits::BrokerClient,
    },
};

/// How a publish call trades latency against durability and error
/// visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryStrategy {
    /// Fire-and-forget: the key/value pair goes to the client's
    /// default-configured topic and the call returns before the broker
    /// acknowledges. The outcome is observable only through the completion
    /// log.
    DefaultRouting,

    /// Fire-and-forget through an explicitly constructed [`PublishRecord`].
    /// Equivalent to `DefaultRouting` today; the explicit record is the
    /// hook point for future partition or header policy.
    ExplicitRouting,

    /// Awaits the broker acknowledgment and returns the delivery metadata
    /// to the caller. Broker failures are logged and re-raised.
    Synchronous,
}

/// Publishes library events to the broker under a caller-selected strategy.
///
/// Holds no threads and no mutable state; concurrent publish calls are
/// independent. The broker client is a single long-lived instance injected
/// at construction, so tests can substitute a double.
pub struct LibraryEventPublisher {
    client: Arc<dyn BrokerClient>,
    topic: String,
}

impl LibraryEventPublisher {
    /// Creates a publisher that sends to `topic` through `client`.
    pub fn new(client: Arc<dyn BrokerClient>, topic: impl Into<String>) -> Self {
        Self { client, topic: topic.into() }
    }

    /// Serializes `event` and submits it under `strategy`.
    ///
    /// The key is the event identifier (absent for new events) and the value
    /// is the canonical JSON encoding. Returns `Ok(None)` for the
    /// fire-and-forget strategies, which report their outcome through the
    /// completion log only, and `Ok(Some(_))` with the broker-assigned
    /// partition and offset for [`DeliveryStrategy::Synchronous`].
    ///
    /// Serialization failures are returned before anything is submitted,
    /// under every strategy. Broker failures are returned only by the
    /// synchronous strategy; once a fire-and-forget submission is in flight
    /// it cannot be withdrawn and its failure never reaches the caller.
    pub async fn publish(
        &self,
        event: &LibraryEvent,
        strategy: DeliveryStrategy,
    ) -> Result<Option<Delivery>, PublishError> {
        let key = event.library_event_id.map(PublishKey);
        let payload = serde_json::to_vec(event)?;

        match strategy {
            DeliveryStrategy::DefaultRouting => {
                let client = Arc::clone(&self.client);
                let log_payload = payload.clone();
                tokio::spawn(async move {
                    let outcome = client.send_default(key, payload).await;
                    handle_outcome(key, &log_payload, outcome);
                });
                Ok(None)
            }
            DeliveryStrategy::ExplicitRouting => {
                let record = self.build_record(key, payload.clone());
                let client = Arc::clone(&self.client);
                tokio::spawn(async move {
                    let outcome = client.send_record(record).await;
                    handle_outcome(key, &payload, outcome);
                });
                Ok(None)
            }
            DeliveryStrategy::Synchronous => {
                match self.client.send_default(key, payload.clone()).await {
                    Ok(delivery) => Ok(Some(delivery)),
                    Err(e) => {
                        tracing::error!(
                            key = ?key.map(|k| k.0),
                            value = %String::from_utf8_lossy(&payload),
                            error = %e,
                            "Broker rejected synchronous send."
                        );
                        Err(PublishError::Broker(e))
                    }
                }
            }
        }
    }

    /// Builds the explicit record for [`DeliveryStrategy::ExplicitRouting`]:
    /// the configured topic, unset partition, unset headers.
    fn build_record(&self, key: Option<PublishKey>, payload: Vec<u8>) -> PublishRecord {
        PublishRecord { topic: self.topic.clone(), partition: None, key, payload, headers: None }
    }
}

/// Shared completion handling for the fire-and-forget strategies. Success
/// and failure both terminate here; neither propagates past this function,
/// since the caller has already returned.
fn handle_outcome(key: Option<PublishKey>, payload: &[u8], outcome: Result<Delivery, BrokerError>) {
    let key = key.map(|k| k.0);
    let value = String::from_utf8_lossy(payload);
    match outcome {
        Ok(delivery) => {
            tracing::info!(?key, %value, partition = delivery.partition, "Event delivered.");
        }
        Err(e) => {
            tracing::error!(?key, %value, error = %e, "Failed to deliver event.");
        }
    }
}
