use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use crate::publisher::{
    error::BrokerError,
    record::{Delivery, PublishKey, PublishRecord},
};

/// The outbound transport contract: a client that hands records to the
/// broker and resolves each attempt to an acknowledgment or a terminal
/// failure.
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BrokerClient: Send + Sync {
    /// Submits a key/value pair to the client's default-configured topic,
    /// leaving partition placement and headers to broker defaults. Resolves
    /// once the broker acks or terminally rejects the record.
    async fn send_default(
        &self,
        key: Option<PublishKey>,
        payload: Vec<u8>,
    ) -> Result<Delivery, BrokerError>;

    /// Submits a fully specified record. Resolves like `send_default`.
    async fn send_record(&self, record: PublishRecord) -> Result<Delivery, BrokerError>;

    /// Flushes any in-flight records, waiting up to the specified timeout
    /// for completion.
    async fn flush(&self, timeout: Duration) -> Result<(), BrokerError>;
}
