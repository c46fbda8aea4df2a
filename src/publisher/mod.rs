//! Event publishing: the domain publisher, the broker client contract, and
//! its Kafka implementation.

mod error;
mod event_publisher;
mod kafka;
mod record;
mod traits;

pub use error::{BrokerError, PublishError};
pub use event_publisher::{DeliveryStrategy, LibraryEventPublisher};
pub use kafka::KafkaBrokerClient;
pub use record::{Delivery, PublishKey, PublishRecord};
pub use traits::BrokerClient;
