use std::time::Duration;

use rdkafka::{
    ClientConfig,
    message::{Header, OwnedHeaders},
    producer::{FutureProducer, FutureRecord, Producer},
};

use crate::{
    config::KafkaConfig,
    publisher::{
        error::BrokerError,
        record::{Delivery, PublishKey, PublishRecord},
        traits::BrokerClient,
    },
};

/// A Kafka broker client backed by an `rdkafka` `FutureProducer`.
///
/// The producer manages its own I/O threads; this wrapper only maps records
/// onto the wire format and delivery results back into [`Delivery`].
pub struct KafkaBrokerClient {
    producer: FutureProducer,
    topic: String,
}

impl KafkaBrokerClient {
    /// Creates a new `KafkaBrokerClient` from the given `KafkaConfig`.
    pub fn from_config(config: &KafkaConfig) -> Result<Self, BrokerError> {
        let mut client_config = ClientConfig::new();

        client_config
            .set("bootstrap.servers", &config.brokers)
            .set("message.timeout.ms", config.producer.message_timeout_ms.to_string())
            .set("compression.codec", &config.producer.compression_codec)
            .set("acks", &config.producer.acks)
            .set("security.protocol", &config.security.protocol);

        if let Some(mechanism) = &config.security.sasl_mechanism {
            client_config.set("sasl.mechanism", mechanism);
        }
        if let Some(username) = &config.security.sasl_username {
            client_config.set("sasl.username", username);
        }
        if let Some(password) = &config.security.sasl_password {
            client_config.set("sasl.password", password);
        }
        if let Some(ca_location) = &config.security.ssl_ca_location {
            client_config.set("ssl.ca.location", ca_location);
        }

        let producer = client_config.create::<FutureProducer>()?;

        Ok(KafkaBrokerClient { producer, topic: config.topic.clone() })
    }

    async fn send(
        &self,
        topic: &str,
        partition: Option<i32>,
        key: Option<PublishKey>,
        payload: &[u8],
        headers: Option<&[(String, Vec<u8>)]>,
    ) -> Result<Delivery, BrokerError> {
        let key_bytes = key.map(PublishKey::to_bytes);

        let mut record = FutureRecord::<[u8], [u8]>::to(topic).payload(payload);
        if let Some(key_bytes) = &key_bytes {
            record = record.key(&key_bytes[..]);
        }
        if let Some(partition) = partition {
            record = record.partition(partition);
        }
        if let Some(headers) = headers {
            record = record.headers(to_owned_headers(headers));
        }

        let (partition, offset) = self
            .producer
            .send(record, Duration::from_secs(0))
            .await
            .map_err(|(kafka_error, _)| BrokerError::Kafka(kafka_error))?;

        Ok(Delivery { partition, offset })
    }
}

fn to_owned_headers(headers: &[(String, Vec<u8>)]) -> OwnedHeaders {
    headers.iter().fold(OwnedHeaders::new(), |acc, (name, value)| {
        acc.insert(Header { key: name, value: Some(value) })
    })
}

#[async_trait::async_trait]
impl BrokerClient for KafkaBrokerClient {
    async fn send_default(
        &self,
        key: Option<PublishKey>,
        payload: Vec<u8>,
    ) -> Result<Delivery, BrokerError> {
        self.send(&self.topic, None, key, &payload, None).await
    }

    async fn send_record(&self, record: PublishRecord) -> Result<Delivery, BrokerError> {
        self.send(
            &record.topic,
            record.partition,
            record.key,
            &record.payload,
            record.headers.as_deref(),
        )
        .await
    }

    async fn flush(&self, timeout: Duration) -> Result<(), BrokerError> {
        self.producer.flush(timeout).map_err(|e| e.into())
    }
}
