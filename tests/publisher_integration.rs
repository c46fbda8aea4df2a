//! Integration tests for the Kafka publishing pipeline.
//!
//! These tests are ignored by default and should only be run in an
//! environment with Docker available. They use the docker-compose file under
//! `demos/kafka` to spin up a single-broker Kafka, so they must not run
//! concurrently.
//!
//! To run these tests locally:
//! `cargo test -- --ignored --test-threads=1`

mod docker_compose_guard;

use std::{sync::Arc, time::Duration};

use herald::{
    config::KafkaConfig,
    publisher::{BrokerClient, DeliveryStrategy, KafkaBrokerClient, LibraryEventPublisher},
    test_helpers::LibraryEventBuilder,
};
use rdkafka::{
    ClientConfig, Message,
    consumer::{Consumer, StreamConsumer},
};
use tokio::time::timeout;

use crate::docker_compose_guard::DockerComposeGuard;

const KAFKA_DOCKER_COMPOSE: &str = "demos/kafka/docker-compose.yml";

const NEW_EVENT_WIRE: &str = r#"{"libraryEventType":"NEW","libraryEventId":null,"book":{"bookId":123,"bookName":"War and Peace","bookAuthor":"L.Tolstoy"}}"#;
const UPDATE_EVENT_WIRE: &str = r#"{"libraryEventType":"UPDATE","libraryEventId":123,"book":{"bookId":123,"bookName":"War and Peace","bookAuthor":"L.Tolstoy"}}"#;

fn test_consumer(brokers: &str, topic: &str, group_id: &str) -> StreamConsumer {
    let consumer: StreamConsumer = ClientConfig::new()
        .set("bootstrap.servers", brokers)
        .set("group.id", group_id)
        .set("auto.offset.reset", "earliest")
        .create()
        .expect("Consumer creation failed");

    consumer.subscribe(&[topic]).expect("Can't subscribe to topic");
    consumer
}

#[tokio::test]
#[ignore]
async fn synchronous_publish_round_trips_exact_wire_payload() {
    let _docker_guard = DockerComposeGuard::new(KAFKA_DOCKER_COMPOSE);

    let kafka_config = KafkaConfig {
        brokers: "127.0.0.1:9092".to_string(),
        topic: "library-events-sync-it".to_string(),
        ..Default::default()
    };

    let client = Arc::new(KafkaBrokerClient::from_config(&kafka_config).unwrap());
    let publisher =
        LibraryEventPublisher::new(client as Arc<dyn BrokerClient>, kafka_config.topic.clone());

    let event = LibraryEventBuilder::new().build();
    let delivery =
        publisher.publish(&event, DeliveryStrategy::Synchronous).await.unwrap().unwrap();
    assert!(delivery.offset >= 0);

    let consumer =
        test_consumer(&kafka_config.brokers, &kafka_config.topic, "herald-sync-it-group");

    let message_result = timeout(Duration::from_secs(10), consumer.recv()).await;
    assert!(message_result.is_ok(), "Timed out waiting for message from Kafka");

    let message = message_result.unwrap().expect("Error receiving message");
    let received_payload = message.payload().expect("Message has no payload");

    assert_eq!(received_payload, NEW_EVENT_WIRE.as_bytes());
    assert!(message.key().is_none(), "A new event must be published unkeyed");
    assert_eq!(message.partition(), delivery.partition);
}

#[tokio::test]
#[ignore]
async fn fire_and_forget_update_event_carries_integer_key() {
    let _docker_guard = DockerComposeGuard::new(KAFKA_DOCKER_COMPOSE);

    let kafka_config = KafkaConfig {
        brokers: "127.0.0.1:9092".to_string(),
        topic: "library-events-async-it".to_string(),
        ..Default::default()
    };

    let client = Arc::new(KafkaBrokerClient::from_config(&kafka_config).unwrap());
    let publisher = LibraryEventPublisher::new(
        Arc::clone(&client) as Arc<dyn BrokerClient>,
        kafka_config.topic.clone(),
    );

    let event = LibraryEventBuilder::new().library_event_id(123).build();
    let outcome = publisher.publish(&event, DeliveryStrategy::ExplicitRouting).await.unwrap();
    assert!(outcome.is_none(), "Fire-and-forget must not return a delivery");

    // Drain the in-flight delivery before consuming it back.
    client.flush(Duration::from_secs(10)).await.unwrap();

    let consumer =
        test_consumer(&kafka_config.brokers, &kafka_config.topic, "herald-async-it-group");

    let message_result = timeout(Duration::from_secs(10), consumer.recv()).await;
    assert!(message_result.is_ok(), "Timed out waiting for message from Kafka");

    let message = message_result.unwrap().expect("Error receiving message");

    assert_eq!(message.payload().expect("Message has no payload"), UPDATE_EVENT_WIRE.as_bytes());
    assert_eq!(message.key().expect("Message has no key"), &[0u8, 0, 0, 123][..]);
}
