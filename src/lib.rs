#![warn(missing_docs)]
//! Herald publishes library events to a partitioned Kafka topic under
//! caller-selected delivery strategies.

pub mod config;
pub mod models;
pub mod publisher;
pub mod test_helpers;
