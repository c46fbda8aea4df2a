use std::{path::PathBuf, sync::Arc};

use clap::{Parser, ValueEnum};
use herald::{
    config::AppConfig,
    models::LibraryEvent,
    publisher::{BrokerClient, DeliveryStrategy, KafkaBrokerClient, LibraryEventPublisher},
};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON file holding the library event to publish; reads
    /// standard input when omitted.
    event: Option<PathBuf>,

    /// Delivery strategy to publish under.
    #[arg(long, value_enum, default_value = "explicit-routing")]
    strategy: StrategyArg,

    /// Directory holding app.yaml.
    #[arg(long, default_value = "configs")]
    config_dir: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Fire-and-forget on the broker's default topic routing.
    DefaultRouting,
    /// Fire-and-forget through an explicitly built record.
    ExplicitRouting,
    /// Wait for the broker acknowledgment before returning.
    Sync,
}

impl From<StrategyArg> for DeliveryStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::DefaultRouting => DeliveryStrategy::DefaultRouting,
            StrategyArg::ExplicitRouting => DeliveryStrategy::ExplicitRouting,
            StrategyArg::Sync => DeliveryStrategy::Synchronous,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    let subscriber =
        FmtSubscriber::builder().with_env_filter(EnvFilter::from_default_env()).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();

    tracing::debug!("Loading application configuration...");
    let config = AppConfig::new(Some(&cli.config_dir))?;
    tracing::debug!(topic = %config.kafka.topic, brokers = %config.kafka.brokers, "Configuration loaded.");

    let raw_event = match &cli.event {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };
    let event: LibraryEvent = serde_json::from_str(&raw_event)?;

    let client = Arc::new(KafkaBrokerClient::from_config(&config.kafka)?);
    let publisher = LibraryEventPublisher::new(
        Arc::clone(&client) as Arc<dyn BrokerClient>,
        config.kafka.topic.clone(),
    );

    match publisher.publish(&event, cli.strategy.into()).await? {
        Some(delivery) => {
            tracing::info!(
                partition = delivery.partition,
                offset = delivery.offset,
                "Broker acknowledged the event."
            );
        }
        None => {
            tracing::info!("Event submitted; the delivery outcome will be logged on completion.");
        }
    }

    // Give in-flight deliveries a bounded window to resolve before exit.
    client.flush(config.shutdown_timeout).await?;

    Ok(())
}
