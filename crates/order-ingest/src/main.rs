//! Demo driver: creates a handful of orders, reads them back and prints the metrics in
//! Prometheus text format.

use clap::Parser;
use order_ingest::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use order_ingest::model::{CreateOrder, OrderId};
use order_ingest::order_actor::OrderError;
use std::path::PathBuf;
use tracing::{error, info, warn, Instrument};

#[derive(Debug, Parser)]
#[command(name = "order-ingest", about = "Order ingestion demo")]
struct Args {
    /// Number of generated orders to create after the fixed sample.
    #[arg(long, env = "ORDER_INGEST_ORDERS", default_value_t = 5)]
    orders: usize,

    /// Capacity of the store's request channel. Overrides the config file.
    #[arg(long, env = "ORDER_INGEST_CHANNEL_CAPACITY")]
    channel_capacity: Option<usize>,

    /// JSON file with a `SystemConfig`.
    #[arg(long, env = "ORDER_INGEST_CONFIG")]
    config: Option<PathBuf>,
}

fn load_config(args: &Args) -> Result<SystemConfig, String> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .map_err(|e| format!("reading {}: {e}", path.display()))?;
            SystemConfig::from_json(&raw).map_err(|e| format!("parsing {}: {e}", path.display()))?
        }
        None => SystemConfig::default(),
    };
    if let Some(capacity) = args.channel_capacity {
        config.channel_capacity = capacity;
    }
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();
    let config = load_config(&args)?;

    info!(?config, "Starting order ingest demo");
    let system = OrderSystem::with_config(config);
    let service = system.service();

    let span = tracing::info_span!("order_ingest");
    async {
        let created = service
            .create(CreateOrder::new("alice", 42.50))
            .await
            .map_err(|e| e.to_string())?;
        let body = serde_json::to_string(&created).map_err(|e| e.to_string())?;
        info!(%body, "Created sample order");

        let fetched = service.get(&created.id).await.map_err(|e| e.to_string())?;
        info!(matches = (fetched == created), "Fetched sample order");

        for i in 0..args.orders {
            let request = CreateOrder::new(format!("customer_{}", i % 3), 10.0 * (i + 1) as f64);
            if let Err(e) = service.create(request).await {
                error!(error = %e, "Order creation failed");
            }
        }

        match service.create(CreateOrder::new("", 10.0)).await {
            Err(OrderError::Validation(reason)) => info!(%reason, "Invalid order rejected"),
            other => warn!(?other, "Invalid order was not rejected"),
        }

        let missing = OrderId::from("deadbeefdeadbeefdeadbeefdeadbeef");
        if let Err(OrderError::NotFound(id)) = service.get(&missing).await {
            info!(order_id = %id, "Unknown id reported as not found");
        }

        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let stored = service.count().await.map_err(|e| e.to_string())?;
    info!(stored, "Orders in store");
    print!("{}", system.metrics().snapshot().render_prometheus());

    drop(service);
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
