use crate::id::UuidGenerator;
use crate::lifecycle::SystemConfig;
use crate::metrics::MetricsRecorder;
use crate::service::OrderService;
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the order pipeline.
///
/// `OrderSystem` is responsible for:
/// - **Lifecycle Management**: starting the store actor and stopping it again
/// - **Dependency Wiring**: handing the store client, id generator and metrics recorder
///   to the [`OrderService`]
///
/// Must be created inside a Tokio runtime.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new();
/// let service = system.service();
///
/// let view = service.create(CreateOrder::new("alice", 42.5)).await?;
/// let again = service.get(&view.id).await?;
///
/// drop(service);
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    service: OrderService,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts a system with default configuration, recording into
    /// [`MetricsRecorder::global`].
    pub fn new() -> Self {
        Self::with_metrics(SystemConfig::default(), MetricsRecorder::global())
    }

    /// Starts a system with its own metrics recorder built from `config.value_buckets`.
    pub fn with_config(config: SystemConfig) -> Self {
        let metrics = Arc::new(MetricsRecorder::with_buckets(config.value_buckets.clone()));
        Self::with_metrics(config, metrics)
    }

    /// Starts a system that records into `metrics`. `config.value_buckets` is ignored
    /// because the recorder already has its buckets.
    pub fn with_metrics(config: SystemConfig, metrics: Arc<MetricsRecorder>) -> Self {
        let (store_actor, store) = crate::order_actor::new(config.channel_capacity);
        let store_handle = tokio::spawn(store_actor.run());

        let service = OrderService::new(store, Arc::new(UuidGenerator), metrics);
        info!(channel_capacity = config.channel_capacity, "Order system started");

        Self {
            service,
            handles: vec![store_handle],
        }
    }

    /// A handle to the service. Clones are cheap; all of them must be dropped before
    /// [`shutdown`](Self::shutdown) can complete.
    pub fn service(&self) -> OrderService {
        self.service.clone()
    }

    pub fn metrics(&self) -> Arc<MetricsRecorder> {
        self.service.metrics().clone()
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's own service handle, which closes the store channel once no
    /// other clone is alive, then waits for the actor task.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system...");

        drop(self.service);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new()
    }
}
