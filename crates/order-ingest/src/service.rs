//! # Order Service
//!
//! The two operations a front end calls: create an order and fetch one by id.
//!
//! Create runs validate → generate id → insert → record metric → return view. The
//! metric is recorded only after the insert succeeded, so `orders_created_total` never
//! counts an order that cannot be fetched. Reads never touch the metrics.

use crate::clients::OrderStore;
use crate::id::IdGenerator;
use crate::metrics::MetricsRecorder;
use crate::model::{CreateOrder, Order, OrderId, OrderView};
use crate::order_actor::OrderError;
use resource_actor::ActorClient;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn, Instrument};

/// Total insert attempts per create: the first id plus one regenerated id on collision.
const MAX_INSERT_ATTEMPTS: u32 = 2;

/// Stateless orchestrator over the store, the id generator and the metrics recorder.
///
/// Cheap to clone; clones share the same store and recorder.
#[derive(Clone)]
pub struct OrderService {
    store: OrderStore,
    ids: Arc<dyn IdGenerator>,
    metrics: Arc<MetricsRecorder>,
}

impl OrderService {
    pub fn new(store: OrderStore, ids: Arc<dyn IdGenerator>, metrics: Arc<MetricsRecorder>) -> Self {
        Self { store, ids, metrics }
    }

    /// Validates and stores a new order, then records it in the metrics.
    ///
    /// # Errors
    /// - [`OrderError::Validation`] for an empty or whitespace-only customer, or a
    ///   negative / non-finite amount. No id is generated and nothing is stored or
    ///   counted.
    /// - [`OrderError::Internal`] if the store is unavailable or two generated ids in a
    ///   row collide.
    ///
    /// # Cancellation
    /// Once validation passes, the insert and the metric update run on their own task.
    /// Dropping the returned future does not stop that task, so an order is never stored
    /// without being counted.
    #[instrument(skip(self, request), fields(customer = %request.customer))]
    pub async fn create(&self, request: CreateOrder) -> Result<OrderView, OrderError> {
        debug!(?request, "create called");
        if let Err(e) = validate(&request) {
            warn!(error = %e, "Rejected order");
            return Err(e);
        }

        let this = self.clone();
        tokio::spawn(async move { this.persist(request).await }.in_current_span())
            .await
            .map_err(|e| OrderError::Internal(format!("create task failed: {e}")))?
    }

    async fn persist(&self, request: CreateOrder) -> Result<OrderView, OrderError> {
        let CreateOrder { customer, amount } = request;

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let order = Order::new(self.ids.next_id(), customer.clone(), amount);
            let view = OrderView::from(order.clone());

            match self.store.insert(order).await {
                Ok(()) => {
                    self.metrics.record_creation(amount);
                    info!(order_id = %view.id, amount, "Created order");
                    return Ok(view);
                }
                Err(OrderError::DuplicateKey(id)) => {
                    warn!(order_id = %id, attempt, "Order id collision");
                }
                Err(e) => {
                    error!(error = %e, "Failed to store order");
                    return Err(e);
                }
            }
        }

        error!(attempts = MAX_INSERT_ATTEMPTS, "Order id kept colliding");
        Err(OrderError::Internal(format!(
            "order id collided {MAX_INSERT_ATTEMPTS} times in a row"
        )))
    }

    /// Fetches a stored order.
    ///
    /// An unknown id is reported as [`OrderError::NotFound`]; it is an expected outcome
    /// and is only logged at `warn`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &OrderId) -> Result<OrderView, OrderError> {
        debug!("get called");
        match self.store.get(id.clone()).await? {
            Some(order) => Ok(order.into()),
            None => {
                warn!(order_id = %id, "Order not found");
                Err(OrderError::NotFound(id.clone()))
            }
        }
    }

    /// Number of stored orders.
    pub async fn count(&self) -> Result<usize, OrderError> {
        self.store.len().await
    }

    /// `Ok` while the store actor is answering requests.
    pub async fn health_check(&self) -> Result<(), OrderError> {
        self.store.len().await.map(|_| ())
    }

    pub fn metrics(&self) -> &Arc<MetricsRecorder> {
        &self.metrics
    }
}

fn validate(request: &CreateOrder) -> Result<(), OrderError> {
    if request.customer.trim().is_empty() {
        return Err(OrderError::Validation("customer must not be empty".to_string()));
    }
    if !request.amount.is_finite() {
        return Err(OrderError::Validation(format!(
            "amount must be a finite number, got {}",
            request.amount
        )));
    }
    if request.amount < 0.0 {
        return Err(OrderError::Validation(format!(
            "amount must not be negative, got {}",
            request.amount
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert!(validate(&CreateOrder::new("alice", 0.0)).is_ok());
        assert!(validate(&CreateOrder::new("alice", 42.5)).is_ok());

        for bad in [
            CreateOrder::new("", 10.0),
            CreateOrder::new("   ", 10.0),
            CreateOrder::new("alice", -0.01),
            CreateOrder::new("alice", f64::NAN),
            CreateOrder::new("alice", f64::INFINITY),
            CreateOrder::new("alice", f64::NEG_INFINITY),
        ] {
            assert!(
                matches!(validate(&bad), Err(OrderError::Validation(_))),
                "accepted {bad:?}"
            );
        }
    }
}
