//! # Order Store
//!
//! Domain client for the Order actor. It owns no state itself; the actor holds the only
//! copy of every order and this client exchanges messages with it.
use crate::model::Order;
use crate::order_actor::OrderError;
use resource_actor::{ActorClient, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Concurrent-safe mapping from [`OrderId`](crate::model::OrderId) to [`Order`].
///
/// Inserts go through [`OrderStore::insert`]; lookups and the store size come from the
/// [`ActorClient`] trait (`get`, `len`). Cloning is cheap and every clone talks to the
/// same store.
#[derive(Clone)]
pub struct OrderStore {
    inner: ResourceClient<Order>,
}

impl OrderStore {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores `order` under its id. An id that is already present fails with
    /// [`OrderError::DuplicateKey`] and the existing order is kept.
    #[instrument(skip(self, order), fields(order_id = %order.id()))]
    pub async fn insert(&self, order: Order) -> Result<(), OrderError> {
        debug!("Sending insert to actor");
        self.inner.insert(order).await.map_err(Self::map_error)
    }
}

impl ActorClient<Order> for OrderStore {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::DuplicateKey(id) => OrderError::DuplicateKey(id),
            other => OrderError::Internal(format!("Order store unavailable: {other}")),
        }
    }
}
