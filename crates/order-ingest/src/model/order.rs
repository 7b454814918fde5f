use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque order identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents one ingested order.
///
/// # Actor Framework
/// This struct implements [`ActorEntity`](resource_actor::ActorEntity), keyed by its
/// [`OrderId`], so it can be owned by a [`ResourceActor`](resource_actor::ResourceActor).
///
/// Fields are private and there are no setters: an `Order` never changes after
/// construction. Callers see it through [`OrderView`].
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    customer: String,
    amount: f64,
}

impl Order {
    /// Builds an order. Input is expected to be validated already; see
    /// [`OrderService::create`](crate::service::OrderService::create).
    pub fn new(id: OrderId, customer: impl Into<String>, amount: f64) -> Self {
        Self {
            id,
            customer: customer.into(),
            amount,
        }
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer(&self) -> &str {
        &self.customer
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

/// Externally visible projection of an [`Order`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub id: OrderId,
    pub customer: String,
    pub amount: f64,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            customer: order.customer,
            amount: order.amount,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrder {
    pub customer: String,
    pub amount: f64,
}

impl CreateOrder {
    pub fn new(customer: impl Into<String>, amount: f64) -> Self {
        Self {
            customer: customer.into(),
            amount,
        }
    }
}
