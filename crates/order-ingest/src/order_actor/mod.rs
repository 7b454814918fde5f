//! Order store: entity implementation, errors and the actor factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderStore;
use crate::model::Order;
use resource_actor::ResourceActor;

/// Default capacity of the store's request channel.
pub const STORE_BUFFER_SIZE: usize = 32;

/// Creates a new Order store actor and the client that talks to it.
///
/// The actor does nothing until its `run()` future is spawned.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderStore) {
    let (actor, generic_client) = ResourceActor::new(buffer_size.max(1));
    (actor, OrderStore::new(generic_client))
}
