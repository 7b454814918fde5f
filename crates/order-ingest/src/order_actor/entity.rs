//! [`ActorEntity`] implementation that lets [`Order`] live in a [`resource_actor::ResourceActor`].

use crate::model::{Order, OrderId};
use resource_actor::ActorEntity;

impl ActorEntity for Order {
    type Id = OrderId;

    fn id(&self) -> &OrderId {
        Order::id(self)
    }
}
