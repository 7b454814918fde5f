//! # ActorEntity Trait
//!
//! The contract a record type satisfies to be owned by a [`ResourceActor`](crate::ResourceActor).
//!
//! Entities are immutable once stored: the actor only ever inserts whole items and hands
//! out clones, so there are no update hooks here. Whatever a caller receives from
//! [`ResourceClient::get`](crate::ResourceClient::get) is a copy, never a handle into the store.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to be managed by `ResourceActor`.
///
/// # Example
///
/// ```rust
/// use resource_actor::ActorEntity;
///
/// #[derive(Clone, Debug)]
/// struct Ticket { id: u32, title: String }
///
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
/// ```
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique key for this entity (e.g., String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The key this entity is stored under.
    fn id(&self) -> &Self::Id;
}
