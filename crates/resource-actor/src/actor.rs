//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the task that owns an entity store and
//! processes requests against it one at a time.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in a loop, so the `store` needs no `Mutex`
/// or `RwLock`. Any number of cloned clients may send concurrently; the channel
/// serializes them.
///
/// An item becomes visible in a single `HashMap` insert while no other request is
/// running, so a `Get` racing an `Insert` for the same key sees either nothing or the
/// fully built item.
///
/// ```rust
/// use resource_actor::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)]
/// struct Ticket { id: u32 }
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Ticket>::new(10);
///     tokio::spawn(actor.run());
///
///     client.insert(Ticket { id: 7 }).await.unwrap();
///     assert!(client.get(7).await.unwrap().is_some());
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel and must be non-zero. When the
    /// channel is full, client calls wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // Extract just the type name (e.g., "Order" instead of "order_ingest::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Insert { item, respond_to } => {
                    debug!(entity_type, ?item, "Insert");
                    match self.store.entry(item.id().clone()) {
                        Entry::Occupied(existing) => {
                            let id = existing.key().to_string();
                            warn!(entity_type, %id, "Duplicate key");
                            let _ = respond_to.send(Err(FrameworkError::DuplicateKey(id)));
                        }
                        Entry::Vacant(slot) => {
                            let id = slot.key().clone();
                            slot.insert(item);
                            info!(entity_type, %id, size = self.store.len(), "Inserted");
                            let _ = respond_to.send(Ok(()));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Len { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Note {
        id: String,
        body: String,
    }

    impl ActorEntity for Note {
        type Id = String;

        fn id(&self) -> &String {
            &self.id
        }
    }

    fn note(id: &str, body: &str) -> Note {
        Note {
            id: id.to_string(),
            body: body.to_string(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_insert_keeps_first_item() {
        let (actor, client) = ResourceActor::new(4);
        tokio::spawn(actor.run());

        client.insert(note("n1", "first")).await.unwrap();
        let err = client.insert(note("n1", "second")).await.unwrap_err();
        assert_eq!(err, FrameworkError::DuplicateKey("n1".to_string()));

        let stored = client.get("n1".to_string()).await.unwrap().unwrap();
        assert_eq!(stored.body, "first");
        assert_eq!(client.len().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_run_returns_when_clients_dropped() {
        let (actor, client) = ResourceActor::<Note>::new(4);
        let handle = tokio::spawn(actor.run());

        client.insert(note("n1", "body")).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
