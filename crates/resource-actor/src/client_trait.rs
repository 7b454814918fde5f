//! # ActorClient Trait
//!
//! Common interface for domain-specific clients, adding default `get` and `len` methods
//! on top of a generic `ResourceClient` and translating framework errors into the
//! domain's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operations.
///
/// # Example
///
/// ```rust
/// use resource_actor::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
///
/// #[derive(Clone, Debug)]
/// struct Ticket { id: u32 }
/// impl ActorEntity for Ticket {
///     type Id = u32;
///     fn id(&self) -> &u32 { &self.id }
/// }
///
/// #[derive(Debug)]
/// struct TicketError(String);
///
/// struct TicketClient { inner: ResourceClient<Ticket> }
///
/// impl ActorClient<Ticket> for TicketClient {
///     type Error = TicketError;
///     fn inner(&self) -> &ResourceClient<Ticket> { &self.inner }
///     fn map_error(e: FrameworkError) -> TicketError { TicketError(e.to_string()) }
/// }
///
/// async fn usage(client: TicketClient) {
///     // get() and len() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.len().await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The domain-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id. An unknown id is `Ok(None)`, not an error.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Number of entities currently stored.
    #[tracing::instrument(skip(self))]
    async fn len(&self) -> Result<usize, Self::Error> {
        self.inner().len().await.map_err(Self::map_error)
    }
}
