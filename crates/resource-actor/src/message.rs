//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to the actor.
///
/// The store is append-only: items go in whole through `Insert` and come out as clones
/// through `Get`. `Len` reports the current store size and doubles as a liveness probe.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Insert {
        item: T,
        respond_to: Response<()>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Len {
        respond_to: Response<usize>,
    },
}
