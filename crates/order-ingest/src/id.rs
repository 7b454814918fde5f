//! Order identifier generation.

use crate::model::OrderId;
use uuid::Uuid;

/// Source of fresh order identifiers.
///
/// Any `Fn() -> OrderId` closure is a generator too, which keeps scripted ids in tests short.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> OrderId;
}

/// Random 128-bit identifiers (UUID v4) in 32-character lowercase hex.
///
/// Uniqueness is probabilistic: 122 random bits make a collision negligible, not
/// impossible, which is why the store still rejects duplicate keys. A failing entropy
/// source panics inside `uuid`; there is no recovery from that.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn next_id(&self) -> OrderId {
        OrderId::from(Uuid::new_v4().simple().to_string())
    }
}

impl<F> IdGenerator for F
where
    F: Fn() -> OrderId + Send + Sync,
{
    fn next_id(&self) -> OrderId {
        self()
    }
}
