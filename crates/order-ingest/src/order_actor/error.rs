//! Error types for the order pipeline.

use crate::model::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// `Validation` and `NotFound` are ordinary outcomes reported to the caller.
/// `DuplicateKey` only travels between the store and the service, which retries once
/// before turning it into `Internal`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order data provided is invalid. Nothing was stored or counted.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// No order exists under this id.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The store already holds an order under this id.
    #[error("Duplicate order id: {0}")]
    DuplicateKey(String),

    /// Unexpected failure: store unavailable, repeated id collision, crashed task.
    #[error("Internal order error: {0}")]
    Internal(String),
}
