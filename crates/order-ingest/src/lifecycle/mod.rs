//! # System Lifecycle
//!
//! Starting, wiring and stopping the order pipeline.
//!
//! [`OrderSystem`] spawns the store actor, builds the [`OrderService`](crate::service::OrderService)
//! on top of it and keeps the task handle for a graceful shutdown. [`SystemConfig`] carries
//! the tunables, and [`setup_tracing`] installs the log subscriber for binaries.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the store actor's channel closes once the last
//!    `OrderService` clone is gone
//! 2. **Actor drains** - `receiver.recv()` returns `None` and the loop logs the final size
//! 3. **Await completion** - a panicked actor task is reported as an error

pub mod config;
pub mod order_system;
pub mod tracing;

pub use config::*;
pub use order_system::*;
pub use self::tracing::*;
