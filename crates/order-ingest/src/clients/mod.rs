//! Type-safe wrappers around [`ResourceClient`](resource_actor::ResourceClient).

pub mod order_store;

pub use order_store::*;
