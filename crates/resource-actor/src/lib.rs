//! # Resource Actor
//!
//! A small, generic, append-only entity store that lives inside a single Tokio task.
//!
//! Shared mutable maps behind a lock are the usual way to give many request handlers
//! access to one collection. This crate takes the actor route instead: one task owns the
//! `HashMap`, and every caller talks to it through a cloneable [`ResourceClient`] that
//! sends a message and awaits a oneshot reply.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]) - the record type and the key it is stored under
//! 2. **Runtime** ([`ResourceActor`]) - the message loop that owns the store
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]) - type-safe, async access
//!
//! ## Guarantees
//!
//! - Inserts never overwrite: a second insert for a key fails with
//!   [`FrameworkError::DuplicateKey`].
//! - Items are published whole. A concurrent reader sees either no item or the complete one.
//! - Reads return clones; callers never hold a reference into the store.
//! - A missing key is `Ok(None)`, not an error.
//!
//! ## Testing
//!
//! The [`mock`] module provides a [`MockClient`](mock::MockClient) that answers requests
//! from a queue of expectations, so code built on a `ResourceClient` can be tested without
//! a real actor and with injected failures.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
