//! # Order Ingest
//!
//! In-process order ingestion and retrieval with metrics recorded at the point of creation.
//!
//! ## Module Tour
//!
//! - **[`model`]**: [`Order`](model::Order), [`OrderView`](model::OrderView),
//!   [`CreateOrder`](model::CreateOrder) and the opaque [`OrderId`](model::OrderId).
//! - **[`id`]**: [`IdGenerator`](id::IdGenerator) and the random
//!   [`UuidGenerator`](id::UuidGenerator).
//! - **[`metrics`]**: [`MetricsRecorder`](metrics::MetricsRecorder) with the
//!   `orders_created_total` counter and the `order_value_amount` distribution.
//! - **[`order_actor`]** / **[`clients`]**: the order store. A
//!   [`ResourceActor`](resource_actor::ResourceActor) owns every order; the
//!   [`OrderStore`](clients::OrderStore) client inserts and fetches copies.
//! - **[`service`]**: [`OrderService`](service::OrderService), the create/get entry points
//!   a transport front end calls.
//! - **[`lifecycle`]**: [`OrderSystem`](lifecycle::OrderSystem) wiring, configuration and
//!   tracing setup.
//!
//! HTTP routing, API documentation and the metrics exporter are not part of this crate.
//! A front end calls [`OrderService`](service::OrderService) directly and an exporter reads
//! [`MetricsRecorder::snapshot`](metrics::MetricsRecorder::snapshot) (or installs a
//! recorder for the `metrics` facade).
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-ingest -- --orders 10
//! ```

pub mod clients;
pub mod id;
pub mod lifecycle;
pub mod metrics;
pub mod model;
pub mod order_actor;
pub mod service;
