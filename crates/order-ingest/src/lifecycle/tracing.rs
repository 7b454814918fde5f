//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. Module paths are hidden; the structured fields (`entity_type`,
//! `order_id`, `customer`, `amount`) carry the context instead.
//!
//! ```bash
//! RUST_LOG=info cargo run      # one line per created order
//! RUST_LOG=debug cargo run     # request payloads and store traffic
//! ```
//!
//! With `RUST_LOG=info` a create looks like:
//!
//! ```text
//! INFO Inserted entity_type="Order" id=6f1c... size=1
//! INFO create: Created order order_id=6f1c... amount=42.5 customer=alice
//! ```
//!
//! A lookup miss is logged at `warn` as `Order not found order_id=...`.

/// Installs the global subscriber. Call once, from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
