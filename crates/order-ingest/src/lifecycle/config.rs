//! Runtime configuration for an [`OrderSystem`](super::OrderSystem).

use crate::metrics::DEFAULT_VALUE_BUCKETS;
use crate::order_actor::STORE_BUFFER_SIZE;
use serde::Deserialize;

/// Tunables for the order pipeline.
///
/// Every field has a default, so a partial document such as `{"channel_capacity": 64}`
/// is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Capacity of the store actor's request channel. Zero is treated as one.
    pub channel_capacity: usize,
    /// Upper bounds of the `order_value_amount` buckets.
    pub value_buckets: Vec<f64>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: STORE_BUFFER_SIZE,
            value_buckets: DEFAULT_VALUE_BUCKETS.to_vec(),
        }
    }
}

impl SystemConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
