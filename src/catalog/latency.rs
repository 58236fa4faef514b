//! Injectable simulated latency for in-memory catalog sources.
//!
//! Stands in for network round-trip time until a real backend is wired up.
//! Tests construct [`SimulatedLatency::none`] and pay nothing.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Latency bounds in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatencyConfig {
    #[serde(default = "default_min_ms")]
    pub min_ms: u64,
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            min_ms: default_min_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_min_ms() -> u64 {
    300
}

fn default_max_ms() -> u64 {
    800
}

/// A bounded random wait applied before a source call returns.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    bounds: Option<(u64, u64)>,
}

impl SimulatedLatency {
    /// Latency drawn uniformly from `[min_ms, max_ms]`.
    ///
    /// Reversed bounds are normalized rather than rejected.
    #[must_use]
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self {
            bounds: Some((min_ms.min(max_ms), min_ms.max(max_ms))),
        }
    }

    /// No delay at all. The zero-cost choice for tests.
    #[must_use]
    pub fn none() -> Self {
        Self { bounds: None }
    }

    /// Latency from configuration bounds.
    #[must_use]
    pub fn from_config(config: &LatencyConfig) -> Self {
        Self::new(config.min_ms, config.max_ms)
    }

    /// Whether this latency ever sleeps.
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.bounds.is_none()
    }

    /// Wait out one simulated round trip.
    pub async fn wait(&self) {
        if let Some((min, max)) = self.bounds {
            let ms = rand::thread_rng().gen_range(min..=max);
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

impl Default for SimulatedLatency {
    fn default() -> Self {
        Self::from_config(&LatencyConfig::default())
    }
}
