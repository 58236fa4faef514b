use serde::{Deserialize, Serialize};

use crate::catalog::latency::LatencyConfig;

/// Main configuration for the catalog engine and its async boundary
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Simulated upstream latency applied by in-memory sources
    #[serde(default)]
    pub latency: LatencyConfig,

    /// Maximum number of related plans returned by a detail lookup
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Default page size for listing queries
    #[serde(default = "default_per_page")]
    pub default_per_page: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency: LatencyConfig::default(),
            related_limit: default_related_limit(),
            default_per_page: default_per_page(),
        }
    }
}

fn default_related_limit() -> usize {
    3
}

fn default_per_page() -> u32 {
    20
}
