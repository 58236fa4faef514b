//! Catalog data sources.
//!
//! A [`CatalogSource`] hands back the full plan collection on demand. Calls
//! are independent, idempotent, and side-effect-free on the catalog, so a
//! real backend can be substituted later without touching the engine. The
//! in-memory source simulates upstream latency; failure-simulating doubles
//! for exercising the degradation path live in [`test`].

use async_trait::async_trait;

use crate::error::Result;

use super::latency::SimulatedLatency;
use super::plan::PlanCatalog;

/// Trait for resolving the full plan collection.
///
/// Implement this to back the catalog with a real service. An in-memory
/// implementation is provided, plus failing doubles for tests.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load a snapshot of the full catalog.
    async fn load_catalog(&self) -> Result<PlanCatalog>;
}

/// In-memory catalog source with simulated upstream latency.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    catalog: PlanCatalog,
    latency: SimulatedLatency,
}

impl StaticCatalogSource {
    /// Source over the given catalog with the default 300–800 ms latency.
    #[must_use]
    pub fn new(catalog: PlanCatalog) -> Self {
        Self {
            catalog,
            latency: SimulatedLatency::default(),
        }
    }

    /// Source with explicit latency. Pass [`SimulatedLatency::none`] in
    /// tests.
    #[must_use]
    pub fn with_latency(catalog: PlanCatalog, latency: SimulatedLatency) -> Self {
        Self { catalog, latency }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load_catalog(&self) -> Result<PlanCatalog> {
        self.latency.wait().await;
        Ok(self.catalog.clone())
    }
}

/// Failure-simulating sources for testing the degradation path.
#[cfg(any(test, feature = "test-catalog"))]
pub mod test {
    use super::*;
    use crate::catalog::error::CatalogError;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// A source that always fails, simulating an unreachable upstream.
    #[derive(Debug, Default)]
    pub struct FailingCatalogSource {
        reason: String,
    }

    impl FailingCatalogSource {
        #[must_use]
        pub fn new(reason: impl Into<String>) -> Self {
            Self {
                reason: reason.into(),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FailingCatalogSource {
        async fn load_catalog(&self) -> Result<PlanCatalog> {
            Err(CatalogError::SourceUnavailable {
                reason: self.reason.clone(),
            }
            .into())
        }
    }

    /// A source that fails a fixed number of times before succeeding.
    pub struct FlakyCatalogSource {
        catalog: PlanCatalog,
        failures_remaining: AtomicU32,
    }

    impl FlakyCatalogSource {
        #[must_use]
        pub fn new(catalog: PlanCatalog, failures: u32) -> Self {
            Self {
                catalog,
                failures_remaining: AtomicU32::new(failures),
            }
        }
    }

    #[async_trait]
    impl CatalogSource for FlakyCatalogSource {
        async fn load_catalog(&self) -> Result<PlanCatalog> {
            let remaining = self.failures_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures_remaining.store(remaining - 1, Ordering::SeqCst);
                return Err(CatalogError::SourceUnavailable {
                    reason: "simulated transient failure".to_string(),
                }
                .into());
            }
            Ok(self.catalog.clone())
        }
    }
}
