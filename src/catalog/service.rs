//! The caller-facing async catalog API.
//!
//! Wraps a [`CatalogSource`] and the pure [`CatalogEngine`]. Every
//! operation re-derives its answer from a fresh catalog snapshot; nothing
//! is written back. When the source fails, operations log the failure,
//! emit a [`CatalogNotice`] through the notifier, and degrade to an empty
//! result: a load failure renders as "no plans found", never as an
//! unhandled error reaching the caller's caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoreline::catalog::{
//!     CatalogService, PageRequest, PlanFilter, StaticCatalogSource, TracingNotifier,
//! };
//!
//! let source = StaticCatalogSource::new(shoreline::catalog::seed::demo_catalog());
//! let service = CatalogService::new(source, TracingNotifier);
//!
//! let page = service.plans(&PlanFilter::default(), &PageRequest::default()).await;
//! for plan in &page.items {
//!     println!("{}: {}", plan.name, plan.formatted_price());
//! }
//! ```

use crate::config::CatalogConfig;

use super::compare::ComparisonMatrix;
use super::engine::{CatalogEngine, PlanDetail};
use super::filter::{PageRequest, PlanFilter, PlanPage};
use super::notify::{CatalogNotice, CatalogNotifier};
use super::source::CatalogSource;

/// Async catalog query service over a source and notifier.
pub struct CatalogService<S: CatalogSource, N: CatalogNotifier> {
    source: S,
    notifier: N,
    engine: CatalogEngine,
}

impl<S: CatalogSource, N: CatalogNotifier> CatalogService<S, N> {
    /// Create a service with the default engine configuration.
    #[must_use]
    pub fn new(source: S, notifier: N) -> Self {
        Self {
            source,
            notifier,
            engine: CatalogEngine::new(),
        }
    }

    /// Create a service configured from [`CatalogConfig`].
    #[must_use]
    pub fn with_config(source: S, notifier: N, config: &CatalogConfig) -> Self {
        Self {
            source,
            notifier,
            engine: CatalogEngine::new().with_related_limit(config.related_limit),
        }
    }

    /// Run a listing query against a fresh catalog snapshot.
    ///
    /// Degrades to an empty page when the source fails.
    pub async fn plans(&self, filter: &PlanFilter, page: &PageRequest) -> PlanPage {
        match self.source.load_catalog().await {
            Ok(catalog) => self.engine.query(&catalog, filter, page),
            Err(err) => {
                self.degrade("plans", &err).await;
                PlanPage::empty(page)
            }
        }
    }

    /// Resolve a plan and its related plans for a detail view.
    ///
    /// Returns `None` both for an unknown plan id and for the degraded
    /// path; the emitted notice distinguishes the two for observers.
    pub async fn plan_detail(&self, plan_id: &str) -> Option<PlanDetail> {
        match self.source.load_catalog().await {
            Ok(catalog) => self.engine.detail(&catalog, plan_id),
            Err(err) => {
                self.degrade("plan_detail", &err).await;
                None
            }
        }
    }

    /// Build the feature comparison matrix for a selection of plan ids.
    ///
    /// Unknown ids are skipped; selection order is preserved. Degrades to
    /// an empty matrix when the source fails.
    pub async fn comparison(&self, plan_ids: &[&str]) -> ComparisonMatrix {
        match self.source.load_catalog().await {
            Ok(catalog) => ComparisonMatrix::build(&catalog.select(plan_ids)),
            Err(err) => {
                self.degrade("comparison", &err).await;
                ComparisonMatrix::build(&[])
            }
        }
    }

    async fn degrade(&self, operation: &str, err: &crate::error::ShorelineError) {
        tracing::error!(
            target: "shoreline::catalog",
            operation = operation,
            error = %err,
            "catalog load failed, degrading to empty result"
        );
        self.notifier
            .notify(CatalogNotice::LoadFailed {
                operation: operation.to_string(),
                reason: err.to_string(),
            })
            .await;
    }
}
