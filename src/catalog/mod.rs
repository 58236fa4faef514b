//! Plan catalog engine: listing queries, detail lookups, and side-by-side
//! comparison over an immutable plan collection.
//!
//! The catalog is a value, not a singleton: construct a [`PlanCatalog`]
//! (or use [`seed::demo_catalog`]), hand it to a source, and query through
//! [`CatalogService`], or call the pure [`CatalogEngine`] directly when no
//! async boundary is wanted.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoreline::catalog::{
//!     CatalogService, PageRequest, PlanFilter, PlanPhase, PlanSort, SortBy,
//!     StaticCatalogSource, TracingNotifier, seed,
//! };
//!
//! let source = StaticCatalogSource::new(seed::demo_catalog());
//! let service = CatalogService::new(source, TracingNotifier);
//!
//! let filter = PlanFilter {
//!     phase: Some(PlanPhase::Secure),
//!     sort: Some(PlanSort::asc(SortBy::Price)),
//!     ..PlanFilter::default()
//! };
//! let page = service.plans(&filter, &PageRequest::default()).await;
//! ```

pub mod compare;
pub mod engine;
pub mod error;
pub mod filter;
pub mod latency;
pub mod notify;
pub mod plan;
pub mod seed;
pub mod service;
pub mod source;
pub mod validation;

// Plan exports
pub use plan::{
    BillingInterval, Plan, PlanBuilder, PlanCatalog, PlanFeature, PlanPhase, DEFAULT_CURRENCY,
};

// Filter exports
pub use filter::{PageRequest, PlanFilter, PlanPage, PlanSort, SortBy, SortOrder};

// Engine exports
pub use engine::{CatalogEngine, PlanDetail};

// Comparison exports
pub use compare::{
    categorize, order_columns, CategoryRule, ComparisonMatrix, FeatureCell, FeatureRow,
    CATEGORY_RULES, OTHER_CATEGORY,
};

// Source exports
pub use source::{CatalogSource, StaticCatalogSource};

// Latency exports
pub use latency::{LatencyConfig, SimulatedLatency};

// Service exports
pub use service::CatalogService;

// Notification exports
pub use notify::{CatalogNotice, CatalogNotifier, NoOpNotifier, TracingNotifier};

// Validation exports
pub use validation::{validate_filter, validate_page, validate_query};

// Error exports
pub use error::CatalogError;

// Test exports
#[cfg(any(test, feature = "test-catalog"))]
pub use source::test::{FailingCatalogSource, FlakyCatalogSource};

#[cfg(any(test, feature = "test-catalog"))]
pub use notify::test::RecordingNotifier;
