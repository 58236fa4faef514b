//! Shoreline - a plan catalog engine for SaaS pricing pages
//!
//! Shoreline takes a read-only collection of subscription plans and answers
//! the three questions every pricing surface asks: which plans match a
//! filter (sorted and paginated), what belongs on a plan's detail view
//! (including related plans), and how a selection of plans compares
//! feature-by-feature.
//!
//! # Features
//!
//! - **Listing queries**: composable filters, three sort keys, pagination
//! - **Detail lookups**: plan by id plus phase-related plans
//! - **Comparison**: categorized feature matrix with difference detection
//! - **Async boundary**: pluggable catalog sources with simulated latency,
//!   degrading gracefully to empty results on load failure
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use shoreline::catalog::{
//!     seed, CatalogService, PageRequest, PlanFilter, StaticCatalogSource, TracingNotifier,
//! };
//!
//! #[tokio::main]
//! async fn main() {
//!     // Initialize logging
//!     shoreline::init_tracing();
//!
//!     let source = StaticCatalogSource::new(seed::demo_catalog());
//!     let service = CatalogService::new(source, TracingNotifier);
//!
//!     let page = service
//!         .plans(&PlanFilter::default(), &PageRequest::default())
//!         .await;
//!     println!("{} plans match", page.total);
//! }
//! ```

#![allow(async_fn_in_trait)] // notifier traits keep Send/Sync bounds at the impl

pub mod catalog;
mod config;
mod error;

// Re-exports for public API
pub use config::CatalogConfig;
pub use error::{ErrorBody, Result, ShorelineError};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging with sensible defaults
///
/// Call this early, typically in main() before constructing a service.
///
/// # Environment Variables
///
/// - `RUST_LOG`: Set log level (e.g., "info", "debug", "shoreline=debug")
/// - `SHORELINE_LOG_JSON`: Set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("SHORELINE_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
