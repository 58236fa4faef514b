//! User-facing notices for degraded catalog operations.
//!
//! When a source fails, the service degrades to an empty result instead of
//! propagating the failure; the notice is how that degradation stays
//! observable. Wire [`TracingNotifier`] for log-only surfacing or implement
//! [`CatalogNotifier`] to push into a toast/alert channel.

use std::fmt;

/// Notice emitted when an operation degrades.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogNotice {
    /// The catalog could not be loaded; the operation returned empty data.
    LoadFailed { operation: String, reason: String },
}

impl fmt::Display for CatalogNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadFailed { operation, reason } => {
                write!(f, "Could not load plans for {}: {}", operation, reason)
            }
        }
    }
}

/// Trait for notice delivery backends.
///
/// Implementations should handle failures gracefully to avoid disrupting
/// query operations.
#[allow(async_fn_in_trait)]
pub trait CatalogNotifier: Send + Sync {
    /// Deliver a notice.
    async fn notify(&self, notice: CatalogNotice);
}

/// No-op notifier that does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpNotifier;

impl CatalogNotifier for NoOpNotifier {
    async fn notify(&self, _notice: CatalogNotice) {
        // No-op
    }
}

/// Tracing-based notifier.
///
/// Emits notices using the `tracing` crate at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl CatalogNotifier for TracingNotifier {
    async fn notify(&self, notice: CatalogNotice) {
        tracing::warn!(
            target: "shoreline::catalog",
            notice_kind = %notice_kind(&notice),
            "{}", notice
        );
    }
}

fn notice_kind(notice: &CatalogNotice) -> &'static str {
    match notice {
        CatalogNotice::LoadFailed { .. } => "load_failed",
    }
}

/// Recording notifier for asserting on notices in tests.
#[cfg(any(test, feature = "test-catalog"))]
pub mod test {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    /// Captures every notice it receives.
    #[derive(Default, Clone)]
    pub struct RecordingNotifier {
        notices: Arc<Mutex<Vec<CatalogNotice>>>,
    }

    impl RecordingNotifier {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn notices(&self) -> Vec<CatalogNotice> {
            self.notices.lock().await.clone()
        }
    }

    impl CatalogNotifier for RecordingNotifier {
        async fn notify(&self, notice: CatalogNotice) {
            self.notices.lock().await.push(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test::RecordingNotifier;
    use super::*;

    #[tokio::test]
    async fn test_noop_notifier() {
        let notifier = NoOpNotifier;
        notifier
            .notify(CatalogNotice::LoadFailed {
                operation: "plans".to_string(),
                reason: "timeout".to_string(),
            })
            .await;
        // Just verifies it doesn't panic
    }

    #[tokio::test]
    async fn test_recording_notifier_captures() {
        let notifier = RecordingNotifier::new();
        notifier
            .notify(CatalogNotice::LoadFailed {
                operation: "plans".to_string(),
                reason: "timeout".to_string(),
            })
            .await;

        let notices = notifier.notices().await;
        assert_eq!(notices.len(), 1);
        assert!(matches!(notices[0], CatalogNotice::LoadFailed { .. }));
    }

    #[test]
    fn test_notice_display() {
        let notice = CatalogNotice::LoadFailed {
            operation: "plan_detail".to_string(),
            reason: "connection refused".to_string(),
        };
        let display = format!("{}", notice);
        assert!(display.contains("plan_detail"));
        assert!(display.contains("connection refused"));
    }
}
