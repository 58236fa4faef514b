//! The pure listing and detail query engine.
//!
//! Every operation takes the catalog as an explicit value and returns fresh
//! collections; nothing here touches shared state, performs I/O, or mutates
//! a plan record. The async boundary (latency, load failures) lives in
//! [`service`](super::service).

use std::cmp::Ordering;

use serde::Serialize;

use super::filter::{PageRequest, PlanFilter, PlanPage, SortBy};
use super::plan::{Plan, PlanCatalog};

/// A plan resolved for a detail view, with its related plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDetail {
    pub plan: Plan,
    /// Other plans sharing the same phase, in base catalog order.
    pub related: Vec<Plan>,
}

/// Stateless query engine over a [`PlanCatalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogEngine {
    related_limit: usize,
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self { related_limit: 3 }
    }
}

impl CatalogEngine {
    /// Engine with the default related-plans cap of 3.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the related-plans cap.
    #[must_use]
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    /// Run a listing query: filter, then sort, then paginate.
    ///
    /// `total` reflects the filtered count before slicing; an out-of-range
    /// page yields an empty or partial page, never an error. The returned
    /// items are clones, so callers can hold them without aliasing the
    /// catalog.
    #[must_use]
    pub fn query(
        &self,
        catalog: &PlanCatalog,
        filter: &PlanFilter,
        page: &PageRequest,
    ) -> PlanPage {
        let mut matched: Vec<Plan> = catalog
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        if let Some(sort) = filter.sort {
            // Vec::sort_by is stable, so ties keep their filtered-set order.
            matched.sort_by(|a, b| sort.order.apply(compare_plans(a, b, sort.by)));
        }

        let total = matched.len();
        let items: Vec<Plan> = matched
            .into_iter()
            .skip(page.offset())
            .take(page.per_page as usize)
            .collect();

        PlanPage {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        }
    }

    /// Resolve a plan by id together with its related plans.
    ///
    /// Related plans share the same phase (two uncategorized plans count as
    /// sharing one), exclude the plan itself, keep base catalog order, and
    /// are capped at the configured limit.
    #[must_use]
    pub fn detail(&self, catalog: &PlanCatalog, plan_id: &str) -> Option<PlanDetail> {
        let plan = catalog.get(plan_id)?.clone();
        let related: Vec<Plan> = catalog
            .iter()
            .filter(|p| p.id != plan.id && p.phase == plan.phase)
            .take(self.related_limit)
            .cloned()
            .collect();

        Some(PlanDetail { plan, related })
    }
}

/// Ascending comparator for the catalog listing.
///
/// Price compares the raw field with no free-plan special casing; the
/// free-plans-first policy applies only to comparison-view columns (see
/// [`compare::order_columns`](super::compare::order_columns)). Name compares
/// case-insensitively; the platform's locale tables are a rendering concern.
fn compare_plans(a: &Plan, b: &Plan, by: SortBy) -> Ordering {
    match by {
        SortBy::Price => a.price.cmp(&b.price),
        SortBy::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortBy::Popularity => a.popularity_score().cmp(&b.popularity_score()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::filter::{PlanSort, SortOrder};
    use crate::catalog::plan::PlanPhase;

    fn catalog() -> PlanCatalog {
        PlanCatalog::from_buckets(
            vec![
                Plan::builder("starter", "Starter Care")
                    .price(0)
                    .phase(PlanPhase::Operate)
                    .build(),
                Plan::builder("business", "Business IT")
                    .description("Managed IT for growing businesses")
                    .price(2500)
                    .phase(PlanPhase::Operate)
                    .feature("Cloud Backup Solutions", true)
                    .popular()
                    .build(),
            ],
            vec![
                Plan::builder("shield", "Shield Essentials")
                    .price(1500)
                    .phase(PlanPhase::Secure)
                    .recommended()
                    .build(),
                Plan::builder("fortress", "Fortress Complete")
                    .price(4900)
                    .phase(PlanPhase::Secure)
                    .build(),
            ],
            vec![Plan::builder("launchpad", "Launchpad")
                .price(7500)
                .phase(PlanPhase::Accelerate)
                .build()],
        )
    }

    #[test]
    fn test_query_open_filter_keeps_base_order() {
        let page = CatalogEngine::new().query(
            &catalog(),
            &PlanFilter::unfiltered(),
            &PageRequest::new(1, 10),
        );
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["starter", "business", "shield", "fortress", "launchpad"]);
        assert_eq!(page.total, 5);
    }

    #[test]
    fn test_query_phase_filter() {
        let filter = PlanFilter {
            phase: Some(PlanPhase::Secure),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        assert_eq!(page.total, 2);
        assert!(page.items.iter().all(|p| p.phase == Some(PlanPhase::Secure)));
    }

    #[test]
    fn test_query_search_reaches_feature_text() {
        let filter = PlanFilter {
            search: Some("backup".to_string()),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, "business");
    }

    #[test]
    fn test_query_sort_price_asc_is_plain_numeric() {
        let filter = PlanFilter {
            sort: Some(PlanSort::asc(SortBy::Price)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        let prices: Vec<i64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![0, 1500, 2500, 4900, 7500]);
    }

    #[test]
    fn test_query_sort_price_desc_has_no_free_first_rule() {
        // The catalog comparator must NOT pin free plans first: plain
        // numeric descending puts the zero-price plan last.
        let filter = PlanFilter {
            sort: Some(PlanSort::desc(SortBy::Price)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        let prices: Vec<i64> = page.items.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![7500, 4900, 2500, 1500, 0]);
    }

    #[test]
    fn test_query_sort_name() {
        let filter = PlanFilter {
            sort: Some(PlanSort::asc(SortBy::Name)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Business IT",
                "Fortress Complete",
                "Launchpad",
                "Shield Essentials",
                "Starter Care"
            ]
        );
    }

    #[test]
    fn test_query_sort_popularity() {
        // Scores: business=2 (popular), shield=3 (recommended), others=0.
        let filter = PlanFilter {
            sort: Some(PlanSort::desc(SortBy::Popularity)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        assert_eq!(page.items[0].id, "shield");
        assert_eq!(page.items[1].id, "business");

        // Ascending inverts the same comparator; zero-score plans lead in
        // their stable base order.
        let filter = PlanFilter {
            sort: Some(PlanSort::asc(SortBy::Popularity)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog(), &filter, &PageRequest::default());
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["starter", "fortress", "launchpad", "business", "shield"]);
    }

    #[test]
    fn test_query_sort_stability_on_ties() {
        let catalog = PlanCatalog::from_plans(vec![
            Plan::builder("a", "Alpha").price(100).build(),
            Plan::builder("b", "Bravo").price(100).build(),
            Plan::builder("c", "Charlie").price(50).build(),
        ]);
        let filter = PlanFilter {
            sort: Some(PlanSort::asc(SortBy::Price)),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&catalog, &filter, &PageRequest::default());
        let ids: Vec<&str> = page.items.iter().map(|p| p.id.as_str()).collect();
        // Equal prices keep their filtered-set order
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_query_pagination_slices() {
        let engine = CatalogEngine::new();
        let filter = PlanFilter::unfiltered();

        let page1 = engine.query(&catalog(), &filter, &PageRequest::new(1, 2));
        assert_eq!(page1.items.len(), 2);
        assert_eq!(page1.total, 5);

        let page3 = engine.query(&catalog(), &filter, &PageRequest::new(3, 2));
        assert_eq!(page3.items.len(), 1);
        assert_eq!(page3.total, 5);

        // Out of range yields an empty page, not an error
        let page9 = engine.query(&catalog(), &filter, &PageRequest::new(9, 2));
        assert!(page9.items.is_empty());
        assert_eq!(page9.total, 5);
    }

    #[test]
    fn test_query_does_not_mutate_catalog() {
        let cat = catalog();
        let before = cat.clone();
        let filter = PlanFilter {
            sort: Some(PlanSort::desc(SortBy::Price)),
            ..PlanFilter::unfiltered()
        };
        let _ = CatalogEngine::new().query(&cat, &filter, &PageRequest::default());
        assert_eq!(cat, before);
    }

    #[test]
    fn test_detail_related_same_phase_capped() {
        let cat = PlanCatalog::from_plans(vec![
            Plan::builder("s1", "S1").phase(PlanPhase::Secure).build(),
            Plan::builder("s2", "S2").phase(PlanPhase::Secure).build(),
            Plan::builder("s3", "S3").phase(PlanPhase::Secure).build(),
            Plan::builder("s4", "S4").phase(PlanPhase::Secure).build(),
            Plan::builder("s5", "S5").phase(PlanPhase::Secure).build(),
            Plan::builder("o1", "O1").phase(PlanPhase::Operate).build(),
        ]);

        let detail = CatalogEngine::new().detail(&cat, "s3").unwrap();
        assert_eq!(detail.plan.id, "s3");
        // Capped at 3, excludes the plan itself, base order preserved
        let ids: Vec<&str> = detail.related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s4"]);
    }

    #[test]
    fn test_detail_uncategorized_plans_relate_to_each_other() {
        let cat = PlanCatalog::from_plans(vec![
            Plan::builder("u1", "U1").build(),
            Plan::builder("u2", "U2").build(),
            Plan::builder("p1", "P1").phase(PlanPhase::Operate).build(),
        ]);

        let detail = CatalogEngine::new().detail(&cat, "u1").unwrap();
        let ids: Vec<&str> = detail.related.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["u2"]);
    }

    #[test]
    fn test_detail_unknown_plan_is_none() {
        assert!(CatalogEngine::new().detail(&catalog(), "no-such-plan").is_none());
    }

    #[test]
    fn test_coming_soon_plans_stay_listed() {
        let cat = PlanCatalog::from_plans(vec![
            Plan::builder("live", "Live").build(),
            Plan::builder("soon", "Soon").coming_soon().build(),
        ]);
        let page =
            CatalogEngine::new().query(&cat, &PlanFilter::unfiltered(), &PageRequest::default());
        assert_eq!(page.total, 2);
        let soon = page.items.iter().find(|p| p.id == "soon").unwrap();
        assert!(!soon.is_purchasable());
    }

    #[test]
    fn test_query_idempotent() {
        let cat = catalog();
        let filter = PlanFilter {
            search: Some("i".to_string()),
            sort: Some(PlanSort {
                by: SortBy::Popularity,
                order: SortOrder::Desc,
            }),
            ..PlanFilter::default()
        };
        let page = PageRequest::new(1, 3);

        let first = CatalogEngine::new().query(&cat, &filter, &page);
        let second = CatalogEngine::new().query(&cat, &filter, &page);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_feature_not_included_still_matches() {
        // Search matches on feature text regardless of the included flag;
        // filtering is about presence of the words, not entitlement.
        let cat = PlanCatalog::from_plans(vec![Plan::builder("p", "P")
            .feature("Disaster Recovery Planning", false)
            .build()]);
        let filter = PlanFilter {
            search: Some("disaster".to_string()),
            ..PlanFilter::unfiltered()
        };
        let page = CatalogEngine::new().query(&cat, &filter, &PageRequest::default());
        assert_eq!(page.total, 1);
    }
}
