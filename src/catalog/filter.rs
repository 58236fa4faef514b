//! Listing query value objects: filter, sort, and pagination.
//!
//! All filter fields are optional; an absent field imposes no constraint.
//! The engine itself never validates these shapes (garbage in, garbage out,
//! but never a crash); callers that want fail-fast checks use
//! [`validation`](super::validation).

use serde::{Deserialize, Serialize};

use super::plan::{BillingInterval, Plan, PlanPhase};

/// Sort key for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    /// Numeric sort on the price field. No free-plan special casing; that
    /// policy belongs to the comparison view only.
    Price,
    /// Case-insensitive lexicographic sort on the plan name.
    Name,
    /// Sort on the derived popularity score.
    Popularity,
}

impl SortBy {
    /// Parse from a string. Returns `None` for unrecognized values; callers
    /// that pass `None` through leave the list in base catalog order.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "price" => Some(Self::Price),
            "name" => Some(Self::Name),
            "popularity" => Some(Self::Popularity),
            _ => None,
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Name => "name",
            Self::Popularity => "popularity",
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sort direction.
///
/// Ascending is the base convention for every sort key; `Desc` negates the
/// comparator result uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse from a string. Returns `None` for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    /// Apply the direction to an ascending comparator result.
    #[must_use]
    pub fn apply(&self, ord: std::cmp::Ordering) -> std::cmp::Ordering {
        match self {
            Self::Asc => ord,
            Self::Desc => ord.reverse(),
        }
    }
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Asc
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A sort key plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanSort {
    pub by: SortBy,
    #[serde(default)]
    pub order: SortOrder,
}

impl PlanSort {
    /// Ascending sort on the given key.
    #[must_use]
    pub fn asc(by: SortBy) -> Self {
        Self {
            by,
            order: SortOrder::Asc,
        }
    }

    /// Descending sort on the given key.
    #[must_use]
    pub fn desc(by: SortBy) -> Self {
        Self {
            by,
            order: SortOrder::Desc,
        }
    }
}

impl Default for PlanSort {
    fn default() -> Self {
        Self::asc(SortBy::Name)
    }
}

/// Filter criteria for a listing query.
///
/// Every field is optional; a plan is retained iff ALL set fields match.
/// `sort: None` leaves the filtered set in base catalog order (this is also
/// where an unrecognized sort key string ends up after [`SortBy::parse`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFilter {
    /// Exact phase match.
    #[serde(default)]
    pub phase: Option<PlanPhase>,
    /// Inclusive lower price bound.
    #[serde(default)]
    pub price_min: Option<i64>,
    /// Inclusive upper price bound.
    #[serde(default)]
    pub price_max: Option<i64>,
    /// Exact billing interval match.
    #[serde(default)]
    pub interval: Option<BillingInterval>,
    /// Case-insensitive substring search over name, description, and
    /// feature text.
    #[serde(default)]
    pub search: Option<String>,
    /// Sort to apply after filtering.
    #[serde(default = "default_sort")]
    pub sort: Option<PlanSort>,
}

fn default_sort() -> Option<PlanSort> {
    Some(PlanSort::default())
}

impl Default for PlanFilter {
    fn default() -> Self {
        Self {
            phase: None,
            price_min: None,
            price_max: None,
            interval: None,
            search: None,
            sort: default_sort(),
        }
    }
}

impl PlanFilter {
    /// An open filter that retains every plan, in base order.
    #[must_use]
    pub fn unfiltered() -> Self {
        Self {
            sort: None,
            ..Self::default()
        }
    }

    /// Whether a plan satisfies every set field.
    #[must_use]
    pub fn matches(&self, plan: &Plan) -> bool {
        if let Some(phase) = self.phase {
            if plan.phase != Some(phase) {
                return false;
            }
        }
        if let Some(min) = self.price_min {
            if plan.price < min {
                return false;
            }
        }
        if let Some(max) = self.price_max {
            if plan.price > max {
                return false;
            }
        }
        if let Some(interval) = self.interval {
            if plan.interval != interval {
                return false;
            }
        }
        if let Some(ref term) = self.search {
            if !plan.matches_search(term) {
                return false;
            }
        }
        true
    }
}

/// Pagination request for listing queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl PageRequest {
    /// Page request for the given page with the default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Page request with an explicit page size.
    #[must_use]
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Zero-based slice offset.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.per_page as usize
    }

    /// Validate pagination parameters.
    ///
    /// The engine never calls this; it exists for callers that want to
    /// reject nonsense before querying.
    pub fn validate(&self) -> Result<(), String> {
        if self.page == 0 {
            return Err("page must be >= 1".to_string());
        }
        if self.per_page == 0 || self.per_page > 100 {
            return Err("per_page must be between 1 and 100".to_string());
        }
        Ok(())
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanPage {
    /// The sliced page of plans. Always a fresh collection.
    pub items: Vec<Plan>,
    /// Count after filtering, before pagination.
    pub total: usize,
    /// Echo of the requested page.
    pub page: u32,
    /// Echo of the requested page size.
    pub per_page: u32,
}

impl PlanPage {
    /// An empty page for the given request. Used for the degraded path.
    #[must_use]
    pub fn empty(request: &PageRequest) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: request.page,
            per_page: request.per_page,
        }
    }

    /// Total number of pages for this result set.
    #[must_use]
    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        ((self.total as f64) / (self.per_page as f64)).ceil() as u32
    }

    /// Whether the filtered set matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
