//! Plan records and the immutable catalog collection.
//!
//! A [`Plan`] is a read-only subscription plan record. The full set of plans
//! is carried as a [`PlanCatalog`], an ordered, immutable collection built
//! from three fixed buckets (basic, security, accelerate). The catalog is a
//! plain value handed to the engine operations, never an ambient singleton,
//! so tests can run against arbitrary fixtures.
//!
//! # Example
//!
//! ```rust,ignore
//! use shoreline::catalog::{Plan, PlanCatalog, PlanPhase, BillingInterval};
//!
//! let plan = Plan::builder("essential-care", "Essential Care")
//!     .description("Remote monitoring and helpdesk for small teams")
//!     .price(1500)
//!     .phase(PlanPhase::Operate)
//!     .feature("Remote Helpdesk Support", true)
//!     .feature("Monthly Health Reports", true)
//!     .popular()
//!     .build();
//!
//! let catalog = PlanCatalog::from_buckets(vec![plan], vec![], vec![]);
//! ```

use serde::{Deserialize, Serialize};

/// Default display currency for plan prices.
pub const DEFAULT_CURRENCY: &str = "R";

/// A single feature line on a plan.
///
/// Feature identity is the `text` field alone; two plans describing the same
/// capability with different wording are distinct features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanFeature {
    /// Human-readable feature description. Natural key for cross-plan matching.
    pub text: String,
    /// Whether the owning plan grants this feature.
    pub included: bool,
    /// Presentation emphasis flag, carried through unchanged.
    #[serde(default)]
    pub highlighted: bool,
}

impl PlanFeature {
    /// Create an included feature.
    #[must_use]
    pub fn included(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            included: true,
            highlighted: false,
        }
    }

    /// Create an excluded feature.
    #[must_use]
    pub fn excluded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            included: false,
            highlighted: false,
        }
    }

    /// Mark this feature as highlighted.
    #[must_use]
    pub fn highlighted(mut self) -> Self {
        self.highlighted = true;
        self
    }
}

/// Coarse track a plan belongs to.
///
/// Used for related-plan resolution on detail views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanPhase {
    Operate,
    Secure,
    Streamline,
    Accelerate,
}

impl PlanPhase {
    /// Parse from a string. Returns `None` for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "operate" => Some(Self::Operate),
            "secure" => Some(Self::Secure),
            "streamline" => Some(Self::Streamline),
            "accelerate" => Some(Self::Accelerate),
            _ => None,
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operate => "operate",
            Self::Secure => "secure",
            Self::Streamline => "streamline",
            Self::Accelerate => "accelerate",
        }
    }
}

impl std::fmt::Display for PlanPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Billing cadence for a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingInterval {
    /// Billed monthly.
    Monthly,
    /// Billed quarterly.
    Quarterly,
    /// Billed annually.
    Annually,
    /// Single non-recurring charge.
    OnceOff,
}

impl BillingInterval {
    /// Parse from a string. Returns `None` for unrecognized values.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "monthly" | "month" => Some(Self::Monthly),
            "quarterly" | "quarter" => Some(Self::Quarterly),
            "annually" | "annual" | "year" | "yearly" => Some(Self::Annually),
            "once_off" | "once-off" | "onceoff" => Some(Self::OnceOff),
            _ => None,
        }
    }

    /// Convert to string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
            Self::Annually => "annually",
            Self::OnceOff => "once_off",
        }
    }

    /// Whether price displays carry a recurring suffix ("/month" etc.).
    ///
    /// `OnceOff` plans have no recurring charge; consumers must suppress the
    /// suffix. The interval value itself is always preserved verbatim.
    #[must_use]
    pub fn has_recurring_suffix(&self) -> bool {
        !matches!(self, Self::OnceOff)
    }
}

impl std::fmt::Display for BillingInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A subscription plan record.
///
/// Plans are read-only once constructed; the engine never mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    /// Unique identifier, stable across the collection.
    pub id: String,
    /// Display name shown to users.
    pub name: String,
    /// Description of the plan.
    pub description: String,
    /// Price in whole currency units. `0` denotes a free plan.
    pub price: i64,
    /// Display currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Billing cadence.
    pub interval: BillingInterval,
    /// Coarse track for related-plan resolution.
    #[serde(default)]
    pub phase: Option<PlanPhase>,
    /// Feature lines, order-preserving. No dedup within a single plan.
    #[serde(default)]
    pub features: Vec<PlanFeature>,
    /// Presentation flag, passed through unchanged.
    #[serde(default)]
    pub popular: bool,
    /// Presentation flag, passed through unchanged.
    #[serde(default)]
    pub recommended: bool,
    /// Plan is visible but not yet purchasable. Never excluded from listings.
    #[serde(default)]
    pub coming_soon: bool,
    /// Advertised discount percentage, if the plan is on promotion.
    #[serde(default)]
    pub discount_percentage: Option<u8>,
    /// Pre-discount price. Expected (not enforced) to exceed `price`.
    #[serde(default)]
    pub original_price: Option<i64>,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

impl Plan {
    /// Start building a plan.
    #[must_use]
    pub fn builder(id: impl Into<String>, name: impl Into<String>) -> PlanBuilder {
        PlanBuilder::new(id, name)
    }

    /// Whether this plan has no cost.
    #[must_use]
    pub fn is_free(&self) -> bool {
        self.price == 0
    }

    /// Whether the plan can currently be purchased.
    ///
    /// Coming-soon plans stay in listings but callers must disable the
    /// primary action.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        !self.coming_soon
    }

    /// Derived popularity score used by the popularity sort.
    #[must_use]
    pub fn popularity_score(&self) -> i64 {
        let mut score = 0;
        if self.popular {
            score += 2;
        }
        if self.recommended {
            score += 3;
        }
        score
    }

    /// Look up a feature entry by exact text.
    #[must_use]
    pub fn feature(&self, text: &str) -> Option<&PlanFeature> {
        self.features.iter().find(|f| f.text == text)
    }

    /// Whether the plan grants a feature with this exact text.
    ///
    /// Absence means not included, not unknown.
    #[must_use]
    pub fn has_feature(&self, text: &str) -> bool {
        self.feature(text).map(|f| f.included).unwrap_or(false)
    }

    /// Case-insensitive substring match against name, description, or any
    /// feature text.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self
                .features
                .iter()
                .any(|f| f.text.to_lowercase().contains(&term))
    }

    /// Get the price formatted for display (e.g., "R2,500").
    #[must_use]
    pub fn formatted_price(&self) -> String {
        format!("{}{}", self.currency, group_thousands(self.price))
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Builder for a single plan record.
#[derive(Debug)]
pub struct PlanBuilder {
    plan: Plan,
}

impl PlanBuilder {
    fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            plan: Plan {
                id: id.into(),
                name: name.into(),
                description: String::new(),
                price: 0,
                currency: default_currency(),
                interval: BillingInterval::Monthly,
                phase: None,
                features: Vec::new(),
                popular: false,
                recommended: false,
                coming_soon: false,
                discount_percentage: None,
                original_price: None,
            },
        }
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.plan.description = desc.into();
        self
    }

    /// Set the price in whole currency units.
    #[must_use]
    pub fn price(mut self, price: i64) -> Self {
        self.plan.price = price;
        self
    }

    /// Set the display currency code.
    #[must_use]
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.plan.currency = currency.into();
        self
    }

    /// Set the billing cadence.
    #[must_use]
    pub fn interval(mut self, interval: BillingInterval) -> Self {
        self.plan.interval = interval;
        self
    }

    /// Set the phase.
    #[must_use]
    pub fn phase(mut self, phase: PlanPhase) -> Self {
        self.plan.phase = Some(phase);
        self
    }

    /// Append a feature line.
    #[must_use]
    pub fn feature(mut self, text: impl Into<String>, included: bool) -> Self {
        self.plan.features.push(PlanFeature {
            text: text.into(),
            included,
            highlighted: false,
        });
        self
    }

    /// Append a highlighted feature line.
    #[must_use]
    pub fn highlighted_feature(mut self, text: impl Into<String>, included: bool) -> Self {
        self.plan.features.push(PlanFeature {
            text: text.into(),
            included,
            highlighted: true,
        });
        self
    }

    /// Mark the plan as popular.
    #[must_use]
    pub fn popular(mut self) -> Self {
        self.plan.popular = true;
        self
    }

    /// Mark the plan as recommended.
    #[must_use]
    pub fn recommended(mut self) -> Self {
        self.plan.recommended = true;
        self
    }

    /// Mark the plan as coming soon (visible, not purchasable).
    #[must_use]
    pub fn coming_soon(mut self) -> Self {
        self.plan.coming_soon = true;
        self
    }

    /// Set promotion pricing.
    #[must_use]
    pub fn discount(mut self, percentage: u8, original_price: i64) -> Self {
        self.plan.discount_percentage = Some(percentage);
        self.plan.original_price = Some(original_price);
        self
    }

    /// Finish building the plan.
    #[must_use]
    pub fn build(self) -> Plan {
        self.plan
    }
}

/// The full, ordered, read-only plan collection.
///
/// Built once from three fixed buckets concatenated in fixed order: basic,
/// security, accelerate. That bucket order is the base ordering before any
/// sort is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanCatalog {
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Build a catalog from the three fixed buckets, in bucket order.
    #[must_use]
    pub fn from_buckets(basic: Vec<Plan>, security: Vec<Plan>, accelerate: Vec<Plan>) -> Self {
        let mut plans = basic;
        plans.extend(security);
        plans.extend(accelerate);
        Self { plans }
    }

    /// Build a catalog from an already-ordered sequence.
    #[must_use]
    pub fn from_plans(plans: Vec<Plan>) -> Self {
        Self { plans }
    }

    /// All plans in base order.
    #[must_use]
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    /// Look up a plan by exact id. First occurrence wins.
    #[must_use]
    pub fn get(&self, plan_id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == plan_id)
    }

    /// Select plans by id, preserving the order of `plan_ids`.
    ///
    /// Unknown ids are skipped.
    #[must_use]
    pub fn select(&self, plan_ids: &[&str]) -> Vec<Plan> {
        plan_ids
            .iter()
            .filter_map(|id| self.get(id).cloned())
            .collect()
    }

    /// Number of plans in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// Whether the catalog holds no plans.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// Iterate over plans in base order.
    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plan() -> Plan {
        Plan::builder("business-it", "Business IT")
            .description("Managed IT for growing businesses")
            .price(2500)
            .phase(PlanPhase::Operate)
            .feature("Cloud Backup Solutions", true)
            .feature("On-site Support", false)
            .popular()
            .build()
    }

    #[test]
    fn test_builder_defaults() {
        let plan = Plan::builder("starter", "Starter").build();
        assert_eq!(plan.price, 0);
        assert_eq!(plan.currency, "R");
        assert_eq!(plan.interval, BillingInterval::Monthly);
        assert!(plan.phase.is_none());
        assert!(!plan.popular);
        assert!(!plan.recommended);
        assert!(!plan.coming_soon);
        assert!(plan.is_free());
        assert!(plan.is_purchasable());
    }

    #[test]
    fn test_popularity_score() {
        let plain = Plan::builder("a", "A").build();
        assert_eq!(plain.popularity_score(), 0);

        let popular = Plan::builder("b", "B").popular().build();
        assert_eq!(popular.popularity_score(), 2);

        let recommended = Plan::builder("c", "C").recommended().build();
        assert_eq!(recommended.popularity_score(), 3);

        let both = Plan::builder("d", "D").popular().recommended().build();
        assert_eq!(both.popularity_score(), 5);
    }

    #[test]
    fn test_feature_lookup_by_exact_text() {
        let plan = sample_plan();
        assert!(plan.has_feature("Cloud Backup Solutions"));
        // Present but not included
        assert!(!plan.has_feature("On-site Support"));
        // Absent means not included
        assert!(!plan.has_feature("cloud backup solutions"));
        assert!(plan.feature("On-site Support").is_some());
    }

    #[test]
    fn test_matches_search_across_fields() {
        let plan = sample_plan();
        // Name
        assert!(plan.matches_search("business"));
        // Description
        assert!(plan.matches_search("growing"));
        // Feature text, case-insensitive
        assert!(plan.matches_search("backup"));
        assert!(!plan.matches_search("kubernetes"));
    }

    #[test]
    fn test_coming_soon_is_not_purchasable() {
        let plan = Plan::builder("next", "Next Gen").coming_soon().build();
        assert!(!plan.is_purchasable());
    }

    #[test]
    fn test_formatted_price() {
        let plan = Plan::builder("p", "P").price(2500).build();
        assert_eq!(plan.formatted_price(), "R2,500");

        let free = Plan::builder("f", "F").build();
        assert_eq!(free.formatted_price(), "R0");

        let big = Plan::builder("b", "B").price(1234567).build();
        assert_eq!(big.formatted_price(), "R1,234,567");
    }

    #[test]
    fn test_interval_parsing() {
        assert_eq!(BillingInterval::parse("monthly"), Some(BillingInterval::Monthly));
        assert_eq!(BillingInterval::parse("quarterly"), Some(BillingInterval::Quarterly));
        assert_eq!(BillingInterval::parse("annually"), Some(BillingInterval::Annually));
        assert_eq!(BillingInterval::parse("once-off"), Some(BillingInterval::OnceOff));
        assert_eq!(BillingInterval::parse("weekly"), None);
    }

    #[test]
    fn test_once_off_suppresses_suffix() {
        assert!(BillingInterval::Monthly.has_recurring_suffix());
        assert!(BillingInterval::Annually.has_recurring_suffix());
        assert!(!BillingInterval::OnceOff.has_recurring_suffix());
    }

    #[test]
    fn test_phase_roundtrip() {
        for phase in [
            PlanPhase::Operate,
            PlanPhase::Secure,
            PlanPhase::Streamline,
            PlanPhase::Accelerate,
        ] {
            assert_eq!(PlanPhase::parse(phase.as_str()), Some(phase));
        }
        assert_eq!(PlanPhase::parse("deploy"), None);
    }

    #[test]
    fn test_catalog_bucket_order() {
        let basic = vec![Plan::builder("b1", "B1").build()];
        let security = vec![Plan::builder("s1", "S1").build(), Plan::builder("s2", "S2").build()];
        let accelerate = vec![Plan::builder("a1", "A1").build()];

        let catalog = PlanCatalog::from_buckets(basic, security, accelerate);
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "s1", "s2", "a1"]);
    }

    #[test]
    fn test_catalog_lookup_and_select() {
        let catalog = PlanCatalog::from_plans(vec![
            Plan::builder("one", "One").build(),
            Plan::builder("two", "Two").build(),
        ]);

        assert!(catalog.get("one").is_some());
        assert!(catalog.get("three").is_none());

        // Selection preserves caller order and skips unknown ids
        let selected = catalog.select(&["two", "missing", "one"]);
        let ids: Vec<&str> = selected.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["two", "one"]);
    }

    #[test]
    fn test_plan_serde_roundtrip() {
        let plan = sample_plan();
        let json = serde_json::to_string(&plan).unwrap();
        let back: Plan = serde_json::from_str(&json).unwrap();
        assert_eq!(plan, back);
    }
}
