//! Side-by-side feature comparison across a selected set of plans.
//!
//! The matrix is derived data: distinct feature texts (first-seen order
//! across the selection), each assigned to exactly one named category by an
//! ordered keyword rule table, with a per-(feature, plan) inclusion cell.
//! Difference flags are recomputed on demand, never stored.
//!
//! Column ordering for the comparison table uses its own price comparator
//! (free plans always lead, whatever the direction), which is deliberately
//! NOT the catalog listing's price sort.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::Serialize;

use super::filter::SortOrder;
use super::plan::Plan;

/// Fallback category for features no rule claims.
pub const OTHER_CATEGORY: &str = "Other Features";

/// A category with the keyword phrases that pull features into it.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Ordered rule table for feature categorization.
///
/// Evaluated top-down; the first category whose keyword appears in the
/// feature text (case-insensitive substring) wins, so a feature is never
/// assigned twice even when it could match several rules.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        name: "Core Features",
        keywords: &["support desk", "helpdesk", "device management", "user account", "onboarding"],
    },
    CategoryRule {
        name: "Support",
        keywords: &["support", "response time", "sla", "account manager"],
    },
    CategoryRule {
        name: "Security",
        keywords: &["security", "antivirus", "firewall", "threat", "compliance", "penetration"],
    },
    CategoryRule {
        name: "Monitoring",
        keywords: &["monitoring", "alerting", "health report", "uptime"],
    },
    CategoryRule {
        name: "Data Management",
        keywords: &["backup", "recovery", "data", "storage", "archiv"],
    },
    CategoryRule {
        name: "Advanced Services",
        keywords: &["automation", "cloud migration", "consulting", "integration", "custom"],
    },
];

/// Assign a feature text to its category via the rule table.
#[must_use]
pub fn categorize(feature_text: &str) -> &'static str {
    let text = feature_text.to_lowercase();
    for rule in CATEGORY_RULES {
        if rule.keywords.iter().any(|kw| text.contains(kw)) {
            return rule.name;
        }
    }
    OTHER_CATEGORY
}

/// One inclusion cell in the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCell {
    /// Whether the plan grants the feature. Absence from the plan's feature
    /// list means `false`, not unknown.
    pub included: bool,
    /// Emphasis flag surfaced from the plan's feature entry.
    pub highlighted: bool,
}

/// One feature row across all selected plans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureRow {
    /// The feature text (the cross-plan identity key).
    pub text: String,
    /// Category assigned by the rule table.
    pub category: &'static str,
    /// Cells in selection order, one per plan.
    pub cells: Vec<FeatureCell>,
}

impl FeatureRow {
    /// Whether the selected plans disagree on this feature: at least one
    /// grants it and at least one does not.
    #[must_use]
    pub fn differs(&self) -> bool {
        let any_included = self.cells.iter().any(|c| c.included);
        let any_missing = self.cells.iter().any(|c| !c.included);
        any_included && any_missing
    }
}

/// The comparison matrix for a caller-controlled plan selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonMatrix {
    plan_ids: Vec<String>,
    rows: Vec<FeatureRow>,
}

impl ComparisonMatrix {
    /// Build the matrix for the given selection, in selection order.
    ///
    /// An empty selection yields an empty matrix, not an error. Any cap on
    /// how many plans may be selected is a consuming-UI policy, not
    /// enforced here.
    #[must_use]
    pub fn build(selected: &[Plan]) -> Self {
        let plan_ids: Vec<String> = selected.iter().map(|p| p.id.clone()).collect();

        // Distinct feature texts, first-seen order: plan order first, then
        // feature order within each plan.
        let mut seen: HashSet<&str> = HashSet::new();
        let mut texts: Vec<&str> = Vec::new();
        for plan in selected {
            for feature in &plan.features {
                if seen.insert(feature.text.as_str()) {
                    texts.push(feature.text.as_str());
                }
            }
        }

        let rows = texts
            .into_iter()
            .map(|text| FeatureRow {
                text: text.to_string(),
                category: categorize(text),
                cells: selected
                    .iter()
                    .map(|plan| match plan.feature(text) {
                        Some(f) => FeatureCell {
                            included: f.included,
                            highlighted: f.highlighted,
                        },
                        None => FeatureCell {
                            included: false,
                            highlighted: false,
                        },
                    })
                    .collect(),
            })
            .collect();

        Self { plan_ids, rows }
    }

    /// Ids of the compared plans, in selection order.
    #[must_use]
    pub fn plan_ids(&self) -> &[String] {
        &self.plan_ids
    }

    /// All feature rows in first-seen order.
    #[must_use]
    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    /// Rows grouped by category, in rule-table order with the fallback
    /// category last. Empty categories are omitted; rows keep first-seen
    /// order within each group.
    #[must_use]
    pub fn categorized(&self) -> Vec<(&'static str, Vec<&FeatureRow>)> {
        let mut groups: Vec<(&'static str, Vec<&FeatureRow>)> = Vec::new();
        let category_order = CATEGORY_RULES
            .iter()
            .map(|r| r.name)
            .chain(std::iter::once(OTHER_CATEGORY));

        for category in category_order {
            let rows: Vec<&FeatureRow> =
                self.rows.iter().filter(|r| r.category == category).collect();
            if !rows.is_empty() {
                groups.push((category, rows));
            }
        }
        groups
    }

    /// Look up the cell for a (feature text, plan id) pair.
    #[must_use]
    pub fn cell(&self, feature_text: &str, plan_id: &str) -> Option<FeatureCell> {
        let col = self.plan_ids.iter().position(|id| id == plan_id)?;
        self.rows
            .iter()
            .find(|r| r.text == feature_text)
            .map(|r| r.cells[col])
    }

    /// Whether any feature differs across the selection.
    #[must_use]
    pub fn has_differences(&self) -> bool {
        self.rows.iter().any(FeatureRow::differs)
    }

    /// Whether the matrix holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Order plans for display as comparison-table columns.
///
/// Free plans sort before any priced plan in BOTH directions; the
/// free-vs-nonfree boundary is the primary key and the direction flag only
/// flips the price-magnitude comparison among priced plans. This is a
/// different contract from the catalog listing's plain numeric price sort
/// and the two must not be merged.
#[must_use]
pub fn order_columns(mut plans: Vec<Plan>, order: SortOrder) -> Vec<Plan> {
    plans.sort_by(|a, b| match (a.is_free(), b.is_free()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (true, true) => Ordering::Equal,
        (false, false) => order.apply(a.price.cmp(&b.price)),
    });
    plans
}
