//! Opt-in input validation for catalog queries.
//!
//! The engine itself never validates; a nonsensical filter produces an
//! empty (but harmless) result. Callers that prefer to fail fast run these
//! checks before querying and get a descriptive error instead of a silent
//! wrong answer.

use crate::error::Result;

use super::error::CatalogError;
use super::filter::{PageRequest, PlanFilter};

/// Maximum accepted search term length.
const MAX_SEARCH_LENGTH: usize = 200;

/// Maximum accepted page size.
const MAX_PER_PAGE: u32 = 100;

/// Validate a plan filter.
///
/// Rejects inverted price bounds, negative bounds, and oversized search
/// terms.
///
/// # Errors
///
/// Returns `CatalogError::InvalidFilter` if validation fails.
pub fn validate_filter(filter: &PlanFilter) -> Result<()> {
    if let (Some(min), Some(max)) = (filter.price_min, filter.price_max) {
        if min > max {
            return Err(CatalogError::InvalidFilter {
                reason: format!("price_min ({}) exceeds price_max ({})", min, max),
            }
            .into());
        }
    }

    for (name, bound) in [("price_min", filter.price_min), ("price_max", filter.price_max)] {
        if let Some(value) = bound {
            if value < 0 {
                return Err(CatalogError::InvalidFilter {
                    reason: format!("{} cannot be negative (got {})", name, value),
                }
                .into());
            }
        }
    }

    if let Some(ref term) = filter.search {
        if term.len() > MAX_SEARCH_LENGTH {
            return Err(CatalogError::InvalidFilter {
                reason: format!(
                    "search term exceeds maximum length of {}",
                    MAX_SEARCH_LENGTH
                ),
            }
            .into());
        }
    }

    Ok(())
}

/// Validate a page request.
///
/// # Errors
///
/// Returns `CatalogError::InvalidPageRequest` if validation fails.
pub fn validate_page(page: &PageRequest) -> Result<()> {
    if page.page == 0 {
        return Err(CatalogError::InvalidPageRequest {
            reason: "page must be >= 1".to_string(),
        }
        .into());
    }
    if page.per_page == 0 || page.per_page > MAX_PER_PAGE {
        return Err(CatalogError::InvalidPageRequest {
            reason: format!("per_page must be between 1 and {}", MAX_PER_PAGE),
        }
        .into());
    }
    Ok(())
}

/// Validate a filter and page request together.
///
/// # Errors
///
/// Returns the first validation failure encountered.
pub fn validate_query(filter: &PlanFilter, page: &PageRequest) -> Result<()> {
    validate_filter(filter)?;
    validate_page(page)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShorelineError;

    #[test]
    fn test_valid_filter_passes() {
        let filter = PlanFilter {
            price_min: Some(0),
            price_max: Some(5000),
            search: Some("backup".to_string()),
            ..PlanFilter::default()
        };
        assert!(validate_filter(&filter).is_ok());
    }

    #[test]
    fn test_inverted_price_bounds_rejected() {
        let filter = PlanFilter {
            price_min: Some(5000),
            price_max: Some(100),
            ..PlanFilter::default()
        };
        let err = validate_filter(&filter).unwrap_err();
        assert!(matches!(err, ShorelineError::BadRequest(_)));
        assert!(err.to_string().contains("price_min"));
    }

    #[test]
    fn test_negative_bound_rejected() {
        let filter = PlanFilter {
            price_min: Some(-100),
            ..PlanFilter::default()
        };
        assert!(validate_filter(&filter).is_err());
    }

    #[test]
    fn test_oversized_search_rejected() {
        let filter = PlanFilter {
            search: Some("x".repeat(201)),
            ..PlanFilter::default()
        };
        assert!(validate_filter(&filter).is_err());
    }

    #[test]
    fn test_page_validation() {
        assert!(validate_page(&PageRequest::new(1, 20)).is_ok());
        assert!(validate_page(&PageRequest::new(0, 20)).is_err());
        assert!(validate_page(&PageRequest::new(1, 0)).is_err());
        assert!(validate_page(&PageRequest::new(1, 200)).is_err());
    }

    #[test]
    fn test_validate_query_combines_both() {
        let filter = PlanFilter::default();
        assert!(validate_query(&filter, &PageRequest::default()).is_ok());
        assert!(validate_query(&filter, &PageRequest::new(0, 20)).is_err());
    }
}
