//! Page slicing

use crate::error::{DashboardError, DashboardResult};
use crate::types::Page;

/// Cut a 1-indexed page of `limit` items out of `items`
///
/// A page past the end is empty, not an error. `limit < 1` and `page < 1`
/// are rejected.
pub fn paginate<T>(items: Vec<T>, page: i64, limit: i64) -> DashboardResult<Page<T>> {
    if limit <= 0 {
        return Err(DashboardError::InvalidArgument(format!(
            "limit must be positive, got {}",
            limit
        )));
    }
    if page <= 0 {
        return Err(DashboardError::InvalidArgument(format!(
            "page must be 1 or greater, got {}",
            page
        )));
    }

    let page = page as usize;
    let limit = limit as usize;
    let total = items.len();
    let total_pages = total.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit);
    let items: Vec<T> = items.into_iter().skip(start).take(limit).collect();

    Ok(Page {
        items,
        total,
        page,
        limit,
        total_pages,
    })
}
