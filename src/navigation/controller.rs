//! Resolution of navigation intents into page indices

use crate::error::{PaginationError, Result};

use super::NavigationIntent;

/// Index of the last page, or 0 for an empty collection
pub fn last_page(page_count: usize) -> usize {
    page_count.saturating_sub(1)
}

/// Resolve `intent` against the current position
///
/// Every intent except `SelectPage` is total and lands in
/// `[0, max(page_count - 1, 0)]`. An explicit selection outside
/// `[0, page_count)` is a caller bug and is rejected, not clamped.
pub fn next_page(intent: NavigationIntent, current_page: usize, page_count: usize) -> Result<usize> {
    let last = last_page(page_count);

    let target = match intent {
        NavigationIntent::First => 0,
        NavigationIntent::Last => last,
        NavigationIntent::Previous => current_page.saturating_sub(1).min(last),
        NavigationIntent::Next => current_page.saturating_add(1).min(last),
        NavigationIntent::SelectPage(page) => {
            if page >= page_count {
                log::warn!("rejected page selection {} of {}", page, page_count);
                return Err(PaginationError::invalid(format!(
                    "selected page {} is outside [0, {})",
                    page, page_count
                )));
            }
            page
        }
    };

    Ok(target)
}
