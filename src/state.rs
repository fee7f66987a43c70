//! Host-side pagination state
//!
//! The core functions are stateless; this is the value a host keeps around
//! and re-feeds into them on every change.

use serde::{Deserialize, Serialize};

use crate::error::{PaginationError, Result};
use crate::navigation::{last_page, next_page, NavigationIntent, PageChanged};
use crate::window::{compute_window, PageWindow};

/// Authoritative pagination values, owned by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPaginationState")]
pub struct PaginationState {
    total_items: usize,
    page_size: usize,
    current_page: usize,
    range_size: usize,
}

/// Unchecked wire form; goes through the same validation as `new`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPaginationState {
    total_items: usize,
    page_size: usize,
    current_page: usize,
    range_size: usize,
}

impl TryFrom<RawPaginationState> for PaginationState {
    type Error = PaginationError;

    fn try_from(raw: RawPaginationState) -> Result<Self> {
        let mut state = Self::new(raw.total_items, raw.page_size, raw.range_size)?;
        state.current_page = raw.current_page;
        state.clamp_current();
        Ok(state)
    }
}

impl PaginationState {
    /// Create state positioned on the first page
    pub fn new(total_items: usize, page_size: usize, range_size: usize) -> Result<Self> {
        check_page_size(page_size)?;
        check_range_size(range_size)?;

        Ok(Self {
            total_items,
            page_size,
            current_page: 0,
            range_size,
        })
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn range_size(&self) -> usize {
        self.range_size
    }

    /// `ceil(total_items / page_size)`
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        self.clamp_current();
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        check_page_size(page_size)?;
        self.page_size = page_size;
        self.clamp_current();
        Ok(())
    }

    pub fn set_range_size(&mut self, range_size: usize) -> Result<()> {
        check_range_size(range_size)?;
        self.range_size = range_size;
        Ok(())
    }

    /// Resolve and commit a navigation intent
    ///
    /// Returns the notification to dispatch, or `None` if the current page
    /// did not move.
    pub fn apply(&mut self, intent: NavigationIntent) -> Result<Option<PageChanged>> {
        let target = next_page(intent, self.current_page, self.page_count())?;
        if target == self.current_page {
            return Ok(None);
        }

        log::debug!("{}: page {} -> {}", intent, self.current_page, target);
        self.current_page = target;
        Ok(Some(PageChanged::new(target)))
    }

    /// Visible window for the current values
    pub fn window(&self) -> Result<PageWindow> {
        compute_window(self.current_page, self.page_count(), self.range_size)
    }

    /// Item index range `[start, end)` shown on the current page
    pub fn item_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    fn clamp_current(&mut self) {
        let last = last_page(self.page_count());
        if self.current_page > last {
            log::debug!("current page {} clamped to {}", self.current_page, last);
            self.current_page = last;
        }
    }
}

fn check_page_size(page_size: usize) -> Result<()> {
    if page_size == 0 {
        return Err(PaginationError::invalid("page size must be at least 1"));
    }
    Ok(())
}

fn check_range_size(range_size: usize) -> Result<()> {
    if range_size == 0 {
        return Err(PaginationError::invalid("range size must be at least 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(PaginationState::new(0, 10, 5).unwrap().page_count(), 0);
        assert_eq!(PaginationState::new(1, 10, 5).unwrap().page_count(), 1);
        assert_eq!(PaginationState::new(10, 10, 5).unwrap().page_count(), 1);
        assert_eq!(PaginationState::new(11, 10, 5).unwrap().page_count(), 2);
        assert_eq!(PaginationState::new(200, 10, 5).unwrap().page_count(), 20);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(PaginationState::new(10, 0, 5).is_err());
        assert!(PaginationState::new(10, 10, 0).is_err());

        let mut state = PaginationState::new(10, 10, 5).unwrap();
        assert!(state.set_page_size(0).is_err());
        assert!(state.set_range_size(0).is_err());
        assert_eq!(state.page_size(), 10);
        assert_eq!(state.range_size(), 5);
    }

    #[test]
    fn test_apply_reports_changes() {
        let mut state = PaginationState::new(200, 10, 5).unwrap();

        assert_eq!(state.apply(NavigationIntent::Previous), Ok(None));
        assert_eq!(
            state.apply(NavigationIntent::Last),
            Ok(Some(PageChanged::new(19)))
        );
        assert_eq!(state.apply(NavigationIntent::Next), Ok(None));
        assert_eq!(
            state.apply(NavigationIntent::SelectPage(10)),
            Ok(Some(PageChanged::new(10)))
        );
        assert_eq!(state.current_page(), 10);
    }

    #[test]
    fn test_rejected_selection_keeps_page() {
        let mut state = PaginationState::new(200, 10, 5).unwrap();
        state.apply(NavigationIntent::SelectPage(4)).unwrap();

        assert!(state.apply(NavigationIntent::SelectPage(25)).is_err());
        assert_eq!(state.current_page(), 4);
    }

    #[test]
    fn test_shrinking_collection_clamps_current() {
        let mut state = PaginationState::new(200, 10, 5).unwrap();
        state.apply(NavigationIntent::Last).unwrap();

        state.set_total_items(45);
        assert_eq!(state.current_page(), 4);

        state.set_page_size(50).unwrap();
        assert_eq!(state.current_page(), 0);

        state.set_total_items(0);
        assert_eq!(state.current_page(), 0);
        assert!(state.window().unwrap().is_empty());
    }

    #[test]
    fn test_window_follows_state() {
        let mut state = PaginationState::new(200, 10, 5).unwrap();
        state.apply(NavigationIntent::SelectPage(10)).unwrap();

        let pages: Vec<usize> = state.window().unwrap().pages().collect();
        assert_eq!(pages, vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_deserialize_validates() {
        let zero_page_size = serde_json::from_str::<PaginationState>(
            r#"{"totalItems":10,"pageSize":0,"currentPage":0,"rangeSize":5}"#,
        );
        assert!(zero_page_size.is_err());

        let zero_range = serde_json::from_str::<PaginationState>(
            r#"{"totalItems":10,"pageSize":5,"currentPage":0,"rangeSize":0}"#,
        );
        assert!(zero_range.is_err());
    }

    #[test]
    fn test_deserialize_clamps_current_page() {
        let state: PaginationState = serde_json::from_str(
            r#"{"totalItems":15,"pageSize":10,"currentPage":9,"rangeSize":5}"#,
        )
        .unwrap();
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.current_page(), 1);
        assert_eq!(state.window().unwrap().pages().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut state = PaginationState::new(200, 10, 5).unwrap();
        state.apply(NavigationIntent::SelectPage(7)).unwrap();

        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"totalItems":200,"pageSize":10,"currentPage":7,"rangeSize":5}"#
        );
        assert_eq!(serde_json::from_str::<PaginationState>(&json).unwrap(), state);
    }

    #[test]
    fn test_item_range() {
        let mut state = PaginationState::new(25, 10, 5).unwrap();
        assert_eq!(state.item_range(), 0..10);

        state.apply(NavigationIntent::Last).unwrap();
        assert_eq!(state.item_range(), 20..25);

        let empty = PaginationState::new(0, 10, 5).unwrap();
        assert_eq!(empty.item_range(), 0..0);
    }
}
