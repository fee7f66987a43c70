//! Paper-Pagination: the core of a page navigation control
//!
//! This crate provides:
//! - Visible page windowing (which page buttons to show around the current page)
//! - Navigation intent resolution (first/previous/next/last/select to a page index)
//! - A render-ready control strip and incremental window diffs for hosts
//! - Responsive range sizing from a measured container width
//!
//! The computations are pure. The host owns the current page, applies the
//! resolved index and notifies its own observers.

pub mod config;
pub mod error;
pub mod navigation;
pub mod render;
pub mod responsive;
pub mod state;
pub mod wasm;
pub mod window;

// Re-export WASM types for direct use
pub use wasm::WasmPagination;

// Re-export primary types
pub use config::PaginationConfig;
pub use error::{PaginationError, Result};
pub use navigation::{last_page, next_page, NavigationIntent, PageChanged};
pub use render::{Control, ControlStrip};
pub use responsive::{ItemMetrics, RangeSizer, Viewport};
pub use state::PaginationState;
pub use window::{compute_window, diff_windows, PageEntry, PageWindow, WindowPatch};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_round_trip() {
        // Host loop: intent -> next_page -> commit -> compute_window
        let page_count = 20;
        let range = 5;
        let mut current = 0;

        for _ in 0..12 {
            current = next_page(NavigationIntent::Next, current, page_count).unwrap();
        }
        assert_eq!(current, 12);

        let window = compute_window(current, page_count, range).unwrap();
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14]);

        current = next_page(NavigationIntent::Last, current, page_count).unwrap();
        let tail = compute_window(current, page_count, range).unwrap();
        assert_eq!(tail.pages().collect::<Vec<_>>(), vec![15, 16, 17, 18, 19]);

        let patches = diff_windows(&window, &tail);
        assert_eq!(patches.len(), 2);
    }

    #[test]
    fn test_shrinking_container() {
        let mut state = PaginationState::new(1000, 10, 9).unwrap();
        state.apply(NavigationIntent::SelectPage(50)).unwrap();

        let mut sizer = RangeSizer::new(state.range_size(), ItemMetrics::new(30.0, 100.0)).unwrap();
        state.set_range_size(sizer.fit(190.0)).unwrap();
        assert_eq!(state.window().unwrap().pages().collect::<Vec<_>>(), vec![49, 50, 51]);

        state.set_range_size(sizer.fit(800.0)).unwrap();
        assert_eq!(state.window().unwrap().len(), 9);
    }
}
