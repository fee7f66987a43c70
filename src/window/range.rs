//! Visible page range computation

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{PaginationError, Result};

/// Inline capacity for a window; typical range sizes fit without allocating
const INLINE_ENTRIES: usize = 8;

/// A single visible page button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageEntry {
    /// Zero-based page index
    pub page: usize,
    /// One-based display number
    pub label: usize,
    /// Whether this entry is the current page
    pub is_active: bool,
}

impl PageEntry {
    pub fn new(page: usize, current_page: usize) -> Self {
        Self {
            page,
            label: page + 1,
            is_active: page == current_page,
        }
    }
}

/// Contiguous, strictly increasing run of visible pages
///
/// Covers the half-open index range `[start, end)`. Recomputed on every
/// render and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageWindow {
    entries: SmallVec<[PageEntry; INLINE_ENTRIES]>,
}

impl PageWindow {
    /// Empty window (no pages to show)
    pub fn empty() -> Self {
        Self::default()
    }

    fn from_range(start: usize, end: usize, current_page: usize) -> Self {
        Self {
            entries: (start..end)
                .map(|page| PageEntry::new(page, current_page))
                .collect(),
        }
    }

    /// First page index in the window (0 for an empty window)
    pub fn start(&self) -> usize {
        self.entries.first().map_or(0, |e| e.page)
    }

    /// One past the last page index in the window
    pub fn end(&self) -> usize {
        self.entries.last().map_or(0, |e| e.page + 1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[PageEntry] {
        &self.entries
    }

    /// Page indices in display order
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|e| e.page)
    }

    /// The active entry, if the window is non-empty
    pub fn active(&self) -> Option<&PageEntry> {
        self.entries.iter().find(|e| e.is_active)
    }

    pub fn contains(&self, page: usize) -> bool {
        !self.is_empty() && page >= self.start() && page < self.end()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PageEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a PageWindow {
    type Item = &'a PageEntry;
    type IntoIter = std::slice::Iter<'a, PageEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Compute the visible window of pages around `current_page`
///
/// The window holds `min(range_size, page_count)` entries. It is centred on
/// the current page where possible and slides against either edge otherwise.
/// An empty collection (`page_count == 0`) yields an empty window whatever
/// the current page is.
///
/// Fails with [`PaginationError::InvalidArgument`] if `range_size` is zero or
/// if `current_page` is not a valid index into a non-empty collection.
pub fn compute_window(
    current_page: usize,
    page_count: usize,
    range_size: usize,
) -> Result<PageWindow> {
    if range_size == 0 {
        return Err(PaginationError::invalid("range size must be at least 1"));
    }
    if page_count == 0 {
        return Ok(PageWindow::empty());
    }
    if current_page >= page_count {
        return Err(PaginationError::invalid(format!(
            "current page {} is outside [0, {})",
            current_page, page_count
        )));
    }

    let len = range_size.min(page_count);
    let mid = (len - 1) / 2;

    // Anchored at the first page until the current page passes the middle
    let mut start = 0;
    if current_page > mid {
        start = current_page - mid;
    }

    // Right-edge clamp wins over the shift above
    if start + len > page_count {
        start = page_count - len;
    }

    Ok(PageWindow::from_range(start, start + len, current_page))
}
