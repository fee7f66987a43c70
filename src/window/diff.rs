//! Incremental updates between two rendered windows

use rustc_hash::FxHashSet;
use serde::Serialize;

use super::{PageEntry, PageWindow};

/// A single patch operation for the host renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum WindowPatch {
    /// Drop page buttons that scrolled out of the window
    Remove { pages: Vec<usize> },
    /// Add page buttons that scrolled into the window
    Insert { entries: Vec<PageEntry> },
    /// A surviving button lost the active marker
    Deactivate { page: usize },
    /// A surviving button gained the active marker
    Activate { page: usize },
}

/// Compute the patches that turn `previous` into `current`
///
/// Patches come out in application order: removals, insertions, then
/// active-marker changes on buttons present in both windows. Identical
/// windows produce no patches.
pub fn diff_windows(previous: &PageWindow, current: &PageWindow) -> Vec<WindowPatch> {
    let mut patches = Vec::new();

    let prev_pages: FxHashSet<usize> = previous.pages().collect();
    let curr_pages: FxHashSet<usize> = current.pages().collect();

    let removed: Vec<usize> = previous
        .pages()
        .filter(|page| !curr_pages.contains(page))
        .collect();
    if !removed.is_empty() {
        patches.push(WindowPatch::Remove { pages: removed });
    }

    let added: Vec<PageEntry> = current
        .iter()
        .filter(|entry| !prev_pages.contains(&entry.page))
        .copied()
        .collect();
    if !added.is_empty() {
        patches.push(WindowPatch::Insert { entries: added });
    }

    // Marker changes only matter for buttons that were kept
    let prev_active = previous.active().map(|e| e.page);
    let curr_active = current.active().map(|e| e.page);
    if prev_active != curr_active {
        if let Some(page) = prev_active.filter(|p| curr_pages.contains(p)) {
            patches.push(WindowPatch::Deactivate { page });
        }
        if let Some(page) = curr_active.filter(|p| prev_pages.contains(p)) {
            patches.push(WindowPatch::Activate { page });
        }
    }

    patches
}
