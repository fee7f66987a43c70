//! Page window: which page buttons are visible

mod diff;
mod range;

pub use diff::{diff_windows, WindowPatch};
pub use range::{compute_window, PageEntry, PageWindow};
