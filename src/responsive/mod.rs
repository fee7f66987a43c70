//! Responsive range sizing
//!
//! Kept apart from the window computation: the only input is a measured
//! width, so nothing here needs a rendering environment to test.

mod metrics;
mod sizer;

pub use metrics::ItemMetrics;
pub use sizer::{RangeSizer, Viewport};
