//! Range size adaptation to container width

use crate::error::{PaginationError, Result};

use super::ItemMetrics;

/// Live layout measurement supplied by the host
pub trait Viewport {
    /// Current width of the element hosting the control, in pixels
    fn container_width(&self) -> f32;
}

impl Viewport for f32 {
    fn container_width(&self) -> f32 {
        *self
    }
}

/// Shrinks the range size to fit the container and grows it back
///
/// The intended range size is kept separately from the effective one, so a
/// narrow container never lowers the size that is restored later.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeSizer {
    intended: usize,
    effective: usize,
    metrics: ItemMetrics,
}

impl RangeSizer {
    pub fn new(intended: usize, metrics: ItemMetrics) -> Result<Self> {
        if intended == 0 {
            return Err(PaginationError::invalid("range size must be at least 1"));
        }
        Ok(Self {
            intended,
            effective: intended,
            metrics,
        })
    }

    /// Range size the host asked for
    pub fn intended(&self) -> usize {
        self.intended
    }

    /// Range size from the last fit
    pub fn effective(&self) -> usize {
        self.effective
    }

    pub fn metrics(&self) -> &ItemMetrics {
        &self.metrics
    }

    /// Swap the width estimates; the effective size holds until the next fit
    pub fn set_metrics(&mut self, metrics: ItemMetrics) {
        self.metrics = metrics;
    }

    /// Change the target size
    ///
    /// An unconstrained sizer follows the new target at once; a constrained
    /// one only ever gets capped by it until the next fit.
    pub fn set_intended(&mut self, intended: usize) -> Result<()> {
        if intended == 0 {
            return Err(PaginationError::invalid("range size must be at least 1"));
        }
        let unconstrained = self.effective == self.intended;
        self.intended = intended;
        self.effective = if unconstrained {
            intended
        } else {
            self.effective.min(intended)
        };
        Ok(())
    }

    /// Fit to `width` and return the range size to feed into the window
    pub fn fit(&mut self, width: f32) -> usize {
        let suggested = self.metrics.capacity(width).min(self.intended);
        if suggested != self.effective {
            log::debug!(
                "range size {} -> {} (width {}, intended {})",
                self.effective,
                suggested,
                width,
                self.intended
            );
        }
        self.effective = suggested;
        suggested
    }

    /// Read the container width from `viewport` and fit to it
    pub fn measure(&mut self, viewport: &impl Viewport) -> usize {
        self.fit(viewport.container_width())
    }
}
