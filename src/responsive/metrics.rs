//! Size estimates for rendered buttons

/// Estimated pixel widths used to turn a container width into a range size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Width of one numbered page button
    pub item_width: f32,
    /// Width taken by the navigation buttons around the page buttons
    pub reserved_width: f32,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        // 36px buttons, four 40px icon buttons
        Self {
            item_width: 36.0,
            reserved_width: 160.0,
        }
    }
}

impl ItemMetrics {
    pub fn new(item_width: f32, reserved_width: f32) -> Self {
        Self {
            item_width,
            reserved_width,
        }
    }

    /// How many page buttons fit in `width`, never less than one
    ///
    /// An infinite width is an unconstrained container.
    pub fn capacity(&self, width: f32) -> usize {
        if width == f32::INFINITY {
            return usize::MAX;
        }
        if width.is_nan() || !self.item_width.is_finite() || self.item_width <= 0.0 {
            return 1;
        }
        let available = width - self.reserved_width.max(0.0);
        if available <= 0.0 {
            return 1;
        }
        ((available / self.item_width).floor() as usize).max(1)
    }
}
