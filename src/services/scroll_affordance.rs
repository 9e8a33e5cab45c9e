//! Row scrolling state for clients rendering the home rows. The server only
//! ships row contents; arrows and offsets are tracked on the client side.

use serde::{Deserialize, Serialize};

/// Sub-pixel tolerance at the right edge.
pub const SCROLL_EPSILON: f64 = 5.0;
/// One card (280) plus the gap between cards (16).
pub const ITEM_STEP: f64 = 296.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ScrollAffordance {
    pub can_scroll_left: bool,
    pub can_scroll_right: bool,
}

impl ScrollAffordance {
    pub fn compute(offset: f64, visible_width: f64, total_width: f64) -> Self {
        Self {
            can_scroll_left: offset > 0.0,
            can_scroll_right: offset + visible_width < total_width - SCROLL_EPSILON,
        }
    }
}

/// Scroll position of one row. Affordance is recomputed on every offset or
/// size change.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollState {
    offset: f64,
    visible_width: f64,
    total_width: f64,
    affordance: ScrollAffordance,
}

impl ScrollState {
    pub fn new(visible_width: f64, total_width: f64) -> Self {
        let mut state = Self {
            offset: 0.0,
            visible_width,
            total_width,
            affordance: ScrollAffordance::default(),
        };
        state.recompute();
        state
    }

    /// Content width of a row with `item_count` cards.
    pub fn for_items(visible_width: f64, item_count: usize) -> Self {
        let total = if item_count == 0 {
            0.0
        } else {
            // no trailing gap after the last card
            item_count as f64 * ITEM_STEP - (ITEM_STEP - 280.0)
        };
        Self::new(visible_width, total)
    }

    fn max_offset(&self) -> f64 {
        (self.total_width - self.visible_width).max(0.0)
    }

    fn recompute(&mut self) {
        self.affordance =
            ScrollAffordance::compute(self.offset, self.visible_width, self.total_width);
    }

    pub fn on_scroll(&mut self, offset: f64) -> ScrollAffordance {
        self.offset = offset.clamp(0.0, self.max_offset());
        self.recompute();
        self.affordance
    }

    pub fn on_resize(&mut self, visible_width: f64, total_width: f64) -> ScrollAffordance {
        self.visible_width = visible_width;
        self.total_width = total_width;
        self.offset = self.offset.clamp(0.0, self.max_offset());
        self.recompute();
        self.affordance
    }

    /// Advance by whole cards; negative steps scroll left.
    pub fn scroll_by_items(&mut self, items: i32) -> ScrollAffordance {
        self.on_scroll(self.offset + items as f64 * ITEM_STEP)
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn affordance(&self) -> ScrollAffordance {
        self.affordance
    }
}
