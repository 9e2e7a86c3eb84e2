// SPDX-License-Identifier: MPL-2.0
//! Cached carousel item width, keyed by viewport width.

use crate::domain::gallery::ItemSet;
use crate::ui::surface::Layout;

/// Avoids re-measuring the first visible item on every render.
///
/// The cached width is reused while the viewport width is unchanged and the
/// cached value is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WidthCache {
    width: f32,
    viewport: f32,
}

impl WidthCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the outer width of one item, measuring when stale.
    ///
    /// Returns 0 without caching when nothing is visible.
    pub fn get(&mut self, items: &ItemSet, layout: &dyn Layout) -> f32 {
        let viewport = layout.viewport_width();
        if viewport == self.viewport && self.width > 0.0 {
            return self.width;
        }
        let Some(first) = items.item_index(0) else {
            return 0.0;
        };
        self.viewport = viewport;
        self.width = layout.item_outer_width(first);
        tracing::debug!(width = self.width, viewport, "measured carousel item");
        self.width
    }

    /// Forces the next [`WidthCache::get`] to measure.
    pub fn invalidate(&mut self) {
        self.width = 0.0;
    }

    #[must_use]
    pub fn cached(&self) -> Option<f32> {
        (self.width > 0.0).then_some(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::{Item, TagFilter};
    use crate::ui::surface::StaticLayout;

    fn items() -> ItemSet {
        ItemSet::new(vec![Item::new("a", ""), Item::new("b", "")])
    }

    #[test]
    fn measures_once_per_viewport_width() {
        let set = items();
        let mut layout = StaticLayout::desktop(2);
        let mut cache = WidthCache::new();

        assert_eq!(cache.get(&set, &layout), 320.0);

        // Same viewport: stale geometry is not re-read.
        layout.item_width = 500.0;
        assert_eq!(cache.get(&set, &layout), 320.0);

        layout.viewport_width = 800.0;
        assert_eq!(cache.get(&set, &layout), 500.0);
    }

    #[test]
    fn invalidate_forces_measurement() {
        let set = items();
        let mut layout = StaticLayout::desktop(2);
        let mut cache = WidthCache::new();
        cache.get(&set, &layout);

        layout.item_width = 280.0;
        cache.invalidate();
        assert_eq!(cache.cached(), None);
        assert_eq!(cache.get(&set, &layout), 280.0);
    }

    #[test]
    fn empty_sequence_measures_zero() {
        let mut set = items();
        set.apply_filter(TagFilter::from_value("none"));
        let mut cache = WidthCache::new();
        assert_eq!(cache.get(&set, &StaticLayout::desktop(2)), 0.0);
        assert_eq!(cache.cached(), None);
    }
}
