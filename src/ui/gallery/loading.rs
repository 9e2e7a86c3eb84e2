// SPDX-License-Identifier: MPL-2.0
//! Progressive image loading.
//!
//! Items are watched until they first come within a margin of the viewport.
//! At that point a completed image is marked `loaded` immediately; one still
//! downloading is marked when its load event arrives. Either way the item is
//! no longer watched.

use crate::domain::gallery::ItemSet;
use crate::ui::effect::{Effect, Element};
use crate::ui::surface::Layout;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressiveLoader {
    watched: BTreeSet<usize>,
    awaiting_load: BTreeSet<usize>,
    margin_px: f32,
}

impl ProgressiveLoader {
    #[must_use]
    pub fn new(items: usize, margin_px: f32) -> Self {
        Self {
            watched: (0..items).collect(),
            awaiting_load: BTreeSet::new(),
            margin_px,
        }
    }

    #[must_use]
    pub fn watching(&self) -> usize {
        self.watched.len()
    }

    /// Checks every watched, displayed item against the viewport.
    pub fn scan(&mut self, items: &mut ItemSet, layout: &dyn Layout) -> Vec<Effect> {
        let viewport = layout.viewport_height();
        let margin = self.margin_px;
        let entered: Vec<usize> = self
            .watched
            .iter()
            .copied()
            .filter(|&index| items.item(index).is_some_and(|item| item.is_visible()))
            .filter(|&index| {
                let rect = layout.item_rect(index);
                rect.top < viewport + margin && rect.bottom > -margin
            })
            .collect();

        let mut effects = Vec::new();
        for index in entered {
            self.watched.remove(&index);
            if layout.item_complete(index) {
                effects.extend(mark(items, index));
            } else {
                self.awaiting_load.insert(index);
            }
        }
        effects
    }

    /// An image finished loading; marks it if it already entered the viewport.
    pub fn on_image_loaded(&mut self, index: usize, items: &mut ItemSet) -> Vec<Effect> {
        if self.awaiting_load.remove(&index) {
            mark(items, index).into_iter().collect()
        } else {
            Vec::new()
        }
    }
}

fn mark(items: &mut ItemSet, index: usize) -> Option<Effect> {
    let item = items.item_mut(index)?;
    if item.is_loaded() {
        return None;
    }
    item.mark_loaded();
    Some(Effect::SetClass {
        element: Element::GalleryItem(index),
        class: "loaded",
        on: true,
    })
}
