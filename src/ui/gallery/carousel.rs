// SPDX-License-Identifier: MPL-2.0
//! Horizontal carousel track over the visible sequence.
//!
//! A render offsets the track by `-cursor * item_width` and holds the
//! animation lock for one transition duration. The lock is released by a
//! timer, not by the end of the visual transition. Navigation arriving while
//! the lock is held is dropped; a render requested while locked is remembered
//! and performed when the lock releases. A filter change clears the lock
//! outright, which leaves earlier release timers stale.

use super::width_cache::WidthCache;
use crate::domain::gallery::{step, Direction, ItemSet, Sequence};
use crate::ui::effect::{Effect, Update};
use crate::ui::surface::Layout;
use std::time::Duration;

/// Delayed continuations of the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Carries the lock generation; releases of an older lock are ignored.
    ReleaseLock(u64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    cursor: usize,
    locked: bool,
    lock_generation: u64,
    render_pending: bool,
    rendered_offset: Option<f32>,
    width: WidthCache,
    transition: Duration,
}

impl Carousel {
    #[must_use]
    pub fn new(transition: Duration) -> Self {
        Self {
            cursor: 0,
            locked: false,
            lock_generation: 0,
            render_pending: false,
            rendered_offset: None,
            width: WidthCache::new(),
            transition,
        }
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Track offset of the last render.
    #[must_use]
    pub fn rendered_offset(&self) -> Option<f32> {
        self.rendered_offset
    }

    /// Moves the cursor without rendering.
    pub fn set_cursor(&mut self, cursor: usize) {
        self.cursor = cursor;
    }

    /// Drops the lock and any deferred render.
    pub fn reset_lock(&mut self) {
        self.locked = false;
        self.render_pending = false;
    }

    /// `next()` / `prev()`: no-op while locked or when nothing is visible.
    pub fn step(&mut self, direction: Direction, items: &ItemSet, layout: &dyn Layout) -> Update<Timer> {
        if self.locked {
            return Update::none();
        }
        let Some(cursor) = step(self.cursor, items.len(), direction) else {
            return Update::none();
        };
        self.cursor = cursor;
        self.render(items, layout, true)
    }

    /// Writes the track offset for the current cursor and takes the lock.
    pub fn render(&mut self, items: &ItemSet, layout: &dyn Layout, animated: bool) -> Update<Timer> {
        if items.is_empty() {
            return Update::none();
        }
        if self.locked {
            self.render_pending = true;
            return Update::none();
        }
        let offset_px = -(self.cursor as f32) * self.width.get(items, layout);
        self.locked = true;
        self.lock_generation += 1;
        self.render_pending = false;
        self.rendered_offset = Some(offset_px);

        let mut update = Update::effect(Effect::TrackTransform {
            offset_px,
            animated,
        });
        update.after(self.transition, Timer::ReleaseLock(self.lock_generation));
        update
    }

    pub fn on_timer(&mut self, timer: Timer, items: &ItemSet, layout: &dyn Layout) -> Update<Timer> {
        match timer {
            Timer::ReleaseLock(generation) if generation != self.lock_generation => Update::none(),
            Timer::ReleaseLock(_) => {
                self.locked = false;
                if self.render_pending {
                    tracing::debug!(cursor = self.cursor, "carousel catching up after lock");
                    self.render(items, layout, true)
                } else {
                    Update::none()
                }
            }
        }
    }

    /// Drops the cached width so the next render re-measures.
    pub fn invalidate_width(&mut self) {
        self.width.invalidate();
    }

    #[cfg(test)]
    pub(crate) fn release_timer(&self) -> Timer {
        Timer::ReleaseLock(self.lock_generation)
    }
}
