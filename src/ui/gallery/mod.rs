// SPDX-License-Identifier: MPL-2.0
//! Filterable photo gallery: carousel, lightbox and progressive loading.
//!
//! The carousel and the lightbox each keep a cursor into the visible
//! sequence. They are kept equal: activating an item moves the carousel and
//! opens the lightbox on the same position, and lightbox navigation mirrors
//! its cursor back into the carousel before re-rendering the track.
//!
//! ## Composition
//!
//! - [`carousel::Carousel`]: track offset and animation lock
//! - [`lightbox::Lightbox`]: overlay lifecycle, shared with the music showcase
//! - [`loading::ProgressiveLoader`]: `loaded` marking near the viewport

pub mod carousel;
pub mod lightbox;
pub mod loading;
pub mod width_cache;

use crate::config::{LayoutConfig, Timing};
use crate::domain::gallery::{Direction, ItemSet, Sequence, TagFilter};
use crate::ui::effect::{Display, Effect, Element, LockStyle, OverlayKind, Update};
use crate::ui::input::Key;
use crate::ui::scroll_lock::ScrollLock;
use crate::ui::surface::{GalleryMarkup, Layout};
use carousel::Carousel;
use lightbox::{KeyAction, Lightbox, LightboxTiming};
use loading::ProgressiveLoader;
use std::time::Duration;

/// Delayed continuations of the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Carousel(carousel::Timer),
    Lightbox(lightbox::Timer),
    /// Debounced resize; only the latest generation applies.
    Resize(u64),
}

/// Messages for the gallery.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // CAROUSEL
    // ═══════════════════════════════════════════════════════════════════════
    Next,
    Previous,
    /// An item was clicked, by index in the full item list.
    Activate(usize),
    /// The filter selector changed to this value.
    FilterChanged(String),

    // ═══════════════════════════════════════════════════════════════════════
    // LIGHTBOX
    // ═══════════════════════════════════════════════════════════════════════
    LightboxNavigate(Direction),
    /// Close button or backdrop click.
    LightboxClose,
    Key(Key),

    // ═══════════════════════════════════════════════════════════════════════
    // VIEWPORT
    // ═══════════════════════════════════════════════════════════════════════
    Resize,
    Scroll,
    ImageLoaded(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Gallery {
    items: ItemSet,
    carousel: Carousel,
    lightbox: Lightbox,
    loader: ProgressiveLoader,
    resize_debounce: Duration,
    resize_generation: u64,
}

impl Gallery {
    /// Builds the gallery, or `None` when the page lacks items or a lightbox.
    #[must_use]
    pub fn new(markup: &GalleryMarkup, timing: &Timing, layout: &LayoutConfig) -> Option<Self> {
        if markup.items.is_empty() || !markup.lightbox {
            return None;
        }
        Some(Self {
            loader: ProgressiveLoader::new(markup.items.len(), layout.lazy_load_margin_px),
            items: ItemSet::new(markup.items.clone()),
            carousel: Carousel::new(timing.transition),
            lightbox: Lightbox::new(
                OverlayKind::Gallery,
                markup.counter,
                LockStyle::Pinned,
                LightboxTiming {
                    close_delay: timing.lightbox_close,
                    fade_restore: timing.lightbox_fade_restore,
                },
            ),
            resize_debounce: timing.resize_debounce,
            resize_generation: 0,
        })
    }

    #[must_use]
    pub fn items(&self) -> &ItemSet {
        &self.items
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Initial placement: an unanimated render plus a first loading pass.
    pub fn init(&mut self, layout: &dyn Layout) -> Update<Timer> {
        let mut update = self.carousel.render(&self.items, layout, false).map(Timer::Carousel);
        update.effects.extend(self.loader.scan(&mut self.items, layout));
        update
    }

    /// Handle a gallery message.
    pub fn handle(&mut self, msg: Message, lock: &mut ScrollLock, layout: &dyn Layout) -> Update<Timer> {
        match msg {
            Message::Next => self.step_carousel(Direction::Next, layout),
            Message::Previous => self.step_carousel(Direction::Previous, layout),
            Message::Activate(index) => self.activate(index, lock, layout),
            Message::FilterChanged(value) => self.apply_filter(TagFilter::from_value(&value), lock, layout),
            Message::LightboxNavigate(direction) => self.navigate_lightbox(direction, layout),
            Message::LightboxClose => self.lightbox.close(lock).map(Timer::Lightbox),
            Message::Key(key) => match self.lightbox.key_action(&key) {
                Some(KeyAction::Close) => self.lightbox.close(lock).map(Timer::Lightbox),
                Some(KeyAction::Navigate(direction)) => self.navigate_lightbox(direction, layout),
                None => Update::none(),
            },
            Message::Resize => {
                self.resize_generation += 1;
                let mut update = Update::none();
                update.after(self.resize_debounce, Timer::Resize(self.resize_generation));
                update
            }
            Message::Scroll => self.loader.scan(&mut self.items, layout).into(),
            Message::ImageLoaded(index) => self.loader.on_image_loaded(index, &mut self.items).into(),
        }
    }

    pub fn on_timer(&mut self, timer: Timer, layout: &dyn Layout) -> Update<Timer> {
        match timer {
            Timer::Carousel(timer) => self
                .carousel
                .on_timer(timer, &self.items, layout)
                .map(Timer::Carousel),
            Timer::Lightbox(timer) => self.lightbox.on_timer(timer).map(Timer::Lightbox),
            Timer::Resize(generation) if generation == self.resize_generation => {
                self.carousel.invalidate_width();
                let mut update = self.carousel.render(&self.items, layout, true).map(Timer::Carousel);
                update.effects.extend(self.loader.scan(&mut self.items, layout));
                update
            }
            Timer::Resize(_) => Update::none(),
        }
    }

    /// Closes the lightbox after another overlay took the scroll lock.
    pub fn dismiss_lightbox(&mut self) -> Update<Timer> {
        self.lightbox.dismiss().map(Timer::Lightbox)
    }

    fn step_carousel(&mut self, direction: Direction, layout: &dyn Layout) -> Update<Timer> {
        self.carousel
            .step(direction, &self.items, layout)
            .map(Timer::Carousel)
    }

    fn activate(&mut self, index: usize, lock: &mut ScrollLock, layout: &dyn Layout) -> Update<Timer> {
        if self.carousel.is_locked() {
            return Update::none();
        }
        let Some(position) = self.items.position_of(index) else {
            return Update::none();
        };
        self.carousel.set_cursor(position);
        let mut update = self.carousel.render(&self.items, layout, true).map(Timer::Carousel);
        update.merge(
            self.lightbox
                .open(position, &self.items, lock, layout.scroll_y())
                .map(Timer::Lightbox),
        );
        update
    }

    fn navigate_lightbox(&mut self, direction: Direction, layout: &dyn Layout) -> Update<Timer> {
        let mut update = self.lightbox.navigate(direction, &self.items).map(Timer::Lightbox);
        if update.is_empty() {
            return update;
        }
        self.carousel.set_cursor(self.lightbox.cursor());
        update.merge(self.carousel.render(&self.items, layout, true).map(Timer::Carousel));
        update
    }

    /// Both cursors return to 0 and the animation lock is cleared, so the
    /// track is written at position 0 immediately. An open lightbox follows
    /// to the first visible item, or closes when nothing is visible.
    fn apply_filter(&mut self, filter: TagFilter, lock: &mut ScrollLock, layout: &dyn Layout) -> Update<Timer> {
        tracing::debug!(?filter, "gallery filter changed");
        self.items.apply_filter(filter);

        let mut update: Update<Timer> = self
            .items
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| Effect::SetDisplay {
                element: Element::GalleryItem(index),
                display: if item.is_visible() {
                    Display::Block
                } else {
                    Display::None
                },
            })
            .collect::<Vec<_>>()
            .into();

        self.carousel.reset_lock();
        self.carousel.set_cursor(0);
        update.merge(self.lightbox.retarget(0, &self.items).map(Timer::Lightbox));
        if self.items.is_empty() {
            update.merge(self.lightbox.close(lock).map(Timer::Lightbox));
            return update;
        }
        update.merge(self.carousel.render(&self.items, layout, true).map(Timer::Carousel));
        update.effects.extend(self.loader.scan(&mut self.items, layout));
        update
    }
}
