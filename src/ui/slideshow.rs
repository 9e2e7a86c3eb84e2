// SPDX-License-Identifier: MPL-2.0
//! Auto-rotating slide groups and the music showcase built on them.
//!
//! Each (re)start bumps a generation; ticks from an older generation are
//! ignored, which is how a stopped interval stays stopped.

use crate::config::Timing;
use crate::domain::gallery::{step, Direction, Item};
use crate::ui::effect::{Effect, Element, LockStyle, OverlayKind, SlideGroup, Update};
use crate::ui::gallery::lightbox::{self, KeyAction, Lightbox, LightboxTiming};
use crate::ui::input::Key;
use crate::ui::scroll_lock::ScrollLock;
use crate::ui::surface::ShowcaseMarkup;
use std::time::Duration;

// =============================================================================
// Slideshow
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick(pub u64);

/// Interval-driven rotation of the `active` class over a slide group.
#[derive(Debug, Clone, PartialEq)]
pub struct Slideshow {
    group: SlideGroup,
    len: usize,
    current: usize,
    running: bool,
    generation: u64,
    interval: Duration,
}

impl Slideshow {
    /// `None` for an empty group.
    #[must_use]
    pub fn new(group: SlideGroup, len: usize, interval: Duration) -> Option<Self> {
        (len > 0).then_some(Self {
            group,
            len,
            current: 0,
            running: false,
            generation: 0,
            interval,
        })
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Starts (or restarts) the interval from now.
    pub fn start(&mut self) -> Update<Tick> {
        self.generation += 1;
        self.running = true;
        let mut update = Update::none();
        update.after(self.interval, Tick(self.generation));
        update
    }

    pub fn stop(&mut self) {
        self.generation += 1;
        self.running = false;
    }

    /// Manual step; the interval restarts afterwards.
    pub fn step(&mut self, direction: Direction) -> Update<Tick> {
        let mut update: Update<Tick> = self.advance(direction).into();
        self.stop();
        update.merge(self.start());
        update
    }

    pub fn on_tick(&mut self, tick: Tick) -> Update<Tick> {
        if !self.running || tick.0 != self.generation {
            return Update::none();
        }
        let mut update: Update<Tick> = self.advance(Direction::Next).into();
        update.after(self.interval, tick);
        update
    }

    fn advance(&mut self, direction: Direction) -> Vec<Effect> {
        let Some(next) = step(self.current, self.len, direction) else {
            return Vec::new();
        };
        let previous = std::mem::replace(&mut self.current, next);
        vec![
            Effect::SetClass {
                element: Element::Slide(self.group, previous),
                class: "active",
                on: false,
            },
            Effect::SetClass {
                element: Element::Slide(self.group, next),
                class: "active",
                on: true,
            },
        ]
    }
}

// =============================================================================
// Music Showcase
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    Slideshow(Tick),
    Lightbox(lightbox::Timer),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Previous,
    Next,
    /// A slide image was clicked.
    OpenSlide(usize),
    LightboxNavigate(Direction),
    LightboxClose,
    Key(Key),
    PointerEnter,
    PointerLeave,
}

/// Rotating music slides with a lightbox over all of them.
///
/// The slideshow is stopped while the lightbox is open.
#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    slides: Vec<Item>,
    slideshow: Slideshow,
    lightbox: Option<Lightbox>,
}

impl Showcase {
    #[must_use]
    pub fn new(markup: &ShowcaseMarkup, timing: &Timing) -> Option<Self> {
        let slideshow = Slideshow::new(SlideGroup::Music, markup.slides.len(), timing.music_interval)?;
        let lightbox = markup.lightbox.then(|| {
            Lightbox::new(
                OverlayKind::Music,
                true,
                LockStyle::Overflow,
                LightboxTiming {
                    close_delay: timing.lightbox_close,
                    fade_restore: timing.lightbox_fade_restore,
                },
            )
        });
        Some(Self {
            slides: markup.slides.clone(),
            slideshow,
            lightbox,
        })
    }

    #[must_use]
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    #[must_use]
    pub fn lightbox(&self) -> Option<&Lightbox> {
        self.lightbox.as_ref()
    }

    fn lightbox_open(&self) -> bool {
        self.lightbox.as_ref().is_some_and(Lightbox::is_open)
    }

    pub fn init(&mut self) -> Update<Timer> {
        self.slideshow.start().map(Timer::Slideshow)
    }

    pub fn handle(&mut self, msg: Message, lock: &mut ScrollLock, scroll_y: f32) -> Update<Timer> {
        match msg {
            Message::Previous => self.slideshow.step(Direction::Previous).map(Timer::Slideshow),
            Message::Next => self.slideshow.step(Direction::Next).map(Timer::Slideshow),
            Message::OpenSlide(index) => self.open(index, lock, scroll_y),
            Message::LightboxNavigate(direction) => self.navigate(direction),
            Message::LightboxClose => self.close(lock),
            Message::Key(key) => {
                match self.lightbox.as_ref().and_then(|lightbox| lightbox.key_action(&key)) {
                    Some(KeyAction::Close) => self.close(lock),
                    Some(KeyAction::Navigate(direction)) => self.navigate(direction),
                    None => Update::none(),
                }
            }
            Message::PointerEnter => {
                self.slideshow.stop();
                Update::none()
            }
            Message::PointerLeave if self.lightbox_open() => Update::none(),
            Message::PointerLeave => self.slideshow.start().map(Timer::Slideshow),
        }
    }

    pub fn on_timer(&mut self, timer: Timer) -> Update<Timer> {
        match timer {
            Timer::Slideshow(tick) => self.slideshow.on_tick(tick).map(Timer::Slideshow),
            Timer::Lightbox(timer) => match self.lightbox.as_mut() {
                Some(lightbox) => lightbox.on_timer(timer).map(Timer::Lightbox),
                None => Update::none(),
            },
        }
    }

    /// Closes the lightbox after another overlay took the scroll lock.
    pub fn dismiss_lightbox(&mut self) -> Update<Timer> {
        let Some(lightbox) = self.lightbox.as_mut() else {
            return Update::none();
        };
        let mut update = lightbox.dismiss().map(Timer::Lightbox);
        update.merge(self.slideshow.start().map(Timer::Slideshow));
        update
    }

    fn open(&mut self, index: usize, lock: &mut ScrollLock, scroll_y: f32) -> Update<Timer> {
        let Some(lightbox) = self.lightbox.as_mut() else {
            return Update::none();
        };
        let update = lightbox
            .open(index, &self.slides, lock, scroll_y)
            .map(Timer::Lightbox);
        if !update.is_empty() {
            self.slideshow.stop();
        }
        update
    }

    fn navigate(&mut self, direction: Direction) -> Update<Timer> {
        match self.lightbox.as_mut() {
            Some(lightbox) => lightbox.navigate(direction, &self.slides).map(Timer::Lightbox),
            None => Update::none(),
        }
    }

    fn close(&mut self, lock: &mut ScrollLock) -> Update<Timer> {
        let Some(lightbox) = self.lightbox.as_mut().filter(|lightbox| lightbox.is_open()) else {
            return Update::none();
        };
        let mut update = lightbox.close(lock).map(Timer::Lightbox);
        update.merge(self.slideshow.start().map(Timer::Slideshow));
        update
    }
}
