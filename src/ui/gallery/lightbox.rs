// SPDX-License-Identifier: MPL-2.0
//! Full-screen viewer over a sequence of items.
//!
//! The lightbox keeps its own cursor. Owners that mirror it elsewhere (the
//! gallery carousel) read [`Lightbox::cursor`] after each navigation.
//!
//! ```text
//! Closed --open(i)--> Open{cursor=i} --prev/next--> Open --close--> Closed
//! ```

use crate::domain::gallery::{step, Direction, Sequence};
use crate::ui::effect::{Display, Effect, Element, LockStyle, OverlayKind, Update};
use crate::ui::input::Key;
use crate::ui::scroll_lock::{ScrollLock, ScrollOwner};
use std::time::Duration;

/// Opacity the image dips to while switching items.
pub const DIP_OPACITY: f32 = crate::config::LIGHTBOX_DIP_OPACITY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

/// Delayed continuations of the lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Bring the image back to full opacity after a navigation dip.
    RestoreOpacity,
    /// Remove the overlay from layout once the fade-out is over.
    ///
    /// Carries the close generation; stale hides are ignored.
    Hide(u64),
}

/// What a key press means to an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Navigate(Direction),
}

/// Durations the lightbox waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightboxTiming {
    pub close_delay: Duration,
    pub fade_restore: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Lightbox {
    kind: OverlayKind,
    state: OverlayState,
    cursor: usize,
    counter: bool,
    lock_style: LockStyle,
    timing: LightboxTiming,
    close_generation: u64,
}

impl Lightbox {
    #[must_use]
    pub fn new(kind: OverlayKind, counter: bool, lock_style: LockStyle, timing: LightboxTiming) -> Self {
        Self {
            kind,
            state: OverlayState::Closed,
            cursor: 0,
            counter,
            lock_style,
            timing,
            close_generation: 0,
        }
    }

    #[must_use]
    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn owner(&self) -> ScrollOwner {
        ScrollOwner::Lightbox(self.kind)
    }

    /// Opens on `position`; a no-op when the sequence has no such item.
    pub fn open(
        &mut self,
        position: usize,
        items: &dyn Sequence,
        lock: &mut ScrollLock,
        scroll_y: f32,
    ) -> Update<Timer> {
        if position >= items.len() {
            return Update::none();
        }
        self.cursor = position;
        self.state = OverlayState::Open;
        tracing::debug!(overlay = ?self.kind, position, "lightbox opened");

        let mut update = Update::effect(Effect::SetScale {
            element: Element::OverlayImage(self.kind),
            scale: 1.0,
        });
        update.effects.extend(self.show_current(items));
        if let Some(body) = lock.acquire(self.owner(), self.lock_style, scroll_y) {
            update.push(body);
        }
        update.push(Effect::SetDisplay {
            element: Element::Overlay(self.kind),
            display: Display::Flex,
        });
        update.push(Effect::SetClass {
            element: Element::Overlay(self.kind),
            class: "active",
            on: true,
        });
        update
    }

    /// Moves one item with wraparound; only while open.
    pub fn navigate(&mut self, direction: Direction, items: &dyn Sequence) -> Update<Timer> {
        if !self.is_open() {
            return Update::none();
        }
        let Some(cursor) = step(self.cursor, items.len(), direction) else {
            return Update::none();
        };
        self.cursor = cursor;

        let mut update = Update::effect(Effect::SetOpacity {
            element: Element::OverlayImage(self.kind),
            opacity: DIP_OPACITY,
        });
        update.effects.extend(self.show_current(items));
        update.after(self.timing.fade_restore, Timer::RestoreOpacity);
        update
    }

    /// Moves the cursor to `position` without the navigation dip.
    ///
    /// Used when the sequence itself changed; an open lightbox shows the new
    /// item and counter at once.
    pub fn retarget(&mut self, position: usize, items: &dyn Sequence) -> Update<Timer> {
        self.cursor = position;
        if !self.is_open() {
            return Update::none();
        }
        self.show_current(items).into()
    }

    /// Fades out, releases the scroll lock and hides after the close delay.
    pub fn close(&mut self, lock: &mut ScrollLock) -> Update<Timer> {
        if !self.is_open() {
            return Update::none();
        }
        let mut update = self.fade_out();
        if let Some(body) = lock.release(self.owner()) {
            update.effects.insert(1, body);
        }
        update
    }

    /// Closes after losing the scroll lock to another overlay.
    ///
    /// The body styles now belong to the new owner and are left untouched.
    pub fn dismiss(&mut self) -> Update<Timer> {
        if !self.is_open() {
            return Update::none();
        }
        self.fade_out()
    }

    pub fn on_timer(&mut self, timer: Timer) -> Update<Timer> {
        match timer {
            Timer::RestoreOpacity => Update::effect(Effect::SetOpacity {
                element: Element::OverlayImage(self.kind),
                opacity: 1.0,
            }),
            Timer::Hide(generation)
                if self.state == OverlayState::Closed && generation == self.close_generation =>
            {
                Update::effect(Effect::SetDisplay {
                    element: Element::Overlay(self.kind),
                    display: Display::None,
                })
            }
            Timer::Hide(_) => Update::none(),
        }
    }

    /// Keyboard bindings, honoured only while open.
    #[must_use]
    pub fn key_action(&self, key: &Key) -> Option<KeyAction> {
        if !self.is_open() {
            return None;
        }
        match key {
            Key::Escape => Some(KeyAction::Close),
            Key::ArrowLeft => Some(KeyAction::Navigate(Direction::Previous)),
            Key::ArrowRight => Some(KeyAction::Navigate(Direction::Next)),
            Key::Other(_) => None,
        }
    }

    fn fade_out(&mut self) -> Update<Timer> {
        self.state = OverlayState::Closed;
        self.close_generation += 1;
        tracing::debug!(overlay = ?self.kind, "lightbox closed");

        let mut update = Update::effect(Effect::SetClass {
            element: Element::Overlay(self.kind),
            class: "active",
            on: false,
        });
        update.after(self.timing.close_delay, Timer::Hide(self.close_generation));
        update
    }

    fn show_current(&self, items: &dyn Sequence) -> Vec<Effect> {
        let Some(item) = items.get(self.cursor) else {
            return Vec::new();
        };
        let mut effects = vec![Effect::ShowImage {
            overlay: self.kind,
            source: item.source().to_string(),
            alt: item.alt().to_string(),
        }];
        if self.counter {
            effects.push(Effect::SetCounter {
                overlay: self.kind,
                text: format!("{} / {}", self.cursor + 1, items.len()),
            });
        }
        effects
    }
}
