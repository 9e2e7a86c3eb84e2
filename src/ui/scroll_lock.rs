// SPDX-License-Identifier: MPL-2.0
//! Single owner of the body scroll state.
//!
//! Both the mobile menu and the lightboxes lock page scrolling while shown.
//! Ownership is arbitrated here so the body styles are written by exactly one
//! overlay at a time:
//!
//! - the last overlay to acquire the lock wins; the previous owner is
//!   reported as displaced and must close itself without releasing;
//! - the scroll offset saved by the first acquisition is kept across
//!   ownership transfers;
//! - only the current owner can release, so the body is restored once.

use super::effect::{BodyScroll, Effect, LockStyle, OverlayKind};

/// Overlays that can hold the scroll lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOwner {
    Menu,
    Lightbox(OverlayKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Held {
    owner: ScrollOwner,
    style: LockStyle,
    offset: f32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollLock {
    held: Option<Held>,
    displaced: Option<ScrollOwner>,
}

impl ScrollLock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn owner(&self) -> Option<ScrollOwner> {
        self.held.map(|held| held.owner)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.held.is_some()
    }

    /// Takes the lock for `owner`, saving `offset` if the body was free.
    ///
    /// Returns the body write needed, if any.
    pub fn acquire(&mut self, owner: ScrollOwner, style: LockStyle, offset: f32) -> Option<Effect> {
        match self.held {
            None => {
                self.held = Some(Held {
                    owner,
                    style,
                    offset,
                });
                Some(Effect::BodyScroll(BodyScroll::Locked { style, offset }))
            }
            Some(held) if held.owner == owner => None,
            Some(held) => {
                tracing::debug!(from = ?held.owner, to = ?owner, "scroll lock transferred");
                self.displaced = Some(held.owner);
                let style = stronger(held.style, style);
                self.held = Some(Held {
                    owner,
                    style,
                    offset: held.offset,
                });
                (style != held.style).then_some(Effect::BodyScroll(BodyScroll::Locked {
                    style,
                    offset: held.offset,
                }))
            }
        }
    }

    /// Releases the lock if `owner` holds it.
    pub fn release(&mut self, owner: ScrollOwner) -> Option<Effect> {
        let held = self.held.filter(|held| held.owner == owner)?;
        self.held = None;
        let restore_to = (held.style == LockStyle::Pinned).then_some(held.offset);
        Some(Effect::BodyScroll(BodyScroll::Released { restore_to }))
    }

    /// The overlay that lost the lock in the last transfer, if not yet handled.
    pub fn take_displaced(&mut self) -> Option<ScrollOwner> {
        self.displaced.take()
    }
}

fn stronger(a: LockStyle, b: LockStyle) -> LockStyle {
    if a == LockStyle::Pinned || b == LockStyle::Pinned {
        LockStyle::Pinned
    } else {
        LockStyle::Overflow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GALLERY: ScrollOwner = ScrollOwner::Lightbox(OverlayKind::Gallery);

    #[test]
    fn acquire_and_release_round_trip() {
        let mut lock = ScrollLock::new();
        let locked = lock.acquire(GALLERY, LockStyle::Pinned, 640.0);
        assert_eq!(
            locked,
            Some(Effect::BodyScroll(BodyScroll::Locked {
                style: LockStyle::Pinned,
                offset: 640.0
            }))
        );
        assert_eq!(
            lock.release(GALLERY),
            Some(Effect::BodyScroll(BodyScroll::Released {
                restore_to: Some(640.0)
            }))
        );
        assert!(!lock.is_locked());
    }

    #[test]
    fn overflow_lock_does_not_jump_on_release() {
        let mut lock = ScrollLock::new();
        lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 300.0);
        assert_eq!(
            lock.release(ScrollOwner::Menu),
            Some(Effect::BodyScroll(BodyScroll::Released { restore_to: None }))
        );
    }

    #[test]
    fn reacquire_by_owner_is_silent() {
        let mut lock = ScrollLock::new();
        lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 0.0);
        assert_eq!(lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 0.0), None);
        assert_eq!(lock.take_displaced(), None);
    }

    #[test]
    fn last_opener_wins_and_keeps_first_offset() {
        let mut lock = ScrollLock::new();
        lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 250.0);
        let upgrade = lock.acquire(GALLERY, LockStyle::Pinned, 999.0);

        assert_eq!(
            upgrade,
            Some(Effect::BodyScroll(BodyScroll::Locked {
                style: LockStyle::Pinned,
                offset: 250.0
            }))
        );
        assert_eq!(lock.owner(), Some(GALLERY));
        assert_eq!(lock.take_displaced(), Some(ScrollOwner::Menu));
        assert_eq!(lock.take_displaced(), None);
    }

    #[test]
    fn stale_release_is_ignored() {
        let mut lock = ScrollLock::new();
        lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 0.0);
        lock.acquire(GALLERY, LockStyle::Pinned, 0.0);

        assert_eq!(lock.release(ScrollOwner::Menu), None);
        assert!(lock.is_locked());
        assert!(lock.release(GALLERY).is_some());
        assert_eq!(lock.release(GALLERY), None);
    }

    #[test]
    fn transfer_never_downgrades_style() {
        let mut lock = ScrollLock::new();
        lock.acquire(GALLERY, LockStyle::Pinned, 120.0);
        assert_eq!(lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, 0.0), None);
        assert_eq!(
            lock.release(ScrollOwner::Menu),
            Some(Effect::BodyScroll(BodyScroll::Released {
                restore_to: Some(120.0)
            }))
        );
    }
}
