// SPDX-License-Identifier: MPL-2.0
//! Visual writes the controllers ask the embedder to perform.
//!
//! Controllers never touch the page directly. Every state change comes out
//! as an [`Effect`] addressed to an [`Element`], and every delayed
//! continuation as a timer request in an [`Update`].

use crate::domain::contact::ContactPayload;
use std::time::Duration;

/// Which lightbox overlay an effect targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// The filterable photo gallery lightbox.
    Gallery,
    /// The music showcase lightbox.
    Music,
}

/// Which auto-rotating slide group an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlideGroup {
    Music,
    Tech,
}

/// Addressable page elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    GalleryItem(usize),
    Overlay(OverlayKind),
    OverlayImage(OverlayKind),
    Slide(SlideGroup, usize),
    Section(usize),
    StaggerChild(usize),
    Parallax(usize),
    MenuToggle,
    Navbar,
    Header,
    NavItem(usize),
    Loader,
    PageTransition,
}

/// CSS `display` values the controllers use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    None,
}

/// How the body is prevented from scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockStyle {
    /// `overflow: hidden` only.
    Overflow,
    /// Body pinned with `position: fixed` at the saved offset, plus overflow.
    Pinned,
}

/// Body scroll state writes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyScroll {
    Locked { style: LockStyle, offset: f32 },
    /// Styles cleared; `restore_to` is set when the page must jump back.
    Released { restore_to: Option<f32> },
}

/// Severity of the contact form feedback line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SetClass {
        element: Element,
        class: &'static str,
        on: bool,
    },
    SetDisplay {
        element: Element,
        display: Display,
    },
    SetOpacity {
        element: Element,
        opacity: f32,
    },
    SetScale {
        element: Element,
        scale: f32,
    },
    /// Vertical translation (parallax, page transition layer).
    TranslateY {
        element: Element,
        offset_px: f32,
    },
    AnimationDelay {
        element: Element,
        delay: Duration,
    },
    /// Horizontal offset of the gallery track.
    TrackTransform {
        offset_px: f32,
        animated: bool,
    },
    ShowImage {
        overlay: OverlayKind,
        source: String,
        alt: String,
    },
    SetCounter {
        overlay: OverlayKind,
        text: String,
    },
    BodyScroll(BodyScroll),
    ScrollTo {
        top: f32,
        smooth: bool,
    },
    Navigate {
        href: String,
    },
    FormMessage {
        kind: MessageKind,
        key: &'static str,
    },
    HideFormMessage,
    SubmitBusy(bool),
    ResetForm,
    /// Issue the one outbound request; the result comes back as an input event.
    SendContact(ContactPayload),
}

/// Effects plus delayed continuations produced by one controller call.
#[derive(Debug, Clone, PartialEq)]
pub struct Update<T> {
    pub effects: Vec<Effect>,
    pub timers: Vec<(Duration, T)>,
}

impl<T> Update<T> {
    #[must_use]
    pub fn none() -> Self {
        Self {
            effects: Vec::new(),
            timers: Vec::new(),
        }
    }

    #[must_use]
    pub fn effect(effect: Effect) -> Self {
        let mut update = Self::none();
        update.effects.push(effect);
        update
    }

    pub fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub fn after(&mut self, delay: Duration, timer: T) {
        self.timers.push((delay, timer));
    }

    pub fn merge(&mut self, other: Update<T>) {
        self.effects.extend(other.effects);
        self.timers.extend(other.timers);
    }

    #[must_use]
    pub fn map<U>(self, f: impl Fn(T) -> U) -> Update<U> {
        Update {
            effects: self.effects,
            timers: self
                .timers
                .into_iter()
                .map(|(delay, timer)| (delay, f(timer)))
                .collect(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.timers.is_empty()
    }
}

impl<T> Default for Update<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<Vec<Effect>> for Update<T> {
    fn from(effects: Vec<Effect>) -> Self {
        Self {
            effects,
            timers: Vec::new(),
        }
    }
}
