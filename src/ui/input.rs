// SPDX-License-Identifier: MPL-2.0
//! Input events the page router accepts.

use super::effect::OverlayKind;
use crate::contact::SubmitOutcome;
use crate::domain::contact::ContactPayload;

/// Keys the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other(String),
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Escape" => Self::Escape,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Click targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    CarouselPrevious,
    CarouselNext,
    /// A gallery item, by index in the full item list.
    GalleryItem(usize),
    LightboxPrevious(OverlayKind),
    LightboxNext(OverlayKind),
    LightboxClose(OverlayKind),
    /// The dimmed area around the lightbox image.
    LightboxBackdrop(OverlayKind),
    MenuToggle,
    /// Any link inside the navbar.
    NavLink,
    /// An in-page anchor with the given `href` (`#about`, `#`, `#top`).
    Anchor(String),
    /// A page link, by index into the surface's link list.
    Link(usize),
    MusicSlide(usize),
    MusicPrevious,
    MusicNext,
}

/// Hover regions that pause slideshows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    MusicShowcase,
    TechBadges,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Click(Target),
    KeyDown(Key),
    /// New value of the gallery filter selector.
    FilterChanged(String),
    Resize,
    Scroll,
    /// The window `load` event.
    Load,
    /// A gallery image finished loading.
    ImageLoaded(usize),
    PointerEnter(Region),
    PointerLeave(Region),
    FormSubmitted(ContactPayload),
    FormResponse(SubmitOutcome),
}
