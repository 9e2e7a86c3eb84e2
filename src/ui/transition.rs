// SPDX-License-Identifier: MPL-2.0
//! Page loader and animated transitions between pages.

use crate::config::Timing;
use crate::ui::effect::{Effect, Element, Update};
use crate::ui::surface::LinkMarkup;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    HideLoader,
    /// Leave for `href` once the transition layer has covered the page.
    Navigate(String),
}

/// Hides the loader some time after the window `load` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    delay: Duration,
}

impl Loader {
    /// `None` when the page has no loader.
    #[must_use]
    pub fn new(present: bool, timing: &Timing) -> Option<Self> {
        present.then_some(Self {
            delay: timing.loader,
        })
    }

    #[must_use]
    pub fn on_load(&self) -> Update<Timer> {
        let mut update = Update::none();
        update.after(self.delay, Timer::HideLoader);
        update
    }
}

/// Intercepts internal links to slide the transition layer in first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTransition {
    links: Vec<LinkMarkup>,
    delay: Duration,
}

impl PageTransition {
    /// `None` when the page has no transition layer.
    #[must_use]
    pub fn new(present: bool, links: &[LinkMarkup], timing: &Timing) -> Option<Self> {
        present.then(|| Self {
            links: links.to_vec(),
            delay: timing.page_transition,
        })
    }

    /// Handles a click on link `index`; uninterested links produce nothing.
    #[must_use]
    pub fn on_click(&self, index: usize) -> Update<Timer> {
        let Some(link) = self.links.get(index).filter(|link| intercepts(link)) else {
            return Update::none();
        };
        tracing::debug!(href = %link.href, "page transition started");
        let mut update = Update::effect(Effect::TranslateY {
            element: Element::PageTransition,
            offset_px: 0.0,
        });
        update.after(self.delay, Timer::Navigate(link.href.clone()));
        update
    }
}

/// Internal, same-tab, non-anchor links.
#[must_use]
pub fn intercepts(link: &LinkMarkup) -> bool {
    !link.target_blank && !link.href.is_empty() && !link.href.starts_with('#')
}

/// Effects for a fired transition timer.
#[must_use]
pub fn on_timer(timer: Timer) -> Vec<Effect> {
    match timer {
        Timer::HideLoader => vec![Effect::SetClass {
            element: Element::Loader,
            class: "hidden",
            on: true,
        }],
        Timer::Navigate(href) => vec![Effect::Navigate { href }],
    }
}
