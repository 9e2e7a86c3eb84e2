// SPDX-License-Identifier: MPL-2.0
//! Input router for one page.
//!
//! [`Page`] owns every feature the page's markup enables, the shared
//! [`ScrollLock`] and the virtual-clock [`Scheduler`]. Events are handled
//! strictly in dispatch order; timers fire in deadline order when the
//! embedder advances time. Both return the effects to apply, in order.

use crate::config::{Config, Timing};
use crate::domain::gallery::Direction;
use crate::scheduler::Scheduler;
use crate::ui::contact_form::{self, ContactForm};
use crate::ui::effect::{Effect, OverlayKind, SlideGroup, Update};
use crate::ui::gallery::{self, Gallery};
use crate::ui::input::{InputEvent, Key, Region, Target};
use crate::ui::navbar::{self, Navbar};
use crate::ui::reveal::{self, Parallax, Reveal};
use crate::ui::scroll_lock::{ScrollLock, ScrollOwner};
use crate::ui::slideshow::{self, Showcase, Slideshow, Tick};
use crate::ui::surface::{Layout, PageSurface};
use crate::ui::transition::{self, Loader, PageTransition};
use std::time::Duration;

/// Every delayed continuation on the page, tagged by feature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timer {
    Gallery(gallery::Timer),
    Navbar(navbar::Timer),
    Reveal(reveal::Timer),
    Transition(transition::Timer),
    Showcase(slideshow::Timer),
    Tech(Tick),
    Form(contact_form::Timer),
}

#[derive(Debug)]
pub struct Page {
    scheduler: Scheduler<Timer>,
    lock: ScrollLock,
    timing: Timing,
    gallery: Option<Gallery>,
    navbar: Navbar,
    reveal: Reveal,
    stagger_children: usize,
    parallax: Option<Parallax>,
    loader: Option<Loader>,
    transition: Option<PageTransition>,
    showcase: Option<Showcase>,
    tech: Option<Slideshow>,
    form: Option<ContactForm>,
}

impl Page {
    /// Wires up the features present in `surface`; absent ones stay inert.
    #[must_use]
    pub fn new(surface: &PageSurface, config: &Config) -> Self {
        let timing = Timing::from(&config.timing);
        let layout = &config.layout;
        Self {
            scheduler: Scheduler::new(),
            lock: ScrollLock::new(),
            gallery: surface
                .gallery
                .as_ref()
                .and_then(|markup| Gallery::new(markup, &timing, layout)),
            navbar: Navbar::new(&surface.navigation, &surface.sections, &timing, layout),
            reveal: Reveal::new(surface.sections.len(), &timing, layout),
            stagger_children: surface.stagger_children,
            parallax: Parallax::new(surface.parallax, &timing, layout),
            loader: Loader::new(surface.loader, &timing),
            transition: PageTransition::new(surface.page_transition, &surface.links, &timing),
            showcase: surface
                .music
                .as_ref()
                .and_then(|markup| Showcase::new(markup, &timing)),
            tech: Slideshow::new(SlideGroup::Tech, surface.tech_slides, timing.tech_interval),
            form: surface
                .contact_form
                .map(|has_message_line| ContactForm::new(has_message_line, &timing, layout)),
            timing,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.pending()
    }

    #[must_use]
    pub fn scroll_lock(&self) -> &ScrollLock {
        &self.lock
    }

    #[must_use]
    pub fn gallery(&self) -> Option<&Gallery> {
        self.gallery.as_ref()
    }

    #[must_use]
    pub fn navbar(&self) -> &Navbar {
        &self.navbar
    }

    #[must_use]
    pub fn reveal(&self) -> &Reveal {
        &self.reveal
    }

    #[must_use]
    pub fn showcase(&self) -> Option<&Showcase> {
        self.showcase.as_ref()
    }

    #[must_use]
    pub fn tech(&self) -> Option<&Slideshow> {
        self.tech.as_ref()
    }

    #[must_use]
    pub fn form(&self) -> Option<&ContactForm> {
        self.form.as_ref()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Runs once the document is ready.
    pub fn init(&mut self, layout: &dyn Layout) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(gallery) = self.gallery.as_mut() {
            let update = gallery.init(layout);
            self.apply(update, Timer::Gallery, &mut effects);
            effects.extend(self.reveal.reveal_all());
        }
        let update = self.reveal.init();
        self.apply(update, Timer::Reveal, &mut effects);
        let update = self.navbar.init();
        self.apply(update, Timer::Navbar, &mut effects);
        effects.extend(reveal::stagger(self.stagger_children, self.timing.stagger_delay));
        if let Some(showcase) = self.showcase.as_mut() {
            let update = showcase.init();
            self.apply(update, Timer::Showcase, &mut effects);
        }
        if let Some(tech) = self.tech.as_mut() {
            let update = tech.start();
            self.apply(update, Timer::Tech, &mut effects);
        }

        tracing::debug!(pending = self.scheduler.pending(), "page initialized");
        effects
    }

    /// Handles one input event.
    pub fn dispatch(&mut self, event: InputEvent, layout: &dyn Layout) -> Vec<Effect> {
        let mut effects = Vec::new();
        match event {
            InputEvent::Click(target) => self.click(target, layout, &mut effects),
            InputEvent::KeyDown(key) => self.key(key, layout, &mut effects),
            InputEvent::FilterChanged(value) => {
                self.gallery_message(gallery::Message::FilterChanged(value), layout, &mut effects);
            }
            InputEvent::Resize => self.gallery_message(gallery::Message::Resize, layout, &mut effects),
            InputEvent::Scroll => self.scroll(layout, &mut effects),
            InputEvent::Load => {
                if let Some(loader) = self.loader {
                    self.apply(loader.on_load(), Timer::Transition, &mut effects);
                }
            }
            InputEvent::ImageLoaded(index) => {
                self.gallery_message(gallery::Message::ImageLoaded(index), layout, &mut effects);
            }
            InputEvent::PointerEnter(region) => self.hover(region, true, layout, &mut effects),
            InputEvent::PointerLeave(region) => self.hover(region, false, layout, &mut effects),
            InputEvent::FormSubmitted(payload) => {
                if let Some(form) = self.form.as_mut() {
                    let update = form.submit(payload);
                    self.apply(update, Timer::Form, &mut effects);
                }
            }
            InputEvent::FormResponse(outcome) => {
                if let Some(form) = self.form.as_mut() {
                    let update = form.on_response(outcome);
                    self.apply(update, Timer::Form, &mut effects);
                }
            }
        }
        self.settle_displaced(&mut effects);
        effects
    }

    /// Moves the clock forward by `by`, firing every timer that comes due.
    pub fn advance(&mut self, by: Duration, layout: &dyn Layout) -> Vec<Effect> {
        let target = self.scheduler.now() + by;
        let mut effects = Vec::new();
        while let Some(timer) = self.scheduler.pop_due(target) {
            self.fire(timer, layout, &mut effects);
            self.settle_displaced(&mut effects);
        }
        self.scheduler.settle(target);
        effects
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ROUTING
    // ═══════════════════════════════════════════════════════════════════════

    fn click(&mut self, target: Target, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        match target {
            Target::CarouselPrevious => self.gallery_message(gallery::Message::Previous, layout, effects),
            Target::CarouselNext => self.gallery_message(gallery::Message::Next, layout, effects),
            Target::GalleryItem(index) => {
                self.gallery_message(gallery::Message::Activate(index), layout, effects);
            }
            Target::LightboxPrevious(kind) => self.lightbox_navigate(kind, Direction::Previous, layout, effects),
            Target::LightboxNext(kind) => self.lightbox_navigate(kind, Direction::Next, layout, effects),
            Target::LightboxClose(kind) | Target::LightboxBackdrop(kind) => match kind {
                OverlayKind::Gallery => self.gallery_message(gallery::Message::LightboxClose, layout, effects),
                OverlayKind::Music => {
                    self.showcase_message(slideshow::Message::LightboxClose, layout, effects);
                }
            },
            Target::MenuToggle => self.navbar_message(navbar::Message::ToggleMenu, layout, effects),
            Target::NavLink => self.navbar_message(navbar::Message::CloseMenu, layout, effects),
            Target::Anchor(href) => self.navbar_message(navbar::Message::Anchor(href), layout, effects),
            Target::Link(index) => {
                if let Some(update) = self.transition.as_ref().map(|transition| transition.on_click(index)) {
                    self.apply(update, Timer::Transition, effects);
                }
            }
            Target::MusicSlide(index) => {
                self.showcase_message(slideshow::Message::OpenSlide(index), layout, effects);
            }
            Target::MusicPrevious => self.showcase_message(slideshow::Message::Previous, layout, effects),
            Target::MusicNext => self.showcase_message(slideshow::Message::Next, layout, effects),
        }
    }

    /// Keys go to whichever lightbox is open.
    fn key(&mut self, key: Key, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        let gallery_open = self
            .gallery
            .as_ref()
            .is_some_and(|gallery| gallery.lightbox().is_open());
        if gallery_open {
            self.gallery_message(gallery::Message::Key(key), layout, effects);
        } else {
            self.showcase_message(slideshow::Message::Key(key), layout, effects);
        }
    }

    fn scroll(&mut self, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        let now = self.scheduler.now();
        self.navbar_message(navbar::Message::Scroll, layout, effects);
        effects.extend(self.reveal.on_scroll(now, layout));
        if let Some(parallax) = self.parallax.as_mut() {
            effects.extend(parallax.on_scroll(now, layout));
        }
        self.gallery_message(gallery::Message::Scroll, layout, effects);
    }

    fn hover(&mut self, region: Region, entered: bool, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        match region {
            Region::MusicShowcase => {
                let msg = if entered {
                    slideshow::Message::PointerEnter
                } else {
                    slideshow::Message::PointerLeave
                };
                self.showcase_message(msg, layout, effects);
            }
            Region::TechBadges => {
                let Some(tech) = self.tech.as_mut() else {
                    return;
                };
                if entered {
                    tech.stop();
                } else {
                    let update = tech.start();
                    self.apply(update, Timer::Tech, effects);
                }
            }
        }
    }

    fn lightbox_navigate(
        &mut self,
        kind: OverlayKind,
        direction: Direction,
        layout: &dyn Layout,
        effects: &mut Vec<Effect>,
    ) {
        match kind {
            OverlayKind::Gallery => {
                self.gallery_message(gallery::Message::LightboxNavigate(direction), layout, effects);
            }
            OverlayKind::Music => {
                self.showcase_message(slideshow::Message::LightboxNavigate(direction), layout, effects);
            }
        }
    }

    fn gallery_message(&mut self, msg: gallery::Message, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        if let Some(gallery) = self.gallery.as_mut() {
            let update = gallery.handle(msg, &mut self.lock, layout);
            self.apply(update, Timer::Gallery, effects);
        }
    }

    fn showcase_message(&mut self, msg: slideshow::Message, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        if let Some(showcase) = self.showcase.as_mut() {
            let update = showcase.handle(msg, &mut self.lock, layout.scroll_y());
            self.apply(update, Timer::Showcase, effects);
        }
    }

    fn navbar_message(&mut self, msg: navbar::Message, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        let update = self.navbar.handle(msg, &mut self.lock, layout);
        self.apply(update, Timer::Navbar, effects);
    }

    fn fire(&mut self, timer: Timer, layout: &dyn Layout, effects: &mut Vec<Effect>) {
        match timer {
            Timer::Gallery(timer) => {
                if let Some(gallery) = self.gallery.as_mut() {
                    let update = gallery.on_timer(timer, layout);
                    self.apply(update, Timer::Gallery, effects);
                }
            }
            Timer::Navbar(timer) => {
                let update = self.navbar.on_timer(timer, layout);
                self.apply(update, Timer::Navbar, effects);
            }
            Timer::Reveal(timer) => effects.extend(self.reveal.on_timer(timer, layout)),
            Timer::Transition(timer) => effects.extend(transition::on_timer(timer)),
            Timer::Showcase(timer) => {
                if let Some(showcase) = self.showcase.as_mut() {
                    let update = showcase.on_timer(timer);
                    self.apply(update, Timer::Showcase, effects);
                }
            }
            Timer::Tech(tick) => {
                if let Some(tech) = self.tech.as_mut() {
                    let update = tech.on_tick(tick);
                    self.apply(update, Timer::Tech, effects);
                }
            }
            Timer::Form(timer) => {
                if let Some(form) = self.form.as_mut() {
                    effects.extend(form.on_timer(timer));
                }
            }
        }
    }

    /// Closes whichever overlay lost the scroll lock, leaving the body alone.
    fn settle_displaced(&mut self, effects: &mut Vec<Effect>) {
        while let Some(owner) = self.lock.take_displaced() {
            tracing::debug!(?owner, "overlay displaced");
            match owner {
                ScrollOwner::Menu => {
                    let update = self.navbar.dismiss_menu();
                    self.apply(update, Timer::Navbar, effects);
                }
                ScrollOwner::Lightbox(OverlayKind::Gallery) => {
                    if let Some(gallery) = self.gallery.as_mut() {
                        let update = gallery.dismiss_lightbox();
                        self.apply(update, Timer::Gallery, effects);
                    }
                }
                ScrollOwner::Lightbox(OverlayKind::Music) => {
                    if let Some(showcase) = self.showcase.as_mut() {
                        let update = showcase.dismiss_lightbox();
                        self.apply(update, Timer::Showcase, effects);
                    }
                }
            }
        }
    }

    fn apply<T>(&mut self, update: Update<T>, wrap: impl Fn(T) -> Timer, effects: &mut Vec<Effect>) {
        effects.extend(update.effects);
        for (delay, timer) in update.timers {
            self.scheduler.schedule(delay, wrap(timer));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::Item;
    use crate::ui::effect::{BodyScroll, Element, LockStyle};
    use crate::ui::surface::{GalleryMarkup, LinkMarkup, NavigationMarkup, StaticLayout};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn surface() -> PageSurface {
        PageSurface {
            gallery: Some(GalleryMarkup {
                items: (0..4).map(|i| Item::new(format!("{i}.jpg"), "")).collect(),
                lightbox: true,
                counter: true,
            }),
            navigation: NavigationMarkup {
                mobile_menu: true,
                header: true,
                nav_items: Vec::new(),
            },
            links: vec![LinkMarkup {
                href: "/about.html".into(),
                target_blank: false,
            }],
            loader: true,
            page_transition: true,
            ..PageSurface::default()
        }
    }

    fn page() -> (Page, StaticLayout) {
        let mut page = Page::new(&surface(), &Config::default());
        let layout = StaticLayout::desktop(4);
        page.init(&layout);
        (page, layout)
    }

    #[test]
    fn bare_surface_is_inert() {
        let mut page = Page::new(&PageSurface::default(), &Config::default());
        let layout = StaticLayout::desktop(0);
        page.init(&layout);
        assert!(page.gallery().is_none());
        assert!(page
            .dispatch(InputEvent::Click(Target::CarouselNext), &layout)
            .is_empty());
        assert!(page.dispatch(InputEvent::Load, &layout).is_empty());
    }

    #[test]
    fn carousel_lock_releases_after_transition() {
        let (mut page, layout) = page();
        page.advance(ms(400), &layout);

        page.dispatch(InputEvent::Click(Target::CarouselNext), &layout);
        assert!(page
            .dispatch(InputEvent::Click(Target::CarouselNext), &layout)
            .is_empty());

        page.advance(ms(399), &layout);
        assert!(page.gallery().unwrap().carousel().is_locked());
        page.advance(ms(1), &layout);
        assert!(!page.gallery().unwrap().carousel().is_locked());
    }

    #[test]
    fn lightbox_displaces_open_menu() {
        let (mut page, layout) = page();
        page.advance(ms(400), &layout);

        page.dispatch(InputEvent::Click(Target::MenuToggle), &layout);
        assert_eq!(page.scroll_lock().owner(), Some(ScrollOwner::Menu));

        let effects = page.dispatch(InputEvent::Click(Target::GalleryItem(1)), &layout);
        assert!(!page.navbar().is_menu_open());
        assert_eq!(
            page.scroll_lock().owner(),
            Some(ScrollOwner::Lightbox(OverlayKind::Gallery))
        );
        assert!(effects.contains(&Effect::SetClass {
            element: Element::Navbar,
            class: "active",
            on: false
        }));
        assert!(effects.contains(&Effect::BodyScroll(BodyScroll::Locked {
            style: LockStyle::Pinned,
            offset: 0.0
        })));

        let closed = page.dispatch(InputEvent::KeyDown(Key::Escape), &layout);
        let releases = closed
            .iter()
            .filter(|effect| matches!(effect, Effect::BodyScroll(BodyScroll::Released { .. })))
            .count();
        assert_eq!(releases, 1);
        assert!(!page.scroll_lock().is_locked());
    }

    #[test]
    fn loader_and_transition_follow_the_clock() {
        let (mut page, layout) = page();
        page.dispatch(InputEvent::Load, &layout);
        page.dispatch(InputEvent::Click(Target::Link(0)), &layout);

        let early = page.advance(ms(800), &layout);
        assert!(early.contains(&Effect::Navigate {
            href: "/about.html".into()
        }));
        assert!(!early.iter().any(|effect| matches!(
            effect,
            Effect::SetClass {
                element: Element::Loader,
                ..
            }
        )));

        let late = page.advance(ms(400), &layout);
        assert!(late.contains(&Effect::SetClass {
            element: Element::Loader,
            class: "hidden",
            on: true
        }));
    }

    #[test]
    fn gallery_page_reveals_every_section() {
        let mut surface = surface();
        surface.sections = vec![Default::default(), Default::default()];
        let mut page = Page::new(&surface, &Config::default());
        page.init(&StaticLayout::desktop(4));
        assert!(page.reveal().has_appeared(0));
        assert!(page.reveal().has_appeared(1));
    }
}
