// SPDX-License-Identifier: MPL-2.0
//! Navigation bar: mobile menu, header state, anchor scrolling and the
//! active section highlight.
//!
//! The mobile menu locks page scrolling while open through the shared
//! [`ScrollLock`], so it can be displaced by a lightbox.

use crate::config::{LayoutConfig, Timing};
use crate::ui::effect::{Effect, Element, LockStyle, Update};
use crate::ui::scroll_lock::{ScrollLock, ScrollOwner};
use crate::ui::surface::{Layout, NavigationMarkup, SectionMarkup};
use std::collections::BTreeSet;
use std::time::Duration;

/// Messages handled by the navbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    /// A link inside the navbar was clicked.
    CloseMenu,
    /// An in-page anchor was clicked.
    Anchor(String),
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// First active-section evaluation after load.
    InitialCheck,
}

/// Offsets the navbar measures against.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Offsets {
    header_fallback: f32,
    active_section: f32,
    scroll_threshold: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navbar {
    has_menu: bool,
    menu_open: bool,
    has_header: bool,
    header_scrolled: bool,
    nav_items: Vec<String>,
    /// Anchor ids, parallel to the page's sections.
    section_ids: Vec<Option<String>>,
    active_items: BTreeSet<usize>,
    offsets: Offsets,
    initial_check: Duration,
}

impl Navbar {
    #[must_use]
    pub fn new(
        markup: &NavigationMarkup,
        sections: &[SectionMarkup],
        timing: &Timing,
        layout: &LayoutConfig,
    ) -> Self {
        Self {
            has_menu: markup.mobile_menu,
            menu_open: false,
            has_header: markup.header,
            header_scrolled: false,
            nav_items: markup.nav_items.clone(),
            section_ids: sections.iter().map(|section| section.id.clone()).collect(),
            active_items: BTreeSet::new(),
            offsets: Offsets {
                header_fallback: layout.header_fallback_px,
                active_section: layout.active_section_offset_px,
                scroll_threshold: layout.header_scroll_threshold_px,
            },
            initial_check: timing.initial_check,
        }
    }

    #[must_use]
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn is_header_scrolled(&self) -> bool {
        self.header_scrolled
    }

    /// Nav items currently highlighted.
    pub fn active_items(&self) -> impl Iterator<Item = usize> + '_ {
        self.active_items.iter().copied()
    }

    pub fn init(&mut self) -> Update<Timer> {
        let mut update = Update::none();
        update.after(self.initial_check, Timer::InitialCheck);
        update
    }

    pub fn handle(&mut self, msg: Message, lock: &mut ScrollLock, layout: &dyn Layout) -> Update<Timer> {
        match msg {
            Message::ToggleMenu => {
                if self.menu_open {
                    self.close_menu(lock)
                } else {
                    self.open_menu(lock, layout.scroll_y())
                }
            }
            Message::CloseMenu => self.close_menu(lock),
            Message::Anchor(href) => self.scroll_to_anchor(&href, lock, layout),
            Message::Scroll => {
                let mut update = self.update_header(layout);
                update.merge(self.update_active_section(layout));
                update
            }
        }
    }

    pub fn on_timer(&mut self, timer: Timer, layout: &dyn Layout) -> Update<Timer> {
        match timer {
            Timer::InitialCheck => self.update_active_section(layout),
        }
    }

    /// Closes the menu after a lightbox took the scroll lock.
    pub fn dismiss_menu(&mut self) -> Update<Timer> {
        if !self.menu_open {
            return Update::none();
        }
        self.menu_open = false;
        menu_classes(false).into()
    }

    fn open_menu(&mut self, lock: &mut ScrollLock, scroll_y: f32) -> Update<Timer> {
        if !self.has_menu {
            return Update::none();
        }
        self.menu_open = true;
        tracing::debug!("mobile menu opened");
        let mut update: Update<Timer> = menu_classes(true).into();
        if let Some(body) = lock.acquire(ScrollOwner::Menu, LockStyle::Overflow, scroll_y) {
            update.push(body);
        }
        update
    }

    fn close_menu(&mut self, lock: &mut ScrollLock) -> Update<Timer> {
        let mut update = self.dismiss_menu();
        if let Some(body) = lock.release(ScrollOwner::Menu) {
            update.push(body);
        }
        update
    }

    fn scroll_to_anchor(&mut self, href: &str, lock: &mut ScrollLock, layout: &dyn Layout) -> Update<Timer> {
        if href == "#" || href == "#top" {
            return Update::effect(Effect::ScrollTo {
                top: 0.0,
                smooth: true,
            });
        }
        let id = href.strip_prefix('#').unwrap_or(href);
        let Some(section) = self
            .section_ids
            .iter()
            .position(|candidate| candidate.as_deref() == Some(id))
        else {
            return Update::none();
        };

        let mut update = self.close_menu(lock);
        let header = self
            .has_header
            .then(|| layout.header_height())
            .flatten()
            .unwrap_or(self.offsets.header_fallback);
        let offset_top = layout.section_rect(section).top + layout.scroll_y();
        update.push(Effect::ScrollTo {
            top: offset_top - header,
            smooth: true,
        });
        update
    }

    fn update_header(&mut self, layout: &dyn Layout) -> Update<Timer> {
        if !self.has_header {
            return Update::none();
        }
        let scrolled = layout.scroll_y() > self.offsets.scroll_threshold;
        if scrolled == self.header_scrolled {
            return Update::none();
        }
        self.header_scrolled = scrolled;
        Update::effect(Effect::SetClass {
            element: Element::Header,
            class: "scrolled",
            on: scrolled,
        })
    }

    fn update_active_section(&mut self, layout: &dyn Layout) -> Update<Timer> {
        let scroll_y = layout.scroll_y();
        let current = self
            .section_ids
            .iter()
            .enumerate()
            .filter_map(|(index, id)| id.as_deref().map(|id| (index, id)))
            .filter(|&(index, _)| {
                let offset_top = layout.section_rect(index).top + scroll_y;
                scroll_y >= offset_top - self.offsets.active_section
            })
            .last()
            .map(|(_, id)| format!("#{id}"));

        let active: BTreeSet<usize> = self
            .nav_items
            .iter()
            .enumerate()
            .filter(|(_, href)| current.as_deref() == Some(href.as_str()))
            .map(|(index, _)| index)
            .collect();

        let mut effects = Vec::new();
        for &index in self.active_items.difference(&active) {
            effects.push(nav_item_class(index, false));
        }
        for &index in active.difference(&self.active_items) {
            effects.push(nav_item_class(index, true));
        }
        self.active_items = active;
        effects.into()
    }
}

fn menu_classes(on: bool) -> Vec<Effect> {
    [Element::MenuToggle, Element::Navbar]
        .into_iter()
        .map(|element| Effect::SetClass {
            element,
            class: "active",
            on,
        })
        .collect()
}

fn nav_item_class(index: usize, on: bool) -> Effect {
    Effect::SetClass {
        element: Element::NavItem(index),
        class: "active",
        on,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::effect::BodyScroll;
    use crate::ui::surface::{Rect, StaticLayout};

    fn markup() -> NavigationMarkup {
        NavigationMarkup {
            mobile_menu: true,
            header: true,
            nav_items: vec!["#home".into(), "#about".into(), "#work".into()],
        }
    }

    fn sections() -> Vec<SectionMarkup> {
        ["home", "about", "work"]
            .into_iter()
            .map(|id| SectionMarkup { id: Some(id.into()) })
            .collect()
    }

    fn navbar() -> Navbar {
        Navbar::new(
            &markup(),
            &sections(),
            &Timing::default(),
            &LayoutConfig::default(),
        )
    }

    /// Sections stacked at document offsets 0, 800 and 1600.
    fn layout_at(scroll_y: f32) -> StaticLayout {
        let mut layout = StaticLayout::desktop(0);
        layout.scroll_y = scroll_y;
        layout.section_rects = (0..3)
            .map(|i| Rect::new(i as f32 * 800.0 - scroll_y, 800.0))
            .collect();
        layout
    }

    #[test]
    fn toggle_menu_locks_and_unlocks_scroll() {
        let layout = layout_at(0.0);
        let mut lock = ScrollLock::new();
        let mut navbar = navbar();

        let opened = navbar.handle(Message::ToggleMenu, &mut lock, &layout);
        assert!(navbar.is_menu_open());
        assert!(opened.effects.contains(&Effect::BodyScroll(BodyScroll::Locked {
            style: LockStyle::Overflow,
            offset: 0.0
        })));

        let closed = navbar.handle(Message::ToggleMenu, &mut lock, &layout);
        assert!(!navbar.is_menu_open());
        assert!(closed
            .effects
            .contains(&Effect::BodyScroll(BodyScroll::Released { restore_to: None })));
        assert!(!lock.is_locked());
    }

    #[test]
    fn menu_is_inert_without_markup() {
        let mut markup = markup();
        markup.mobile_menu = false;
        let mut navbar = Navbar::new(&markup, &[], &Timing::default(), &LayoutConfig::default());
        let mut lock = ScrollLock::new();

        assert!(navbar
            .handle(Message::ToggleMenu, &mut lock, &layout_at(0.0))
            .is_empty());
        assert!(!lock.is_locked());
    }

    #[test]
    fn top_anchors_scroll_to_zero() {
        let layout = layout_at(900.0);
        let mut lock = ScrollLock::new();
        let mut navbar = navbar();
        for href in ["#", "#top"] {
            let update = navbar.handle(Message::Anchor(href.into()), &mut lock, &layout);
            assert_eq!(
                update.effects,
                vec![Effect::ScrollTo {
                    top: 0.0,
                    smooth: true
                }]
            );
        }
    }

    #[test]
    fn anchor_scrolls_below_header_and_closes_menu() {
        let mut layout = layout_at(100.0);
        layout.header_height = Some(64.0);
        let mut lock = ScrollLock::new();
        let mut navbar = navbar();
        navbar.handle(Message::ToggleMenu, &mut lock, &layout);

        let update = navbar.handle(Message::Anchor("#work".into()), &mut lock, &layout);
        assert!(!navbar.is_menu_open());
        assert_eq!(
            update.effects.last(),
            Some(&Effect::ScrollTo {
                top: 1536.0,
                smooth: true
            })
        );
    }

    #[test]
    fn header_fallback_applies_without_header() {
        let mut markup = markup();
        markup.header = false;
        let mut navbar = Navbar::new(&markup, &sections(), &Timing::default(), &LayoutConfig::default());
        let mut lock = ScrollLock::new();

        let update = navbar.handle(Message::Anchor("#about".into()), &mut lock, &layout_at(0.0));
        assert_eq!(
            update.effects,
            vec![Effect::ScrollTo {
                top: 720.0,
                smooth: true
            }]
        );
    }

    #[test]
    fn unknown_anchor_does_nothing() {
        let mut lock = ScrollLock::new();
        let mut navbar = navbar();
        assert!(navbar
            .handle(Message::Anchor("#missing".into()), &mut lock, &layout_at(0.0))
            .is_empty());
    }

    #[test]
    fn header_scrolled_flips_past_threshold() {
        let mut lock = ScrollLock::new();
        let mut navbar = navbar();

        assert!(navbar
            .handle(Message::Scroll, &mut lock, &layout_at(100.0))
            .effects
            .iter()
            .all(|effect| !matches!(effect, Effect::SetClass { element: Element::Header, .. })));

        let update = navbar.handle(Message::Scroll, &mut lock, &layout_at(101.0));
        assert!(update.effects.contains(&Effect::SetClass {
            element: Element::Header,
            class: "scrolled",
            on: true
        }));
        assert!(navbar.is_header_scrolled());
    }

    #[test]
    fn active_item_follows_last_reached_section() {
        let mut navbar = navbar();

        navbar.on_timer(Timer::InitialCheck, &layout_at(0.0));
        assert_eq!(navbar.active_items().collect::<Vec<_>>(), vec![0]);

        // 600 >= 800 - 200: "about" is reached early.
        let update = navbar.on_timer(Timer::InitialCheck, &layout_at(600.0));
        assert_eq!(
            update.effects,
            vec![nav_item_class(0, false), nav_item_class(1, true)]
        );

        let unchanged = navbar.on_timer(Timer::InitialCheck, &layout_at(700.0));
        assert!(unchanged.is_empty());
    }

    #[test]
    fn init_schedules_first_check() {
        let mut navbar = navbar();
        assert_eq!(
            navbar.init().timers,
            vec![(Duration::from_millis(100), Timer::InitialCheck)]
        );
    }
}
