// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven entrance effects: section reveal, staggered children and
//! parallax.

use crate::config::{LayoutConfig, Timing};
use crate::scheduler::Throttle;
use crate::ui::effect::{Effect, Element, Update};
use crate::ui::surface::Layout;
use std::collections::BTreeSet;
use std::time::Duration;

// =============================================================================
// Section Reveal
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// First reveal pass after initialization.
    InitialCheck,
}

/// Adds `appear` to sections once they scroll into view. Never removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Reveal {
    sections: usize,
    appeared: BTreeSet<usize>,
    throttle: Throttle,
    offset_px: f32,
    initial_check: Duration,
}

impl Reveal {
    #[must_use]
    pub fn new(sections: usize, timing: &Timing, layout: &LayoutConfig) -> Self {
        Self {
            sections,
            appeared: BTreeSet::new(),
            throttle: Throttle::new(timing.reveal_throttle),
            offset_px: layout.reveal_offset_px,
            initial_check: timing.initial_check,
        }
    }

    #[must_use]
    pub fn has_appeared(&self, section: usize) -> bool {
        self.appeared.contains(&section)
    }

    pub fn init(&mut self) -> Update<Timer> {
        let mut update = Update::none();
        update.after(self.initial_check, Timer::InitialCheck);
        update
    }

    /// Throttled scroll handler; `now` is the scheduler clock.
    pub fn on_scroll(&mut self, now: Duration, layout: &dyn Layout) -> Vec<Effect> {
        if !self.throttle.try_pass(now) {
            return Vec::new();
        }
        self.check(layout)
    }

    pub fn on_timer(&mut self, timer: Timer, layout: &dyn Layout) -> Vec<Effect> {
        match timer {
            Timer::InitialCheck => self.check(layout),
        }
    }

    /// Marks every section as appeared regardless of position.
    pub fn reveal_all(&mut self) -> Vec<Effect> {
        (0..self.sections)
            .filter_map(|section| self.appear(section))
            .collect()
    }

    fn check(&mut self, layout: &dyn Layout) -> Vec<Effect> {
        let limit = layout.viewport_height() - self.offset_px;
        (0..self.sections)
            .filter(|&section| {
                let rect = layout.section_rect(section);
                rect.top < limit && rect.bottom > 0.0
            })
            .filter_map(|section| self.appear(section))
            .collect()
    }

    fn appear(&mut self, section: usize) -> Option<Effect> {
        self.appeared.insert(section).then_some(Effect::SetClass {
            element: Element::Section(section),
            class: "appear",
            on: true,
        })
    }
}

// =============================================================================
// Stagger
// =============================================================================

/// Child `i` gets an animation delay of `i * delay` and the `fade-in` class.
#[must_use]
pub fn stagger(children: usize, delay: Duration) -> Vec<Effect> {
    (0..children)
        .flat_map(|index| {
            let element = Element::StaggerChild(index);
            [
                Effect::AnimationDelay {
                    element,
                    delay: delay * index as u32,
                },
                Effect::SetClass {
                    element,
                    class: "fade-in",
                    on: true,
                },
            ]
        })
        .collect()
}

// =============================================================================
// Parallax
// =============================================================================

/// Translates `.parallax` elements by a fraction of the scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Parallax {
    elements: usize,
    rate: f32,
    throttle: Throttle,
}

impl Parallax {
    /// `None` when the page has no parallax elements.
    #[must_use]
    pub fn new(elements: usize, timing: &Timing, layout: &LayoutConfig) -> Option<Self> {
        (elements > 0).then(|| Self {
            elements,
            rate: layout.parallax_rate,
            throttle: Throttle::new(timing.parallax_throttle),
        })
    }

    pub fn on_scroll(&mut self, now: Duration, layout: &dyn Layout) -> Vec<Effect> {
        if !self.throttle.try_pass(now) {
            return Vec::new();
        }
        let offset_px = layout.scroll_y() * self.rate;
        (0..self.elements)
            .map(|index| Effect::TranslateY {
                element: Element::Parallax(index),
                offset_px,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::surface::{Rect, StaticLayout};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn appear(section: usize) -> Effect {
        Effect::SetClass {
            element: Element::Section(section),
            class: "appear",
            on: true,
        }
    }

    fn layout(rects: Vec<Rect>) -> StaticLayout {
        let mut layout = StaticLayout::desktop(0);
        layout.section_rects = rects;
        layout
    }

    fn reveal(sections: usize) -> Reveal {
        Reveal::new(sections, &Timing::default(), &LayoutConfig::default())
    }

    #[test]
    fn reveals_sections_inside_offset_viewport() {
        // Viewport 800 tall with a 100px offset: top must be < 700.
        let layout = layout(vec![
            Rect::new(-900.0, 800.0),
            Rect::new(-100.0, 800.0),
            Rect::new(699.0, 800.0),
            Rect::new(700.0, 800.0),
        ]);
        let mut reveal = reveal(4);
        assert_eq!(
            reveal.on_timer(Timer::InitialCheck, &layout),
            vec![appear(1), appear(2)]
        );
    }

    #[test]
    fn appear_is_emitted_once() {
        let layout = layout(vec![Rect::new(0.0, 400.0)]);
        let mut reveal = reveal(1);
        assert_eq!(reveal.on_scroll(ms(0), &layout), vec![appear(0)]);
        assert!(reveal.on_scroll(ms(500), &layout).is_empty());
        assert!(reveal.has_appeared(0));
    }

    #[test]
    fn scroll_checks_are_throttled() {
        let mut layout = layout(vec![Rect::new(2000.0, 400.0)]);
        let mut reveal = reveal(1);
        assert!(reveal.on_scroll(ms(0), &layout).is_empty());

        layout.section_rects[0] = Rect::new(100.0, 400.0);
        assert!(reveal.on_scroll(ms(50), &layout).is_empty());
        assert_eq!(reveal.on_scroll(ms(100), &layout), vec![appear(0)]);
    }

    #[test]
    fn reveal_all_ignores_geometry() {
        let mut reveal = reveal(3);
        assert_eq!(reveal.reveal_all(), vec![appear(0), appear(1), appear(2)]);
        assert!(reveal.reveal_all().is_empty());
    }

    #[test]
    fn stagger_delays_by_index() {
        let effects = stagger(3, ms(100));
        assert_eq!(effects.len(), 6);
        assert_eq!(
            effects[4],
            Effect::AnimationDelay {
                element: Element::StaggerChild(2),
                delay: ms(200)
            }
        );
        assert_eq!(
            effects[5],
            Effect::SetClass {
                element: Element::StaggerChild(2),
                class: "fade-in",
                on: true
            }
        );
    }

    #[test]
    fn parallax_moves_against_scroll() {
        let mut layout = StaticLayout::desktop(0);
        layout.scroll_y = 200.0;
        let mut parallax = Parallax::new(2, &Timing::default(), &LayoutConfig::default()).unwrap();

        let effects = parallax.on_scroll(ms(0), &layout);
        assert_eq!(
            effects,
            vec![
                Effect::TranslateY {
                    element: Element::Parallax(0),
                    offset_px: 200.0 * -0.3
                },
                Effect::TranslateY {
                    element: Element::Parallax(1),
                    offset_px: 200.0 * -0.3
                },
            ]
        );
        assert!(parallax.on_scroll(ms(5), &layout).is_empty());
        assert_eq!(parallax.on_scroll(ms(10), &layout).len(), 2);
    }

    #[test]
    fn parallax_is_inert_without_elements() {
        assert!(Parallax::new(0, &Timing::default(), &LayoutConfig::default()).is_none());
    }
}
