// SPDX-License-Identifier: MPL-2.0
//! What the page offers the controllers: markup presence and live geometry.
//!
//! [`PageSurface`] is read once at initialization. Each optional part maps
//! to one feature; a missing part leaves that feature inert. [`Layout`] is
//! queried on every event for measurements that change with the viewport.

use crate::domain::gallery::Item;

/// Viewport-relative box, like a bounding client rect.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub bottom: f32,
}

impl Rect {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            bottom: top + height,
        }
    }
}

/// Live geometry provider.
pub trait Layout {
    fn viewport_width(&self) -> f32;

    fn viewport_height(&self) -> f32;

    /// Current vertical scroll offset of the document.
    fn scroll_y(&self) -> f32;

    /// Rendered width of a gallery item including horizontal margins.
    fn item_outer_width(&self, index: usize) -> f32;

    fn item_rect(&self, index: usize) -> Rect;

    /// Whether the image behind a gallery item has finished loading.
    fn item_complete(&self, index: usize) -> bool;

    fn section_rect(&self, index: usize) -> Rect;

    /// Height of the page header, if the page has one.
    fn header_height(&self) -> Option<f32>;
}

/// A [`Layout`] with fixed measurements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StaticLayout {
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub scroll_y: f32,
    pub item_width: f32,
    pub item_rects: Vec<Rect>,
    pub items_complete: bool,
    pub section_rects: Vec<Rect>,
    pub header_height: Option<f32>,
}

impl StaticLayout {
    /// A 1280x800 viewport with 320px wide items laid out in one row.
    #[must_use]
    pub fn desktop(items: usize) -> Self {
        Self {
            viewport_width: 1280.0,
            viewport_height: 800.0,
            scroll_y: 0.0,
            item_width: 320.0,
            item_rects: vec![Rect::new(200.0, 240.0); items],
            items_complete: true,
            section_rects: Vec::new(),
            header_height: Some(80.0),
        }
    }
}

impl Layout for StaticLayout {
    fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn item_outer_width(&self, _index: usize) -> f32 {
        self.item_width
    }

    fn item_rect(&self, index: usize) -> Rect {
        self.item_rects.get(index).copied().unwrap_or_default()
    }

    fn item_complete(&self, _index: usize) -> bool {
        self.items_complete
    }

    fn section_rect(&self, index: usize) -> Rect {
        self.section_rects.get(index).copied().unwrap_or_default()
    }

    fn header_height(&self) -> Option<f32> {
        self.header_height
    }
}

// =============================================================================
// Markup presence
// =============================================================================

/// Carousel, its items and the lightbox it opens.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GalleryMarkup {
    pub items: Vec<Item>,
    /// Lightbox overlay and its image element both exist.
    pub lightbox: bool,
    /// `"i / n"` counter inside the lightbox.
    pub counter: bool,
}

/// Header, mobile menu and navigation links.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationMarkup {
    /// Menu toggle button and navbar both exist.
    pub mobile_menu: bool,
    pub header: bool,
    /// `href` of every `.nav-item`, in document order.
    pub nav_items: Vec<String>,
}

/// A `<section>`; `id` is set for anchor targets.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SectionMarkup {
    pub id: Option<String>,
}

/// A link eligible for page-transition interception.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LinkMarkup {
    pub href: String,
    pub target_blank: bool,
}

/// The music showcase: rotating slides plus their own lightbox.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShowcaseMarkup {
    pub slides: Vec<Item>,
    pub lightbox: bool,
}

/// DOM-like description of one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageSurface {
    pub gallery: Option<GalleryMarkup>,
    pub navigation: NavigationMarkup,
    pub sections: Vec<SectionMarkup>,
    pub links: Vec<LinkMarkup>,
    pub loader: bool,
    pub page_transition: bool,
    pub music: Option<ShowcaseMarkup>,
    /// Number of `.tech-slide` badges.
    pub tech_slides: usize,
    /// Number of children animated with a staggered entrance.
    pub stagger_children: usize,
    /// Number of `.parallax` elements.
    pub parallax: usize,
    /// Contact form exists; the flag says whether it has a message line.
    pub contact_form: Option<bool>,
}
