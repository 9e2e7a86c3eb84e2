// SPDX-License-Identifier: MPL-2.0
//! Gallery items, tag filtering and index navigation.
//!
//! Every index-based operation works against the *visible sequence*: the
//! ordered subsequence of items that pass the active [`TagFilter`]. Indices
//! into the full item list are called item indices; indices into the visible
//! sequence are called positions.

use std::collections::BTreeSet;

// =============================================================================
// Item
// =============================================================================

/// One displayable image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    source: String,
    alt: String,
    tags: BTreeSet<String>,
    visible: bool,
    loaded: bool,
}

impl Item {
    /// Creates a visible, untagged item.
    pub fn new(source: impl Into<String>, alt: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            alt: alt.into(),
            tags: BTreeSet::new(),
            visible: true,
            loaded: false,
        }
    }

    /// Adds filter tags (the class names the markup carries).
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub(crate) fn mark_loaded(&mut self) {
        self.loaded = true;
    }
}

// =============================================================================
// Tag Filter
// =============================================================================

/// Which items are eligible for display.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    /// Every item is shown.
    #[default]
    All,
    /// Only items carrying this tag are shown.
    Tag(String),
}

impl TagFilter {
    /// Parses the value of the filter selector; `"all"` selects everything.
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            Self::All
        } else {
            Self::Tag(value.to_string())
        }
    }

    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => item.has_tag(tag),
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::All)
    }
}

// =============================================================================
// Navigation
// =============================================================================

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Moves `cursor` one step in `direction` with wraparound.
///
/// Returns `None` when the sequence is empty.
#[must_use]
pub fn step(cursor: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let cursor = cursor % len;
    Some(match direction {
        Direction::Next => (cursor + 1) % len,
        Direction::Previous => (cursor + len - 1) % len,
    })
}

/// Ordered, index-addressable run of items a viewer can page through.
pub trait Sequence {
    fn len(&self) -> usize;

    fn get(&self, position: usize) -> Option<&Item>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Sequence for [Item] {
    fn len(&self) -> usize {
        <[Item]>::len(self)
    }

    fn get(&self, position: usize) -> Option<&Item> {
        <[Item]>::get(self, position)
    }
}

impl Sequence for Vec<Item> {
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, position: usize) -> Option<&Item> {
        self.as_slice().get(position)
    }
}

// =============================================================================
// Item Set
// =============================================================================

/// The fixed item list with its current filter and visible sequence.
///
/// The item list never changes after construction; only visibility (and the
/// loaded flag) mutate.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSet {
    items: Vec<Item>,
    filter: TagFilter,
    visible: Vec<usize>,
}

impl ItemSet {
    /// Creates a set where every item is visible.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        let mut set = Self {
            items,
            filter: TagFilter::All,
            visible: Vec::new(),
        };
        set.apply_filter(TagFilter::All);
        set
    }

    /// Recomputes visibility for every item under `filter`.
    pub fn apply_filter(&mut self, filter: TagFilter) {
        for item in &mut self.items {
            item.visible = filter.matches(item);
        }
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.visible)
            .map(|(index, _)| index)
            .collect();
        self.filter = filter;
    }

    #[must_use]
    pub fn filter(&self) -> &TagFilter {
        &self.filter
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub(crate) fn item_mut(&mut self, index: usize) -> Option<&mut Item> {
        self.items.get_mut(index)
    }

    /// Item index of the visible item at `position`.
    #[must_use]
    pub fn item_index(&self, position: usize) -> Option<usize> {
        self.visible.get(position).copied()
    }

    /// Position within the visible sequence of the item at `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Option<usize> {
        self.visible.iter().position(|&i| i == index)
    }
}

impl Sequence for ItemSet {
    fn len(&self) -> usize {
        self.visible.len()
    }

    fn get(&self, position: usize) -> Option<&Item> {
        self.item_index(position).and_then(|i| self.items.get(i))
    }
}
