// SPDX-License-Identifier: MPL-2.0
//! Headless interaction controllers for the portfolio pages.
//!
//! Controllers follow a "state in, effects out" pattern: they read the page
//! through [`surface`], never write to it, and describe every visual change
//! as an [`effect::Effect`]. Delayed work is returned as timer requests and
//! run by the page's virtual-clock scheduler.
//!
//! # Features
//!
//! - [`gallery`] - Filterable carousel with lightbox and progressive loading
//! - [`navbar`] - Mobile menu, header state, anchors and active section
//! - [`reveal`] - Section reveal, staggered children and parallax
//! - [`slideshow`] - Auto-rotating slides and the music showcase
//! - [`transition`] - Page loader and page transitions
//! - [`contact_form`] - Contact form validation and feedback
//!
//! # Shared Infrastructure
//!
//! - [`page`] - Input router owning every feature of one page
//! - [`scroll_lock`] - Single owner of the body scroll state
//! - [`effect`] - Visual writes and timer requests
//! - [`input`] - Input events
//! - [`surface`] - Markup presence and live geometry

pub mod contact_form;
pub mod effect;
pub mod gallery;
pub mod input;
pub mod navbar;
pub mod page;
pub mod reveal;
pub mod scroll_lock;
pub mod slideshow;
pub mod surface;
pub mod transition;

pub use effect::{Effect, Element, Update};
pub use input::{InputEvent, Key, Target};
pub use page::Page;
pub use surface::{Layout, PageSurface, StaticLayout};
