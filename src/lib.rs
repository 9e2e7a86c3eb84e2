// SPDX-License-Identifier: MPL-2.0
//! `folio` is the interaction layer of a personal portfolio site.
//!
//! It provides headless controllers for the site's pages (carousel,
//! lightbox, tag filter, navigation and scroll effects, contact form) that
//! turn input events into visual effects, plus the contact endpoint that
//! validates and logs form submissions.

#![doc(html_root_url = "https://docs.rs/folio/0.3.0")]

pub mod config;
pub mod contact;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod scheduler;
pub mod ui;
