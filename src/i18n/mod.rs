// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for user-visible messages.
//!
//! Contact form feedback and endpoint responses are looked up by key in
//! Fluent bundles embedded from `assets/i18n/`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback to `en-US` when a locale or a message is missing

pub mod fluent;

pub use fluent::I18n;
