// SPDX-License-Identifier: MPL-2.0
//! Pure domain types, free of rendering and I/O concerns.
//!
//! - [`gallery`]: displayable items, tag filters and the visible sequence
//! - [`contact`]: contact form payload, sanitization and validation

pub mod contact;
pub mod gallery;
