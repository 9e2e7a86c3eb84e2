// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! These delays encode perceptual timing of the site's transitions and are
//! kept identical to the values the stylesheet transitions were tuned for.
//!
//! # Categories
//!
//! - **Gallery**: carousel transition lock, lightbox fade timings, resize debounce
//! - **Page**: loader, page transitions, reveal/parallax throttling
//! - **Slideshow**: auto-advance intervals
//! - **Form**: message auto-hide and post-submit redirect
//! - **Layout**: pixel offsets used by navigation and reveal checks
//! - **Server**: contact endpoint binding

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Duration the carousel ignores navigation after a render (ms).
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Delay between the lightbox fade-out start and hiding it (ms).
pub const DEFAULT_LIGHTBOX_CLOSE_MS: u64 = 300;

/// Delay before the lightbox image opacity is restored after navigation (ms).
pub const DEFAULT_LIGHTBOX_FADE_RESTORE_MS: u64 = 100;

/// Opacity of the lightbox image while it swaps source.
pub const LIGHTBOX_DIP_OPACITY: f32 = 0.5;

/// Quiet period after the last resize event before re-measuring (ms).
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 150;

// ==========================================================================
// Page Defaults
// ==========================================================================

/// Delay after the `load` event before the page loader is hidden (ms).
pub const DEFAULT_LOADER_MS: u64 = 1200;

/// Delay between starting the page transition and following the link (ms).
pub const DEFAULT_PAGE_TRANSITION_MS: u64 = 800;

/// Throttle window for scroll-driven section reveal (ms).
pub const DEFAULT_REVEAL_THROTTLE_MS: u64 = 100;

/// Throttle window for parallax updates (ms).
pub const DEFAULT_PARALLAX_THROTTLE_MS: u64 = 10;

/// Delay before the first reveal and active-section pass after init (ms).
pub const DEFAULT_INITIAL_CHECK_MS: u64 = 100;

/// Per-child animation delay for staggered entrances (ms).
pub const DEFAULT_STAGGER_DELAY_MS: u64 = 100;

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Auto-advance interval of the music slideshow (ms).
pub const DEFAULT_MUSIC_INTERVAL_MS: u64 = 5000;

/// Auto-advance interval of the tech badge rotation (ms).
pub const DEFAULT_TECH_INTERVAL_MS: u64 = 3000;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Auto-hide delay for non-error form messages (ms).
pub const DEFAULT_MESSAGE_HIDE_MS: u64 = 5000;

/// Delay before redirecting after a successful submission (ms).
pub const DEFAULT_REDIRECT_MS: u64 = 1500;

/// Page shown after a successful submission.
pub const DEFAULT_THANK_YOU_PATH: &str = "/thank-you.html";

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Header height assumed for anchor scrolling when no header exists (px).
pub const DEFAULT_HEADER_FALLBACK_PX: f32 = 80.0;

/// Distance from the viewport bottom a section must pass to reveal (px).
pub const DEFAULT_REVEAL_OFFSET_PX: f32 = 100.0;

/// Lead distance for choosing the active navigation section (px).
pub const DEFAULT_ACTIVE_SECTION_OFFSET_PX: f32 = 200.0;

/// Scroll distance after which the header gets its `scrolled` style (px).
pub const DEFAULT_HEADER_SCROLL_THRESHOLD_PX: f32 = 100.0;

/// Margin around the viewport within which images are marked loaded (px).
pub const DEFAULT_LAZY_LOAD_MARGIN_PX: f32 = 100.0;

/// Vertical parallax factor applied to the scroll offset.
pub const DEFAULT_PARALLAX_RATE: f32 = -0.3;

// ==========================================================================
// Server Defaults
// ==========================================================================

/// Address the contact endpoint binds to.
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Route of the contact endpoint.
pub const DEFAULT_CONTACT_PATH: &str = "/api/contact";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_TRANSITION_MS > 0);
    assert!(DEFAULT_LIGHTBOX_FADE_RESTORE_MS < DEFAULT_TRANSITION_MS);
    assert!(DEFAULT_LIGHTBOX_CLOSE_MS > 0);
    assert!(DEFAULT_REDIRECT_MS < DEFAULT_MESSAGE_HIDE_MS);
    assert!(DEFAULT_TECH_INTERVAL_MS < DEFAULT_MUSIC_INTERVAL_MS);
    assert!(DEFAULT_PARALLAX_THROTTLE_MS <= DEFAULT_REVEAL_THROTTLE_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gallery_defaults_are_valid() {
        assert_eq!(DEFAULT_TRANSITION_MS, 400);
        assert_eq!(DEFAULT_LIGHTBOX_CLOSE_MS, 300);
        assert!(LIGHTBOX_DIP_OPACITY > 0.0 && LIGHTBOX_DIP_OPACITY < 1.0);
    }

    #[test]
    fn page_defaults_are_valid() {
        assert_eq!(DEFAULT_LOADER_MS, 1200);
        assert_eq!(DEFAULT_PAGE_TRANSITION_MS, 800);
        assert_eq!(DEFAULT_REVEAL_OFFSET_PX, 100.0);
    }

    #[test]
    fn server_defaults_are_valid() {
        assert!(DEFAULT_CONTACT_PATH.starts_with('/'));
        assert!(DEFAULT_BIND_ADDR.parse::<std::net::SocketAddr>().is_ok());
    }
}
