// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Transition**: section commit delay and overlay lifetime
//! - **Particles**: bubble burst size and randomization ranges
//! - **Assets**: asset root and cache capacity

use std::time::Duration;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Delay between a navigation request and the section commit.
pub const SECTION_COMMIT_DELAY: Duration = Duration::from_millis(100);

/// Lifetime of a transition overlay, measured from its creation.
pub const OVERLAY_LIFETIME: Duration = Duration::from_millis(2000);

/// Interval of the animation tick while timers or overlays are pending.
pub const ANIMATION_TICK: Duration = Duration::from_millis(16);

/// Bubbles are shown unless reduced motion is requested.
pub const DEFAULT_BUBBLES_ENABLED: bool = true;

// ==========================================================================
// Particle Defaults
// ==========================================================================

/// Number of bubbles in one burst.
pub const PARTICLE_COUNT: usize = 15;

/// Smallest bubble diameter (logical pixels).
pub const PARTICLE_MIN_SIZE: f32 = 20.0;

/// Largest bubble diameter (logical pixels).
pub const PARTICLE_MAX_SIZE: f32 = 80.0;

/// Largest stagger delay before a bubble starts rising (seconds).
pub const PARTICLE_MAX_DELAY_SECS: f32 = 0.5;

/// Time a bubble takes to cross the window once started (seconds).
pub const BUBBLE_RISE_SECS: f32 = 1.5;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Asset root used when neither CLI, environment nor config provide one.
pub const DEFAULT_ASSETS_DIR: &str = "assets/portfolio";

/// Number of decoded images kept in memory.
pub const ASSET_CACHE_CAPACITY: usize = 32;

const _: () = {
    assert!(PARTICLE_MIN_SIZE < PARTICLE_MAX_SIZE);
    assert!(PARTICLE_MAX_DELAY_SECS + BUBBLE_RISE_SECS <= 2.0);
    assert!(SECTION_COMMIT_DELAY.as_millis() < OVERLAY_LIFETIME.as_millis());
};
