// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Default delay between two automatic slide advances (in seconds).
/// Long enough to read an emotional caption.
pub const DEFAULT_AUTOPLAY_INTERVAL_SECS: u32 = 12;

/// Minimum auto-play interval (in seconds).
pub const MIN_AUTOPLAY_INTERVAL_SECS: u32 = 3;

/// Maximum auto-play interval (in seconds).
pub const MAX_AUTOPLAY_INTERVAL_SECS: u32 = 60;

// ==========================================================================
// Effects Defaults
// ==========================================================================

/// Default number of floating particles behind the card.
pub const DEFAULT_PARTICLE_COUNT: u32 = 40;

/// Upper bound on particles, keeps the canvas cheap to redraw.
pub const MAX_PARTICLE_COUNT: u32 = 200;

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Default music volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Minimum volume level.
pub const MIN_VOLUME: f32 = 0.0;

/// Maximum volume level.
pub const MAX_VOLUME: f32 = 1.0;
