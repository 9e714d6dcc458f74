// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Range bounds live beside the newtypes in
//! [`crate::domain::video::newtypes`]; this module re-exports the defaults.

use crate::domain::video::newtypes::{skip_bounds, volume_bounds};

// ==========================================================================
// Player Defaults
// ==========================================================================

/// Whether a newly selected video starts playing on its own.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Default playback volume (0.0 to 1.0).
pub const DEFAULT_VOLUME: f32 = volume_bounds::DEFAULT;

/// Default mute state.
pub const DEFAULT_MUTED: bool = false;

/// Distance covered by one skip button press, in seconds.
pub const DEFAULT_SKIP_STEP_SECS: f64 = skip_bounds::DEFAULT;
