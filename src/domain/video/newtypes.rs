// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values,
//! ensuring they are always within valid ranges.

use std::fmt;

// =============================================================================
// VideoId
// =============================================================================

/// Stable identity of a catalog record for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VideoId(u32);

impl VideoId {
    /// Wraps a raw id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f32 = 0.0;
    /// Maximum volume level.
    pub const MAX: f32 = 1.0;
    /// Default volume level.
    pub const DEFAULT: f32 = 1.0;
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Full volume, used when unmuting from a silent level.
    pub const FULL: Self = Self(volume_bounds::MAX);

    /// Creates a new volume level, clamping to valid range.
    ///
    /// NaN is treated as silence.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        if volume.is_nan() {
            return Self(volume_bounds::MIN);
        }
        Self(volume.clamp(volume_bounds::MIN, volume_bounds::MAX))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if the level is exactly zero.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == volume_bounds::MIN
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Skip step bounds for the rewind/forward buttons.
pub mod skip_bounds {
    /// Minimum skip step in seconds.
    pub const MIN: f64 = 1.0;
    /// Maximum skip step in seconds.
    pub const MAX: f64 = 60.0;
    /// Default skip step in seconds.
    pub const DEFAULT: f64 = 10.0;
}

/// Distance in seconds covered by one skip button press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_bounds::MIN, skip_bounds::MAX))
    }

    /// Returns the step in seconds.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_bounds::DEFAULT)
    }
}

// =============================================================================
// SeekFraction
// =============================================================================

/// Relative position along the progress track, in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SeekFraction(f64);

impl SeekFraction {
    /// Start of the track.
    pub const START: Self = Self(0.0);

    /// Creates a fraction, clamping to `[0, 1]`. NaN maps to the start.
    #[must_use]
    pub fn new(fraction: f64) -> Self {
        if fraction.is_nan() {
            return Self::START;
        }
        Self(fraction.clamp(0.0, 1.0))
    }

    /// Returns the fraction.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Converts the fraction to an absolute offset within `duration_secs`.
    ///
    /// An unknown duration (`0`) degenerates to the start.
    #[must_use]
    pub fn to_offset(self, duration_secs: f64) -> f64 {
        self.0 * duration_secs
    }
}
