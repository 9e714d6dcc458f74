// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-position mapping for the progress track.

use crate::domain::video::SeekFraction;

/// Rendered horizontal extent of the progress track, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackGeometry {
    pub left: f64,
    pub width: f64,
}

impl TrackGeometry {
    pub fn new(left: f64, width: f64) -> Self {
        Self { left, width }
    }

    /// Fraction of the track under `pointer_x`, clamped to `[0, 1]`.
    ///
    /// A track that has not been laid out yet (zero width) maps to the start.
    pub fn fraction_at(&self, pointer_x: f64) -> SeekFraction {
        if self.width <= 0.0 {
            return SeekFraction::START;
        }
        SeekFraction::new((pointer_x - self.left) / self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn fraction_is_relative_to_track_left() {
        let track = TrackGeometry::new(100.0, 200.0);
        assert_abs_diff_eq!(track.fraction_at(150.0).value(), 0.25);
    }

    #[test]
    fn fraction_clamps_outside_track() {
        let track = TrackGeometry::new(0.0, 200.0);
        assert_abs_diff_eq!(track.fraction_at(-30.0).value(), 0.0);
        assert_abs_diff_eq!(track.fraction_at(260.0).value(), 1.0);
    }

    #[test]
    fn zero_width_track_maps_to_start() {
        let track = TrackGeometry::new(10.0, 0.0);
        assert_eq!(track.fraction_at(50.0), SeekFraction::START);
    }
}
