// SPDX-License-Identifier: MPL-2.0
//! Player phase state machine.
//!
//! ```text
//! Idle ──select──▶ Loading ──metadata / autoplay refused──▶ Paused
//!                     │                                     ▲  │
//!                     └────────────play event─────────▶ Playing ┘
//! ```
//!
//! Any phase returns to `Loading` when a new video is selected.

/// Coarse phase of a mounted player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerPhase {
    /// No video selected; the player shows a placeholder.
    #[default]
    Idle,
    /// A new source was just handed to the surface.
    Loading,
    /// Source is ready and the surface reports it is paused.
    Paused,
    /// The surface reports active playback.
    Playing,
}

impl PlayerPhase {
    /// Returns true if no video is selected.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true while a source swap is in flight.
    #[must_use]
    pub fn is_loading(self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns true if the surface reported playback.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if the surface reported a pause.
    #[must_use]
    pub fn is_paused(self) -> bool {
        matches!(self, Self::Paused)
    }

    /// Returns true if a video is bound to the player.
    #[must_use]
    pub fn has_selection(self) -> bool {
        !self.is_idle()
    }
}
