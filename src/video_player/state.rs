// SPDX-License-Identifier: MPL-2.0
//! Playback state owned by a single player controller.
//!
//! A fresh [`PlaybackState`] is built for every selection change rather than
//! patched in place, so position, duration and the playing flag can never
//! leak from one video into the next. Volume and mute are user preferences
//! and are carried over explicitly.
//!
//! Only surface-originated events write the final `is_playing` and
//! `duration_secs` values. User commands may flip `is_playing`
//! optimistically; the next play/pause event reconciles it.

use crate::catalog::VideoRecord;
use crate::domain::video::{PlayerPhase, Volume};

/// Snapshot of what the player knows about the bound video.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    selected: Option<VideoRecord>,
    phase: PlayerPhase,
    /// Load generation this state was created for.
    generation: u64,
    is_playing: bool,
    current_time_secs: f64,
    /// `0.0` until the surface reports metadata.
    duration_secs: f64,
    volume: Volume,
    is_muted: bool,
}

impl PlaybackState {
    /// State of a player with nothing selected.
    pub fn idle(volume: Volume, is_muted: bool) -> Self {
        Self {
            selected: None,
            phase: PlayerPhase::Idle,
            generation: 0,
            is_playing: false,
            current_time_secs: 0.0,
            duration_secs: 0.0,
            volume,
            is_muted,
        }
    }

    /// State for a freshly selected video: position 0, not playing, loading.
    pub fn for_selection(
        record: VideoRecord,
        generation: u64,
        volume: Volume,
        is_muted: bool,
    ) -> Self {
        Self {
            selected: Some(record),
            phase: PlayerPhase::Loading,
            generation,
            is_playing: false,
            current_time_secs: 0.0,
            duration_secs: 0.0,
            volume,
            is_muted,
        }
    }

    pub fn selected_video(&self) -> Option<&VideoRecord> {
        self.selected.as_ref()
    }

    pub fn phase(&self) -> PlayerPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn current_time_secs(&self) -> f64 {
        self.current_time_secs
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    /// Returns true once a positive duration has been reported.
    pub fn has_duration(&self) -> bool {
        self.duration_secs > 0.0
    }

    pub fn volume(&self) -> Volume {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    /// Elapsed share of the video for the progress bar, in percent.
    pub fn progress_percent(&self) -> f64 {
        if self.has_duration() {
            (self.current_time_secs / self.duration_secs) * 100.0
        } else {
            0.0
        }
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// User-requested play/pause before the surface confirms it.
    pub(crate) fn set_playing_optimistic(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    /// The surface reported that playback started.
    pub(crate) fn apply_play_event(&mut self) {
        self.is_playing = true;
        self.phase = PlayerPhase::Playing;
    }

    /// The surface reported that playback paused.
    pub(crate) fn apply_pause_event(&mut self) {
        self.is_playing = false;
        self.phase = PlayerPhase::Paused;
    }

    /// A play request for this generation was accepted.
    pub(crate) fn apply_play_accepted(&mut self) {
        self.apply_play_event();
    }

    /// A play request for this generation was refused.
    pub(crate) fn apply_play_refused(&mut self) {
        self.is_playing = false;
        if matches!(self.phase, PlayerPhase::Loading | PlayerPhase::Playing) {
            self.phase = PlayerPhase::Paused;
        }
    }

    /// Authoritative duration from loaded metadata.
    pub(crate) fn apply_metadata(&mut self, duration_secs: f64) {
        if duration_secs.is_finite() && duration_secs >= 0.0 {
            self.duration_secs = duration_secs;
        }
        if self.phase.is_loading() {
            self.phase = if self.is_playing {
                PlayerPhase::Playing
            } else {
                PlayerPhase::Paused
            };
        }
    }

    /// Progress tick. Captures a late duration if metadata never arrived.
    pub(crate) fn apply_time_update(&mut self, position_secs: f64, reported_duration: Option<f64>) {
        self.current_time_secs = position_secs.max(0.0);
        if !self.has_duration() {
            if let Some(duration) = reported_duration.filter(|d| d.is_finite() && *d > 0.0) {
                self.duration_secs = duration;
            }
        }
    }

    /// Sets the level; reaching zero doubles as muting.
    pub(crate) fn apply_volume(&mut self, volume: Volume) {
        self.volume = volume;
        self.is_muted = volume.is_silent();
    }

    /// Flips mute. Leaving mute at zero volume restores full volume.
    ///
    /// Returns true when the volume was restored.
    pub(crate) fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        if !self.is_muted && self.volume.is_silent() {
            self.volume = Volume::FULL;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::video::VideoId;
    use crate::test_utils::assert_abs_diff_eq;

    fn sample_record() -> VideoRecord {
        VideoRecord::new(VideoId::new(1), "A", "Artist", "/p/a.jpg", "/m/a.mp4")
    }

    fn loaded_state() -> PlaybackState {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_metadata(120.0);
        state
    }

    #[test]
    fn idle_state_has_no_selection() {
        let state = PlaybackState::idle(Volume::default(), false);
        assert!(state.selected_video().is_none());
        assert_eq!(state.phase(), PlayerPhase::Idle);
        assert!(!state.is_playing());
    }

    #[test]
    fn new_selection_starts_loading_at_zero() {
        let state = PlaybackState::for_selection(sample_record(), 3, Volume::new(0.4), true);
        assert_eq!(state.phase(), PlayerPhase::Loading);
        assert_eq!(state.generation(), 3);
        assert_abs_diff_eq!(state.current_time_secs(), 0.0);
        assert_abs_diff_eq!(state.duration_secs(), 0.0);
        assert!(!state.is_playing());
        assert_abs_diff_eq!(state.volume().value(), 0.4);
        assert!(state.is_muted());
    }

    #[test]
    fn metadata_moves_loading_to_paused() {
        let state = loaded_state();
        assert_eq!(state.phase(), PlayerPhase::Paused);
        assert_abs_diff_eq!(state.duration_secs(), 120.0);
    }

    #[test]
    fn metadata_after_play_keeps_playing() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_play_accepted();
        state.apply_metadata(60.0);
        assert_eq!(state.phase(), PlayerPhase::Playing);
    }

    #[test]
    fn metadata_ignores_non_finite_duration() {
        let mut state = loaded_state();
        state.apply_metadata(f64::NAN);
        assert_abs_diff_eq!(state.duration_secs(), 120.0);
    }

    #[test]
    fn time_update_captures_late_duration() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_time_update(2.0, Some(90.0));
        assert_abs_diff_eq!(state.current_time_secs(), 2.0);
        assert_abs_diff_eq!(state.duration_secs(), 90.0);
    }

    #[test]
    fn time_update_does_not_override_known_duration() {
        let mut state = loaded_state();
        state.apply_time_update(5.0, Some(200.0));
        assert_abs_diff_eq!(state.duration_secs(), 120.0);
    }

    #[test]
    fn time_update_without_duration_leaves_it_unknown() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_time_update(1.0, None);
        state.apply_time_update(1.5, Some(0.0));
        assert!(!state.has_duration());
    }

    #[test]
    fn play_and_pause_events_are_authoritative() {
        let mut state = loaded_state();
        state.set_playing_optimistic(true);
        state.apply_pause_event();
        assert!(!state.is_playing());
        assert_eq!(state.phase(), PlayerPhase::Paused);

        state.apply_play_event();
        assert!(state.is_playing());
        assert_eq!(state.phase(), PlayerPhase::Playing);
    }

    #[test]
    fn refused_play_leaves_paused() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_play_refused();
        assert!(!state.is_playing());
        assert_eq!(state.phase(), PlayerPhase::Paused);
    }

    #[test]
    fn zero_volume_mutes_and_nonzero_unmutes() {
        let mut state = loaded_state();
        state.apply_volume(Volume::new(0.0));
        assert!(state.is_muted());
        state.apply_volume(Volume::new(0.3));
        assert!(!state.is_muted());
    }

    #[test]
    fn unmute_at_zero_restores_full_volume() {
        let mut state = loaded_state();
        state.apply_volume(Volume::new(0.0));
        assert!(state.toggle_mute());
        assert!(!state.is_muted());
        assert_eq!(state.volume(), Volume::FULL);
    }

    #[test]
    fn unmute_at_nonzero_keeps_volume() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::new(0.4), true);
        assert!(!state.toggle_mute());
        assert!(!state.is_muted());
        assert_abs_diff_eq!(state.volume().value(), 0.4);
    }

    #[test]
    fn progress_percent_is_zero_without_duration() {
        let mut state = PlaybackState::for_selection(sample_record(), 1, Volume::default(), false);
        state.apply_time_update(3.0, None);
        assert_abs_diff_eq!(state.progress_percent(), 0.0);
    }

    #[test]
    fn progress_percent_tracks_position() {
        let mut state = loaded_state();
        state.apply_time_update(30.0, None);
        assert_abs_diff_eq!(state.progress_percent(), 25.0);
    }
}
