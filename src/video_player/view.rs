// SPDX-License-Identifier: MPL-2.0
//! Render-ready projection of the playback state.
//!
//! A renderer needs labels and flags, not the state machine. [`ControlsView`]
//! is computed on demand from [`PlaybackState`] and carries everything the
//! transport bar displays, already localized.

use super::state::PlaybackState;
use super::time_format::format_time;
use crate::i18n::I18n;

/// Which glyph the main transport button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportIcon {
    Play,
    Pause,
}

/// Which glyph the volume button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeIcon {
    Audible,
    Muted,
}

/// What the player area shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlsView {
    /// Nothing selected yet.
    Placeholder { message: String },
    /// A video is bound to the player.
    Active(ActiveControls),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveControls {
    pub heading: String,
    pub title: String,
    pub artist: String,
    pub poster: String,
    pub elapsed: String,
    pub total: String,
    /// Filled share of the progress bar, 0–100.
    pub progress_percent: f64,
    pub transport_icon: TransportIcon,
    pub transport_label: String,
    pub volume_icon: VolumeIcon,
    pub volume_label: String,
    /// Slider knob position in `[0, 1]`; drops to 0 while muted.
    pub volume_slider: f32,
    pub skip_backward_label: String,
    pub skip_forward_label: String,
}

impl ControlsView {
    pub fn from_state(state: &PlaybackState, i18n: &I18n) -> Self {
        let Some(video) = state.selected_video() else {
            return ControlsView::Placeholder {
                message: i18n.tr("player-placeholder"),
            };
        };

        let (transport_icon, transport_label) = if state.is_playing() {
            (TransportIcon::Pause, i18n.tr("transport-pause"))
        } else {
            (TransportIcon::Play, i18n.tr("transport-play"))
        };

        let (volume_icon, volume_label) = if state.is_muted() || state.volume().is_silent() {
            (VolumeIcon::Muted, i18n.tr("transport-unmute"))
        } else {
            (VolumeIcon::Audible, i18n.tr("transport-mute"))
        };

        let volume_slider = if state.is_muted() {
            0.0
        } else {
            state.volume().value()
        };

        ControlsView::Active(ActiveControls {
            heading: i18n.tr("player-heading"),
            title: video.title.clone(),
            artist: video.artist.clone(),
            poster: video.poster.clone(),
            elapsed: format_time(state.current_time_secs()),
            total: format_time(state.duration_secs()),
            progress_percent: state.progress_percent(),
            transport_icon,
            transport_label,
            volume_icon,
            volume_label,
            volume_slider,
            skip_backward_label: i18n.tr("transport-skip-backward"),
            skip_forward_label: i18n.tr("transport-skip-forward"),
        })
    }

    /// Returns the active controls, if a video is selected.
    pub fn active(&self) -> Option<&ActiveControls> {
        match self {
            ControlsView::Active(controls) => Some(controls),
            ControlsView::Placeholder { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoRecord;
    use crate::config::Config;
    use crate::domain::video::{VideoId, Volume};

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn selected(volume: Volume, muted: bool) -> PlaybackState {
        let record = VideoRecord::new(VideoId::new(1), "Clip", "Band", "/p/c.jpg", "/m/c.mp4");
        PlaybackState::for_selection(record, 1, volume, muted)
    }

    #[test]
    fn idle_state_shows_placeholder() {
        let state = PlaybackState::idle(Volume::default(), false);
        let view = ControlsView::from_state(&state, &english());
        assert_eq!(
            view,
            ControlsView::Placeholder {
                message: "Select a video to begin.".to_string()
            }
        );
        assert!(view.active().is_none());
    }

    #[test]
    fn active_view_formats_times_and_progress() {
        let mut state = selected(Volume::default(), false);
        state.apply_metadata(130.0);
        state.apply_time_update(65.0, None);

        let view = ControlsView::from_state(&state, &english());
        let controls = view.active().expect("active controls");
        assert_eq!(controls.title, "Clip");
        assert_eq!(controls.elapsed, "1:05");
        assert_eq!(controls.total, "2:10");
        assert!((controls.progress_percent - 50.0).abs() < 1e-9);
        assert_eq!(controls.transport_icon, TransportIcon::Play);
    }

    #[test]
    fn playing_state_shows_pause_button() {
        let mut state = selected(Volume::default(), false);
        state.apply_play_event();
        let view = ControlsView::from_state(&state, &english());
        let controls = view.active().unwrap();
        assert_eq!(controls.transport_icon, TransportIcon::Pause);
        assert_eq!(controls.transport_label, "Pause");
    }

    #[test]
    fn muted_state_empties_slider_and_shows_muted_icon() {
        let state = selected(Volume::new(0.6), true);
        let view = ControlsView::from_state(&state, &english());
        let controls = view.active().unwrap();
        assert_eq!(controls.volume_slider, 0.0);
        assert_eq!(controls.volume_icon, VolumeIcon::Muted);
    }

    #[test]
    fn silent_volume_shows_muted_icon_even_when_unmuted() {
        let state = selected(Volume::new(0.0), false);
        let view = ControlsView::from_state(&state, &english());
        assert_eq!(view.active().unwrap().volume_icon, VolumeIcon::Muted);
    }

    #[test]
    fn audible_state_reports_level() {
        let state = selected(Volume::new(0.6), false);
        let view = ControlsView::from_state(&state, &english());
        let controls = view.active().unwrap();
        assert_eq!(controls.volume_icon, VolumeIcon::Audible);
        assert_eq!(controls.volume_slider, 0.6);
    }
}
