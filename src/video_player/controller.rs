// SPDX-License-Identifier: MPL-2.0
//! Player controller: binds one selected video to a playback surface.
//!
//! The controller is the only component that issues commands to its
//! surface. It exposes transport operations (play/pause, skip, seek, volume,
//! mute) and folds surface events back into [`PlaybackState`].
//!
//! State transitions:
//! - `select_video`: any phase → Loading (fresh state, new generation)
//! - metadata: Loading → Paused (or Playing if playback already started)
//! - play / pause events: Paused ⇄ Playing
//! - ended: no local change, returns [`Effect::Ended`] for the host
//!
//! Every load runs under a new generation. Surface messages and play tickets
//! carry the generation they were produced under; anything from an older
//! generation is dropped so a late event about a previous video cannot
//! overwrite the current one.

use super::seek::TrackGeometry;
use super::state::PlaybackState;
use crate::application::port::{
    MediaSource, PlayTicket, PlaybackSurface, SurfaceEvent, SurfaceMessage,
};
use crate::catalog::VideoRecord;
use crate::config::PlayerConfig;
use crate::domain::video::{SeekFraction, SkipStep, Volume};
use crate::error::PlaybackError;

/// Controller preferences, usually derived from the `[player]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerSettings {
    /// Attempt playback right after each selection change.
    pub autoplay: bool,
    /// Distance covered by the skip buttons.
    pub skip_step: SkipStep,
    /// Initial volume.
    pub volume: Volume,
    /// Initial mute state.
    pub muted: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            autoplay: true,
            skip_step: SkipStep::default(),
            volume: Volume::default(),
            muted: false,
        }
    }
}

impl From<&PlayerConfig> for PlayerSettings {
    fn from(config: &PlayerConfig) -> Self {
        let defaults = Self::default();
        Self {
            autoplay: config.autoplay.unwrap_or(defaults.autoplay),
            skip_step: config
                .skip_step_secs
                .map_or(defaults.skip_step, SkipStep::new),
            volume: config.volume.map_or(defaults.volume, Volume::new),
            muted: config.muted.unwrap_or(defaults.muted),
        }
    }
}

/// Effects produced by controller operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Nothing observable changed.
    None,
    /// Playback state changed - view needs refresh.
    StateChanged,
    /// The bound video finished; the host decides what plays next.
    Ended,
    /// A play request for the current video was refused.
    PlayRefused { error: PlaybackError },
}

/// Owns one playback surface and the state of the video bound to it.
#[derive(Debug)]
pub struct PlayerController<S: PlaybackSurface> {
    surface: S,
    state: PlaybackState,
    settings: PlayerSettings,
}

impl<S: PlaybackSurface> PlayerController<S> {
    /// Creates an idle controller and pushes the initial volume to the surface.
    pub fn new(mut surface: S, settings: PlayerSettings) -> Self {
        surface.set_volume(settings.volume.value());
        surface.set_muted(settings.muted);
        Self {
            surface,
            state: PlaybackState::idle(settings.volume, settings.muted),
            settings,
        }
    }

    /// Returns the current playback state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Returns the controller settings.
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    /// Read access to the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for platform adapters that drive the surface clock.
    ///
    /// Transport commands must still go through the controller.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn has_selection(&self) -> bool {
        self.state.selected_video().is_some()
    }

    // =========================================================================
    // Commands
    // =========================================================================

    /// Binds a new video: fresh state, load the source, then try autoplay.
    ///
    /// `current_time_secs` is 0 and `is_playing` is false when this returns,
    /// whatever the surface later answers.
    pub fn select_video(&mut self, record: VideoRecord) -> Effect {
        let generation = self.state.generation() + 1;
        let volume = self.state.volume();
        let muted = self.state.is_muted();
        let source = MediaSource::new(record.media.clone(), record.poster.clone());

        log::info!("Selected video {} \"{}\"", record.id, record.title);
        self.state = PlaybackState::for_selection(record, generation, volume, muted);

        self.surface.load(&source, generation);
        // A fresh source starts with platform defaults; keep the user's level.
        self.surface.set_volume(volume.value());
        self.surface.set_muted(muted);

        if self.settings.autoplay {
            self.request_play();
        }
        Effect::StateChanged
    }

    /// Pauses when playing, plays otherwise.
    ///
    /// `is_playing` flips immediately; play/pause events reconcile it.
    pub fn toggle_play_pause(&mut self) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        if self.state.is_playing() {
            self.surface.pause();
            self.state.set_playing_optimistic(false);
        } else {
            self.request_play();
            self.state.set_playing_optimistic(true);
        }
        Effect::StateChanged
    }

    fn request_play(&mut self) {
        let ticket = PlayTicket::new(self.state.generation());
        log::debug!("Requesting playback (generation {})", ticket.generation());
        self.surface.play(ticket);
    }

    /// Moves the playhead by `delta_secs`. The surface clamps the result.
    pub fn skip(&mut self, delta_secs: f64) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        let target = self.surface.position() + delta_secs;
        self.surface.set_position(target);
        Effect::StateChanged
    }

    /// Skips forward by the configured step.
    pub fn skip_forward(&mut self) -> Effect {
        self.skip(self.settings.skip_step.value())
    }

    /// Skips backward by the configured step.
    pub fn skip_backward(&mut self) -> Effect {
        self.skip(-self.settings.skip_step.value())
    }

    /// Seeks to `fraction` of the known duration (0 while unknown).
    pub fn seek_to_fraction(&mut self, fraction: SeekFraction) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        let target = fraction.to_offset(self.state.duration_secs());
        self.surface.set_position(target);
        Effect::StateChanged
    }

    /// Seeks to the point of the progress track under the pointer.
    pub fn seek_from_pointer(&mut self, pointer_x: f64, track: TrackGeometry) -> Effect {
        self.seek_to_fraction(track.fraction_at(pointer_x))
    }

    /// Sets the volume; zero also mutes, anything else unmutes.
    pub fn set_volume(&mut self, level: f32) -> Effect {
        self.state.apply_volume(Volume::new(level));
        self.surface.set_volume(self.state.volume().value());
        self.surface.set_muted(self.state.is_muted());
        Effect::StateChanged
    }

    /// Flips mute. Unmuting at zero volume restores full volume.
    pub fn toggle_mute(&mut self) -> Effect {
        let restored = self.state.toggle_mute();
        self.surface.set_muted(self.state.is_muted());
        if restored {
            self.surface.set_volume(self.state.volume().value());
        }
        Effect::StateChanged
    }

    // =========================================================================
    // Surface events
    // =========================================================================

    /// Dispatches a surface message to the matching handler.
    ///
    /// Messages from an earlier load generation are ignored.
    pub fn handle(&mut self, message: SurfaceMessage) -> Effect {
        if message.generation != self.state.generation() {
            log::debug!(
                "Ignoring stale {:?} from generation {} (current {})",
                message.event,
                message.generation,
                self.state.generation()
            );
            return Effect::None;
        }

        match message.event {
            SurfaceEvent::LoadedMetadata { duration_secs } => self.on_loaded_metadata(duration_secs),
            SurfaceEvent::TimeUpdate { position_secs } => self.on_time_update(position_secs),
            SurfaceEvent::Play => self.on_play_event(),
            SurfaceEvent::Pause => self.on_pause_event(),
            SurfaceEvent::Ended => self.on_ended(),
            SurfaceEvent::PlayRequestSettled { ticket, outcome } => {
                self.on_play_request_settled(ticket, outcome)
            }
        }
    }

    /// Progress tick from the surface.
    pub fn on_time_update(&mut self, reported_time: f64) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        let reported_duration = self.surface.duration();
        self.state.apply_time_update(reported_time, reported_duration);
        Effect::StateChanged
    }

    /// Metadata arrived; the duration is authoritative.
    pub fn on_loaded_metadata(&mut self, reported_duration: f64) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        self.state.apply_metadata(reported_duration);
        log::debug!("Metadata loaded: duration {:.2}s", self.state.duration_secs());
        Effect::StateChanged
    }

    /// The surface reached the end. Selection is left to the host.
    pub fn on_ended(&mut self) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        Effect::Ended
    }

    /// The surface started playing.
    pub fn on_play_event(&mut self) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        self.state.apply_play_event();
        Effect::StateChanged
    }

    /// The surface paused.
    pub fn on_pause_event(&mut self) -> Effect {
        if !self.has_selection() {
            return Effect::None;
        }
        self.state.apply_pause_event();
        Effect::StateChanged
    }

    /// Outcome of an earlier play request.
    ///
    /// Results stamped with an older generation are ignored. A refusal is
    /// absorbed into a paused state and never escalated.
    pub fn on_play_request_settled(
        &mut self,
        ticket: PlayTicket,
        outcome: Result<(), PlaybackError>,
    ) -> Effect {
        if ticket.generation() != self.state.generation() {
            log::debug!(
                "Ignoring stale play result for generation {} (current {})",
                ticket.generation(),
                self.state.generation()
            );
            return Effect::None;
        }

        match outcome {
            Ok(()) => {
                self.state.apply_play_accepted();
                Effect::StateChanged
            }
            Err(error) => {
                if error.is_autoplay_rejection() {
                    log::warn!("Autoplay blocked: {error}");
                } else {
                    log::warn!("Playback request failed: {error}");
                }
                self.state.apply_play_refused();
                Effect::PlayRefused { error }
            }
        }
    }
}
