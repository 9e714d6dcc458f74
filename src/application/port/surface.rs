// SPDX-License-Identifier: MPL-2.0
//! Playback surface port definition.
//!
//! This module defines the [`PlaybackSurface`] trait: the one media element
//! the player controller drives. Infrastructure adapters (a browser element
//! bridge, a native pipeline, the in-process simulation) implement it.
//!
//! # Design Notes
//!
//! - The surface is **stateful**: it owns the real position, duration and
//!   paused flag, and reports changes as [`SurfaceEvent`]s
//! - `play()` only *requests* playback. Its outcome arrives later as
//!   [`SurfaceEvent::PlayRequestSettled`] carrying the same [`PlayTicket`]
//! - Every event is reported inside a [`SurfaceMessage`] stamped with the
//!   generation of the `load()` that produced it. Events still queued when
//!   the source is replaced are recognisable as stale
//! - The surface clamps positions into `[0, duration]`; callers do not
//! - Exactly one controller owns a surface; nothing else issues commands

use crate::error::PlaybackError;

/// References the surface needs to present one catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource {
    /// Playable media reference.
    pub media: String,
    /// Still image shown until the first frame.
    pub poster: String,
}

impl MediaSource {
    pub fn new(media: impl Into<String>, poster: impl Into<String>) -> Self {
        Self {
            media: media.into(),
            poster: poster.into(),
        }
    }
}

/// Identifies one play request.
///
/// The ticket carries the load generation it was issued under, so a result
/// that arrives after the selection changed can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlayTicket {
    generation: u64,
}

impl PlayTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self { generation }
    }

    /// Load generation the request was issued under.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// Events a surface reports back to its controller.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    /// Media metadata is available; carries the duration in seconds.
    LoadedMetadata { duration_secs: f64 },
    /// Periodic progress tick; carries the current position in seconds.
    TimeUpdate { position_secs: f64 },
    /// Playback actually started.
    Play,
    /// Playback actually paused.
    Pause,
    /// The end of the media was reached.
    Ended,
    /// A play request completed or was refused.
    PlayRequestSettled {
        ticket: PlayTicket,
        outcome: Result<(), PlaybackError>,
    },
}

/// A surface event stamped with the load generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceMessage {
    /// Generation passed to the `load()` that was current when the event fired.
    pub generation: u64,
    pub event: SurfaceEvent,
}

impl SurfaceMessage {
    pub fn new(generation: u64, event: SurfaceEvent) -> Self {
        Self { generation, event }
    }
}

/// Port for a media playback surface.
///
/// # Lifecycle
///
/// 1. `load()` a source under a new generation; position resets to 0 and
///    the surface pauses
/// 2. `play()` with a fresh ticket; wait for `PlayRequestSettled` / `Play`
/// 3. Adjust position, volume and mute at any time
/// 4. `load()` again to replace the source
pub trait PlaybackSurface {
    /// Replaces the current source and starts loading it.
    ///
    /// Every event reported from now on carries `generation`.
    fn load(&mut self, source: &MediaSource, generation: u64);

    /// Requests playback. The outcome is reported asynchronously.
    fn play(&mut self, ticket: PlayTicket);

    /// Pauses playback.
    fn pause(&mut self);

    /// Returns the current position in seconds.
    fn position(&self) -> f64;

    /// Moves the playhead. The surface clamps into `[0, duration]`.
    fn set_position(&mut self, secs: f64);

    /// Returns the media duration, or `None` before metadata is known.
    fn duration(&self) -> Option<f64>;

    /// Returns the output volume in `[0, 1]`.
    fn volume(&self) -> f32;

    /// Sets the output volume in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);

    /// Returns whether audio output is muted.
    fn is_muted(&self) -> bool;

    /// Mutes or unmutes audio output.
    fn set_muted(&mut self, muted: bool);
}

impl<S: PlaybackSurface + ?Sized> PlaybackSurface for Box<S> {
    fn load(&mut self, source: &MediaSource, generation: u64) {
        (**self).load(source, generation);
    }

    fn play(&mut self, ticket: PlayTicket) {
        (**self).play(ticket);
    }

    fn pause(&mut self) {
        (**self).pause();
    }

    fn position(&self) -> f64 {
        (**self).position()
    }

    fn set_position(&mut self, secs: f64) {
        (**self).set_position(secs);
    }

    fn duration(&self) -> Option<f64> {
        (**self).duration()
    }

    fn volume(&self) -> f32 {
        (**self).volume()
    }

    fn set_volume(&mut self, volume: f32) {
        (**self).set_volume(volume);
    }

    fn is_muted(&self) -> bool {
        (**self).is_muted()
    }

    fn set_muted(&mut self, muted: bool) {
        (**self).set_muted(muted);
    }
}
