// SPDX-License-Identifier: MPL-2.0
//! Simulated playback surface.
//!
//! Behaves like a browser media element without decoding anything:
//! - `load()` resets the playhead and reports metadata right away
//! - `play()` settles from a spawned task after `settle_delay`, so the
//!   outcome always arrives on a later turn of the event loop
//! - time only moves when the owner calls [`SimulatedSurface::advance`]
//!
//! Events are delivered through a `tokio` unbounded channel as
//! [`SurfaceMessage`]s stamped with the generation of the current load. Play
//! requests spawn tasks, so the surface must be used inside a tokio runtime.

use crate::application::port::{
    MediaSource, PlayTicket, PlaybackSurface, SurfaceEvent, SurfaceMessage,
};
use crate::error::PlaybackError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// How the simulated platform treats play requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AutoplayPolicy {
    /// Every play request succeeds.
    #[default]
    Allow,
    /// The first play request after each load is refused, as browsers do
    /// for programmatic starts without a user gesture. Later requests
    /// (user presses play) succeed.
    Block,
}

/// Tunables for [`SimulatedSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedOptions {
    pub autoplay: AutoplayPolicy,
    /// Duration reported for every source.
    pub media_duration_secs: f64,
    /// Delay before a play request settles.
    pub settle_delay: Duration,
}

impl Default for SimulatedOptions {
    fn default() -> Self {
        Self {
            autoplay: AutoplayPolicy::Allow,
            media_duration_secs: 30.0,
            settle_delay: Duration::from_millis(20),
        }
    }
}

/// In-process [`PlaybackSurface`] reporting through an mpsc channel.
#[derive(Debug)]
pub struct SimulatedSurface {
    events: mpsc::UnboundedSender<SurfaceMessage>,
    options: SimulatedOptions,
    source: Option<MediaSource>,
    position: f64,
    volume: f32,
    muted: bool,
    plays_since_load: u32,
    /// Generation of the current load; stamps messages, settle tasks compare against it.
    load_generation: Arc<AtomicU64>,
    /// Shared with settle tasks, which flip it when playback starts.
    paused: Arc<AtomicBool>,
}

impl SimulatedSurface {
    /// Creates a surface and the receiver its events arrive on.
    pub fn new(options: SimulatedOptions) -> (Self, mpsc::UnboundedReceiver<SurfaceMessage>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let surface = Self {
            events,
            options,
            source: None,
            position: 0.0,
            volume: 1.0,
            muted: false,
            plays_since_load: 0,
            load_generation: Arc::new(AtomicU64::new(0)),
            paused: Arc::new(AtomicBool::new(true)),
        };
        (surface, receiver)
    }

    /// Currently loaded source.
    pub fn source(&self) -> Option<&MediaSource> {
        self.source.as_ref()
    }

    /// Returns true while the simulated element is paused.
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::SeqCst)
    }

    /// Moves the clock forward by `elapsed`.
    ///
    /// Emits a time update while playing; at the end of the media emits
    /// time update, pause and ended, in that order.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.source.is_none() || self.is_paused() {
            return;
        }

        let duration = self.options.media_duration_secs;
        self.position = (self.position + elapsed.as_secs_f64()).min(duration);
        self.emit(SurfaceEvent::TimeUpdate {
            position_secs: self.position,
        });

        if self.position >= duration {
            self.paused.store(true, Ordering::SeqCst);
            self.emit(SurfaceEvent::Pause);
            self.emit(SurfaceEvent::Ended);
        }
    }

    fn emit(&self, event: SurfaceEvent) {
        let generation = self.load_generation.load(Ordering::SeqCst);
        // Receiver gone means the player was unmounted.
        let _ = self.events.send(SurfaceMessage::new(generation, event));
    }

    fn spawn_settle(&self, ticket: PlayTicket, refusal: Option<PlaybackError>) {
        let events = self.events.clone();
        let load_generation = Arc::clone(&self.load_generation);
        let paused = Arc::clone(&self.paused);
        let issued_for = load_generation.load(Ordering::SeqCst);
        let delay = self.options.settle_delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let send = |event| {
                let _ = events.send(SurfaceMessage::new(issued_for, event));
            };

            if let Some(error) = refusal {
                send(SurfaceEvent::PlayRequestSettled {
                    ticket,
                    outcome: Err(error),
                });
                return;
            }

            if load_generation.load(Ordering::SeqCst) != issued_for {
                send(SurfaceEvent::PlayRequestSettled {
                    ticket,
                    outcome: Err(PlaybackError::Other(
                        "play() request was interrupted by a new load request".to_string(),
                    )),
                });
                return;
            }

            paused.store(false, Ordering::SeqCst);
            send(SurfaceEvent::Play);
            send(SurfaceEvent::PlayRequestSettled {
                ticket,
                outcome: Ok(()),
            });
        });
    }
}

impl PlaybackSurface for SimulatedSurface {
    fn load(&mut self, source: &MediaSource, generation: u64) {
        self.load_generation.store(generation, Ordering::SeqCst);
        self.paused.store(true, Ordering::SeqCst);
        self.source = Some(source.clone());
        self.position = 0.0;
        self.plays_since_load = 0;
        log::debug!("Simulated surface loading {}", source.media);
        self.emit(SurfaceEvent::LoadedMetadata {
            duration_secs: self.options.media_duration_secs,
        });
    }

    fn play(&mut self, ticket: PlayTicket) {
        self.plays_since_load += 1;

        let refusal = if self.source.is_none() {
            Some(PlaybackError::SourceUnavailable("no source loaded".to_string()))
        } else if self.options.autoplay == AutoplayPolicy::Block && self.plays_since_load == 1 {
            Some(PlaybackError::AutoplayRejected(
                "play() can only be initiated by a user gesture".to_string(),
            ))
        } else {
            None
        };

        self.spawn_settle(ticket, refusal);
    }

    fn pause(&mut self) {
        let was_playing = !self.paused.swap(true, Ordering::SeqCst);
        if was_playing {
            self.emit(SurfaceEvent::Pause);
        }
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        let Some(duration) = self.duration() else {
            return;
        };
        self.position = if secs.is_nan() {
            0.0
        } else {
            secs.clamp(0.0, duration)
        };
        self.emit(SurfaceEvent::TimeUpdate {
            position_secs: self.position,
        });
    }

    fn duration(&self) -> Option<f64> {
        self.source.as_ref().map(|_| self.options.media_duration_secs)
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }
}
