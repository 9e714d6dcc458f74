// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and other common test helpers.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.
//! It also provides [`RecordingSurface`], a synchronous surface double that
//! records every command the controller issues.

pub use approx::assert_abs_diff_eq;

use crate::application::port::{MediaSource, PlayTicket, PlaybackSurface};

/// Command observed by a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    Load(MediaSource),
    Play(PlayTicket),
    Pause,
    SetPosition(f64),
    SetVolume(f32),
    SetMuted(bool),
}

/// Surface double that never emits events on its own.
///
/// Tests feed events to the controller by hand, which keeps ordering explicit.
#[derive(Debug)]
pub struct RecordingSurface {
    media_duration: f64,
    duration: Option<f64>,
    position: f64,
    volume: f32,
    muted: bool,
    pub commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Creates a surface whose sources all last `media_duration` seconds.
    pub fn new(media_duration: f64) -> Self {
        Self {
            media_duration,
            duration: None,
            position: 0.0,
            volume: 1.0,
            muted: false,
            commands: Vec::new(),
        }
    }

    /// Play tickets issued so far, oldest first.
    pub fn tickets(&self) -> Vec<PlayTicket> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                SurfaceCommand::Play(ticket) => Some(*ticket),
                _ => None,
            })
            .collect()
    }

    /// Most recently loaded source.
    pub fn loaded(&self) -> Option<&MediaSource> {
        self.commands.iter().rev().find_map(|command| match command {
            SurfaceCommand::Load(source) => Some(source),
            _ => None,
        })
    }
}

impl PlaybackSurface for RecordingSurface {
    fn load(&mut self, source: &MediaSource, _generation: u64) {
        self.position = 0.0;
        self.duration = Some(self.media_duration);
        self.commands.push(SurfaceCommand::Load(source.clone()));
    }

    fn play(&mut self, ticket: PlayTicket) {
        self.commands.push(SurfaceCommand::Play(ticket));
    }

    fn pause(&mut self) {
        self.commands.push(SurfaceCommand::Pause);
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn set_position(&mut self, secs: f64) {
        let upper = self.duration.unwrap_or(f64::MAX);
        self.position = secs.clamp(0.0, upper);
        self.commands.push(SurfaceCommand::SetPosition(secs));
    }

    fn duration(&self) -> Option<f64> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        self.commands.push(SurfaceCommand::SetVolume(volume));
    }

    fn is_muted(&self) -> bool {
        self.muted
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.commands.push(SurfaceCommand::SetMuted(muted));
    }
}
