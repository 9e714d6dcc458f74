// SPDX-License-Identifier: MPL-2.0
//! Playback engine for the showcase player.
//!
//! This module owns the per-player state machine and the controller that
//! keeps it in step with a [`PlaybackSurface`](crate::application::port::PlaybackSurface).

mod controller;
pub mod seek;
mod state;
pub mod time_format;
pub mod view;

pub use controller::{Effect, PlayerController, PlayerSettings};
pub use seek::TrackGeometry;
pub use state::PlaybackState;
pub use time_format::format_time;
pub use view::{ActiveControls, ControlsView, TransportIcon, VolumeIcon};
