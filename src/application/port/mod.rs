// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`surface`]: Media playback surface (load, play, pause, seek, volume)
//!
//! # Design Notes
//!
//! - Traits use domain types only, never a concrete media backend
//! - No `async fn`: asynchronous outcomes come back as [`SurfaceMessage`]s
//!   delivered by the host event loop

pub mod surface;

pub use surface::{MediaSource, PlayTicket, PlaybackSurface, SurfaceEvent, SurfaceMessage};
