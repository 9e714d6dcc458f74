// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`simulated`]: In-process playback surface driven by an explicit clock
//!   (implements [`PlaybackSurface`])
//!
//! [`PlaybackSurface`]: crate::application::port::PlaybackSurface

pub mod simulated;

pub use simulated::{AutoplayPolicy, SimulatedOptions, SimulatedSurface};
