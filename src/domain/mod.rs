// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback types with ZERO external dependencies.
//!
//! This module contains pure value objects and state enums. It depends on
//! nothing but `std`, so every rule here is testable in isolation.
//!
//! # Modules
//!
//! - [`video`]: Video playback types ([`VideoId`](video::VideoId),
//!   [`Volume`](video::Volume), [`SeekFraction`](video::SeekFraction),
//!   [`SkipStep`](video::SkipStep), [`PlayerPhase`](video::PlayerPhase))

pub mod video;
