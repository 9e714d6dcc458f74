// SPDX-License-Identifier: MPL-2.0
//! `showreel` is the core of a small video showcase widget.
//!
//! A fixed [`catalog::Catalog`] of videos is presented next to a single
//! player. The [`video_player::PlayerController`] drives one
//! [`application::port::PlaybackSurface`] and keeps its
//! [`video_player::PlaybackState`] consistent across selection changes, while
//! the [`host::SelectionHost`] owns the current selection and advances to the
//! next video when one ends.
//!
//! Rendering is left to the embedding application: it consumes
//! [`video_player::ControlsView`] and feeds surface events back in.

#![doc(html_root_url = "https://docs.rs/showreel/0.1.0")]

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod host;
pub mod i18n;
pub mod infrastructure;
pub mod video_player;

#[cfg(test)]
mod test_utils;
