// SPDX-License-Identifier: MPL-2.0
//! Selection host: composition root for the catalog and the player.
//!
//! The host owns the "currently selected video" id. Both list clicks and the
//! player's ended signal funnel into [`SelectionHost::select_video`], so a
//! selection change always has the same side effects (state reset, source
//! reload, autoplay attempt) no matter what triggered it.

use crate::application::port::{PlaybackSurface, SurfaceMessage};
use crate::catalog::{Catalog, VideoRecord};
use crate::domain::video::VideoId;
use crate::error::{Error, Result};
use crate::video_player::{Effect, PlayerController, PlayerSettings};

#[derive(Debug)]
pub struct SelectionHost<S: PlaybackSurface> {
    catalog: Catalog,
    current: Option<VideoId>,
    player: PlayerController<S>,
}

impl<S: PlaybackSurface> SelectionHost<S> {
    /// Creates a host with nothing selected yet.
    pub fn new(catalog: Catalog, surface: S, settings: PlayerSettings) -> Self {
        Self {
            catalog,
            current: None,
            player: PlayerController::new(surface, settings),
        }
    }

    /// Creates a host and selects the first catalog record.
    pub fn with_initial_selection(catalog: Catalog, surface: S, settings: PlayerSettings) -> Self {
        let first = catalog.first().clone();
        let mut host = Self::new(catalog, surface, settings);
        host.current = Some(first.id);
        host.player.select_video(first);
        host
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Id of the selected video, for highlighting it in the list.
    pub fn current_id(&self) -> Option<VideoId> {
        self.current
    }

    /// The selected record, if any.
    pub fn current_video(&self) -> Option<&VideoRecord> {
        self.current.and_then(|id| self.catalog.find_by_id(id))
    }

    pub fn player(&self) -> &PlayerController<S> {
        &self.player
    }

    /// Transport commands (play, skip, volume, ...) go through the player.
    pub fn player_mut(&mut self) -> &mut PlayerController<S> {
        &mut self.player
    }

    /// Makes `id` the current selection and hands its record to the player.
    ///
    /// An unknown id leaves the current selection untouched.
    pub fn select_video(&mut self, id: VideoId) -> Result<Effect> {
        let record = self
            .catalog
            .find_by_id(id)
            .cloned()
            .ok_or(Error::UnknownVideo(id))?;
        self.current = Some(id);
        Ok(self.player.select_video(record))
    }

    /// Advances to the cyclic successor of the current selection.
    ///
    /// With nothing selected this starts at the first record.
    pub fn advance_to_next(&mut self) -> Effect {
        let next = match self.current {
            Some(id) => self.catalog.next(id).clone(),
            None => self.catalog.first().clone(),
        };
        log::debug!("Advancing to video {}", next.id);
        self.current = Some(next.id);
        self.player.select_video(next)
    }

    /// Forwards a surface message to the player; an ended signal advances.
    ///
    /// Messages left over from a previous selection never advance.
    pub fn handle_surface_event(&mut self, message: SurfaceMessage) -> Effect {
        match self.player.handle(message) {
            Effect::Ended => self.advance_to_next(),
            effect => effect,
        }
    }
}
