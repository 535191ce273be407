// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Playback state transitions.
//!
//! Tracks the single currently loaded video and its paused status. The
//! state holds a lookup key into the catalog, never the record itself.
//! `paused` is only ever true while a video is loaded.

use crate::model::error::CommandError;

/// Result of a pause request on a loaded video.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Pause {
    Paused(String),
    /// The video was already paused; a notice, not an error.
    AlreadyPaused(String),
}

pub(crate) struct PlaybackState {
    current: Option<String>,
    paused: bool,
}

impl PlaybackState {
    pub(crate) fn new() -> Self {
        Self {
            current: None,
            paused: false,
        }
    }

    pub(crate) fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub(crate) fn is_paused(&self) -> bool {
        self.paused
    }

    /// Loads a new video, returning the id of the one it implicitly
    /// stopped, if any.
    pub(crate) fn play(&mut self, id: &str) -> Option<String> {
        let previous = self.current.replace(id.to_string());
        self.paused = false;
        previous
    }

    /// Unloads the current video and returns its id.
    pub(crate) fn stop(&mut self) -> Result<String, CommandError> {
        let id = self.current.take().ok_or(CommandError::NoVideoPlaying)?;
        self.paused = false;
        Ok(id)
    }

    pub(crate) fn pause(&mut self) -> Result<Pause, CommandError> {
        let id = self
            .current
            .clone()
            .ok_or(CommandError::NoVideoPlaying)?;
        if self.paused {
            return Ok(Pause::AlreadyPaused(id));
        }
        self.paused = true;
        Ok(Pause::Paused(id))
    }

    pub(crate) fn resume(&mut self) -> Result<String, CommandError> {
        let id = self
            .current
            .clone()
            .ok_or(CommandError::NoVideoPlaying)?;
        if !self.paused {
            return Err(CommandError::NotPaused);
        }
        self.paused = false;
        Ok(id)
    }
}
