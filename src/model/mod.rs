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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application—videos,
//! playlists, playback state—and the structured reply type that every
//! catalog operation produces for the presentation layer.

pub(crate) mod catalog;
pub(crate) mod error;
pub(crate) mod playback;
pub(crate) mod playlists;

use serde::Deserialize;

use crate::model::error::CommandError;

/// A catalog video record. Immutable after load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Video {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) tags: Vec<String>,
}

/// A snapshot of a video's catalog facts, including its flag status, for
/// the presentation layer to format.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VideoSummary {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) tags: Vec<String>,
    /// Raw stored flag reason, possibly empty. `None` means not flagged.
    pub(crate) flag: Option<String>,
}

/// The currently loaded video and whether it is paused.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct NowPlaying {
    pub(crate) video: VideoSummary,
    pub(crate) paused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Outcome {
    Success,
    Failure(CommandError),
}

/// Structured payload accompanying a [`Reply`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ReplyData {
    /// Plain video listing.
    Videos(Vec<VideoSummary>),
    /// Ranked search results, numbered 1-based by the presentation layer.
    Matches(Vec<VideoSummary>),
    /// Playlist display names.
    Playlists(Vec<String>),
    /// The video sequence of a single playlist.
    PlaylistVideos(Vec<VideoSummary>),
    NowPlaying(NowPlaying),
}

/// The result of one catalog operation.
///
/// Business-rule violations are carried in `outcome` rather than unwinding;
/// `messages` holds the user-facing lines in order. When `data` is present
/// its lines render between the first message and any remaining messages.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Reply {
    pub(crate) outcome: Outcome,
    pub(crate) messages: Vec<String>,
    pub(crate) data: Option<ReplyData>,
}

impl Reply {
    pub(crate) fn success(message: impl Into<String>) -> Self {
        Self {
            outcome: Outcome::Success,
            messages: vec![message.into()],
            data: None,
        }
    }

    pub(crate) fn success_with(message: impl Into<String>, data: ReplyData) -> Self {
        Self {
            outcome: Outcome::Success,
            messages: vec![message.into()],
            data: Some(data),
        }
    }

    /// A success that produces no output, e.g. a declined search selection.
    pub(crate) fn silent() -> Self {
        Self {
            outcome: Outcome::Success,
            messages: vec![],
            data: None,
        }
    }

    /// A failure reported as "Cannot {action}: {reason}".
    pub(crate) fn failure(action: &str, error: CommandError) -> Self {
        let message = format!("Cannot {action}: {error}");
        Self {
            outcome: Outcome::Failure(error),
            messages: vec![message],
            data: None,
        }
    }

    /// A failure whose message is the bare reason phrase.
    pub(crate) fn failure_message(error: CommandError) -> Self {
        let message = error.to_string();
        Self {
            outcome: Outcome::Failure(error),
            messages: vec![message],
            data: None,
        }
    }

    pub(crate) fn is_success(&self) -> bool {
        self.outcome == Outcome::Success
    }
}
