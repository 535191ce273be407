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

//! Business-rule failure reasons.
//!
//! Every predictable command failure is one of these kinds. The display
//! text is the reason phrase used verbatim in user-facing messages, so
//! message construction never happens in the presentation layer.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub(crate) enum CommandError {
    #[error("Video does not exist")]
    VideoNotFound,

    #[error("Playlist does not exist")]
    PlaylistNotFound,

    #[error("A playlist with the same name already exists")]
    PlaylistAlreadyExists,

    #[error("Video already added")]
    DuplicateVideo,

    #[error("Video is not in playlist")]
    VideoNotInPlaylist,

    /// Carries the display form of the flag reason.
    #[error("Video is currently flagged (reason: {0})")]
    VideoFlagged(String),

    #[error("Video is already flagged")]
    AlreadyFlagged,

    #[error("Video is not flagged")]
    NotFlagged,

    #[error("No video is currently playing")]
    NoVideoPlaying,

    #[error("Video is not paused")]
    NotPaused,

    #[error("No videos available")]
    NoVideosAvailable,
}
