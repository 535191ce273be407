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

//! Display formatting helpers.
//!
//! Turns structured reply data into the text lines shown in the output
//! log. The core never joins tags or appends status suffixes itself.

use crate::model::{NowPlaying, VideoSummary};

/// The display form of a stored flag reason.
pub(crate) fn display_reason(reason: &str) -> &str {
    if reason.is_empty() { "Not supplied" } else { reason }
}

/// "Title (id) [#tag #tag]", with a flag note when flagged.
pub(crate) fn format_video(video: &VideoSummary) -> String {
    let tags = video.tags.join(" ");
    let mut line = format!("{} ({}) [{}]", video.title, video.id, tags);
    if let Some(reason) = &video.flag {
        line.push_str(&format!(" - FLAGGED (reason: {})", display_reason(reason)));
    }
    line
}

pub(crate) fn format_now_playing(now: &NowPlaying) -> String {
    let mut line = format!("Currently playing: {}", format_video(&now.video));
    if now.paused {
        line.push_str(" - PAUSED");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(flag: Option<&str>) -> VideoSummary {
        VideoSummary {
            id: "amazing_cats_video_id".to_string(),
            title: "Amazing Cats".to_string(),
            tags: vec!["#cat".to_string(), "#animal".to_string()],
            flag: flag.map(str::to_string),
        }
    }

    #[test]
    fn test_format_video() {
        assert_eq!(
            format_video(&summary(None)),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );
    }

    #[test]
    fn test_format_video_without_tags() {
        let video = VideoSummary {
            id: "nothing_video_id".to_string(),
            title: "Video about nothing".to_string(),
            tags: vec![],
            flag: None,
        };
        assert_eq!(
            format_video(&video),
            "Video about nothing (nothing_video_id) []"
        );
    }

    #[test]
    fn test_format_flagged_video() {
        assert_eq!(
            format_video(&summary(Some("dont_like_cats"))),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: dont_like_cats)"
        );
        assert_eq!(
            format_video(&summary(Some(""))),
            "Amazing Cats (amazing_cats_video_id) [#cat #animal] - FLAGGED (reason: Not supplied)"
        );
    }

    #[test]
    fn test_format_now_playing() {
        let now = NowPlaying {
            video: summary(None),
            paused: false,
        };
        assert_eq!(
            format_now_playing(&now),
            "Currently playing: Amazing Cats (amazing_cats_video_id) [#cat #animal]"
        );

        let paused = NowPlaying {
            video: summary(None),
            paused: true,
        };
        assert!(format_now_playing(&paused).ends_with(" - PAUSED"));
    }
}
