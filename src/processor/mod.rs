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

//! Command orchestration.
//!
//! The [`CommandProcessor`] is the single mutation point for playback
//! state, playlists and the flag registry. Each operation validates
//! against current catalog facts before mutating anything; the first
//! failing check wins and nothing is mutated after a failure. Every
//! operation returns a [`Reply`] rather than unwinding.

use rand::RngExt;

use crate::{
    model::{
        NowPlaying, Outcome, Reply, ReplyData, Video, VideoSummary,
        catalog::Catalog,
        error::CommandError,
        playback::{Pause, PlaybackState},
        playlists::PlaylistStore,
    },
    util::format::display_reason,
};

/// Picks an index for random playback. `len` is always non-zero.
///
/// A seam so tests can substitute a deterministic choice.
pub(crate) trait VideoSelector: Send {
    fn pick(&mut self, len: usize) -> usize;
}

pub(crate) struct ThreadRngSelector;

impl VideoSelector for ThreadRngSelector {
    fn pick(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

pub(crate) struct CommandProcessor {
    catalog: Catalog,
    playlists: PlaylistStore,
    playback: PlaybackState,
    /// Ranked ids of the most recent search results, selection targets
    /// until the next search replaces or clears them.
    last_search: Vec<String>,
    selector: Box<dyn VideoSelector>,
}

impl CommandProcessor {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self::with_selector(catalog, Box::new(ThreadRngSelector))
    }

    pub(crate) fn with_selector(catalog: Catalog, selector: Box<dyn VideoSelector>) -> Self {
        Self {
            catalog,
            playlists: PlaylistStore::new(),
            playback: PlaybackState::new(),
            last_search: vec![],
            selector,
        }
    }

    pub(crate) fn number_of_videos(&self) -> Reply {
        Reply::success(format!("{} videos in the library", self.catalog.len()))
    }

    pub(crate) fn show_all_videos(&self) -> Reply {
        let mut videos: Vec<VideoSummary> = self
            .catalog
            .all_videos()
            .into_iter()
            .map(|v| self.summarise(v))
            .collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title));
        Reply::success_with(
            "Here's a list of all available videos:",
            ReplyData::Videos(videos),
        )
    }

    pub(crate) fn play(&mut self, id: &str) -> Reply {
        let Some(video) = self.catalog.video(id) else {
            return Reply::failure("play video", CommandError::VideoNotFound);
        };
        if let Some(reason) = self.catalog.flag_reason(id) {
            let reason = display_reason(reason).to_string();
            return Reply::failure("play video", CommandError::VideoFlagged(reason));
        }

        let title = video.title.clone();
        let mut messages = vec![];
        if let Some(previous) = self.playback.play(id) {
            messages.push(format!("Stopping video: {}", self.title_of(&previous)));
        }
        messages.push(format!("Playing video: {title}"));

        Reply {
            outcome: Outcome::Success,
            messages,
            data: None,
        }
    }

    pub(crate) fn play_random(&mut self) -> Reply {
        let mut eligible: Vec<&Video> = self
            .catalog
            .all_videos()
            .into_iter()
            .filter(|v| !self.catalog.is_flagged(&v.id))
            .collect();
        if eligible.is_empty() {
            return Reply::failure_message(CommandError::NoVideosAvailable);
        }

        // Stable order so an injected selector maps an index to a
        // predictable video.
        eligible.sort_by(|a, b| a.title.cmp(&b.title));
        let id = eligible[self.selector.pick(eligible.len())].id.clone();
        self.play(&id)
    }

    pub(crate) fn stop(&mut self) -> Reply {
        match self.playback.stop() {
            Ok(id) => Reply::success(format!("Stopping video: {}", self.title_of(&id))),
            Err(e) => Reply::failure("stop video", e),
        }
    }

    pub(crate) fn pause(&mut self) -> Reply {
        match self.playback.pause() {
            Ok(Pause::Paused(id)) => {
                Reply::success(format!("Pausing video: {}", self.title_of(&id)))
            }
            Ok(Pause::AlreadyPaused(id)) => {
                Reply::success(format!("Video already paused: {}", self.title_of(&id)))
            }
            Err(e) => Reply::failure("pause video", e),
        }
    }

    pub(crate) fn continue_video(&mut self) -> Reply {
        match self.playback.resume() {
            Ok(id) => Reply::success(format!("Continuing video: {}", self.title_of(&id))),
            Err(e) => Reply::failure("continue video", e),
        }
    }

    pub(crate) fn show_playing(&self) -> Reply {
        match self.now_playing() {
            Some(now) => Reply {
                outcome: Outcome::Success,
                messages: vec![],
                data: Some(ReplyData::NowPlaying(now)),
            },
            None => Reply::success("No video is currently playing"),
        }
    }

    /// Status snapshot for the frontend, refreshed after every command.
    pub(crate) fn now_playing(&self) -> Option<NowPlaying> {
        let id = self.playback.current()?;
        let video = self.catalog.video(id).map(|v| self.summarise(v))?;
        Some(NowPlaying {
            video,
            paused: self.playback.is_paused(),
        })
    }

    pub(crate) fn create_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.create(name) {
            Ok(()) => Reply::success(format!("Successfully created new playlist: {name}")),
            Err(e) => Reply::failure("create playlist", e),
        }
    }

    pub(crate) fn add_to_playlist(&mut self, name: &str, id: &str) -> Reply {
        let action = format!("add video to playlist {name}");
        if self.playlists.get(name).is_none() {
            return Reply::failure(&action, CommandError::PlaylistNotFound);
        }
        let Some(video) = self.catalog.video(id) else {
            return Reply::failure(&action, CommandError::VideoNotFound);
        };
        if let Some(reason) = self.catalog.flag_reason(id) {
            let reason = display_reason(reason).to_string();
            return Reply::failure(&action, CommandError::VideoFlagged(reason));
        }

        let title = video.title.clone();
        match self.playlists.add_video(name, id) {
            Ok(()) => Reply::success(format!("Added video to {name}: {title}")),
            Err(e) => Reply::failure(&action, e),
        }
    }

    pub(crate) fn remove_from_playlist(&mut self, name: &str, id: &str) -> Reply {
        let action = format!("remove video from playlist {name}");
        if self.playlists.get(name).is_none() {
            return Reply::failure(&action, CommandError::PlaylistNotFound);
        }
        let Some(video) = self.catalog.video(id) else {
            return Reply::failure(&action, CommandError::VideoNotFound);
        };

        let title = video.title.clone();
        match self.playlists.remove_video(name, id) {
            Ok(()) => Reply::success(format!("Removed video from {name}: {title}")),
            Err(e) => Reply::failure(&action, e),
        }
    }

    pub(crate) fn clear_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.clear(name) {
            Ok(()) => Reply::success(format!("Successfully removed all videos from {name}")),
            Err(e) => Reply::failure(&format!("clear playlist {name}"), e),
        }
    }

    pub(crate) fn delete_playlist(&mut self, name: &str) -> Reply {
        match self.playlists.delete(name) {
            Ok(()) => Reply::success(format!("Deleted playlist: {name}")),
            Err(e) => Reply::failure(&format!("delete playlist {name}"), e),
        }
    }

    pub(crate) fn show_all_playlists(&self) -> Reply {
        let playlists = self.playlists.list_all();
        if playlists.is_empty() {
            return Reply::success("No playlists exist yet");
        }
        let names = playlists.iter().map(|p| p.name.clone()).collect();
        Reply::success_with("Showing all playlists:", ReplyData::Playlists(names))
    }

    pub(crate) fn show_playlist(&self, name: &str) -> Reply {
        let Some(playlist) = self.playlists.get(name) else {
            return Reply::failure(
                &format!("show playlist {name}"),
                CommandError::PlaylistNotFound,
            );
        };
        // Flagged entries stay listed, their status shown by the frontend.
        let videos = playlist
            .videos
            .iter()
            .filter_map(|id| self.catalog.video(id))
            .map(|v| self.summarise(v))
            .collect();
        Reply::success_with(
            format!("Showing playlist: {name}"),
            ReplyData::PlaylistVideos(videos),
        )
    }

    /// Case-insensitive substring match on titles.
    pub(crate) fn search(&mut self, term: &str) -> Reply {
        let needle = term.to_lowercase();
        self.ranked_results(term, |v| v.title.to_lowercase().contains(&needle))
    }

    /// Exact, case-insensitive tag match.
    pub(crate) fn search_by_tag(&mut self, tag: &str) -> Reply {
        let needle = tag.to_lowercase();
        self.ranked_results(tag, |v| v.tags.iter().any(|t| t.to_lowercase() == needle))
    }

    fn ranked_results(&mut self, term: &str, matches: impl Fn(&Video) -> bool) -> Reply {
        let mut found: Vec<&Video> = self
            .catalog
            .all_videos()
            .into_iter()
            .filter(|v| !self.catalog.is_flagged(&v.id))
            .filter(|v| matches(v))
            .collect();
        found.sort_by(|a, b| a.title.cmp(&b.title));

        if found.is_empty() {
            self.last_search.clear();
            return Reply::success(format!("No search results for {term}"));
        }

        let results: Vec<VideoSummary> = found.iter().map(|v| self.summarise(v)).collect();
        self.last_search = results.iter().map(|v| v.id.clone()).collect();

        Reply {
            outcome: Outcome::Success,
            messages: vec![
                format!("Here are the results for {term}:"),
                "Would you like to play any of the above? If yes, specify the number of the video."
                    .to_string(),
                "If your answer is not a valid number, we will assume it's a no.".to_string(),
            ],
            data: Some(ReplyData::Matches(results)),
        }
    }

    /// 1-based selection into the last search results. Non-numeric or
    /// out-of-range input means no selection, silently.
    pub(crate) fn select(&mut self, input: &str) -> Reply {
        let Ok(choice) = input.trim().parse::<usize>() else {
            return Reply::silent();
        };
        if choice == 0 || choice > self.last_search.len() {
            return Reply::silent();
        }
        let id = self.last_search[choice - 1].clone();
        self.play(&id)
    }

    pub(crate) fn flag(&mut self, id: &str, reason: &str) -> Reply {
        let Some(video) = self.catalog.video(id) else {
            return Reply::failure("flag video", CommandError::VideoNotFound);
        };
        if self.catalog.is_flagged(id) {
            return Reply::failure("flag video", CommandError::AlreadyFlagged);
        }

        let title = video.title.clone();
        let mut messages = vec![];
        // Flagging the loaded video forces a stop.
        if self.playback.current() == Some(id) {
            if let Ok(stopped) = self.playback.stop() {
                messages.push(format!("Stopping video: {}", self.title_of(&stopped)));
            }
        }

        let reason = reason.trim();
        self.catalog.flag(id, reason);
        messages.push(format!(
            "Successfully flagged video: {title} (reason: {})",
            display_reason(reason)
        ));

        Reply {
            outcome: Outcome::Success,
            messages,
            data: None,
        }
    }

    pub(crate) fn allow(&mut self, id: &str) -> Reply {
        let Some(video) = self.catalog.video(id) else {
            return Reply::failure("remove flag from video", CommandError::VideoNotFound);
        };
        if !self.catalog.is_flagged(id) {
            return Reply::failure("remove flag from video", CommandError::NotFlagged);
        }

        let title = video.title.clone();
        self.catalog.unflag(id);
        Reply::success(format!("Successfully removed flag from video: {title}"))
    }

    fn summarise(&self, video: &Video) -> VideoSummary {
        VideoSummary {
            id: video.id.clone(),
            title: video.title.clone(),
            tags: video.tags.clone(),
            flag: self.catalog.flag_reason(&video.id).map(str::to_string),
        }
    }

    fn title_of(&self, id: &str) -> String {
        self.catalog
            .video(id)
            .map(|v| v.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Always picks the given index.
    struct FixedSelector(usize);

    impl VideoSelector for FixedSelector {
        fn pick(&mut self, len: usize) -> usize {
            self.0.min(len - 1)
        }
    }

    fn video(id: &str, title: &str, tags: &[&str]) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    fn sample_catalog() -> Catalog {
        Catalog::from_videos(vec![
            video("amazing_cats_video_id", "Amazing Cats", &["#cat", "#animal"]),
            video(
                "another_cat_video_id",
                "Another Cat Video",
                &["#cat", "#animal"],
            ),
            video("funny_dogs_video_id", "Funny Dogs", &["#dog", "#animal"]),
            video(
                "life_at_google_video_id",
                "Life at Google",
                &["#google", "#career"],
            ),
            video("nothing_video_id", "Video about nothing", &[]),
        ])
        .unwrap()
    }

    fn processor() -> CommandProcessor {
        CommandProcessor::new(sample_catalog())
    }

    #[test]
    fn test_number_of_videos() {
        let reply = processor().number_of_videos();
        assert_eq!(reply.messages, vec!["5 videos in the library"]);
    }

    #[test]
    fn test_show_all_videos_sorted_by_title() {
        let reply = processor().show_all_videos();
        let Some(ReplyData::Videos(videos)) = reply.data else {
            panic!("expected video listing");
        };
        let titles: Vec<&str> = videos.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Amazing Cats",
                "Another Cat Video",
                "Funny Dogs",
                "Life at Google",
                "Video about nothing",
            ]
        );
    }

    #[test]
    fn test_play() {
        let mut processor = processor();
        let reply = processor.play("amazing_cats_video_id");
        assert_eq!(reply.messages, vec!["Playing video: Amazing Cats"]);
        assert_eq!(
            processor.now_playing().unwrap().video.title,
            "Amazing Cats"
        );
    }

    #[test]
    fn test_play_unknown_video() {
        let reply = processor().play("does_not_exist");
        assert_eq!(reply.outcome, Outcome::Failure(CommandError::VideoNotFound));
        assert_eq!(reply.messages, vec!["Cannot play video: Video does not exist"]);
    }

    #[test]
    fn test_play_stops_previous_video_first() {
        let mut processor = processor();
        processor.play("amazing_cats_video_id");
        let reply = processor.play("funny_dogs_video_id");
        assert_eq!(
            reply.messages,
            vec![
                "Stopping video: Amazing Cats",
                "Playing video: Funny Dogs",
            ]
        );
        // Only one video is ever loaded.
        assert_eq!(
            processor.now_playing().unwrap().video.id,
            "funny_dogs_video_id"
        );
    }

    #[test]
    fn test_play_flagged_video_rejected() {
        let mut processor = processor();
        processor.flag("amazing_cats_video_id", "dont_like_cats");
        let reply = processor.play("amazing_cats_video_id");
        assert_eq!(
            reply.messages,
            vec!["Cannot play video: Video is currently flagged (reason: dont_like_cats)"]
        );
    }

    #[test]
    fn test_stop() {
        let mut processor = processor();
        processor.play("amazing_cats_video_id");
        let reply = processor.stop();
        assert_eq!(reply.messages, vec!["Stopping video: Amazing Cats"]);

        let reply = processor.stop();
        assert_eq!(
            reply.messages,
            vec!["Cannot stop video: No video is currently playing"]
        );
    }

    #[test]
    fn test_pause_and_continue() {
        let mut processor = processor();
        assert_eq!(
            processor.pause().messages,
            vec!["Cannot pause video: No video is currently playing"]
        );
        assert_eq!(
            processor.continue_video().messages,
            vec!["Cannot continue video: No video is currently playing"]
        );

        processor.play("amazing_cats_video_id");
        assert_eq!(
            processor.continue_video().messages,
            vec!["Cannot continue video: Video is not paused"]
        );

        assert_eq!(
            processor.pause().messages,
            vec!["Pausing video: Amazing Cats"]
        );
        let again = processor.pause();
        assert!(again.is_success());
        assert_eq!(again.messages, vec!["Video already paused: Amazing Cats"]);

        assert_eq!(
            processor.continue_video().messages,
            vec!["Continuing video: Amazing Cats"]
        );
        assert!(!processor.now_playing().unwrap().paused);
    }

    #[test]
    fn test_show_playing() {
        let mut processor = processor();
        assert_eq!(
            processor.show_playing().messages,
            vec!["No video is currently playing"]
        );

        processor.play("amazing_cats_video_id");
        processor.pause();
        let Some(ReplyData::NowPlaying(now)) = processor.show_playing().data else {
            panic!("expected now-playing data");
        };
        assert_eq!(now.video.id, "amazing_cats_video_id");
        assert!(now.paused);
    }

    #[test]
    fn test_play_random_only_picks_unflagged() {
        let mut processor = CommandProcessor::with_selector(
            sample_catalog(),
            Box::new(FixedSelector(0)),
        );
        processor.flag("amazing_cats_video_id", "");
        let reply = processor.play_random();
        // First eligible title after "Amazing Cats" is excluded.
        assert_eq!(reply.messages, vec!["Playing video: Another Cat Video"]);

        let now = processor.now_playing().unwrap();
        assert!(now.video.flag.is_none());
    }

    #[test]
    fn test_play_random_with_all_flagged() {
        let mut processor = processor();
        for id in [
            "amazing_cats_video_id",
            "another_cat_video_id",
            "funny_dogs_video_id",
            "life_at_google_video_id",
            "nothing_video_id",
        ] {
            processor.flag(id, "");
        }
        let reply = processor.play_random();
        assert_eq!(
            reply.outcome,
            Outcome::Failure(CommandError::NoVideosAvailable)
        );
        assert_eq!(reply.messages, vec!["No videos available"]);
    }

    #[test]
    fn test_play_random_stops_previous_video() {
        let mut processor = CommandProcessor::with_selector(
            sample_catalog(),
            Box::new(FixedSelector(2)),
        );
        processor.play("amazing_cats_video_id");
        let reply = processor.play_random();
        assert_eq!(reply.messages[0], "Stopping video: Amazing Cats");
    }

    #[test]
    fn test_create_playlist() {
        let mut processor = processor();
        let reply = processor.create_playlist("my_playlist");
        assert_eq!(
            reply.messages,
            vec!["Successfully created new playlist: my_playlist"]
        );

        let reply = processor.create_playlist("MY_playlist");
        assert_eq!(
            reply.messages,
            vec!["Cannot create playlist: A playlist with the same name already exists"]
        );
    }

    #[test]
    fn test_create_delete_create_same_name() {
        let mut processor = processor();
        assert!(processor.create_playlist("my_playlist").is_success());
        assert!(processor.delete_playlist("my_playlist").is_success());
        assert!(processor.create_playlist("my_playlist").is_success());
    }

    #[test]
    fn test_add_to_playlist() {
        let mut processor = processor();
        processor.create_playlist("my_playlist");
        let reply = processor.add_to_playlist("my_playlist", "amazing_cats_video_id");
        assert_eq!(
            reply.messages,
            vec!["Added video to my_playlist: Amazing Cats"]
        );
    }

    #[test]
    fn test_add_to_playlist_rejects_second_add() {
        let mut processor = processor();
        processor.create_playlist("my_playlist");
        assert!(
            processor
                .add_to_playlist("my_playlist", "amazing_cats_video_id")
                .is_success()
        );
        let reply = processor.add_to_playlist("my_playlist", "amazing_cats_video_id");
        assert_eq!(reply.outcome, Outcome::Failure(CommandError::DuplicateVideo));
        assert_eq!(
            reply.messages,
            vec!["Cannot add video to playlist my_playlist: Video already added"]
        );
    }

    #[test]
    fn test_add_to_playlist_validation_order() {
        let mut processor = processor();
        // Playlist existence is checked before the video.
        let reply = processor.add_to_playlist("nope", "does_not_exist");
        assert_eq!(
            reply.outcome,
            Outcome::Failure(CommandError::PlaylistNotFound)
        );

        processor.create_playlist("my_playlist");
        let reply = processor.add_to_playlist("my_playlist", "does_not_exist");
        assert_eq!(reply.outcome, Outcome::Failure(CommandError::VideoNotFound));

        processor.flag("amazing_cats_video_id", "");
        let reply = processor.add_to_playlist("my_playlist", "amazing_cats_video_id");
        assert_eq!(
            reply.messages,
            vec![
                "Cannot add video to playlist my_playlist: Video is currently flagged (reason: Not supplied)"
            ]
        );
    }

    #[test]
    fn test_remove_from_playlist() {
        let mut processor = processor();
        processor.create_playlist("my_playlist");
        processor.add_to_playlist("my_playlist", "amazing_cats_video_id");

        let reply = processor.remove_from_playlist("my_playlist", "amazing_cats_video_id");
        assert_eq!(
            reply.messages,
            vec!["Removed video from my_playlist: Amazing Cats"]
        );

        let reply = processor.remove_from_playlist("my_playlist", "amazing_cats_video_id");
        assert_eq!(
            reply.outcome,
            Outcome::Failure(CommandError::VideoNotInPlaylist)
        );
    }

    #[test]
    fn test_remove_from_missing_playlist_has_no_side_effects() {
        let mut processor = processor();
        let reply = processor.remove_from_playlist("My List", "amazing_cats_video_id");
        assert_eq!(
            reply.outcome,
            Outcome::Failure(CommandError::PlaylistNotFound)
        );
        // No playlist was created as a side effect.
        assert_eq!(
            processor.show_all_playlists().messages,
            vec!["No playlists exist yet"]
        );
    }

    #[test]
    fn test_clear_playlist_keeps_playlist() {
        let mut processor = processor();
        processor.create_playlist("my_playlist");
        processor.add_to_playlist("my_playlist", "amazing_cats_video_id");

        let reply = processor.clear_playlist("my_playlist");
        assert_eq!(
            reply.messages,
            vec!["Successfully removed all videos from my_playlist"]
        );

        let Some(ReplyData::PlaylistVideos(videos)) =
            processor.show_playlist("my_playlist").data
        else {
            panic!("expected playlist contents");
        };
        assert!(videos.is_empty());

        // Cleared, not deleted: re-adding works.
        assert!(
            processor
                .add_to_playlist("my_playlist", "amazing_cats_video_id")
                .is_success()
        );
    }

    #[test]
    fn test_show_all_playlists_sorted() {
        let mut processor = processor();
        processor.create_playlist("second");
        processor.create_playlist("First");
        let reply = processor.show_all_playlists();
        assert_eq!(
            reply.data,
            Some(ReplyData::Playlists(vec![
                "First".to_string(),
                "second".to_string()
            ]))
        );
    }

    #[test]
    fn test_show_playlist_keeps_flagged_entries() {
        let mut processor = processor();
        processor.create_playlist("my_playlist");
        processor.add_to_playlist("my_playlist", "amazing_cats_video_id");
        processor.flag("amazing_cats_video_id", "spam");

        let Some(ReplyData::PlaylistVideos(videos)) =
            processor.show_playlist("my_playlist").data
        else {
            panic!("expected playlist contents");
        };
        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].flag.as_deref(), Some("spam"));
    }

    #[test]
    fn test_search_then_select() {
        let mut processor = processor();
        let reply = processor.search("cat");
        assert_eq!(reply.messages[0], "Here are the results for cat:");
        let Some(ReplyData::Matches(results)) = reply.data else {
            panic!("expected ranked results");
        };
        let titles: Vec<&str> = results.iter().map(|v| v.title.as_str()).collect();
        assert_eq!(titles, vec!["Amazing Cats", "Another Cat Video"]);

        let reply = processor.select("2");
        assert_eq!(reply.messages, vec!["Playing video: Another Cat Video"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let mut processor = processor();
        let Some(ReplyData::Matches(results)) = processor.search("CAT").data else {
            panic!("expected ranked results");
        };
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_search_excludes_flagged() {
        let mut processor = processor();
        processor.flag("amazing_cats_video_id", "");
        let Some(ReplyData::Matches(results)) = processor.search("cat").data else {
            panic!("expected ranked results");
        };
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "another_cat_video_id");
    }

    #[test]
    fn test_search_no_results() {
        let mut processor = processor();
        let reply = processor.search("blah");
        assert!(reply.is_success());
        assert_eq!(reply.messages, vec!["No search results for blah"]);

        // A no-match search clears any previous selection targets.
        processor.search("cat");
        processor.search("blah");
        assert_eq!(processor.select("1"), Reply::silent());
    }

    #[test]
    fn test_select_silently_ignores_invalid_input() {
        let mut processor = processor();
        processor.search("cat");
        assert_eq!(processor.select("no"), Reply::silent());
        assert_eq!(processor.select("0"), Reply::silent());
        assert_eq!(processor.select("3"), Reply::silent());
    }

    #[test]
    fn test_select_revalidates_flag_status() {
        let mut processor = processor();
        processor.search("cat");
        processor.flag("another_cat_video_id", "spam");
        let reply = processor.select("2");
        assert_eq!(
            reply.outcome,
            Outcome::Failure(CommandError::VideoFlagged("spam".to_string()))
        );
    }

    #[test]
    fn test_search_by_tag() {
        let mut processor = processor();
        let Some(ReplyData::Matches(results)) = processor.search_by_tag("#cat").data else {
            panic!("expected ranked results");
        };
        assert_eq!(results.len(), 2);

        // Exact tag match only.
        assert_eq!(
            processor.search_by_tag("cat").messages,
            vec!["No search results for cat"]
        );
        assert_eq!(
            processor.search_by_tag("#squirrel").messages,
            vec!["No search results for #squirrel"]
        );
    }

    #[test]
    fn test_flag() {
        let mut processor = processor();
        let reply = processor.flag("amazing_cats_video_id", "dont_like_cats");
        assert_eq!(
            reply.messages,
            vec!["Successfully flagged video: Amazing Cats (reason: dont_like_cats)"]
        );

        let reply = processor.flag("amazing_cats_video_id", "again");
        assert_eq!(
            reply.messages,
            vec!["Cannot flag video: Video is already flagged"]
        );

        let reply = processor.flag("does_not_exist", "");
        assert_eq!(reply.outcome, Outcome::Failure(CommandError::VideoNotFound));
    }

    #[test]
    fn test_flag_without_reason() {
        let mut processor = processor();
        let reply = processor.flag("amazing_cats_video_id", "   ");
        assert_eq!(
            reply.messages,
            vec!["Successfully flagged video: Amazing Cats (reason: Not supplied)"]
        );
    }

    #[test]
    fn test_flag_active_video_stops_playback() {
        let mut processor = processor();
        processor.play("amazing_cats_video_id");
        let reply = processor.flag("amazing_cats_video_id", "spam");
        assert_eq!(
            reply.messages,
            vec![
                "Stopping video: Amazing Cats",
                "Successfully flagged video: Amazing Cats (reason: spam)",
            ]
        );
        assert!(processor.now_playing().is_none());

        // Scenario: allow then play succeeds again.
        assert!(processor.allow("amazing_cats_video_id").is_success());
        assert_eq!(
            processor.play("amazing_cats_video_id").messages,
            vec!["Playing video: Amazing Cats"]
        );
    }

    #[test]
    fn test_flag_paused_video_stops_playback() {
        let mut processor = processor();
        processor.play("amazing_cats_video_id");
        processor.pause();
        processor.flag("amazing_cats_video_id", "");
        assert!(processor.now_playing().is_none());
    }

    #[test]
    fn test_allow() {
        let mut processor = processor();
        processor.flag("amazing_cats_video_id", "spam");
        let reply = processor.allow("amazing_cats_video_id");
        assert_eq!(
            reply.messages,
            vec!["Successfully removed flag from video: Amazing Cats"]
        );

        let reply = processor.allow("amazing_cats_video_id");
        assert_eq!(reply.outcome, Outcome::Failure(CommandError::NotFlagged));
        assert_eq!(
            reply.messages,
            vec!["Cannot remove flag from video: Video is not flagged"]
        );

        let reply = processor.allow("does_not_exist");
        assert_eq!(
            reply.messages,
            vec!["Cannot remove flag from video: Video does not exist"]
        );
    }

    #[test]
    fn test_show_all_videos_marks_flagged() {
        let mut processor = processor();
        processor.flag("funny_dogs_video_id", "barking");
        let Some(ReplyData::Videos(videos)) = processor.show_all_videos().data else {
            panic!("expected video listing");
        };
        let dogs = videos.iter().find(|v| v.id == "funny_dogs_video_id").unwrap();
        assert_eq!(dogs.flag.as_deref(), Some("barking"));
    }
}
