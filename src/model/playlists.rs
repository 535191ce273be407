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

//! Playlist management.
//!
//! This module provides state for the user-defined playlists: named,
//! ordered, duplicate-free sequences of video ids. Names are unique
//! case-insensitively; the original casing is preserved for display.

use crate::model::error::CommandError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Playlist {
    pub(crate) name: String,
    pub(crate) videos: Vec<String>,
}

/// Owns all playlists, in insertion order.
pub(crate) struct PlaylistStore {
    playlists: Vec<Playlist>,
}

impl PlaylistStore {
    pub(crate) fn new() -> Self {
        Self { playlists: vec![] }
    }

    fn position(&self, name: &str) -> Option<usize> {
        let key = name.to_lowercase();
        self.playlists
            .iter()
            .position(|p| p.name.to_lowercase() == key)
    }

    pub(crate) fn create(&mut self, name: &str) -> Result<(), CommandError> {
        if self.position(name).is_some() {
            return Err(CommandError::PlaylistAlreadyExists);
        }
        self.playlists.push(Playlist {
            name: name.to_string(),
            videos: vec![],
        });
        Ok(())
    }

    pub(crate) fn add_video(&mut self, name: &str, video_id: &str) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        let playlist = &mut self.playlists[index];
        if playlist.videos.iter().any(|id| id == video_id) {
            return Err(CommandError::DuplicateVideo);
        }
        playlist.videos.push(video_id.to_string());
        Ok(())
    }

    pub(crate) fn remove_video(&mut self, name: &str, video_id: &str) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        let playlist = &mut self.playlists[index];
        let entry = playlist
            .videos
            .iter()
            .position(|id| id == video_id)
            .ok_or(CommandError::VideoNotInPlaylist)?;
        playlist.videos.remove(entry);
        Ok(())
    }

    /// Empties the playlist; the playlist itself persists.
    pub(crate) fn clear(&mut self, name: &str) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        self.playlists[index].videos.clear();
        Ok(())
    }

    pub(crate) fn delete(&mut self, name: &str) -> Result<(), CommandError> {
        let index = self.position(name).ok_or(CommandError::PlaylistNotFound)?;
        self.playlists.remove(index);
        Ok(())
    }

    pub(crate) fn get(&self, name: &str) -> Option<&Playlist> {
        self.position(name).map(|index| &self.playlists[index])
    }

    /// All playlists sorted by display name. The sort is stable, so equal
    /// names keep insertion order.
    pub(crate) fn list_all(&self) -> Vec<&Playlist> {
        let mut all: Vec<&Playlist> = self.playlists.iter().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut store = PlaylistStore::new();
        store.create("My List").unwrap();

        let playlist = store.get("my list").unwrap();
        assert_eq!(playlist.name, "My List");
        assert!(playlist.videos.is_empty());
    }

    #[test]
    fn test_create_case_insensitive_collision() {
        let mut store = PlaylistStore::new();
        store.create("My List").unwrap();
        assert_eq!(
            store.create("MY LIST"),
            Err(CommandError::PlaylistAlreadyExists)
        );
    }

    #[test]
    fn test_create_delete_create_again() {
        let mut store = PlaylistStore::new();
        store.create("My List").unwrap();
        store.delete("my LIST").unwrap();
        store.create("My List").unwrap();

        // The recreated playlist starts empty, no stale state.
        assert!(store.get("My List").unwrap().videos.is_empty());
    }

    #[test]
    fn test_add_rejects_duplicate() {
        let mut store = PlaylistStore::new();
        store.create("Cats").unwrap();
        store.add_video("Cats", "v1").unwrap();
        assert_eq!(
            store.add_video("cats", "v1"),
            Err(CommandError::DuplicateVideo)
        );
        assert_eq!(store.get("Cats").unwrap().videos, vec!["v1"]);
    }

    #[test]
    fn test_remove_video() {
        let mut store = PlaylistStore::new();
        store.create("Cats").unwrap();
        store.add_video("Cats", "v1").unwrap();
        store.add_video("Cats", "v2").unwrap();

        store.remove_video("Cats", "v1").unwrap();
        assert_eq!(store.get("Cats").unwrap().videos, vec!["v2"]);

        assert_eq!(
            store.remove_video("Cats", "v1"),
            Err(CommandError::VideoNotInPlaylist)
        );
    }

    #[test]
    fn test_operations_on_missing_playlist() {
        let mut store = PlaylistStore::new();
        assert_eq!(
            store.add_video("nope", "v1"),
            Err(CommandError::PlaylistNotFound)
        );
        assert_eq!(
            store.remove_video("nope", "v1"),
            Err(CommandError::PlaylistNotFound)
        );
        assert_eq!(store.clear("nope"), Err(CommandError::PlaylistNotFound));
        assert_eq!(store.delete("nope"), Err(CommandError::PlaylistNotFound));
        assert!(store.get("nope").is_none());
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let mut store = PlaylistStore::new();
        store.create("Cats").unwrap();
        store.add_video("Cats", "v1").unwrap();

        store.clear("Cats").unwrap();
        assert!(store.get("Cats").unwrap().videos.is_empty());
    }

    #[test]
    fn test_list_all_sorted_by_display_name() {
        let mut store = PlaylistStore::new();
        store.create("zebra").unwrap();
        store.create("Alpha").unwrap();
        store.create("mid").unwrap();

        let names: Vec<&str> = store.list_all().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "mid", "zebra"]);
    }
}
