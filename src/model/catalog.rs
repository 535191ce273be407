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

//! Video catalog management.
//!
//! This module provides the read-only store of video records loaded once
//! at startup, plus the mutable flag registry keyed by video id. A flag
//! entry marks a video unplayable and unaddable until it is removed.

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::model::Video;

const BUILTIN_CATALOG: &str = include_str!("../../data/videos.toml");

#[derive(Deserialize)]
struct CatalogFile {
    videos: Vec<Video>,
}

pub(crate) struct Catalog {
    videos: HashMap<String, Video>,
    /// Flag reasons keyed by video id. Reasons are stored trimmed and may
    /// be empty; presence alone marks the video as flagged.
    flags: HashMap<String, String>,
}

impl Catalog {
    /// Loads a catalog from a TOML file with a `[[videos]]` array.
    pub(crate) fn load(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog file {path}"))?;
        Self::from_toml(&raw).with_context(|| format!("Failed to parse catalog file {path}"))
    }

    /// The sample catalog embedded in the binary.
    pub(crate) fn builtin() -> Self {
        Self::from_toml(BUILTIN_CATALOG).expect("embedded catalog must parse")
    }

    fn from_toml(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::from_videos(file.videos)
    }

    /// Builds a catalog from records, rejecting duplicate ids.
    pub(crate) fn from_videos(videos: Vec<Video>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(videos.len());
        for video in videos {
            if let Some(previous) = by_id.insert(video.id.clone(), video) {
                bail!("Duplicate video id in catalog: {}", previous.id);
            }
        }
        Ok(Self {
            videos: by_id,
            flags: HashMap::new(),
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.videos.len()
    }

    /// All video records, in no particular order. Consumers sort by title
    /// for display.
    pub(crate) fn all_videos(&self) -> Vec<&Video> {
        self.videos.values().collect()
    }

    pub(crate) fn video(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    /// Records a flag for the given id. The reason is stored trimmed;
    /// flagging an unknown id is the caller's validation to prevent.
    pub(crate) fn flag(&mut self, id: &str, reason: &str) {
        self.flags.insert(id.to_string(), reason.trim().to_string());
    }

    pub(crate) fn unflag(&mut self, id: &str) {
        self.flags.remove(id);
    }

    pub(crate) fn is_flagged(&self, id: &str) -> bool {
        self.flags.contains_key(id)
    }

    pub(crate) fn flag_reason(&self, id: &str) -> Option<&str> {
        self.flags.get(id).map(String::as_str)
    }
}
