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

//! Application command processing.
//!
//! This module implements the command pattern used to serialize all
//! catalog mutations onto a single worker thread. The worker owns the
//! [`CommandProcessor`]; one command completes fully—validation, mutation
//! and reply—before the next is received, so no concurrent mutation of
//! playback state, playlists or the flag registry is possible.

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};

use crate::{actions::events::AppEvent, model::catalog::Catalog, processor::CommandProcessor};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum AppCommand {
    NumberOfVideos,
    ShowAllVideos,

    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,

    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),

    Search(String),
    SearchByTag(String),
    SelectSearchResult(String),

    Flag(String, String),
    Allow(String),

    ExitApplication,
}

/// Spawns the background thread that executes catalog commands.
///
/// The thread takes ownership of the preloaded catalog and enters a
/// blocking loop on the command channel, broadcasting results back to the
/// application as [`AppEvent`]s.
pub(crate) fn spawn_command_worker(
    catalog: Catalog,
    command_rx: Receiver<AppCommand>,
    event_tx: Sender<AppEvent>,
) {
    thread::spawn(move || {
        let mut processor = CommandProcessor::new(catalog);

        while let Ok(command) = command_rx.recv() {
            if let Err(e) = handle_command(&mut processor, command, &event_tx) {
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    });
}

/// Executes a single command and reports its reply plus the refreshed
/// playback status.
fn handle_command(
    processor: &mut CommandProcessor,
    command: AppCommand,
    event_tx: &Sender<AppEvent>,
) -> Result<()> {
    let reply = match command {
        AppCommand::ExitApplication => {
            event_tx.send(AppEvent::ExitApplication)?;
            return Ok(());
        }

        AppCommand::NumberOfVideos => processor.number_of_videos(),
        AppCommand::ShowAllVideos => processor.show_all_videos(),

        AppCommand::Play(id) => processor.play(&id),
        AppCommand::PlayRandom => processor.play_random(),
        AppCommand::Stop => processor.stop(),
        AppCommand::Pause => processor.pause(),
        AppCommand::Continue => processor.continue_video(),
        AppCommand::ShowPlaying => processor.show_playing(),

        AppCommand::CreatePlaylist(name) => processor.create_playlist(&name),
        AppCommand::AddToPlaylist(name, id) => processor.add_to_playlist(&name, &id),
        AppCommand::RemoveFromPlaylist(name, id) => processor.remove_from_playlist(&name, &id),
        AppCommand::ClearPlaylist(name) => processor.clear_playlist(&name),
        AppCommand::DeletePlaylist(name) => processor.delete_playlist(&name),
        AppCommand::ShowAllPlaylists => processor.show_all_playlists(),
        AppCommand::ShowPlaylist(name) => processor.show_playlist(&name),

        AppCommand::Search(term) => processor.search(&term),
        AppCommand::SearchByTag(tag) => processor.search_by_tag(&tag),
        AppCommand::SelectSearchResult(input) => processor.select(&input),

        AppCommand::Flag(id, reason) => processor.flag(&id, &reason),
        AppCommand::Allow(id) => processor.allow(&id),
    };

    event_tx.send(AppEvent::ReplyReady(reply))?;
    event_tx.send(AppEvent::NowPlayingChanged(processor.now_playing()))?;

    Ok(())
}
