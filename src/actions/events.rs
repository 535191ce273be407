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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the
//! application, bridging user input (keyboard), command worker replies
//! and the UI rendering pipeline.
//!
//! # Architecture
//!
//! 1. **Capture**: Events arrive as [`AppEvent`]s through an mpsc channel.
//! 2. **Process**: [`process_events`] updates the [`App`] state and routes
//!    key input through the commander.
//! 3. **Render**: After each event is processed, the UI is re-drawn.

use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    actions::commands::AppCommand,
    model::{NowPlaying, Reply, ReplyData},
    render::draw,
    util::format,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    /// A command finished; its messages and data go to the output log.
    ReplyReady(Reply),
    /// Refreshed playback status for the status line.
    NowPlayingChanged(Option<NowPlaying>),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI
/// in the terminal.
///
/// This function loops until a quit event is received or the event
/// channel is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        match event {
            AppEvent::Key(key) => process_key_event(app, key)?,

            AppEvent::ReplyReady(reply) => append_reply(&mut app.log, reply),
            AppEvent::NowPlayingChanged(now) => app.now_playing = now,

            AppEvent::Error(message) => app.log.push(format!("Error: {message}")),

            AppEvent::Tick => {}
            AppEvent::ExitApplication => {}
        }

        // Render after every event processed
        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

/// Routes keyboard input, giving the commander first refusal.
fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let handled = app.commander.handle_event(Event::Key(key), &mut app.command_tx);
    if handled {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('q') => app.command_tx.send(AppCommand::ExitApplication)?,
        _ => {}
    }

    Ok(())
}

/// Appends a reply to the output log: first message, then any data lines,
/// then the remaining messages.
fn append_reply(log: &mut Vec<String>, reply: Reply) {
    let mut messages = reply.messages.into_iter();
    if let Some(first) = messages.next() {
        log.push(first);
    }
    if let Some(data) = reply.data {
        append_data(log, data);
    }
    log.extend(messages);
}

fn append_data(log: &mut Vec<String>, data: ReplyData) {
    match data {
        ReplyData::Videos(videos) => {
            for video in &videos {
                log.push(format!("  {}", format::format_video(video)));
            }
        }
        ReplyData::Matches(videos) => {
            for (index, video) in videos.iter().enumerate() {
                log.push(format!("  {}) {}", index + 1, format::format_video(video)));
            }
        }
        ReplyData::Playlists(names) => {
            for name in names {
                log.push(format!("  {name}"));
            }
        }
        ReplyData::PlaylistVideos(videos) => {
            if videos.is_empty() {
                log.push("  No videos here yet".to_string());
            } else {
                for video in &videos {
                    log.push(format!("  {}", format::format_video(video)));
                }
            }
        }
        ReplyData::NowPlaying(now) => log.push(format::format_now_playing(&now)),
    }
}
