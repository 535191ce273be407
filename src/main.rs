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

//! # Video Catalog Manager TUI.
//!
//! A terminal-based manager for a read-only video catalog: playback
//! state, user-defined playlists, search and content moderation.
//!
//! This application coordinates a TUI frontend built with `ratatui` and a
//! background processing layer.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle and UI rendering.
//! * A **Background Worker** owns the command processor and executes one
//!   catalog command at a time, which serializes every mutation.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure
//! the terminal state is preserved even in the event of a crash.
//! Communication between the UI and the background worker is handled via
//! `std::sync::mpsc` channels.

mod actions;
mod commander;
mod config;
mod model;
mod processor;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    actions::{
        commands::{AppCommand, spawn_command_worker},
        events::{AppEvent, process_events},
    },
    commander::Commander,
    model::{NowPlaying, catalog::Catalog},
    theme::Theme,
};

/// Application state.
struct App {
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub command_tx: Sender<AppCommand>,

    pub commander: Commander,

    /// Output lines from completed commands, newest last.
    pub log: Vec<String>,
    pub now_playing: Option<NowPlaying>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(command_tx: Sender<AppCommand>) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::default(),
            event_tx,
            event_rx,
            command_tx,
            commander: Commander::new(),
            log: vec![],
            now_playing: None,
        }
    }
}

/// The entry point of the application.
///
/// Loads the catalog, sets up the communication channels, initializes the
/// application state, manages the terminal lifecycle, and returns an
/// error if any part of the execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    let catalog = match &config.catalog_file {
        Some(path) => {
            Catalog::load(path).with_context(|| format!("Failed to load catalog from {path}"))?
        }
        None => Catalog::builtin(),
    };

    let (command_tx, command_rx) = mpsc::channel();

    let mut app = App::new(command_tx);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, catalog, command_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate
/// screen cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`] and ensures the
/// cursor is made visible again. It is "best-effort" and does not return
/// a result, as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event
/// loop.
///
/// This function spawns several long-running background threads:
/// * The command worker that owns the catalog and executes commands.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it hands control to [`process_events`] to
/// manage the UI and state updates.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    catalog: Catalog,
    command_rx: Receiver<AppCommand>,
) -> Result<()> {
    // Spawn the background worker that processes catalog commands, one at
    // a time.
    spawn_command_worker(catalog, command_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                tx_keys.send(AppEvent::Key(key)).ok();
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI
    // application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger so the log opens with the catalog size.
    app.command_tx.send(AppCommand::NumberOfVideos)?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
