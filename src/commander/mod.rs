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

//! Command-line input logic and state management.
//!
//! This module implements the `:`-activated command prompt, handling a
//! text input component and dispatching the corresponding application
//! command when a command is submitted.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::actions::commands::AppCommand;

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    pub(crate) fn handle_event(
        &mut self,
        event: Event,
        command_sender: &mut Sender<AppCommand>,
    ) -> bool {
        if self.active {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Esc => {
                        self.active = false;
                        self.input.reset();
                        true
                    }

                    KeyCode::Enter => {
                        let buffer = self.input.value().trim().to_string();
                        if !buffer.is_empty() {
                            self.run_command(&buffer, command_sender);
                            self.input.reset();
                        }
                        true
                    }

                    _ => {
                        // Delegate all other key events to the managed
                        // input component.
                        self.input.handle_event(&event);
                        true
                    }
                },

                _ => false,
            }
        } else {
            match event {
                Event::Key(key_event) => match key_event.code {
                    KeyCode::Char(':') => {
                        self.active = true;
                        true
                    }

                    _ => false,
                },

                _ => false,
            }
        }
    }

    fn run_command(&self, buffer: &str, command_sender: &mut Sender<AppCommand>) {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        let command = match parts.as_slice() {
            ["q"] => Some(AppCommand::ExitApplication),

            ["nv"] => Some(AppCommand::NumberOfVideos),
            ["lv"] => Some(AppCommand::ShowAllVideos),

            ["p", id] => Some(AppCommand::Play(id.to_string())),
            ["pr"] => Some(AppCommand::PlayRandom),
            ["st"] => Some(AppCommand::Stop),
            ["pa"] => Some(AppCommand::Pause),
            ["co"] => Some(AppCommand::Continue),
            ["np"] => Some(AppCommand::ShowPlaying),

            ["cp", name] => Some(AppCommand::CreatePlaylist(name.to_string())),
            ["ap", name, id] => {
                Some(AppCommand::AddToPlaylist(name.to_string(), id.to_string()))
            }
            ["rp", name, id] => Some(AppCommand::RemoveFromPlaylist(
                name.to_string(),
                id.to_string(),
            )),
            ["clp", name] => Some(AppCommand::ClearPlaylist(name.to_string())),
            ["dp", name] => Some(AppCommand::DeletePlaylist(name.to_string())),
            ["lp"] => Some(AppCommand::ShowAllPlaylists),
            ["sp", name] => Some(AppCommand::ShowPlaylist(name.to_string())),

            ["f", term @ ..] if !term.is_empty() => Some(AppCommand::Search(term.join(" "))),
            ["ft", tag] => Some(AppCommand::SearchByTag(tag.to_string())),

            ["fl", id] => Some(AppCommand::Flag(id.to_string(), String::new())),
            ["fl", id, reason @ ..] => {
                Some(AppCommand::Flag(id.to_string(), reason.join(" ")))
            }
            ["al", id] => Some(AppCommand::Allow(id.to_string())),

            // A bare number answers the search prompt.
            [token] if token.chars().all(|c| c.is_ascii_digit()) => {
                Some(AppCommand::SelectSearchResult(token.to_string()))
            }

            [] => None,

            [_cmd, ..] => None, // unknown command (and params)
        };

        if let Some(command) = command {
            let _ = command_sender.send(command);
        }
    }
}
