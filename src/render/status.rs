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

//! Render the playback status line.

use ratatui::{Frame, layout::Rect, style::Style, widgets::Paragraph};

use crate::{App, util::format};

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = match &app.now_playing {
        Some(now) => format::format_now_playing(now),
        None => "No video is currently playing".to_string(),
    };

    f.render_widget(
        Paragraph::new(text).style(
            Style::default()
                .fg(app.theme.status_fg)
                .bg(app.theme.status_bg),
        ),
        area,
    );
}
