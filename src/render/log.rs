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

//! Render the output log.
//!
//! Shows the most recent command output, tailed to the visible height.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::App;

pub(crate) fn draw_log(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("vidtui")
        .title_style(Style::default().fg(app.theme.accent_colour))
        .border_style(Style::default().fg(app.theme.border_colour));

    // Tail the log to the lines that fit inside the border.
    let visible = area.height.saturating_sub(2) as usize;
    let start = app.log.len().saturating_sub(visible);
    let lines: Vec<Line> = app.log[start..]
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(app.theme.log_fg))
            .block(block),
        area,
    );
}
