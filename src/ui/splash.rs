use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::theme::{ColorRole, Theme};

// Block-glyph SNK wordmark, 5 rows tall.
const LOGO: [&str; 5] = [
    "███▌ █▌  █▌ █▌ ▐█",
    "█▌   ██▌ █▌ █▌▐█ ",
    "███▌ █▌█▌█▌ ███  ",
    "  █▌ █▌ ██▌ █▌▐█ ",
    "███▌ █▌  █▌ █▌ ▐█",
];

/// Draws the SNK wordmark centered in `area`.
pub fn render_logo(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let lines: Vec<Line<'_>> = LOGO.iter().map(|row| Line::from(*row)).collect();
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(
            Style::new()
                .fg(theme.color(ColorRole::Logo))
                .add_modifier(Modifier::BOLD),
        ),
        area,
    );
}

/// Draws the startup splash: logo plus a continue hint.
pub fn render_splash(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let background = Block::default().style(Style::new().bg(theme.color(ColorRole::Background)));
    frame.render_widget(background, area);

    let [_, logo_row, _, hint_row, _] = Layout::vertical([
        Constraint::Fill(2),
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Fill(3),
    ])
    .areas(area);

    render_logo(frame, logo_row, theme);
    frame.render_widget(
        Paragraph::new(Line::from("press any key"))
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.color(ColorRole::ButtonNumber))),
        hint_row,
    );
}
