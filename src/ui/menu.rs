use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Level;
use crate::game::{GameSession, GameState, Outcome};
use crate::store::Settings;
use crate::theme::{ColorRole, Theme};
use crate::ui::hud::HudInfo;
use crate::ui::splash::render_logo;

/// Draws the level-selection menu: logo on top, one button per level
/// with its high score, and a footer listing the toggle keys.
pub fn render_menu(frame: &mut Frame<'_>, area: Rect, theme: &Theme, settings: &Settings) {
    let background = Block::default().style(Style::new().bg(theme.color(ColorRole::Background)));
    frame.render_widget(background, area);

    let [_, logo_row, _, buttons_row, _, footer_row] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(6),
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .areas(area);

    render_logo(frame, logo_row, theme);

    let button_width = 14u16;
    let gap = 2u16;
    let total = button_width * 3 + gap * 2;
    let left = area.x + area.width.saturating_sub(total) / 2;

    for (idx, level) in Level::ALL.iter().enumerate() {
        let button_area = Rect {
            x: left + (button_width + gap) * idx as u16,
            y: buttons_row.y,
            width: button_width.min(area.width),
            height: buttons_row.height,
        };
        render_level_button(frame, button_area, theme, *level, settings.high_score(*level));
    }

    let footer = vec![
        Line::from(format!(
            "[T] theme: {}   [B] big board: {}",
            theme.name,
            if settings.big_board { "on" } else { "off" }
        )),
        Line::from("[1]/[2]/[3] start   [Q] quit"),
    ];
    frame.render_widget(
        Paragraph::new(footer)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.color(ColorRole::ButtonNumber))),
        footer_row,
    );
}

/// One bordered level button: the big digit plus the level's high score.
fn render_level_button(
    frame: &mut Frame<'_>,
    area: Rect,
    theme: &Theme,
    level: Level,
    high_score: u32,
) {
    let block = Block::bordered().border_style(Style::new().fg(theme.color(ColorRole::ButtonBorder)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            level.digit().to_string(),
            Style::new()
                .fg(theme.color(ColorRole::ButtonNumber))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(level.name()),
        Line::from(format!("hi {high_score}")),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::new().fg(theme.color(ColorRole::ButtonNumber))),
        inner,
    );
}

/// Draws the pause overlay over the board.
pub fn render_pause_menu(frame: &mut Frame<'_>, board_rect: Rect, theme: &Theme) {
    let popup = centered_popup(board_rect, 3);
    frame.render_widget(Clear, popup);

    let lines = vec![Line::from("PAUSED"), Line::from("[P] resume")];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.color(ColorRole::Background))
                    .bg(theme.color(ColorRole::Wall)),
            ),
        popup,
    );
}

/// Draws the game-over overlay: outcome, score, and the OK affordance.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    board_rect: Rect,
    session: &GameSession,
    theme: &Theme,
    hud: &HudInfo,
) {
    debug_assert_eq!(session.state, GameState::GameOver);

    let popup = centered_popup(board_rect, 6);
    frame.render_widget(Clear, popup);

    let score = session.score.score;
    let is_new_high = score > hud.high_score;
    let lines = vec![
        Line::from(match session.outcome() {
            Some(Outcome::Victorious) => "YOU WIN",
            _ => "GAME OVER",
        }),
        Line::from(format!("score {score}")),
        Line::from(if is_new_high {
            "new high score!".to_owned()
        } else {
            format!("hi {}", hud.high_score)
        }),
        Line::from(""),
        Line::from("[Space] OK"),
        Line::from("[1]/[2]/[3] play again"),
    ];

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(
                Style::new()
                    .fg(theme.color(ColorRole::Background))
                    .bg(theme.color(ColorRole::Wall)),
            ),
        popup,
    );
}

fn centered_popup(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let width = area.width.saturating_sub(4).max(area.width.min(10));
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
