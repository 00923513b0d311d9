use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::game::{EscalationStage, GameSession, GameState};
use crate::grid::Cell;
use crate::theme::{ColorRole, Theme};
use crate::ui::hud::{render_score_label, HudInfo};
use crate::ui::menu::{render_game_over_menu, render_pause_menu};

/// Presentation knobs fixed at session start.
///
/// `cell_width` is 2 when the big-board setting is on, doubling the
/// rendered size of every cell. Threaded in explicitly so nothing global
/// has to mutate when the user toggles the setting.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    pub cell_width: u16,
}

impl RenderConfig {
    #[must_use]
    pub fn new(big_board: bool) -> Self {
        Self {
            cell_width: if big_board { 2 } else { 1 },
        }
    }
}

/// Renders the full game frame from immutable session state.
pub fn render(
    frame: &mut Frame<'_>,
    session: &GameSession,
    theme: &Theme,
    config: RenderConfig,
    hud: HudInfo,
) {
    let area = frame.area();
    let background = Block::default().style(Style::new().bg(theme.color(ColorRole::Background)));
    frame.render_widget(background, area);

    let board_rect = board_rect(area, session, config);

    render_walls(frame, board_rect, session, theme, config);
    render_food(frame, board_rect, session, theme, config);
    render_snake(frame, board_rect, session, theme, config);
    render_score_label(frame, board_rect, session, theme);

    match session.state {
        GameState::Paused => render_pause_menu(frame, board_rect, theme),
        GameState::GameOver => render_game_over_menu(frame, board_rect, session, theme, &hud),
        _ => {}
    }
}

/// Centers the logical board inside the terminal area.
fn board_rect(area: Rect, session: &GameSession, config: RenderConfig) -> Rect {
    let board = session.grid.board();
    let width = (board.cols as u16).saturating_mul(config.cell_width);
    let height = board.rows as u16;

    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;

    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

fn render_walls(
    frame: &mut Frame<'_>,
    board_rect: Rect,
    session: &GameSession,
    theme: &Theme,
    config: RenderConfig,
) {
    let board = session.grid.board();
    let wall_color = theme.color(ColorRole::Wall);

    // After the spin escalation the walls are no longer collidable; keep
    // a faint outline so the board edge stays legible while wrapping.
    let style = if session.grid.walls_enabled() {
        Style::new().bg(wall_color)
    } else {
        Style::new().fg(wall_color).add_modifier(Modifier::DIM)
    };
    let glyph = if session.grid.walls_enabled() {
        " "
    } else {
        "·"
    };

    for y in 0..board.rows {
        for x in 0..board.cols {
            let cell = Cell { x, y };
            if !session.grid.is_wall(cell) {
                continue;
            }
            fill_cell(frame, board_rect, cell, config, glyph, style);
        }
    }
}

fn render_food(
    frame: &mut Frame<'_>,
    board_rect: Rect,
    session: &GameSession,
    theme: &Theme,
    config: RenderConfig,
) {
    let style = Style::new().bg(theme.color(ColorRole::Food));
    fill_cell(frame, board_rect, session.grid.food(), config, " ", style);
}

fn render_snake(
    frame: &mut Frame<'_>,
    board_rect: Rect,
    session: &GameSession,
    theme: &Theme,
    config: RenderConfig,
) {
    let style = Style::new().bg(theme.color(ColorRole::Snake));
    for segment in session.grid.segments() {
        fill_cell(frame, board_rect, *segment, config, " ", style);
    }
}

/// Paints one logical cell as `cell_width` terminal cells.
fn fill_cell(
    frame: &mut Frame<'_>,
    board_rect: Rect,
    cell: Cell,
    config: RenderConfig,
    glyph: &str,
    style: Style,
) {
    let Some((x, y)) = cell_to_terminal(board_rect, cell, config) else {
        return;
    };

    let buffer = frame.buffer_mut();
    for dx in 0..config.cell_width {
        let col = x.saturating_add(dx);
        if col < board_rect.right() {
            buffer.set_string(col, y, glyph, style);
        }
    }
}

fn cell_to_terminal(board_rect: Rect, cell: Cell, config: RenderConfig) -> Option<(u16, u16)> {
    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(config.cell_width)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = board_rect.x.saturating_add(x_offset);
    let y = board_rect.y.saturating_add(y_offset);
    if x >= board_rect.right() || y >= board_rect.bottom() {
        return None;
    }

    Some((x, y))
}

/// Short HUD tag for the current escalation stage.
#[must_use]
pub fn stage_tag(stage: EscalationStage) -> &'static str {
    match stage {
        EscalationStage::Flat => "",
        EscalationStage::Tilted => "3D",
        EscalationStage::Rotated => "15°",
        EscalationStage::Spinning => "SPIN",
    }
}
