use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::game::GameSession;
use crate::renderer::stage_tag;
use crate::theme::{ColorRole, Theme};

/// Supplemental values displayed alongside session state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo {
    /// High score for the session's level, as loaded at session start.
    pub high_score: u32,
}

/// Draws the score in the top-right corner inside the wall, plus the
/// escalation tag when the board has started escalating.
pub fn render_score_label(frame: &mut Frame<'_>, board_rect: Rect, session: &GameSession, theme: &Theme) {
    let tag = stage_tag(session.stage());
    let text = if tag.is_empty() {
        session.score.score.to_string()
    } else {
        format!("{} {}", tag, session.score.score)
    };

    let width = text.chars().count() as u16;
    if board_rect.width < width + 2 || board_rect.height < 3 {
        return;
    }

    // One cell in from the wall band, top-right.
    let label_area = Rect {
        x: board_rect.right() - 1 - width,
        y: board_rect.y + 1,
        width,
        height: 1,
    };

    let style = Style::new()
        .fg(theme.color(ColorRole::Background))
        .bg(theme.color(ColorRole::Wall))
        .add_modifier(Modifier::BOLD);
    frame.render_widget(Paragraph::new(Span::styled(text, style)), label_area);
}
