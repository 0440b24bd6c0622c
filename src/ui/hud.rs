use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::config::Theme;
use crate::game::GameState;

/// Supplemental values displayed alongside the live session state.
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    pub high_score: u32,
    pub theme: &'a Theme,
}

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, state: &GameState, info: HudInfo<'_>) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let label = Style::default().fg(info.theme.hud_label);
    let value = Style::default().fg(info.theme.hud_value);
    // The running score borrows the food color once it ties the record.
    let score_style = if info.high_score > 0 && state.score() >= info.high_score {
        Style::default().fg(info.theme.food)
    } else {
        value
    };
    let sep = Span::styled(" | ", label);

    let line = Line::from(vec![
        Span::styled("Score: ", label),
        Span::styled(state.score().to_string(), score_style),
        sep.clone(),
        Span::styled("Length: ", label),
        Span::styled(state.snake_len().to_string(), value),
        sep,
        Span::styled("Hi: ", label),
        Span::styled(info.high_score.to_string(), value),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), hud_area);

    play_area
}
