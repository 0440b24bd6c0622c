use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;

use crate::board::Cell;
use crate::config::{
    BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_SNAKE_BODY, GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT,
    GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP, GLYPH_SNAKE_TAIL, Theme,
};
use crate::game::GameState;
use crate::input::Direction;
use crate::snake::Position;
use crate::ui::Screen;
use crate::ui::hud::{HudInfo, render_hud};
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Renders the full frame from immutable session state.
pub fn render(frame: &mut Frame<'_>, state: &GameState, screen: Screen, hud_info: HudInfo<'_>) {
    let area = frame.area();
    let play_area = render_hud(frame, area, state, hud_info);

    let theme = hud_info.theme;
    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_board(frame, inner, state, theme);

    match screen {
        Screen::Start => render_start_menu(frame, play_area, theme, hud_info.high_score),
        Screen::Paused => render_pause_menu(frame, play_area, theme),
        Screen::GameOver => render_game_over_menu(
            frame,
            play_area,
            theme,
            state.score(),
            hud_info.high_score,
            state.death_cause(),
        ),
        Screen::Playing => {}
    }
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, state: &GameState, theme: &Theme) {
    let bounds = state.board().size();
    let head = state.head_position();
    let tail = state.tail_position();

    let buffer = frame.buffer_mut();
    for row in 0..i32::from(bounds.rows) {
        for col in 0..i32::from(bounds.cols) {
            let position = Position::new(row, col);
            let Some((x, y)) = logical_to_terminal(inner, position) else {
                continue;
            };

            match state.board().cell(position) {
                Some(Cell::Food) => {
                    buffer.set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
                }
                Some(Cell::Snake) if position == head => {
                    buffer.set_string(
                        x,
                        y,
                        head_glyph(state.direction()),
                        Style::new()
                            .fg(theme.snake_head)
                            .add_modifier(Modifier::BOLD),
                    );
                }
                Some(Cell::Snake) if position == tail => {
                    buffer.set_string(x, y, GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail));
                }
                Some(Cell::Snake) => {
                    buffer.set_string(x, y, GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body));
                }
                Some(Cell::Empty) | None => {}
            }
        }
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

/// Maps a board position to a terminal cell inside `inner`, or `None`
/// when it falls outside the visible area.
fn logical_to_terminal(inner: Rect, position: Position) -> Option<(u16, u16)> {
    let col = u16::try_from(position.col).ok()?;
    let row = u16::try_from(position.row).ok()?;

    let x = inner.x.saturating_add(col);
    let y = inner.y.saturating_add(row);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
