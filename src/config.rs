use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical board dimensions passed through the game as a named type.
///
/// Rows grow downward and columns grow to the right, matching the
/// `(row, col)` order used by [`crate::snake::Position`].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Returns the total number of cells on the board.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// Number of cells the snake occupies when a session starts.
///
/// Session construction rejects any board whose column count does not
/// exceed this, since the starting snake is placed horizontally.
pub const DEFAULT_SNAKE_LENGTH: u16 = 3;

/// Default board rows when none are given on the command line.
pub const DEFAULT_GRID_ROWS: u16 = 15;

/// Default board columns when none are given on the command line.
pub const DEFAULT_GRID_COLS: u16 = 15;

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 200;

/// Lower bound for the configured tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    /// Color for the snake head glyph.
    pub snake_head: Color,
    /// Color for body segments.
    pub snake_body: Color,
    /// Color for the tail segment.
    pub snake_tail: Color,
    /// Color for the food glyph.
    pub food: Color,
    /// Background color for empty play-area cells.
    pub play_bg: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_value: Color,
    pub hud_label: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    play_bg: Color::Black,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_value: Color::White,
    hud_label: Color::DarkGray,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "Ocean",
    snake_head: Color::White,
    snake_body: Color::Cyan,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_value: Color::Cyan,
    hud_label: Color::DarkGray,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Ember red/orange theme.
pub const THEME_EMBER: Theme = Theme {
    name: "Ember",
    snake_head: Color::White,
    snake_body: Color::LightRed,
    snake_tail: Color::DarkGray,
    food: Color::Yellow,
    play_bg: Color::Black,
    border_fg: Color::Red,
    border_bg: Color::Black,
    hud_value: Color::LightRed,
    hud_label: Color::DarkGray,
    menu_title: Color::LightRed,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_EMBER];

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

/// Head glyph while facing up.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";

/// Head glyph while facing down.
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";

/// Head glyph while facing left.
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";

/// Head glyph while facing right.
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Body segment glyph.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Tail segment glyph.
pub const GLYPH_SNAKE_TAIL: &str = "▓";

/// Food glyph.
pub const GLYPH_FOOD: &str = "●";
