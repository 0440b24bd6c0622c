pub mod hud;
pub mod menu;

/// Which shell screen the draw loop is presenting.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Screen {
    Start,
    Playing,
    Paused,
    GameOver,
}
