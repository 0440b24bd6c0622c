//! Classic snake on a fixed logical grid.
//!
//! The rules engine lives behind [`game::GameState`] and knows nothing
//! about terminals; the binary drives it from a ratatui draw loop.

pub mod board;
pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
