use std::io;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser;
use grid_snake::config::{
    DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_TICK_INTERVAL_MS, GridSize,
    MIN_TICK_INTERVAL_MS, THEMES,
};
use grid_snake::game::{GameError, GameState};
use grid_snake::input::{GameInput, poll_input};
use grid_snake::renderer;
use grid_snake::score::{load_high_score, record_if_best};
use grid_snake::terminal_runtime::{TerminalGuard, install_panic_hook};
use grid_snake::ui::Screen;
use grid_snake::ui::hud::HudInfo;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(16);

#[derive(Debug, Parser)]
struct Cli {
    /// Board rows.
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    rows: u16,

    /// Board columns.
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    cols: u16,

    /// Milliseconds between gameplay ticks.
    #[arg(long = "tick-ms", default_value_t = DEFAULT_TICK_INTERVAL_MS)]
    tick_ms: u64,

    /// Seed for reproducible food placement.
    #[arg(long)]
    seed: Option<u64>,
}

/// Everything the draw loop mutates between frames.
struct App {
    state: GameState,
    screen: Screen,
    high_score: u32,
    theme_index: usize,
    size: GridSize,
    seed: Option<u64>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let size = GridSize {
        rows: cli.rows,
        cols: cli.cols,
    };
    // Validate the configuration while stdout is still a normal terminal.
    let state = match new_session(size, cli.seed) {
        Ok(state) => state,
        Err(error) => {
            eprintln!("error: {error}");
            process::exit(2);
        }
    };

    let high_score = load_high_score().unwrap_or_else(|error| {
        eprintln!("warning: could not read the high score file: {error}");
        0
    });

    install_panic_hook();

    run(&cli, state, size, high_score)
}

fn run(cli: &Cli, state: GameState, size: GridSize, high_score: u32) -> io::Result<()> {
    let mut session = TerminalGuard::enter()?;
    let mut app = App {
        state,
        screen: Screen::Start,
        high_score,
        theme_index: 0,
        size,
        seed: cli.seed,
    };

    let tick_interval = Duration::from_millis(cli.tick_ms.max(MIN_TICK_INTERVAL_MS));
    let mut last_tick = Instant::now();

    loop {
        let theme = &THEMES[app.theme_index];
        session.terminal_mut().draw(|frame| {
            renderer::render(
                frame,
                &app.state,
                app.screen,
                HudInfo {
                    high_score: app.high_score,
                    theme,
                },
            )
        })?;

        if let Some(game_input) = poll_input(INPUT_POLL_TIMEOUT)? {
            if matches!(game_input, GameInput::Quit) {
                break;
            }

            handle_input(&mut app, game_input);
        }

        if last_tick.elapsed() >= tick_interval {
            if app.screen == Screen::Playing {
                app.state.tick();

                if app.state.is_game_over() {
                    app.screen = Screen::GameOver;
                    record_final_score(&app);
                }
            }
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, input: GameInput) {
    match (app.screen, input) {
        (Screen::Start, GameInput::Confirm) => app.screen = Screen::Playing,
        (Screen::Start, GameInput::CycleTheme) => {
            app.theme_index = (app.theme_index + 1) % THEMES.len();
        }
        (Screen::Playing, GameInput::Direction(direction)) => {
            app.state.change_direction(direction);
        }
        (Screen::Playing, GameInput::Pause) => app.screen = Screen::Paused,
        (Screen::Paused, GameInput::Pause | GameInput::Confirm) => app.screen = Screen::Playing,
        (Screen::GameOver, GameInput::Confirm) => {
            app.high_score = app.high_score.max(app.state.score());
            // Dimensions were validated at startup; recreation cannot fail.
            if let Ok(state) = new_session(app.size, app.seed) {
                app.state = state;
                app.screen = Screen::Start;
            }
        }
        _ => {}
    }
}

/// Persists a finished run's score. The in-memory record is left alone so
/// the game-over screen can still compare against the old one.
fn record_final_score(app: &App) {
    if app.state.score() > app.high_score {
        if let Err(error) = record_if_best(app.state.score()) {
            eprintln!("Failed to save high score: {error}");
        }
    }
}

fn new_session(size: GridSize, seed: Option<u64>) -> Result<GameState, GameError> {
    match seed {
        Some(seed) => GameState::with_seed(size, seed),
        None => GameState::new(size),
    }
}
