use std::io;
use std::time::{Duration, Instant};

use clap::Parser;

use snk::audio::{AudioService, BellAudio, MusicTrack, NullAudio, SoundCue};
use snk::clock::SimulationClock;
use snk::config::{Board, Level, BOARD_COLS, BOARD_ROWS};
use snk::game::{GameEvent, GameSession, Outcome};
use snk::input::{poll_input, GameInput};
use snk::renderer::{self, RenderConfig};
use snk::store::SettingsStore;
use snk::terminal_runtime::{AppTerminal, TerminalSession};
use snk::theme::{next_theme, theme_by_name, Theme};
use snk::ui::hud::HudInfo;
use snk::ui::menu::render_menu;
use snk::ui::splash::render_splash;

/// How long input polling may block between frames.
const FRAME_POLL: Duration = Duration::from_millis(10);

/// How long the splash screen lingers before advancing on its own.
const SPLASH_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Parser)]
#[command(name = "snk", version, about = "Arcade snake with score-driven board escalation")]
struct Cli {
    /// Start directly at this level (1 = slow, 3 = fast), skipping the
    /// splash screen and menu.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=3))]
    level: Option<u8>,

    /// Theme to use for this run, overriding the saved setting.
    #[arg(long)]
    theme: Option<String>,

    /// Render every cell double width for this run, overriding the saved
    /// setting.
    #[arg(long)]
    big_board: bool,

    /// Disable all sound.
    #[arg(long)]
    mute: bool,

    /// Seed for deterministic food placement.
    #[arg(long)]
    seed: Option<u64>,
}

/// Which screen the app is showing.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Screen {
    Splash,
    Menu,
    Game(Level),
}

/// How a finished game session hands control back.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum GameExit {
    ToMenu,
    Replay(Level),
    Quit,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Load settings before entering raw mode so a corrupt file can be
    // reported legibly. The game itself never fails on store errors.
    let mut store = match SettingsStore::load() {
        Ok(store) => store,
        Err(error) => {
            eprintln!("Warning: could not load settings ({error}); using defaults");
            SettingsStore::with_defaults(snk::store::default_path())
        }
    };

    if let Some(name) = &cli.theme {
        store.settings.theme = name.clone();
    }
    if cli.big_board {
        store.settings.big_board = true;
    }

    TerminalSession::install_panic_hook();
    let mut terminal_session = TerminalSession::enter()?;

    let mut audio: Box<dyn AudioService> = if cli.mute {
        Box::new(NullAudio)
    } else {
        Box::new(BellAudio)
    };

    run(
        terminal_session.terminal_mut(),
        &cli,
        &mut store,
        audio.as_mut(),
    )
}

fn run(
    terminal: &mut AppTerminal,
    cli: &Cli,
    store: &mut SettingsStore,
    audio: &mut dyn AudioService,
) -> io::Result<()> {
    let mut theme = theme_by_name(&store.settings.theme);
    let mut screen = match cli.level {
        Some(1) => Screen::Game(Level::Slow),
        Some(2) => Screen::Game(Level::Medium),
        Some(3) => Screen::Game(Level::Fast),
        _ => Screen::Splash,
    };

    if screen == Screen::Splash {
        audio.play(SoundCue::Startup);
    }
    let splash_deadline = Instant::now() + SPLASH_TIMEOUT;

    loop {
        match screen {
            Screen::Splash => {
                terminal.draw(|frame| render_splash(frame, frame.area(), theme))?;
                if let Some(input) = poll_input(FRAME_POLL)? {
                    screen = match input {
                        GameInput::Quit => return Ok(()),
                        GameInput::SelectLevel(level) => {
                            audio.play(SoundCue::StartGame);
                            Screen::Game(level)
                        }
                        _ => Screen::Menu,
                    };
                } else if Instant::now() >= splash_deadline {
                    screen = Screen::Menu;
                }
            }
            Screen::Menu => {
                terminal.draw(|frame| render_menu(frame, frame.area(), theme, &store.settings))?;
                if let Some(input) = poll_input(FRAME_POLL)? {
                    match input {
                        GameInput::Quit => return Ok(()),
                        GameInput::SelectLevel(level) => {
                            audio.play(SoundCue::StartGame);
                            screen = Screen::Game(level);
                        }
                        GameInput::CycleTheme => {
                            audio.play(SoundCue::Hover);
                            theme = next_theme(theme);
                            store.settings.theme = theme.name.to_owned();
                            let _ = store.save();
                        }
                        GameInput::ToggleBigBoard => {
                            audio.play(SoundCue::Hover);
                            store.settings.big_board = !store.settings.big_board;
                            let _ = store.save();
                        }
                        _ => {}
                    }
                }
            }
            Screen::Game(level) => {
                let seed = cli.seed.unwrap_or_else(rand::random);
                match run_game(terminal, level, seed, store, theme, audio)? {
                    GameExit::ToMenu => screen = Screen::Menu,
                    GameExit::Replay(next_level) => {
                        audio.play(SoundCue::StartGame);
                        screen = Screen::Game(next_level);
                    }
                    GameExit::Quit => return Ok(()),
                }
            }
        }
    }
}

/// Runs one game session from Initializing to teardown.
///
/// The clock is stopped on every exit path before the session is
/// dropped, so no stale tick can ever reach a discarded model.
fn run_game(
    terminal: &mut AppTerminal,
    level: Level,
    seed: u64,
    store: &mut SettingsStore,
    theme: &Theme,
    audio: &mut dyn AudioService,
) -> io::Result<GameExit> {
    let mut session = GameSession::new_with_seed(level, Board::new(BOARD_COLS, BOARD_ROWS), seed);
    let config = RenderConfig::new(store.settings.big_board);
    let hud = HudInfo {
        high_score: store.settings.high_score(level),
    };

    let mut clock = SimulationClock::start(level.tick_interval());
    audio.play_music(MusicTrack::for_level(level));

    loop {
        terminal.draw(|frame| renderer::render(frame, &session, theme, config, hud))?;
        // First frame is on screen; leave Initializing.
        session.begin();

        if let Some(input) = poll_input(FRAME_POLL)? {
            match input {
                GameInput::Direction(direction) => session.queue_direction(direction),
                GameInput::Pause => session.toggle_pause(),
                GameInput::Quit => {
                    clock.stop();
                    audio.stop_everything();
                    return Ok(GameExit::Quit);
                }
                GameInput::Confirm if session.is_over() => {
                    clock.stop();
                    audio.stop_everything();
                    audio.play(SoundCue::Ok);
                    return Ok(GameExit::ToMenu);
                }
                GameInput::SelectLevel(next_level) if session.is_over() => {
                    clock.stop();
                    audio.stop_everything();
                    return Ok(GameExit::Replay(next_level));
                }
                _ => {}
            }
        }

        if clock.try_tick() {
            for event in session.tick() {
                handle_event(event, &session, level, store, audio);
            }
            if session.is_over() {
                clock.stop();
            }
        }
    }
}

fn handle_event(
    event: GameEvent,
    session: &GameSession,
    level: Level,
    store: &mut SettingsStore,
    audio: &mut dyn AudioService,
) {
    match event {
        GameEvent::FoodEaten => {
            audio.play(SoundCue::FoodExplosion);
            // Record immediately, like every score advance; a failed
            // write must never reach the tick path.
            let _ = store.record_high_score(level, session.score.score);
        }
        GameEvent::FoodPlaced => {}
        GameEvent::Escalated(escalation) => {
            use snk::game::Escalation;
            audio.play(match escalation {
                Escalation::TiltTo3d => SoundCue::AnimateTo3d,
                Escalation::Rotate15 => SoundCue::RotateBoard,
                Escalation::Spin => SoundCue::SpinBoard,
            });
        }
        // The terminal tick itself is silent; sounds fire with the
        // game-over bookkeeping one tick later.
        GameEvent::Crashed | GameEvent::Victorious => {}
        GameEvent::GameOver => {
            audio.stop_music();
            match session.outcome() {
                Some(Outcome::Victorious) => audio.play(SoundCue::Victory),
                _ => {
                    audio.play(SoundCue::Crash);
                    audio.play(SoundCue::GameOver);
                }
            }
        }
    }
}
