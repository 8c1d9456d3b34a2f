//! Terminal flappy runner (default binary).
//!
//! Owns the real clock: terminal events are polled with a timeout that runs
//! out when the next game activity is due, and the elapsed wall time is then
//! fed to the game in whole milliseconds before the event is handled.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::terminal;

use tui_flappy::clock::FrameClock;
use tui_flappy::config::{Config, USAGE};
use tui_flappy::core::GameState;
use tui_flappy::input::{handle_key_event, is_press, should_quit};
use tui_flappy::term::{TerminalHost, Viewport};
use tui_flappy::types::GameAction;

/// Poll timeout when nothing is scheduled (start and over screens).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = Config::load()?;
    if config.show_help {
        println!("{USAGE}");
        return Ok(());
    }
    init_logging(&config)?;

    let seed = config.seed.unwrap_or_else(clock_seed);
    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut host = TerminalHost::new(Viewport::new(w, h), config.bell);
    host.enter()?;

    let result = run(&mut host, &config, seed);

    // Always try to restore terminal state.
    if let Err(err) = host.exit() {
        log::error!("failed to restore terminal: {err:#}");
    }
    if let Err(err) = &result {
        log::error!("exiting with error: {err:#}");
    }
    result
}

fn run(host: &mut TerminalHost, config: &Config, seed: u64) -> Result<()> {
    let mut game = GameState::new(seed).with_frame_ms(config.frame_ms);
    game.render(host);
    host.take_error()?;

    let mut clock = FrameClock::new(Instant::now());
    loop {
        let wait = game
            .until_next_task_ms()
            .map_or(IDLE_POLL, Duration::from_millis);
        let ready = event::poll(clock.remaining(wait, Instant::now()))?;

        // Time that passed before the event belongs to the current game.
        let elapsed = clock.take(Instant::now());
        if elapsed > 0 {
            game.advance(elapsed, host);
        }

        if ready {
            match event::read()? {
                Event::Key(key) if is_press(&key) => {
                    if should_quit(key) {
                        log::info!("quit after {} game(s)", game.games_played());
                        return Ok(());
                    }
                    match handle_key_event(key) {
                        // Restart is only offered outside of play.
                        Some(GameAction::Start) if game.state().is_running() => {}
                        Some(GameAction::Start) => {
                            game.start();
                            clock.resync(Instant::now());
                            game.render(host);
                        }
                        Some(action) => {
                            game.apply_action(action, host);
                        }
                        None => {}
                    }
                }
                Event::Resize(w, h) => {
                    host.resize(w, h);
                    game.render(host);
                }
                _ => {}
            }
        }

        host.take_error()?;
    }
}

fn init_logging(config: &Config) -> Result<()> {
    // The game owns the terminal, so logs only ever go to a file.
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("open log file {path}"))?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("FLAPPY_LOG", "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .context("install logger")?;
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(1)
}
