use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use uno_rs::game::GameConfig;
use uno_rs::script;
use uno_rs::tui::{app::AppState, controller};

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

/// Optional seed from `UNO_SEED`, so scripted runs can be replayed.
fn config_from_env() -> GameConfig {
    match std::env::var("UNO_SEED").ok().and_then(|s| s.trim().parse::<u64>().ok()) {
        Some(seed) => GameConfig::default().with_seed(seed),
        None => GameConfig::default(),
    }
}

fn main() -> io::Result<()> {
    let config = config_from_env();
    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        // Logs go to stderr so they never mix with the board on stdout.
        env_logger::init();
        log::info!("uno-rs {} reading commands from stdin", uno_rs::VERSION);
        let stdin = io::stdin();
        let summary = script::run_script(config, stdin.lock(), io::stdout().lock())
            .map_err(io::Error::other)?;
        log::info!(
            "script done: {} commands, {} rejected, winner {:?}",
            summary.commands,
            summary.errors,
            summary.winner
        );
        return Ok(());
    }
    let mut app = AppState::new(config).map_err(io::Error::other)?;
    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
