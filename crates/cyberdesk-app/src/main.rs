//! CYBERDESK desktop entry point.
//!
//! Loads the host config and resume profile, then runs the interactive
//! terminal in raw mode. Enter submits, Up/Down recall history, Tab
//! completes, Ctrl-L clears, Escape or Ctrl-C quits.

mod console;
mod keys;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use console::Console;
use cyberdesk_terminal::Interpreter;
use cyberdesk_types::config::DeskConfig;
use cyberdesk_types::profile::Profile;
use keys::KeyAction;

const DEFAULT_CONFIG: &str = "cyberdesk.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Resolve config from CLI arg, CYBERDESK_CONFIG env var, or the default path.
    let config_path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("CYBERDESK_CONFIG").ok())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from);
    let config = DeskConfig::load(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;
    log::info!("Starting CYBERDESK (config: {})", config_path.display());

    let profile = match Profile::load(&config.profile_path) {
        Ok(profile) => profile,
        Err(e) => {
            log::warn!("Using fallback profile: {e}");
            Profile::fallback()
        },
    };

    let mut interp = Interpreter::new(config);
    let mut screen = Console::new(io::stdout());

    console::install_panic_hook();
    console::init_terminal()?;
    interp.set_profile(profile, &mut screen);
    let result = run_loop(&mut interp, &mut screen);
    let finished = screen.finish();
    console::restore_terminal()?;
    finished?;
    result
}

fn run_loop<W: Write>(interp: &mut Interpreter, console: &mut Console<W>) -> Result<()> {
    loop {
        console.set_prompt(interp.prompt());
        console.redraw_input()?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match keys::map_key(key, console.input_mut()) {
            KeyAction::Quit => break,
            KeyAction::Edited | KeyAction::Ignore => {},
            KeyAction::Event(ev) => interp.handle(ev, console),
        }
    }
    log::info!("Session ended after {} commands", interp.history().len());
    Ok(())
}
