//! Raw-mode console: the interpreter's output sink on a real terminal.

use std::io::{self, Write};
use std::panic;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use cyberdesk_terminal::OutputSink;

/// Put the terminal into raw mode.
pub fn init_terminal() -> Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")
}

/// Leave raw mode.
pub fn restore_terminal() -> Result<()> {
    terminal::disable_raw_mode().context("failed to disable raw mode")
}

/// Leave raw mode before the panic message is printed. Release builds abort
/// on panic, so `main` never gets to call [`restore_terminal`].
pub fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = terminal::disable_raw_mode();
        default_hook(info);
    }));
}

/// Scrollback printed straight to the terminal, with the prompt and input
/// line redrawn on the last row.
pub struct Console<W: Write> {
    out: W,
    prompt: String,
    input: String,
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            prompt: String::new(),
            input: String::new(),
        }
    }

    pub fn set_prompt(&mut self, prompt: &str) {
        prompt.clone_into(&mut self.prompt);
    }

    pub fn input_mut(&mut self) -> &mut String {
        &mut self.input
    }

    /// Repaint the prompt row.
    pub fn redraw_input(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::CurrentLine))?;
        write!(self.out, "\r{} {}", self.prompt, self.input)?;
        self.out.flush()
    }

    /// Move past the prompt row before handing the terminal back.
    pub fn finish(&mut self) -> io::Result<()> {
        write!(self.out, "\r\n")?;
        self.out.flush()
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        // Raw mode does not translate \n, so every row ends in \r\n.
        queue!(self.out, Clear(ClearType::CurrentLine))?;
        write!(self.out, "\r{text}\r\n")?;
        self.out.flush()
    }

    #[cfg(test)]
    fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> OutputSink for Console<W> {
    fn append_line(&mut self, text: &str) {
        if let Err(e) = self.write_line(text) {
            log::warn!("Failed to write output: {e}");
        }
    }

    fn clear(&mut self) {
        if let Err(e) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            log::warn!("Failed to clear screen: {e}");
        }
    }

    fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        if let Err(e) = self.redraw_input() {
            log::warn!("Failed to redraw input: {e}");
        }
    }

    fn open_link(&mut self, url: &str) {
        log::info!("Link requested: {url}");
        self.append_line(&format!("  {url}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(console: &Console<Vec<u8>>) -> String {
        String::from_utf8_lossy(console.output()).into_owned()
    }

    #[test]
    fn lines_end_with_carriage_return() {
        let mut c = Console::new(Vec::new());
        c.append_line("hello");
        c.append_line("world");
        let out = text(&c);
        assert!(out.contains("\rhello\r\n"));
        assert!(out.contains("\rworld\r\n"));
    }

    #[test]
    fn set_input_repaints_prompt_row() {
        let mut c = Console::new(Vec::new());
        c.set_prompt("me $");
        c.set_input("help");
        assert!(text(&c).ends_with("\rme $ help"));
        c.input_mut().push('!');
        c.redraw_input().unwrap();
        assert!(text(&c).ends_with("\rme $ help!"));
    }

    #[test]
    fn panic_hook_chains_to_previous_hook() {
        install_panic_hook();
        let caught = panic::catch_unwind(|| panic!("boom"));
        assert!(caught.is_err());
    }

    #[test]
    fn open_link_prints_the_url() {
        let mut c = Console::new(Vec::new());
        c.open_link("https://example.com");
        assert!(text(&c).contains("  https://example.com\r\n"));
    }
}
