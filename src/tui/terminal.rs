//! # Crossterm Console
//!
//! [`Console`] for a real terminal. Output is queued and flushed explicitly;
//! raw mode is only enabled while a key is being read, so actions that
//! print with `println!` see a normal cooked terminal.

use std::io::{self, Stdout, Write, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, disable_raw_mode, enable_raw_mode};
use crossterm::{execute, queue};

use super::console::Console;
use super::event::{KeyInput, translate};
use crate::core::menu::MenuKey;

pub struct CrosstermConsole<W: Write = Stdout> {
    out: W,
}

impl CrosstermConsole<Stdout> {
    pub fn stdout() -> Self {
        Self { out: stdout() }
    }
}

impl<W: Write> CrosstermConsole<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

/// Raw mode for the lifetime of the guard.
struct RawModeGuard;

impl RawModeGuard {
    fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

impl<W: Write> Console for CrosstermConsole<W> {
    fn clear_screen(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()> {
        queue!(self.out, SetForegroundColor(color))
    }

    fn reset_color(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor)
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        if visible {
            execute!(self.out, Show)
        } else {
            execute!(self.out, Hide)
        }
    }

    fn read_key(&mut self) -> io::Result<MenuKey> {
        self.out.flush()?;
        let _raw = RawModeGuard::new()?;
        loop {
            if let Event::Key(key_event) = event::read()? {
                match translate(&key_event) {
                    KeyInput::Key(key) => return Ok(key),
                    KeyInput::Interrupt => {
                        return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                    }
                    KeyInput::Ignored => {}
                }
            }
        }
    }

    fn poll_key(&mut self, timeout: Duration) -> io::Result<bool> {
        self.out.flush()?;
        let _raw = RawModeGuard::new()?;
        event::poll(timeout)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
