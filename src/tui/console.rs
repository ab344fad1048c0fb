//! # Console Surface
//!
//! The terminal operations the menu loop needs. [`CrosstermConsole`]
//! implements it for a real terminal; tests use a scripted fake.
//!
//! [`CrosstermConsole`]: super::terminal::CrosstermConsole

use std::io;
use std::time::Duration;

use crossterm::style::Color;

use crate::core::menu::MenuKey;

pub trait Console {
    /// Clears the display and homes the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    fn write(&mut self, text: &str) -> io::Result<()>;

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.write(text)?;
        self.write("\n")
    }

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()>;

    fn reset_color(&mut self) -> io::Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()>;

    /// Blocks until one key press arrives. Input is not echoed.
    fn read_key(&mut self) -> io::Result<MenuKey>;

    /// Waits up to `timeout` for a key to become readable.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<bool>;

    /// Whether a key can be read without blocking.
    fn key_available(&mut self) -> io::Result<bool> {
        self.poll_key(Duration::ZERO)
    }

    /// Pushes buffered output to the display.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
