//! # TUI Adapter
//!
//! Drives [`Menu`] and [`Table`] against a [`Console`]. This is the only
//! module that performs terminal I/O; the crossterm-specific parts are in
//! [`terminal`] and [`event`].
//!
//! ## Menu loop
//!
//! `Menu::start` hides the cursor for its whole lifetime through a
//! [`CursorGuard`], appends the exit entry, then alternates between a full
//! redraw and one blocking key read until the exit entry is chosen. Console
//! errors and action errors leave the loop immediately; the guard puts the
//! cursor back on every path, including a panicking action.
//!
//! With `Menu::with_refresh` the loop polls for input instead of blocking
//! and redraws on each idle interval, which keeps dynamic labels current.

mod console;
pub mod event;
pub mod terminal;

pub use console::Console;
pub use terminal::CrosstermConsole;

use log::{debug, info};
use std::fmt;
use std::io;
use std::ops::{Deref, DerefMut};

use crate::core::menu::{Menu, MenuCommand, MenuKey, MenuLine};
use crate::core::option::{ActionError, MenuOption};
use crate::core::table::Table;

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum MenuError {
    /// Reading keys or writing to the console failed.
    Io(io::Error),
    /// An option's action failed. The inner error is the action's own.
    Action(ActionError),
}

impl fmt::Display for MenuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuError::Io(e) => write!(f, "console error: {e}"),
            MenuError::Action(e) => write!(f, "action failed: {e}"),
        }
    }
}

impl std::error::Error for MenuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MenuError::Io(e) => Some(e),
            MenuError::Action(e) => Some(e.as_ref()),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(e: io::Error) -> Self {
        MenuError::Io(e)
    }
}

// ============================================================================
// Cursor Guard
// ============================================================================

/// Hides the cursor until dropped. Derefs to the wrapped console.
pub struct CursorGuard<'a, C: Console + ?Sized> {
    console: &'a mut C,
}

impl<'a, C: Console + ?Sized> CursorGuard<'a, C> {
    pub fn hide(console: &'a mut C) -> io::Result<Self> {
        console.set_cursor_visible(false)?;
        Ok(Self { console })
    }
}

impl<C: Console + ?Sized> Deref for CursorGuard<'_, C> {
    type Target = C;

    fn deref(&self) -> &C {
        &*self.console
    }
}

impl<C: Console + ?Sized> DerefMut for CursorGuard<'_, C> {
    fn deref_mut(&mut self) -> &mut C {
        &mut *self.console
    }
}

impl<C: Console + ?Sized> Drop for CursorGuard<'_, C> {
    fn drop(&mut self) {
        let _ = self.console.reset_color();
        let _ = self.console.set_cursor_visible(true);
        let _ = self.console.flush();
    }
}

// ============================================================================
// Menu Loop
// ============================================================================

impl Menu {
    /// Runs the menu until the exit entry is selected.
    pub fn start(&mut self, console: &mut dyn Console) -> Result<(), MenuError> {
        let mut console = CursorGuard::hide(console)?;
        self.append_exit();
        info!("Menu loop started with {} entries", self.len());

        loop {
            draw_menu(self, &mut *console)?;
            let key = next_key(self, &mut *console)?;

            match self.handle_key(key) {
                MenuCommand::Redraw => {}
                MenuCommand::Invoke(index) => {
                    let prompt = self.strings().press_any_key.clone();
                    if let Some(option) = self.option_mut(index) {
                        debug!("Invoking option {}: {}", index, option.display_label());
                        option.invoke(&mut *console, &prompt)?;
                    }
                }
                MenuCommand::Exit => break,
            }
        }

        info!("Menu loop finished");
        console.clear_screen()?;
        console.flush()?;
        Ok(())
    }

    /// [`Menu::start`] on the process's terminal.
    pub fn run(&mut self) -> Result<(), MenuError> {
        self.start(&mut CrosstermConsole::stdout())
    }
}

fn draw_menu(menu: &Menu, console: &mut dyn Console) -> io::Result<()> {
    console.clear_screen()?;
    for MenuLine { text, color } in menu.render() {
        if let Some(color) = color {
            console.set_foreground_color(color)?;
        }
        console.write_line(&text)?;
    }
    console.reset_color()?;
    console.flush()
}

fn next_key(menu: &Menu, console: &mut dyn Console) -> io::Result<MenuKey> {
    if let Some(interval) = menu.refresh_interval() {
        while !console.poll_key(interval)? {
            draw_menu(menu, console)?;
        }
    }
    console.read_key()
}

// ============================================================================
// Option Invocation
// ============================================================================

impl MenuOption {
    /// Clears the display, runs the action, then shows `prompt` and waits for
    /// one key if the option asks for it. Action errors are returned as is.
    pub fn invoke(&mut self, console: &mut dyn Console, prompt: &str) -> Result<(), MenuError> {
        console.clear_screen()?;
        console.flush()?;

        self.run_action().map_err(MenuError::Action)?;

        if self.waits_for_user() {
            console.write_line(prompt)?;
            console.read_key()?;
        }
        Ok(())
    }
}

// ============================================================================
// Table Output
// ============================================================================

impl Table {
    /// Writes the rendered table (or its empty message) to the console.
    pub fn display(&self, console: &mut dyn Console) -> io::Result<()> {
        for line in self.render().lines() {
            console.write_line(line)?;
        }
        console.flush()
    }
}
