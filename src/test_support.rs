//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use crossterm::style::Color;

use crate::core::menu::MenuKey;
use crate::tui::Console;

/// A console fed from a key script that records everything written.
///
/// Each `clear_screen` starts a new frame. Running out of keys is an
/// `UnexpectedEof` error so a runaway loop fails the test instead of hanging.
#[derive(Default)]
pub struct ScriptedConsole {
    keys: VecDeque<MenuKey>,
    pub frames: Vec<String>,
    pub colors: Vec<Option<Color>>,
    pub cursor_visible: bool,
    pub cursor_changes: usize,
    pub clears: usize,
    pub keys_read: usize,
    idle_polls: usize,
}

impl ScriptedConsole {
    pub fn new(keys: impl IntoIterator<Item = MenuKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            frames: vec![String::new()],
            cursor_visible: true,
            ..Default::default()
        }
    }

    /// Makes the next `n` polls report no pending key.
    pub fn with_idle_polls(mut self, n: usize) -> Self {
        self.idle_polls = n;
        self
    }

    pub fn last_frame(&self) -> &str {
        self.frames.last().map(String::as_str).unwrap_or_default()
    }

    pub fn remaining_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Console for ScriptedConsole {
    fn clear_screen(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.frames.push(String::new());
        Ok(())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        if let Some(frame) = self.frames.last_mut() {
            frame.push_str(text);
        }
        Ok(())
    }

    fn set_foreground_color(&mut self, color: Color) -> io::Result<()> {
        self.colors.push(Some(color));
        Ok(())
    }

    fn reset_color(&mut self) -> io::Result<()> {
        self.colors.push(None);
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> io::Result<()> {
        self.cursor_visible = visible;
        self.cursor_changes += 1;
        Ok(())
    }

    fn read_key(&mut self) -> io::Result<MenuKey> {
        self.keys_read += 1;
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn poll_key(&mut self, _timeout: Duration) -> io::Result<bool> {
        if self.idle_polls > 0 {
            self.idle_polls -= 1;
            return Ok(false);
        }
        Ok(true)
    }
}
