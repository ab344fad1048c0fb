//! # Menu State
//!
//! The menu's option list, cursor, and the two pure halves of its input
//! loop: [`Menu::handle_key`] (state transitions) and [`Menu::render`]
//! (state → lines). The blocking loop that ties them to a console lives in
//! [`crate::tui`].
//!
//! ```text
//!   render() ──► console ──► read_key() ──► handle_key() ──┐
//!      ▲                                                   │
//!      └──────────── Redraw / Invoke(i) ◄──────────────────┘
//!                           Exit ──► loop ends
//! ```

use std::time::Duration;

use crossterm::style::Color;

use super::label::Label;
use super::option::MenuOption;
use super::strings::Strings;

/// Keys the menu reacts to. Everything else collapses into `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Up,
    Down,
    Home,
    End,
    Enter,
    Other,
}

/// What the run loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Re-render and wait for the next key.
    Redraw,
    /// Invoke the option at this index, then re-render.
    Invoke(usize),
    /// The exit sentinel was chosen.
    Exit,
}

/// Visual treatment of the highlighted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuStyle {
    pub marker: String,
    pub selected_color: Color,
    pub normal_color: Color,
}

impl Default for MenuStyle {
    fn default() -> Self {
        Self {
            marker: "> ".to_string(),
            selected_color: Color::Magenta,
            normal_color: Color::Grey,
        }
    }
}

/// One rendered line. `color: None` means the console's current color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLine {
    pub text: String,
    pub color: Option<Color>,
}

impl MenuLine {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
        }
    }
}

pub struct Menu {
    title: Label,
    header: Option<Label>,
    options: Vec<MenuOption>,
    selected: usize,
    exit_appended: bool,
    strings: Strings,
    style: MenuStyle,
    refresh: Option<Duration>,
}

impl Menu {
    pub fn new(title: impl Into<Label>) -> Self {
        Self {
            title: title.into(),
            header: None,
            options: Vec::new(),
            selected: 0,
            exit_appended: false,
            strings: Strings::default(),
            style: MenuStyle::default(),
            refresh: None,
        }
    }

    pub fn with_options(
        title: impl Into<Label>,
        options: impl IntoIterator<Item = MenuOption>,
    ) -> Self {
        let mut menu = Self::new(title);
        menu.add_options(options);
        menu
    }

    /// Secondary text rendered under the title, re-evaluated every frame.
    pub fn with_header(mut self, header: impl Into<Label>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_strings(mut self, strings: Strings) -> Self {
        self.strings = strings;
        self
    }

    pub fn with_style(mut self, style: MenuStyle) -> Self {
        self.style = style;
        self
    }

    /// Re-render at this interval while waiting for input, so dynamic
    /// labels stay current. Without it the loop blocks on the next key.
    pub fn with_refresh(mut self, interval: Duration) -> Self {
        self.refresh = Some(interval);
        self
    }

    pub fn set_header(&mut self, header: impl Into<Label>) -> &mut Self {
        self.header = Some(header.into());
        self
    }

    /// Appends an option. Once the exit entry exists, new options are
    /// inserted just before it so it always stays last.
    pub fn add_option(&mut self, option: MenuOption) -> &mut Self {
        if self.exit_appended {
            let at = self.options.len() - 1;
            self.options.insert(at, option);
        } else {
            self.options.push(option);
        }
        self
    }

    /// Shorthand for `add_option(MenuOption::new(..).wait_for_user(..))`.
    pub fn add_option_with<F>(
        &mut self,
        name: impl Into<Label>,
        action: F,
        wait_for_user: bool,
    ) -> &mut Self
    where
        F: FnMut() + 'static,
    {
        self.add_option(MenuOption::new(name, action).wait_for_user(wait_for_user))
    }

    pub fn add_options(&mut self, options: impl IntoIterator<Item = MenuOption>) -> &mut Self {
        for option in options {
            self.add_option(option);
        }
        self
    }

    pub fn options(&self) -> &[MenuOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn strings(&self) -> &Strings {
        &self.strings
    }

    pub fn refresh_interval(&self) -> Option<Duration> {
        self.refresh
    }

    pub(crate) fn option_mut(&mut self, index: usize) -> Option<&mut MenuOption> {
        self.options.get_mut(index)
    }

    /// Appends the exit sentinel. Idempotent.
    pub fn append_exit(&mut self) {
        if !self.exit_appended {
            self.options
                .push(MenuOption::exit(self.strings.exit_label.clone()));
            self.exit_appended = true;
        }
    }

    fn last_index(&self) -> usize {
        self.options.len().saturating_sub(1)
    }

    /// Applies one key press. Movement is clamped, never wrapped.
    pub fn handle_key(&mut self, key: MenuKey) -> MenuCommand {
        let before = self.selected;
        let command = match key {
            MenuKey::Up => {
                self.selected = self.selected.saturating_sub(1);
                MenuCommand::Redraw
            }
            MenuKey::Down => {
                self.selected = (self.selected + 1).min(self.last_index());
                MenuCommand::Redraw
            }
            MenuKey::Home => {
                self.selected = 0;
                MenuCommand::Redraw
            }
            MenuKey::End => {
                self.selected = self.last_index();
                MenuCommand::Redraw
            }
            MenuKey::Enter => match self.options.get(self.selected) {
                Some(option) if option.is_exit() => MenuCommand::Exit,
                Some(_) => MenuCommand::Invoke(self.selected),
                None => MenuCommand::Redraw,
            },
            MenuKey::Other => MenuCommand::Redraw,
        };
        if before != self.selected {
            log::debug!("Menu selection {} -> {}", before, self.selected);
        }
        command
    }

    /// Produces the full menu view. Evaluates every label; mutates nothing.
    pub fn render(&self) -> Vec<MenuLine> {
        let mut lines = vec![
            MenuLine::plain(format!("--- {} ---", self.title.text())),
            MenuLine::plain(""),
        ];

        if let Some(header) = &self.header {
            lines.push(MenuLine::plain(""));
            lines.push(MenuLine::plain(header.text()));
            lines.push(MenuLine::plain(""));
        }

        let blank_marker = " ".repeat(self.style.marker.chars().count());
        for (i, option) in self.options.iter().enumerate() {
            let line = if i == self.selected {
                MenuLine::colored(
                    format!("{}{}", self.style.marker, option.display_label()),
                    self.style.selected_color,
                )
            } else {
                MenuLine::colored(
                    format!("{}{}", blank_marker, option.display_label()),
                    self.style.normal_color,
                )
            };
            lines.push(line);
        }

        lines.push(MenuLine::colored(
            self.strings.navigation_hint.clone(),
            self.style.normal_color,
        ));
        lines
    }
}
