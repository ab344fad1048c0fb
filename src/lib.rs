//! Keyboard-driven selection menus and box-drawn text tables for the terminal.
//!
//! ```rust,ignore
//! use climenu::{Menu, MenuOption, Table};
//!
//! let mut menu = Menu::new("Main");
//! menu.add_option(MenuOption::new("Say hi", || println!("hi")));
//! menu.run()?;
//!
//! let mut table = Table::with_title("Scores");
//! table.add_columns(["Player", "Points"]).append(["ann", "12"]);
//! println!("{table}");
//! ```

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use crate::core::label::Label;
pub use crate::core::menu::{Menu, MenuCommand, MenuKey, MenuLine, MenuStyle};
pub use crate::core::option::{ActionError, MenuOption};
pub use crate::core::strings::Strings;
pub use crate::core::table::{Borders, Column, Table};
pub use crate::tui::{Console, CrosstermConsole, CursorGuard, MenuError};
