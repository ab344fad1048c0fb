//! # Menu Options
//!
//! A `MenuOption` binds a label to a zero-argument action. The exit sentinel
//! is an option without an action: selecting it ends the menu loop.

use std::fmt;

use super::label::Label;

/// Error raised by a fallible action. Passed through the menu loop untouched.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

type ActionFn = Box<dyn FnMut() -> Result<(), ActionError>>;

/// Whether the option runs an action or terminates the menu.
enum OptionKind {
    Action(ActionFn),
    Exit,
}

/// A single selectable menu entry.
pub struct MenuOption {
    name: Label,
    kind: OptionKind,
    wait_for_user: bool,
}

impl MenuOption {
    /// Default for `wait_for_user` when the caller doesn't specify one.
    pub const DEFAULT_WAIT_FOR_USER: bool = true;

    /// Creates an option that waits for a key press after its action runs.
    pub fn new<F>(name: impl Into<Label>, mut action: F) -> Self
    where
        F: FnMut() + 'static,
    {
        Self::fallible(name, move || {
            action();
            Ok(())
        })
    }

    /// Creates an option whose action can fail. The error reaches the caller
    /// of `Menu::start` unchanged.
    pub fn fallible<F>(name: impl Into<Label>, action: F) -> Self
    where
        F: FnMut() -> Result<(), ActionError> + 'static,
    {
        Self {
            name: name.into(),
            kind: OptionKind::Action(Box::new(action)),
            wait_for_user: Self::DEFAULT_WAIT_FOR_USER,
        }
    }

    /// The exit sentinel. Never waits and has no side effects.
    pub fn exit(name: impl Into<Label>) -> Self {
        Self {
            name: name.into(),
            kind: OptionKind::Exit,
            wait_for_user: false,
        }
    }

    pub fn wait_for_user(mut self, wait: bool) -> Self {
        if !self.is_exit() {
            self.wait_for_user = wait;
        }
        self
    }

    pub fn waits_for_user(&self) -> bool {
        self.wait_for_user
    }

    pub fn is_exit(&self) -> bool {
        matches!(self.kind, OptionKind::Exit)
    }

    /// The label as it should be displayed right now.
    pub fn display_label(&self) -> String {
        self.name.text()
    }

    /// Runs the bound action. A no-op for the exit sentinel.
    pub fn run_action(&mut self) -> Result<(), ActionError> {
        match &mut self.kind {
            OptionKind::Action(action) => action(),
            OptionKind::Exit => Ok(()),
        }
    }
}

impl fmt::Debug for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuOption")
            .field("name", &self.name)
            .field("exit", &self.is_exit())
            .field("wait_for_user", &self.wait_for_user)
            .finish()
    }
}
