//! # Core
//!
//! Menu and table state with no terminal I/O. Everything here is a pure
//! function of its inputs and can be tested without a console.
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            │            CORE              │
//!            │  Label · MenuOption · Menu   │
//!            │  Table · Strings · config    │
//!            │  No I/O. No terminal.        │
//!            └──────────────┬───────────────┘
//!                           │
//!                           ▼
//!                    ┌─────────────┐
//!                    │    TUI      │
//!                    │ (crossterm) │
//!                    └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`label`]: deferred display text
//! - [`option`]: a labelled action, or the exit sentinel
//! - [`menu`]: option list, cursor, key handling and rendering
//! - [`table`]: column layout and bordered rendering
//! - [`strings`]: localized fixed text
//! - [`config`]: `~/.climenu/config.toml` loading and resolution

pub mod config;
pub mod label;
pub mod menu;
pub mod option;
pub mod strings;
pub mod table;
