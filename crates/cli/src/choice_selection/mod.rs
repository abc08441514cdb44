//! Inline single-choice prompt.
//!
//! This module provides the keyboard-driven selector used by the `choose`
//! binary: a prompt line listing every option, with a cursor the user moves
//! until they confirm or cancel.
//!
//! # Key Features
//!
//! - **Inline Rendering**: The prompt is drawn in place, below the current
//!   output, and erased once it resolves
//! - **Wrap-around Navigation**: Moving past either end continues from the other
//! - **Direct Keys**: Typing an option's first letter selects it immediately
//! - **Injectable Input**: The run loop reads from any [`ui::EventSource`] and
//!   draws to any [`ui::FrameSink`], so it can be driven by a script
//!
//! # User Interface
//!
//! The interface supports:
//! - Arrow keys or vim-style (h/j/k/l) navigation
//! - Home/End to jump to the first or last option
//! - Enter to confirm the highlighted option
//! - 'q', Escape or Ctrl+C to cancel

pub mod colors;
pub mod input;
pub mod types;
pub mod ui;

// Re-exports for convenience
pub use colors::load_style_config;
pub use input::{classify, KeyAction};
pub use types::{Choice, ChoiceSelector, Resolution, Selection, StyleConfig};
pub use ui::{EventSource, FrameSink, InlineTerminal, TerminalEvents};

/// Separator drawn between option labels
pub const DELIMITER: &str = " / ";

/// Reminder of the navigation keys, drawn under the options
pub const HELP_TEXT: &str = "(Use arrow keys to select, Enter to confirm, Esc to cancel)";
