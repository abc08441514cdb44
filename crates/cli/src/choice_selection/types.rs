//! Type definitions for the choice prompt and its state.
//!
//! This module defines the options a prompt offers, the outcome of a run,
//! the styling roles and the selector state that the input and UI modules
//! operate on.

use std::fmt::{Display, Formatter};

use choice_prompt_core::error::{Error, Result};
use crossterm::style::{Attribute, Color, ContentStyle};

/// One selectable entry: the label shown to the user and the value handed
/// back to the caller when it is chosen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

impl<T> Display for Choice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label)
    }
}

/// The outcome of running a prompt.
///
/// Cancelling is an answer, not a failure, so it lives here rather than in
/// the error type.
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<T> {
    Chosen(Choice<T>),
    Cancelled,
}

impl<T> Selection<T> {
    #[must_use]
    pub fn chosen(self) -> Option<Choice<T>> {
        match self {
            Selection::Chosen(choice) => Some(choice),
            Selection::Cancelled => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Selection::Cancelled)
    }
}

/// Where the selector is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Resolution {
    #[default]
    Pending,
    Confirmed,
    Cancelled,
}

/// Styles for the four visual roles of the prompt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StyleConfig {
    /// The option under the cursor
    pub highlight: ContentStyle,
    /// Every other option
    pub normal: ContentStyle,
    /// The prompt text before the options
    pub prompt: ContentStyle,
    /// The key reminder line
    pub help: ContentStyle,
}

impl StyleConfig {
    /// A style config that adds no escape codes at all.
    pub fn plain() -> Self {
        Self {
            highlight: ContentStyle::new(),
            normal: ContentStyle::new(),
            prompt: ContentStyle::new(),
            help: ContentStyle::new(),
        }
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        let mut highlight = ContentStyle::new();
        highlight.foreground_color = Some(Color::AnsiValue(2));
        highlight.attributes.set(Attribute::Bold);

        let mut normal = ContentStyle::new();
        normal.foreground_color = Some(Color::AnsiValue(240));

        let mut help = ContentStyle::new();
        help.foreground_color = Some(Color::AnsiValue(240));
        help.attributes.set(Attribute::Dim);

        Self {
            highlight,
            normal,
            prompt: ContentStyle::new(),
            help,
        }
    }
}

/// State of one interactive choice prompt.
///
/// Built with at least one option and a cursor that is always in range.
/// Input is applied with [`ChoiceSelector::handle_event`], frames are
/// produced by [`ChoiceSelector::render`], and [`ChoiceSelector::run`]
/// ties both to the terminal.
#[derive(Clone, Debug)]
pub struct ChoiceSelector<T> {
    pub(crate) prompt: String,
    pub(crate) choices: Vec<Choice<T>>,
    pub(crate) cursor: usize,
    pub(crate) resolution: Resolution,
    pub(crate) style: StyleConfig,
}

impl<T> ChoiceSelector<T> {
    /// Creates a selector with the cursor on the first option and the default style.
    ///
    /// An empty prompt means no prompt text is drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoChoices`] if `choices` is empty.
    pub fn new(prompt: impl Into<String>, choices: Vec<Choice<T>>) -> Result<Self> {
        if choices.is_empty() {
            return Err(Error::NoChoices);
        }

        Ok(Self {
            prompt: prompt.into(),
            choices,
            cursor: 0,
            resolution: Resolution::Pending,
            style: StyleConfig::default(),
        })
    }

    /// Moves the starting cursor, consuming and returning the selector.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfRange`] if `cursor` is not a valid index.
    pub fn with_cursor(mut self, cursor: usize) -> Result<Self> {
        self.set_cursor(cursor)?;
        Ok(self)
    }

    /// # Errors
    ///
    /// Returns [`Error::CursorOutOfRange`] if `cursor` is not a valid index.
    pub fn set_cursor(&mut self, cursor: usize) -> Result<()> {
        if cursor >= self.choices.len() {
            return Err(Error::CursorOutOfRange {
                cursor,
                len: self.choices.len(),
            });
        }

        self.cursor = cursor;
        Ok(())
    }

    #[must_use]
    pub fn with_style(mut self, style: StyleConfig) -> Self {
        self.style = style;
        self
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style;
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[Choice<T>] {
        &self.choices
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn is_confirmed(&self) -> bool {
        self.resolution == Resolution::Confirmed
    }

    pub fn is_cancelled(&self) -> bool {
        self.resolution == Resolution::Cancelled
    }

    pub fn is_resolved(&self) -> bool {
        self.resolution != Resolution::Pending
    }

    /// The confirmed option, or `None` if the prompt was cancelled or is still pending.
    pub fn selected_choice(&self) -> Option<&Choice<T>> {
        if !self.is_confirmed() {
            return None;
        }

        self.choices.get(self.cursor)
    }

    /// The value of the confirmed option, under the same conditions as
    /// [`ChoiceSelector::selected_choice`].
    pub fn selected_value(&self) -> Option<&T> {
        self.selected_choice().map(|choice| &choice.value)
    }

    /// Consumes the selector, yielding the confirmed option.
    ///
    /// Anything other than a confirmed prompt yields [`Selection::Cancelled`].
    pub fn into_selection(mut self) -> Selection<T> {
        if !self.is_confirmed() || self.cursor >= self.choices.len() {
            return Selection::Cancelled;
        }

        Selection::Chosen(self.choices.swap_remove(self.cursor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes() -> Vec<Choice<&'static str>> {
        vec![
            Choice::new("small", "s"),
            Choice::new("medium", "m"),
            Choice::new("large", "l"),
        ]
    }

    #[test]
    fn test_new_starts_pending_at_zero() {
        let selector = ChoiceSelector::new("Select your size:", sizes()).unwrap();
        assert_eq!(selector.cursor(), 0);
        assert_eq!(selector.resolution(), Resolution::Pending);
        assert!(!selector.is_confirmed());
        assert!(!selector.is_cancelled());
        assert_eq!(selector.style(), &StyleConfig::default());
        assert_eq!(selector.prompt(), "Select your size:");
        assert_eq!(selector.choices().len(), 3);
    }

    #[test]
    fn test_new_rejects_empty_choices() {
        let result = ChoiceSelector::<u8>::new("Nothing here", vec![]);
        assert!(matches!(result, Err(Error::NoChoices)));
    }

    #[test]
    fn test_with_cursor_in_range() {
        let selector = ChoiceSelector::new("", sizes())
            .unwrap()
            .with_cursor(2)
            .unwrap();
        assert_eq!(selector.cursor(), 2);
    }

    #[test]
    fn test_set_cursor_out_of_range_keeps_cursor() {
        let mut selector = ChoiceSelector::new("", sizes()).unwrap();
        let result = selector.set_cursor(3);
        assert!(matches!(
            result,
            Err(Error::CursorOutOfRange { cursor: 3, len: 3 })
        ));
        assert_eq!(selector.cursor(), 0);
    }

    #[test]
    fn test_selected_choice_requires_confirmation() {
        let mut selector = ChoiceSelector::new("", sizes()).unwrap().with_cursor(1).unwrap();
        assert!(selector.selected_choice().is_none());
        assert!(selector.selected_value().is_none());

        selector.resolution = Resolution::Confirmed;
        assert_eq!(selector.selected_choice().unwrap().label, "medium");
        assert_eq!(selector.selected_value(), Some(&"m"));

        selector.resolution = Resolution::Cancelled;
        assert!(selector.selected_choice().is_none());
        assert!(selector.selected_value().is_none());
    }

    #[test]
    fn test_into_selection() {
        let mut confirmed = ChoiceSelector::new("", sizes()).unwrap().with_cursor(2).unwrap();
        confirmed.resolution = Resolution::Confirmed;
        assert_eq!(
            confirmed.into_selection(),
            Selection::Chosen(Choice::new("large", "l"))
        );

        let mut cancelled = ChoiceSelector::new("", sizes()).unwrap();
        cancelled.resolution = Resolution::Cancelled;
        let selection = cancelled.into_selection();
        assert!(selection.is_cancelled());
        assert!(selection.chosen().is_none());

        let pending = ChoiceSelector::new("", sizes()).unwrap();
        assert!(pending.into_selection().is_cancelled());
    }

    #[test]
    fn test_choice_display_is_label() {
        let choice = Choice::new("production", "prod");
        assert_eq!(format!("{choice}"), "production");
    }

    #[test]
    fn test_plain_style_differs_from_default() {
        let plain = StyleConfig::plain();
        assert_eq!(plain.highlight, ContentStyle::new());
        assert_ne!(plain, StyleConfig::default());
    }
}
