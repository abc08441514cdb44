use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, trace};

use super::types::{Choice, ChoiceSelector, Resolution};

/// What a key press asks the selector to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Cancel,
    Confirm,
    Previous,
    Next,
    First,
    Last,
    /// Select the first option whose label starts with this character
    Direct(char),
}

/// Maps a key event to the action it triggers, or `None` for keys the
/// prompt ignores.
///
/// Release events are ignored so terminals that report both press and
/// release only act once. Character keys held with Ctrl or Alt are not
/// direct keys, apart from Ctrl+C which cancels.
pub fn classify(key_event: &KeyEvent) -> Option<KeyAction> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let chorded = key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(KeyAction::Cancel)
        }
        KeyCode::Char(_) if chorded => None,
        KeyCode::Esc | KeyCode::Char('q') => Some(KeyAction::Cancel),
        KeyCode::Enter => Some(KeyAction::Confirm),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h' | 'k') => Some(KeyAction::Previous),
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l' | 'j') => Some(KeyAction::Next),
        KeyCode::Home => Some(KeyAction::First),
        KeyCode::End => Some(KeyAction::Last),
        KeyCode::Char(c) => Some(KeyAction::Direct(c)),
        _ => None,
    }
}

/// Index of the first option whose label starts with `key`, ignoring case.
pub fn find_direct_match<T>(choices: &[Choice<T>], key: char) -> Option<usize> {
    choices.iter().position(|choice| {
        choice
            .label
            .chars()
            .next()
            .is_some_and(|first| first.to_lowercase().eq(key.to_lowercase()))
    })
}

impl<T> ChoiceSelector<T> {
    /// Applies one terminal event to the selector.
    ///
    /// Anything that is not a key press, and anything arriving after the
    /// prompt has resolved, leaves the state unchanged.
    pub fn handle_event(&mut self, event: &Event) {
        if self.is_resolved() {
            return;
        }

        if let Event::Key(key_event) = event {
            if let Some(action) = classify(key_event) {
                self.apply(action);
            }
        }
    }

    /// Applies a classified key action.
    pub fn apply(&mut self, action: KeyAction) {
        if self.is_resolved() {
            return;
        }

        let count = self.choices.len();
        trace!("Applying {:?} at cursor {}", action, self.cursor);

        match action {
            KeyAction::Cancel => {
                self.resolution = Resolution::Cancelled;
                debug!("Prompt cancelled");
            }
            KeyAction::Confirm => {
                self.resolution = Resolution::Confirmed;
                debug!("Prompt confirmed at index {}", self.cursor);
            }
            KeyAction::Previous => self.cursor = (self.cursor + count - 1) % count,
            KeyAction::Next => self.cursor = (self.cursor + 1) % count,
            KeyAction::First => self.cursor = 0,
            KeyAction::Last => self.cursor = count - 1,
            KeyAction::Direct(key) => {
                if let Some(index) = find_direct_match(&self.choices, key) {
                    self.cursor = index;
                    self.resolution = Resolution::Confirmed;
                    debug!("Direct key {:?} selected index {}", key, index);
                }
            }
        }
    }
}
