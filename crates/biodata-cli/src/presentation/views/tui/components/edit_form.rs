//! Edit Form Component
//!
//! Tracks which input has focus and turns keystrokes into field edits.

use biodata_types::{DraftRecord, Field, ViewName};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::Action;

pub struct EditFormComponent {
    focus: usize,
}

impl EditFormComponent {
    pub fn new() -> Self {
        Self { focus: 0 }
    }

    /// Focus the first input again
    pub fn reset(&mut self) {
        self.focus = 0;
    }

    pub fn focus(&self) -> Field {
        Field::ALL[self.focus]
    }

    fn next(&mut self) {
        self.focus = (self.focus + 1) % Field::ALL.len();
    }

    fn previous(&mut self) {
        self.focus = (self.focus + Field::ALL.len() - 1) % Field::ALL.len();
    }

    pub fn handle_input(&mut self, key: KeyEvent, draft: &DraftRecord) -> Option<Action> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.next();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.previous();
                None
            }
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Esc => Some(Action::Navigate(ViewName::Home)),
            KeyCode::Backspace => {
                let field = self.focus();
                let mut value = draft.get(field).to_string();
                value.pop()?;
                Some(Action::ChangeField(field, value))
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                let field = self.focus();
                let mut value = draft.get(field).to_string();
                value.push(c);
                Some(Action::ChangeField(field, value))
            }
            _ => None,
        }
    }
}

impl Default for EditFormComponent {
    fn default() -> Self {
        Self::new()
    }
}
