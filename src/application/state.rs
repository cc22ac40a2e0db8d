//! Application state management for the terminal sign-up screen.
//!
//! This module contains the screen state that sits between the key handler
//! and the form controller: which element has focus, where the text cursor
//! is, and whether the acknowledgement modal is showing.

use super::config::FormConfig;
use super::controller::{FormController, SubmitOutcome};
use crate::domain::Field;

/// Represents the current mode of the application.
///
/// The mode decides how key presses are interpreted and which overlays are
/// drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    /// Normal mode - typing edits the focused input, Tab moves focus
    Editing,
    /// The success acknowledgement is displayed and blocks other input
    Acknowledge,
    /// Key binding help is displayed
    Help,
}

/// An element of the screen that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input(Field),
    Submit,
    Reset,
}

impl Focus {
    /// Focus ring in screen order.
    pub const RING: [Focus; 5] = [
        Focus::Input(Field::Name),
        Focus::Input(Field::Email),
        Focus::Input(Field::Password),
        Focus::Submit,
        Focus::Reset,
    ];

    fn index(self) -> usize {
        Self::RING.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::RING[(self.index() + 1) % Self::RING.len()]
    }

    pub fn prev(self) -> Self {
        Self::RING[(self.index() + Self::RING.len() - 1) % Self::RING.len()]
    }

    pub fn field(self) -> Option<Field> {
        match self {
            Focus::Input(field) => Some(field),
            _ => None,
        }
    }
}

/// Main application state containing the form controller and UI state.
///
/// # Examples
///
/// ```
/// use signup_tui::application::{App, AppMode, Focus};
/// use signup_tui::domain::Field;
///
/// let app = App::default();
/// assert_eq!(app.focus, Focus::Input(Field::Name));
/// assert_eq!(app.mode, AppMode::Editing);
/// ```
#[derive(Debug)]
pub struct App {
    /// The form state machine driven by this screen
    pub form: FormController,
    /// Current application mode
    pub mode: AppMode,
    /// Element holding keyboard focus
    pub focus: Focus,
    /// Cursor position within the focused input, in characters
    pub cursor_position: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Text of the acknowledgement modal while it is showing
    pub acknowledgement: Option<String>,
    /// Number of acknowledgements shown since start
    pub acknowledgements_shown: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl App {
    pub fn new(config: FormConfig) -> Self {
        Self {
            form: FormController::new(config),
            mode: AppMode::Editing,
            focus: Focus::Input(Field::Name),
            cursor_position: 0,
            status_message: None,
            acknowledgement: None,
            acknowledgements_shown: 0,
        }
    }

    /// Moves focus to the next element, placing the cursor at the end of
    /// the input if it is one.
    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.cursor_position = self.focused_len();
    }

    fn focused_len(&self) -> usize {
        self.focus
            .field()
            .map(|field| self.form.value(field).chars().count())
            .unwrap_or(0)
    }

    /// Inserts a character at the cursor of the focused input.
    ///
    /// Does nothing when a button has focus.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.form.value(field).to_string();
        let at = byte_offset(&value, self.cursor_position);
        value.insert(at, c);
        self.form.set_field(field, value);
        self.cursor_position += 1;
    }

    /// Removes the character before the cursor.
    pub fn delete_backward(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if self.cursor_position == 0 {
            return;
        }
        let mut value = self.form.value(field).to_string();
        let at = byte_offset(&value, self.cursor_position - 1);
        value.remove(at);
        self.form.set_field(field, value);
        self.cursor_position -= 1;
    }

    /// Removes the character under the cursor.
    pub fn delete_forward(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if self.cursor_position >= self.focused_len() {
            return;
        }
        let mut value = self.form.value(field).to_string();
        let at = byte_offset(&value, self.cursor_position);
        value.remove(at);
        self.form.set_field(field, value);
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.focused_len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.focused_len();
    }

    /// Handles Enter on the focused element: inputs and Submit submit,
    /// Reset resets.
    pub fn activate(&mut self) {
        match self.focus {
            Focus::Input(_) | Focus::Submit => self.submit(),
            Focus::Reset => self.reset(),
        }
    }

    /// Submits the form and opens the acknowledgement on success.
    pub fn submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Accepted(_) => {
                self.acknowledgement = Some(self.form.config().acknowledgement.clone());
                self.acknowledgements_shown += 1;
                self.mode = AppMode::Acknowledge;
                self.status_message = None;
            }
            SubmitOutcome::Rejected(errors) => {
                let count = errors.len();
                self.status_message = Some(format!(
                    "{} field{} need{} attention",
                    count,
                    if count == 1 { "" } else { "s" },
                    if count == 1 { "s" } else { "" },
                ));
            }
        }
    }

    /// Clears the form and returns focus to the first input.
    pub fn reset(&mut self) {
        self.form.reset();
        self.set_focus(Focus::Input(Field::Name));
        self.status_message = Some("Form reset".to_string());
    }

    /// Closes the acknowledgement modal and returns to editing.
    pub fn dismiss_acknowledgement(&mut self) {
        self.acknowledgement = None;
        self.mode = AppMode::Editing;
    }

    pub fn toggle_help(&mut self) {
        self.mode = match self.mode {
            AppMode::Help => AppMode::Editing,
            AppMode::Editing => AppMode::Help,
            AppMode::Acknowledge => AppMode::Acknowledge,
        };
    }
}

/// Converts a character index into a byte offset within `s`.
fn byte_offset(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(s.len())
}
