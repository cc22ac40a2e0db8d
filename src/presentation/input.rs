use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Returns true when the key should end the session.
    ///
    /// Ctrl+C quits from any mode except the acknowledgement, which is always
    /// dismissed explicitly. Esc only quits while editing; in help it closes
    /// the popup.
    pub fn is_quit_key(app: &App, key: KeyCode, modifiers: KeyModifiers) -> bool {
        let ctrl_c = modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c');
        match app.mode {
            AppMode::Editing => ctrl_c || key == KeyCode::Esc,
            AppMode::Help => ctrl_c,
            AppMode::Acknowledge => false,
        }
    }

    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Editing => Self::handle_editing_mode(app, key, modifiers),
            AppMode::Acknowledge => Self::handle_acknowledge_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    fn handle_editing_mode(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        // submit and reset set their own message
        app.status_message = None;

        if modifiers.contains(KeyModifiers::CONTROL) {
            match key {
                KeyCode::Char('s') => {
                    app.submit();
                    return;
                }
                KeyCode::Char('r') => {
                    app.reset();
                    return;
                }
                _ => {}
            }
        }

        match key {
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_prev();
            }
            KeyCode::Enter => {
                app.activate();
            }
            KeyCode::F(1) => {
                app.toggle_help();
            }
            KeyCode::Backspace => {
                app.delete_backward();
            }
            KeyCode::Delete => {
                app.delete_forward();
            }
            KeyCode::Left => {
                app.move_cursor_left();
            }
            KeyCode::Right => {
                app.move_cursor_right();
            }
            KeyCode::Home => {
                app.move_cursor_home();
            }
            KeyCode::End => {
                app.move_cursor_end();
            }
            KeyCode::Char(' ') if app.focus.field().is_none() => {
                // space presses the focused button
                app.activate();
            }
            KeyCode::Char(c) if !modifiers.contains(KeyModifiers::CONTROL) => {
                app.insert_char(c);
            }
            _ => {}
        }
    }

    fn handle_acknowledge_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_acknowledgement();
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        if matches!(key, KeyCode::Esc | KeyCode::F(1) | KeyCode::Enter) {
            app.toggle_help();
        }
    }
}
