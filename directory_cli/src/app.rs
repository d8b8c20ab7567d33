//! Terminal application state
//!
//! Wraps the shared [`LayoutController`] with the one piece of state that
//! only exists in the terminal: the cursor row that `Enter` would select.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::widgets::TableState;

use directory_core::{
    generate_users, DirectoryEvent, DirectorySettings, LayoutController, RecordSet, Transition,
};

/// What a key press asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Move the cursor by this many rows (negative is up)
    MoveCursor(isize),
    CursorFirst,
    CursorLast,
    /// Forward to the layout controller
    Directory(DirectoryEvent),
    Quit,
    None,
}

pub struct TuiApp {
    pub records: RecordSet,
    pub controller: LayoutController,
    pub settings: DirectorySettings,
    pub table_state: TableState,
    pub should_quit: bool,
}

impl TuiApp {
    pub fn new(settings: DirectorySettings) -> Self {
        let settings = settings.validate().unwrap_or_else(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "invalid settings, using defaults");
            DirectorySettings::default()
        });
        let records = generate_users(settings.record_count);
        let cursor = if records.is_empty() { None } else { Some(0) };

        TuiApp {
            records,
            controller: LayoutController::new(),
            settings,
            table_state: TableState::default().with_selected(cursor),
            should_quit: false,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Translate a key press into an action without applying it
    pub fn map_key(&self, key: KeyEvent) -> KeyAction {
        if key.kind != KeyEventKind::Press {
            return KeyAction::None;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveCursor(-1),
            KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveCursor(1),
            KeyCode::PageUp => KeyAction::MoveCursor(-10),
            KeyCode::PageDown => KeyAction::MoveCursor(10),
            KeyCode::Home => KeyAction::CursorFirst,
            KeyCode::End => KeyAction::CursorLast,
            KeyCode::Enter | KeyCode::Char(' ') => {
                let user = self.cursor().and_then(|i| self.records.get(i)).cloned();
                KeyAction::Directory(DirectoryEvent::RowSelected(user))
            }
            KeyCode::Esc | KeyCode::Char('c') => KeyAction::Directory(DirectoryEvent::CloseRequested),
            _ => KeyAction::None,
        }
    }

    /// Handle one key press
    pub fn on_key(&mut self, key: KeyEvent) -> Transition {
        match self.map_key(key) {
            KeyAction::MoveCursor(delta) => {
                self.move_cursor(delta);
                Transition::Ignored
            }
            KeyAction::CursorFirst => {
                self.set_cursor(0);
                Transition::Ignored
            }
            KeyAction::CursorLast => {
                self.set_cursor(self.records.len().saturating_sub(1));
                Transition::Ignored
            }
            KeyAction::Directory(event) => self.controller.handle(event),
            KeyAction::Quit => {
                self.should_quit = true;
                Transition::Ignored
            }
            KeyAction::None => Transition::Ignored,
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let current = self.cursor().unwrap_or(0);
        let target = current.saturating_add_signed(delta);
        self.set_cursor(target);
    }

    fn set_cursor(&mut self, index: usize) {
        if self.records.is_empty() {
            self.table_state.select(None);
            return;
        }
        let last = self.records.len() - 1;
        self.table_state.select(Some(index.min(last)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::LayoutMode;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(count: usize) -> TuiApp {
        TuiApp::new(DirectorySettings::default().with_record_count(count))
    }

    #[test]
    fn test_starts_collapsed_on_first_row() {
        let app = app_with(5);
        assert_eq!(app.cursor(), Some(0));
        assert_eq!(app.controller.mode(), LayoutMode::Single);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app_with(3);
        app.on_key(press(KeyCode::Up));
        assert_eq!(app.cursor(), Some(0));

        app.on_key(press(KeyCode::PageDown));
        assert_eq!(app.cursor(), Some(2));

        app.on_key(press(KeyCode::Home));
        assert_eq!(app.cursor(), Some(0));
        app.on_key(press(KeyCode::End));
        assert_eq!(app.cursor(), Some(2));
    }

    #[test]
    fn test_cursor_does_not_select() {
        let mut app = app_with(5);
        app.on_key(press(KeyCode::Down));
        assert_eq!(app.cursor(), Some(1));
        assert!(app.controller.selection().is_none());
    }

    #[test]
    fn test_enter_selects_row_under_cursor() {
        let mut app = app_with(5);
        app.on_key(press(KeyCode::Down));
        app.on_key(press(KeyCode::Char('j')));

        assert_eq!(app.on_key(press(KeyCode::Enter)), Transition::Opened);
        assert_eq!(app.controller.mode(), LayoutMode::MasterDetail);
        assert_eq!(app.controller.selection().unwrap().id, "U-003");

        assert_eq!(app.on_key(press(KeyCode::Esc)), Transition::Closed);
        assert_eq!(app.controller.mode(), LayoutMode::Single);
        assert!(app.controller.selection().is_none());
    }

    #[test]
    fn test_enter_on_empty_table_is_ignored() {
        let mut app = app_with(0);
        assert_eq!(app.cursor(), None);
        assert_eq!(
            app.map_key(press(KeyCode::Enter)),
            KeyAction::Directory(DirectoryEvent::RowSelected(None))
        );
        assert_eq!(app.on_key(press(KeyCode::Enter)), Transition::Ignored);
        assert_eq!(app.controller.mode(), LayoutMode::Single);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with(5);
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        let mut app = app_with(5);
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_closes_instead_of_quitting() {
        let mut app = app_with(5);
        app.on_key(press(KeyCode::Enter));
        assert_eq!(app.on_key(press(KeyCode::Char('c'))), Transition::Closed);
        assert!(!app.should_quit);
    }
}
