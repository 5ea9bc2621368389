// Event Handling
// Application event types and handler infrastructure

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// Application events that can be handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Quit the application
    Quit,

    /// Activate the tab to the left (wraps)
    SelectPrevious,

    /// Activate the tab to the right (wraps)
    SelectNext,

    /// Activate the tab at a position
    SelectIndex(usize),

    /// Step the panel switcher; the bar follows its change
    SwipePanel { forward: bool },

    /// Left click at (column, row)
    Click { column: u16, row: u16 },

    /// Terminal resized
    Resize(u16, u16),

    ToggleCentered,
    ToggleRight,
    ToggleGrow,
    ToggleFixed,
    ToggleArrows,
    ToggleHideSlider,
    ToggleIcons,

    /// Show or hide the sidebar, shifting the widget's host insets
    ToggleSidebar,

    /// Append a tab and its panel
    AddTab,

    /// Remove the last tab and its panel
    RemoveTab,

    /// No operation
    None,
}

/// Event handler that converts terminal events to application events
pub struct EventHandler;

impl EventHandler {
    /// Convert a crossterm event to an application event
    pub fn handle(event: Event) -> AppEvent {
        match event {
            Event::Key(key) => Self::handle_key(key),
            Event::Mouse(mouse) => Self::handle_mouse(mouse),
            Event::Resize(width, height) => AppEvent::Resize(width, height),
            _ => AppEvent::None,
        }
    }

    /// Handle keyboard events
    fn handle_key(key: KeyEvent) -> AppEvent {
        // Only handle key press events
        if key.kind != KeyEventKind::Press {
            return AppEvent::None;
        }

        match key.code {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => AppEvent::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,

            // Navigation
            KeyCode::Left | KeyCode::Char('h') => AppEvent::SelectPrevious,
            KeyCode::Right | KeyCode::Char('l') => AppEvent::SelectNext,
            KeyCode::BackTab => AppEvent::SelectPrevious,
            KeyCode::Tab => AppEvent::SelectNext,
            KeyCode::Char(digit @ '1'..='9') => AppEvent::SelectIndex(digit as usize - '1' as usize),
            KeyCode::PageUp => AppEvent::SwipePanel { forward: false },
            KeyCode::PageDown => AppEvent::SwipePanel { forward: true },

            // Layout toggles
            KeyCode::Char('c') => AppEvent::ToggleCentered,
            KeyCode::Char('r') => AppEvent::ToggleRight,
            KeyCode::Char('g') => AppEvent::ToggleGrow,
            KeyCode::Char('f') => AppEvent::ToggleFixed,
            KeyCode::Char('a') => AppEvent::ToggleArrows,
            KeyCode::Char('H') => AppEvent::ToggleHideSlider,
            KeyCode::Char('i') => AppEvent::ToggleIcons,
            KeyCode::Char('s') => AppEvent::ToggleSidebar,

            // Child set
            KeyCode::Char('+') => AppEvent::AddTab,
            KeyCode::Char('-') => AppEvent::RemoveTab,

            _ => AppEvent::None,
        }
    }

    /// Handle mouse events
    fn handle_mouse(mouse: MouseEvent) -> AppEvent {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => AppEvent::Click {
                column: mouse.column,
                row: mouse.row,
            },
            MouseEventKind::ScrollUp => AppEvent::SelectPrevious,
            MouseEventKind::ScrollDown => AppEvent::SelectNext,
            _ => AppEvent::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(EventHandler::handle(press(KeyCode::Left)), AppEvent::SelectPrevious);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('l'))), AppEvent::SelectNext);
        assert_eq!(EventHandler::handle(press(KeyCode::Char('3'))), AppEvent::SelectIndex(2));
        assert_eq!(EventHandler::handle(press(KeyCode::Char('0'))), AppEvent::None);
        assert_eq!(EventHandler::handle(press(KeyCode::PageDown)), AppEvent::SwipePanel { forward: true });
    }

    #[test]
    fn test_toggles_and_quit() {
        assert_eq!(EventHandler::handle(press(KeyCode::Char('c'))), AppEvent::ToggleCentered);
        assert_eq!(
            EventHandler::handle(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))),
            AppEvent::Quit
        );
        assert_eq!(EventHandler::handle(press(KeyCode::Char('H'))), AppEvent::ToggleHideSlider);
    }

    #[test]
    fn test_mouse_click_and_resize() {
        let click = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 12,
            row: 1,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(EventHandler::handle(click), AppEvent::Click { column: 12, row: 1 });
        assert_eq!(EventHandler::handle(Event::Resize(100, 30)), AppEvent::Resize(100, 30));
    }
}
