use crate::ui::app::App;
use crate::ui::gesture::key_intent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Action to take after processing an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// No further action needed (handled internally).
    None,
    /// Start fetching the digest again.
    Reload,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    // Navigation keys first; a consumed key never reaches the app-level keys.
    let normalized = key_intent(&key);
    if let Some(intent) = normalized.intent {
        app.navigate(intent);
    }
    if normalized.suppress_default || key.kind == KeyEventKind::Release {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return InputAction::None;
    }

    match key.code {
        KeyCode::Char('r') if app.request_load() => InputAction::Reload,
        KeyCode::Enter | KeyCode::Char('o') => {
            app.open_current();
            InputAction::None
        }
        _ => InputAction::None,
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.pointer_pressed(mouse.row),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_released(mouse.column, mouse.row),
        MouseEventKind::ScrollDown => app.wheel(1.0),
        MouseEventKind::ScrollUp => app.wheel(-1.0),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
