use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::menu::MenuKey;

/// What a raw terminal key event means to the menu loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Key(MenuKey),
    /// Ctrl+C. Raw mode swallows SIGINT, so the console reports it instead.
    Interrupt,
    /// Release/repeat events from terminals with keyboard enhancement.
    Ignored,
}

pub fn translate(key_event: &KeyEvent) -> KeyInput {
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    if key_event.kind != KeyEventKind::Press {
        return KeyInput::Ignored;
    }
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => KeyInput::Interrupt,
        (_, KeyCode::Up) => KeyInput::Key(MenuKey::Up),
        (_, KeyCode::Down) => KeyInput::Key(MenuKey::Down),
        (_, KeyCode::Home) => KeyInput::Key(MenuKey::Home),
        (_, KeyCode::End) => KeyInput::Key(MenuKey::End),
        (_, KeyCode::Enter) => KeyInput::Key(MenuKey::Enter),
        _ => KeyInput::Key(MenuKey::Other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (KeyCode::Up, MenuKey::Up),
            (KeyCode::Down, MenuKey::Down),
            (KeyCode::Home, MenuKey::Home),
            (KeyCode::End, MenuKey::End),
            (KeyCode::Enter, MenuKey::Enter),
        ];
        for (code, expected) in cases {
            assert_eq!(
                translate(&press(code, KeyModifiers::NONE)),
                KeyInput::Key(expected)
            );
        }
    }

    #[test]
    fn test_unmapped_keys_are_other() {
        assert_eq!(
            translate(&press(KeyCode::Char('q'), KeyModifiers::NONE)),
            KeyInput::Key(MenuKey::Other)
        );
        assert_eq!(
            translate(&press(KeyCode::Esc, KeyModifiers::NONE)),
            KeyInput::Key(MenuKey::Other)
        );
    }

    #[test]
    fn test_ctrl_c_interrupts() {
        assert_eq!(
            translate(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyInput::Interrupt
        );
    }

    #[test]
    fn test_release_events_are_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(translate(&release), KeyInput::Ignored);
    }
}
