use crossterm::event::{
    Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton as CtButton,
    MouseEvent, MouseEventKind,
};
use gridom::event::convert_event;
use gridom::{InputEvent, Key, Modifiers, MouseButton};

fn key_event(code: KeyCode, kind: KeyEventKind) -> CtEvent {
    let mut event = KeyEvent::new(code, KeyModifiers::NONE);
    event.kind = kind;
    CtEvent::Key(event)
}

fn mouse_event(kind: MouseEventKind, column: u16, row: u16) -> CtEvent {
    CtEvent::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_arrow_keys_translate() {
    for (code, key) in [
        (KeyCode::Up, Key::Up),
        (KeyCode::Down, Key::Down),
        (KeyCode::Left, Key::Left),
        (KeyCode::Right, Key::Right),
    ] {
        assert_eq!(
            convert_event(key_event(code, KeyEventKind::Press)),
            Some(InputEvent::Key {
                key,
                modifiers: Modifiers::new()
            })
        );
    }
}

#[test]
fn test_key_release_and_repeat_ignored() {
    assert_eq!(
        convert_event(key_event(KeyCode::Up, KeyEventKind::Release)),
        None
    );
    assert_eq!(
        convert_event(key_event(KeyCode::Up, KeyEventKind::Repeat)),
        None
    );
}

#[test]
fn test_unmapped_keys_ignored() {
    assert_eq!(
        convert_event(key_event(KeyCode::F(5), KeyEventKind::Press)),
        None
    );
    assert_eq!(
        convert_event(key_event(KeyCode::PageDown, KeyEventKind::Press)),
        None
    );
}

#[test]
fn test_modifiers_carried_through() {
    let mut event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    event.kind = KeyEventKind::Press;

    assert_eq!(
        convert_event(CtEvent::Key(event)),
        Some(InputEvent::Key {
            key: Key::Char('c'),
            modifiers: Modifiers::ctrl()
        })
    );
}

// ============================================================================
// Mouse
// ============================================================================

#[test]
fn test_mouse_press_drag_release_translate() {
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::Down(CtButton::Left), 3, 4)),
        Some(InputEvent::Press {
            x: 3,
            y: 4,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::Drag(CtButton::Left), 5, 6)),
        Some(InputEvent::Drag {
            x: 5,
            y: 6,
            button: MouseButton::Left
        })
    );
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::Up(CtButton::Left), 7, 8)),
        Some(InputEvent::Release {
            x: 7,
            y: 8,
            button: MouseButton::Left
        })
    );
}

#[test]
fn test_scroll_and_plain_motion_ignored() {
    assert_eq!(
        convert_event(mouse_event(MouseEventKind::ScrollUp, 0, 0)),
        None
    );
    assert_eq!(convert_event(mouse_event(MouseEventKind::Moved, 0, 0)), None);
}

// ============================================================================
// Resize
// ============================================================================

#[test]
fn test_resize_translates() {
    assert_eq!(
        convert_event(CtEvent::Resize(80, 24)),
        Some(InputEvent::Resize {
            width: 80,
            height: 24
        })
    );
}
