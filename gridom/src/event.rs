//! Input events, translated from crossterm.

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Up,
    Down,
    Left,
    Right,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// High-level input events for a grid surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Key press
    Key { key: Key, modifiers: Modifiers },
    /// Mouse button pressed
    Press {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse moved with a button held
    Drag {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Mouse button released
    Release {
        x: u16,
        y: u16,
        button: MouseButton,
    },
    /// Terminal resized
    Resize { width: u16, height: u16 },
}

fn convert_key(code: crossterm::event::KeyCode) -> Option<Key> {
    use crossterm::event::KeyCode;
    match code {
        KeyCode::Char(c) => Some(Key::Char(c)),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        _ => None,
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

/// Converts a crossterm event into an [`InputEvent`].
///
/// Key release/repeat events and scroll/plain-motion mouse events translate
/// to nothing.
pub fn convert_event(event: crossterm::event::Event) -> Option<InputEvent> {
    use crossterm::event::{Event as CtEvent, KeyEventKind, MouseEventKind};

    match event {
        CtEvent::Key(key_event) => {
            if key_event.kind != KeyEventKind::Press {
                return None;
            }
            let key = convert_key(key_event.code)?;
            Some(InputEvent::Key {
                key,
                modifiers: key_event.modifiers.into(),
            })
        }
        CtEvent::Mouse(mouse_event) => {
            let (x, y) = (mouse_event.column, mouse_event.row);
            match mouse_event.kind {
                MouseEventKind::Down(button) => Some(InputEvent::Press {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Drag(button) => Some(InputEvent::Drag {
                    x,
                    y,
                    button: button.into(),
                }),
                MouseEventKind::Up(button) => Some(InputEvent::Release {
                    x,
                    y,
                    button: button.into(),
                }),
                _ => None,
            }
        }
        CtEvent::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    }
}
