//! Keyboard input state
//!
//! Held flags track the physical key state. Edge flags ("just pressed") are
//! set on key-down and cleared by the game loop after each tick, so every
//! press is seen by exactly one update pass.

/// Keys the battle reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Halves player speed while held
    Slow,
    Confirm,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "ArrowUp" => Some(Key::Up),
            "ArrowDown" => Some(Key::Down),
            "ArrowLeft" => Some(Key::Left),
            "ArrowRight" => Some(Key::Right),
            "x" | "X" | "Shift" => Some(Key::Slow),
            "z" | "Z" | "Enter" => Some(Key::Confirm),
            _ => None,
        }
    }
}

/// Input sampled by a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub slow: bool,
    pub confirm: bool,

    pub up_pressed: bool,
    pub down_pressed: bool,
    pub confirm_pressed: bool,
}

impl InputState {
    /// Apply a key-down (`held = true`) or key-up (`held = false`) event
    pub fn key_event(&mut self, key: Key, held: bool) {
        match key {
            Key::Up => {
                self.up = held;
                self.up_pressed |= held;
            }
            Key::Down => {
                self.down = held;
                self.down_pressed |= held;
            }
            Key::Left => self.left = held,
            Key::Right => self.right = held,
            Key::Slow => self.slow = held,
            Key::Confirm => {
                self.confirm = held;
                self.confirm_pressed |= held;
            }
        }
    }

    /// Drop one-shot presses after they have been consumed
    pub fn clear_edges(&mut self) {
        self.up_pressed = false;
        self.down_pressed = false;
        self.confirm_pressed = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Some(Key::Left));
        assert_eq!(Key::from_key_name("z"), Some(Key::Confirm));
        assert_eq!(Key::from_key_name("x"), Some(Key::Slow));
        assert_eq!(Key::from_key_name("q"), None);
    }

    #[test]
    fn test_edges_survive_release_until_cleared() {
        let mut input = InputState::default();
        input.key_event(Key::Up, true);
        input.key_event(Key::Up, false);
        assert!(!input.up);
        assert!(input.up_pressed);

        input.clear_edges();
        assert!(!input.up_pressed);
    }

    #[test]
    fn test_held_keys_not_cleared() {
        let mut input = InputState::default();
        input.key_event(Key::Right, true);
        input.key_event(Key::Confirm, true);
        input.clear_edges();
        assert!(input.right);
        assert!(input.confirm);
        assert!(!input.confirm_pressed);
    }
}
