use raylib::prelude::*;
use crate::layout::Layout;
use crate::selector::Direction;
use crate::trigger::Trigger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Trigger(Trigger),
    ToggleForm,
    FocusNextField,
    Type(char),
    Backspace,
}

const DIGIT_KEYS: [KeyboardKey; 9] = [
    KeyboardKey::KEY_ONE,
    KeyboardKey::KEY_TWO,
    KeyboardKey::KEY_THREE,
    KeyboardKey::KEY_FOUR,
    KeyboardKey::KEY_FIVE,
    KeyboardKey::KEY_SIX,
    KeyboardKey::KEY_SEVEN,
    KeyboardKey::KEY_EIGHT,
    KeyboardKey::KEY_NINE,
];

/// 1-based slide ordinal for a digit key.
pub fn digit_ordinal(key: KeyboardKey) -> Option<i64> {
    DIGIT_KEYS
        .iter()
        .position(|&k| k == key)
        .map(|i| i as i64 + 1)
}

/// Collects this frame's input. While the form is open, keystrokes edit it instead of navigating.
pub fn poll(rl: &mut RaylibHandle, layout: &Layout, form_open: bool) -> Vec<Command> {
    let mut commands = Vec::new();

    if rl.is_key_pressed(KeyboardKey::KEY_F2) {
        commands.push(Command::ToggleForm);
    }

    if form_open {
        while let Some(c) = rl.get_char_pressed() {
            commands.push(Command::Type(c));
        }
        if rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE) {
            commands.push(Command::Backspace);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
            commands.push(Command::FocusNextField);
        }
        if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
            commands.push(Command::Trigger(Trigger::Submit));
        }
        return commands;
    }

    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        commands.push(Command::Trigger(Trigger::Step(Direction::Previous)));
    }
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        commands.push(Command::Trigger(Trigger::Step(Direction::Next)));
    }
    for key in DIGIT_KEYS {
        if rl.is_key_pressed(key) {
            if let Some(ordinal) = digit_ordinal(key) {
                commands.push(Command::Trigger(Trigger::Jump(ordinal)));
            }
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        let point = rl.get_mouse_position();
        if let Some(direction) = layout.control_hit(point) {
            commands.push(Command::Trigger(Trigger::Step(direction)));
        } else if let Some(ordinal) = layout.indicator_hit(point) {
            commands.push(Command::Trigger(Trigger::Jump(ordinal)));
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_keys_map_to_ordinals() {
        assert_eq!(digit_ordinal(KeyboardKey::KEY_ONE), Some(1));
        assert_eq!(digit_ordinal(KeyboardKey::KEY_FIVE), Some(5));
        assert_eq!(digit_ordinal(KeyboardKey::KEY_NINE), Some(9));
        assert_eq!(digit_ordinal(KeyboardKey::KEY_ZERO), None);
        assert_eq!(digit_ordinal(KeyboardKey::KEY_A), None);
    }
}
