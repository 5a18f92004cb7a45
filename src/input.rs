//! Keyboard state shared between event polling and per-frame updates.
//!
//! The event-processing step fills the table once per frame; camera update
//! and the screenshot trigger read it. The table is an explicit value
//! passed by reference, not a process-wide global.

use sdl2::keyboard::Scancode;

/// Size of the key-state table; covers every SDL scancode.
pub const KEY_COUNT: usize = 512;

/// Keys the renderer reacts to, by their SDL scancode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    W,
    A,
    S,
    D,
    Space,
    LShift,
    Up,
    Down,
    Left,
    Right,
    F2,
}

impl Key {
    /// Index of this key in the scancode table.
    pub fn index(self) -> usize {
        let scancode = match self {
            Key::W => Scancode::W,
            Key::A => Scancode::A,
            Key::S => Scancode::S,
            Key::D => Scancode::D,
            Key::Space => Scancode::Space,
            Key::LShift => Scancode::LShift,
            Key::Up => Scancode::Up,
            Key::Down => Scancode::Down,
            Key::Left => Scancode::Left,
            Key::Right => Scancode::Right,
            Key::F2 => Scancode::F2,
        };
        scancode as usize
    }
}

/// Fixed-size boolean key-state table indexed by SDL scancode.
#[derive(Clone)]
pub struct InputState {
    keys: [bool; KEY_COUNT],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            keys: [false; KEY_COUNT],
        }
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key transition. Out-of-range scancodes are ignored.
    pub fn set_scancode(&mut self, scancode: usize, down: bool) {
        if scancode < KEY_COUNT {
            self.keys[scancode] = down;
        }
    }

    /// Whether the key is currently held.
    pub fn is_down(&self, key: Key) -> bool {
        self.keys[key.index()]
    }
}
