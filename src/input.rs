//! Keyboard state and the sandbox's key bindings.
//!
//! `winit` only reports key transitions, while the sandbox polls "is this key
//! held" once per frame. [`KeyboardState`] bridges the two. The bindings
//! themselves are fixed:
//!
//! | key     | action                               |
//! |---------|--------------------------------------|
//! | `W`/`S` | move the player along +y / -y        |
//! | `A`/`D` | move the player along +x / -x        |
//! | `1`/`2` | grow / shrink the player             |
//! | `H`     | hold to stop shrinking the grid cells |
//! | `R`     | reload the shaders from disk         |
//! | `Esc`   | quit                                 |

use std::collections::HashSet;

use winit::{
    event::{ElementState, WindowEvent},
    keyboard::{KeyCode, PhysicalKey},
};

use crate::data_structures::entity::Entity;

pub const KEY_PLUS_Y: KeyCode = KeyCode::KeyW;
pub const KEY_MINUS_Y: KeyCode = KeyCode::KeyS;
pub const KEY_PLUS_X: KeyCode = KeyCode::KeyA;
pub const KEY_MINUS_X: KeyCode = KeyCode::KeyD;
pub const KEY_GROW: KeyCode = KeyCode::Digit1;
pub const KEY_SHRINK: KeyCode = KeyCode::Digit2;
pub const KEY_FREEZE: KeyCode = KeyCode::KeyH;
pub const KEY_RELOAD: KeyCode = KeyCode::KeyR;
pub const KEY_QUIT: KeyCode = KeyCode::Escape;

/// Set of keys currently held down.
#[derive(Debug, Default)]
pub struct KeyboardState {
    held: HashSet<KeyCode>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.held.remove(&key);
    }

    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    /// Track key transitions from a window event.
    ///
    /// Returns the key and its new state if the event was a keyboard event
    /// for a key `winit` could identify.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<(KeyCode, ElementState)> {
        let WindowEvent::KeyboardInput { event, .. } = event else {
            return None;
        };
        let PhysicalKey::Code(code) = event.physical_key else {
            return None;
        };
        match event.state {
            ElementState::Pressed => self.press(code),
            ElementState::Released => self.release(code),
        }
        Some((code, event.state))
    }

    /// Forget every held key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// Move and resize `player` by `step` for every bound key that is held.
///
/// Opposite keys held together cancel out.
pub fn apply_player_controls(player: &mut Entity, keys: &KeyboardState, step: f32) {
    if keys.is_pressed(KEY_MINUS_X) {
        player.position.x -= step;
    }
    if keys.is_pressed(KEY_PLUS_X) {
        player.position.x += step;
    }
    if keys.is_pressed(KEY_PLUS_Y) {
        player.position.y += step;
    }
    if keys.is_pressed(KEY_MINUS_Y) {
        player.position.y -= step;
    }
    if keys.is_pressed(KEY_GROW) {
        player.scale.x += step;
        player.scale.y += step;
    }
    if keys.is_pressed(KEY_SHRINK) {
        player.scale.x -= step;
        player.scale.y -= step;
    }
}

/// Fires once per key press, no matter how many frames the key stays down.
#[derive(Debug, Default)]
pub struct ReloadLatch {
    press_time: u16,
}

impl ReloadLatch {
    /// Feed the key state of this frame. Returns `true` on the first frame of
    /// a press only.
    pub fn update(&mut self, pressed: bool) -> bool {
        if pressed {
            self.press_time = self.press_time.saturating_add(1);
            self.press_time == 1
        } else {
            self.press_time = 0;
            false
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Running,
    Closing,
}

impl LoopState {
    /// The window asked to be closed.
    pub fn close(&mut self) {
        *self = LoopState::Closing;
    }

    pub fn on_key(&mut self, key: KeyCode, state: ElementState) {
        if key == KEY_QUIT && state == ElementState::Pressed {
            *self = LoopState::Closing;
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}
