//! Keyboard input polling
//!
//! Reads macroquad's per-key pressed state for the four arrow keys and
//! turns it into a per-frame movement intent. The window-close signal is
//! surfaced here too so the loop has a single input seam.

use macroquad::prelude::*;

/// Directional intent for one frame, -1/0/1 per axis
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    pub dx: f32,
    pub dy: f32,
}

impl MoveIntent {
    pub fn is_idle(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

/// Sample the arrow keys. Opposite keys held together resolve to the
/// right/down key. The intent is not normalized, so holding two keys
/// moves diagonally at full speed on both axes.
pub fn poll_intent() -> MoveIntent {
    let mut intent = MoveIntent::default();
    if is_key_down(KeyCode::Left) {
        intent.dx = -1.0;
    }
    if is_key_down(KeyCode::Right) {
        intent.dx = 1.0;
    }
    if is_key_down(KeyCode::Up) {
        intent.dy = -1.0;
    }
    if is_key_down(KeyCode::Down) {
        intent.dy = 1.0;
    }
    intent
}

/// Has the window-close signal arrived this frame?
/// Requires `prevent_quit()` to have been called at startup.
pub fn quit_requested() -> bool {
    is_quit_requested()
}
