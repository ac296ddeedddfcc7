//! What the game needs from the machine it runs on.
//!
//! [`crate::system::System`] is the SDL2/OpenGL implementation; tests drive
//! the game through in-memory ones.

use super::error::BackendError;
use super::math::{Color, Rect};
use super::sprite::Sprite;
use std::path::Path;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Q,
    Other,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvents {
    /// Window close request
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Something sprites can be drawn onto.
pub trait Surface {
    /// Drawable area, origin at the top-left corner.
    fn screen_rect(&self) -> Rect;
    fn clear_screen(&mut self, color: Color);
    fn draw_sprite(&mut self, sprite: &Sprite, at: Rect);
}

pub trait Platform: Surface {
    /// Drains every event queued since the previous call.
    fn poll_events(&mut self) -> Vec<IoEvents>;
    fn load_sprite(&mut self, path: &Path) -> Result<Sprite, BackendError>;
    /// Presents the frame drawn since the last call.
    fn draw_to_screen(&mut self);
}
