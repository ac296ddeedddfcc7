//! The player's rocket: float position, integer bounding box, and four
//! movement-intent flags driven by the arrow keys.

use backend::math::Rect;
use backend::platform::Surface;
use backend::sprite::Sprite;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SPEED: f32 = 1.5;

/// How a move is tested against the window edges.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryCheck {
    /// The float position after the step must keep the box inside the
    /// window. The box never crosses an edge.
    #[default]
    Projected,
    /// Last frame's integer box must not yet touch the edge. The step itself
    /// is not checked, so the box can end up to one step past the edge.
    LastFrame,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Rocket {
    sprite: Sprite,
    rect: Rect,
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub boundary: BoundaryCheck,

    pub moving_up: bool,
    pub moving_down: bool,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Rocket {
    /// Places the rocket in the middle of `screen`, at rest.
    pub fn new(sprite: Sprite, screen: Rect, speed: f32, boundary: BoundaryCheck) -> Self {
        let mut rect = sprite.rect();
        rect.set_center(screen.center());
        Self {
            sprite,
            rect,
            x: rect.x as f32,
            y: rect.y as f32,
            speed,
            boundary,
            moving_up: false,
            moving_down: false,
            moving_left: false,
            moving_right: false,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    pub fn set_moving(&mut self, direction: Direction, moving: bool) {
        match direction {
            Direction::Up => self.moving_up = moving,
            Direction::Down => self.moving_down = moving,
            Direction::Left => self.moving_left = moving,
            Direction::Right => self.moving_right = moving,
        }
    }

    /// Moves the float position by `speed` along every flagged direction that
    /// is not blocked by `screen`, then truncates it into the bounding box.
    pub fn update(&mut self, screen: &Rect) {
        if self.moving_right && self.can_move(Direction::Right, screen) {
            self.x += self.speed;
        }
        if self.moving_left && self.can_move(Direction::Left, screen) {
            self.x -= self.speed;
        }
        if self.moving_down && self.can_move(Direction::Down, screen) {
            self.y += self.speed;
        }
        if self.moving_up && self.can_move(Direction::Up, screen) {
            self.y -= self.speed;
        }

        self.rect.x = self.x as i32;
        self.rect.y = self.y as i32;
    }

    fn can_move(&self, direction: Direction, screen: &Rect) -> bool {
        match self.boundary {
            BoundaryCheck::Projected => {
                let (w, h) = (self.rect.w as f32, self.rect.h as f32);
                match direction {
                    Direction::Right => self.x + self.speed + w <= screen.right() as f32,
                    Direction::Left => self.x - self.speed >= screen.left() as f32,
                    Direction::Down => self.y + self.speed + h <= screen.bottom() as f32,
                    Direction::Up => self.y - self.speed >= screen.top() as f32,
                }
            }
            BoundaryCheck::LastFrame => match direction {
                Direction::Right => self.rect.right() < screen.right(),
                Direction::Left => self.rect.left() > screen.left(),
                Direction::Down => self.rect.bottom() < screen.bottom(),
                Direction::Up => self.rect.top() > screen.top(),
            },
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_sprite(&self.sprite, self.rect);
    }
}
