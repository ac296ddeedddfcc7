use crate::config::Settings;
use crate::error::GameError;
use crate::rocket::{Direction, Rocket};
use backend::math::Color;
use backend::platform::{IoEvents, Key, Platform};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

/// Owns the window and the rocket and runs the input -> update -> render loop.
pub struct RocketGame<P: Platform> {
    platform: P,
    rocket: Rocket,
    bg_color: Color,
    state: LoopState,
}

impl<P: Platform> RocketGame<P> {
    pub fn new(mut platform: P, settings: &Settings) -> Result<Self, GameError> {
        let sprite = platform.load_sprite(&settings.image)?;
        let rocket = Rocket::new(
            sprite,
            platform.screen_rect(),
            settings.speed,
            settings.boundary,
        );
        log::debug!("rocket starts at {:?}", rocket.rect());
        Ok(Self {
            platform,
            rocket,
            bg_color: settings.background_color(),
            state: LoopState::Running,
        })
    }

    /// Runs until a quit event arrives.
    pub fn run(&mut self) {
        let mut ticks: u64 = 0;
        while self.tick() == LoopState::Running {
            ticks += 1;
        }
        log::info!("quit after {ticks} frames");
    }

    /// One iteration of the main loop. Does nothing once terminated.
    pub fn tick(&mut self) -> LoopState {
        if self.state == LoopState::Terminated {
            return self.state;
        }

        self.check_events();
        if self.state == LoopState::Terminated {
            return self.state;
        }

        let screen = self.platform.screen_rect();
        self.rocket.update(&screen);
        self.update_screen();
        self.state
    }

    fn check_events(&mut self) {
        for event in self.platform.poll_events() {
            match event {
                IoEvents::Quit => self.state = LoopState::Terminated,
                IoEvents::KeyDown(key) => self.check_keydown_events(key),
                IoEvents::KeyUp(key) => self.check_keyup_events(key),
            }
            if self.state == LoopState::Terminated {
                log::info!("quit requested");
                return;
            }
        }
    }

    fn check_keydown_events(&mut self, key: Key) {
        log::trace!("key down {key:?}");
        match key {
            Key::Q => self.state = LoopState::Terminated,
            key => {
                if let Some(direction) = direction_of(key) {
                    self.rocket.set_moving(direction, true);
                }
            }
        }
    }

    fn check_keyup_events(&mut self, key: Key) {
        log::trace!("key up {key:?}");
        if let Some(direction) = direction_of(key) {
            self.rocket.set_moving(direction, false);
        }
    }

    fn update_screen(&mut self) {
        self.platform.clear_screen(self.bg_color);
        self.rocket.render(&mut self.platform);
        self.platform.draw_to_screen();
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn rocket(&self) -> &Rocket {
        &self.rocket
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }
}

fn direction_of(key: Key) -> Option<Direction> {
    match key {
        Key::Up => Some(Direction::Up),
        Key::Down => Some(Direction::Down),
        Key::Left => Some(Direction::Left),
        Key::Right => Some(Direction::Right),
        Key::Q | Key::Other => None,
    }
}
