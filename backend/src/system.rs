use super::error::BackendError;
use super::glutils::{delete_texture, log_opengl_info, upload_texture};
use super::math::{Color, Rect};
use super::platform::{IoEvents, Key, Platform, Surface};
use super::sprite::{Sprite, SpriteRenderer};
use gl;
use sdl2;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::video::GLProfile;
use std::path::Path;
use std::time::{Duration, Instant};

pub struct System {
    pub w: usize,
    pub h: usize,
    // field order is drop order: GL objects go before the context
    renderer: SpriteRenderer,
    textures: Vec<u32>,
    event_pump: sdl2::EventPump,
    frame_budget: Option<Duration>,
    last_frame: Instant,
    pub gl_ctx: sdl2::video::GLContext,
    pub window: sdl2::video::Window,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub sdl_context: sdl2::Sdl,
}

impl System {
    /// Opens a `w` x `h` window with an OpenGL 3.3 core context.
    /// `fps_cap` of 0 presents frames as fast as the loop runs.
    pub fn new(w: usize, h: usize, title: &str, fps_cap: u32) -> Result<System, BackendError> {
        let sdl_context = sdl2::init().map_err(BackendError::Sdl)?;
        let video_subsystem = sdl_context.video().map_err(BackendError::Sdl)?;

        let gl_attr = video_subsystem.gl_attr();
        gl_attr.set_context_profile(GLProfile::Core);
        gl_attr.set_context_version(3, 3);

        let window = video_subsystem
            .window(title, w as u32, h as u32)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| BackendError::Window(e.to_string()))?;

        let gl_ctx = window.gl_create_context().map_err(BackendError::Window)?;
        gl::load_with(|name| video_subsystem.gl_get_proc_address(name) as *const _);

        debug_assert_eq!(gl_attr.context_profile(), GLProfile::Core);
        debug_assert_eq!(gl_attr.context_version(), (3, 3));
        log::info!("window {w} x {h} \"{title}\" created");
        log_opengl_info();

        unsafe {
            gl::Viewport(0, 0, w as i32, h as i32);
            gl::Enable(gl::BLEND);
            gl::BlendFunc(gl::SRC_ALPHA, gl::ONE_MINUS_SRC_ALPHA);
        }

        let renderer = SpriteRenderer::new(w as u32, h as u32)?;
        let event_pump = sdl_context.event_pump().map_err(BackendError::Sdl)?;
        let frame_budget = match fps_cap {
            0 => None,
            fps => Some(Duration::from_secs(1) / fps),
        };

        Ok(System {
            w,
            h,
            renderer,
            textures: Vec::new(),
            event_pump,
            frame_budget,
            last_frame: Instant::now(),
            gl_ctx,
            window,
            video_subsystem,
            sdl_context,
        })
    }
}

impl Surface for System {
    fn screen_rect(&self) -> Rect {
        Rect::from_size(self.w as i32, self.h as i32)
    }

    fn clear_screen(&mut self, color: Color) {
        let (r, g, b) = color.to_gl();
        unsafe {
            gl::ClearColor(r, g, b, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);
        }
    }

    fn draw_sprite(&mut self, sprite: &Sprite, at: Rect) {
        self.renderer.draw(sprite, at);
    }
}

impl Platform for System {
    fn poll_events(&mut self) -> Vec<IoEvents> {
        self.event_pump.poll_iter().filter_map(translate).collect()
    }

    fn load_sprite(&mut self, path: &Path) -> Result<Sprite, BackendError> {
        let img = resources::image::load(path)?;
        let texture = upload_texture(&img);
        self.textures.push(texture);
        log::info!("loaded {path:?} ({} x {})", img.width, img.height);
        Ok(Sprite {
            texture,
            width: img.width as u32,
            height: img.height as u32,
        })
    }

    fn draw_to_screen(&mut self) {
        self.window.gl_swap_window();
        if let Some(budget) = self.frame_budget {
            let spent = self.last_frame.elapsed();
            if spent < budget {
                std::thread::sleep(budget - spent);
            }
        }
        self.last_frame = Instant::now();
    }
}

impl Drop for System {
    fn drop(&mut self) {
        for texture in self.textures.drain(..) {
            delete_texture(texture);
        }
    }
}

fn translate(event: Event) -> Option<IoEvents> {
    match event {
        Event::Quit { .. } => Some(IoEvents::Quit),
        Event::KeyDown {
            keycode: Some(k), ..
        } => Some(IoEvents::KeyDown(map_keycode(k))),
        Event::KeyUp {
            keycode: Some(k), ..
        } => Some(IoEvents::KeyUp(map_keycode(k))),
        _ => None,
    }
}

fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Q => Key::Q,
        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_and_quit_key_are_mapped() {
        assert_eq!(map_keycode(Keycode::Up), Key::Up);
        assert_eq!(map_keycode(Keycode::Down), Key::Down);
        assert_eq!(map_keycode(Keycode::Left), Key::Left);
        assert_eq!(map_keycode(Keycode::Right), Key::Right);
        assert_eq!(map_keycode(Keycode::Q), Key::Q);
        assert_eq!(map_keycode(Keycode::Space), Key::Other);
    }

    #[test]
    fn close_request_becomes_quit() {
        assert_eq!(translate(Event::Quit { timestamp: 0 }), Some(IoEvents::Quit));
    }
}
