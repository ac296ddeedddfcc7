//! Procedural rocket sprite, used to produce the default `images/ship.bmp`.

use crate::bmp::BMP;
use std::io;
use std::path::Path;

pub const DEFAULT_WIDTH: usize = 50;
pub const DEFAULT_HEIGHT: usize = 80;

/// Matches the game's default background so the opaque blit blends in.
pub const BACKGROUND: [u8; 3] = [230, 230, 230];
const HULL: [u8; 3] = [120, 120, 140];
const TRIM: [u8; 3] = [200, 40, 40];
const WINDOW: [u8; 3] = [60, 140, 220];
const FLAME: [u8; 3] = [250, 160, 30];

const BODY_HALF_WIDTH: f32 = 0.18;
const NOSE_END: f32 = 0.3;
const BODY_END: f32 = 0.85;
const FIN_START: f32 = 0.6;

/// Renders a rocket pointing up into an RGB buffer, top row first.
pub fn draw_ship(width: usize, height: usize) -> Vec<u8> {
    let mut pixels = Vec::with_capacity(3 * width * height);
    let aspect = height as f32 / width as f32;
    for y in 0..height {
        let v = (y as f32 + 0.5) / height as f32;
        for x in 0..width {
            let u = (x as f32 + 0.5) / width as f32;
            pixels.extend_from_slice(&shade(u, v, aspect));
        }
    }
    pixels
}

fn shade(u: f32, v: f32, aspect: f32) -> [u8; 3] {
    let du = (u - 0.5).abs();

    let wx = u - 0.5;
    let wy = (v - 0.45) * aspect;
    if wx * wx + wy * wy < 0.08 * 0.08 {
        return WINDOW;
    }
    if v < NOSE_END {
        return if du < BODY_HALF_WIDTH * (v / NOSE_END) {
            TRIM
        } else {
            BACKGROUND
        };
    }
    if v < BODY_END && du < BODY_HALF_WIDTH {
        return HULL;
    }
    if v >= BODY_END && du < 0.1 * (1.0 - (v - BODY_END) / 0.15) {
        return FLAME;
    }
    if v >= FIN_START && v < 0.95 && du < BODY_HALF_WIDTH + 0.2 * ((v - FIN_START) / 0.35) {
        return TRIM;
    }
    BACKGROUND
}

pub fn write_ship(dst: &Path, width: usize, height: usize) -> io::Result<()> {
    let pixels = draw_ship(width, height);
    BMP::from_mem(width, height, &pixels)?.to_file(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(pixels: &[u8], width: usize, x: usize, y: usize) -> [u8; 3] {
        let i = 3 * (y * width + x);
        [pixels[i], pixels[i + 1], pixels[i + 2]]
    }

    #[test]
    fn corners_are_background() {
        let (w, h) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let pixels = draw_ship(w, h);
        assert_eq!(pixels.len(), 3 * w * h);
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(at(&pixels, w, x, y), BACKGROUND, "corner ({x}, {y})");
        }
    }

    #[test]
    fn hull_window_and_flame_are_on_the_axis() {
        let (w, h) = (DEFAULT_WIDTH, DEFAULT_HEIGHT);
        let pixels = draw_ship(w, h);
        assert_eq!(at(&pixels, w, w / 2, (h as f32 * 0.45) as usize), WINDOW);
        assert_eq!(at(&pixels, w, w / 2, (h as f32 * 0.7) as usize), HULL);
        assert_eq!(at(&pixels, w, w / 2, (h as f32 * 0.88) as usize), FLAME);
    }

    #[test]
    fn written_ship_decodes_with_requested_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ship.bmp");
        write_ship(&path, 31, 47).unwrap();

        let img = crate::image::load(&path).unwrap();
        assert_eq!((img.width, img.height), (31, 47));
        assert_eq!(img.pixel(0, 0), [230, 230, 230, 255]);
    }
}
