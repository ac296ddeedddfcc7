use std::ops::Index;

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline(always)]
    pub fn dot(&self, o: &Vec4) -> f32 {
        self.x * o.x + self.y * o.y + self.z * o.z + self.w * o.w
    }
}

impl Index<usize> for Vec4 {
    type Output = f32;
    #[inline(always)]
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("Vec4 index {i} out of range"),
        }
    }
}

/// Column-major, as OpenGL expects it.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat4x4 {
    pub c0: Vec4,
    pub c1: Vec4,
    pub c2: Vec4,
    pub c3: Vec4,
}

impl Mat4x4 {
    pub fn identity() -> Self {
        Self {
            c0: Vec4::new(1.0, 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 1.0, 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, 1.0, 0.0),
            c3: Vec4::new(0.0, 0.0, 0.0, 1.0),
        }
    }

    /// Orthographic projection, same parameters as glOrtho.
    pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self {
            c0: Vec4::new(2.0 / (right - left), 0.0, 0.0, 0.0),
            c1: Vec4::new(0.0, 2.0 / (top - bottom), 0.0, 0.0),
            c2: Vec4::new(0.0, 0.0, -2.0 / (far - near), 0.0),
            c3: Vec4::new(
                -(right + left) / (right - left),
                -(top + bottom) / (top - bottom),
                -(far + near) / (far - near),
                1.0,
            ),
        }
    }

    /// Pixel space to clip space: origin top-left, y grows downwards.
    pub fn screen_projection(width: u32, height: u32) -> Self {
        Self::ortho(0.0, width as f32, height as f32, 0.0, -1.0, 1.0)
    }

    pub fn row(&self, r: usize) -> Vec4 {
        Vec4::new(self.c0[r], self.c1[r], self.c2[r], self.c3[r])
    }

    pub fn transform(&self, v: Vec4) -> Vec4 {
        Vec4::new(
            self.row(0).dot(&v),
            self.row(1).dot(&v),
            self.row(2).dot(&v),
            self.row(3).dot(&v),
        )
    }

    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut arr = [0.0; 16];
        for (i, c) in [self.c0, self.c1, self.c2, self.c3].iter().enumerate() {
            for r in 0..4 {
                arr[i * 4 + r] = c[r];
            }
        }
        arr
    }
}

/// Integer, screen-aligned rectangle. `right` and `bottom` are exclusive.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: i32, h: i32) -> Self {
        Self::new(0, 0, w, h)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn center(&self) -> (i32, i32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }

    pub fn set_center(&mut self, (cx, cy): (i32, i32)) {
        self.x = cx - self.w / 2;
        self.y = cy - self.h / 2;
    }

    pub const fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.right() <= self.right()
            && other.top() >= self.top()
            && other.bottom() <= self.bottom()
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_gl(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10, 20, 50, 81);
        assert_eq!((r.left(), r.right(), r.top(), r.bottom()), (10, 60, 20, 101));
        assert_eq!(r.center(), (35, 60));
    }

    #[test]
    fn set_center_round_trips_for_odd_sizes() {
        let screen = Rect::from_size(1200, 800);
        for (w, h) in [(50, 80), (51, 81), (1, 1)] {
            let mut r = Rect::from_size(w, h);
            r.set_center(screen.center());
            assert_eq!(r.center(), screen.center(), "{w} x {h}");
        }
    }

    #[test]
    fn contains_rect_allows_flush_edges() {
        let screen = Rect::from_size(100, 100);
        assert!(screen.contains_rect(&Rect::new(0, 0, 100, 100)));
        assert!(screen.contains_rect(&Rect::new(90, 50, 10, 10)));
        assert!(!screen.contains_rect(&Rect::new(91, 50, 10, 10)));
        assert!(!screen.contains_rect(&Rect::new(-1, 0, 10, 10)));
    }

    #[test]
    fn screen_projection_maps_corners_to_clip_space() {
        let p = Mat4x4::screen_projection(1200, 800);
        let top_left = p.transform(Vec4::new(0.0, 0.0, 0.0, 1.0));
        let bottom_right = p.transform(Vec4::new(1200.0, 800.0, 0.0, 1.0));
        let center = p.transform(Vec4::new(600.0, 400.0, 0.0, 1.0));

        assert_relative_eq!(top_left.x, -1.0);
        assert_relative_eq!(top_left.y, 1.0);
        assert_relative_eq!(bottom_right.x, 1.0);
        assert_relative_eq!(bottom_right.y, -1.0);
        assert_relative_eq!(center.x, 0.0);
        assert_relative_eq!(center.y, 0.0);
        assert_relative_eq!(center.w, 1.0);
    }

    #[test]
    fn cols_array_is_column_major() {
        let p = Mat4x4::screen_projection(200, 100);
        let arr = p.to_cols_array();
        assert_relative_eq!(arr[0], 0.01);
        assert_relative_eq!(arr[5], -0.02);
        assert_relative_eq!(arr[12], -1.0);
        assert_relative_eq!(arr[13], 1.0);
        assert_relative_eq!(arr[15], 1.0);
        assert_eq!(Mat4x4::identity().to_cols_array()[10], 1.0);
    }

    #[test]
    fn color_to_gl() {
        let (r, g, b) = Color::rgb(255, 0, 51).to_gl();
        assert_relative_eq!(r, 1.0);
        assert_relative_eq!(g, 0.0);
        assert_relative_eq!(b, 0.2);
    }
}
