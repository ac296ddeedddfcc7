use super::error::BackendError;
use super::glutils::*;
use super::math::{Mat4x4, Rect};
use super::shaders::Shaders;
use gl::*;

/// Handle to an uploaded image plus its size in pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Sprite {
    pub texture: u32,
    pub width: u32,
    pub height: u32,
}

impl Sprite {
    /// Bounding box of the image, placed at the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.width as i32, self.height as i32)
    }
}

const VERTEX_SHADER_SRC: &str = r#"#version 330 core
layout (location = 0) in vec2 a_pos;

uniform mat4 u_projection;
uniform vec4 u_rect;

out vec2 v_uv;

void main() {
    v_uv = a_pos;
    gl_Position = u_projection * vec4(u_rect.xy + a_pos * u_rect.zw, 0.0, 1.0);
}
"#;

const FRAGMENT_SHADER_SRC: &str = r#"#version 330 core
in vec2 v_uv;

uniform sampler2D u_texture;

out vec4 frag_color;

void main() {
    frag_color = texture(u_texture, v_uv);
}
"#;

// unit quad, scaled and moved by u_rect
const QUAD_VERTICES: [f32; 8] = [
    0.0, 0.0, //
    1.0, 0.0, //
    1.0, 1.0, //
    0.0, 1.0,
];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Draws textured quads in pixel coordinates.
pub struct SpriteRenderer {
    shaders: Shaders,
    vao: u32,
    vbo: u32,
    ebo: u32,
}

impl SpriteRenderer {
    pub fn new(screen_w: u32, screen_h: u32) -> Result<SpriteRenderer, BackendError> {
        let shaders = Shaders::from_str(VERTEX_SHADER_SRC, FRAGMENT_SHADER_SRC)?;

        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&QUAD_VERTICES);
        unsafe { gl::BindBuffer(ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(&QUAD_INDICES);
        gl_vertex_attrib_ptr_enab(0, 2, 2, 0);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err();

        shaders.use_program();
        shaders.set_mat4fv(
            "u_projection",
            &Mat4x4::screen_projection(screen_w, screen_h),
        );
        shaders.set_i32("u_texture", 0);

        Ok(SpriteRenderer {
            shaders,
            vao,
            vbo,
            ebo,
        })
    }

    pub fn draw(&self, sprite: &Sprite, at: Rect) {
        self.shaders.use_program();
        self.shaders
            .set_vec4("u_rect", at.x as f32, at.y as f32, at.w as f32, at.h as f32);
        unsafe {
            gl::ActiveTexture(TEXTURE0);
            gl::BindTexture(TEXTURE_2D, sprite.texture);
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                TRIANGLES,
                QUAD_INDICES.len() as i32,
                UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
    }
}

impl Drop for SpriteRenderer {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.ebo);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sprite_rect_sits_at_origin() {
        let sprite = Sprite {
            texture: 7,
            width: 50,
            height: 80,
        };
        assert_eq!(sprite.rect(), Rect::new(0, 0, 50, 80));
    }

    #[test]
    fn quad_indices_cover_two_triangles() {
        assert!(QUAD_INDICES.iter().all(|&i| (i as usize) < QUAD_VERTICES.len() / 2));
        assert_eq!(QUAD_INDICES.len(), 6);
    }
}
