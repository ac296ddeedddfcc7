use gl::{types::*, *};
use resources::image::Image;
use std::ffi::CStr;

pub fn check_gl_err() {
    let err = unsafe { gl::GetError() };
    if err == gl::NO_ERROR {
        return;
    }
    panic!("error: {:?}", err);
}

fn gl_string(name: GLenum) -> String {
    let ptr = unsafe { gl::GetString(name) };
    if ptr.is_null() {
        return "<unknown>".to_string();
    }
    unsafe { CStr::from_ptr(ptr.cast()) }
        .to_string_lossy()
        .into_owned()
}

pub fn log_opengl_info() {
    log::info!(
        "OpenGL {} ({})",
        gl_string(VERSION),
        gl_string(RENDERER)
    );
    let mut mtu: i32 = 0;
    unsafe { gl::GetIntegerv(MAX_TEXTURE_SIZE, &mut mtu) };
    log::debug!("MAX_TEXTURE_SIZE = {}", mtu);
}

pub fn gl_buffer_data_arr_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_buffer_data_element_stat<T: Sized>(buffer: &[T]) {
    unsafe {
        gl::BufferData(
            ELEMENT_ARRAY_BUFFER,
            std::mem::size_of_val(buffer) as isize,
            buffer.as_ptr().cast(),
            STATIC_DRAW,
        )
    };
}

pub fn gl_vertex_attrib_ptr_enab(index: u32, size: u32, stride: u32, pointer: usize) {
    unsafe {
        gl::VertexAttribPointer(
            index,
            size as i32,
            FLOAT,
            FALSE,
            (stride as usize * std::mem::size_of::<f32>()) as i32,
            (pointer * std::mem::size_of::<f32>()) as *const _,
        )
    };
    unsafe { gl::EnableVertexAttribArray(index) };
}

/// Sprites are drawn 1:1 in pixel space, so no filtering and no wrapping.
const SPRITE_TEXTURE_PARAMS: [(GLenum, GLenum, GLenum); 4] = [
    (TEXTURE_2D, TEXTURE_WRAP_S, CLAMP_TO_EDGE),
    (TEXTURE_2D, TEXTURE_WRAP_T, CLAMP_TO_EDGE),
    (TEXTURE_2D, TEXTURE_MIN_FILTER, NEAREST),
    (TEXTURE_2D, TEXTURE_MAG_FILTER, NEAREST),
];

/// Uploads a decoded RGBA image and returns the texture name.
pub fn upload_texture(img: &Image) -> u32 {
    upload_texture_params(img, &SPRITE_TEXTURE_PARAMS)
}

pub fn upload_texture_params(img: &Image, params: &[(GLenum, GLenum, GLenum)]) -> u32 {
    let mut texture = 0;
    unsafe { gl::GenTextures(1, &mut texture) };
    unsafe { gl::BindTexture(TEXTURE_2D, texture) };

    for (t, n, p) in params {
        unsafe { gl::TexParameteri(*t, *n, *p as i32) };
    }

    unsafe {
        gl::PixelStorei(UNPACK_ALIGNMENT, 1);
        gl::TexImage2D(
            TEXTURE_2D,
            0,
            RGBA as i32,
            img.width as i32,
            img.height as i32,
            0,
            RGBA,
            UNSIGNED_BYTE,
            img.data.as_ptr().cast(),
        )
    };
    check_gl_err();

    texture
}

pub fn delete_texture(texture: u32) {
    unsafe { gl::DeleteTextures(1, &texture) };
}
