use super::error::BackendError;
use super::glutils::*;
use super::math::*;
use gl::types::{GLenum, GLint};
use gl::*;
use std::ffi::{CStr, CString};

pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, BackendError> {
        let vertex_shader = Self::create(VERTEX_SHADER, "VERTEX_SHADER")?;
        if let Err(e) = Self::compile(vertex_shader, vertex_code) {
            unsafe { gl::DeleteShader(vertex_shader) };
            return Err(BackendError::Shader(format!(
                "vertex shader compilation error: {e}"
            )));
        }

        let fragment_shader = Self::create(FRAGMENT_SHADER, "FRAGMENT_SHADER")?;
        if let Err(e) = Self::compile(fragment_shader, fragment_code) {
            unsafe {
                gl::DeleteShader(vertex_shader);
                gl::DeleteShader(fragment_shader);
            }
            return Err(BackendError::Shader(format!(
                "fragment shader compilation error: {e}"
            )));
        }

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
                gl::DeleteProgram(shader_program);
            }
            return Err(BackendError::Shader(format!(
                "program link error: {}",
                String::from_utf8_lossy(&v)
            )));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    fn create(kind: GLenum, name: &str) -> Result<u32, BackendError> {
        let shader = unsafe { gl::CreateShader(kind) };
        if shader == 0 {
            return Err(BackendError::Shader(format!(
                "gl::createShader({name}) failed"
            )));
        }
        Ok(shader)
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let len = shader_code.len() as GLint;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = Vec::with_capacity(1024);
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
                v.set_len(log_len.max(0) as usize);
            }

            return Err(String::from_utf8_lossy(&v).to_string());
        }
        Ok(())
    }

    fn get_uniform_location(&self, name: &str) -> i32 {
        let c_name = CString::new(name).unwrap_or_else(|_| {
            panic!("get_uniform_location: CString::new failed for '{}'", name);
        });

        self.get_uniform_location_cstr(&c_name)
    }

    fn get_uniform_location_cstr(&self, c_name: &CStr) -> i32 {
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err();
        if location == -1 {
            let name = c_name.to_str().unwrap_or("<cstring decoding error>");
            panic!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id,
                name
            );
        }
        location
    }

    pub fn use_program(&self) {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err();
    }

    pub fn set_i32(&self, name: &str, value: i32) {
        unsafe { gl::Uniform1i(self.get_uniform_location(name), value) };
    }

    pub fn set_vec4(&self, name: &str, v0: f32, v1: f32, v2: f32, v3: f32) {
        unsafe { gl::Uniform4f(self.get_uniform_location(name), v0, v1, v2, v3) };
    }

    pub fn set_mat4fv(&self, name: &str, mat: &Mat4x4) {
        let location = self.get_uniform_location(name);
        let arr = mat.to_cols_array();
        unsafe { gl::UniformMatrix4fv(location, 1, FALSE, arr.as_ptr()) };
    }
}

impl Drop for Shaders {
    fn drop(&mut self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}
