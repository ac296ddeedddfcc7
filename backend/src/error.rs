pub use resources::image::ImageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Error while building OpenGL window: {0}")]
    Window(String),

    #[error("shader error: {0}")]
    Shader(String),

    #[error(transparent)]
    Image(#[from] ImageError),
}
