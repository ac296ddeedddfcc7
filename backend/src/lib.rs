pub mod error;
pub mod glutils;
pub mod math;
pub mod platform;
pub mod shaders;
pub mod sprite;
pub mod system;

pub use error::BackendError;
