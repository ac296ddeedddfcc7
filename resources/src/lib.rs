pub mod bmp;
pub mod image;
pub mod ship;
