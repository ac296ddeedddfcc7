//! Image decoding for sprite assets.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Decoded image, RGBA, top row first.
#[derive(Debug, Clone)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Image {
    pub const DEPTH: usize = 4;

    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        let i = (y * self.width + x) * Self::DEPTH;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

#[derive(Error, Debug)]
pub enum ImageError {
    #[error("image {0:?} not found")]
    NotFound(PathBuf),

    #[error("loading image {path:?} error: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("image {path:?} not supported: {reason}")]
    Unsupported { path: PathBuf, reason: String },
}

/// Loads an image file and expands it to 8-bit RGBA.
pub fn load(filename: &Path) -> Result<Image, ImageError> {
    if !filename.is_file() {
        return Err(ImageError::NotFound(filename.to_path_buf()));
    }

    unsafe {
        stb_image::stb_image::stbi_set_flip_vertically_on_load(0);
    }
    let img = match stb_image::image::load_with_depth(filename, Image::DEPTH, false) {
        stb_image::image::LoadResult::ImageF32(_) => {
            return Err(ImageError::Unsupported {
                path: filename.to_path_buf(),
                reason: "32-bit images not supported here".to_string(),
            });
        }
        stb_image::image::LoadResult::ImageU8(img) => img,
        stb_image::image::LoadResult::Error(e) => {
            return Err(ImageError::Decode {
                path: filename.to_path_buf(),
                reason: e,
            })
        }
    };

    if img.width == 0 || img.height == 0 || img.data.len() != img.width * img.height * Image::DEPTH
    {
        return Err(ImageError::Decode {
            path: filename.to_path_buf(),
            reason: format!(
                "{} x {} image came back with {} bytes",
                img.width,
                img.height,
                img.data.len()
            ),
        });
    }

    log::debug!("{filename:?}: {} x {}", img.width, img.height);
    Ok(Image {
        width: img.width,
        height: img.height,
        data: img.data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bmp::BMP;
    use std::io::Write;

    #[test]
    fn loads_bmp_written_by_bmp_writer() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("two.bmp");
        // 2x2: red, green / blue, white
        let pixels = [
            255, 0, 0, 0, 255, 0, //
            0, 0, 255, 255, 255, 255,
        ];
        BMP::from_mem(2, 2, &pixels).unwrap().to_file(&path).unwrap();

        let img = load(&path).unwrap();
        assert_eq!((img.width, img.height), (2, 2));
        assert_eq!(img.pixel(0, 0), [255, 0, 0, 255]);
        assert_eq!(img.pixel(1, 0), [0, 255, 0, 255]);
        assert_eq!(img.pixel(0, 1), [0, 0, 255, 255]);
        assert_eq!(img.pixel(1, 1), [255, 255, 255, 255]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("images").join("ship.bmp");
        match load(&path) {
            Err(ImageError::NotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn garbage_fails_to_decode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"definitely not an image").unwrap();
        assert!(matches!(load(file.path()), Err(ImageError::Decode { .. })));
    }
}
