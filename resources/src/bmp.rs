use std::io::{self, Write};
use std::path::Path;

const FILE_HEADER_SIZE: u32 = 14;
const INFO_HEADER_SIZE: u32 = 40;

#[derive(Debug, Copy, Clone)]
pub struct BmpFHEAD {
    pub bf_type: u16,
    pub bf_size: u32,
    pub bf_reserved: u32,
    pub bf_off_bits: u32,
}

impl BmpFHEAD {
    pub fn from(pixel_array_size: usize) -> Self {
        Self {
            bf_type: 0x4d42,
            bf_size: FILE_HEADER_SIZE + INFO_HEADER_SIZE + pixel_array_size as u32,
            bf_reserved: 0,
            bf_off_bits: FILE_HEADER_SIZE + INFO_HEADER_SIZE,
        }
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bf_type.to_le_bytes())?;
        out.write_all(&self.bf_size.to_le_bytes())?;
        out.write_all(&self.bf_reserved.to_le_bytes())?;
        out.write_all(&self.bf_off_bits.to_le_bytes())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct BmpIHEAD {
    pub bi_size: u32,
    pub bi_width: i32,
    pub bi_height: i32,
    pub bi_planes: u16,
    pub bi_bit_count: u16,
    pub bi_compression: u32,
    pub bi_size_image: u32,
    pub bi_x_pels_per_meter: i32,
    pub bi_y_pels_per_meter: i32,
    pub bi_clr_used: u32,
    pub bi_clr_important: u32,
}

impl BmpIHEAD {
    /// Bottom-up 24-bit header; positive height is what every decoder accepts.
    pub fn from(width: usize, height: usize, pixel_array_size: usize) -> Self {
        Self {
            bi_size: INFO_HEADER_SIZE,
            bi_width: width as i32,
            bi_height: height as i32,
            bi_planes: 1,
            bi_bit_count: 24,
            bi_compression: 0,
            bi_size_image: pixel_array_size as u32,
            bi_x_pels_per_meter: 2835,
            bi_y_pels_per_meter: 2835,
            bi_clr_used: 0,
            bi_clr_important: 0,
        }
    }

    fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.bi_size.to_le_bytes())?;
        out.write_all(&self.bi_width.to_le_bytes())?;
        out.write_all(&self.bi_height.to_le_bytes())?;
        out.write_all(&self.bi_planes.to_le_bytes())?;
        out.write_all(&self.bi_bit_count.to_le_bytes())?;
        out.write_all(&self.bi_compression.to_le_bytes())?;
        out.write_all(&self.bi_size_image.to_le_bytes())?;
        out.write_all(&self.bi_x_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_y_pels_per_meter.to_le_bytes())?;
        out.write_all(&self.bi_clr_used.to_le_bytes())?;
        out.write_all(&self.bi_clr_important.to_le_bytes())
    }
}

/// A 24-bit bitmap backed by borrowed RGB pixels, top row first.
pub struct BMP<'a> {
    pub width: usize,
    pub height: usize,
    pub pixels: &'a [u8],
}

impl<'a> BMP<'a> {
    pub fn from_mem(width: usize, height: usize, pixels: &'a [u8]) -> io::Result<Self> {
        if pixels.len() != 3 * width * height {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "bmp: {width} x {height} needs {} bytes of RGB data, got {}",
                    3 * width * height,
                    pixels.len()
                ),
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let row_size = (3 * self.width + 3) & !3; // Row size must be padded to 4 bytes
        let pixel_array_size = row_size * self.height;
        BmpFHEAD::from(pixel_array_size).write_to(out)?;
        BmpIHEAD::from(self.width, self.height, pixel_array_size).write_to(out)?;

        let padding = vec![0u8; row_size - self.width * 3];
        let mut row = Vec::with_capacity(row_size);
        // bottom-up, BGR
        for y in (0..self.height).rev() {
            row.clear();
            let start = y * self.width * 3;
            for rgb in self.pixels[start..start + self.width * 3].chunks_exact(3) {
                row.extend_from_slice(&[rgb[2], rgb[1], rgb[0]]);
            }
            row.extend_from_slice(&padding);
            out.write_all(&row)?;
        }
        Ok(())
    }

    pub fn to_file(&self, filename: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(std::fs::File::create(filename)?);
        self.write_to(&mut file)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_describe_padded_rows() {
        // 3 pixels wide -> 9 bytes per row, padded to 12
        let pixels = vec![0u8; 3 * 3 * 2];
        let bmp = BMP::from_mem(3, 2, &pixels).unwrap();
        let mut out = Vec::new();
        bmp.write_to(&mut out).unwrap();

        assert_eq!(out.len(), 14 + 40 + 12 * 2);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(u32::from_le_bytes([out[2], out[3], out[4], out[5]]), out.len() as u32);
        assert_eq!(u32::from_le_bytes([out[10], out[11], out[12], out[13]]), 54);
        assert_eq!(i32::from_le_bytes([out[22], out[23], out[24], out[25]]), 2);
    }

    #[test]
    fn rows_are_stored_bottom_up_as_bgr() {
        // top row red, bottom row blue
        let pixels = [255, 0, 0, 0, 0, 255];
        let bmp = BMP::from_mem(1, 2, &pixels).unwrap();
        let mut out = Vec::new();
        bmp.write_to(&mut out).unwrap();

        assert_eq!(&out[54..57], &[255, 0, 0]); // blue, first stored row
        assert_eq!(&out[58..61], &[0, 0, 255]); // red
    }

    #[test]
    fn rejects_mismatched_pixel_buffer() {
        let pixels = [0u8; 5];
        assert!(BMP::from_mem(2, 1, &pixels).is_err());
    }
}
