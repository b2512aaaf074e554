use crate::{Canvas, Error, Result};
use image::{ExtendedColorType, codecs::jpeg};
use std::{fs, path::Path};

/// Baseline JPEG encoder with a fixed quality factor
#[derive(Clone, Copy, Debug)]
pub struct JpegEncoder {
    quality: u8,
}

impl JpegEncoder {
    /// `quality` is a factor in `[0, 1]`; values outside are clamped
    pub fn new(quality: f32) -> Self {
        let quality = if quality.is_nan() { 1.0 } else { quality };
        let quality = (quality.clamp(0.0, 1.0) * 100.0).round().max(1.0) as u8;
        Self { quality }
    }

    /// Quality on the codec's 1..=100 scale
    pub fn quality(&self) -> u8 {
        self.quality
    }

    pub fn encode(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        self.encode_rgb(canvas.width(), canvas.height(), &canvas.to_rgb())
    }

    /// Encode a row-major RGB8 buffer
    pub fn encode_rgb(&self, width: u32, height: u32, pixels: &[u8]) -> Result<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(Error::Encoding(format!(
                "no pixel data in a {width}x{height} image"
            )));
        }

        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(Error::Encoding(format!(
                "expected {expected} bytes of RGB data, got {}",
                pixels.len()
            )));
        }

        let mut out = Vec::new();
        jpeg::JpegEncoder::new_with_quality(&mut out, self.quality)
            .encode(pixels, width, height, ExtendedColorType::Rgb8)
            .map_err(|err| Error::Encoding(err.to_string()))?;

        debug!(width, height, bytes = out.len(), quality = self.quality, "encoded jpeg");
        Ok(out)
    }
}

/// Write `bytes` to `path`, replacing any previous file
pub fn write_to_file(bytes: &[u8], path: &Path) -> Result<()> {
    fs::write(path, bytes).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
