//! Grayscale pixel matrices.

use std::path::Path;

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage};

use crate::error::{ImageImportError, Result};

/// An 8-bit grayscale image in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMatrix {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl GrayMatrix {
    /// Wraps a row-major pixel buffer.
    ///
    /// # Errors
    ///
    /// Fails when either side is zero or the buffer length is not
    /// `width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(ImageImportError::EmptyImage);
        }
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ImageImportError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds a matrix by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u8) -> Result<Self> {
        let mut pixels = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self::new(width, height, pixels)
    }

    /// Decodes an encoded image (PNG, JPEG, GIF, BMP) and converts it to luma.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img)
    }

    /// Reads and decodes an image file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| ImageImportError::io(path, source))?;
        Self::from_bytes(&bytes)
    }

    /// Converts any decoded image to 8-bit grayscale.
    pub fn from_image(img: &DynamicImage) -> Result<Self> {
        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();
        Self::new(width, height, luma.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Intensity at `(x, y)`, or `None` outside the image.
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Mean intensity over all pixels.
    pub fn mean(&self) -> f64 {
        let total: u64 = self.pixels.iter().map(|&p| u64::from(p)).sum();
        total as f64 / self.pixels.len() as f64
    }

    /// Resamples to `width × height` by nearest-neighbor sampling.
    pub fn resize_nearest(&self, width: u32, height: u32) -> Result<Self> {
        let source = self.to_gray_image()?;
        let resized = imageops::resize(&source, width, height, FilterType::Nearest);
        Self::new(width, height, resized.into_raw())
    }

    fn to_gray_image(&self) -> Result<GrayImage> {
        GrayImage::from_raw(self.width, self.height, self.pixels.clone()).ok_or(
            ImageImportError::BufferSize {
                expected: self.width as usize * self.height as usize,
                actual: self.pixels.len(),
            },
        )
    }
}
