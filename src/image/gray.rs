//! Owned single-channel 8-bit image in row-major layout (stride == width).
//!
//! This is the buffer type every convolution consumes (through a borrowed
//! [`ImageU8`] view) and produces. Outputs are always freshly allocated.
use super::traits::{ImageView, ImageViewMut};
use super::ImageU8;
use crate::error::{ConvError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Wrap raw row-major bytes, checking that `data.len() == width * height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height {
            return Err(ConvError::invalid(format!(
                "{width}x{height} image needs {} bytes, got {}",
                width * height,
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Zero-initialized buffer of size `width × height`.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build an image by evaluating `f(x, y)` for every pixel in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> u8) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Copy a possibly strided view into an owned, tightly packed buffer.
    pub fn from_view(view: &ImageU8<'_>) -> Self {
        let mut data = Vec::with_capacity(view.w * view.h);
        for row in view.rows() {
            data.extend_from_slice(row);
        }
        Self {
            width: view.w,
            height: view.h,
            data,
        }
    }

    /// Image width in pixels (columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels (rows)
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        self.data[y * self.width + x] = v;
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            stride: self.width,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.width
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        &mut self.data[start..start + self.width]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_mismatched_length() {
        let err = GrayImageU8::new(4, 3, vec![0; 11]).unwrap_err();
        assert!(err.is_invalid_argument(), "unexpected error: {err}");
    }

    #[test]
    fn from_view_drops_row_padding() {
        let raw = [1u8, 2, 9, 3, 4, 9];
        let view = ImageU8::with_stride(2, 2, 3, &raw).unwrap();
        let owned = GrayImageU8::from_view(&view);
        assert_eq!(owned.data(), &[1, 2, 3, 4]);
        assert_eq!(owned.as_view().stride, 2);
    }

    #[test]
    fn rows_mut_visits_every_row_once() {
        let mut img = GrayImageU8::zeros(3, 4);
        for (y, row) in img.rows_mut().enumerate() {
            row.fill(y as u8);
        }
        assert_eq!(img.get(2, 3), 3);
        assert_eq!(img.rows().len(), 4);
    }
}
