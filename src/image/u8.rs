use crate::error::{ConvError, Result};

/// Borrowed 8-bit grayscale view. `stride` may exceed `w` for padded rows.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    pub w: usize,
    pub h: usize,
    pub stride: usize, // bytes between rows
    pub data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    /// Tightly packed view over `data`, checking that it holds `w * h` bytes.
    pub fn new(w: usize, h: usize, data: &'a [u8]) -> Result<Self> {
        Self::with_stride(w, h, w, data)
    }

    pub fn with_stride(w: usize, h: usize, stride: usize, data: &'a [u8]) -> Result<Self> {
        if stride < w {
            return Err(ConvError::invalid(format!(
                "stride {stride} is smaller than width {w}"
            )));
        }
        let needed = if h == 0 { 0 } else { (h - 1) * stride + w };
        if data.len() < needed {
            return Err(ConvError::invalid(format!(
                "{w}x{h} view with stride {stride} needs {needed} bytes, got {}",
                data.len()
            )));
        }
        Ok(Self { w, h, stride, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.stride + x]
    }
}

impl<'a> crate::image::traits::ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}
