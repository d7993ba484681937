use super::validate;
use crate::border::extend;
use crate::error::Result;
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};
use crate::kernel::Kernel;

/// Reference convolution: row-major nested loops with an `f32` accumulator.
///
/// The sum is stored with C-style narrowing (truncate toward zero, then keep
/// the low eight bits), so sums outside `[0, 256)` wrap instead of clamping.
pub fn convolve_sequential(src: &ImageU8<'_>, kernel: &Kernel) -> Result<GrayImageU8> {
    validate(src, kernel)?;
    let ksize = kernel.ksize();
    let ext = extend(src, kernel.half_width());
    log::debug!(
        "convolve_sequential: {}x{} image, {ksize}x{ksize} kernel",
        src.w,
        src.h
    );

    let mut dst = GrayImageU8::zeros(src.w, src.h);
    for (y, dst_row) in dst.rows_mut().enumerate() {
        for (x, out) in dst_row.iter_mut().enumerate() {
            let mut value = 0.0f32;
            for k in 0..ksize {
                let window = &ext.row(y + k)[x..x + ksize];
                for (&w, &px) in kernel.row(k).iter().zip(window) {
                    value += w * f32::from(px);
                }
            }
            *out = truncate_u8(value);
        }
    }
    Ok(dst)
}

/// Truncate toward zero and wrap modulo 256. NaN maps to 0.
#[inline]
pub(crate) fn truncate_u8(value: f32) -> u8 {
    value as i32 as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncation_drops_the_fraction() {
        assert_eq!(truncate_u8(99.999), 99);
        assert_eq!(truncate_u8(0.7), 0);
        assert_eq!(truncate_u8(-0.7), 0);
    }

    #[test]
    fn out_of_range_values_wrap() {
        assert_eq!(truncate_u8(256.0), 0);
        assert_eq!(truncate_u8(300.5), 44);
        assert_eq!(truncate_u8(-1.0), 255);
        assert_eq!(truncate_u8(f32::NAN), 0);
    }
}
